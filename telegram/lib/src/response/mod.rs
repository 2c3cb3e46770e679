//! Response handling.
//!
//! Every Bot API answer is wrapped in the same envelope,
//! `{"ok": bool, "result": any, "description": string}`. [`ApiEnvelope`]
//! decodes it without assuming anything about the shape of `result`.

mod envelope;

pub use envelope::ApiEnvelope;
