use std::fmt;

use thiserror::Error;

/// A validated bot token.
///
/// Rules:
/// 1. Must not be empty.
/// 2. Must not contain whitespace.
/// 3. Must not contain `/`, `?` or `#`, which would change the shape of the
///    `bot<TOKEN>/` path segment.
///
/// The `Debug` output never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("bot token cannot be empty")]
    Empty,
    #[error("bot token must not contain whitespace")]
    Whitespace,
    #[error("bot token contains invalid character: '{0}'")]
    InvalidCharacter(char),
}

impl BotToken {
    /// Creates a new token from anything that can turn into a String.
    pub fn new<S: Into<String>>(token: S) -> Result<Self, TokenError> {
        let s = token.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    fn validate(s: &str) -> Result<(), TokenError> {
        if s.is_empty() {
            return Err(TokenError::Empty);
        }

        for c in s.chars() {
            if c.is_whitespace() {
                return Err(TokenError::Whitespace);
            }
            if matches!(c, '/' | '?' | '#') {
                return Err(TokenError::InvalidCharacter(c));
            }
        }

        Ok(())
    }

    /// Returns the raw secret.
    ///
    /// Only the URL builder should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}

impl TryFrom<String> for BotToken {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BotToken {
    type Error = TokenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_creation() {
        assert!(BotToken::new("123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11").is_ok());
        assert!(BotToken::new("x").is_ok());
        assert!(BotToken::new(String::from("42:token")).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(BotToken::new(""), Err(TokenError::Empty));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(BotToken::new("123 456"), Err(TokenError::Whitespace));
        assert_eq!(BotToken::new("123456\n"), Err(TokenError::Whitespace));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(BotToken::new("12/34"), Err(TokenError::InvalidCharacter('/')));
        assert_eq!(BotToken::new("12?34"), Err(TokenError::InvalidCharacter('?')));
        assert_eq!(BotToken::new("12#34"), Err(TokenError::InvalidCharacter('#')));
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = BotToken::new("123456:secret").unwrap();
        let rendered = format!("{token:?}");
        assert_eq!(rendered, "BotToken(***)");
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_try_from() {
        let token: BotToken = "42:abc".try_into().unwrap();
        assert_eq!(token.expose(), "42:abc");
    }
}
