use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,
}

/// A participant email exactly as it was submitted.
///
/// The stored value is never normalized. Equality between participants goes
/// through [`Email::comparison_key`], which folds case, so `Ann@X.edu` and
/// `ann@x.edu` are the same participant while each keeps its own spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmailError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn comparison_key(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn is_same_address(&self, other: &Email) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
