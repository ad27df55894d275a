//! The single error kind reported by failing checks

use thiserror::Error;

/// A failed check and the message to show for it.
///
/// This is the only error kind in the crate. A check that cannot even
/// evaluate (for example because its pattern is malformed) reports one of
/// these too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[error("{message}")]
pub struct CheckError {
    message: String,
}

impl CheckError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for CheckError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for CheckError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl PartialEq<str> for CheckError {
    fn eq(&self, other: &str) -> bool {
        self.message == other
    }
}

impl PartialEq<&str> for CheckError {
    fn eq(&self, other: &&str) -> bool {
        self.message == *other
    }
}
