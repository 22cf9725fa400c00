//! Error types for the conversation core

use thiserror::Error;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Pending text is empty or only whitespace. Surfaces ignore this silently.
    #[error("nothing to submit: pending input is empty")]
    EmptyInput,
}

/// Reply catalog misconfiguration, fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("reply catalog is empty; configure at least one canned reply")]
    EmptyCatalog,

    #[error("reply catalog entry {index} is blank")]
    BlankReply { index: usize },
}
