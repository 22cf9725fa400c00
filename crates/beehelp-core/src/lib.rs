pub mod composer;
pub mod config;
pub mod error;
pub mod selector;
pub mod session;
pub mod state;
pub mod transcript;

#[cfg(test)]
mod proptests;

// Re-export main types for convenience
pub use composer::{Composer, Submission, SubmitTrigger, TriggerOutcome};
pub use config::{Config, Greeting};
pub use error::{SelectorError, SubmitError};
pub use selector::{ResponseSelector, DEFAULT_REPLIES};
pub use session::Session;
pub use state::{Role, Turn};
pub use transcript::Transcript;
