//! One conversation: transcript, composer and reply selector bundled together
//!
//! Sessions share nothing. A surface creates one per visitor and passes it to
//! every handler; dropping it discards the conversation.

use rand::rngs::StdRng;
use rand::Rng;

use crate::composer::{Composer, Submission, SubmitTrigger, TriggerOutcome};
use crate::config::Config;
use crate::error::{SelectorError, SubmitError};
use crate::selector::ResponseSelector;
use crate::state::Turn;
use crate::transcript::Transcript;

#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    transcript: Transcript,
    composer: Composer,
    selector: ResponseSelector<R>,
}

impl Session<StdRng> {
    /// Builds a session from configuration. Fails fast on an unusable catalog.
    pub fn from_config(config: &Config) -> Result<Self, SelectorError> {
        let catalog = config.reply_catalog();
        let selector = match config.seed {
            Some(seed) => ResponseSelector::seeded(catalog, seed)?,
            None => ResponseSelector::new(catalog)?,
        };

        tracing::info!(
            replies = selector.catalog().len(),
            seeded = config.seed.is_some(),
            "session started"
        );

        Ok(Self::new(selector))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(selector: ResponseSelector<R>) -> Self {
        Self {
            transcript: Transcript::new(),
            composer: Composer::new(),
            selector,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn turns(&self) -> &[Turn] {
        self.transcript.turns()
    }

    /// Greeting view while true, message list otherwise
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn pending(&self) -> &str {
        self.composer.pending()
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.composer.set_pending(text);
    }

    pub fn can_submit(&self) -> bool {
        self.composer.can_submit()
    }

    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        self.composer
            .submit(&mut self.transcript, &mut self.selector)
    }

    pub fn trigger(&mut self, trigger: SubmitTrigger) -> TriggerOutcome {
        self.composer
            .trigger(trigger, &mut self.transcript, &mut self.selector)
    }

    pub fn selector(&self) -> &ResponseSelector<R> {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Role;

    fn session_with(replies: &[&str]) -> Session {
        let catalog = replies.iter().map(|s| s.to_string()).collect();
        Session::new(ResponseSelector::seeded(catalog, 3).unwrap())
    }

    #[test]
    fn test_scenario_single_reply() {
        let mut session = session_with(&["ok"]);
        assert!(session.is_empty());

        session.set_pending("hello");
        session.submit().unwrap();

        assert_eq!(session.turns(), &[Turn::user("hello"), Turn::assistant("ok")]);
        assert_eq!(session.pending(), "");
        assert!(!session.is_empty());
    }

    #[test]
    fn test_scenario_whitespace_submit() {
        let mut session = session_with(&["ok"]);
        session.set_pending("   ");

        assert_eq!(session.submit(), Err(SubmitError::EmptyInput));
        assert!(session.is_empty());
        assert_eq!(session.pending(), "   ");
    }

    #[test]
    fn test_scenario_two_submissions() {
        let mut session = session_with(&["x"]);
        session.set_pending("a");
        session.submit().unwrap();
        session.set_pending("b");
        session.submit().unwrap();

        let turns = session.turns();
        assert_eq!(turns.len(), 4);
        assert_eq!(
            turns.iter().map(|t| t.role()).collect::<Vec<_>>(),
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert_eq!(turns[1].content(), "x");
        assert_eq!(turns[3].content(), "x");
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut first = session_with(&["ok"]);
        let second = session_with(&["ok"]);

        first.set_pending("only here");
        first.submit().unwrap();

        assert_eq!(first.transcript().len(), 2);
        assert!(second.is_empty());
        assert_eq!(second.pending(), "");
    }

    #[test]
    fn test_from_config_rejects_empty_catalog() {
        let config = Config {
            replies: Some(Vec::new()),
            ..Config::new()
        };
        assert_eq!(
            Session::from_config(&config).unwrap_err(),
            SelectorError::EmptyCatalog
        );
    }

    #[test]
    fn test_from_config_uses_configured_replies() {
        let config = Config {
            replies: Some(vec!["configured".to_string()]),
            seed: Some(9),
            ..Config::new()
        };
        let mut session = Session::from_config(&config).unwrap();
        session.set_pending("hi");
        let submission = session.submit().unwrap();
        assert_eq!(submission.assistant_turn.content(), "configured");
    }
}
