//! Pending input and the submit flow
//!
//! The composer owns the text being typed. A submission validates it, appends a
//! user turn and a canned assistant turn to the transcript, then clears the
//! pending text. Submission is synchronous; there is no in-flight state.

use rand::Rng;

use crate::error::SubmitError;
use crate::selector::ResponseSelector;
use crate::state::Turn;
use crate::transcript::Transcript;

/// The two turns appended by a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub user_turn: Turn,
    pub assistant_turn: Turn,
}

/// What asked for a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// Explicit submit action (button click)
    Click,
    /// Enter key press; `shift` requests a literal newline instead
    Enter { shift: bool },
}

/// Result of routing a trigger through the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Submitted(Submission),
    /// Nothing to submit. For Enter the newline is still suppressed.
    Ignored,
    /// Not a submission; the surface applies its default (insert a newline).
    Passthrough,
}

#[derive(Debug, Clone, Default)]
pub struct Composer {
    pending: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replaces the pending text verbatim; whitespace is kept while typing.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Whether `submit` would currently succeed
    pub fn can_submit(&self) -> bool {
        !self.pending.trim().is_empty()
    }

    /// Submits the pending text.
    ///
    /// Trimming only decides emptiness: the user turn keeps the text exactly as
    /// typed, leading and trailing whitespace included. On `EmptyInput` nothing
    /// changes, not even the pending text.
    pub fn submit<R: Rng>(
        &mut self,
        transcript: &mut Transcript,
        selector: &mut ResponseSelector<R>,
    ) -> Result<Submission, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::EmptyInput);
        }

        let user_turn = Turn::user(std::mem::take(&mut self.pending));
        transcript.append(user_turn.clone());

        let assistant_turn = Turn::assistant(selector.select());
        transcript.append(assistant_turn.clone());

        tracing::debug!(turns = transcript.len(), "submission accepted");

        Ok(Submission {
            user_turn,
            assistant_turn,
        })
    }

    /// Applies the trigger policy: a click or a plain Enter submits, Shift+Enter
    /// never does. Enter never both submits and inserts a newline.
    pub fn trigger<R: Rng>(
        &mut self,
        trigger: SubmitTrigger,
        transcript: &mut Transcript,
        selector: &mut ResponseSelector<R>,
    ) -> TriggerOutcome {
        if let SubmitTrigger::Enter { shift: true } = trigger {
            return TriggerOutcome::Passthrough;
        }

        match self.submit(transcript, selector) {
            Ok(submission) => TriggerOutcome::Submitted(submission),
            Err(SubmitError::EmptyInput) => TriggerOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Role;

    fn single(reply: &str) -> ResponseSelector {
        ResponseSelector::seeded(vec![reply.to_string()], 0).unwrap()
    }

    #[test]
    fn test_submit_appends_user_then_assistant() {
        let mut composer = Composer::new();
        let mut transcript = Transcript::new();
        let mut selector = single("ok");

        composer.set_pending("hello");
        let submission = composer.submit(&mut transcript, &mut selector).unwrap();

        assert_eq!(submission.user_turn, Turn::user("hello"));
        assert_eq!(submission.assistant_turn, Turn::assistant("ok"));
        assert_eq!(transcript.turns(), &[Turn::user("hello"), Turn::assistant("ok")]);
        assert_eq!(composer.pending(), "");
    }

    #[test]
    fn test_whitespace_only_is_rejected_without_side_effects() {
        let mut composer = Composer::new();
        let mut transcript = Transcript::new();
        let mut selector = single("ok");

        composer.set_pending("   ");
        let err = composer.submit(&mut transcript, &mut selector).unwrap_err();

        assert_eq!(err, SubmitError::EmptyInput);
        assert!(transcript.is_empty());
        assert_eq!(composer.pending(), "   ");
    }

    #[test]
    fn test_empty_is_rejected() {
        let mut composer = Composer::new();
        let mut transcript = Transcript::new();
        let mut selector = single("ok");

        assert_eq!(
            composer.submit(&mut transcript, &mut selector),
            Err(SubmitError::EmptyInput)
        );
    }

    #[test]
    fn test_untrimmed_content_is_stored() {
        let mut composer = Composer::new();
        let mut transcript = Transcript::new();
        let mut selector = single("ok");

        composer.set_pending("  spaced out \n");
        composer.submit(&mut transcript, &mut selector).unwrap();

        assert_eq!(transcript.turns()[0].content(), "  spaced out \n");
    }

    #[test]
    fn test_set_pending_is_verbatim() {
        let mut composer = Composer::new();
        composer.set_pending(" a  b ");
        assert_eq!(composer.pending(), " a  b ");
        assert!(composer.can_submit());

        composer.set_pending("\t\n");
        assert!(!composer.can_submit());
    }

    #[test]
    fn test_shift_enter_passes_through() {
        let mut composer = Composer::new();
        let mut transcript = Transcript::new();
        let mut selector = single("ok");

        composer.set_pending("a");
        let outcome = composer.trigger(
            SubmitTrigger::Enter { shift: true },
            &mut transcript,
            &mut selector,
        );

        assert_eq!(outcome, TriggerOutcome::Passthrough);
        assert!(transcript.is_empty());
        assert_eq!(composer.pending(), "a");
    }

    #[test]
    fn test_enter_on_empty_is_ignored() {
        let mut composer = Composer::new();
        let mut transcript = Transcript::new();
        let mut selector = single("ok");

        let outcome = composer.trigger(
            SubmitTrigger::Enter { shift: false },
            &mut transcript,
            &mut selector,
        );
        assert_eq!(outcome, TriggerOutcome::Ignored);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_click_and_enter_both_submit() {
        let mut composer = Composer::new();
        let mut transcript = Transcript::new();
        let mut selector = single("x");

        composer.set_pending("one");
        let first = composer.trigger(SubmitTrigger::Click, &mut transcript, &mut selector);
        composer.set_pending("two");
        let second = composer.trigger(
            SubmitTrigger::Enter { shift: false },
            &mut transcript,
            &mut selector,
        );

        assert!(matches!(first, TriggerOutcome::Submitted(_)));
        assert!(matches!(second, TriggerOutcome::Submitted(_)));

        let roles: Vec<Role> = transcript.iter().map(|t| t.role()).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert!(transcript
            .iter()
            .filter(|t| t.role() == Role::Assistant)
            .all(|t| t.content() == "x"));
    }
}
