//! Property-based tests for the submit flow
//!
//! Random interleavings of typing and submitting must keep the transcript
//! well-formed.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Type(String),
    Submit,
    Enter { shift: bool },
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_blank(),
        "[ \t]{0,3}[a-zA-Z0-9?!]{1,20}[ \n]{0,3}",
        "\\PC{1,30}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_text().prop_map(Op::Type),
        Just(Op::Submit),
        any::<bool>().prop_map(|shift| Op::Enter { shift }),
    ]
}

fn arb_catalog() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,10}", 1..6)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_transcript_stays_well_formed(
        catalog in arb_catalog(),
        seed in any::<u64>(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let selector = ResponseSelector::seeded(catalog.clone(), seed).unwrap();
        let mut session = Session::new(selector);
        let mut successes = 0usize;

        for op in ops {
            let before_len = session.turns().len();
            let before_pending = session.pending().to_string();

            let submitted = match op {
                Op::Type(text) => {
                    session.set_pending(text.clone());
                    prop_assert_eq!(session.pending(), text.as_str());
                    None
                }
                Op::Submit => session.submit().ok(),
                Op::Enter { shift } => match session.trigger(SubmitTrigger::Enter { shift }) {
                    TriggerOutcome::Submitted(submission) => Some(submission),
                    TriggerOutcome::Ignored => {
                        prop_assert!(!shift);
                        None
                    }
                    TriggerOutcome::Passthrough => {
                        prop_assert!(shift);
                        None
                    }
                },
            };

            // never shrinks
            prop_assert!(session.turns().len() >= before_len);

            match submitted {
                Some(submission) => {
                    successes += 1;
                    // untrimmed content, pending reset
                    prop_assert_eq!(submission.user_turn.content(), before_pending.as_str());
                    prop_assert_eq!(session.pending(), "");
                    prop_assert_eq!(session.turns().len(), before_len + 2);
                    prop_assert!(catalog.iter().any(|c| c == submission.assistant_turn.content()));
                }
                None => {
                    prop_assert_eq!(session.turns().len(), before_len);
                }
            }
        }

        let turns = session.turns();
        prop_assert_eq!(turns.len(), successes * 2);

        for (i, turn) in turns.iter().enumerate() {
            if i % 2 == 0 {
                prop_assert_eq!(turn.role(), Role::User);
                prop_assert!(!turn.content().trim().is_empty());
            } else {
                prop_assert_eq!(turn.role(), Role::Assistant);
                prop_assert!(catalog.iter().any(|c| c == turn.content()));
            }
        }
    }

    #[test]
    fn prop_blank_input_is_a_no_op(blank in arb_blank(), seed in any::<u64>()) {
        let selector = ResponseSelector::seeded(vec!["ok".to_string()], seed).unwrap();
        let mut session = Session::new(selector);
        session.set_pending(blank.clone());

        prop_assert_eq!(session.submit(), Err(SubmitError::EmptyInput));
        prop_assert!(session.is_empty());
        prop_assert_eq!(session.pending(), blank.as_str());
    }
}
