//! Reducer for the pokemon info fetch lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::InfoIntent;
use super::state::FetchState;

pub struct InfoReducer;

impl Reducer for InfoReducer {
    type State = FetchState;
    type Intent = InfoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InfoIntent::KeyCleared => FetchState::Idle,

            InfoIntent::KeyChanged { key, generation } => FetchState::Pending { key, generation },

            // A completion only lands on the pending state that issued it.
            // Anything else belongs to a key that is no longer active.
            InfoIntent::Completed(completion) => match state {
                FetchState::Pending { key, generation }
                    if generation == completion.generation && key == completion.key =>
                {
                    match completion.outcome {
                        Ok(pokemon) => FetchState::Resolved { key, pokemon },
                        Err(failure) => FetchState::Rejected { key, failure },
                    }
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupCompletion, LookupFailure, Pokemon};

    fn pending(key: &str, generation: u64) -> FetchState {
        FetchState::Pending {
            key: key.into(),
            generation,
        }
    }

    fn completion(key: &str, generation: u64, ok: bool) -> LookupCompletion {
        LookupCompletion {
            key: key.into(),
            generation,
            outcome: if ok {
                Ok(Pokemon {
                    name: key.into(),
                    ..Default::default()
                })
            } else {
                Err(LookupFailure::new("nope"))
            },
        }
    }

    #[test]
    fn key_change_enters_pending_from_any_state() {
        let resolved = FetchState::Resolved {
            key: "mew".into(),
            pokemon: Pokemon::default(),
        };
        let new_state = InfoReducer::reduce(
            resolved,
            InfoIntent::KeyChanged {
                key: "pikachu".into(),
                generation: 2,
            },
        );
        assert_eq!(new_state, pending("pikachu", 2));
    }

    #[test]
    fn key_cleared_returns_to_idle() {
        let rejected = FetchState::Rejected {
            key: "missingno".into(),
            failure: LookupFailure::new("nope"),
        };
        assert_eq!(
            InfoReducer::reduce(rejected, InfoIntent::KeyCleared),
            FetchState::Idle
        );
    }

    #[test]
    fn matching_success_resolves() {
        let new_state = InfoReducer::reduce(
            pending("mew", 1),
            InfoIntent::Completed(completion("mew", 1, true)),
        );
        assert!(matches!(new_state, FetchState::Resolved { ref key, .. } if key == "mew"));
    }

    #[test]
    fn matching_failure_rejects() {
        let new_state = InfoReducer::reduce(
            pending("mew", 1),
            InfoIntent::Completed(completion("mew", 1, false)),
        );
        match new_state {
            FetchState::Rejected { key, failure } => {
                assert_eq!(key, "mew");
                assert_eq!(failure.message(), "nope");
            }
            _ => panic!("Expected Rejected state"),
        }
    }

    #[test]
    fn older_generation_is_ignored() {
        let new_state = InfoReducer::reduce(
            pending("mew", 2),
            InfoIntent::Completed(completion("mew", 1, true)),
        );
        assert_eq!(new_state, pending("mew", 2));
    }

    #[test]
    fn completion_while_idle_is_ignored() {
        let new_state = InfoReducer::reduce(
            FetchState::Idle,
            InfoIntent::Completed(completion("mew", 1, false)),
        );
        assert_eq!(new_state, FetchState::Idle);
    }

    #[test]
    fn completion_after_resolution_is_ignored() {
        let resolved = InfoReducer::reduce(
            pending("mew", 1),
            InfoIntent::Completed(completion("mew", 1, true)),
        );
        let again = InfoReducer::reduce(
            resolved.clone(),
            InfoIntent::Completed(completion("mew", 1, false)),
        );
        assert_eq!(again, resolved);
    }
}
