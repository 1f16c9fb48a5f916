//! Reducer for the recovery boundary.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::BoundaryIntent;
use super::state::BoundaryState;

pub struct BoundaryReducer<K>(PhantomData<fn() -> K>);

impl<K: Clone + PartialEq + Send + 'static> Reducer for BoundaryReducer<K> {
    type State = BoundaryState<K>;
    type Intent = BoundaryIntent<K>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BoundaryIntent::Capture { error, reset_keys } => match state {
                BoundaryState::Clear => BoundaryState::Failed { error, reset_keys },
                // Children are not rendered while failed; keep the first capture.
                failed @ BoundaryState::Failed { .. } => failed,
            },

            BoundaryIntent::ResetKeysObserved { reset_keys } => match state {
                BoundaryState::Failed {
                    reset_keys: captured,
                    ..
                } if captured != reset_keys => BoundaryState::Clear,
                other => other,
            },

            BoundaryIntent::Reset => BoundaryState::Clear,
        }
    }
}
