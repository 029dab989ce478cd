//! Reducer for the global messages slice.

use std::sync::Arc;

use crate::store::{Reducer, SliceName};

use super::action::GlobalMessagesAction;
use super::state::{GlobalMessage, GlobalMessagesState};

pub struct GlobalMessagesReducer;

impl Reducer for GlobalMessagesReducer {
    const SLICE: SliceName = SliceName::GlobalMessages;

    type State = GlobalMessagesState;
    type Action = GlobalMessagesAction;

    fn reduce(state: &Arc<Self::State>, action: &Self::Action) -> Arc<Self::State> {
        match action {
            GlobalMessagesAction::Added { id, message, level } => {
                let incoming = GlobalMessage {
                    id: id.clone(),
                    message: message.clone(),
                    level: *level,
                };

                match state.position(id) {
                    Some(index) if state.messages[index] == incoming => Arc::clone(state),
                    Some(index) => {
                        let mut next = Arc::clone(state);
                        Arc::make_mut(&mut next).messages[index] = incoming;
                        next
                    }
                    None => {
                        let mut next = Arc::clone(state);
                        let inner = Arc::make_mut(&mut next);
                        inner.messages.push(incoming);
                        let overflow = inner.messages.len().saturating_sub(inner.capacity);
                        inner.messages.drain(..overflow);
                        next
                    }
                }
            }
            GlobalMessagesAction::Closed { id } => match state.position(id) {
                Some(index) => {
                    let mut next = Arc::clone(state);
                    Arc::make_mut(&mut next).messages.remove(index);
                    next
                }
                None => Arc::clone(state),
            },
            GlobalMessagesAction::ClosedAll => {
                if state.messages.is_empty() {
                    return Arc::clone(state);
                }
                let mut next = Arc::clone(state);
                Arc::make_mut(&mut next).messages.clear();
                next
            }
        }
    }
}
