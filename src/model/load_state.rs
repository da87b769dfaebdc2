use std::sync::Arc;

use crate::error::LoadFailure;
use crate::model::Board;

#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Arc<Board>),
    Failed {
        failure: LoadFailure,
        last_good: Option<Arc<Board>>,
    },
}

impl LoadState {
    /// The board to render, falling back to the last good one after a failed fetch.
    #[must_use]
    pub fn board(&self) -> Option<&Arc<Board>> {
        match self {
            Self::Loading => None,
            Self::Ready(board) => Some(board),
            Self::Failed { last_good, .. } => last_good.as_ref(),
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Self::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
