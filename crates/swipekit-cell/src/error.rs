use std::fmt;

use crate::delegate::{CellId, FulfillmentToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeError {
    UnknownCell { id: CellId },
    UnknownToken { token: FulfillmentToken },
}

impl fmt::Display for SwipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeError::UnknownCell { id } => write!(f, "unknown {id}"),
            SwipeError::UnknownToken { token } => {
                write!(f, "fulfillment token {token} refers to a detached cell")
            }
        }
    }
}

impl std::error::Error for SwipeError {}
