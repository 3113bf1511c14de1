//! Error taxonomy for the rule engine.
//!
//! Every fallible public operation returns `Result<_, CoreError>`; there is
//! no control flow through panics. The one exception is out-of-bounds index
//! arithmetic that survives the grid's bounds checks — that indicates a
//! geometry bug in this crate, not bad caller input, and panics.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The candidate triad has a member outside the board or does not form
    /// one of the six fan patterns. Recoverable: the caller tries the next
    /// proximity direction or gives up without a selection.
    #[error("triad is not a valid in-bounds fan pattern")]
    InvalidTriad,

    /// A rotation is already in flight; the command must be resubmitted
    /// after the current rotation and cascade complete.
    #[error("a rotation is already in progress")]
    RotationInProgress,

    /// The session has reached its terminal state; all further rotation
    /// commands are rejected.
    #[error("the session is over")]
    GameOver,

    /// Session configuration outside the supported ranges.
    #[error("invalid session config: {0}")]
    InvalidConfig(String),
}
