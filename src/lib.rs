//! Rule engine for a hexagonal tile-matching puzzle.
//!
//! The board is an offset hexagonal grid of colored cells. The player
//! rotates a triad (a triangle of three mutually adjacent cells) and any
//! uniform triangle that forms explodes; columns compact, refills drop in,
//! and cascades run until the board is quiescent. Countdown cells tick on
//! every successful move and end the game when their fuse runs out.
//!
//! This is a pure library: no rendering, no input handling, no timers. The
//! host drives it through [`Session`] and replays the returned [`Event`]
//! log at its own pace.
//!
//! ```
//! use hexfall_core::{Direction, Session, SessionConfig, Spin};
//! use hexfall_core::types::Coord;
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//! if let Some(triad) = session.candidate_triad(Coord::new(4, 2), Direction::ALL) {
//!     let events = session.commit_rotation(&triad, Spin::Clockwise).unwrap();
//!     assert!(!events.is_empty());
//! }
//! ```

pub mod adapter;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{Session, SessionConfig, SessionSnapshot, Triad};
pub use crate::error::CoreError;
pub use crate::types::{CellContent, Color, Coord, Direction, Event, Spin};
