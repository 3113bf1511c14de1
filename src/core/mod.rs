//! Core game logic, free of any I/O or presentation concerns

pub mod cascade;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod rotation;
pub mod session;
pub mod snapshot;
pub mod triad;

pub use cascade::{CascadeResolver, Scoreboard};
pub use grid::HexGrid;
pub use rng::SimpleRng;
pub use rotation::{EngineState, RotationEngine};
pub use session::{Session, SessionConfig};
pub use snapshot::SessionSnapshot;
pub use triad::Triad;
