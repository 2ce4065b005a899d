//! Fight-record puzzle engine
//!
//! Builds an opponent graph from historical fight records, picks six anchor
//! fighters for a 3x3 grid so that every row/column pair is likely to share a
//! connector, and judges the player's answers cell by cell.

mod data;
mod error;
mod generator;
mod graph;
mod puzzle;
mod ranker;
mod validator;

pub use data::{FightRecord, FighterDirectory, Portrait, PortraitIndex};
pub use error::{AnchorSlot, FailureReason, GridError, GridResult};
pub use generator::{generate_puzzle, select_anchors, Generator, GeneratorConfig};
pub use graph::FightGraph;
pub use puzzle::{PuzzleGrid, Verdict, GRID_SIZE};
pub use ranker::Ranker;
pub use validator::{clear_answer, connectors, submit_answer};

/// Opaque identifier of a competitor, used as the key into every asset
pub type FighterId = String;
