//! Resolution and consistency engine: transactional install, remove, update
//! chains and undo over a read-only catalog, plus read-only views of the
//! installed state.

pub mod component;
pub mod engine;
pub mod graph;
pub mod history;
pub mod outcome;
pub mod path;
pub mod report;
pub mod state;

pub use engine::Engine;
pub use outcome::Outcome;
