pub mod selection;

pub use selection::{SelectionController, SelectionState};
