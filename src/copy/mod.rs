pub mod control;
pub mod state;

pub use control::{ACK_WINDOW, CopyControl, CopyFailure};
pub use state::{CopyOutcome, CopyState};
