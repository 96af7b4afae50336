pub mod event;
pub mod focus;
pub mod state;

pub use focus::{Focus, FocusAction};
pub use state::AppState;
