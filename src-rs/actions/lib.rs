pub mod listing;
pub mod registry;
pub mod types;

pub use listing::register_builtins;
pub use registry::ActionRegistry;
pub use types::{ActionEntry, ActionHandler, ActionSchema};
