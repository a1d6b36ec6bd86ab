pub mod config;
pub mod error;
pub mod logging;
pub mod result;

#[path = "actions/lib.rs"]
pub mod actions;
#[path = "api/lib.rs"]
pub mod api;
#[path = "dispatch/lib.rs"]
pub mod dispatch;

pub use config::ServerConfig;
pub use dispatch::{Dispatcher, Page};
pub use error::{ActionError, ConfigError, DispatchError, ServerError};
pub use result::ActionResult;
