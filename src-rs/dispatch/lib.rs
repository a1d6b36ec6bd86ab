pub mod dispatcher;
pub mod page;

pub use dispatcher::{Dispatcher, Rendered};
pub use page::{Field, Page};
