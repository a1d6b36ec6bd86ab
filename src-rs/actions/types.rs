use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ActionError;
use crate::result::ActionResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionSchema {
    pub name: String,
    pub description: String,
}

pub type ActionHandler = Arc<dyn Fn(&str) -> Result<ActionResult, ActionError> + Send + Sync>;

pub struct ActionEntry {
    pub name: String,
    pub handler: ActionHandler,
    pub schema: ActionSchema,
}
