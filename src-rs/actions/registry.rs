use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use super::types::{ActionEntry, ActionHandler, ActionSchema};
use crate::error::ActionError;
use crate::result::ActionResult;

pub struct ActionRegistry {
    actions: RwLock<HashMap<String, ActionEntry>>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: RwLock::new(HashMap::new()),
        }
    }

    pub fn register(
        &self,
        name: &str,
        handler: ActionHandler,
        mut schema: ActionSchema,
    ) -> Result<(), ActionError> {
        if name.is_empty() {
            return Err(ActionError::Registry("invalid action".to_string()));
        }
        if schema.name.is_empty() {
            schema.name = name.to_string();
        }
        if schema.name != name {
            return Err(ActionError::Registry("schema name mismatch".to_string()));
        }

        let mut map = self
            .actions
            .write()
            .map_err(|_| ActionError::Registry("lock error".to_string()))?;
        if map.contains_key(name) {
            return Err(ActionError::Registry(format!("action already registered: {}", name)));
        }
        map.insert(
            name.to_string(),
            ActionEntry {
                name: name.to_string(),
                handler,
                schema,
            },
        );
        debug!(action = name, "registered action");
        Ok(())
    }

    pub fn execute(&self, name: &str, src: &str) -> Result<ActionResult, ActionError> {
        let map = self
            .actions
            .read()
            .map_err(|_| ActionError::Internal("lock error".to_string()))?;
        let entry = map
            .get(name)
            .ok_or_else(|| ActionError::NotFound(name.to_string()))?;
        (entry.handler)(src)
    }

    /// Schemas sorted by action name.
    pub fn list(&self) -> Vec<ActionSchema> {
        let map = match self.actions.read() {
            Ok(lock) => lock,
            Err(_) => return vec![],
        };
        let mut items: Vec<ActionSchema> = map.values().map(|entry| entry.schema.clone()).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn has(&self, name: &str) -> bool {
        match self.actions.read() {
            Ok(map) => map.contains_key(name),
            Err(_) => false,
        }
    }

    pub fn count(&self) -> usize {
        match self.actions.read() {
            Ok(map) => map.len(),
            Err(_) => 0,
        }
    }
}
