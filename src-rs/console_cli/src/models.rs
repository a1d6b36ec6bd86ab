use chrono::{DateTime, Utc};

#[derive(Clone, Debug)]
pub struct Exchange {
    pub kind: String,
    pub at: DateTime<Utc>,
    pub outcome: Result<(), String>,
}

impl Exchange {
    pub fn new(kind: &str, outcome: Result<(), String>) -> Self {
        Self {
            kind: kind.to_string(),
            at: Utc::now(),
            outcome,
        }
    }
}
