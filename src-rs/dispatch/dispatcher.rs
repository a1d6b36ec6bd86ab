use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::page::Page;
use crate::actions::ActionSchema;
use crate::error::DispatchError;

/// Text written into the output fields by one successful exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub out: String,
    pub log: String,
}

impl Rendered {
    /// `out = data.out || data.listing || ""`, `log = data.log || ""`.
    ///
    /// Falsy values (missing, null, false, 0, "") fall through to the next
    /// candidate. A top-level `null` has no fields to read and is an error.
    pub fn from_value(data: &Value) -> Result<Self, DispatchError> {
        if data.is_null() {
            return Err(DispatchError::NullResponse);
        }
        let out = first_truthy(&[data.get("out"), data.get("listing")]);
        let log = first_truthy(&[data.get("log")]);
        Ok(Self { out, log })
    }
}

fn first_truthy(candidates: &[Option<&Value>]) -> String {
    candidates
        .iter()
        .flatten()
        .find(|value| is_truthy(value))
        .map(|value| text_content(value))
        .unwrap_or_default()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(num) => num.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String conversion as a DOM `textContent` assignment performs it.
fn text_content(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(num) => number_text(num),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(text_content)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(num: &serde_json::Number) -> String {
    if num.is_i64() || num.is_u64() {
        return num.to_string();
    }
    match num.as_f64() {
        Some(n) if n.fract() == 0.0 && n.abs() < 1e21 => format!("{:.0}", n),
        Some(n) => n.to_string(),
        None => num.to_string(),
    }
}

/// Sends the `src` field to `/api/<kind>` and renders the reply into the page.
#[derive(Clone)]
pub struct Dispatcher {
    base_url: String,
    page: Arc<Page>,
    client: Client,
}

impl Dispatcher {
    pub fn new(base_url: &str, page: Arc<Page>) -> Self {
        Self::with_client(base_url, page, Client::new())
    }

    pub fn with_client(base_url: &str, page: Arc<Page>, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `kind` is appended to the path as-is.
    pub async fn act(&self, kind: &str) -> Result<Rendered, DispatchError> {
        let url = format!("{}/api/{}", self.base_url, kind);
        let body = self.page.src.text();
        debug!(kind = kind, bytes = body.len(), "dispatching");

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(kind = kind, status = status.as_u16(), "non-success status, rendering body anyway");
        }

        let bytes = resp.bytes().await?;
        let data: Value = serde_json::from_slice(&bytes)?;
        let rendered = Rendered::from_value(&data)?;

        self.page.out.set_text(rendered.out.clone());
        self.page.log.set_text(rendered.log.clone());
        Ok(rendered)
    }

    pub async fn list_actions(&self) -> Result<Vec<ActionSchema>, DispatchError> {
        let url = format!("{}/actions", self.base_url);
        let bytes = self.client.get(url).send().await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
