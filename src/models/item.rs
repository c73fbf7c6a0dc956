use serde::{Deserialize, Serialize};

/// Core item entity. Field order is the wire contract: serialization emits
/// `id`, `name`, `quantity` in declaration order with no extra fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-generated, decimal nanosecond timestamp rendered as a string.
    pub id: String,
    pub name: String,
    pub quantity: i32,
}

/// Creation payload. Missing fields fall back to `""` / `0` so validation,
/// not the parser, rejects incomplete requests.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateItem {
    pub name: String,
    pub quantity: i32,
}
