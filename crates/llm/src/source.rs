//! The ActionSource boundary.

use async_trait::async_trait;
use serde_json::Value;

use chefbyte_core::InventoryItem;

use crate::error::LlmError;

/// Produces raw, untyped proposed-action records from user input.
///
/// Implementations are untrusted from the engine's point of view: whatever
/// they return goes through the reconciliation engine's validator, never
/// straight to the store.
#[async_trait]
pub trait ActionSource: Send + Sync {
    /// Convert free-text input into a proposed-action list.
    async fn propose_from_text(
        &self,
        user_input: &str,
        inventory: &[InventoryItem],
    ) -> Result<Vec<Value>, LlmError>;

    /// Extract a proposed-action list from a photograph (JPEG/PNG bytes).
    async fn propose_from_image(
        &self,
        image: &[u8],
        inventory: &[InventoryItem],
    ) -> Result<Vec<Value>, LlmError>;
}
