//! Inventory item model and name validation.

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Maximum item name length, in characters. Mirrors the storage column limit.
pub const MAX_NAME_LEN: usize = 50;

/// Case-folded form of a name, used for uniqueness comparison.
///
/// Original casing is preserved in storage; only comparisons fold.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
}

/// Inventory item identifier, assigned by the store, immutable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::malformed(format!("ItemId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// A validated item name: non-empty, at most [`MAX_NAME_LEN`] characters,
/// original casing preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::malformed("item name cannot be empty"));
        }
        let length = trimmed.chars().count();
        if length > MAX_NAME_LEN {
            return Err(DomainError::name_too_long(length));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded form used for uniqueness comparison.
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A stored inventory row.
///
/// Identity and lifetime are owned by the store; the reconciliation engine
/// only requests creation, mutation, and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub expiration_date: Option<NaiveDate>,
}
