//! Category Entity

use chrono::{DateTime, Utc};
use kernel::id::CategoryId;

/// A named shelf books are filed under
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// Validated fields for a create or update
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    /// Recorded as modifier, and as creator on insert
    pub actor: String,
}
