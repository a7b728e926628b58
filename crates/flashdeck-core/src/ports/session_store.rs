//! Session store trait definition.
//!
//! This port defines the interface for persisting the single
//! [`PersistedRecord`]. Implementations handle all storage and
//! serialization details internally.

use super::StoreError;
use crate::session::PersistedRecord;

/// Durable home of the session record.
///
/// Last write wins; there is no merge beyond what the engine does before
/// calling [`SessionStore::save`].
pub trait SessionStore: Send + Sync {
    /// Load the stored record.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet. A blob that
    /// exists but cannot be decoded is an `Err`; the engine decides how
    /// to degrade.
    fn load(&self) -> Result<Option<PersistedRecord>, StoreError>;

    /// Replace the stored record.
    fn save(&self, record: &PersistedRecord) -> Result<(), StoreError>;

    /// Remove the stored record, if any.
    fn clear(&self) -> Result<(), StoreError>;
}
