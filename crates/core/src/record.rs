//! Record trait: anything a collection store can hold.

/// A collection member with a store-assigned identity and a partial-update type.
pub trait Record: Clone + Send + Sync + 'static {
    /// Partial overwrite applied by `update_by_id`.
    type Patch: Send + Sync;

    /// Returns the record identifier.
    fn id(&self) -> crate::RecordId;

    /// Overwrites the identifier (used by the store on creation).
    fn assign_id(&mut self, id: crate::RecordId);

    /// Applies a patch in place. Must never change the id.
    fn apply(&mut self, patch: &Self::Patch);
}
