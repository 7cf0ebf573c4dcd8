/// Capability shared by every entity that only its creator may change.
pub trait Owned {
    /// Identifier of the user that created the entity.
    fn created_by(&self) -> &str;

    fn is_owned_by(&self, actor: &str) -> bool {
        self.created_by() == actor
    }
}
