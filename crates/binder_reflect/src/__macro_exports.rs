//! Items used by code generated from `#[derive(Reflect)]`.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::TypeRegistry;

    /// One `#[reflect(auto_register)]` type, submitted by the derive.
    pub struct AutoRegistration(pub fn(&mut TypeRegistry) -> bool);

    inventory::collect!(AutoRegistration);

    pub(crate) fn register_all(registry: &mut TypeRegistry) -> usize {
        inventory::iter::<AutoRegistration>
            .into_iter()
            .filter(|entry| (entry.0)(registry))
            .count()
    }
}
