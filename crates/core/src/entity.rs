//! Entity trait: records the server identifies by id.

/// Anything the job board server addresses by a stable identifier.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
