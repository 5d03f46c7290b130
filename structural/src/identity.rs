//! The identity-conformance trait implemented by `#[identify]`.

/// A type carrying a stable per-instance identifier.
///
/// Implementations are normally generated by the
/// [`identify`](macro@crate::identify) attribute macro: structs expose an
/// `id` field (existing or synthesised), and payload-free enums are their
/// own identity.
pub trait Identifiable {
    /// The identifier's type.
    type Id;

    /// Returns the instance's identifier.
    ///
    /// The identifier is assigned at construction and never changes over
    /// the instance's lifetime.
    fn id(&self) -> &Self::Id;
}
