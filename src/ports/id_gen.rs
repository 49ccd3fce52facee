//! ID generator port for verification run identifiers.

/// Generates unique identifiers for verification runs.
///
/// Abstracting ID generation keeps report identity deterministic in tests.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier.
    fn generate_id(&self) -> String;
}
