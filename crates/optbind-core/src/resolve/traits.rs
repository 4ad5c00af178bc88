//! Variable lookup abstraction used by the resolver

/// Source of named string variables consulted when a placeholder is resolved
///
/// Implementations:
/// - `EnvVars`: the process environment (used by `Bind::bind`)
/// - `MemoryVars`: a fixed map, for tests and for embedding callers that
///   already hold their variables
///
/// # Example
///
/// ```
/// use optbind_core::resolve::{VarSource, MemoryVars};
///
/// let vars = MemoryVars::new().with("DB_HOST", "db.internal");
/// assert_eq!(vars.var("DB_HOST"), Some("db.internal".to_string()));
/// assert_eq!(vars.var("DB_PORT"), None);
/// ```
pub trait VarSource {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Look up a variable by its exact name
    ///
    /// Returns `None` when the variable is not defined. An unset variable is
    /// not an error: the resolver turns it into an empty string.
    fn var(&self, key: &str) -> Option<String>;

    /// Check if a variable is defined
    fn has(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

impl<T: VarSource + ?Sized> VarSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
