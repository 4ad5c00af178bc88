//! In-memory variable source

use std::collections::HashMap;

use super::traits::VarSource;

/// Map-backed variable source
///
/// Binding against a `MemoryVars` never touches the process environment,
/// which keeps tests independent of each other and lets embedding callers
/// resolve placeholders from their own variable table.
///
/// # Example
///
/// ```
/// use optbind_core::resolve::{MemoryVars, actual_value_with};
///
/// let vars = MemoryVars::new().with("REGION", "ap-northeast-1");
/// assert_eq!(actual_value_with("_REGION_", &vars), "ap-northeast-1");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryVars {
    vars: HashMap<String, String>,
}

impl MemoryVars {
    /// Create a new empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Define or overwrite a variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl VarSource for MemoryVars {
    fn name(&self) -> &str {
        "memory"
    }

    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_vars_basic() {
        let mut vars = MemoryVars::new();
        assert!(vars.is_empty());

        vars.set("HOST", "localhost");
        assert_eq!(vars.var("HOST"), Some("localhost".to_string()));
        assert_eq!(vars.len(), 1);

        vars.set("HOST", "db.internal");
        assert_eq!(vars.var("HOST"), Some("db.internal".to_string()));
        assert_eq!(vars.var("PORT"), None);
    }

    #[test]
    fn test_memory_vars_from_iter() {
        let vars: MemoryVars = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(vars.name(), "memory");
        assert_eq!(vars.var("A"), Some("1".to_string()));
        assert_eq!(vars.var("B"), Some("2".to_string()));
        assert!(!vars.has("C"));
    }
}
