//! Process environment variable source

use std::env;

use super::traits::VarSource;

/// Variable source backed by the process environment
///
/// Lookups go straight to `std::env::var`; nothing is cached, so a variable
/// exported after construction is still visible. Values that are not valid
/// unicode are treated as unset.
///
/// # Example
///
/// ```
/// use optbind_core::resolve::{VarSource, EnvVars};
///
/// let vars = EnvVars::new();
/// assert_eq!(vars.name(), "env");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvVars {
    _private: (),
}

impl EnvVars {
    /// Create a new process environment source
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl VarSource for EnvVars {
    fn name(&self) -> &str {
        "env"
    }

    fn var(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_vars_name() {
        assert_eq!(EnvVars::new().name(), "env");
    }

    #[test]
    fn test_env_vars_get_direct() {
        env::set_var("OPTBIND_TEST_ENV_SOURCE_DIRECT", "value");

        let vars = EnvVars::new();
        assert_eq!(vars.var("OPTBIND_TEST_ENV_SOURCE_DIRECT"), Some("value".to_string()));
        assert!(vars.has("OPTBIND_TEST_ENV_SOURCE_DIRECT"));

        env::remove_var("OPTBIND_TEST_ENV_SOURCE_DIRECT");
    }

    #[test]
    fn test_env_vars_empty_value_is_defined() {
        env::set_var("OPTBIND_TEST_ENV_SOURCE_EMPTY", "");

        let vars = EnvVars::new();
        assert_eq!(vars.var("OPTBIND_TEST_ENV_SOURCE_EMPTY"), Some(String::new()));

        env::remove_var("OPTBIND_TEST_ENV_SOURCE_EMPTY");
    }

    #[test]
    fn test_env_vars_not_found() {
        let vars = EnvVars::new();
        assert_eq!(vars.var("OPTBIND_TEST_ENV_SOURCE_MISSING_XYZ"), None);
        assert_eq!(vars.var(""), None);
    }
}
