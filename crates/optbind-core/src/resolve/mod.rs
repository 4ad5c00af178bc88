//! Placeholder resolution for configuration values
//!
//! A string field may name an environment variable instead of holding a
//! literal: `_NAME_` resolves to the value of `NAME`, or to an empty string
//! when `NAME` is unset. Everything else is returned unchanged, including
//! `file://` references, which the nodes that accept them handle themselves.
//!
//! - `VarSource`: lookup seam (`EnvVars` for the process, `MemoryVars` for tests)
//! - `actual_value` / `actual_values`: the resolution rule
//! - `bind_str` / `bind_strs`: in-place variants used by node binders

mod traits;
mod env_source;
mod memory_source;

pub use traits::VarSource;
pub use env_source::EnvVars;
pub use memory_source::MemoryVars;

/// Marker wrapped around a variable name to form a placeholder
pub const SENTINEL: char = '_';

/// URI scheme marking a value as a path to a file
pub const FILE_SCHEME: &str = "file://";

/// Extract the variable name from a placeholder
///
/// Exactly one leading and one trailing sentinel are stripped and the
/// remaining name must be non-empty, so `""`, `"_"` and `"__"` are not
/// placeholders.
///
/// ```
/// use optbind_core::resolve::placeholder_name;
///
/// assert_eq!(placeholder_name("_DB_HOST_"), Some("DB_HOST"));
/// assert_eq!(placeholder_name("__"), None);
/// assert_eq!(placeholder_name("db.internal"), None);
/// ```
pub fn placeholder_name(val: &str) -> Option<&str> {
    val.strip_prefix(SENTINEL)?
        .strip_suffix(SENTINEL)
        .filter(|name| !name.is_empty())
}

/// Resolve a single value against a variable source
pub fn actual_value_with(val: &str, vars: &dyn VarSource) -> String {
    match placeholder_name(val) {
        Some(name) => vars.var(name).unwrap_or_default(),
        None => val.to_string(),
    }
}

/// Resolve a single value against the process environment
pub fn actual_value(val: &str) -> String {
    actual_value_with(val, &EnvVars::new())
}

/// Resolve every element of a list independently, preserving order and length
pub fn actual_values_with(vals: &[String], vars: &dyn VarSource) -> Vec<String> {
    vals.iter().map(|val| actual_value_with(val, vars)).collect()
}

/// Resolve every element of a list against the process environment
pub fn actual_values(vals: &[String]) -> Vec<String> {
    actual_values_with(vals, &EnvVars::new())
}

/// Resolve a field in place
pub fn bind_str(field: &mut String, vars: &dyn VarSource) {
    if let Some(name) = placeholder_name(field) {
        crate::trace_log!("resolving _{}_ from {}", name, vars.name());
        *field = vars.var(name).unwrap_or_default();
    }
}

/// Resolve every element of a list field in place
pub fn bind_strs(fields: &mut [String], vars: &dyn VarSource) {
    for field in fields.iter_mut() {
        bind_str(field, vars);
    }
}

/// Strip the `file://` scheme from a value, if present
pub fn strip_file_scheme(val: &str) -> &str {
    val.strip_prefix(FILE_SCHEME).unwrap_or(val)
}
