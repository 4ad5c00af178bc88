//! Reading configuration trees from YAML and JSON files

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::{ConfigError, ConfigResult};

/// Encodings recognized by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect the format from `.yaml`, `.yml` or `.json`
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(FileFormat::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(FileFormat::Json)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Yaml => "yaml",
            FileFormat::Json => "json",
        }
    }
}

/// Decode `path` into an existing node
///
/// The document is merged over `cfg`: fields it sets replace the current
/// values (nested mappings merge recursively) and everything else keeps what
/// `cfg` already held. The result is unbound; call `bind()` before
/// synthesizing options.
pub fn read<T>(path: impl AsRef<Path>, cfg: &mut T) -> ConfigResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let path = path.as_ref();
    let (format, content) = read_source(path)?;

    *cfg = match format {
        FileFormat::Yaml => {
            let doc: serde_yaml::Value = serde_yaml::from_str(&content)?;
            let mut base = serde_yaml::to_value(&*cfg)?;
            merge_yaml(&mut base, doc);
            serde_yaml::from_value(base)?
        }
        FileFormat::Json => {
            let doc: serde_json::Value = serde_json::from_str(&content)?;
            let mut base = serde_json::to_value(&*cfg)?;
            merge_json(&mut base, doc);
            serde_json::from_value(base)?
        }
    };
    Ok(())
}

fn read_source(path: &Path) -> ConfigResult<(FileFormat, String)> {
    let format = FileFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

    let content = fs::read_to_string(path)?;
    crate::info_log!("read {} bytes of {} from {}", content.len(), format.as_str(), path.display());
    Ok((format, content))
}

/// Overlay `doc` on `base`; an empty (null) document changes nothing
fn merge_yaml(base: &mut serde_yaml::Value, doc: serde_yaml::Value) {
    match (base, doc) {
        (_, serde_yaml::Value::Null) => {}
        (serde_yaml::Value::Mapping(base), serde_yaml::Value::Mapping(doc)) => {
            for (key, value) in doc {
                match base.get_mut(&key) {
                    Some(slot) if value.is_mapping() => merge_yaml(slot, value),
                    _ => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, doc) => *base = doc,
    }
}

/// Overlay `doc` on `base`; a null document changes nothing
fn merge_json(base: &mut serde_json::Value, doc: serde_json::Value) {
    match (base, doc) {
        (_, serde_json::Value::Null) => {}
        (serde_json::Value::Object(base), serde_json::Value::Object(doc)) => {
            for (key, value) in doc {
                match base.get_mut(&key) {
                    Some(slot) if value.is_object() => merge_json(slot, value),
                    _ => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, doc) => *base = doc,
    }
}

/// Decode `path` into a new node
///
/// # Example
///
/// ```no_run
/// use optbind_core::config::{self, Bind, GlobalConfig};
///
/// let mut cfg: GlobalConfig = config::load("config.yaml")?;
/// cfg.bind();
/// # Ok::<(), optbind_core::config::ConfigError>(())
/// ```
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    let (format, content) = read_source(path.as_ref())?;
    let cfg = match format {
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(cfg)
}

/// Dump a node as YAML
pub fn to_raw_yaml<T: Serialize>(cfg: &T) -> ConfigResult<String> {
    Ok(serde_yaml::to_string(cfg)?)
}

/// Dump a node as pretty-printed JSON
pub fn to_raw_json<T: Serialize>(cfg: &T) -> ConfigResult<String> {
    Ok(serde_json::to_string_pretty(cfg)?)
}
