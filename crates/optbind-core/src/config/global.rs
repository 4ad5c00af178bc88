//! Top-level settings shared by a whole process

use serde::{Deserialize, Serialize};

use super::traits::{bind_child, Bind};
use crate::resolve::{bind_str, VarSource};

/// Diagnostic log settings, applied with `logging::configure`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`
    pub level: String,
    /// `raw` or `json`
    pub format: String,
    /// Log file path, `stderr`, or empty for no output
    pub output: String,
}

impl Bind for Logging {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.level, vars);
        bind_str(&mut self.format, vars);
        bind_str(&mut self.output, vars);
        self
    }
}

/// Settings every configuration document starts with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub version: String,
    pub time_zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
}

impl Bind for GlobalConfig {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.version, vars);
        bind_str(&mut self.time_zone, vars);
        bind_child(&mut self.logging, vars);
        self
    }
}
