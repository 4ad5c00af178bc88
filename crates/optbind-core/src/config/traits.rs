//! Two-phase node contract: bind, then synthesize options

use std::path::PathBuf;

use crate::clients::dialer::DialerError;
use crate::clients::tls::TlsError;
use crate::resolve::{EnvVars, VarSource};

/// Placeholder resolution over a configuration node
///
/// Implementations resolve every string field through the resolver,
/// materialize absent children with their defaults and bind them in turn.
/// Binding never fails and is idempotent: a bound tree holds no placeholders
/// left to resolve, so a second pass leaves it unchanged.
///
/// # Example
///
/// ```
/// use optbind_core::config::{Bind, MySQL};
/// use optbind_core::resolve::MemoryVars;
///
/// let vars = MemoryVars::new().with("DB_HOST", "db.internal");
/// let mut mysql = MySQL { host: "_DB_HOST_".to_string(), ..Default::default() };
/// mysql.bind_with(&vars);
///
/// assert_eq!(mysql.host, "db.internal");
/// assert!(mysql.tls.is_some());
/// assert!(mysql.net.is_some());
/// ```
pub trait Bind {
    /// Resolve placeholders against `vars`
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self;

    /// Resolve placeholders against the process environment
    fn bind(&mut self) -> &mut Self {
        self.bind_with(&EnvVars::new())
    }
}

/// Option synthesis for one external client
///
/// `opts` takes `&mut self` because enum-typed fields are normalized and the
/// canonical form is written back. On failure no options are returned.
pub trait Synthesize {
    /// Option type accepted by the client
    type Opt;

    /// Produce the ordered option list
    fn opts(&mut self) -> OptsResult<Vec<Self::Opt>>;
}

/// Materialize an absent child with its default and bind it
pub fn bind_child<T: Bind + Default>(child: &mut Option<T>, vars: &dyn VarSource) {
    child.get_or_insert_with(T::default).bind_with(vars);
}

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that abort option synthesis
#[derive(Debug, thiserror::Error)]
pub enum OptsError {
    #[error("{node}: failed to build TLS context: {source}")]
    Tls {
        node: &'static str,
        #[source]
        source: TlsError,
    },

    #[error("{node}: failed to build dialer: {source}")]
    Dialer {
        node: &'static str,
        #[source]
        source: DialerError,
    },
}

impl OptsError {
    /// Name of the node whose synthesis failed
    pub fn node(&self) -> &'static str {
        match self {
            OptsError::Tls { node, .. } | OptsError::Dialer { node, .. } => node,
        }
    }
}

pub type OptsResult<T> = Result<T, OptsError>;
