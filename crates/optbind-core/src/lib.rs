//! optbind Core
//!
//! Declarative configuration trees for infrastructure clients.
//! A tree is decoded from YAML or JSON, bound against the environment and
//! then synthesized into option lists for network dialers, TLS contexts,
//! database, cache and storage drivers, and servers.
//!
//! ## Placeholders
//!
//! Any string field may be written as `_NAME_`; binding replaces it with the
//! value of the environment variable `NAME` (or an empty string).
//!
//! ```rust
//! use optbind_core::config::{Bind, MySQL, Synthesize};
//! use optbind_core::resolve::MemoryVars;
//!
//! let mut mysql = MySQL {
//!     host: "_FOO_BIND_HOST_".to_string(),
//!     port: 3306,
//!     ..Default::default()
//! };
//!
//! let vars = MemoryVars::new().with("FOO_BIND_HOST", "db.internal");
//! let opts = mysql.bind_with(&vars).opts()?;
//!
//! assert_eq!(mysql.host, "db.internal");
//! assert_eq!(mysql.network, "tcp");
//! assert_eq!(opts.last().map(|o| o.kind()), Some("dialer"));
//! # Ok::<(), optbind_core::config::OptsError>(())
//! ```

pub mod resolve;
pub mod types;
pub mod logging;
pub mod config;
pub mod clients;

// Re-export commonly used types
pub use resolve::{actual_value, actual_values, EnvVars, MemoryVars, VarSource};

pub use config::{
    Bind, Synthesize,
    ConfigError, ConfigResult, OptsError, OptsResult,
};

pub use clients::{Dialer, DialerError, SocketFlag, TlsContext, TlsError};

pub use types::{
    BlobStorageType, CompressAlgorithm, Consistency, NetworkType, SerialConsistency, ServerMode,
};
