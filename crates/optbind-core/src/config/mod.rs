//! Configuration nodes
//!
//! Every node follows the same two phases:
//! - `Bind`: resolve `_NAME_` placeholders and materialize absent children
//! - `Synthesize`: map the bound fields to an ordered option list for one client
//!
//! Nodes decode from YAML or JSON (`read`, `load`) with every field optional.
//!
//! ```
//! use optbind_core::config::{Bind, Redis, Synthesize};
//! use optbind_core::resolve::MemoryVars;
//!
//! let yaml = "addrs: [_REDIS_0_, _REDIS_1_]\nmax_redirects: 3\n";
//! let mut redis: Redis = serde_yaml::from_str(yaml).unwrap();
//!
//! let vars = MemoryVars::new()
//!     .with("REDIS_0", "redis-0:6379")
//!     .with("REDIS_1", "redis-1:6379");
//! let opts = redis.bind_with(&vars).opts().unwrap();
//!
//! assert!(redis.is_cluster());
//! assert!(opts.iter().any(|o| o.kind() == "max_redirects"));
//! ```

mod traits;
pub mod file;
pub mod tls;
pub mod net;
pub mod mysql;
pub mod redis;
pub mod cassandra;
pub mod blob;
pub mod compress;
pub mod server;
pub mod global;

pub use traits::{
    bind_child, Bind, Synthesize,
    ConfigError, ConfigResult, OptsError, OptsResult,
};
pub use file::{load, read, to_raw_json, to_raw_yaml, FileFormat};
pub use tls::TLS;
pub use net::{Dialer, Net, SocketOption, DNS};
pub use mysql::MySQL;
pub use redis::Redis;
pub use cassandra::{Cassandra, PoolConfig, ReconnectionPolicy, RetryPolicy};
pub use blob::{Blob, CloudStorageClient, CloudStorageConfig, S3Config};
pub use compress::{BackupManager, CompressCore, Compressor, CompressorRegisterer};
pub use server::{Server, GRPCKeepalive, GRPC, HTTP};
pub use global::{GlobalConfig, Logging};
