//! Client-side option vocabularies
//!
//! Each external client accepts an ordered list of options; the enums here
//! are what the synthesizers in `config` produce. Two collaborators are
//! fallible and have a local implementation:
//! - `tls::TlsContext::new`: loads PEM material from disk
//! - `dialer::Dialer::new`: parses and validates dialer timings
//!
//! The remaining clients (databases, blob storage, the server runtime) only
//! consume their option lists.

/// Declare a client option enum with a stable `kind()` name per variant
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident $( ( $($ty:ty),+ ) )? => $kind:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant $( ( $($ty),+ ) )?, )+
        }

        impl $name {
            /// Stable name of this option, independent of its value
            pub fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $kind, )+
                }
            }
        }
    };
}

pub mod dialer;
pub mod tls;
pub mod mysql;
pub mod redis;
pub mod cassandra;
pub mod blob;
pub mod compress;
pub mod server;

pub use dialer::{Dialer, DialerError, DialerOption, DialerResult, SocketFlag, parse_duration};
pub use tls::{TlsContext, TlsError, TlsOption, TlsResult};
pub use mysql::MySqlOption;
pub use redis::RedisOption;
pub use cassandra::CassandraOption;
pub use blob::BlobOption;
pub use compress::CompressorOption;
pub use server::ServerOption;

/// Collect the `kind()` of every option, in order
///
/// ```
/// use optbind_core::clients::{kinds, DialerOption};
///
/// let opts = vec![DialerOption::EnableDnsCache, DialerOption::Timeout("3s".into())];
/// assert_eq!(kinds(&opts, DialerOption::kind), vec!["enable_dns_cache", "timeout"]);
/// ```
pub fn kinds<T>(opts: &[T], kind: fn(&T) -> &'static str) -> Vec<&'static str> {
    opts.iter().map(kind).collect()
}
