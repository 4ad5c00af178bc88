//! Redis client options

use std::sync::Arc;

use super::dialer::Dialer;
use super::tls::TlsContext;

option_set! {
    /// Options for a single-node or cluster Redis client
    ///
    /// `MaxRedirects`, `RouteByLatency` and `RouteRandomly` only apply to a
    /// cluster; `Db` only applies to a single node.
    pub enum RedisOption {
        Addrs(Vec<String>) => "addrs",
        Network(String) => "network",
        DialTimeout(String) => "dial_timeout",
        IdleCheckFrequency(String) => "idle_check_frequency",
        IdleTimeout(String) => "idle_timeout",
        KeyPrefix(String) => "key_prefix",
        MaxConnAge(String) => "max_conn_age",
        MaxRetries(usize) => "max_retries",
        MaxRetryBackoff(String) => "max_retry_backoff",
        MinIdleConns(usize) => "min_idle_conns",
        MinRetryBackoff(String) => "min_retry_backoff",
        Password(String) => "password",
        PoolSize(usize) => "pool_size",
        PoolTimeout(String) => "pool_timeout",
        ReadOnly(bool) => "read_only",
        ReadTimeout(String) => "read_timeout",
        WriteTimeout(String) => "write_timeout",
        InitialPingTimeLimit(String) => "initial_ping_time_limit",
        InitialPingDuration(String) => "initial_ping_duration",
        TlsConfig(Arc<TlsContext>) => "tls_config",
        Dialer(Arc<Dialer>) => "dialer",
        MaxRedirects(usize) => "max_redirects",
        RouteByLatency(bool) => "route_by_latency",
        RouteRandomly(bool) => "route_randomly",
        Db(usize) => "db",
    }
}
