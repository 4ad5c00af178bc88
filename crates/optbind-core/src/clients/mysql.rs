//! MySQL driver options

use std::sync::Arc;

use super::dialer::Dialer;
use super::tls::TlsContext;

option_set! {
    pub enum MySqlOption {
        Timezone(String) => "timezone",
        Charset(String) => "charset",
        /// Driver name registered with the connection pool
        Db(String) => "db",
        Network(String) => "network",
        Host(String) => "host",
        Port(u16) => "port",
        User(String) => "user",
        Pass(String) => "pass",
        /// Database (schema) name
        Name(String) => "name",
        InitialPingTimeLimit(String) => "initial_ping_time_limit",
        InitialPingDuration(String) => "initial_ping_duration",
        ConnMaxLifeTime(String) => "conn_max_life_time",
        MaxIdleConns(usize) => "max_idle_conns",
        MaxOpenConns(usize) => "max_open_conns",
        TlsConfig(Arc<TlsContext>) => "tls_config",
        Dialer(Arc<Dialer>) => "dialer",
    }
}
