//! Redis node

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::net::Net;
use super::tls::TLS;
use super::traits::{bind_child, Bind, OptsError, OptsResult, Synthesize};
use crate::clients::redis::RedisOption;
use crate::resolve::{bind_str, bind_strs, VarSource};
use crate::types::NetworkType;

/// Redis connection settings
///
/// More than one address selects the cluster client, which ignores `db`
/// and honors the routing fields instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redis {
    pub addrs: Vec<String>,
    pub db: usize,
    pub network: String,
    pub dial_timeout: String,
    pub idle_check_frequency: String,
    pub idle_timeout: String,
    pub initial_ping_time_limit: String,
    pub initial_ping_duration: String,
    pub key_pref: String,
    pub max_conn_age: String,
    pub max_redirects: usize,
    pub max_retries: usize,
    pub max_retry_backoff: String,
    pub min_idle_conns: usize,
    pub min_retry_backoff: String,
    pub password: String,
    pub pool_size: usize,
    pub pool_timeout: String,
    pub read_only: bool,
    pub read_timeout: String,
    pub route_by_latency: bool,
    pub route_randomly: bool,
    pub write_timeout: String,
    pub kv_prefix: String,
    pub vk_prefix: String,
    pub prefix_delimiter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TLS>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Net>,
}

impl Bind for Redis {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_strs(&mut self.addrs, vars);
        for field in [
            &mut self.network,
            &mut self.dial_timeout,
            &mut self.idle_check_frequency,
            &mut self.idle_timeout,
            &mut self.initial_ping_time_limit,
            &mut self.initial_ping_duration,
            &mut self.key_pref,
            &mut self.max_conn_age,
            &mut self.max_retry_backoff,
            &mut self.min_retry_backoff,
            &mut self.password,
            &mut self.pool_timeout,
            &mut self.read_timeout,
            &mut self.write_timeout,
            &mut self.kv_prefix,
            &mut self.vk_prefix,
            &mut self.prefix_delimiter,
        ] {
            bind_str(field, vars);
        }
        bind_child(&mut self.tls, vars);
        bind_child(&mut self.net, vars);
        self
    }
}

impl Redis {
    pub fn is_cluster(&self) -> bool {
        self.addrs.len() > 1
    }
}

impl Synthesize for Redis {
    type Opt = RedisOption;

    fn opts(&mut self) -> OptsResult<Vec<RedisOption>> {
        NetworkType::canonicalize(&mut self.network, NetworkType::Tcp);

        let mut opts = vec![
            RedisOption::Addrs(self.addrs.clone()),
            RedisOption::Network(self.network.clone()),
            RedisOption::DialTimeout(self.dial_timeout.clone()),
            RedisOption::IdleCheckFrequency(self.idle_check_frequency.clone()),
            RedisOption::IdleTimeout(self.idle_timeout.clone()),
            RedisOption::KeyPrefix(self.key_pref.clone()),
            RedisOption::MaxConnAge(self.max_conn_age.clone()),
            RedisOption::MaxRetries(self.max_retries),
            RedisOption::MaxRetryBackoff(self.max_retry_backoff.clone()),
            RedisOption::MinIdleConns(self.min_idle_conns),
            RedisOption::MinRetryBackoff(self.min_retry_backoff.clone()),
            RedisOption::Password(self.password.clone()),
            RedisOption::PoolSize(self.pool_size),
            RedisOption::PoolTimeout(self.pool_timeout.clone()),
            RedisOption::ReadOnly(self.read_only),
            RedisOption::ReadTimeout(self.read_timeout.clone()),
            RedisOption::WriteTimeout(self.write_timeout.clone()),
            RedisOption::InitialPingTimeLimit(self.initial_ping_time_limit.clone()),
            RedisOption::InitialPingDuration(self.initial_ping_duration.clone()),
        ];

        if let Some(tls) = self.tls.as_ref().filter(|t| t.enabled) {
            let ctx = tls.build().map_err(|source| {
                crate::warn_log!("redis: TLS material rejected: {}", source);
                OptsError::Tls { node: "redis", source }
            })?;
            opts.push(RedisOption::TlsConfig(Arc::new(ctx)));
        }

        if let Some(net) = &self.net {
            let dialer = net.build_dialer_for("redis")?;
            opts.push(RedisOption::Dialer(Arc::new(dialer)));
        }

        if self.is_cluster() {
            opts.extend([
                RedisOption::MaxRedirects(self.max_redirects),
                RedisOption::RouteByLatency(self.route_by_latency),
                RedisOption::RouteRandomly(self.route_randomly),
            ]);
        } else {
            opts.push(RedisOption::Db(self.db));
        }

        Ok(opts)
    }
}
