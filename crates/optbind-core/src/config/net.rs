//! Network nodes: DNS cache, dialer timings, socket options

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::tls::TLS;
use super::traits::{bind_child, Bind, OptsError, OptsResult, Synthesize};
use crate::clients::dialer::{self, DialerOption, SocketFlag};
use crate::resolve::{bind_str, VarSource};

/// DNS cache settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DNS {
    pub cache_enabled: bool,
    pub refresh_duration: String,
    pub cache_expiration: String,
}

impl Bind for DNS {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.refresh_duration, vars);
        bind_str(&mut self.cache_expiration, vars);
        self
    }
}

/// Dialer timings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialer {
    pub timeout: String,
    pub keepalive: String,
    pub fallback_delay: String,
    pub dual_stack_enabled: bool,
}

impl Bind for Dialer {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.timeout, vars);
        bind_str(&mut self.keepalive, vars);
        bind_str(&mut self.fallback_delay, vars);
        self
    }
}

/// Socket-level switches, folded into a `SocketFlag` mask
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketOption {
    pub reuse_port: bool,
    pub reuse_addr: bool,
    pub tcp_fast_open: bool,
    pub tcp_no_delay: bool,
    pub tcp_cork: bool,
    pub tcp_quick_ack: bool,
    pub tcp_defer_accept: bool,
    pub ip_transparent: bool,
    pub ip_recover_destination_addr: bool,
}

impl Bind for SocketOption {
    fn bind_with(&mut self, _vars: &dyn VarSource) -> &mut Self {
        self
    }
}

impl SocketOption {
    pub fn to_socket_flag(&self) -> SocketFlag {
        [
            (self.reuse_port, SocketFlag::REUSE_PORT),
            (self.reuse_addr, SocketFlag::REUSE_ADDR),
            (self.tcp_fast_open, SocketFlag::TCP_FAST_OPEN),
            (self.tcp_no_delay, SocketFlag::TCP_NO_DELAY),
            (self.tcp_cork, SocketFlag::TCP_CORK),
            (self.tcp_quick_ack, SocketFlag::TCP_QUICK_ACK),
            (self.tcp_defer_accept, SocketFlag::TCP_DEFER_ACCEPT),
            (self.ip_transparent, SocketFlag::IP_TRANSPARENT),
            (self.ip_recover_destination_addr, SocketFlag::IP_RECOVER_DESTINATION_ADDR),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .fold(SocketFlag::empty(), |acc, (_, flag)| acc | flag)
    }
}

/// Network settings shared by every client that dials out
///
/// # Example
///
/// ```
/// use optbind_core::config::{Bind, Net, Synthesize, DNS};
/// use optbind_core::resolve::MemoryVars;
///
/// let mut net = Net {
///     dns: Some(DNS { cache_enabled: true, ..Default::default() }),
///     ..Default::default()
/// };
/// let opts = net.opts().unwrap();
/// assert_eq!(opts.len(), 3);
///
/// // binding materializes dialer and socket options too
/// net.bind_with(&MemoryVars::new());
/// assert_eq!(net.opts().unwrap().len(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Net {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<DNS>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialer: Option<Dialer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_option: Option<SocketOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TLS>,
}

impl Bind for Net {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_child(&mut self.dns, vars);
        bind_child(&mut self.dialer, vars);
        bind_child(&mut self.socket_option, vars);
        bind_child(&mut self.tls, vars);
        self
    }
}

impl Synthesize for Net {
    type Opt = DialerOption;

    fn opts(&mut self) -> OptsResult<Vec<DialerOption>> {
        self.opts_for("net")
    }
}

impl Net {
    /// Socket mask; empty when no socket option is configured
    pub fn socket_flag(&self) -> SocketFlag {
        self.socket_option
            .as_ref()
            .map(SocketOption::to_socket_flag)
            .unwrap_or_default()
    }

    /// Synthesize options and construct the dialer
    pub fn build_dialer(&mut self) -> OptsResult<dialer::Dialer> {
        self.build_dialer_for("net")
    }

    pub(crate) fn opts_for(&self, node: &'static str) -> OptsResult<Vec<DialerOption>> {
        let mut opts = Vec::new();

        if let Some(dns) = &self.dns {
            opts.push(DialerOption::DnsCacheExpiration(dns.cache_expiration.clone()));
            opts.push(DialerOption::DnsRefreshDuration(dns.refresh_duration.clone()));
            if dns.cache_enabled {
                opts.push(DialerOption::EnableDnsCache);
            }
        }

        if let Some(d) = &self.dialer {
            opts.push(DialerOption::Keepalive(d.keepalive.clone()));
            opts.push(DialerOption::Timeout(d.timeout.clone()));
            opts.push(DialerOption::FallbackDelay(d.fallback_delay.clone()));
            if d.dual_stack_enabled {
                opts.push(DialerOption::EnableDualStack);
            }
        }

        if let Some(so) = &self.socket_option {
            opts.push(DialerOption::SocketFlag(so.to_socket_flag()));
        }

        if let Some(tls) = self.tls.as_ref().filter(|t| t.enabled) {
            let ctx = tls.build().map_err(|source| {
                crate::warn_log!("{}: TLS material rejected: {}", node, source);
                OptsError::Tls { node, source }
            })?;
            opts.push(DialerOption::Tls(Arc::new(ctx)));
        }

        Ok(opts)
    }

    /// Build the dialer, attributing failures to `node`
    pub(crate) fn build_dialer_for(&self, node: &'static str) -> OptsResult<dialer::Dialer> {
        let opts = self.opts_for(node)?;
        dialer::Dialer::new(opts).map_err(|source| {
            crate::warn_log!("{}: dialer rejected: {}", node, source);
            OptsError::Dialer { node, source }
        })
    }
}
