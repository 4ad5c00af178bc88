//! Network dialer settings

use std::ops::{BitOr, BitOrAssign};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use super::tls::TlsContext;

/// Bitmask of socket options applied to dialed connections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SocketFlag(u32);

impl SocketFlag {
    pub const REUSE_PORT: SocketFlag = SocketFlag(0x1);
    pub const REUSE_ADDR: SocketFlag = SocketFlag(0x2);
    pub const TCP_FAST_OPEN: SocketFlag = SocketFlag(0x4);
    pub const TCP_NO_DELAY: SocketFlag = SocketFlag(0x8);
    pub const TCP_CORK: SocketFlag = SocketFlag(0x10);
    pub const TCP_QUICK_ACK: SocketFlag = SocketFlag(0x20);
    pub const TCP_DEFER_ACCEPT: SocketFlag = SocketFlag(0x40);
    pub const IP_TRANSPARENT: SocketFlag = SocketFlag(0x80);
    pub const IP_RECOVER_DESTINATION_ADDR: SocketFlag = SocketFlag(0x100);

    pub const fn empty() -> Self {
        SocketFlag(0)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Build from raw bits, dropping any that do not name a flag
    pub const fn from_bits_truncate(bits: u32) -> Self {
        SocketFlag(bits & 0x1ff)
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn contains(&self, other: SocketFlag) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SocketFlag {
    type Output = SocketFlag;

    fn bitor(self, rhs: SocketFlag) -> SocketFlag {
        SocketFlag(self.0 | rhs.0)
    }
}

impl BitOrAssign for SocketFlag {
    fn bitor_assign(&mut self, rhs: SocketFlag) {
        self.0 |= rhs.0;
    }
}

option_set! {
    /// Options accepted by `Dialer::new`
    ///
    /// Durations are carried as strings (`"30s"`, `"1h30m"`) and parsed by
    /// the dialer; an empty string keeps the default.
    pub enum DialerOption {
        DnsCacheExpiration(String) => "dns_cache_expiration",
        DnsRefreshDuration(String) => "dns_refresh_duration",
        EnableDnsCache => "enable_dns_cache",
        Keepalive(String) => "keepalive",
        Timeout(String) => "timeout",
        FallbackDelay(String) => "fallback_delay",
        EnableDualStack => "enable_dual_stack",
        SocketFlag(SocketFlag) => "socket_flag",
        Tls(Arc<TlsContext>) => "tls",
    }
}

/// Errors that can occur while building a dialer
#[derive(Debug, thiserror::Error)]
pub enum DialerError {
    #[error("Invalid duration for {field}: {value:?}")]
    InvalidDuration { field: &'static str, value: String },

    #[error("DNS refresh duration {refresh:?} exceeds cache expiration {expiration:?}")]
    InvalidDnsConfig { refresh: Duration, expiration: Duration },
}

pub type DialerResult<T> = Result<T, DialerError>;

const DEFAULT_KEEPALIVE: Duration = Duration::from_secs(30);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(300);
const DEFAULT_DNS_REFRESH: Duration = Duration::from_secs(30 * 60);
const DEFAULT_DNS_EXPIRATION: Duration = Duration::from_secs(60 * 60);

/// Validated dialer settings
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use optbind_core::clients::{Dialer, DialerOption};
///
/// let dialer = Dialer::new(vec![
///     DialerOption::Timeout("3s".into()),
///     DialerOption::EnableDnsCache,
/// ]).unwrap();
///
/// assert_eq!(dialer.timeout(), Duration::from_secs(3));
/// assert!(dialer.dns_cache_enabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dialer {
    keepalive: Duration,
    timeout: Duration,
    fallback_delay: Duration,
    dual_stack: bool,
    dns_cache: bool,
    dns_refresh: Duration,
    dns_expiration: Duration,
    socket_flag: SocketFlag,
    tls: Option<Arc<TlsContext>>,
}

impl Default for Dialer {
    fn default() -> Self {
        Self {
            keepalive: DEFAULT_KEEPALIVE,
            timeout: DEFAULT_TIMEOUT,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
            dual_stack: false,
            dns_cache: false,
            dns_refresh: DEFAULT_DNS_REFRESH,
            dns_expiration: DEFAULT_DNS_EXPIRATION,
            socket_flag: SocketFlag::empty(),
            tls: None,
        }
    }
}

impl Dialer {
    pub fn new(opts: impl IntoIterator<Item = DialerOption>) -> DialerResult<Self> {
        let mut d = Self::default();

        for opt in opts {
            match opt {
                DialerOption::DnsCacheExpiration(v) => {
                    set_duration(&mut d.dns_expiration, "dns_cache_expiration", &v)?
                }
                DialerOption::DnsRefreshDuration(v) => {
                    set_duration(&mut d.dns_refresh, "dns_refresh_duration", &v)?
                }
                DialerOption::EnableDnsCache => d.dns_cache = true,
                DialerOption::Keepalive(v) => set_duration(&mut d.keepalive, "keepalive", &v)?,
                DialerOption::Timeout(v) => set_duration(&mut d.timeout, "timeout", &v)?,
                DialerOption::FallbackDelay(v) => {
                    set_duration(&mut d.fallback_delay, "fallback_delay", &v)?
                }
                DialerOption::EnableDualStack => d.dual_stack = true,
                DialerOption::SocketFlag(flag) => d.socket_flag = flag,
                DialerOption::Tls(ctx) => d.tls = Some(ctx),
            }
        }

        if d.dns_cache && d.dns_refresh > d.dns_expiration {
            return Err(DialerError::InvalidDnsConfig {
                refresh: d.dns_refresh,
                expiration: d.dns_expiration,
            });
        }

        Ok(d)
    }

    pub fn keepalive(&self) -> Duration {
        self.keepalive
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn fallback_delay(&self) -> Duration {
        self.fallback_delay
    }

    pub fn dual_stack(&self) -> bool {
        self.dual_stack
    }

    pub fn dns_cache_enabled(&self) -> bool {
        self.dns_cache
    }

    pub fn dns_refresh(&self) -> Duration {
        self.dns_refresh
    }

    pub fn dns_expiration(&self) -> Duration {
        self.dns_expiration
    }

    pub fn socket_flag(&self) -> SocketFlag {
        self.socket_flag
    }

    pub fn tls(&self) -> Option<&Arc<TlsContext>> {
        self.tls.as_ref()
    }
}

fn set_duration(slot: &mut Duration, field: &'static str, value: &str) -> DialerResult<()> {
    if value.is_empty() {
        return Ok(());
    }
    *slot = parse_duration(value).ok_or_else(|| DialerError::InvalidDuration {
        field,
        value: value.to_string(),
    })?;
    Ok(())
}

/// Parse a duration such as `"300ms"`, `"1.5h"` or `"1h30m"`
///
/// Units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`; a bare `"0"` and
/// the empty string are zero. Negative values are rejected.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() || s == "0" {
        return Some(Duration::ZERO);
    }

    let (whole, term) = DURATION_GRAMMAR.as_ref()?;
    if !whole.is_match(s) {
        return None;
    }

    let mut nanos = 0f64;
    for captures in term.captures_iter(s) {
        let value: f64 = captures[1].parse().ok()?;
        let scale = match &captures[2] {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            _ => return None,
        };
        nanos += value * scale;
    }

    if !nanos.is_finite() || nanos > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(nanos.round() as u64))
}

const DURATION_TERM: &str = r"([0-9]+(?:\.[0-9]*)?|\.[0-9]+)(ns|us|µs|ms|s|m|h)";

/// Full-string grammar and the per-term pattern
static DURATION_GRAMMAR: Lazy<Option<(Regex, Regex)>> = Lazy::new(|| {
    let whole = Regex::new(&format!("^(?:{})+$", DURATION_TERM)).ok()?;
    let term = Regex::new(DURATION_TERM).ok()?;
    Some((whole, term))
});
