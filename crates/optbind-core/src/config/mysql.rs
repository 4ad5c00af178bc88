//! MySQL node

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::net::Net;
use super::tls::TLS;
use super::traits::{bind_child, Bind, OptsError, OptsResult, Synthesize};
use crate::clients::mysql::MySqlOption;
use crate::resolve::{bind_str, VarSource};
use crate::types::NetworkType;

/// MySQL connection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MySQL {
    pub db: String,
    pub network: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub name: String,
    pub charset: String,
    pub timezone: String,
    pub initial_ping_time_limit: String,
    pub initial_ping_duration: String,
    pub conn_max_life_time: String,
    pub max_open_conns: usize,
    pub max_idle_conns: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TLS>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Net>,
}

impl Bind for MySQL {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        for field in [
            &mut self.db,
            &mut self.network,
            &mut self.host,
            &mut self.user,
            &mut self.pass,
            &mut self.name,
            &mut self.charset,
            &mut self.timezone,
            &mut self.initial_ping_time_limit,
            &mut self.initial_ping_duration,
            &mut self.conn_max_life_time,
        ] {
            bind_str(field, vars);
        }
        bind_child(&mut self.tls, vars);
        bind_child(&mut self.net, vars);
        self
    }
}

impl Synthesize for MySQL {
    type Opt = MySqlOption;

    fn opts(&mut self) -> OptsResult<Vec<MySqlOption>> {
        NetworkType::canonicalize(&mut self.network, NetworkType::Tcp);

        let mut opts = vec![
            MySqlOption::Timezone(self.timezone.clone()),
            MySqlOption::Charset(self.charset.clone()),
            MySqlOption::Db(self.db.clone()),
            MySqlOption::Network(self.network.clone()),
            MySqlOption::Host(self.host.clone()),
            MySqlOption::Port(self.port),
            MySqlOption::User(self.user.clone()),
            MySqlOption::Pass(self.pass.clone()),
            MySqlOption::Name(self.name.clone()),
            MySqlOption::InitialPingTimeLimit(self.initial_ping_time_limit.clone()),
            MySqlOption::InitialPingDuration(self.initial_ping_duration.clone()),
            MySqlOption::ConnMaxLifeTime(self.conn_max_life_time.clone()),
            MySqlOption::MaxIdleConns(self.max_idle_conns),
            MySqlOption::MaxOpenConns(self.max_open_conns),
        ];

        if let Some(tls) = self.tls.as_ref().filter(|t| t.enabled) {
            let ctx = tls.build().map_err(|source| {
                crate::warn_log!("mysql: TLS material rejected: {}", source);
                OptsError::Tls { node: "mysql", source }
            })?;
            opts.push(MySqlOption::TlsConfig(Arc::new(ctx)));
        }

        if let Some(net) = &self.net {
            let dialer = net.build_dialer_for("mysql")?;
            opts.push(MySqlOption::Dialer(Arc::new(dialer)));
        }

        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::dialer::DialerError;
    use crate::clients::tls::fixtures::write_material;
    use crate::config::net::DNS;
    use crate::resolve::MemoryVars;
    use std::env;
    use tempfile::tempdir;

    fn sample() -> MySQL {
        MySQL {
            db: "mysql".to_string(),
            host: "_FOO_BIND_HOST_".to_string(),
            port: 3306,
            user: "_MYSQL_USER_".to_string(),
            pass: "_MYSQL_PASS_".to_string(),
            name: "vald".to_string(),
            charset: "utf8mb4".to_string(),
            timezone: "UTC".to_string(),
            initial_ping_time_limit: "30s".to_string(),
            initial_ping_duration: "1s".to_string(),
            conn_max_life_time: "10m".to_string(),
            max_open_conns: 10,
            max_idle_conns: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_bind() {
        let vars = MemoryVars::new()
            .with("FOO_BIND_HOST", "db.internal")
            .with("MYSQL_USER", "root");
        let mut mysql = sample();
        mysql.bind_with(&vars);

        assert_eq!(mysql.host, "db.internal");
        assert_eq!(mysql.user, "root");
        assert_eq!(mysql.pass, "");
        assert_eq!(mysql.port, 3306);
        assert_eq!(mysql.tls, Some(TLS::default()));
        assert!(mysql.net.as_ref().and_then(|n| n.dns.as_ref()).is_some());

        let once = mysql.clone();
        mysql.bind_with(&vars);
        assert_eq!(mysql, once);
    }

    #[test]
    fn test_bind_process_env() {
        env::set_var("OPTBIND_TEST_MYSQL_NAME", "prod");
        let mut mysql = MySQL {
            name: "_OPTBIND_TEST_MYSQL_NAME_".to_string(),
            ..Default::default()
        };
        mysql.bind();
        env::remove_var("OPTBIND_TEST_MYSQL_NAME");

        assert_eq!(mysql.name, "prod");
    }

    #[test]
    fn test_opts_base() {
        let mut mysql = sample();
        let opts = mysql.opts().unwrap();
        assert_eq!(opts.len(), 14);
        assert_eq!(opts[0], MySqlOption::Timezone("UTC".to_string()));
        assert_eq!(opts[5], MySqlOption::Port(3306));
        assert_eq!(opts[13], MySqlOption::MaxOpenConns(10));
    }

    #[test]
    fn test_opts_with_net_and_tls() {
        let dir = tempdir().unwrap();
        let (cert, key, _) = write_material(dir.path());

        let mut mysql = sample();
        mysql.tls = Some(TLS {
            enabled: true,
            cert: cert.display().to_string(),
            key: key.display().to_string(),
            ..Default::default()
        });
        mysql.bind_with(&MemoryVars::new());

        let opts = mysql.opts().unwrap();
        assert_eq!(opts.len(), 16);
        assert_eq!(opts[14].kind(), "tls_config");
        assert_eq!(opts[15].kind(), "dialer");
    }

    #[test]
    fn test_opts_invalid_tls() {
        let mut mysql = sample();
        mysql.tls = Some(TLS {
            enabled: true,
            ..Default::default()
        });
        let err = mysql.opts().unwrap_err();
        assert_eq!(err.node(), "mysql");
        assert!(matches!(err, OptsError::Tls { .. }));
    }

    #[test]
    fn test_opts_invalid_dns_config() {
        let mut mysql = sample();
        mysql.net = Some(Net {
            dns: Some(DNS {
                cache_enabled: true,
                refresh_duration: "10m".to_string(),
                cache_expiration: "1m".to_string(),
            }),
            ..Default::default()
        });
        match mysql.opts() {
            Err(OptsError::Dialer { node, source }) => {
                assert_eq!(node, "mysql");
                assert!(matches!(source, DialerError::InvalidDnsConfig { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_network_normalization() {
        for (raw, want) in [("unknown", "tcp"), ("", "tcp"), ("TCP6", "tcp6"), ("Unix", "unix")] {
            let mut mysql = MySQL {
                network: raw.to_string(),
                ..Default::default()
            };
            let opts = mysql.opts().unwrap();
            assert_eq!(mysql.network, want);
            assert_eq!(opts[3], MySqlOption::Network(want.to_string()));
        }
    }
}
