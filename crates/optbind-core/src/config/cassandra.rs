//! Cassandra node and its policy children

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::net::Net;
use super::tls::TLS;
use super::traits::{bind_child, Bind, OptsError, OptsResult, Synthesize};
use crate::clients::cassandra::CassandraOption;
use crate::resolve::{bind_str, bind_strs, VarSource};
use crate::types::{Consistency, SerialConsistency};

/// Host selection policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub data_center: String,
    pub dc_aware_routing: bool,
    pub non_local_replicas_fallback: bool,
    pub shuffle_replicas: bool,
    pub token_aware_host_policy: bool,
}

impl Bind for PoolConfig {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.data_center, vars);
        self
    }
}

/// Query retry policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub num_retries: usize,
    pub min_duration: String,
    pub max_duration: String,
}

impl Bind for RetryPolicy {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.min_duration, vars);
        bind_str(&mut self.max_duration, vars);
        self
    }
}

/// Reconnection policy for downed hosts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconnectionPolicy {
    pub max_retries: usize,
    pub initial_interval: String,
}

impl Bind for ReconnectionPolicy {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.initial_interval, vars);
        self
    }
}

/// Cassandra cluster settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cassandra {
    pub hosts: Vec<String>,
    pub cql_version: String,
    pub proto_version: u8,
    pub timeout: String,
    pub connect_timeout: String,
    pub port: u16,
    pub keyspace: String,
    pub num_conns: usize,
    pub consistency: String,
    pub serial_consistency: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_config: Option<PoolConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_policy: Option<RetryPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconnection_policy: Option<ReconnectionPolicy>,
    pub socket_keepalive: String,
    pub max_prepared_stmts: usize,
    pub max_routing_key_info: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TLS>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Net>,
    pub enable_host_verification: bool,
    pub default_timestamp: bool,
    pub reconnect_interval: String,
    pub max_wait_schema_agreement: String,
    pub ignore_peer_addr: bool,
    pub disable_initial_host_lookup: bool,
    pub disable_node_status_events: bool,
    pub disable_topology_events: bool,
    pub disable_schema_events: bool,
    pub disable_skip_metadata: bool,
    pub default_idempotence: bool,
    pub write_coalesce_wait_time: String,
    pub kv_table: String,
    pub vk_table: String,
    pub meta_table: String,
}

impl Bind for Cassandra {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_strs(&mut self.hosts, vars);
        for field in [
            &mut self.cql_version,
            &mut self.timeout,
            &mut self.connect_timeout,
            &mut self.keyspace,
            &mut self.consistency,
            &mut self.serial_consistency,
            &mut self.username,
            &mut self.password,
            &mut self.socket_keepalive,
            &mut self.reconnect_interval,
            &mut self.max_wait_schema_agreement,
            &mut self.write_coalesce_wait_time,
            &mut self.kv_table,
            &mut self.vk_table,
            &mut self.meta_table,
        ] {
            bind_str(field, vars);
        }
        bind_child(&mut self.pool_config, vars);
        bind_child(&mut self.retry_policy, vars);
        bind_child(&mut self.reconnection_policy, vars);
        bind_child(&mut self.tls, vars);
        bind_child(&mut self.net, vars);
        self
    }
}

/// A child worth emitting: present and not all defaults
fn configured<T: Default + PartialEq>(child: &Option<T>) -> Option<&T> {
    child.as_ref().filter(|c| **c != T::default())
}

impl Synthesize for Cassandra {
    type Opt = CassandraOption;

    fn opts(&mut self) -> OptsResult<Vec<CassandraOption>> {
        let consistency = Consistency::canonicalize(&mut self.consistency, Consistency::Quorum);
        let serial_consistency = SerialConsistency::canonicalize(
            &mut self.serial_consistency,
            SerialConsistency::LocalSerial,
        );

        let mut opts = vec![
            CassandraOption::Hosts(self.hosts.clone()),
            CassandraOption::CqlVersion(self.cql_version.clone()),
            CassandraOption::ProtoVersion(self.proto_version),
            CassandraOption::Timeout(self.timeout.clone()),
            CassandraOption::ConnectTimeout(self.connect_timeout.clone()),
            CassandraOption::Port(self.port),
            CassandraOption::Keyspace(self.keyspace.clone()),
            CassandraOption::NumConns(self.num_conns),
            CassandraOption::Consistency(consistency),
            CassandraOption::SerialConsistency(serial_consistency),
            CassandraOption::Username(self.username.clone()),
            CassandraOption::Password(self.password.clone()),
        ];

        if let Some(pool) = configured(&self.pool_config) {
            opts.extend([
                CassandraOption::DataCenter(pool.data_center.clone()),
                CassandraOption::DcAwareRouting(pool.dc_aware_routing),
                CassandraOption::NonLocalReplicasFallback(pool.non_local_replicas_fallback),
                CassandraOption::ShuffleReplicas(pool.shuffle_replicas),
                CassandraOption::TokenAwareHostPolicy(pool.token_aware_host_policy),
            ]);
        }

        if let Some(retry) = configured(&self.retry_policy) {
            opts.extend([
                CassandraOption::RetryPolicyNumRetries(retry.num_retries),
                CassandraOption::RetryPolicyMinDuration(retry.min_duration.clone()),
                CassandraOption::RetryPolicyMaxDuration(retry.max_duration.clone()),
            ]);
        }

        if let Some(reconnect) = configured(&self.reconnection_policy) {
            opts.extend([
                CassandraOption::ReconnectionPolicyMaxRetries(reconnect.max_retries),
                CassandraOption::ReconnectionPolicyInitialInterval(
                    reconnect.initial_interval.clone(),
                ),
            ]);
        }

        opts.extend([
            CassandraOption::SocketKeepalive(self.socket_keepalive.clone()),
            CassandraOption::MaxPreparedStmts(self.max_prepared_stmts),
            CassandraOption::MaxRoutingKeyInfo(self.max_routing_key_info),
            CassandraOption::PageSize(self.page_size),
            CassandraOption::DefaultTimestamp(self.default_timestamp),
            CassandraOption::ReconnectInterval(self.reconnect_interval.clone()),
            CassandraOption::MaxWaitSchemaAgreement(self.max_wait_schema_agreement.clone()),
            CassandraOption::IgnorePeerAddr(self.ignore_peer_addr),
            CassandraOption::DisableInitialHostLookup(self.disable_initial_host_lookup),
            CassandraOption::DisableNodeStatusEvents(self.disable_node_status_events),
            CassandraOption::DisableTopologyEvents(self.disable_topology_events),
            CassandraOption::DisableSchemaEvents(self.disable_schema_events),
            CassandraOption::DisableSkipMetadata(self.disable_skip_metadata),
            CassandraOption::DefaultIdempotence(self.default_idempotence),
            CassandraOption::WriteCoalesceWaitTime(self.write_coalesce_wait_time.clone()),
            CassandraOption::KvTable(self.kv_table.clone()),
            CassandraOption::VkTable(self.vk_table.clone()),
            CassandraOption::MetaTable(self.meta_table.clone()),
        ]);

        if let Some(tls) = self.tls.as_ref().filter(|t| t.enabled) {
            let ctx = tls.build().map_err(|source| {
                crate::warn_log!("cassandra: TLS material rejected: {}", source);
                OptsError::Tls { node: "cassandra", source }
            })?;
            opts.extend([
                CassandraOption::Tls(Arc::new(ctx)),
                CassandraOption::TlsCertPath(tls.cert.clone()),
                CassandraOption::TlsKeyPath(tls.key.clone()),
                CassandraOption::TlsCaPath(tls.ca.clone()),
                CassandraOption::EnableHostVerification(self.enable_host_verification),
            ]);
        }

        if let Some(net) = &self.net {
            let dialer = net.build_dialer_for("cassandra")?;
            opts.push(CassandraOption::Dialer(Arc::new(dialer)));
        }

        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::tls::fixtures::write_material;
    use crate::clients::kinds;
    use crate::resolve::MemoryVars;
    use tempfile::tempdir;

    #[test]
    fn test_bind() {
        let vars = MemoryVars::new()
            .with("CASSANDRA_HOST", "cassandra-0")
            .with("CASSANDRA_DC", "dc1");
        let mut c = Cassandra {
            hosts: vec!["_CASSANDRA_HOST_".to_string(), "cassandra-1".to_string()],
            keyspace: "vald".to_string(),
            pool_config: Some(PoolConfig {
                data_center: "_CASSANDRA_DC_".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        c.bind_with(&vars);

        assert_eq!(c.hosts, vec!["cassandra-0", "cassandra-1"]);
        assert_eq!(c.pool_config.as_ref().unwrap().data_center, "dc1");
        assert_eq!(c.retry_policy, Some(RetryPolicy::default()));
        assert_eq!(c.reconnection_policy, Some(ReconnectionPolicy::default()));
        assert!(c.tls.is_some());
        assert!(c.net.is_some());

        let once = c.clone();
        c.bind_with(&vars);
        assert_eq!(c, once);
    }

    #[test]
    fn test_opts_base() {
        let mut c = Cassandra::default();
        let opts = c.opts().unwrap();
        assert_eq!(opts.len(), 30);
        assert_eq!(opts[8], CassandraOption::Consistency(Consistency::Quorum));
        assert_eq!(
            opts[9],
            CassandraOption::SerialConsistency(SerialConsistency::LocalSerial)
        );
        assert_eq!(c.consistency, "quorum");
        assert_eq!(c.serial_consistency, "localserial");
    }

    #[test]
    fn test_consistency_normalization() {
        let mut c = Cassandra {
            consistency: "LocalQuorum".to_string(),
            serial_consistency: "SERIAL".to_string(),
            ..Default::default()
        };
        let opts = c.opts().unwrap();
        assert_eq!(c.consistency, "localquorum");
        assert_eq!(c.serial_consistency, "serial");
        assert!(opts.contains(&CassandraOption::Consistency(Consistency::LocalQuorum)));
    }

    #[test]
    fn test_default_policies_are_skipped() {
        let mut c = Cassandra::default();
        c.bind_with(&MemoryVars::new());
        let opts = c.opts().unwrap();
        let kinds = kinds(&opts, CassandraOption::kind);

        // only the dialer is added on top of the base options
        assert_eq!(opts.len(), 31);
        assert!(!kinds.contains(&"dc_aware_routing"));
        assert!(!kinds.contains(&"retry_policy_num_retries"));
        assert!(!kinds.contains(&"reconnection_policy_max_retries"));
        assert_eq!(kinds.last(), Some(&"dialer"));
    }

    #[test]
    fn test_configured_policies() {
        let mut c = Cassandra {
            pool_config: Some(PoolConfig {
                dc_aware_routing: true,
                ..Default::default()
            }),
            retry_policy: Some(RetryPolicy {
                num_retries: 3,
                min_duration: "1s".to_string(),
                max_duration: "30s".to_string(),
            }),
            reconnection_policy: Some(ReconnectionPolicy {
                max_retries: 5,
                initial_interval: "1m".to_string(),
            }),
            ..Default::default()
        };
        let opts = c.opts().unwrap();
        let kinds = kinds(&opts, CassandraOption::kind);

        assert_eq!(opts.len(), 40);
        assert_eq!(
            &kinds[12..22],
            &[
                "data_center",
                "dc_aware_routing",
                "non_local_replicas_fallback",
                "shuffle_replicas",
                "token_aware_host_policy",
                "retry_policy_num_retries",
                "retry_policy_min_duration",
                "retry_policy_max_duration",
                "reconnection_policy_max_retries",
                "reconnection_policy_initial_interval",
            ]
        );
    }

    #[test]
    fn test_tls_group() {
        let dir = tempdir().unwrap();
        let (cert, key, ca) = write_material(dir.path());
        let mut c = Cassandra {
            enable_host_verification: true,
            tls: Some(TLS {
                enabled: true,
                cert: cert.display().to_string(),
                key: key.display().to_string(),
                ca: ca.display().to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let opts = c.opts().unwrap();
        let kinds = kinds(&opts, CassandraOption::kind);

        assert_eq!(opts.len(), 35);
        assert_eq!(
            &kinds[30..],
            &["tls", "tls_cert_path", "tls_key_path", "tls_ca_path", "enable_host_verification"]
        );
        assert_eq!(opts[34], CassandraOption::EnableHostVerification(true));
    }

    #[test]
    fn test_tls_failure() {
        let mut c = Cassandra {
            tls: Some(TLS {
                enabled: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = c.opts().unwrap_err();
        assert!(matches!(err, OptsError::Tls { node: "cassandra", .. }));
    }
}
