//! Cassandra driver options

use std::sync::Arc;

use super::dialer::Dialer;
use super::tls::TlsContext;
use crate::types::{Consistency, SerialConsistency};

option_set! {
    pub enum CassandraOption {
        Hosts(Vec<String>) => "hosts",
        CqlVersion(String) => "cql_version",
        ProtoVersion(u8) => "proto_version",
        Timeout(String) => "timeout",
        ConnectTimeout(String) => "connect_timeout",
        Port(u16) => "port",
        Keyspace(String) => "keyspace",
        NumConns(usize) => "num_conns",
        Consistency(Consistency) => "consistency",
        SerialConsistency(SerialConsistency) => "serial_consistency",
        Username(String) => "username",
        Password(String) => "password",

        DataCenter(String) => "data_center",
        DcAwareRouting(bool) => "dc_aware_routing",
        NonLocalReplicasFallback(bool) => "non_local_replicas_fallback",
        ShuffleReplicas(bool) => "shuffle_replicas",
        TokenAwareHostPolicy(bool) => "token_aware_host_policy",

        RetryPolicyNumRetries(usize) => "retry_policy_num_retries",
        RetryPolicyMinDuration(String) => "retry_policy_min_duration",
        RetryPolicyMaxDuration(String) => "retry_policy_max_duration",

        ReconnectionPolicyMaxRetries(usize) => "reconnection_policy_max_retries",
        ReconnectionPolicyInitialInterval(String) => "reconnection_policy_initial_interval",

        SocketKeepalive(String) => "socket_keepalive",
        MaxPreparedStmts(usize) => "max_prepared_stmts",
        MaxRoutingKeyInfo(usize) => "max_routing_key_info",
        PageSize(usize) => "page_size",
        DefaultTimestamp(bool) => "default_timestamp",
        ReconnectInterval(String) => "reconnect_interval",
        MaxWaitSchemaAgreement(String) => "max_wait_schema_agreement",
        IgnorePeerAddr(bool) => "ignore_peer_addr",
        DisableInitialHostLookup(bool) => "disable_initial_host_lookup",
        DisableNodeStatusEvents(bool) => "disable_node_status_events",
        DisableTopologyEvents(bool) => "disable_topology_events",
        DisableSchemaEvents(bool) => "disable_schema_events",
        DisableSkipMetadata(bool) => "disable_skip_metadata",
        DefaultIdempotence(bool) => "default_idempotence",
        WriteCoalesceWaitTime(String) => "write_coalesce_wait_time",
        KvTable(String) => "kv_table",
        VkTable(String) => "vk_table",
        MetaTable(String) => "meta_table",

        Tls(Arc<TlsContext>) => "tls",
        TlsCertPath(String) => "tls_cert_path",
        TlsKeyPath(String) => "tls_key_path",
        TlsCaPath(String) => "tls_ca_path",
        EnableHostVerification(bool) => "enable_host_verification",
        Dialer(Arc<Dialer>) => "dialer",
    }
}
