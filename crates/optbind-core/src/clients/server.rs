//! Server runtime options

use std::sync::Arc;

use super::dialer::SocketFlag;
use super::tls::TlsContext;
use crate::types::{NetworkType, ServerMode};

option_set! {
    /// Options for one listening server
    ///
    /// The `Http*` group is produced for `rest` servers and the `Grpc*`
    /// group for `grpc` servers.
    pub enum ServerOption {
        Name(String) => "name",
        Network(NetworkType) => "network",
        SocketPath(String) => "socket_path",
        Host(String) => "host",
        Port(u16) => "port",
        Mode(ServerMode) => "mode",
        ReadinessWaitTime(String) => "readiness_wait_time",
        ShutdownDuration(String) => "shutdown_duration",
        Restart(bool) => "restart",
        SocketFlag(SocketFlag) => "socket_flag",

        HttpShutdownDuration(String) => "http_shutdown_duration",
        HttpHandlerTimeout(String) => "http_handler_timeout",
        HttpIdleTimeout(String) => "http_idle_timeout",
        HttpReadHeaderTimeout(String) => "http_read_header_timeout",
        HttpReadTimeout(String) => "http_read_timeout",
        HttpWriteTimeout(String) => "http_write_timeout",

        GrpcMaxReceiveMessageSize(usize) => "grpc_max_receive_message_size",
        GrpcMaxSendMessageSize(usize) => "grpc_max_send_message_size",
        GrpcInitialWindowSize(usize) => "grpc_initial_window_size",
        GrpcInitialConnWindowSize(usize) => "grpc_initial_conn_window_size",
        GrpcWriteBufferSize(usize) => "grpc_write_buffer_size",
        GrpcReadBufferSize(usize) => "grpc_read_buffer_size",
        GrpcConnectionTimeout(String) => "grpc_connection_timeout",
        GrpcMaxHeaderListSize(usize) => "grpc_max_header_list_size",
        GrpcHeaderTableSize(usize) => "grpc_header_table_size",
        GrpcInterceptors(Vec<String>) => "grpc_interceptors",
        GrpcEnableReflection(bool) => "grpc_enable_reflection",

        GrpcKeepaliveMaxConnIdle(String) => "grpc_keepalive_max_conn_idle",
        GrpcKeepaliveMaxConnAge(String) => "grpc_keepalive_max_conn_age",
        GrpcKeepaliveMaxConnAgeGrace(String) => "grpc_keepalive_max_conn_age_grace",
        GrpcKeepaliveTime(String) => "grpc_keepalive_time",
        GrpcKeepaliveTimeout(String) => "grpc_keepalive_timeout",
        GrpcKeepaliveMinTime(String) => "grpc_keepalive_min_time",
        GrpcKeepalivePermitWithoutStream(bool) => "grpc_keepalive_permit_without_stream",

        Tls(Arc<TlsContext>) => "tls",
    }
}
