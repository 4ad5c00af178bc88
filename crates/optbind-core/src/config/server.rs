//! Server nodes

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::net::SocketOption;
use super::tls::TLS;
use super::traits::{bind_child, Bind, OptsError, OptsResult, Synthesize};
use crate::clients::server::ServerOption;
use crate::resolve::{bind_str, bind_strs, VarSource};
use crate::types::{NetworkType, ServerMode};

/// HTTP server timings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HTTP {
    pub shutdown_duration: String,
    pub handler_timeout: String,
    pub idle_timeout: String,
    pub read_header_timeout: String,
    pub read_timeout: String,
    pub write_timeout: String,
}

impl Bind for HTTP {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        for field in [
            &mut self.shutdown_duration,
            &mut self.handler_timeout,
            &mut self.idle_timeout,
            &mut self.read_header_timeout,
            &mut self.read_timeout,
            &mut self.write_timeout,
        ] {
            bind_str(field, vars);
        }
        self
    }
}

/// gRPC keepalive enforcement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GRPCKeepalive {
    pub max_conn_idle: String,
    pub max_conn_age: String,
    pub max_conn_age_grace: String,
    pub time: String,
    pub timeout: String,
    pub min_time: String,
    pub permit_without_stream: bool,
}

impl Bind for GRPCKeepalive {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        for field in [
            &mut self.max_conn_idle,
            &mut self.max_conn_age,
            &mut self.max_conn_age_grace,
            &mut self.time,
            &mut self.timeout,
            &mut self.min_time,
        ] {
            bind_str(field, vars);
        }
        self
    }
}

/// gRPC server limits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GRPC {
    pub max_receive_message_size: usize,
    pub max_send_message_size: usize,
    pub initial_window_size: usize,
    pub initial_conn_window_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive: Option<GRPCKeepalive>,
    pub write_buffer_size: usize,
    pub read_buffer_size: usize,
    pub connection_timeout: String,
    pub max_header_list_size: usize,
    pub header_table_size: usize,
    pub interceptors: Vec<String>,
    pub enable_reflection: bool,
}

impl Bind for GRPC {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.connection_timeout, vars);
        bind_strs(&mut self.interceptors, vars);
        bind_child(&mut self.keepalive, vars);
        self
    }
}

impl GRPC {
    fn opts(&self) -> Vec<ServerOption> {
        let mut opts = vec![
            ServerOption::GrpcMaxReceiveMessageSize(self.max_receive_message_size),
            ServerOption::GrpcMaxSendMessageSize(self.max_send_message_size),
            ServerOption::GrpcInitialWindowSize(self.initial_window_size),
            ServerOption::GrpcInitialConnWindowSize(self.initial_conn_window_size),
            ServerOption::GrpcWriteBufferSize(self.write_buffer_size),
            ServerOption::GrpcReadBufferSize(self.read_buffer_size),
            ServerOption::GrpcConnectionTimeout(self.connection_timeout.clone()),
            ServerOption::GrpcMaxHeaderListSize(self.max_header_list_size),
            ServerOption::GrpcHeaderTableSize(self.header_table_size),
            ServerOption::GrpcInterceptors(self.interceptors.clone()),
            ServerOption::GrpcEnableReflection(self.enable_reflection),
        ];

        if let Some(ka) = self.keepalive.as_ref().filter(|k| **k != GRPCKeepalive::default()) {
            opts.extend([
                ServerOption::GrpcKeepaliveMaxConnIdle(ka.max_conn_idle.clone()),
                ServerOption::GrpcKeepaliveMaxConnAge(ka.max_conn_age.clone()),
                ServerOption::GrpcKeepaliveMaxConnAgeGrace(ka.max_conn_age_grace.clone()),
                ServerOption::GrpcKeepaliveTime(ka.time.clone()),
                ServerOption::GrpcKeepaliveTimeout(ka.timeout.clone()),
                ServerOption::GrpcKeepaliveMinTime(ka.min_time.clone()),
                ServerOption::GrpcKeepalivePermitWithoutStream(ka.permit_without_stream),
            ]);
        }

        opts
    }
}

/// One listening server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub name: String,
    pub network: String,
    pub host: String,
    pub port: u16,
    pub socket_path: String,
    pub mode: String,
    pub readiness_wait_time: String,
    pub shutdown_duration: String,
    pub restart: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_option: Option<SocketOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HTTP>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc: Option<GRPC>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TLS>,
}

impl Bind for Server {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        for field in [
            &mut self.name,
            &mut self.network,
            &mut self.host,
            &mut self.socket_path,
            &mut self.mode,
            &mut self.readiness_wait_time,
            &mut self.shutdown_duration,
        ] {
            bind_str(field, vars);
        }
        bind_child(&mut self.socket_option, vars);
        bind_child(&mut self.http, vars);
        bind_child(&mut self.grpc, vars);
        bind_child(&mut self.tls, vars);
        self
    }
}

impl Synthesize for Server {
    type Opt = ServerOption;

    fn opts(&mut self) -> OptsResult<Vec<ServerOption>> {
        let network = NetworkType::canonicalize(&mut self.network, NetworkType::Tcp);
        let mode = ServerMode::canonicalize(&mut self.mode, ServerMode::Grpc);

        let mut opts = vec![
            ServerOption::Name(self.name.clone()),
            ServerOption::Network(network),
        ];

        if network.is_unix() {
            opts.push(ServerOption::SocketPath(self.socket_path.clone()));
        } else {
            opts.push(ServerOption::Host(self.host.clone()));
            opts.push(ServerOption::Port(self.port));
        }

        opts.extend([
            ServerOption::Mode(mode),
            ServerOption::ReadinessWaitTime(self.readiness_wait_time.clone()),
            ServerOption::ShutdownDuration(self.shutdown_duration.clone()),
            ServerOption::Restart(self.restart),
        ]);

        if let Some(so) = &self.socket_option {
            opts.push(ServerOption::SocketFlag(so.to_socket_flag()));
        }

        match mode {
            ServerMode::Rest => {
                if let Some(http) = &self.http {
                    opts.extend([
                        ServerOption::HttpShutdownDuration(http.shutdown_duration.clone()),
                        ServerOption::HttpHandlerTimeout(http.handler_timeout.clone()),
                        ServerOption::HttpIdleTimeout(http.idle_timeout.clone()),
                        ServerOption::HttpReadHeaderTimeout(http.read_header_timeout.clone()),
                        ServerOption::HttpReadTimeout(http.read_timeout.clone()),
                        ServerOption::HttpWriteTimeout(http.write_timeout.clone()),
                    ]);
                }
            }
            _ => {
                if let Some(grpc) = &self.grpc {
                    opts.extend(grpc.opts());
                }
            }
        }

        if let Some(tls) = self.tls.as_ref().filter(|t| t.enabled) {
            let ctx = tls.build().map_err(|source| {
                crate::warn_log!("server {}: TLS material rejected: {}", self.name, source);
                OptsError::Tls { node: "server", source }
            })?;
            opts.push(ServerOption::Tls(Arc::new(ctx)));
        }

        Ok(opts)
    }
}
