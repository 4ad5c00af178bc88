//! Compression nodes

use serde::{Deserialize, Serialize};

use super::net::Net;
use super::traits::{bind_child, Bind, OptsResult, Synthesize};
use crate::clients::compress::CompressorOption;
use crate::resolve::{bind_str, VarSource};
use crate::types::CompressAlgorithm;

/// Algorithm and level shared by every compressor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressCore {
    pub compress_algorithm: String,
    pub compression_level: i32,
}

impl Bind for CompressCore {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.compress_algorithm, vars);
        self
    }
}

impl Synthesize for CompressCore {
    type Opt = CompressorOption;

    fn opts(&mut self) -> OptsResult<Vec<CompressorOption>> {
        let algorithm =
            CompressAlgorithm::canonicalize(&mut self.compress_algorithm, CompressAlgorithm::Zstd);
        Ok(vec![
            CompressorOption::Algorithm(algorithm),
            CompressorOption::CompressionLevel(self.compression_level),
        ])
    }
}

/// Compressor worker settings
///
/// The core fields sit at the top level of the document:
///
/// ```yaml
/// compress_algorithm: gzip
/// compression_level: 6
/// concurrent_limit: 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compressor {
    #[serde(flatten)]
    pub compress_core: CompressCore,
    pub concurrent_limit: usize,
    pub queue_check_duration: String,
}

impl Bind for Compressor {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        self.compress_core.bind_with(vars);
        bind_str(&mut self.queue_check_duration, vars);
        self
    }
}

impl Synthesize for Compressor {
    type Opt = CompressorOption;

    fn opts(&mut self) -> OptsResult<Vec<CompressorOption>> {
        let mut opts = self.compress_core.opts()?;
        opts.push(CompressorOption::ConcurrentLimit(self.concurrent_limit));
        opts.push(CompressorOption::QueueCheckDuration(self.queue_check_duration.clone()));
        Ok(opts)
    }
}

/// Address of the backup manager a compressor forwards to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupManager {
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<Net>,
}

impl Bind for BackupManager {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.host, vars);
        bind_child(&mut self.net, vars);
        self
    }
}

/// Registration queue in front of the compressor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressorRegisterer {
    pub concurrent_limit: usize,
    pub queue_check_duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressor: Option<BackupManager>,
}

impl Bind for CompressorRegisterer {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.queue_check_duration, vars);
        bind_child(&mut self.compressor, vars);
        self
    }
}
