//! Compressor options

use crate::types::CompressAlgorithm;

option_set! {
    pub enum CompressorOption {
        Algorithm(CompressAlgorithm) => "algorithm",
        CompressionLevel(i32) => "compression_level",
        ConcurrentLimit(usize) => "concurrent_limit",
        QueueCheckDuration(String) => "queue_check_duration",
    }
}
