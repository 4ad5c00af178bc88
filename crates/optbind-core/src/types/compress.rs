//! Compression algorithms

vocabulary! {
    /// Algorithm used by compressor nodes
    pub enum CompressAlgorithm {
        Gob = 1 => "gob",
        Gzip = 2 => "gzip",
        Lz4 = 3 => "lz4",
        Zstd = 4 => "zstd",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_algorithm_to_string() {
        assert_eq!(CompressAlgorithm::Gob.to_string(), "gob");
        assert_eq!(CompressAlgorithm::Gzip.to_string(), "gzip");
        assert_eq!(CompressAlgorithm::Lz4.to_string(), "lz4");
        assert_eq!(CompressAlgorithm::Zstd.to_string(), "zstd");
        assert_eq!(CompressAlgorithm::from(0).to_string(), "unknown");
        assert_eq!(CompressAlgorithm::from(100).to_string(), "unknown");
    }

    #[test]
    fn test_compress_algorithm_parse_is_case_insensitive() {
        assert_eq!(CompressAlgorithm::parse("gob"), CompressAlgorithm::Gob);
        assert_eq!(CompressAlgorithm::parse("gOB"), CompressAlgorithm::Gob);
        assert_eq!(CompressAlgorithm::parse("GZIP"), CompressAlgorithm::parse("gzip"));
        assert_eq!(CompressAlgorithm::parse("gZIP"), CompressAlgorithm::Gzip);
        assert_eq!(CompressAlgorithm::parse("lZ4"), CompressAlgorithm::Lz4);
        assert_eq!(CompressAlgorithm::parse("zSTD"), CompressAlgorithm::Zstd);
        assert_eq!(CompressAlgorithm::parse(""), CompressAlgorithm::Unknown);
        assert_eq!(CompressAlgorithm::parse("brotli"), CompressAlgorithm::Unknown);
    }

    #[test]
    fn test_compress_algorithm_from_str() {
        let parsed: CompressAlgorithm = "LZ4".parse().unwrap();
        assert_eq!(parsed, CompressAlgorithm::Lz4);
        let parsed: CompressAlgorithm = "nope".parse().unwrap();
        assert_eq!(parsed, CompressAlgorithm::Unknown);
    }

    #[test]
    fn test_canonicalize_writes_back() {
        let mut field = "GZip".to_string();
        assert_eq!(CompressAlgorithm::canonicalize(&mut field, CompressAlgorithm::Zstd), CompressAlgorithm::Gzip);
        assert_eq!(field, "gzip");

        let mut field = "snappy".to_string();
        assert_eq!(CompressAlgorithm::canonicalize(&mut field, CompressAlgorithm::Zstd), CompressAlgorithm::Zstd);
        assert_eq!(field, "zstd");

        let mut field = String::new();
        assert_eq!(CompressAlgorithm::canonicalize(&mut field, CompressAlgorithm::Zstd), CompressAlgorithm::Zstd);
        assert_eq!(field, "zstd");
    }
}
