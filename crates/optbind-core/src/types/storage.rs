//! Blob storage backend kinds

vocabulary! {
    /// Backend behind a blob storage node
    pub enum BlobStorageType {
        /// Amazon S3 or an S3-compatible endpoint
        S3 = 1 => "s3",
        /// Google Cloud Storage
        CloudStorage = 2 => "cloud_storage",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_storage_type_to_string() {
        assert_eq!(BlobStorageType::S3.to_string(), "s3");
        assert_eq!(BlobStorageType::CloudStorage.to_string(), "cloud_storage");
        assert_eq!(BlobStorageType::Unknown.to_string(), "unknown");
        assert_eq!(BlobStorageType::default().to_string(), "unknown");
        assert_eq!(BlobStorageType::from(100).to_string(), "unknown");
    }

    #[test]
    fn test_blob_storage_type_parse() {
        assert_eq!(BlobStorageType::parse("s3"), BlobStorageType::S3);
        assert_eq!(BlobStorageType::parse("S3"), BlobStorageType::S3);
        assert_eq!(BlobStorageType::parse("cloud_storage"), BlobStorageType::CloudStorage);
        assert_eq!(BlobStorageType::parse("CLOUD_storage"), BlobStorageType::CloudStorage);
        assert_eq!(BlobStorageType::parse(""), BlobStorageType::Unknown);
        assert_eq!(BlobStorageType::parse("storage"), BlobStorageType::Unknown);
        assert_eq!(u8::from(BlobStorageType::parse("storage")), 0);
    }

    #[test]
    fn test_blob_storage_type_repr_roundtrip() {
        for kind in BlobStorageType::ALL {
            assert_eq!(BlobStorageType::from(u8::from(*kind)), *kind);
        }
    }
}
