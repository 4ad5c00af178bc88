//! Blob storage options

use crate::types::BlobStorageType;

option_set! {
    /// Options for the blob storage client
    ///
    /// Only the group matching `StorageType` is ever produced.
    pub enum BlobOption {
        StorageType(BlobStorageType) => "storage_type",
        Bucket(String) => "bucket",

        S3Endpoint(String) => "s3_endpoint",
        S3Region(String) => "s3_region",
        S3AccessKey(String) => "s3_access_key",
        S3SecretAccessKey(String) => "s3_secret_access_key",
        S3Token(String) => "s3_token",
        S3MaxRetries(usize) => "s3_max_retries",
        S3ForcePathStyle(bool) => "s3_force_path_style",
        S3UseAccelerate(bool) => "s3_use_accelerate",
        S3UseArnRegion(bool) => "s3_use_arn_region",
        S3UseDualStack(bool) => "s3_use_dual_stack",
        S3EnableSsl(bool) => "s3_enable_ssl",
        S3EnableParamValidation(bool) => "s3_enable_param_validation",
        S3Enable100Continue(bool) => "s3_enable_100_continue",
        S3EnableContentMd5Validation(bool) => "s3_enable_content_md5_validation",
        S3EnableEndpointDiscovery(bool) => "s3_enable_endpoint_discovery",
        S3EnableEndpointHostPrefix(bool) => "s3_enable_endpoint_host_prefix",
        S3MaxPartSize(String) => "s3_max_part_size",
        S3MaxChunkSize(String) => "s3_max_chunk_size",

        CloudStorageUrl(String) => "cloud_storage_url",
        CloudStorageCredentialsFilePath(String) => "cloud_storage_credentials_file_path",
        CloudStorageCredentialsJson(String) => "cloud_storage_credentials_json",
        CloudStorageWriteBufferSize(usize) => "cloud_storage_write_buffer_size",
        CloudStorageWriteCacheControl(String) => "cloud_storage_write_cache_control",
        CloudStorageWriteContentDisposition(String) => "cloud_storage_write_content_disposition",
        CloudStorageWriteContentEncoding(String) => "cloud_storage_write_content_encoding",
        CloudStorageWriteContentLanguage(String) => "cloud_storage_write_content_language",
        CloudStorageWriteContentType(String) => "cloud_storage_write_content_type",
    }
}
