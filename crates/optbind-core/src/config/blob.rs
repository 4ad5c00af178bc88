//! Blob storage node

use serde::{Deserialize, Serialize};

use super::traits::{bind_child, Bind, OptsResult, Synthesize};
use crate::clients::blob::BlobOption;
use crate::resolve::{bind_str, VarSource};
use crate::types::BlobStorageType;

/// S3-compatible backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Config {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_access_key: String,
    pub token: String,
    pub max_retries: usize,
    pub force_path_style: bool,
    pub use_accelerate: bool,
    pub use_arn_region: bool,
    pub use_dual_stack: bool,
    pub enable_ssl: bool,
    pub enable_param_validation: bool,
    pub enable_100_continue: bool,
    pub enable_content_md5_validation: bool,
    pub enable_endpoint_discovery: bool,
    pub enable_endpoint_host_prefix: bool,
    pub max_part_size: String,
    pub max_chunk_size: String,
}

impl Bind for S3Config {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        for field in [
            &mut self.endpoint,
            &mut self.region,
            &mut self.access_key,
            &mut self.secret_access_key,
            &mut self.token,
            &mut self.max_part_size,
            &mut self.max_chunk_size,
        ] {
            bind_str(field, vars);
        }
        self
    }
}

impl S3Config {
    fn opts(&self) -> Vec<BlobOption> {
        vec![
            BlobOption::S3Endpoint(self.endpoint.clone()),
            BlobOption::S3Region(self.region.clone()),
            BlobOption::S3AccessKey(self.access_key.clone()),
            BlobOption::S3SecretAccessKey(self.secret_access_key.clone()),
            BlobOption::S3Token(self.token.clone()),
            BlobOption::S3MaxRetries(self.max_retries),
            BlobOption::S3ForcePathStyle(self.force_path_style),
            BlobOption::S3UseAccelerate(self.use_accelerate),
            BlobOption::S3UseArnRegion(self.use_arn_region),
            BlobOption::S3UseDualStack(self.use_dual_stack),
            BlobOption::S3EnableSsl(self.enable_ssl),
            BlobOption::S3EnableParamValidation(self.enable_param_validation),
            BlobOption::S3Enable100Continue(self.enable_100_continue),
            BlobOption::S3EnableContentMd5Validation(self.enable_content_md5_validation),
            BlobOption::S3EnableEndpointDiscovery(self.enable_endpoint_discovery),
            BlobOption::S3EnableEndpointHostPrefix(self.enable_endpoint_host_prefix),
            BlobOption::S3MaxPartSize(self.max_part_size.clone()),
            BlobOption::S3MaxChunkSize(self.max_chunk_size.clone()),
        ]
    }
}

/// Credentials for the Cloud Storage client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudStorageClient {
    pub credentials_file_path: String,
    pub credentials_json: String,
}

impl Bind for CloudStorageClient {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.credentials_file_path, vars);
        bind_str(&mut self.credentials_json, vars);
        self
    }
}

/// Cloud Storage backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudStorageConfig {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<CloudStorageClient>,
    pub write_buffer_size: usize,
    pub write_cache_control: String,
    pub write_content_disposition: String,
    pub write_content_encoding: String,
    pub write_content_language: String,
    pub write_content_type: String,
}

impl Bind for CloudStorageConfig {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        for field in [
            &mut self.url,
            &mut self.write_cache_control,
            &mut self.write_content_disposition,
            &mut self.write_content_encoding,
            &mut self.write_content_language,
            &mut self.write_content_type,
        ] {
            bind_str(field, vars);
        }
        bind_child(&mut self.client, vars);
        self
    }
}

impl CloudStorageConfig {
    fn opts(&self) -> Vec<BlobOption> {
        let client = self.client.clone().unwrap_or_default();
        vec![
            BlobOption::CloudStorageUrl(self.url.clone()),
            BlobOption::CloudStorageCredentialsFilePath(client.credentials_file_path),
            BlobOption::CloudStorageCredentialsJson(client.credentials_json),
            BlobOption::CloudStorageWriteBufferSize(self.write_buffer_size),
            BlobOption::CloudStorageWriteCacheControl(self.write_cache_control.clone()),
            BlobOption::CloudStorageWriteContentDisposition(self.write_content_disposition.clone()),
            BlobOption::CloudStorageWriteContentEncoding(self.write_content_encoding.clone()),
            BlobOption::CloudStorageWriteContentLanguage(self.write_content_language.clone()),
            BlobOption::CloudStorageWriteContentType(self.write_content_type.clone()),
        ]
    }
}

/// Blob storage settings; `storage_type` picks the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blob {
    pub storage_type: String,
    pub bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<S3Config>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_storage: Option<CloudStorageConfig>,
}

impl Bind for Blob {
    fn bind_with(&mut self, vars: &dyn VarSource) -> &mut Self {
        bind_str(&mut self.storage_type, vars);
        bind_str(&mut self.bucket, vars);
        bind_child(&mut self.s3, vars);
        bind_child(&mut self.cloud_storage, vars);
        self
    }
}

impl Synthesize for Blob {
    type Opt = BlobOption;

    fn opts(&mut self) -> OptsResult<Vec<BlobOption>> {
        let storage_type = BlobStorageType::canonicalize(&mut self.storage_type, BlobStorageType::S3);

        let mut opts = vec![
            BlobOption::StorageType(storage_type),
            BlobOption::Bucket(self.bucket.clone()),
        ];

        match storage_type {
            BlobStorageType::CloudStorage => {
                if let Some(cs) = &self.cloud_storage {
                    opts.extend(cs.opts());
                }
            }
            _ => {
                if let Some(s3) = &self.s3 {
                    opts.extend(s3.opts());
                }
            }
        }

        Ok(opts)
    }
}
