//! Object storage for entity media.
//!
//! Thin wrapper around aws-sdk-s3: every upload lands under a per-entity
//! key prefix with a generated name, after size and extension checks.
//! Deletes are best-effort; a stale object is preferable to failing the
//! write that replaced it.

use aws_sdk_s3 as s3;
use aws_sdk_s3::primitives::ByteStream;
use uuid::Uuid;

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const MAX_VIDEO_BYTES: usize = 100 * 1024 * 1024;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File too large: {size} bytes exceeds the {limit}-byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("Unsupported file extension: {0}")]
    BadExtension(String),

    #[error("Filename has no extension")]
    MissingExtension,

    #[error("Upload failed: {0}")]
    Upload(String),
}

/// Kind of media being uploaded; determines the key prefix, the size limit,
/// and the accepted extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    ProjectLogo,
    QrCode,
    Building,
    Tower,
    Unit,
    ProjectUpdate,
    Balcony,
    Location,
    WalkthroughVideo,
}

impl UploadKind {
    /// Parse the `{entity}` path segment of the upload endpoint.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "logo" => Some(UploadKind::ProjectLogo),
            "qr_code" => Some(UploadKind::QrCode),
            "buildings" => Some(UploadKind::Building),
            "towers" => Some(UploadKind::Tower),
            "units" => Some(UploadKind::Unit),
            "updates" => Some(UploadKind::ProjectUpdate),
            "balcony" => Some(UploadKind::Balcony),
            "location" => Some(UploadKind::Location),
            "walkthrough" => Some(UploadKind::WalkthroughVideo),
            _ => None,
        }
    }

    pub fn key_prefix(self) -> &'static str {
        match self {
            UploadKind::ProjectLogo => "logo",
            UploadKind::QrCode => "qr_code",
            UploadKind::Building => "buildings",
            UploadKind::Tower => "towers",
            UploadKind::Unit => "units",
            UploadKind::ProjectUpdate => "updates",
            UploadKind::Balcony => "balcony",
            UploadKind::Location => "location",
            UploadKind::WalkthroughVideo => "walkthrough",
        }
    }

    pub fn max_bytes(self) -> usize {
        match self {
            UploadKind::WalkthroughVideo => MAX_VIDEO_BYTES,
            _ => MAX_IMAGE_BYTES,
        }
    }

    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::WalkthroughVideo => VIDEO_EXTENSIONS,
            _ => IMAGE_EXTENSIONS,
        }
    }

    /// Validate a candidate upload and return its normalized extension.
    pub fn validate(self, filename: &str, size: usize) -> Result<String, StorageError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or(StorageError::MissingExtension)?;
        if !self.allowed_extensions().contains(&ext.as_str()) {
            return Err(StorageError::BadExtension(ext));
        }
        let limit = self.max_bytes();
        if size > limit {
            return Err(StorageError::TooLarge { size, limit });
        }
        Ok(ext)
    }
}

fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

/// Configured S3 client plus the bucket and public base URL.
#[derive(Clone)]
pub struct Storage {
    client: s3::Client,
    bucket: String,
    public_base_url: String,
}

impl Storage {
    /// Build from the environment. Returns `None` when `S3_BUCKET` is
    /// unset, which disables media uploads rather than failing startup.
    ///
    /// Credentials and region resolve through the standard AWS provider
    /// chain; `S3_ENDPOINT` overrides the endpoint for S3-compatible
    /// stores, and `S3_PUBLIC_URL` overrides the URL prefix handed back
    /// to clients.
    pub async fn from_env() -> Option<Self> {
        let bucket = std::env::var("S3_BUCKET").ok()?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Ok(endpoint) = std::env::var("S3_ENDPOINT") {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;
        let client = s3::Client::new(&config);

        let public_base_url = std::env::var("S3_PUBLIC_URL").unwrap_or_else(|_| {
            let region = config
                .region()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "us-east-1".to_string());
            format!("https://{bucket}.s3.{region}.amazonaws.com")
        });

        Some(Self {
            client,
            bucket,
            public_base_url,
        })
    }

    /// Validate and upload one object; returns its public URL.
    pub async fn upload(
        &self,
        kind: UploadKind,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let ext = kind.validate(filename, bytes.len())?;
        let key = format!("{}/{}.{ext}", kind.key_prefix(), Uuid::new_v4());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type_for(&ext))
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        tracing::info!(key = %key, "uploaded object");
        Ok(format!("{}/{key}", self.public_base_url))
    }

    /// Upload a replacement asset, then best-effort delete the old one.
    /// The new URL is returned even when the delete fails.
    pub async fn replace(
        &self,
        kind: UploadKind,
        filename: &str,
        bytes: Vec<u8>,
        old_url: Option<&str>,
    ) -> Result<String, StorageError> {
        let url = self.upload(kind, filename, bytes).await?;
        if let Some(old) = old_url {
            self.delete_best_effort(old).await;
        }
        Ok(url)
    }

    /// Delete the object behind a previously returned URL. Failures are
    /// logged and swallowed; URLs outside our base are ignored.
    pub async fn delete_best_effort(&self, url: &str) {
        let Some(key) = url
            .strip_prefix(self.public_base_url.as_str())
            .map(|k| k.trim_start_matches('/'))
        else {
            tracing::warn!(url = %url, "skipping delete of foreign object url");
            return;
        };

        if let Err(e) = self
            .client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            tracing::warn!(key = %key, error = %e, "failed to delete old object");
        }
    }
}
