//! CV relay to Cloudinary. Handlers talk to [`ObjectStorage`] so the
//! upstream can be swapped out in tests.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{error, info};

use crate::config::CloudinaryConfig;
use crate::error::{Error, Result};

pub const CV_FOLDER: &str = "CVs LEAD";

#[derive(Debug, Clone)]
pub enum UploadSource {
    /// Raw bytes from a multipart `file` field.
    File {
        filename: Option<String>,
        content_type: Option<String>,
        data: Bytes,
    },
    /// Remote URL or data URI that Cloudinary fetches itself.
    Remote(String),
}

impl UploadSource {
    /// Accepts absolute `http(s)` URLs and `data:` URIs.
    pub fn remote(raw: &str) -> Result<Self> {
        let parsed = url::Url::parse(raw.trim())
            .map_err(|e| Error::BadRequest(format!("Invalid fileUrl: {}", e)))?;
        match parsed.scheme() {
            "http" | "https" | "data" => Ok(UploadSource::Remote(raw.trim().to_string())),
            other => Err(Error::BadRequest(format!(
                "Unsupported fileUrl scheme: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub folder: String,
    pub public_id: Option<String>,
}

impl UploadOptions {
    pub fn cv(public_id: Option<String>) -> Self {
        Self {
            folder: CV_FOLDER.to_string(),
            public_id: public_id.filter(|id| !id.trim().is_empty()),
        }
    }
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Returns the provider's upload result as-is.
    async fn upload(&self, source: UploadSource, options: UploadOptions) -> Result<JsonValue>;
}

pub struct CloudinaryStorage {
    client: Client,
    config: CloudinaryConfig,
}

impl CloudinaryStorage {
    pub fn new(config: CloudinaryConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(120)).build()?;
        Ok(Self { client, config })
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/auto/upload",
            self.config.cloud_name
        )
    }
}

#[async_trait]
impl ObjectStorage for CloudinaryStorage {
    async fn upload(&self, source: UploadSource, options: UploadOptions) -> Result<JsonValue> {
        let timestamp = crate::utils::time::now().timestamp().to_string();
        let mut signed: Vec<(&str, &str)> = vec![
            ("folder", options.folder.as_str()),
            ("timestamp", timestamp.as_str()),
        ];
        if let Some(public_id) = options.public_id.as_deref() {
            signed.push(("public_id", public_id));
        }
        let signature = sign(&signed, &self.config.api_secret);

        let mut form = Form::new();
        for (key, value) in &signed {
            form = form.text(key.to_string(), value.to_string());
        }
        form = form
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        form = match source {
            UploadSource::File {
                filename,
                content_type,
                data,
            } => {
                let mut part = Part::bytes(data.to_vec())
                    .file_name(filename.unwrap_or_else(|| "upload".to_string()));
                if let Some(content_type) = content_type {
                    part = part.mime_str(&content_type)?;
                }
                form.part("file", part)
            }
            UploadSource::Remote(url) => form.text("file", url),
        };

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body: JsonValue = response.json().await?;

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(JsonValue::as_str)
                .unwrap_or("upload rejected");
            error!(%status, message, "cloudinary upload failed");
            return Err(Error::Upstream(format!(
                "Cloudinary returned {}: {}",
                status, message
            )));
        }

        info!(
            public_id = body.get("public_id").and_then(JsonValue::as_str),
            folder = %options.folder,
            "file uploaded to cloudinary"
        );
        Ok(body)
    }
}

/// Stands in when no Cloudinary credentials are configured.
pub struct UnconfiguredStorage;

#[async_trait]
impl ObjectStorage for UnconfiguredStorage {
    async fn upload(&self, _source: UploadSource, _options: UploadOptions) -> Result<JsonValue> {
        Err(Error::Config(
            "Cloudinary credentials are not configured".to_string(),
        ))
    }
}

/// Cloudinary request signature: parameters sorted by name, joined as
/// `k=v&k=v`, the API secret appended, SHA-256 hex digest.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{}{}", to_sign, api_secret).as_bytes());
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_matches_known_digest() {
        let signature = sign(
            &[("timestamp", "1315060510"), ("folder", "CVs LEAD")],
            "abcd",
        );
        assert_eq!(
            signature,
            "ae7ff1fde3f052e1c90b9dc33e6968642c7395a39c6ab68d069856157311b8fa"
        );
    }

    #[test]
    fn public_id_is_part_of_the_signature() {
        let signature = sign(
            &[
                ("folder", "CVs LEAD"),
                ("timestamp", "1315060510"),
                ("public_id", "cv_juan"),
            ],
            "abcd",
        );
        assert_eq!(
            signature,
            "8a86225d244c54372c367cf7f43b29c2da1f0fb0e68c8e88f7f3c5a063c47ab1"
        );
    }

    #[test]
    fn remote_sources_must_be_urls() {
        assert!(matches!(
            UploadSource::remote(" https://example.com/cv.pdf "),
            Ok(UploadSource::Remote(url)) if url == "https://example.com/cv.pdf"
        ));
        assert!(UploadSource::remote("data:application/pdf;base64,JVBERi0=").is_ok());
        assert!(matches!(
            UploadSource::remote("ftp://example.com/cv.pdf"),
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(
            UploadSource::remote("cv.pdf"),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn blank_public_id_is_dropped() {
        let options = UploadOptions::cv(Some("  ".into()));
        assert_eq!(options.folder, "CVs LEAD");
        assert_eq!(options.public_id, None);
    }
}
