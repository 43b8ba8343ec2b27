use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// JSON form of the CV upload: a remote URL or data URI for Cloudinary to fetch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCvPayload {
    pub file_url: Option<String>,
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadCvResponse {
    pub ok: bool,
    pub result: JsonValue,
}
