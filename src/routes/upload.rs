use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::upload_dto::{UploadCvPayload, UploadCvResponse},
    error::{Error, Result},
    services::upload_service::{UploadOptions, UploadSource},
    AppState,
};

/// Request body cap for CV uploads.
pub const CV_MAX_BYTES: usize = 25 * 1024 * 1024;

const MISSING_SOURCE: &str = "Provide multipart field \"file\" or body.fileUrl";

#[utoipa::path(
    post,
    path = "/api/upload/cv",
    request_body(
        content = UploadCvPayload,
        description = "JSON `{ fileUrl, publicId? }`, or multipart/form-data with a `file` field"
    ),
    responses(
        (status = 200, description = "Stored in the CV folder", body = Json<UploadCvResponse>),
        (status = 400, description = "Neither a file nor a fileUrl was given"),
        (status = 413, description = "File exceeds 25 MiB"),
        (status = 502, description = "Cloudinary rejected the upload")
    )
)]
#[axum::debug_handler]
pub async fn upload_cv(State(state): State<AppState>, request: Request) -> Result<impl IntoResponse> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false);

    let (source, public_id) = if is_multipart {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| Error::Rejected(e.status(), e.body_text()))?;
        read_multipart(multipart).await?
    } else {
        let body = Bytes::from_request(request, &state)
            .await
            .map_err(|e| Error::Rejected(e.status(), e.body_text()))?;
        read_json(&body)?
    };

    let result = state
        .storage
        .upload(source, UploadOptions::cv(public_id))
        .await?;

    Ok(Json(UploadCvResponse { ok: true, result }))
}

async fn read_multipart(mut multipart: Multipart) -> Result<(UploadSource, Option<String>)> {
    let mut file = None;
    let mut file_url = None;
    let mut public_id = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                if !data.is_empty() {
                    file = Some(UploadSource::File {
                        filename,
                        content_type,
                        data,
                    });
                }
            }
            Some("fileUrl") => file_url = Some(field.text().await?),
            Some("publicId") => public_id = Some(field.text().await?),
            _ => {}
        }
    }

    let source = match (file, file_url.filter(|url| !url.trim().is_empty())) {
        (Some(file), _) => file,
        (None, Some(url)) => UploadSource::remote(&url)?,
        (None, None) => return Err(Error::BadRequest(MISSING_SOURCE.to_string())),
    };
    Ok((source, public_id))
}

fn read_json(body: &[u8]) -> Result<(UploadSource, Option<String>)> {
    let payload: UploadCvPayload = if body.iter().all(u8::is_ascii_whitespace) {
        UploadCvPayload::default()
    } else {
        serde_json::from_slice(body)
            .map_err(|e| Error::BadRequest(format!("Invalid JSON body: {}", e)))?
    };

    let url = payload
        .file_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| Error::BadRequest(MISSING_SOURCE.to_string()))?;
    Ok((UploadSource::remote(&url)?, payload.public_id))
}
