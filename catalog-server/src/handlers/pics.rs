use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{
    AppState,
    errors::{AppError, AppResult},
};

/// Serve a product picture from `<contentRoot>/Pics/<pictureFileName>`.
/// Both a missing item and a missing file map to 404.
pub async fn get_item_picture_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    if id <= 0 {
        return Err(AppError::bad_request("id is not valid"));
    }

    let Some(item) = state.store.get(id).await? else {
        return Err(AppError::not_found(format!(
            "item with id {id} not found"
        )));
    };

    let Some(file_name) =
        item.picture_file_name.filter(|name| !name.is_empty())
    else {
        return Err(AppError::not_found(format!(
            "item {id} has no picture"
        )));
    };

    // The stored name must be a bare file name; anything with path
    // components could escape the Pics directory.
    if !is_plain_file_name(&file_name) {
        warn!(id, %file_name, "picture file name has path components");
        return Err(AppError::not_found(format!(
            "picture for item {id} not found"
        )));
    }

    let path = state.config.pics_dir().join(&file_name);
    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) => {
            warn!(id, path = %path.display(), error = %e, "picture file missing");
            return Err(AppError::not_found(format!(
                "picture for item {id} not found"
            )));
        }
    };

    let extension = std::path::Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(mime_for_extension(&extension)),
    );
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("public, max-age=31536000"),
    );

    Ok((headers, data).into_response())
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = std::path::Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "bmp" => "image/bmp",
        "tiff" => "image/tiff",
        "wmf" => "image/wmf",
        "jp2" => "image/jp2",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
