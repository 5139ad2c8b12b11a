//! Gallery flow handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use festa_models::{format_bytes, MediaKind};

use crate::auth::AccessSession;
use crate::error::ApiResult;
use crate::state::AppState;

/// One stored object as rendered by the gallery.
#[derive(Serialize)]
pub struct GalleryItem {
    /// Bucket key
    pub name: String,
    /// Browsable URL (public or presigned)
    pub url: String,
    /// Rendered as image or video
    pub kind: MediaKind,
    /// Size in bytes
    pub size_bytes: u64,
    /// Human-readable size
    pub size: String,
}

/// Gallery listing response.
#[derive(Serialize)]
pub struct GalleryResponse {
    pub total: usize,
    pub items: Vec<GalleryItem>,
}

/// List the full bucket for the gallery.
///
/// Items keep the order the store returned them in. A listing failure is
/// fatal to the whole interaction: one error, nothing rendered.
pub async fn list_gallery(
    State(state): State<AppState>,
    _session: AccessSession,
) -> ApiResult<Json<GalleryResponse>> {
    let objects = state.storage.list_objects("").await?;

    let mut items = Vec::with_capacity(objects.len());
    for obj in objects {
        let url = state.storage.object_url(&obj.key).await?;
        items.push(GalleryItem {
            kind: MediaKind::from_name(&obj.key),
            url,
            size_bytes: obj.size,
            size: format_bytes(obj.size),
            name: obj.key,
        });
    }

    Ok(Json(GalleryResponse {
        total: items.len(),
        items,
    }))
}
