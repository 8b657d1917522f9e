use crate::error::{AppError, Result};
use crate::model::{CreateLinkRequest, SeeOther};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderValue;
use axum::Json;
use snip_core::{redirect_target, CoreError, Link, ShortCode};
use tracing::{debug, info};

/// `POST /`: stores a new link under a freshly generated code.
///
/// The body is decoded as JSON whatever the `Content-Type` says. A `null`
/// body or `null` field is treated like `{}`.
pub async fn create_link_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Link>> {
    let request = serde_json::from_slice::<Option<CreateLinkRequest>>(&body)?.unwrap_or_default();

    let Some(original_url) = request.original_url.filter(|url| !url.is_empty()) else {
        return Err(AppError::MissingOriginalUrl);
    };

    let link = Link::new(original_url, state.generator().generate());
    state.store().put(&link).await?;

    info!(code = %link.short_url, original_url = %link.original_url, "created short link");
    Ok(Json(link))
}

/// `GET /{code}`: redirects to the stored destination.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<SeeOther> {
    // no stored link can carry a code that fails validation
    let Ok(short_code) = ShortCode::new(code.as_str()) else {
        debug!(code = %code, "malformed short code");
        return Err(AppError::CodeNotFound(code));
    };

    let Some(link) = state.store().get_by_short_code(&short_code).await? else {
        debug!(code = %code, "short code not found");
        return Err(AppError::CodeNotFound(code));
    };

    let target = redirect_target(&link.original_url).map_err(AppError::InvalidStoredUrl)?;
    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        AppError::InvalidStoredUrl(CoreError::InvalidUrl(format!("'{target}': {e}")))
    })?;

    debug!(code = %code, location = %target, "redirecting");
    Ok(SeeOther { location })
}
