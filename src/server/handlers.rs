use axum::Json;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use serde_json::json;

use super::AppState;
use super::error::ApiError;
use super::logging::RequestContext;
use super::params::{VALUES_PARAM, parse_search, parse_values};
use crate::icons::{Accountability, IconListing, IconsByValue, filter_groups};

pub async fn health() -> &'static str {
    "OK"
}

/// `GET /` - every icon, grouped by folder, optionally narrowed by `?search=`
pub async fn list_icon_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<IconListing>, ApiError> {
    let request = state.logger.start_request("list");
    let ctx = accountability(&headers, &state, &request);

    match state.registry.list_icon_groups(&ctx).await {
        Ok(mut listing) => {
            if let Some(term) = parse_search(raw_query.as_deref()) {
                listing.icon_groups = filter_groups(&listing.icon_groups, &term);
            }
            state.logger.complete_request(
                &request,
                StatusCode::OK.as_u16(),
                json!({
                    "groups": listing.icon_groups.len(),
                    "icons": listing.icon_count(),
                    "error": listing.error,
                }),
            );
            Ok(Json(listing))
        }
        Err(err) => Err(fail(&state, &request, ApiError::from(err))),
    }
}

/// `GET /by-value?values=a,b` - icons keyed by their stored value
pub async fn icons_by_value(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<IconsByValue>, ApiError> {
    let request = state.logger.start_request("by-value");

    let Some(values) = parse_values(raw_query.as_deref()) else {
        return Err(fail(
            &state,
            &request,
            ApiError::BadRequest(format!("Missing '{}' query parameter", VALUES_PARAM)),
        ));
    };

    let ctx = accountability(&headers, &state, &request);
    match state.registry.icons_by_value(&ctx, &values).await {
        Ok(icons) => {
            state.logger.complete_request(
                &request,
                StatusCode::OK.as_u16(),
                json!({ "requested": values.len(), "found": icons.len() }),
            );
            Ok(Json(IconsByValue { icons }))
        }
        Err(err) => Err(fail(&state, &request, ApiError::from(err))),
    }
}

fn fail(state: &AppState, request: &RequestContext, error: ApiError) -> ApiError {
    state
        .logger
        .complete_request(request, error.status().as_u16(), json!({ "error": error.details() }));
    error
}

/// Caller context for delegated reads.
///
/// A bearer token on the incoming request is forwarded so the host applies
/// the caller's own permissions; otherwise the configured token is used.
fn accountability(headers: &HeaderMap, state: &AppState, request: &RequestContext) -> Accountability {
    let token = bearer_token(headers).or_else(|| state.default_token.clone());
    Accountability::new(token, request.correlation_id.clone())
}

pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}
