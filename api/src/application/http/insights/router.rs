use super::handlers::get_insights::{__path_get_insights, get_insights};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_insights))]
pub struct InsightsApiDoc;

pub fn insights_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/insights", state.args.server.root_path),
        get(get_insights),
    )
}
