use super::handlers::{
    get_waste_records::{__path_get_waste_records, get_waste_records},
    submit_waste_record::{__path_submit_waste_record, submit_waste_record},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(submit_waste_record, get_waste_records))]
pub struct WasteRecordApiDoc;

pub fn waste_record_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/submit-data", state.args.server.root_path),
            post(submit_waste_record),
        )
        .route(
            &format!("{}/api/waste-records", state.args.server.root_path),
            get(get_waste_records),
        )
}
