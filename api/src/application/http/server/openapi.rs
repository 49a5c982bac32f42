use crate::application::http::{
    chat::router::ChatApiDoc, insights::router::InsightsApiDoc,
    waste_record::router::WasteRecordApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoCanteen API"
    ),
    nest(
        (path = "/api", api = WasteRecordApiDoc),
        (path = "/api", api = InsightsApiDoc),
        (path = "/api", api = ChatApiDoc),
    )
)]
pub struct ApiDoc;
