use common::types::Health;
use models::{MaintenanceRecord, RecordInput, RecordPatch};
use utoipa::OpenApi;

use crate::errors::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::records::list,
        crate::routes::records::create,
        crate::routes::records::get,
        crate::routes::records::replace,
        crate::routes::records::patch,
        crate::routes::records::delete,
    ),
    components(
        schemas(
            Health,
            MaintenanceRecord,
            RecordInput,
            RecordPatch,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_record_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/records"));
        assert!(paths.iter().any(|p| p.as_str() == "/records/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
