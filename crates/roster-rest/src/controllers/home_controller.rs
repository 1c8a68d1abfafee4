//! Site pages: root banner and privacy notice.

use axum::{routing::get, Router};

/// Creates the site router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/privacy", get(privacy))
}

/// Root endpoint handler.
async fn index() -> &'static str {
    "Roster API v1"
}

/// Privacy notice handler.
async fn privacy() -> &'static str {
    "Roster is a demonstration service. The employee records it serves are \
     fictional and no request data is retained."
}
