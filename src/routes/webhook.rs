use std::sync::Arc;

use crate::controllers::webhook;
use crate::ServiceState;
use axum::routing::post;

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router.route("/adkrity-text-heavy", post(webhook::text_heavy))
}
