//! App Router

use salvo::{Router, handler::empty};

use crate::checkout_sessions::handlers;

/// The checkout session routes.
///
/// Every route answers `OPTIONS` so the CORS middleware can serve preflight
/// requests from any origin.
pub(crate) fn app_router() -> Router {
    Router::with_path("checkout_sessions")
        .post(handlers::create::handler)
        .options(empty())
        .push(
            Router::with_path("{id}")
                .get(handlers::get::handler)
                .post(handlers::update::handler)
                .options(empty())
                .push(
                    Router::with_path("complete")
                        .post(handlers::complete::handler)
                        .options(empty()),
                ),
        )
}
