//! App Router

use salvo::Router;

use crate::{auth, books, carts, checkout, healthcheck, orders};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("auth")
                .push(Router::with_path("signup").post(auth::handlers::signup::handler))
                .push(Router::with_path("login").post(auth::handlers::login::handler)),
        )
        // Catalog browsing is public.
        .push(
            Router::with_path("books")
                .get(books::handlers::index::handler)
                .push(Router::with_path("{book}").get(books::handlers::get::handler)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("books")
                        .post(books::handlers::create::handler)
                        .push(
                            Router::with_path("{book}")
                                .put(books::handlers::update::handler)
                                .delete(books::handlers::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("cart")
                        .get(carts::handlers::get::handler)
                        .delete(carts::handlers::clear::handler)
                        .push(
                            Router::with_path("items")
                                .post(carts::handlers::add_item::handler)
                                .push(
                                    Router::with_path("{book}")
                                        .put(carts::handlers::update_item::handler)
                                        .delete(carts::handlers::remove_item::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::handlers::index::handler)
                        .push(
                            Router::with_path("{order}")
                                .get(orders::handlers::get::handler)
                                .push(
                                    Router::with_path("status")
                                        .put(orders::handlers::update_status::handler),
                                ),
                        ),
                )
                .push(Router::with_path("checkout").post(checkout::handlers::create::handler)),
        )
}
