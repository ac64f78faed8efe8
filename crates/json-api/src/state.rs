//! State

use std::sync::Arc;

use bookstore_app::{
    auth::AuthService,
    context::AppContext,
    domain::{
        books::BooksService, carts::CartsService, checkout::CheckoutService, orders::OrdersService,
    },
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) auth: Arc<dyn AuthService>,
    pub(crate) books: Arc<dyn BooksService>,
    pub(crate) carts: Arc<dyn CartsService>,
    pub(crate) orders: Arc<dyn OrdersService>,
    pub(crate) checkout: Arc<dyn CheckoutService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        auth: Arc<dyn AuthService>,
        books: Arc<dyn BooksService>,
        carts: Arc<dyn CartsService>,
        orders: Arc<dyn OrdersService>,
        checkout: Arc<dyn CheckoutService>,
    ) -> Self {
        Self {
            auth,
            books,
            carts,
            orders,
            checkout,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(
            app.auth,
            app.books,
            app.carts,
            app.orders,
            app.checkout,
        ))
    }
}
