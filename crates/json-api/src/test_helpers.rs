//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use bookstore_app::{
    auth::{AuthenticatedUser, MockAuthService, Session},
    domain::{
        books::MockBooksService,
        carts::MockCartsService,
        checkout::MockCheckoutService,
        orders::MockOrdersService,
        users::models::{Role, User, UserUuid},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

pub(crate) fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: TEST_USER_UUID,
        name: "Test Reader".to_string(),
        email: "reader@example.com".to_string(),
        role: Role::User,
    }
}

pub(crate) fn make_session() -> Session {
    Session {
        token: "test-token".to_string(),
        user: User {
            uuid: TEST_USER_UUID,
            name: "Test Reader".to_string(),
            email: "reader@example.com".to_string(),
            password_hash: String::new(),
            role: Role::User,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        },
    }
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(test_user());
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_signup().never();
    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_books_mock() -> MockBooksService {
    let mut books = MockBooksService::new();

    books.expect_list_books().never();
    books.expect_get_book().never();
    books.expect_create_book().never();
    books.expect_update_book().never();
    books.expect_delete_book().never();

    books
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_set_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_update_status().never();

    orders
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_place_order().never();

    checkout
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(auth),
        Arc::new(strict_books_mock()),
        Arc::new(strict_carts_mock()),
        Arc::new(strict_orders_mock()),
        Arc::new(strict_checkout_mock()),
    ))
}

pub(crate) fn state_with_books(books: MockBooksService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_auth_mock()),
        Arc::new(books),
        Arc::new(strict_carts_mock()),
        Arc::new(strict_orders_mock()),
        Arc::new(strict_checkout_mock()),
    ))
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_auth_mock()),
        Arc::new(strict_books_mock()),
        Arc::new(carts),
        Arc::new(strict_orders_mock()),
        Arc::new(strict_checkout_mock()),
    ))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_auth_mock()),
        Arc::new(strict_books_mock()),
        Arc::new(strict_carts_mock()),
        Arc::new(orders),
        Arc::new(strict_checkout_mock()),
    ))
}

pub(crate) fn state_with_checkout(checkout: MockCheckoutService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_auth_mock()),
        Arc::new(strict_books_mock()),
        Arc::new(strict_carts_mock()),
        Arc::new(strict_orders_mock()),
        Arc::new(checkout),
    ))
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_auth(auth))).push(route))
}

pub(crate) fn books_service(books: MockBooksService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_books(books)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_checkout(checkout)))
            .hoop(inject_user)
            .push(route),
    )
}
