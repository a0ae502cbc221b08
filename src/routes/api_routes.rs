/**
 * API Route Configuration
 *
 * Adds the authentication and catalog endpoints to the router.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/register` - public
 * - `POST /auth/login` - public
 * - `GET /auth/profile` - requires bearer token
 * - `POST /auth/logout` - requires bearer token
 * - `POST /auth/refresh` - requires bearer token
 *
 * ## Catalog (public)
 * - `GET /products`, `POST /products`
 * - `GET /products/search`
 * - `GET /products/{id}`
 * - `GET /categories`, `POST /categories`
 * - `GET/PUT/DELETE /categories/{id}`
 */

use axum::{middleware, routing::get, routing::post, Router};

use crate::auth::{login, logout, profile, refresh, register};
use crate::catalog::handlers::{
    create_category, create_product, delete_category, get_category, get_product, list_categories,
    list_products, search_products, update_category,
};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;

/// Configure the API routes.
///
/// The protected auth routes are gated by the bearer-token middleware;
/// everything else is public.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/profile", get(profile))
        .route("/auth/logout", post(logout))
        .route("/auth/refresh", post(refresh))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    router
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected)
        .route("/products", get(list_products).post(create_product))
        .route("/products/search", get(search_products))
        .route("/products/{id}", get(get_product))
        .route(
            "/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}
