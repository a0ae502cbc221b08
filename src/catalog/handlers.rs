/**
 * Catalog Handlers
 *
 * HTTP handlers for products and categories. Each handler validates its
 * input, delegates to the catalog queries, and shapes a JSON response.
 *
 * Unlike the auth endpoints, catalog 500 responses may echo the underlying
 * error message when the server runs in a development environment.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::db::{
    self, NewProduct,
};
use crate::catalog::models::{Category, Product};
use crate::error::ApiError;
use crate::server::state::AppState;

/// List response for products.
#[derive(Serialize, Deserialize, Debug)]
pub struct ProductListResponse {
    pub message: String,
    pub data: Vec<Product>,
    #[serde(rename = "totalProduct")]
    pub total_product: usize,
}

/// List response for categories.
#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryListResponse {
    pub message: String,
    pub data: Vec<Category>,
    #[serde(rename = "totalCategory")]
    pub total_category: usize,
}

/// Single-item response.
#[derive(Serialize, Deserialize, Debug)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}

/// Query string for product search.
#[derive(Deserialize, Debug, Default)]
pub struct ProductSearchQuery {
    pub name: Option<String>,
}

/// Request body for product creation.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Request body for category create/update.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CategoryPayload {
    pub name: Option<String>,
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = db::list_products(&state.pool)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?;

    Ok(Json(ProductListResponse {
        message: "Successfully fetched all products.".to_string(),
        total_product: products.len(),
        data: products,
    }))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<Product>>, ApiError> {
    let product = db::find_product(&state.pool, id)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?
        .ok_or_else(|| ApiError::NotFound("Product not found!".to_string()))?;

    Ok(Json(DataResponse {
        message: "Successfully fetched product.".to_string(),
        data: product,
    }))
}

/// GET /products/search?name=
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<ProductSearchQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let name = query.name.filter(|n| !n.is_empty()).ok_or_else(|| {
        ApiError::Validation("Product name is required and must be a string".to_string())
    })?;

    let products = db::search_products(&state.pool, &name)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?;

    Ok(Json(ProductListResponse {
        message: "Successfully fetched products by name.".to_string(),
        total_product: products.len(),
        data: products,
    }))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<DataResponse<Product>>), ApiError> {
    let (name, price) = match (&request.name, request.price) {
        (Some(name), Some(price)) if !name.trim().is_empty() => (name.clone(), price),
        _ => {
            return Err(ApiError::Validation(
                "Name and price are required".to_string(),
            ))
        }
    };

    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::Validation(
            "Price must be a non-negative number".to_string(),
        ));
    }

    let product = db::create_product(
        &state.pool,
        NewProduct {
            name,
            price,
            category_id: request.category_id,
            description: request.description,
            image_url: request.image_url,
        },
    )
    .await
    .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?;

    tracing::info!("Product created: {}", product.id);

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Product created successfully".to_string(),
            data: product,
        }),
    ))
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = db::list_categories(&state.pool)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?;

    Ok(Json(CategoryListResponse {
        message: "Successfully fetched all categories.".to_string(),
        total_category: categories.len(),
        data: categories,
    }))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<Category>>, ApiError> {
    let category = db::find_category(&state.pool, id)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    Ok(Json(DataResponse {
        message: "Successfully fetched category.".to_string(),
        data: category,
    }))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<DataResponse<Category>>), ApiError> {
    let name = required_category_name(payload)?;

    let category = db::create_category(&state.pool, &name)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?;

    tracing::info!("Category created: {}", category.id);

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Category created successfully".to_string(),
            data: category,
        }),
    ))
}

/// PUT /categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<DataResponse<Category>>, ApiError> {
    let name = required_category_name(payload)?;

    let category = db::update_category(&state.pool, id, &name)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    Ok(Json(DataResponse {
        message: "Category updated successfully".to_string(),
        data: category,
    }))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<Category>>, ApiError> {
    let category = db::delete_category(&state.pool, id)
        .await
        .map_err(|e| ApiError::internal_exposed(e, state.expose_errors))?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    Ok(Json(DataResponse {
        message: "Category deleted successfully".to_string(),
        data: category,
    }))
}

fn required_category_name(payload: CategoryPayload) -> Result<String, ApiError> {
    payload
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::Validation("Category name is required".to_string()))
}
