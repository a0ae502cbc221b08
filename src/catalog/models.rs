/**
 * Catalog Models
 *
 * Typed records for the product catalog. Products embed their category
 * (when one is assigned) so list and detail responses match the public API
 * shape without a second round trip.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product with its category embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat row produced by the product/category LEFT JOIN.
///
/// The category columns are all optional; they are only populated when the
/// product has a category assigned.
#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_name: Option<String>,
    pub category_created_at: Option<DateTime<Utc>>,
    pub category_updated_at: Option<DateTime<Utc>>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(Category {
                id,
                name,
                created_at: row.category_created_at.unwrap_or(row.created_at),
                updated_at: row.category_updated_at.unwrap_or(row.updated_at),
            }),
            _ => None,
        };

        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            description: row.description,
            image_url: row.image_url,
            category_id: row.category_id,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
