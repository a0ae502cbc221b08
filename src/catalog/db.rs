/**
 * Catalog Database Operations
 *
 * sqlx pass-throughs for products and categories. Products are always
 * fetched through the category LEFT JOIN so the embedded category comes
 * back in one query.
 */

use sqlx::PgPool;

use crate::catalog::models::{Category, Product, ProductRow};

const PRODUCT_SELECT: &str = r#"
    SELECT p.id, p.name, p.price, p.description, p.image_url, p.category_id,
           p.created_at, p.updated_at,
           c.name AS category_name,
           c.created_at AS category_created_at,
           c.updated_at AS category_updated_at
    FROM products p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

/// All products, oldest first, with categories embedded.
pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "{PRODUCT_SELECT} ORDER BY p.created_at ASC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}

/// Look up a single product by id.
pub async fn find_product(pool: &PgPool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProductRow>(&format!("{PRODUCT_SELECT} WHERE p.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Product::from))
}

/// Case-insensitive substring search on product name.
pub async fn search_products(pool: &PgPool, name: &str) -> Result<Vec<Product>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProductRow>(&format!(
        "{PRODUCT_SELECT} WHERE p.name ILIKE '%' || $1 || '%' ORDER BY p.created_at ASC"
    ))
    .bind(name)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Product::from).collect())
}

/// Fields accepted when creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Insert a product and return it with its category embedded.
pub async fn create_product(pool: &PgPool, new: NewProduct) -> Result<Product, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO products (name, price, category_id, description, image_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&new.name)
    .bind(new.price)
    .bind(new.category_id)
    .bind(&new.description)
    .bind(&new.image_url)
    .fetch_one(pool)
    .await?;

    let row = sqlx::query_as::<_, ProductRow>(&format!("{PRODUCT_SELECT} WHERE p.id = $1"))
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(Product::from(row))
}

/// All categories, oldest first.
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM categories
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Look up a single category by id.
pub async fn find_category(pool: &PgPool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM categories
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a category.
pub async fn create_category(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (name)
        VALUES ($1)
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
}

/// Rename a category. Returns `None` when the id does not exist.
pub async fn update_category(
    pool: &PgPool,
    id: i64,
    name: &str,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        UPDATE categories
        SET name = $1, updated_at = now()
        WHERE id = $2
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a category. Returns the removed row, or `None` when the id does
/// not exist.
pub async fn delete_category(pool: &PgPool, id: i64) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        DELETE FROM categories
        WHERE id = $1
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
