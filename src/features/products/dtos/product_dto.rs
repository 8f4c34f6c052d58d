use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::Product;
use crate::shared::price::display_price;
use crate::shared::validation::ENTITY_NAME_REGEX;

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(
        length(min = 1, max = 150, message = "Product name must be 1-150 characters"),
        regex(path = *ENTITY_NAME_REGEX, message = "Invalid characters in product name")
    )]
    pub name: String,

    /// Price in cents
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price_cents: i64,

    /// Category this product belongs to (any level of the hierarchy)
    pub category_uuid: Uuid,
}

/// Response DTO for a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub product_uuid: Uuid,
    pub name: String,
    pub display_price: String,
    pub category_uuid: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductResponseDto {
    pub fn from_product(p: Product, category_uuid: Uuid) -> Self {
        Self {
            product_uuid: p.uuid,
            name: p.name,
            display_price: display_price(p.price_cents),
            category_uuid,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_dto_rejects_negative_price() {
        let dto = CreateProductDto {
            name: "Pixel 8".to_string(),
            price_cents: -1,
            category_uuid: Uuid::new_v4(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_response_renders_display_price() {
        let p = Product {
            id: 1,
            uuid: Uuid::nil(),
            name: "Pixel 8".to_string(),
            price_cents: 79_999,
            category_id: 7,
            root_category_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let dto = ProductResponseDto::from_product(p, Uuid::nil());
        assert_eq!(dto.display_price, "799.99");
    }
}
