use utoipa::{Modify, OpenApi};

use crate::features::brands::{dtos as brands_dtos, handlers as brands_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::pagination::NextPageInfo;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::create_user,
        users_handlers::update_user,
        users_handlers::list_users,
        // Categories
        categories_handlers::create_category,
        categories_handlers::get_hierarchy,
        // Products
        products_handlers::create_product,
        // Brands
        brands_handlers::list_brands,
    ),
    components(
        schemas(
            Meta,
            NextPageInfo,
            // Users
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            users_dtos::UserResponseDto,
            users_handlers::UserPageDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<users_handlers::UserPageDto>,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryNodeDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryNodeDto>>,
            // Products
            products_dtos::CreateProductDto,
            products_dtos::ProductResponseDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            // Brands
            brands_dtos::BrandResponseDto,
            ApiResponse<Vec<brands_dtos::BrandResponseDto>>,
        )
    ),
    tags(
        (name = "users", description = "User management"),
        (name = "categories", description = "Hierarchical category management"),
        (name = "products", description = "Product catalog"),
        (name = "brands", description = "Brand catalog"),
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "API documentation for the storefront backend",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
