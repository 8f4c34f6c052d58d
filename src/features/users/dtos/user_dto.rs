use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{SignUpOption, User, UserStatus};
use crate::shared::validation::{
    EMAIL_REGEX, FULL_NAME_REGEX, PHONE_REGEX, SIGN_UP_OPTION_REGEX, STATUS_REGEX, TIMEZONE_REGEX,
};

/// Request DTO for creating a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,

    #[validate(regex(path = *FULL_NAME_REGEX, message = "Full name can only contain letters and spaces"))]
    pub full_name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must contain 10 to 15 digits"))]
    pub phone: String,

    /// "general" or "google"
    #[validate(regex(path = *SIGN_UP_OPTION_REGEX, message = "signUpOption must be 'general' or 'google'"))]
    pub sign_up_option: String,

    /// "UTC" or "Area/Location" form, e.g. "Asia/Dhaka"
    #[validate(regex(path = *TIMEZONE_REGEX, message = "Timezone must be 'UTC' or 'Area/Location' form"))]
    pub timezone: String,
}

/// Request DTO for updating a user; password and sign-up option are immutable here
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *FULL_NAME_REGEX, message = "Full name can only contain letters and spaces"))]
    pub full_name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must contain 10 to 15 digits"))]
    pub phone: String,

    #[validate(regex(path = *TIMEZONE_REGEX, message = "Timezone must be 'UTC' or 'Area/Location' form"))]
    pub timezone: String,
}

/// Query params for the user listing; all filters optional
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Exclusive lower bound cursor; pass the previous page's endCursor
    pub from_id: Option<i64>,

    /// Page size, 20-100
    pub page_size: Option<i64>,

    #[validate(regex(path = *STATUS_REGEX, message = "Status must be 'active', 'inactive' or 'deleted'"))]
    pub status: Option<String>,

    #[validate(regex(path = *SIGN_UP_OPTION_REGEX, message = "signUpOption must be 'general' or 'google'"))]
    pub sign_up_option: Option<String>,

    #[validate(regex(path = *TIMEZONE_REGEX, message = "Timezone must be 'UTC' or 'Area/Location' form"))]
    pub timezone: Option<String>,
}

/// Response DTO for a user; excludes the surrogate id and password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub user_uuid: Uuid,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub sign_up_option: SignUpOption,
    pub status: UserStatus,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            user_uuid: u.uuid,
            email: u.email,
            full_name: u.full_name,
            phone: u.phone,
            sign_up_option: u.sign_up_option,
            status: u.status,
            timezone: u.timezone,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_dto_valid() {
        let dto = CreateUserDto {
            email: "jane.doe@example.com".to_string(),
            password: "correcthorse".to_string(),
            full_name: "Jane Doe".to_string(),
            phone: "0123456789".to_string(),
            sign_up_option: "general".to_string(),
            timezone: "Asia/Dhaka".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_user_dto_rejects_short_password() {
        let dto = CreateUserDto {
            email: "jane.doe@example.com".to_string(),
            password: "short".to_string(),
            full_name: "Jane Doe".to_string(),
            phone: "0123456789".to_string(),
            sign_up_option: "general".to_string(),
            timezone: "UTC".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_list_users_query_rejects_unknown_status() {
        let query = ListUsersQuery {
            status: Some("archived".to_string()),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_user_response_serializes_camel_case() {
        let dto = UserResponseDto {
            user_uuid: Uuid::nil(),
            email: "jane.doe@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            phone: "0123456789".to_string(),
            sign_up_option: SignUpOption::General,
            status: UserStatus::Active,
            timezone: "UTC".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["userUuid"], serde_json::json!(Uuid::nil()));
        assert_eq!(value["signUpOption"], "general");
        assert_eq!(value["status"], "active");
        assert!(value.get("passwordHash").is_none());
    }
}
