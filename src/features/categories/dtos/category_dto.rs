use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{Category, CategoryStatus, HierarchyRow};
use crate::shared::validation::ENTITY_NAME_REGEX;

/// Request DTO for creating a category.
///
/// Without `parentCategoryUuid` the category becomes a new root; with it the
/// category is attached as a subcategory of that parent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(
        length(min = 1, max = 100, message = "Category name must be 1-100 characters"),
        regex(path = *ENTITY_NAME_REGEX, message = "Invalid characters in category name")
    )]
    pub name: String,

    #[validate(length(max = 255, message = "Category description must be less than 256 characters"))]
    #[serde(default)]
    pub description: String,

    pub parent_category_uuid: Option<Uuid>,
}

/// Response DTO for a created category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub category_uuid: Uuid,
    pub name: String,
    pub description: String,
    pub status: CategoryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            category_uuid: c.uuid,
            name: c.name,
            description: c.description,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// One node of the category forest returned by the hierarchy read
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(no_recursion)]
pub struct CategoryNodeDto {
    pub category_uuid: Uuid,
    pub parent_category_uuid: Option<Uuid>,
    pub name: String,
    pub level: i32,
    pub subcategories: Vec<CategoryNodeDto>,
}

impl CategoryNodeDto {
    /// Assembles the flat, `(depth, id)`-ordered hierarchy rows into a forest.
    ///
    /// Children are indexed by parent uuid in one pass, so siblings keep the
    /// relative order they had in the input. Rows whose parent uuid matches no
    /// node are dropped without error; they cannot occur unless the stored
    /// adjacency data is corrupted.
    pub fn build_forest(rows: &[HierarchyRow]) -> Vec<CategoryNodeDto> {
        let mut children_of: HashMap<Option<Uuid>, Vec<&HierarchyRow>> = HashMap::new();
        for row in rows {
            children_of
                .entry(row.parent_category_uuid)
                .or_default()
                .push(row);
        }

        children_of
            .get(&None)
            .map(|roots| {
                roots
                    .iter()
                    .map(|root| Self::build_node(root, &children_of))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn build_node(
        row: &HierarchyRow,
        children_of: &HashMap<Option<Uuid>, Vec<&HierarchyRow>>,
    ) -> CategoryNodeDto {
        let subcategories = children_of
            .get(&Some(row.category_uuid))
            .map(|children| {
                children
                    .iter()
                    .map(|child| Self::build_node(child, children_of))
                    .collect()
            })
            .unwrap_or_default();

        CategoryNodeDto {
            category_uuid: row.category_uuid,
            parent_category_uuid: row.parent_category_uuid,
            name: row.name.clone(),
            level: row.depth,
            subcategories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(uuid: Uuid, parent: Option<Uuid>, depth: i32, name: &str) -> HierarchyRow {
        HierarchyRow {
            category_uuid: uuid,
            parent_category_uuid: parent,
            depth,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_build_forest_three_level_chain() {
        let phones = Uuid::new_v4();
        let android = Uuid::new_v4();
        let pixel = Uuid::new_v4();

        let rows = vec![
            row(phones, None, 1, "Phones"),
            row(android, Some(phones), 2, "Android"),
            row(pixel, Some(android), 3, "Pixel"),
        ];

        let forest = CategoryNodeDto::build_forest(&rows);
        assert_eq!(forest.len(), 1);

        let root = &forest[0];
        assert_eq!(root.name, "Phones");
        assert_eq!(root.level, 1);
        assert_eq!(root.parent_category_uuid, None);
        assert_eq!(root.subcategories.len(), 1);

        let child = &root.subcategories[0];
        assert_eq!(child.name, "Android");
        assert_eq!(child.level, 2);
        assert_eq!(child.parent_category_uuid, Some(phones));
        assert_eq!(child.subcategories.len(), 1);

        let grandchild = &child.subcategories[0];
        assert_eq!(grandchild.name, "Pixel");
        assert_eq!(grandchild.level, 3);
        assert_eq!(grandchild.parent_category_uuid, Some(android));
        assert!(grandchild.subcategories.is_empty());
    }

    #[test]
    fn test_build_forest_multiple_roots() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![row(a, None, 1, "Phones"), row(b, None, 1, "Wearables")];

        let forest = CategoryNodeDto::build_forest(&rows);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].name, "Phones");
        assert_eq!(forest[1].name, "Wearables");
    }

    #[test]
    fn test_build_forest_preserves_sibling_insertion_order() {
        let root = Uuid::new_v4();
        let mut rows = vec![row(root, None, 1, "Phones")];
        // Sibling order must follow the input order, not name order
        for name in ["Zeta", "Alpha", "Mid"] {
            rows.push(row(Uuid::new_v4(), Some(root), 2, name));
        }

        let forest = CategoryNodeDto::build_forest(&rows);
        let names: Vec<&str> = forest[0]
            .subcategories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_build_forest_drops_orphans_silently() {
        let a = Uuid::new_v4();
        let orphan = Uuid::new_v4();
        let rows = vec![
            row(a, None, 1, "Phones"),
            // parent uuid matches no node in the list
            row(orphan, Some(Uuid::new_v4()), 2, "Ghost"),
        ];

        let forest = CategoryNodeDto::build_forest(&rows);
        assert_eq!(forest.len(), 1);
        assert!(forest[0].subcategories.is_empty());
    }

    #[test]
    fn test_build_forest_empty_input() {
        assert!(CategoryNodeDto::build_forest(&[]).is_empty());
    }
}
