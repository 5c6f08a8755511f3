use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameCategoryForm {
    /// Current name, as selected in the category control.
    #[validate(length(min = 1, message = "Select a category to rename"))]
    pub existing: String,
    #[validate(length(min = 1, message = "New category name is required"))]
    pub new_name: String,
}
