use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::category::Category;
use crate::domain::filter::ProductFilter;
use crate::domain::product::{ProductDraft, ProductParameters};

/// Placeholder text of the category select control; submitting it means no
/// category was chosen.
pub const CATEGORY_PLACEHOLDER: &str = "Choose...";

fn validate_price(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(price) if price >= 0.0 => Ok(()),
        _ => {
            let mut error = ValidationError::new("price");
            error.message = Some("Price must be a non-negative number".into());
            Err(error)
        }
    }
}

fn validate_quantity(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<i32>() {
        Ok(quantity) if quantity >= 0 => Ok(()),
        _ => {
            let mut error = ValidationError::new("quantity");
            error.message = Some("Quantity must be a non-negative whole number".into());
            Err(error)
        }
    }
}

/// The product create/update form. Numeric fields arrive as the raw input
/// text and are range-checked before any network call.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = validate_price))]
    pub price: String,
    #[validate(custom(function = validate_quantity))]
    pub quantity: String,
    /// Current text of the category select control.
    pub category: String,
    pub gender: String,
    pub age: String,
    #[serde(default)]
    pub weight: String,
    pub lifespan: String,
    /// Image filename, either freshly chosen or carried over on edit.
    #[validate(length(min = 1, message = "An image is required"))]
    pub foto: String,
}

impl ProductForm {
    /// Whether the select control has moved off its placeholder option.
    pub fn category_selected(&self) -> bool {
        let name = self.category.trim();
        !name.is_empty() && name != CATEGORY_PLACEHOLDER
    }

    /// Assembles the draft. Only call after validation has passed; numeric
    /// fields fall back to zero rather than panicking.
    pub fn into_draft(
        self,
        category: Category,
        product_id: Option<i32>,
        parameters_id: Option<i32>,
    ) -> ProductDraft {
        ProductDraft {
            product_id,
            product_title: self.title,
            product_price: self.price.trim().parse().unwrap_or_default(),
            category,
            parameters: ProductParameters {
                parameters_id,
                product_gender: self.gender,
                product_age: self.age,
                product_weight: self.weight,
                product_lifespan: self.lifespan,
            },
            foto_id: self.foto,
            product_quantity: self.quantity.trim().parse().unwrap_or_default(),
        }
    }
}

/// Query-string filter inputs for the list page. Everything is optional and
/// arrives as raw text so a blank control never rejects the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilterQuery {
    pub page: Option<u32>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
}

impl ProductFilterQuery {
    /// Snapshots the current inputs into a filter, dropping unparsable
    /// bounds the same way a blank control is dropped.
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter::new(
            self.min_price
                .as_deref()
                .and_then(|s| s.trim().parse().ok()),
            self.max_price
                .as_deref()
                .and_then(|s| s.trim().parse().ok()),
            self.name.clone(),
            self.gender.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation_messages;

    fn form() -> ProductForm {
        ProductForm {
            title: "Collar".to_string(),
            price: "12.5".to_string(),
            quantity: "4".to_string(),
            category: "dogs".to_string(),
            gender: "male".to_string(),
            age: "2".to_string(),
            weight: "1".to_string(),
            lifespan: "5".to_string(),
            foto: "collar.jpg".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn bad_numbers_and_missing_title_each_produce_a_line() {
        let mut bad = form();
        bad.title = String::new();
        bad.price = "-3".to_string();
        bad.quantity = "many".to_string();

        let errors = bad.validate().expect_err("form is invalid");
        let lines = validation_messages(&errors);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().any(|l| l == "Title is required"));
        assert!(lines.iter().any(|l| l.starts_with("Price")));
        assert!(lines.iter().any(|l| l.starts_with("Quantity")));
    }

    #[test]
    fn placeholder_category_counts_as_unselected() {
        let mut unselected = form();
        unselected.category = CATEGORY_PLACEHOLDER.to_string();
        assert!(!unselected.category_selected());

        unselected.category = "  ".to_string();
        assert!(!unselected.category_selected());

        assert!(form().category_selected());
    }

    #[test]
    fn draft_threads_the_edit_identifiers() {
        let draft = form().into_draft(Category::new("dogs"), Some(9), Some(17));
        assert_eq!(draft.product_id, Some(9));
        assert_eq!(draft.parameters.parameters_id, Some(17));
        assert_eq!(draft.product_price, 12.5);
        assert_eq!(draft.product_quantity, 4);
    }

    #[test]
    fn filter_query_drops_unparsable_bounds() {
        let query = ProductFilterQuery {
            page: Some(2),
            min_price: Some("abc".to_string()),
            max_price: Some(" 50 ".to_string()),
            name: Some("collar".to_string()),
            gender: None,
        };
        let filter = query.to_filter();
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, Some(50.0));
        assert_eq!(filter.name.as_deref(), Some("collar"));
    }
}
