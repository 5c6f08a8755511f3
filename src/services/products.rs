//! Product form workflows: create, update, delete, load-for-edit.

use validator::Validate;

use crate::directory::CategoryDirectory;
use crate::domain::product::Product;
use crate::forms::products::ProductForm;
use crate::forms::validation_messages;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Edit-session identifiers persisted in the cookie session between loading
/// a product for edit and submitting the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditContext {
    pub product_id: i32,
    pub parameters_id: Option<i32>,
}

/// Validates the form, resolves the selected category against the cached
/// directory, assembles the draft, and issues the create or update. A
/// present `editing` context makes this an update; validation and category
/// resolution both fail before any network call is made.
pub async fn save_product<R>(
    repo: &R,
    directory: &CategoryDirectory,
    form: ProductForm,
    editing: Option<EditContext>,
) -> ServiceResult<()>
where
    R: ProductWriter,
{
    if let Err(errors) = form.validate() {
        return Err(ServiceError::Validation(validation_messages(&errors)));
    }

    if !form.category_selected() {
        return Err(ServiceError::CategoryNotSelected);
    }

    let category = directory
        .find_by_name(form.category.trim())
        .await
        .ok_or(ServiceError::NotFound)?;

    let draft = form.into_draft(
        category,
        editing.map(|ctx| ctx.product_id),
        editing.and_then(|ctx| ctx.parameters_id),
    );

    let result = if draft.is_update() {
        repo.update_product(&draft).await
    } else {
        repo.create_product(&draft).await
    };

    result.map_err(|err| {
        log::error!("Failed to save product: {err}");
        ServiceError::from(err)
    })
}

/// Loads a product to prefill the edit form.
pub async fn load_product_for_edit<R>(repo: &R, product_id: i32) -> ServiceResult<Product>
where
    R: ProductReader,
{
    repo.get_product_by_id(product_id)
        .await
        .map_err(|err| {
            log::error!("Failed to load product {product_id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}

pub async fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter,
{
    repo.delete_product(product_id).await.map_err(|err| {
        log::error!("Failed to delete product {product_id}: {err}");
        ServiceError::from(err)
    })
}
