use actix_session::Session;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::directory::CategoryDirectory;
use crate::forms::categories::{AddCategoryForm, RenameCategoryForm};
use crate::repository::rest::RestCatalog;
use crate::routes::{SESSION_EDIT_PRODUCT_ID, flash_error_lines, redirect};
use crate::services::categories::{add_category, rename_category};

/// Category mutations land back on the product form the operator was on.
fn form_location(session: &Session) -> String {
    match session.get::<i32>(SESSION_EDIT_PRODUCT_ID).ok().flatten() {
        Some(product_id) => format!("/product/{product_id}/edit"),
        None => "/product/new".to_string(),
    }
}

#[post("/category/add")]
pub async fn add_category_form(
    session: Session,
    repo: web::Data<RestCatalog>,
    directory: web::Data<CategoryDirectory>,
    web::Form(form): web::Form<AddCategoryForm>,
) -> impl Responder {
    match add_category(repo.get_ref(), directory.get_ref(), form).await {
        Ok(()) => {
            FlashMessage::success("Category created.".to_string()).send();
        }
        Err(err) => flash_error_lines(&err),
    }
    redirect(&form_location(&session))
}

#[post("/category/rename")]
pub async fn rename_category_form(
    session: Session,
    repo: web::Data<RestCatalog>,
    directory: web::Data<CategoryDirectory>,
    web::Form(form): web::Form<RenameCategoryForm>,
) -> impl Responder {
    match rename_category(repo.get_ref(), directory.get_ref(), form).await {
        Ok(()) => {
            FlashMessage::success("Category renamed.".to_string()).send();
        }
        Err(err) => flash_error_lines(&err),
    }
    redirect(&form_location(&session))
}
