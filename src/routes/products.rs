use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::directory::CategoryDirectory;
use crate::domain::filter::ProductFilter;
use crate::forms::products::{CATEGORY_PLACEHOLDER, ProductFilterQuery, ProductForm};
use crate::repository::rest::RestCatalog;
use crate::routes::{
    SESSION_EDIT_PRODUCT_ID, SESSION_LAST_PAGE, SESSION_PARAMETERS_ID, base_context,
    flash_error_lines, redirect, render_template,
};
use crate::services::listing::{ListController, run_list_cycle};
use crate::services::products::{EditContext, delete_product, load_product_for_edit, save_product};

/// Query-string suffix that carries the active filter set into the
/// pagination links, so a page click re-runs the same filtered query.
fn filter_query_string(filter: &ProductFilter) -> String {
    let mut qs = String::new();
    if let Some(price) = filter.min_price {
        qs.push_str(&format!("&min_price={price}"));
    }
    if let Some(price) = filter.max_price {
        qs.push_str(&format!("&max_price={price}"));
    }
    if let Some(name) = &filter.name {
        qs.push_str(&format!("&name={}", urlencoding::encode(name)));
    }
    if let Some(gender) = &filter.gender {
        qs.push_str(&format!("&gender={}", urlencoding::encode(gender)));
    }
    qs
}

/// Resolves the page to request: an explicit page wins, a fresh filter
/// submit starts over at page one, and a bare visit resumes the last-used
/// page from the session.
fn requested_page(params: &ProductFilterQuery, last_page: Option<u32>) -> u32 {
    if let Some(page) = params.page {
        return page;
    }
    let filter_submitted = params.min_price.is_some()
        || params.max_price.is_some()
        || params.name.is_some()
        || params.gender.is_some();
    if filter_submitted {
        return 1;
    }
    last_page.unwrap_or(1)
}

#[get("/")]
pub async fn show_products(
    params: web::Query<ProductFilterQuery>,
    session: Session,
    repo: web::Data<RestCatalog>,
    controller: web::Data<ListController>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let last_page = session.get::<u32>(SESSION_LAST_PAGE).ok().flatten();
    let page = requested_page(&params, last_page);
    let filter = params.to_filter();

    let token = controller.begin();
    let view = run_list_cycle(repo.get_ref(), controller.get_ref(), token, page, filter).await;

    if let Err(e) = session.insert(SESSION_LAST_PAGE, view.current_page) {
        log::error!("Failed to store the last page index: {e}");
    }

    let mut context = base_context(&flash_messages);
    context.insert("filter_query", &filter_query_string(&view.filter));
    context.insert("view", &view);
    context.insert("catalog_url", repo.base_url());

    render_template(&tera, "products/index.html", &context)
}

#[get("/product/new")]
pub async fn new_product(
    session: Session,
    repo: web::Data<RestCatalog>,
    directory: web::Data<CategoryDirectory>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    // Create-new clears any edit state left over from a prior navigation.
    session.remove(SESSION_EDIT_PRODUCT_ID);
    session.remove(SESSION_PARAMETERS_ID);

    if let Err(e) = directory.refresh(repo.get_ref()).await {
        log::error!("Failed to refresh categories: {e}");
        FlashMessage::error(e.to_string()).send();
    }

    let mut context = base_context(&flash_messages);
    context.insert("categories", &directory.list().await);
    context.insert("category_placeholder", CATEGORY_PLACEHOLDER);
    context.insert("editing", &false);

    render_template(&tera, "products/form.html", &context)
}

#[get("/product/{product_id}/edit")]
pub async fn edit_product(
    product_id: web::Path<i32>,
    session: Session,
    repo: web::Data<RestCatalog>,
    directory: web::Data<CategoryDirectory>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = product_id.into_inner();

    let product = match load_product_for_edit(repo.get_ref(), product_id).await {
        Ok(product) => product,
        Err(err) => {
            flash_error_lines(&err);
            return redirect("/");
        }
    };

    // The edit identifiers must survive a full page navigation until the
    // submit lands.
    if session.insert(SESSION_EDIT_PRODUCT_ID, product_id).is_err()
        || session
            .insert(SESSION_PARAMETERS_ID, product.parameters.parameters_id)
            .is_err()
    {
        log::error!("Failed to store the edit session for product {product_id}");
    }

    if let Err(e) = directory.refresh(repo.get_ref()).await {
        log::error!("Failed to refresh categories: {e}");
        FlashMessage::error(e.to_string()).send();
    }

    let mut context = base_context(&flash_messages);
    context.insert("categories", &directory.list().await);
    context.insert("category_placeholder", CATEGORY_PLACEHOLDER);
    context.insert("editing", &true);
    context.insert("product", &product);

    render_template(&tera, "products/form.html", &context)
}

#[post("/product/save")]
pub async fn save_product_form(
    session: Session,
    repo: web::Data<RestCatalog>,
    directory: web::Data<CategoryDirectory>,
    web::Form(form): web::Form<ProductForm>,
) -> impl Responder {
    let editing = session
        .get::<i32>(SESSION_EDIT_PRODUCT_ID)
        .ok()
        .flatten()
        .map(|product_id| EditContext {
            product_id,
            parameters_id: session
                .get::<Option<i32>>(SESSION_PARAMETERS_ID)
                .ok()
                .flatten()
                .flatten(),
        });

    match save_product(repo.get_ref(), directory.get_ref(), form, editing).await {
        Ok(()) => {
            session.remove(SESSION_EDIT_PRODUCT_ID);
            session.remove(SESSION_PARAMETERS_ID);
            FlashMessage::success("Product saved.".to_string()).send();
            redirect("/")
        }
        Err(err) => {
            flash_error_lines(&err);
            match editing {
                Some(ctx) => redirect(&format!("/product/{}/edit", ctx.product_id)),
                None => redirect("/product/new"),
            }
        }
    }
}

#[derive(Deserialize)]
pub struct DeleteProductForm {
    pub id: i32,
}

#[post("/product/delete")]
pub async fn delete_product_form(
    repo: web::Data<RestCatalog>,
    web::Form(form): web::Form<DeleteProductForm>,
) -> impl Responder {
    match delete_product(repo.get_ref(), form.id).await {
        Ok(()) => {
            FlashMessage::success("Product deleted.".to_string()).send();
        }
        Err(err) => flash_error_lines(&err),
    }
    redirect("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_explicit_page_parameter_wins() {
        let params = ProductFilterQuery {
            page: Some(4),
            min_price: Some("10".to_string()),
            ..Default::default()
        };
        assert_eq!(requested_page(&params, Some(2)), 4);
    }

    #[test]
    fn a_fresh_filter_submit_starts_over_at_page_one() {
        let params = ProductFilterQuery {
            name: Some("collar".to_string()),
            ..Default::default()
        };
        assert_eq!(requested_page(&params, Some(3)), 1);
    }

    #[test]
    fn a_bare_visit_resumes_the_last_used_page() {
        let params = ProductFilterQuery::default();
        assert_eq!(requested_page(&params, Some(3)), 3);
        assert_eq!(requested_page(&params, None), 1);
    }

    #[test]
    fn filter_query_string_echoes_the_active_filters() {
        let filter = ProductFilter::new(
            Some(10.0),
            None,
            Some("dog collar".to_string()),
            Some("male".to_string()),
        );
        assert_eq!(
            filter_query_string(&filter),
            "&min_price=10&name=dog%20collar&gender=male"
        );
        assert_eq!(filter_query_string(&ProductFilter::default()), "");
    }
}
