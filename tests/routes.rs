use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;
use tera::{Context, Tera};

use market_admin::domain::category::Category;
use market_admin::domain::product::{Product, ProductParameters};
use market_admin::routes::{alert_level_to_str, redirect};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

fn sample_product(category: &str) -> Product {
    Product {
        product_id: 3,
        product_title: "Collar".to_string(),
        product_price: 12.5,
        product_quantity: 4,
        category: Some(Category::new(category)),
        parameters: ProductParameters {
            parameters_id: Some(7),
            product_gender: "male".to_string(),
            product_age: "2".to_string(),
            product_weight: "1".to_string(),
            product_lifespan: "5".to_string(),
        },
        foto_id: "collar.jpg".to_string(),
    }
}

fn form_context(editing: bool) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert(
        "categories",
        &[Category::new("cats"), Category::new("dogs")],
    );
    context.insert("category_placeholder", "Choose...");
    context.insert("editing", &editing);
    context
}

#[test]
fn test_edit_form_preselects_the_product_category() {
    let tera = Tera::new("templates/**/*.html").expect("templates parse");
    let mut context = form_context(true);
    context.insert("product", &sample_product("dogs"));

    let html = tera
        .render("products/form.html", &context)
        .expect("form renders");
    assert!(html.contains(r#"<option value="dogs" selected>"#));
    assert!(!html.contains(r#"<option value="cats" selected>"#));
}

#[test]
fn test_new_form_leaves_the_category_at_the_placeholder() {
    let tera = Tera::new("templates/**/*.html").expect("templates parse");
    let html = tera
        .render("products/form.html", &form_context(false))
        .expect("form renders");
    assert!(!html.contains(" selected>"));
}

#[test]
fn test_redirect_sets_see_other_and_location() {
    let response = redirect("/product/new");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .expect("location header"),
        "/product/new"
    );
}
