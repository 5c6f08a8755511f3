use actix_web::{HttpResponse, http::header};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod categories;
pub mod products;

/// Session key holding the id of the product being edited.
pub const SESSION_EDIT_PRODUCT_ID: &str = "edit_product_id";
/// Session key holding the transient parameters id of the draft under edit.
pub const SESSION_PARAMETERS_ID: &str = "parameters_id";
/// Session key holding the last-used list page index.
pub const SESSION_LAST_PAGE: &str = "last_page";

/// Maps a flash level to the stylesheet class of its alert.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, location))
        .finish()
}

/// Sends one flash message per error line, never summarised.
pub fn flash_error_lines(err: &ServiceError) {
    for line in err.lines() {
        FlashMessage::error(line).send();
    }
}

pub fn base_context(flash_messages: &IncomingFlashMessages) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(e) => {
            log::error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
