use std::time::Duration;

use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::directory::CategoryDirectory;
use crate::models::config::ServerConfig;
use crate::repository::rest::RestCatalog;
use crate::routes::categories::{add_category_form, rename_category_form};
use crate::routes::products::{
    delete_product_form, edit_product, new_product, save_product_form, show_products,
};
use crate::services::listing::ListController;

pub mod directory;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = RestCatalog::new(
        &server_config.catalog_url,
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build the catalog client: {e}")))?;

    let directory = web::Data::new(CategoryDirectory::new());
    if let Err(e) = directory.refresh(&repo).await {
        log::warn!("Failed to load categories at startup: {e}");
    }

    let controller = web::Data::new(ListController::new());

    // Keys and stores for the cookie session and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_products)
            .service(new_product)
            .service(edit_product)
            .service(save_product_form)
            .service(delete_product_form)
            .service(add_category_form)
            .service(rename_category_form)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(directory.clone())
            .app_data(controller.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
