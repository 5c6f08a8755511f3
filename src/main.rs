use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;

use market_admin::models::config::ServerConfig;

fn load_config() -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8080_i64)?
        .set_default("catalog_url", "http://localhost:8189")?
        .set_default("templates_dir", "templates/**/*.html")?
        .set_default("request_timeout_secs", 10_i64)?
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config = load_config()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    market_admin::run(server_config).await
}
