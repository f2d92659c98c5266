use std::io;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tera::Tera;

use souq_storefront::db::establish_connection_pool;
use souq_storefront::models::config::ServerConfig;
use souq_storefront::repository::DieselRepository;
use souq_storefront::routes;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = ServerConfig::load().map_err(io::Error::other)?;

    let pool = establish_connection_pool(&server_config.database_url)
        .map_err(io::Error::other)?;
    let mut conn = pool.get().map_err(io::Error::other)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| io::Error::other(e.to_string()))?;
    drop(conn);

    let repo = DieselRepository::new(pool);

    let tera = Tera::new("templates/**/*.html").map_err(io::Error::other)?;

    let message_store = CookieMessageStore::builder(Key::generate()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.bind_address.clone(), server_config.port);
    log::info!(
        "Starting storefront on {}:{}",
        server_config.bind_address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(message_framework.clone())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(Files::new("/assets", &server_config.assets_dir))
            .service(routes::main::index)
            .service(routes::main::set_language)
            .service(routes::products::show_products)
            .service(routes::products::like_product)
            .service(routes::products::show_admin)
            .service(routes::products::add_product)
            .service(routes::api::list_products)
            .service(routes::api::add_product)
            .service(
                web::resource("/api/products/edit")
                    .route(web::put().to(routes::api::edit_product)),
            )
            // Registered last so fixed paths are matched first.
            .service(routes::products::show_product)
    })
    .bind(bind_address)?
    .run()
    .await
}
