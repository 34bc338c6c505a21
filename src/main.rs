use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::bson::doc;
use mongodb::Client;

use register_api::config::{Config, StorageBackend};
use register_api::repositories::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use register_api::routes;
use register_api::services::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let repository = build_repository(&config).await?;
    let user_service = web::Data::new(UserService::new(repository));

    let server_addr = config.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await
}

async fn build_repository(config: &Config) -> io::Result<Arc<dyn UserRepository>> {
    info!("Using {} storage backend", config.storage_backend);

    match config.storage_backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryUserRepository::new())),
        StorageBackend::MongoDb => {
            info!("Connecting to MongoDB...");
            let client = Client::with_uri_str(&config.mongodb_uri)
                .await
                .map_err(startup_error)?;
            let db = client.database(&config.database_name);

            db.run_command(doc! { "ping": 1 })
                .await
                .map_err(startup_error)?;
            info!("Connected to MongoDB successfully!");

            let repository = MongoUserRepository::new(&db);
            repository.create_indexes().await.map_err(|e| {
                error!("{}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            })?;

            Ok(Arc::new(repository))
        }
    }
}

fn startup_error(err: mongodb::error::Error) -> io::Error {
    error!("MongoDB startup failed: {}", err);
    io::Error::new(io::ErrorKind::ConnectionRefused, err)
}
