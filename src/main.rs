use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;

use cicekzamani::api::{self, AppState};
use cicekzamani::config::Settings;
use cicekzamani::store::CatalogStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::load()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;
    let app_state = web::Data::new(AppState {
        store: CatalogStore::new(),
    });

    info!(
        "starting HTTP server on http://{}:{}",
        settings.host, settings.port
    );
    let cors_settings = settings.clone();
    HttpServer::new(move || {
        let cors = if cors_settings.allow_any_origin() {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600)
        } else {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);
            for origin in cors_settings.origins() {
                cors = cors.allowed_origin(&origin);
            }
            cors
        };

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(api::configure)
    })
    .bind(settings.bind_addr())?
    .run()
    .await
}
