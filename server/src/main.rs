#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_web::{dev::Service, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod config;
mod handlers;
mod routes;
mod tests;
mod validate;

use crate::config::Config;
use crate::routes::{access_control_headers, cors, not_found, routes};
use db::{PgStore, TriviaStore};

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration - {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;

    let pool = db::new_pool(&config.database_url, config.pool_size)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let store: Arc<dyn TriviaStore> = Arc::new(PgStore::new(pool));
    let store = web::Data::from(store);

    info!("Listening on {}", config.bind_address);

    let client_host = config.client_host.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(client_host.as_deref()))
            .wrap_fn(|req, srv| access_control_headers(srv.call(req)))
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await?;

    info!("Server stopped, closing database pool");

    Ok(())
}
