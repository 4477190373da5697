use std::io;

use actix_web::{middleware, web, App, HttpServer};

use nutrition_ranking::{config::Config, db, nutrient::Nutrient, routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::load().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // set up database connection pool
    let pool = db::init_pool(&config.database_url, config.pool_size)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log::info!("{} nutrient fields available for ranking", Nutrient::ALL.len());
    log::info!("starting HTTP server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
