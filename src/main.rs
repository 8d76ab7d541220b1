use actix_web::{App, HttpServer, web};
use tera::Tera;

use idea_directory::db::establish_connection_pool;
use idea_directory::models::config::ServerConfig;
use idea_directory::repository::DieselRepository;
use idea_directory::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::load().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new("templates/**/*.html").map_err(std::io::Error::other)?;

    log::info!("Starting idea directory on {}", config.bind_address);

    let bind_address = config.bind_address.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(config.clone()))
            .service(routes::main::index)
            .service(routes::ideas::legacy)
            .service(routes::browse::category)
            .service(routes::browse::business_type)
            .service(routes::browse::creator)
            .service(routes::browse::tag)
            // Catch-all three-segment pattern stays behind the fixed routes.
            .service(routes::ideas::show)
            .service(actix_files::Files::new("/static", "static"))
    })
    .bind(bind_address)?
    .run()
    .await
}
