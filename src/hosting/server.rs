use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let lobby = web::Data::new(Lobby::spawn(config.clock()));
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(lobby.clone())
                .route("/", web::get().to(enter))
                .route("/health", web::get().to(health))
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

async fn enter(lobby: web::Data<Handle>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match lobby.bridge(session, stream) {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::ServiceUnavailable()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::BadRequest()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
