use crate::worker::Request;
use crate::worker::Worker;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn equity(req: web::Json<Request>) -> impl Responder {
    match Worker::submit(req.into_inner().bounded()) {
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
        Ok(ticket) => match ticket.wait().await {
            Err(e) => HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": e.to_string() })),
            Ok(result) => HttpResponse::Ok().json(result),
        },
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
