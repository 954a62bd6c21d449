//! HTTP front end for the engine.
//!
//! `POST /equity` takes a [`crate::worker::Request`] as JSON and answers with
//! the [`crate::equity::EquityResult`], or `400 {error}` when a card can't be
//! read. Other methods on the route get `405`.
pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(bind: &str) -> Result<(), std::io::Error> {
        log::info!("starting HTTP server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .configure(routes)
        })
        .bind(bind)?
        .run()
        .await
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(web::resource("/equity").route(web::post().to(handlers::equity)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn equity_round_trip() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/equity")
            .set_json(serde_json::json!({
                "heroCards": ["As", "Ks"],
                "boardCards": ["Qs", "Js", "2d"],
                "numOpponents": 1,
                "pot": 100,
                "ourBet": 50,
                "iterations": 300,
                "seed": 11
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["handName"], "High Card");
        assert_eq!(body["potOdds"], 33.33);
        let equity = body["equity"].as_f64().unwrap();
        assert!(equity > 0. && equity <= 100.);
        assert_eq!(body["outs"].as_u64().unwrap() as usize, body["outsList"].as_array().unwrap().len());
    }

    #[actix_web::test]
    async fn unreadable_card_is_bad_request() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/equity")
            .set_json(serde_json::json!({ "heroCards": ["As", "1x"] }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert!(body["error"].as_str().unwrap().contains("1x"));
    }

    #[actix_web::test]
    async fn oversized_budget_is_clamped() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/equity")
            .set_json(serde_json::json!({
                "heroCards": ["As", "Ks"],
                "boardCards": ["Qs", "Js", "Ts", "2d", "3c"],
                "iterations": 1_000_000_000_000u64,
                "seed": 5
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["equity"], 100.);
        assert_eq!(body["handName"], "Straight Flush");
    }

    #[actix_web::test]
    async fn get_is_not_allowed() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/equity").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[actix_web::test]
    async fn degenerate_scenario_is_zeroed() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::post()
            .uri("/equity")
            .set_json(serde_json::json!({ "heroCards": ["As", "Ah"], "boardCards": [] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["equity"], 0.);
        assert_eq!(body["handName"], "");
    }
}
