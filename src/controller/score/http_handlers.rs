use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use super::request::parse_score_request;
use crate::controller::board_cache::BoardRegistry;
use crate::model::LoadState;
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template};
use crate::view::score::render_scores_template;

pub async fn scores(
    query: web::Query<HashMap<String, String>>,
    registry: Data<BoardRegistry>,
) -> impl Responder {
    let request = match parse_score_request(&query) {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    if request.want_results {
        let results = registry.results_for(request.event_id).await;
        return HttpResponse::Ok().json(results);
    }

    let state = registry.state_for(request.event_id).await;

    if request.want_json {
        return match (state.board(), state.failure()) {
            (Some(board), failure) => {
                HttpResponse::Ok().json(json!({"board": &**board, "error": failure}))
            }
            (None, Some(failure)) => HttpResponse::InternalServerError()
                .json(json!({"error": failure.user_message(), "detail": failure.message})),
            (None, None) => HttpResponse::ServiceUnavailable()
                .json(json!({"error": "tournament data is still loading"})),
        };
    }

    let markup = render_scores_template(&state, chrono::Utc::now());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    registry: Data<BoardRegistry>,
) -> impl Responder {
    let event_id = query.get("event").and_then(|s| s.trim().parse::<i64>().ok());

    let title = match event_id {
        Some(id) => match registry.state_for(id).await {
            LoadState::Ready(board) => board.event.title(),
            _ => DEFAULT_INDEX_TITLE.to_string(),
        },
        None => DEFAULT_INDEX_TITLE.to_string(),
    };

    let markup = render_index_template(&title, event_id);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
