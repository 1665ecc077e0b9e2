use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::content::{era, timeline_for, CITATIONS, ERAS};
use crate::core::page::MissionError;
use crate::web::models::{error_response, EraDetail, EraSummary};

/// List every era with its summary bullets
pub async fn list_eras() -> impl Responder {
    let eras: Vec<EraSummary> = ERAS.iter().map(EraSummary::from).collect();
    HttpResponse::Ok().json(json!({
        "success": true,
        "eras": eras,
    }))
}

/// Get one era with its accomplishments and timeline
pub async fn get_era(path: web::Path<u8>) -> impl Responder {
    let id = path.into_inner();
    match era(id) {
        Some(found) => HttpResponse::Ok().json(json!({
            "success": true,
            "era": EraDetail::new(found, timeline_for(id)),
        })),
        None => error_response(&MissionError::UnknownEra(id)),
    }
}

/// The works cited list
pub async fn list_citations() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "citations": CITATIONS,
    }))
}
