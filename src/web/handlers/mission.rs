use actix_web::{web, HttpResponse, Responder};
use log::{debug, info};

use crate::core::page::{MissionError, PageAction};
use crate::web::models::{
    error_response, ActionRequest, EventsQuery, EventsResponse, KeyRequest, KeyResponse, MissionResponse,
};
use crate::web::server::AppState;

const DEFAULT_EVENT_LIMIT: usize = 100;

/// Create a new mission session
pub async fn create_mission(data: web::Data<AppState>) -> impl Responder {
    let session = data.registry.create().await;
    let mission = session.read().await.snapshot();
    info!("Created mission {} via API", mission.id);

    HttpResponse::Created().json(MissionResponse {
        success: true,
        mission,
    })
}

/// Get the current snapshot of a mission
pub async fn get_mission(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match data.registry.find(&path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(MissionResponse {
            success: true,
            mission: session.read().await.snapshot(),
        }),
        Err(e) => error_response(&e),
    }
}

/// Apply an action to the mounted page
pub async fn apply_action(
    data: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<ActionRequest>,
) -> impl Responder {
    let result: Result<MissionResponse, MissionError> = async {
        let action: PageAction = request.action.parse()?;
        let session = data.registry.find(&path.into_inner()).await?;
        let mut session = session.write().await;
        session.apply_action(action)?;
        Ok(MissionResponse {
            success: true,
            mission: session.snapshot(),
        })
    }
    .await;

    match result {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => error_response(&e),
    }
}

/// Forward a key press or release to the ship
pub async fn key_event(
    data: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<KeyRequest>,
) -> impl Responder {
    let session = match data.registry.find(&path.into_inner()).await {
        Ok(session) => session,
        Err(e) => return error_response(&e),
    };

    let mut session = session.write().await;
    let handled = session.key_event(&request.key, request.pressed);
    debug!("Key {} pressed={} handled={}", request.key, request.pressed, handled);

    HttpResponse::Ok().json(KeyResponse {
        success: true,
        handled,
        roll: session.page().ship().map(|ship| ship.roll()),
    })
}

/// Get the newest journal events of a mission
pub async fn get_events(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EventsQuery>,
) -> impl Responder {
    match data.registry.find(&path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(EventsResponse {
            success: true,
            events: session
                .read()
                .await
                .events(query.limit.unwrap_or(DEFAULT_EVENT_LIMIT)),
        }),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::web::handlers::test_support::app_state;
    use crate::web::server::routes;

    #[actix_web::test]
    async fn test_create_then_act() {
        let app = test::init_service(App::new().app_data(app_state()).configure(routes)).await;

        let req = test::TestRequest::post().uri("/api/missions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let id = body["mission"]["id"].as_str().unwrap().to_string();
        assert_eq!(body["mission"]["view"], "landing");

        let req = test::TestRequest::post()
            .uri(&format!("/api/missions/{}/actions", id))
            .set_json(json!({ "action": "board" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["mission"]["page"]["wall"], "closing");
        assert_eq!(body["mission"]["animating"], true);
    }

    #[actix_web::test]
    async fn test_action_errors_map_to_status() {
        let state = app_state();
        let session = state.registry.create().await;
        let id = session.read().await.id();
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/missions/{}/actions", id))
            .set_json(json!({ "action": "warp_speed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri(&format!("/api/missions/{}/actions", id))
            .set_json(json!({ "action": "colonize" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error_code"], "INVALID_ACTION");

        let req = test::TestRequest::get()
            .uri(&format!("/api/missions/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_keys_and_events() {
        let state = app_state();
        let session = state.registry.create().await;
        let id = session.read().await.id();
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/missions/{}/keys", id))
            .set_json(json!({ "key": "ArrowLeft", "pressed": true }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["handled"], false);
        assert!(body["roll"].is_null());

        let req = test::TestRequest::get()
            .uri(&format!("/api/missions/{}/events?limit=5", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let events = body["events"].as_array().unwrap();
        assert!(!events.is_empty());
        assert_eq!(events[0]["kind"], "mount");
    }
}
