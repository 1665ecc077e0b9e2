use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, Responder};
use handlebars::Handlebars;
use log::{error, info};
use serde_json::json;
use std::sync::Arc;

use crate::content::{era, timeline_for, ERAS};
use crate::core::page::{MissionError, PageAction};
use crate::web::models::{error_response, EraDetail, EraSummary};
use crate::web::server::AppState;

const TEMPLATES: &[(&str, &str)] = &[
    ("landing", include_str!("../templates/landing.hbs")),
    ("launch_station", include_str!("../templates/launch_station.hbs")),
    ("moon", include_str!("../templates/moon.hbs")),
    ("mars", include_str!("../templates/mars.hbs")),
    ("completion", include_str!("../templates/completion.hbs")),
    ("eras", include_str!("../templates/eras.hbs")),
    ("era_detail", include_str!("../templates/era_detail.hbs")),
    ("error", include_str!("../templates/error.hbs")),
    ("404", include_str!("../templates/404.hbs")),
];

const PARTIALS: &[(&str, &str)] = &[
    ("head", include_str!("../templates/partials/head.hbs")),
    ("foot", include_str!("../templates/partials/foot.hbs")),
    ("scene", include_str!("../templates/partials/scene.hbs")),
];

/// Shared handlebars instance
lazy_static::lazy_static! {
    static ref HBS: Arc<Handlebars<'static>> = {
        let mut hbs = Handlebars::new();
        // Register templates
        for (name, source) in PARTIALS {
            if let Err(e) = hbs.register_partial(name, *source) {
                error!("Error registering partial {}: {}", name, e);
            }
        }
        for (name, source) in TEMPLATES {
            if let Err(e) = hbs.register_template_string(name, *source) {
                error!("Error registering template {}: {}", name, e);
            }
        }
        Arc::new(hbs)
    };
}

/// Render `template`; a rendering failure becomes a JSON `TEMPLATE_ERROR`
fn render(status: StatusCode, template: &str, context: &serde_json::Value) -> HttpResponse {
    match HBS
        .render(template, context)
        .map_err(|e| MissionError::Template(format!("{}: {}", template, e)))
    {
        Ok(body) => HttpResponse::build(status).content_type("text/html").body(body),
        Err(e) => error_response(&e),
    }
}

/// Render the error page for a failed request
fn render_error(err: &MissionError) -> HttpResponse {
    let status = err.status();
    if status == StatusCode::NOT_FOUND {
        return render(status, "404", &json!({ "title": "Lost in Space | The Space Race", "message": err.to_string() }));
    }
    render(
        status,
        "error",
        &json!({
            "title": "Mission Control | The Space Race",
            "status": status.as_u16(),
            "message": err.to_string(),
        }),
    )
}

fn redirect_to_mission(id: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/mission/{}", id)))
        .finish()
}

/// Start a new mission and send the visitor to it
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let session = data.registry.create().await;
    let id = session.read().await.id();
    info!("New visitor mission {}", id);
    redirect_to_mission(&id.to_string())
}

/// Render the current screen of a mission
pub async fn mission(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let session = match data.registry.find(&path.into_inner()).await {
        Ok(session) => session,
        Err(e) => return render_error(&e),
    };
    let snapshot = session.read().await.snapshot();

    let context = json!({
        "title": "The Space Race",
        "mission_id": snapshot.id,
        "refresh_ms": data.config.timings.countdown_tick_ms.min(1000),
        "animating": snapshot.animating,
        "overlay": snapshot.overlay_page,
        "page": snapshot.page,
    });
    render(StatusCode::OK, snapshot.view.slug(), &context)
}

/// Apply an action posted from a screen and go back to it
pub async fn mission_action(data: web::Data<AppState>, path: web::Path<(String, String)>) -> impl Responder {
    let (id, action) = path.into_inner();
    let result: Result<(), MissionError> = async {
        let action: PageAction = action.parse()?;
        let session = data.registry.find(&id).await?;
        let mut session = session.write().await;
        session.apply_action(action)
    }
    .await;

    match result {
        Ok(()) => redirect_to_mission(&id),
        Err(e) => render_error(&e),
    }
}

/// Era catalogue overview
pub async fn eras() -> impl Responder {
    let eras: Vec<EraSummary> = ERAS.iter().map(EraSummary::from).collect();
    render(
        StatusCode::OK,
        "eras",
        &json!({ "title": "Eras | The Space Race", "eras": eras }),
    )
}

/// One era in detail
pub async fn era_detail(path: web::Path<u8>) -> impl Responder {
    let id = path.into_inner();
    match era(id) {
        Some(found) => render(
            StatusCode::OK,
            "era_detail",
            &json!({
                "title": format!("{} | The Space Race", found.title),
                "era": EraDetail::new(found, timeline_for(id)),
            }),
        ),
        None => render_error(&MissionError::UnknownEra(id)),
    }
}

/// 404 Not Found handler
pub async fn not_found() -> impl Responder {
    render(
        StatusCode::NOT_FOUND,
        "404",
        &json!({ "title": "Lost in Space | The Space Race" }),
    )
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    use crate::core::page::ViewId;
    use crate::web::handlers::test_support::app_state;
    use crate::web::server::routes;

    #[actix_web::test]
    async fn test_templates_render_every_view() {
        for view in ViewId::ORDER {
            let page = crate::pages::build(view, &crate::config::Timings::default());
            let context = serde_json::json!({
                "title": "The Space Race",
                "mission_id": "test",
                "refresh_ms": 1000,
                "animating": false,
                "overlay": null,
                "page": page.context(),
            });
            assert!(super::HBS.render(view.slug(), &context).is_ok(), "{} failed", view);
        }
    }

    #[actix_web::test]
    async fn test_render_failure_is_template_error() {
        let resp = super::render(StatusCode::OK, "no_such_template", &serde_json::json!({}));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error_code"], "TEMPLATE_ERROR");
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_index_starts_mission() {
        let app = test::init_service(App::new().app_data(app_state()).configure(routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap().to_string();
        assert!(location.starts_with("/mission/"));

        let req = test::TestRequest::get().uri(&location).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("BOARD STARSHIP"));

        let req = test::TestRequest::post()
            .uri(&format!("{}/action/board", location))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn test_html_errors() {
        let state = app_state();
        let session = state.registry.create().await;
        let id = session.read().await.id();
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/mission/{}/action/plant_flag", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get().uri("/mission/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/eras/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/no/such/page").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_era_pages_render() {
        let app = test::init_service(App::new().app_data(app_state()).configure(routes)).await;

        let req = test::TestRequest::get().uri("/eras").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(String::from_utf8_lossy(&body).contains("ERA 8"));

        let req = test::TestRequest::get().uri("/eras/1").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Wernher von Braun"));
        assert!(html.contains("United States"));
        assert!(html.contains("converting over 1,600 German V2"));
        assert!(html.contains("American Significance:"));
    }
}
