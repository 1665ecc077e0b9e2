use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::content::{Era, EraTimeline};
use crate::core::journal::MissionEvent;
use crate::core::page::MissionError;
use crate::mission::MissionSnapshot;

/// Action request
#[derive(Deserialize)]
pub struct ActionRequest {
    pub action: String,
}

/// Key event request
#[derive(Deserialize)]
pub struct KeyRequest {
    pub key: String,
    pub pressed: bool,
}

/// Journal query
#[derive(Deserialize)]
pub struct EventsQuery {
    pub limit: Option<usize>,
}

/// Mission snapshot response
#[derive(Serialize)]
pub struct MissionResponse {
    pub success: bool,
    pub mission: MissionSnapshot,
}

/// Key event response
#[derive(Serialize)]
pub struct KeyResponse {
    pub success: bool,
    /// Whether the key reached a ship rig
    pub handled: bool,
    pub roll: Option<f64>,
}

/// Journal response
#[derive(Serialize)]
pub struct EventsResponse {
    pub success: bool,
    pub events: Vec<MissionEvent>,
}

/// Era summary for the catalogue overview
#[derive(Serialize)]
pub struct EraSummary {
    pub id: u8,
    pub title: &'static str,
    pub years: &'static str,
    pub bullets: Vec<&'static str>,
}

impl From<&Era> for EraSummary {
    fn from(era: &Era) -> Self {
        Self {
            id: era.id,
            title: era.title,
            years: era.years,
            bullets: era.summary_bullets(),
        }
    }
}

/// Accomplishments of one category
#[derive(Serialize)]
pub struct CategoryGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// Full era detail
#[derive(Serialize)]
pub struct EraDetail {
    pub id: u8,
    pub title: &'static str,
    pub years: &'static str,
    pub groups: Vec<CategoryGroup>,
    pub timeline: Option<&'static EraTimeline>,
}

impl EraDetail {
    pub fn new(era: &'static Era, timeline: Option<&'static EraTimeline>) -> Self {
        Self {
            id: era.id,
            title: era.title,
            years: era.years,
            groups: era
                .accomplishments
                .iter()
                .map(|(category, items)| CategoryGroup {
                    label: category.label(),
                    items: *items,
                })
                .collect(),
            timeline,
        }
    }
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl MissionError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            MissionError::UnknownSession(_) | MissionError::UnknownEra(_) => StatusCode::NOT_FOUND,
            MissionError::UnknownAction(_) => StatusCode::BAD_REQUEST,
            MissionError::InvalidAction { .. } | MissionError::InvalidNavigation { .. } => {
                StatusCode::CONFLICT
            }
            MissionError::AssetLoad(_) | MissionError::Config(_) | MissionError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            MissionError::UnknownSession(_) => "UNKNOWN_SESSION",
            MissionError::UnknownAction(_) => "UNKNOWN_ACTION",
            MissionError::InvalidAction { .. } => "INVALID_ACTION",
            MissionError::InvalidNavigation { .. } => "INVALID_NAVIGATION",
            MissionError::UnknownEra(_) => "UNKNOWN_ERA",
            MissionError::AssetLoad(_) => "ASSET_LOAD_FAILED",
            MissionError::Config(_) => "CONFIG_ERROR",
            MissionError::Template(_) => "TEMPLATE_ERROR",
        }
    }
}

/// JSON error response for a mission error
pub fn error_response(err: &MissionError) -> HttpResponse {
    let status = err.status();
    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }
    HttpResponse::build(status).json(ErrorResponse {
        success: false,
        error: err.to_string(),
        error_code: err.code().to_string(),
    })
}
