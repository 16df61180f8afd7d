use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::{app_state::AppState, constants::TOTAL_WEEKS};

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    checks: Option<ReadinessChecks>,
}

#[derive(Debug, Serialize)]
struct ReadinessChecks {
    datastore: DependencyCheck,
    pdf_export: &'static str,
    handouts: u8,
}

#[derive(Debug, Serialize)]
struct DependencyCheck {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl HealthReport {
    fn bare(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: None,
        }
    }
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport::bare("healthy"))
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport::bare("alive"))
}

/// Ready only while the datastore answers.
#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let datastore = match state.datastore.ping().await {
        Ok(()) => DependencyCheck { ok: true, error: None },
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            DependencyCheck {
                ok: false,
                error: Some(e.to_string()),
            }
        }
    };
    let ready = datastore.ok;

    let report = HealthReport {
        status: if ready { "ready" } else { "not_ready" },
        version: env!("CARGO_PKG_VERSION"),
        checks: Some(ReadinessChecks {
            datastore,
            pdf_export: if state.config.pdf_renderer_enabled {
                "enabled"
            } else {
                "disabled"
            },
            handouts: TOTAL_WEEKS,
        }),
    };

    if ready {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
