use actix_web::{
    get,
    http::header::{self, ContentDisposition, ContentType, DispositionParam, DispositionType},
    web, HttpRequest, HttpResponse,
};

use crate::{
    app_state::AppState,
    auth::PresentedSession,
    constants::{find_handout, TOTAL_WEEKS},
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{AccessOutcome, Handout},
        dto::{HandoutQuery, ViewerProfile},
    },
    render::{html, PdfRendition, RenderOptions},
    services::AccessResolver,
};

fn outcome_response(outcome: AccessOutcome, week: &str) -> HttpResponse {
    match outcome {
        AccessOutcome::Redirect(location) => HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish(),
        AccessOutcome::Denied => HttpResponse::Forbidden()
            .content_type(ContentType::html())
            .body(html::render_access_denied(week.parse().unwrap_or(0))),
        AccessOutcome::Proceed => HttpResponse::NoContent().finish(),
    }
}

fn parse_query(req: &HttpRequest) -> HandoutQuery {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|pairs| HandoutQuery::from_pairs(pairs.into_inner()))
        .unwrap_or_default()
}

#[get("/handouts/week/{week}")]
pub async fn view_handout(
    state: web::Data<AppState>,
    req: HttpRequest,
    week: web::Path<String>,
    session: PresentedSession,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_default();
    let resolver = &state.access_resolver;

    let identity = match resolver.validate_session(session.claims()) {
        Ok(identity) => identity,
        Err(outcome) => {
            log::info!("[{}] No valid session for week {}, redirecting to login", request_id, week);
            return Ok(outcome_response(outcome, &week));
        }
    };

    let handout = week
        .parse::<u8>()
        .ok()
        .and_then(find_handout)
        .ok_or_else(|| AppError::NotFound(format!("Handout for week '{}'", week)))?;

    state.datastore.ping().await?;

    let query = parse_query(&req);
    let scope = AccessResolver::resolve_class_scope(query.class_id.as_deref());

    let outcome = resolver.authorize(&identity, scope).await;
    if outcome != AccessOutcome::Proceed {
        log::info!(
            "[{}] {} {} refused week {} (class {:?}): {:?}",
            request_id,
            identity.role,
            identity.user_id,
            handout.week,
            scope.map(|s| s.class_id),
            outcome
        );
        return Ok(outcome_response(outcome, &week));
    }

    let profile = state.viewer_service.load_profile(&identity, scope).await;

    if query.wants_pdf() {
        return Ok(pdf_response(&state, &profile, handout).await);
    }

    let page = html::render_handout(
        &profile,
        handout,
        RenderOptions {
            interactive: true,
            total_weeks: TOTAL_WEEKS,
        },
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(page))
}

async fn pdf_response(state: &AppState, profile: &ViewerProfile, handout: &Handout) -> HttpResponse {
    let document = html::render_handout(
        profile,
        handout,
        RenderOptions {
            interactive: false,
            total_weeks: TOTAL_WEEKS,
        },
    );

    match state
        .pdf_exporter
        .export(&document, &handout.document_title())
        .await
    {
        PdfRendition::Rendered(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(handout.pdf_file_name())],
            })
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .body(bytes),
        PdfRendition::Unavailable(reason) => HttpResponse::ServiceUnavailable()
            .content_type(ContentType::html())
            .body(html::render_pdf_unavailable(&reason)),
        PdfRendition::Failed(reason) => HttpResponse::InternalServerError()
            .content_type(ContentType::html())
            .body(html::render_pdf_unavailable(&reason)),
    }
}
