use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};

use crate::{app_state::AppState, auth::SessionClaims, errors::AppError};

/// Session claims presented with the request, if any.
///
/// Extraction never fails: a missing, malformed or expired token is simply
/// `None`, and the access flow turns that into a login redirect.
#[derive(Debug, Clone, Default)]
pub struct PresentedSession(pub Option<SessionClaims>);

impl PresentedSession {
    pub fn claims(&self) -> Option<&SessionClaims> {
        self.0.as_ref()
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn extract_claims(req: &HttpRequest) -> Option<SessionClaims> {
    let state = req.app_data::<web::Data<AppState>>()?;

    let token = req
        .cookie(&state.config.session_cookie_name)
        .map(|c| c.value().to_string())
        .or_else(|| bearer_token(req))?;

    match state.session_tokens.validate_token(&token) {
        Ok(claims) => Some(claims),
        Err(err) => {
            log::debug!("Ignoring presented session: {}", err);
            None
        }
    }
}

impl FromRequest for PresentedSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(PresentedSession(extract_claims(req))))
    }
}
