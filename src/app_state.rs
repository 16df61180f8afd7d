use std::sync::Arc;

use crate::{
    auth::SessionTokenService,
    config::Config,
    db::{Database, Datastore},
    errors::AppResult,
    render::{CommandPdfExporter, PdfExporter},
    repositories::{AccessRepository, MongoAccessRepository, MongoUserRepository, UserRepository},
    services::{AccessPolicy, AccessResolver, ViewerService},
};

const SESSION_EXPIRATION_HOURS: i64 = 8;

#[derive(Clone)]
pub struct AppState {
    pub datastore: Arc<dyn Datastore>,
    pub access_resolver: Arc<AccessResolver>,
    pub viewer_service: Arc<ViewerService>,
    pub pdf_exporter: Arc<dyn PdfExporter>,
    pub session_tokens: Arc<SessionTokenService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let access_repository = Arc::new(MongoAccessRepository::new(&db));
        let user_repository = Arc::new(MongoUserRepository::new(&db));
        let pdf_exporter = Arc::new(CommandPdfExporter::new(
            config.pdf_renderer_bin.clone(),
            config.pdf_renderer_enabled,
        ));

        Ok(Self::from_parts(
            config,
            Arc::new(db),
            access_repository,
            user_repository,
            pdf_exporter,
        ))
    }

    /// Wires the services around already-built collaborators.
    pub fn from_parts(
        config: Config,
        datastore: Arc<dyn Datastore>,
        access_repository: Arc<dyn AccessRepository>,
        user_repository: Arc<dyn UserRepository>,
        pdf_exporter: Arc<dyn PdfExporter>,
    ) -> Self {
        let access_resolver = Arc::new(AccessResolver::new(
            access_repository,
            AccessPolicy::from_config(&config),
        ));
        let viewer_service = Arc::new(ViewerService::new(
            user_repository,
            config.course_title_pattern.clone(),
        ));
        let session_tokens = Arc::new(SessionTokenService::new(
            &config.session_secret,
            SESSION_EXPIRATION_HOURS,
        ));

        Self {
            datastore,
            access_resolver,
            viewer_service,
            pdf_exporter,
            session_tokens,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
