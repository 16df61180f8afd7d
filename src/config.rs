use std::env;
use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_secret: SecretString,
    pub session_cookie_name: String,
    pub login_url: String,
    pub student_dashboard_url: String,
    pub instructor_dashboard_url: String,
    pub course_title_pattern: String,
    pub pdf_renderer_bin: String,
    pub pdf_renderer_enabled: bool,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "course-portal".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            session_secret: SecretString::from(env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "dev_session_secret_change_in_production".to_string())),
            session_cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "portal_session".to_string()),
            login_url: env::var("LOGIN_URL").unwrap_or_else(|_| "/login".to_string()),
            student_dashboard_url: env::var("STUDENT_DASHBOARD_URL")
                .unwrap_or_else(|_| "/student/dashboard".to_string()),
            instructor_dashboard_url: env::var("INSTRUCTOR_DASHBOARD_URL")
                .unwrap_or_else(|_| "/instructor/dashboard".to_string()),
            course_title_pattern: env::var("COURSE_TITLE_PATTERN")
                .unwrap_or_else(|_| "Microsoft Word".to_string()),
            pdf_renderer_bin: env::var("PDF_RENDERER_BIN")
                .unwrap_or_else(|_| "wkhtmltopdf".to_string()),
            pdf_renderer_enabled: env::var("PDF_RENDERER_ENABLED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let session_secret = self.session_secret.expose_secret();

        if session_secret == "dev_session_secret_change_in_production" {
            panic!(
                "FATAL: SESSION_SECRET is using default value! Set SESSION_SECRET to the secret shared with the login service."
            );
        }

        if session_secret.len() < 32 {
            panic!(
                "FATAL: SESSION_SECRET is too short ({}). Must be at least 32 characters.",
                session_secret.len()
            );
        }

        if self.course_title_pattern.trim().is_empty() {
            panic!("FATAL: COURSE_TITLE_PATTERN must not be empty.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "course-portal-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_secret: SecretString::from("test_session_secret_key".to_string()),
            session_cookie_name: "portal_session".to_string(),
            login_url: "/login".to_string(),
            student_dashboard_url: "/student/dashboard".to_string(),
            instructor_dashboard_url: "/instructor/dashboard".to_string(),
            course_title_pattern: "Microsoft Word".to_string(),
            pdf_renderer_bin: "wkhtmltopdf".to_string(),
            pdf_renderer_enabled: false,
            app_env: "test".to_string(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
