//! HTML documents for the handout viewer.
//!
//! Pages are assembled with `format!`; every interpolated value goes through
//! [`html_escape`].

use actix_web::http::StatusCode;

use crate::models::{
    domain::{Handout, Role},
    dto::ViewerProfile,
};

const BASE_STYLE: &str = r#"
    body { font-family: "Segoe UI", Arial, sans-serif; color: #222; max-width: 960px; margin: 0 auto; padding: 24px; line-height: 1.5; }
    header { border-bottom: 3px solid #2b579a; margin-bottom: 24px; }
    h1 { color: #2b579a; margin-bottom: 4px; }
    h2 { color: #2b579a; border-left: 4px solid #2b579a; padding-left: 8px; }
    .subtitle { color: #555; margin-top: 0; }
    .viewer { background: #f3f6fb; padding: 12px 16px; border-radius: 4px; font-size: 0.95em; }
    .viewer span { margin-right: 16px; }
    .actions a, nav a { display: inline-block; margin: 8px 8px 0 0; padding: 6px 12px; background: #2b579a; color: #fff; text-decoration: none; border-radius: 3px; }
    nav a.current { background: #888; }
    .notice { padding: 16px; border-left: 4px solid #c0392b; background: #fdf1f0; }
    pre { white-space: pre-wrap; background: #f7f7f7; padding: 12px; }
"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = html_escape(title),
        style = BASE_STYLE,
    )
}

/// Options that depend on the output medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Links and navigation are dropped from PDF renditions.
    pub interactive: bool,
    pub total_weeks: u8,
}

fn handout_query(class_id: Option<i64>, download: bool) -> String {
    let mut params = Vec::new();
    if let Some(class_id) = class_id {
        params.push(format!("class_id={}", class_id));
    }
    if download {
        params.push("download=pdf".to_string());
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&amp;"))
    }
}

fn viewer_banner(profile: &ViewerProfile) -> String {
    let instructor = match (&profile.instructor_name, &profile.instructor_email) {
        (Some(name), Some(email)) => format!("{} ({})", html_escape(name), html_escape(email)),
        (Some(name), None) => html_escape(name),
        _ => "Instructor".to_string(),
    };
    let class = profile
        .class_id
        .map(|id| format!("<span><strong>Class:</strong> #{}</span>", id))
        .unwrap_or_default();

    format!(
        r#"<div class="viewer">
    <span><strong>{role}:</strong> {name} &lt;{email}&gt;</span>
    <span><strong>Instructor:</strong> {instructor}</span>
    {class}
</div>"#,
        role = match profile.role {
            Role::Student => "Student",
            Role::Instructor => "Instructor",
        },
        name = html_escape(&profile.display_name),
        email = html_escape(&profile.user_email),
        instructor = instructor,
        class = class,
    )
}

fn week_navigation(current: u8, total: u8, class_id: Option<i64>) -> String {
    let query = handout_query(class_id, false);
    let links: Vec<String> = (1..=total)
        .map(|week| {
            let class = if week == current { r#" class="current""# } else { "" };
            format!(r#"<a href="/handouts/week/{week}{query}"{class}>Week {week}</a>"#)
        })
        .collect();
    format!("<nav>{}</nav>", links.join(""))
}

pub fn render_handout(profile: &ViewerProfile, handout: &Handout, options: RenderOptions) -> String {
    let sections: String = handout
        .sections
        .iter()
        .map(|section| {
            let points: String = section
                .points
                .iter()
                .map(|point| format!("<li>{}</li>", html_escape(point)))
                .collect();
            format!(
                "<section>\n<h2>{}</h2>\n<ul>{}</ul>\n</section>\n",
                html_escape(section.heading),
                points
            )
        })
        .collect();

    let (actions, navigation) = if options.interactive {
        (
            format!(
                r#"<div class="actions"><a href="/handouts/week/{}{}">Download PDF</a></div>"#,
                handout.week,
                handout_query(profile.class_id, true)
            ),
            week_navigation(handout.week, options.total_weeks, profile.class_id),
        )
    } else {
        (String::new(), String::new())
    };

    let body = format!(
        r#"<header>
    <h1>{title}</h1>
    <p class="subtitle">{subtitle}</p>
</header>
{banner}
{actions}
<main>
{sections}
</main>
{navigation}"#,
        title = html_escape(&handout.document_title()),
        subtitle = html_escape(handout.subtitle),
        banner = viewer_banner(profile),
        actions = actions,
        sections = sections,
        navigation = navigation,
    );

    page(&handout.document_title(), &body)
}

pub fn render_access_denied(week: u8) -> String {
    let body = format!(
        r#"<div class="notice">
    <h1>Access denied</h1>
    <p>You do not have access to the Week {} handout for this class.</p>
    <p><a href="/">Return to the portal</a></p>
</div>"#,
        week
    );
    page("Access denied", &body)
}

pub fn render_pdf_unavailable(reason: &str) -> String {
    let body = format!(
        r#"<div class="notice">
    <h1>PDF export unavailable</h1>
    <p>The PDF renderer could not produce this handout.</p>
    <pre>{}</pre>
    <p>Install an HTML-to-PDF renderer on the server (for example <code>wkhtmltopdf</code>)
    and point <code>PDF_RENDERER_BIN</code> at it, or use your browser's print dialog to save the page as PDF.</p>
</div>"#,
        html_escape(reason)
    );
    page("PDF export unavailable", &body)
}

pub fn render_datastore_error(message: &str) -> String {
    let body = format!(
        r#"<div class="notice">
    <h1>Database connection failed</h1>
    <pre>{}</pre>
</div>"#,
        html_escape(message)
    );
    page("Database connection failed", &body)
}

pub fn render_error_page(status: StatusCode, code: &str) -> String {
    let body = format!(
        r#"<div class="notice">
    <h1>{} {}</h1>
    <p>Error code: {}</p>
</div>"#,
        status.as_u16(),
        html_escape(status.canonical_reason().unwrap_or("Error")),
        html_escape(code)
    );
    page("Error", &body)
}
