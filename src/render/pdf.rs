use std::{io::ErrorKind, process::Stdio};

use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};

/// Outcome of a PDF export. Callers inspect it instead of catching errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfRendition {
    Rendered(Vec<u8>),
    /// No renderer is installed or export is switched off.
    Unavailable(String),
    /// The renderer ran but did not produce a document.
    Failed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PdfExporter: Send + Sync {
    async fn export(&self, html: &str, title: &str) -> PdfRendition;
}

/// Pipes HTML through an external HTML-to-PDF renderer (wkhtmltopdf-compatible
/// command line: `<bin> --quiet --title <title> - -`).
pub struct CommandPdfExporter {
    program: String,
    enabled: bool,
}

impl CommandPdfExporter {
    pub fn new(program: impl Into<String>, enabled: bool) -> Self {
        Self {
            program: program.into(),
            enabled,
        }
    }
}

#[async_trait]
impl PdfExporter for CommandPdfExporter {
    async fn export(&self, html: &str, title: &str) -> PdfRendition {
        if !self.enabled {
            return PdfRendition::Unavailable("PDF export is disabled on this server".to_string());
        }

        let spawned = Command::new(&self.program)
            .args(["--quiet", "--encoding", "utf-8", "--title", title, "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("PDF renderer '{}' is not installed", self.program);
                return PdfRendition::Unavailable(format!(
                    "PDF renderer '{}' was not found on this server",
                    self.program
                ));
            }
            Err(err) => {
                log::error!("Failed to start PDF renderer '{}': {}", self.program, err);
                return PdfRendition::Unavailable(format!(
                    "PDF renderer '{}' could not be started: {}",
                    self.program, err
                ));
            }
        };

        // Feed stdin concurrently so a renderer that streams output cannot block on a full pipe.
        let writer = child.stdin.take().map(|mut stdin| {
            let html = html.to_owned();
            tokio::spawn(async move {
                if let Err(err) = stdin.write_all(html.as_bytes()).await {
                    log::debug!("PDF renderer closed stdin early: {}", err);
                }
            })
        });

        let output = match child.wait_with_output().await {
            Ok(output) => output,
            Err(err) => return PdfRendition::Failed(format!("PDF renderer did not finish: {}", err)),
        };
        if let Some(writer) = writer {
            let _ = writer.await;
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!("PDF renderer exited with {}: {}", output.status, stderr.trim());
            return PdfRendition::Failed(format!(
                "PDF renderer exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        if !output.stdout.starts_with(b"%PDF") {
            return PdfRendition::Failed("PDF renderer produced no PDF output".to_string());
        }

        PdfRendition::Rendered(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_exporter_is_unavailable() {
        let exporter = CommandPdfExporter::new("wkhtmltopdf", false);
        let rendition = exporter.export("<p>hi</p>", "Week 1").await;

        assert!(matches!(rendition, PdfRendition::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_missing_renderer_is_unavailable() {
        let exporter = CommandPdfExporter::new("handout-viewer-no-such-renderer", true);
        match exporter.export("<p>hi</p>", "Week 1").await {
            PdfRendition::Unavailable(reason) => {
                assert!(reason.contains("handout-viewer-no-such-renderer"))
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_renderer_is_failed() {
        let exporter = CommandPdfExporter::new("false", true);
        let rendition = exporter.export("<p>hi</p>", "Week 1").await;

        assert!(matches!(rendition, PdfRendition::Failed(_)));
    }
}
