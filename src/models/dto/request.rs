/// Query string of a handout page. Both values are kept raw so that
/// malformed input degrades instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandoutQuery {
    pub class_id: Option<String>,
    pub download: Option<String>,
}

impl HandoutQuery {
    /// Builds the query from decoded key/value pairs. A repeated key keeps its
    /// last value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |mut query, (key, value)| {
                match key.as_str() {
                    "class_id" => query.class_id = Some(value),
                    "download" => query.download = Some(value),
                    _ => {}
                }
                query
            })
    }

    pub fn wants_pdf(&self) -> bool {
        self.download.as_deref() == Some("pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_wants_pdf_only_for_literal_flag() {
        let mut query = HandoutQuery::default();
        assert!(!query.wants_pdf());

        query.download = Some("pdf".to_string());
        assert!(query.wants_pdf());

        query.download = Some("PDF".to_string());
        assert!(!query.wants_pdf());
    }

    #[test]
    fn test_from_pairs_keeps_last_value_per_key() {
        let query = HandoutQuery::from_pairs(pairs(&[
            ("class_id", "7"),
            ("download", "pdf"),
            ("download", "pdf"),
            ("class_id", "42"),
        ]));

        assert_eq!(query.class_id.as_deref(), Some("42"));
        assert!(query.wants_pdf());
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let query = HandoutQuery::from_pairs(pairs(&[("utm_source", "mail"), ("class_id", "3")]));

        assert_eq!(
            query,
            HandoutQuery {
                class_id: Some("3".to_string()),
                download: None,
            }
        );
    }
}
