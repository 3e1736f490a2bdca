use serde::{Deserialize, Serialize};

/// Bounded summary of a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Text of the `<title>` element, verbatim (if present)
    pub page_title: Option<String>,

    /// Cleaned `h1`-`h3` text in document order
    pub headings: Vec<String>,

    /// Absolute link targets in document order
    pub links: Vec<String>,

    /// Absolute image sources in document order
    pub images: Vec<String>,

    /// Cleaned paragraph text above the length threshold
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Success,
    Error,
}

/// Caller-facing result of one scrape.
///
/// Serializes to the flat envelope (`url`, `status`, `page_title`, `titles`,
/// `links`, `images`, `paragraphs`, `error`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Envelope", from = "Envelope")]
pub enum ScrapeOutcome {
    Success {
        url: String,
        content: ExtractedContent,
    },
    Error {
        url: String,
        message: String,
    },
}

impl ScrapeOutcome {
    pub fn success(url: impl Into<String>, content: ExtractedContent) -> Self {
        Self::Success {
            url: url.into(),
            content,
        }
    }

    pub fn error(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            url: url.into(),
            message: message.into(),
        }
    }

    /// The URL that was requested
    pub fn url(&self) -> &str {
        match self {
            Self::Success { url, .. } | Self::Error { url, .. } => url,
        }
    }

    pub fn status(&self) -> ScrapeStatus {
        match self {
            Self::Success { .. } => ScrapeStatus::Success,
            Self::Error { .. } => ScrapeStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Extracted content; `None` on error
    pub fn content(&self) -> Option<&ExtractedContent> {
        match self {
            Self::Success { content, .. } => Some(content),
            Self::Error { .. } => None,
        }
    }

    /// Error message; `None` on success
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message, .. } => Some(message.as_str()),
        }
    }
}

/// Wire form of [`ScrapeOutcome`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope {
    url: String,
    status: ScrapeStatus,
    page_title: Option<String>,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    links: Vec<String>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    paragraphs: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

impl From<ScrapeOutcome> for Envelope {
    fn from(outcome: ScrapeOutcome) -> Self {
        match outcome {
            ScrapeOutcome::Success { url, content } => Self {
                url,
                status: ScrapeStatus::Success,
                page_title: content.page_title,
                titles: content.headings,
                links: content.links,
                images: content.images,
                paragraphs: content.paragraphs,
                error: None,
            },
            ScrapeOutcome::Error { url, message } => Self {
                url,
                status: ScrapeStatus::Error,
                page_title: None,
                titles: Vec::new(),
                links: Vec::new(),
                images: Vec::new(),
                paragraphs: Vec::new(),
                error: Some(message),
            },
        }
    }
}

impl From<Envelope> for ScrapeOutcome {
    fn from(envelope: Envelope) -> Self {
        match envelope.status {
            ScrapeStatus::Success => Self::Success {
                url: envelope.url,
                content: ExtractedContent {
                    page_title: envelope.page_title,
                    headings: envelope.titles,
                    links: envelope.links,
                    images: envelope.images,
                    paragraphs: envelope.paragraphs,
                },
            },
            ScrapeStatus::Error => Self::Error {
                url: envelope.url,
                message: envelope.error.unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_success_envelope_shape() {
        let outcome = ScrapeOutcome::success(
            "https://example.com/",
            ExtractedContent {
                page_title: Some("Example".to_string()),
                headings: vec!["Welcome".to_string()],
                links: vec!["https://example.com/about".to_string()],
                images: Vec::new(),
                paragraphs: Vec::new(),
            },
        );

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://example.com/",
                "status": "success",
                "page_title": "Example",
                "titles": ["Welcome"],
                "links": ["https://example.com/about"],
                "images": [],
                "paragraphs": [],
                "error": null
            })
        );
    }

    #[test]
    fn test_error_envelope_has_empty_collections() {
        let outcome = ScrapeOutcome::error("https://example.invalid/", "Failed to fetch URL: boom");
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["page_title"], Value::Null);
        assert_eq!(value["error"], "Failed to fetch URL: boom");
        for field in ["titles", "links", "images", "paragraphs"] {
            assert_eq!(value[field], json!([]), "{} should be empty", field);
        }
    }

    #[test]
    fn test_envelope_parses_back() {
        let json = r#"{"url":"https://a.test/","status":"error","page_title":null,"titles":[],"links":[],"images":[],"paragraphs":[],"error":"nope"}"#;
        let outcome: ScrapeOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.status(), ScrapeStatus::Error);
        assert_eq!(outcome.error_message(), Some("nope"));
        assert_eq!(outcome.url(), "https://a.test/");
        assert!(outcome.content().is_none());
    }

    #[test]
    fn test_absent_title_is_distinct_from_empty() {
        let outcome = ScrapeOutcome::success("https://a.test/", ExtractedContent::default());
        assert!(outcome.is_success());
        assert_eq!(outcome.content().unwrap().page_title, None);
        assert_eq!(outcome.error_message(), None);
    }
}
