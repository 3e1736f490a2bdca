pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::ExtractionLimits;
use crate::error::ExtractError;
use crate::results::ExtractedContent;
use crate::utils;
use url::Url;

/// How a fetched body should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserType {
    /// HTML, XHTML, XML or any other text (parsed leniently as HTML)
    Html,
    /// Images, media, archives and other non-markup payloads
    Binary,
}

impl ParserType {
    /// Determines the parser type from a `Content-Type` header value
    pub fn from_content_type(content_type: &str) -> Self {
        let media_type = utils::media_type(content_type);

        let binary = ["image/", "audio/", "video/", "font/"]
            .iter()
            .any(|prefix| media_type.starts_with(prefix))
            || matches!(
                media_type.as_str(),
                "application/pdf"
                    | "application/zip"
                    | "application/gzip"
                    | "application/octet-stream"
                    | "application/wasm"
            );

        if binary {
            ::log::debug!("Classifying as Binary: {}", media_type);
            ParserType::Binary
        } else {
            ::log::debug!("Classifying as HTML: {}", media_type);
            ParserType::Html
        }
    }

    /// Determines the parser type from the header if present, else by sniffing the body
    pub fn detect(content_type: Option<&str>, body: &[u8]) -> Self {
        match content_type {
            Some(ct) if !ct.trim().is_empty() => Self::from_content_type(ct),
            _ if utils::looks_binary(body) => ParserType::Binary,
            _ => ParserType::Html,
        }
    }
}

/// Entry point from raw response bytes to extracted content
pub struct Parser;

impl Parser {
    /// Decode and extract a fetched body
    pub fn extract(
        body: &[u8],
        content_type: Option<&str>,
        base_url: &Url,
        limits: &ExtractionLimits,
    ) -> Result<ExtractedContent, ExtractError> {
        match ParserType::detect(content_type, body) {
            ParserType::Html => {
                let markup = utils::decode_body(body, content_type);
                html::extract(&markup, base_url, limits)
            }
            ParserType::Binary => Err(ExtractError::UnsupportedContent(
                content_type
                    .map(utils::media_type)
                    .unwrap_or_else(|| "binary data".to_string()),
            )),
        }
    }
}
