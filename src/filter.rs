use crate::error::ResolveError;
use url::Url;

/// Kind of element a reference was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `<a href>`
    Link,
    /// `<img src>`
    Image,
}

/// Turns raw `href`/`src` values into absolute URLs relative to the page's base URL
#[derive(Debug, Clone)]
pub struct ReferenceFilter {
    base_url: Url,
}

impl ReferenceFilter {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Resolve a reference found on an element of the given kind.
    ///
    /// Returns `Ok(None)` when the reference is dropped by rule (in-page
    /// fragments on links), `Err` when it cannot be turned into a URL.
    pub fn resolve(&self, raw: &str, kind: ReferenceKind) -> Result<Option<String>, ResolveError> {
        let reference = raw.trim();

        if is_absolute_http(reference) {
            // Kept verbatim when clean; embedded whitespace is left to the URL parser
            return Url::parse(reference)
                .map(|parsed| {
                    if reference.contains(char::is_whitespace) {
                        Some(parsed.to_string())
                    } else {
                        Some(reference.to_string())
                    }
                })
                .map_err(|source| ResolveError::Invalid {
                    reference: reference.to_string(),
                    source,
                });
        }

        if kind == ReferenceKind::Link && is_fragment_only(reference) {
            return Ok(None);
        }

        self.base_url
            .join(reference)
            .map(|resolved| Some(resolved.to_string()))
            .map_err(|source| ResolveError::Join {
                reference: reference.to_string(),
                base: self.base_url.to_string(),
                source,
            })
    }

    pub fn resolve_link(&self, href: &str) -> Result<Option<String>, ResolveError> {
        self.resolve(href, ReferenceKind::Link)
    }

    pub fn resolve_image(&self, src: &str) -> Result<Option<String>, ResolveError> {
        self.resolve(src, ReferenceKind::Image)
    }
}

/// Literal `http://` or `https://` prefix
pub fn is_absolute_http(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// A pure in-page reference such as `#top`
pub fn is_fragment_only(reference: &str) -> bool {
    reference.starts_with('#')
}
