use crate::config::ExtractionLimits;
use crate::error::{ExtractError, ResolveError};
use crate::filter::ReferenceFilter;
use crate::parsers::text::{clean_fragments, is_substantial};
use crate::results::ExtractedContent;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Selectors used for extraction, compiled once per document
struct Selectors {
    title: Selector,
    headings: Selector,
    links: Selector,
    images: Selector,
    paragraphs: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            title: selector("title")?,
            headings: selector("h1, h2, h3")?,
            links: selector("a[href]")?,
            images: selector("img[src]")?,
            paragraphs: selector("p")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Extract a bounded content summary from HTML markup.
///
/// Relative references are resolved against `base_url`. A reference that
/// cannot be resolved drops only that element.
pub fn extract(
    markup: &str,
    base_url: &Url,
    limits: &ExtractionLimits,
) -> Result<ExtractedContent, ExtractError> {
    let selectors = Selectors::new()?;
    let doc = Html::parse_document(markup);
    let filter = ReferenceFilter::new(base_url.clone());

    let content = ExtractedContent {
        page_title: page_title(&doc, &selectors),
        headings: headings(&doc, &selectors, limits.max_headings),
        links: references(
            doc.select(&selectors.links),
            "href",
            limits.max_links,
            |href| filter.resolve_link(href),
        ),
        images: references(
            doc.select(&selectors.images),
            "src",
            limits.max_images,
            |src| filter.resolve_image(src),
        ),
        paragraphs: paragraphs(
            &doc,
            &selectors,
            limits.max_paragraphs,
            limits.min_paragraph_chars,
        ),
    };

    ::log::debug!(
        "Extracted {} headings, {} links, {} images, {} paragraphs from {}",
        content.headings.len(),
        content.links.len(),
        content.images.len(),
        content.paragraphs.len(),
        base_url
    );

    Ok(content)
}

/// Text of the first `<title>`, taken as-is; an empty title counts as absent
fn page_title(doc: &Html, selectors: &Selectors) -> Option<String> {
    let title = doc.select(&selectors.title).next()?;
    let text = title.text().collect::<String>();
    (!text.is_empty()).then_some(text)
}

fn headings(doc: &Html, selectors: &Selectors, max: usize) -> Vec<String> {
    doc.select(&selectors.headings)
        .map(|heading| clean_fragments(heading.text()))
        .filter(|text| !text.is_empty())
        .take(max)
        .collect()
}

fn paragraphs(doc: &Html, selectors: &Selectors, max: usize, min_chars: usize) -> Vec<String> {
    doc.select(&selectors.paragraphs)
        .map(|p| clean_fragments(p.text()))
        .filter(|text| is_substantial(text, min_chars))
        .take(max)
        .collect()
}

/// Collect resolved references, skipping any element whose value fails to resolve
fn references<'a, I, F>(elements: I, attr: &str, max: usize, resolve: F) -> Vec<String>
where
    I: Iterator<Item = ElementRef<'a>>,
    F: Fn(&str) -> Result<Option<String>, ResolveError>,
{
    let mut resolved = Vec::new();

    for element in elements {
        if resolved.len() >= max {
            break;
        }

        let Some(raw) = element.value().attr(attr) else {
            continue;
        };

        match resolve(raw) {
            Ok(Some(url)) => resolved.push(url),
            Ok(None) => {}
            Err(e) => {
                ::log::warn!("Error processing <{} {}>: {}", element.value().name(), attr, e);
            }
        }
    }

    resolved
}
