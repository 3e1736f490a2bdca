use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

/// How far into the body a `<meta>` charset declaration is looked for
const META_PRESCAN_BYTES: usize = 1024;

/// Extract the `charset` parameter from a `Content-Type` value
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (!value.is_empty()).then_some(value)
        } else {
            None
        }
    })
}

/// The media type of a `Content-Type` value, lowercased and without parameters
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Find the encoding declared by a `<meta charset>` or `<meta http-equiv>`
/// tag near the start of the body.
///
/// Only the first 1024 bytes are scanned. A UTF-16 declaration means UTF-8,
/// since a body readable as ASCII cannot be UTF-16.
pub fn charset_from_meta(body: &[u8]) -> Option<&'static Encoding> {
    let head = body[..body.len().min(META_PRESCAN_BYTES)].to_ascii_lowercase();
    let mut rest = head.as_slice();

    while let Some(start) = find(rest, b"<meta") {
        let tag = &rest[start..];
        let end = tag.iter().position(|&b| b == b'>').unwrap_or(tag.len());

        if let Some(encoding) = charset_in_tag(&tag[..end]).and_then(Encoding::for_label) {
            return Some(if encoding == UTF_16LE || encoding == UTF_16BE {
                UTF_8
            } else {
                encoding
            });
        }
        rest = &tag[end..];
    }
    None
}

/// The value following `charset=` inside one tag, quoted or bare
fn charset_in_tag(tag: &[u8]) -> Option<&[u8]> {
    let after = &tag[find(tag, b"charset")? + b"charset".len()..];
    let value = after.trim_ascii_start().strip_prefix(b"=")?.trim_ascii_start();

    let value = match value.first() {
        Some(&quote @ (b'"' | b'\'')) => {
            let inner = &value[1..];
            &inner[..inner.iter().position(|&b| b == quote)?]
        }
        _ => {
            let end = value
                .iter()
                .position(|&b| b.is_ascii_whitespace() || matches!(b, b';' | b'"' | b'\'' | b'/'))
                .unwrap_or(value.len());
            &value[..end]
        }
    };
    let value = value.trim_ascii();
    (!value.is_empty()).then_some(value)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Decode a response body to text.
///
/// A byte order mark wins, then the `Content-Type` charset, then a `<meta>`
/// declaration, then UTF-8. Malformed sequences become U+FFFD rather than failing.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| charset_from_meta(body))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        ::log::debug!("Body contained malformed {} sequences", used.name());
    }
    text.into_owned()
}

/// Whether a body without a content type looks like binary data
pub fn looks_binary(body: &[u8]) -> bool {
    if Encoding::for_bom(body).is_some() {
        return false;
    }
    body.iter().take(1024).any(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_from_content_type() {
        assert_eq!(
            charset_from_content_type("text/html; charset=ISO-8859-1"),
            Some("ISO-8859-1")
        );
        assert_eq!(
            charset_from_content_type("text/html;Charset=\"utf-8\""),
            Some("utf-8")
        );
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(charset_from_content_type("text/html; charset="), None);
    }

    #[test]
    fn test_media_type() {
        assert_eq!(media_type("Text/HTML; charset=utf-8"), "text/html");
        assert_eq!(media_type("image/png"), "image/png");
    }

    #[test]
    fn test_decode_latin1() {
        let body = b"<p>caf\xe9</p>";
        let text = decode_body(body, Some("text/html; charset=iso-8859-1"));
        assert_eq!(text, "<p>café</p>");
    }

    #[test]
    fn test_decode_defaults_to_utf8() {
        let text = decode_body("<p>naïve</p>".as_bytes(), None);
        assert_eq!(text, "<p>naïve</p>");
    }

    #[test]
    fn test_unknown_charset_falls_back() {
        let text = decode_body(b"<p>plain</p>", Some("text/html; charset=x-bogus"));
        assert_eq!(text, "<p>plain</p>");
    }

    #[test]
    fn test_charset_from_meta() {
        assert_eq!(
            charset_from_meta(b"<head><meta charset=\"iso-8859-1\"><title>x</title>"),
            Encoding::for_label(b"iso-8859-1")
        );
        assert_eq!(
            charset_from_meta(
                b"<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=Shift_JIS\">"
            ),
            Some(encoding_rs::SHIFT_JIS)
        );
        assert_eq!(charset_from_meta(b"<meta charset=koi8-r/>"), Some(encoding_rs::KOI8_R));
        assert_eq!(charset_from_meta(b"<meta charset='utf-16le'>"), Some(UTF_8));
        assert_eq!(charset_from_meta(b"<meta name=\"viewport\"><p>charset=big5</p>"), None);
        assert_eq!(charset_from_meta(b"<meta charset=\"x-bogus\">"), None);
    }

    #[test]
    fn test_meta_charset_beyond_prescan_is_ignored() {
        let mut body = vec![b' '; META_PRESCAN_BYTES];
        body.extend_from_slice(b"<meta charset=\"iso-8859-1\">");
        assert_eq!(charset_from_meta(&body), None);
    }

    #[test]
    fn test_decode_uses_meta_charset_without_header_charset() {
        let body = b"<meta charset=\"iso-8859-1\"><p>caf\xe9</p>";
        assert_eq!(decode_body(body, Some("text/html")), "<meta charset=\"iso-8859-1\"><p>café</p>");
        assert_eq!(decode_body(body, None), "<meta charset=\"iso-8859-1\"><p>café</p>");
    }

    #[test]
    fn test_header_charset_overrides_meta() {
        let body = "<meta charset=\"iso-8859-1\"><p>naïve</p>".as_bytes();
        assert_eq!(
            decode_body(body, Some("text/html; charset=utf-8")),
            "<meta charset=\"iso-8859-1\"><p>naïve</p>"
        );
    }

    #[test]
    fn test_looks_binary() {
        assert!(looks_binary(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"));
        assert!(!looks_binary(b"<html><body>hi</body></html>"));
        assert!(!looks_binary(b"\xff\xfe<\0h\0"));
    }
}
