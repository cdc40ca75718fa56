//! Text extraction from uploaded files.

use tracing::warn;

const PAGE_BREAK: char = '\x0C';

/// Supported upload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    PlainText,
    Pdf,
}

impl SourceKind {
    /// Determine the source kind from a Content-Type header value.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "text/plain" | "text/markdown" => Some(Self::PlainText),
            "application/pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Extract text from an upload. Returns an empty string if the payload
/// cannot be read.
pub fn extract_text(bytes: &[u8], kind: SourceKind) -> String {
    match kind {
        SourceKind::PlainText => match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(e) => {
                warn!(error = %e, "Uploaded text is not valid UTF-8");
                String::new()
            }
        },
        SourceKind::Pdf => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => join_pages(&text),
            Err(e) => {
                warn!(error = %e, "Error reading PDF");
                String::new()
            }
        },
    }
}

/// Join form-feed separated pages, one page per line block, in order.
fn join_pages(text: &str) -> String {
    text.split(PAGE_BREAK)
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .map(|page| format!("{}\n", page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_from_content_type() {
        assert_eq!(
            SourceKind::from_content_type("text/plain; charset=utf-8"),
            Some(SourceKind::PlainText)
        );
        assert_eq!(
            SourceKind::from_content_type("Application/PDF"),
            Some(SourceKind::Pdf)
        );
        assert_eq!(SourceKind::from_content_type("image/png"), None);
    }

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_text("Cells divide.".as_bytes(), SourceKind::PlainText);
        assert_eq!(text, "Cells divide.");
    }

    #[test]
    fn test_invalid_utf8_yields_empty() {
        let text = extract_text(&[0xff, 0xfe, 0xfd], SourceKind::PlainText);
        assert!(text.is_empty());
    }

    #[test]
    fn test_unreadable_pdf_yields_empty() {
        let text = extract_text(b"definitely not a pdf", SourceKind::Pdf);
        assert!(text.is_empty());
    }

    #[test]
    fn test_join_pages_preserves_order() {
        let text = join_pages("Page one.\x0C\n  Page two.  \x0C\x0C");
        assert_eq!(text, "Page one.\nPage two.\n");
    }
}
