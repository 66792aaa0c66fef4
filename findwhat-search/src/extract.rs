//! Page metadata extraction — title and a short description.
//!
//! Pure and deterministic: same HTML in, same metadata out, no IO. The
//! description is built from the first two paragraph elements only; this is
//! a preview, not a readability pass, so no boilerplate stripping happens.

use crate::error::{Result, SearchError};
use crate::types::{PageMetadata, NO_DESCRIPTION, NO_TITLE};
use scraper::{Html, Selector};

/// Maximum characters kept from the combined paragraph text before the
/// ellipsis suffix is appended.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// Extract title and description metadata from raw HTML.
///
/// The title is the text of the first `<title>` element, kept literally —
/// a present-but-empty element yields an empty title, while a missing
/// element yields [`NO_TITLE`]. The distinction matters downstream: an
/// empty string is what the site shipped, the placeholder means the
/// document carried no title at all.
///
/// The description concatenates the texts of the first two `<p>` elements
/// in document order, back to back with no separator, then replaces
/// newlines with spaces, trims, truncates to [`MAX_DESCRIPTION_CHARS`]
/// characters, and appends `"..."`. Pages with no paragraph text yield
/// [`NO_DESCRIPTION`].
///
/// Non-HTML input is tolerated: the parser produces an empty document and
/// both fields fall back to their placeholders.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if a CSS selector cannot be constructed.
pub fn extract_metadata(html: &str) -> Result<PageMetadata> {
    let document = Html::parse_document(html);

    let title_sel = Selector::parse("title")
        .map_err(|e| SearchError::Parse(format!("title selector did not parse: {e:?}")))?;
    let para_sel = Selector::parse("p")
        .map_err(|e| SearchError::Parse(format!("paragraph selector did not parse: {e:?}")))?;

    let title = document
        .select(&title_sel)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_else(|| NO_TITLE.to_owned());

    let paragraphs: Vec<String> = document
        .select(&para_sel)
        .take(2)
        .map(|el| el.text().collect::<String>())
        .collect();

    Ok(PageMetadata {
        title,
        description: build_description(&paragraphs),
    })
}

/// Concatenate paragraph texts into the final description string.
///
/// No separator goes between paragraphs; the truncation budget is spent
/// on source text only.
fn build_description(paragraphs: &[String]) -> String {
    let combined = paragraphs.concat();
    let flattened: String = combined
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let trimmed = flattened.trim();
    if trimmed.is_empty() {
        return NO_DESCRIPTION.to_owned();
    }

    let mut description: String = trimmed.chars().take(MAX_DESCRIPTION_CHARS).collect();
    description.push_str("...");
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_description_extracted() {
        let html = r#"<html><head><title>My Page</title></head><body>
            <p>First paragraph of the page.</p>
            <p>Second paragraph of the page.</p>
        </body></html>"#;
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.title, "My Page");
        assert_eq!(
            meta.description,
            "First paragraph of the page.Second paragraph of the page...."
        );
    }

    #[test]
    fn missing_title_uses_placeholder() {
        let html = "<html><head></head><body><p>Content.</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.title, NO_TITLE);
    }

    #[test]
    fn empty_title_element_kept_literally() {
        // A site that ships an empty <title> gets an empty title, not the
        // placeholder. Only documents with no title element at all fall back.
        let html = "<html><head><title></title></head><body><p>Text.</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.title, "");
    }

    #[test]
    fn title_whitespace_preserved() {
        let html = "<html><head><title>  Spaced Title  </title></head><body></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.title, "  Spaced Title  ");
    }

    #[test]
    fn only_first_two_paragraphs_used() {
        let html = r#"<html><body>
            <p>One.</p>
            <p>Two.</p>
            <p>Three should not appear.</p>
        </body></html>"#;
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.description, "One.Two....");
        assert!(!meta.description.contains("Three"));
    }

    #[test]
    fn paragraphs_concatenated_without_separator() {
        // The two texts run together exactly as the page shipped them; any
        // space in the description must come from the source.
        let html = "<html><body><p>alpha</p><p>beta</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.description, "alphabeta...");
    }

    #[test]
    fn paragraphs_filling_the_limit_survive_whole() {
        // Two 150-char paragraphs together hit the cap exactly; every
        // source char must make it into the description.
        let para = "a".repeat(150);
        let html = format!("<html><body><p>{para}</p><p>{para}</p></body></html>");
        let meta = extract_metadata(&html).expect("should extract");
        assert_eq!(meta.description, format!("{}...", "a".repeat(300)));
    }

    #[test]
    fn single_paragraph_is_enough() {
        let html = "<html><body><p>Only one paragraph here.</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.description, "Only one paragraph here....");
    }

    #[test]
    fn no_paragraphs_uses_placeholder() {
        let html = "<html><head><title>Bare</title></head><body><div>No paras</div></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.description, NO_DESCRIPTION);
    }

    #[test]
    fn whitespace_only_paragraphs_use_placeholder() {
        let html = "<html><body><p>   </p><p>\n\t</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.description, NO_DESCRIPTION);
    }

    #[test]
    fn newlines_replaced_with_spaces() {
        let html = "<html><body><p>line one\nline two\r\nline three</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert!(!meta.description.contains('\n'));
        assert!(!meta.description.contains('\r'));
        assert!(meta.description.starts_with("line one line two"));
    }

    #[test]
    fn long_description_truncated_with_ellipsis() {
        let body = "x".repeat(500);
        let html = format!("<html><body><p>{body}</p></body></html>");
        let meta = extract_metadata(&html).expect("should extract");
        assert_eq!(meta.description.chars().count(), MAX_DESCRIPTION_CHARS + 3);
        assert!(meta.description.ends_with("..."));
    }

    #[test]
    fn short_description_still_gets_ellipsis() {
        let html = "<html><body><p>Short paragraph</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.description, "Short paragraph...");
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let body = "é".repeat(400);
        let html = format!("<html><body><p>{body}</p></body></html>");
        let meta = extract_metadata(&html).expect("should extract");
        assert_eq!(meta.description.chars().count(), MAX_DESCRIPTION_CHARS + 3);
    }

    #[test]
    fn truncation_applies_to_combined_text() {
        // Two paragraphs of 200 chars each: the limit applies to the joined
        // text, not per paragraph.
        let para = "a".repeat(200);
        let html = format!("<html><body><p>{para}</p><p>{para}</p></body></html>");
        let meta = extract_metadata(&html).expect("should extract");
        assert_eq!(meta.description.chars().count(), MAX_DESCRIPTION_CHARS + 3);
    }

    #[test]
    fn nested_markup_in_paragraph_flattened() {
        let html = "<html><body><p>Hello <b>bold</b> and <a href=\"#\">linked</a> text</p></body></html>";
        let meta = extract_metadata(html).expect("should extract");
        assert_eq!(meta.description, "Hello bold and linked text...");
    }

    #[test]
    fn garbage_input_tolerated() {
        let meta = extract_metadata("%%% not even close to html &&&").expect("should extract");
        assert_eq!(meta.title, NO_TITLE);
        assert_eq!(meta.description, NO_DESCRIPTION);
    }

    #[test]
    fn empty_input_tolerated() {
        let meta = extract_metadata("").expect("should extract");
        assert_eq!(meta.title, NO_TITLE);
        assert_eq!(meta.description, NO_DESCRIPTION);
    }

    #[test]
    fn extraction_is_deterministic() {
        let html = "<html><head><title>Same</title></head><body><p>Same text.</p></body></html>";
        let first = extract_metadata(html).expect("should extract");
        let second = extract_metadata(html).expect("should extract");
        assert_eq!(first, second);
    }

    #[test]
    fn max_description_chars_constant() {
        assert_eq!(MAX_DESCRIPTION_CHARS, 300);
    }
}
