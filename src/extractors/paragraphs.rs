// src/extractors/paragraphs.rs

use crate::document::{self, Document, DocumentNodes, NodeKind};
use crate::extractors::tagger::ID_ATTRIBUTE;
use crate::review::{ParagraphRecord, ReviewSet};
use crate::utils::error::DocumentError;

/// Collects `{id, text}` for every id-carrying paragraph under `<body>`, in
/// document order. Paragraphs without an id are skipped; empty text is kept.
pub fn extract_paragraphs(doc: &Document) -> Result<ReviewSet, DocumentError> {
    let body = doc.body()?;

    let paragraphs: Vec<ParagraphRecord> = DocumentNodes::new(&body)
        .filter(|node| NodeKind::of(node) == NodeKind::Paragraph)
        .filter_map(|node| {
            let id = document::attr(&node, ID_ATTRIBUTE).filter(|id| !id.is_empty())?;
            Some(ParagraphRecord::new(id, document::text_content(&node)))
        })
        .collect();

    tracing::info!("Extracted {} tagged paragraphs", paragraphs.len());
    Ok(ReviewSet::new(paragraphs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_records_in_order() {
        let doc = Document::parse(
            r#"<body><p id="p_1">Content</p><h2>Heading</h2><p id="p_2">More   <em>content</em></p></body>"#,
        );
        let set = extract_paragraphs(&doc).unwrap();
        assert_eq!(
            set.paragraphs_to_review,
            vec![
                ParagraphRecord::new("p_1", "Content"),
                ParagraphRecord::new("p_2", "More content"),
            ]
        );
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let doc = Document::parse(
            r#"<html><body>
            <p id="p_1">Content</p>
            <p id="p_2"></p>
            <p id="p_3">More content</p>
            </body></html>"#,
        );
        let set = extract_paragraphs(&doc).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.paragraphs_to_review[1].text, "");
    }

    #[test]
    fn test_paragraphs_without_ids_are_skipped() {
        let doc = Document::parse("<html><body><p>Content without ID</p><p>More content without ID</p></body></html>");
        assert!(extract_paragraphs(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_no_body_is_an_error() {
        let doc = Document::parse(r#"<html><head><title>Test</title></head><frameset></frameset></html>"#);
        assert!(matches!(extract_paragraphs(&doc), Err(DocumentError::MissingBody)));
    }
}
