// src/extractors/tagger.rs
//! Stamps every paragraph with a dense, document-ordered id.

use crate::document::{self, Document, NodeKind};
use crate::review::ParagraphId;
use crate::utils::error::DocumentError;

/// Attribute that carries the paragraph id.
pub const ID_ATTRIBUTE: &str = "id";

/// Assigns `p_1..p_n` to the `n` paragraphs under `<body>`, empty ones
/// included, overwriting any id they already had. Takes the document
/// exclusively for the duration of tagging.
///
/// Returns the number of paragraphs tagged.
pub fn tag_paragraphs(doc: &mut Document) -> Result<usize, DocumentError> {
    let body = doc.body()?;

    let mut count = 0;
    for node in document::DocumentNodes::new(&body) {
        if NodeKind::of(&node) != NodeKind::Paragraph {
            continue;
        }
        count += 1;
        let id = ParagraphId::from_ordinal(count);
        document::set_attr(&node, ID_ATTRIBUTE, id.as_str());
        tracing::trace!("Tagged paragraph {}", id);
    }

    tracing::info!("Tagged {} paragraphs", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paragraph_ids(doc: &Document) -> Vec<Option<String>> {
        doc
            .structural_sequence()
            .iter()
            .filter(|n| NodeKind::of(n) == NodeKind::Paragraph)
            .map(|n| document::attr(n, ID_ATTRIBUTE))
            .collect()
    }

    #[test]
    fn test_tags_in_document_order_including_empty() {
        let mut doc = Document::parse(
            "<body><h1>Title</h1><p>a</p><p></p><div><p>nested</p></div><h2>x</h2><p>b</p></body>",
        );
        let count = tag_paragraphs(&mut doc).unwrap();
        assert_eq!(count, 4);
        assert_eq!(
            paragraph_ids(&doc),
            vec![
                Some("p_1".to_string()),
                Some("p_2".to_string()),
                Some("p_3".to_string()),
                Some("p_4".to_string())
            ]
        );
    }

    #[test]
    fn test_existing_ids_are_replaced_and_text_untouched() {
        let mut doc = Document::parse(r#"<body><p id="intro" class="lead">Hello</p></body>"#);
        tag_paragraphs(&mut doc).unwrap();
        let p = doc.structural_sequence().remove(0);
        assert_eq!(document::attr(&p, "id").as_deref(), Some("p_1"));
        assert_eq!(document::attr(&p, "class").as_deref(), Some("lead"));
        assert_eq!(document::text_content(&p), "Hello");
    }

    #[test]
    fn test_headings_are_not_tagged() {
        let mut doc = Document::parse("<body><h2>References</h2></body>");
        assert_eq!(tag_paragraphs(&mut doc).unwrap(), 0);
        let h = doc.structural_sequence().remove(0);
        assert_eq!(document::attr(&h, "id"), None);
    }

    #[test]
    fn test_missing_body_propagates() {
        let mut doc = Document::parse("<html><frameset><frame src=\"a.html\"></frameset></html>");
        assert!(matches!(tag_paragraphs(&mut doc), Err(DocumentError::MissingBody)));
    }

    proptest! {
        #[test]
        fn prop_ids_are_dense(blocks in proptest::collection::vec(0u8..3, 0..30)) {
            let body: String = blocks
                .iter()
                .map(|b| match b {
                    0 => "<p>text</p>",
                    1 => "<p></p>",
                    _ => "<h3>Heading</h3>",
                })
                .collect();
            let expected = blocks.iter().filter(|b| **b < 2).count();

            let mut doc = Document::parse(&format!("<body>{}</body>", body));
            prop_assert_eq!(tag_paragraphs(&mut doc).unwrap(), expected);

            let ids = paragraph_ids(&doc);
            let wanted: Vec<Option<String>> = (1..=expected).map(|i| Some(format!("p_{}", i))).collect();
            prop_assert_eq!(ids, wanted);
        }
    }
}
