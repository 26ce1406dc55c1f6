use std::io::Read;

use roxmltree::{Children, Node, ParsingOptions};

use crate::attribute::AttributeList;
use crate::element::Element;
use crate::error::ParseError;

/// Parses YUML source into its root [`Element`].
///
/// The tokenized document is walked in document order with an explicit stack
/// of open elements, each paired with the iterator over its remaining
/// children. A child element is pushed, character data is appended to the
/// top, and an exhausted top is popped into its parent. Comments and
/// processing instructions are dropped.
pub fn parse_str(src: &str) -> Result<Element, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(src, options)?;
    let root = doc.root_element();

    let mut stack: Vec<(Element, Children<'_, '_>)> = vec![(open_element(root), root.children())];
    while let Some((top, children)) = stack.last_mut() {
        match children.next() {
            Some(node) if node.is_element() => stack.push((open_element(node), node.children())),
            Some(node) => {
                if let Some(text) = node.text().filter(|_| node.is_text()) {
                    top.content.push_str(text);
                }
            }
            None => {
                let Some((done, _)) = stack.pop() else { break };
                match stack.last_mut() {
                    Some((parent, _)) => parent.children.push(done),
                    None => return Ok(done),
                }
            }
        }
    }

    Err(ParseError::IncompleteDocument("no root element".to_string()))
}

/// Reads the whole stream, then parses it as UTF-8 YUML.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Element, ParseError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let src = String::from_utf8(bytes)?;
    parse_str(&src)
}

fn open_element(node: Node<'_, '_>) -> Element {
    let tag = node.tag_name();
    let attributes: AttributeList = node
        .attributes()
        .map(|a| (a.name(), a.value()))
        .collect();

    Element {
        namespace: tag.namespace().map(str::to_string),
        name: tag.name().to_string(),
        attributes,
        children: Vec::new(),
        content: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const NS: &str = "https://yuml.example/schema/components/1.0";

    const SIMPLE: &str = r#"
<Page xmlns="https://yuml.example/schema/components/1.0">
    <Canvas X="10" Y="10" Width="100" Height="100">
        <Image Path="images/hello.png" />
    </Canvas>
</Page>
"#;

    /// Counts start tags with a plain text scan, independent of the parser.
    fn count_start_tags(src: &str) -> usize {
        let bytes = src.as_bytes();
        bytes
            .windows(2)
            .filter(|w| w[0] == b'<' && w[1].is_ascii_alphabetic())
            .count()
    }

    fn ok(src: &str) -> Element {
        parse_str(src).unwrap()
    }

    #[test]
    fn simple_tree() {
        let expected = format!(
            "{NS}:Page ()\n  ˪ {NS}:Canvas (X=10, Y=10, Width=100, Height=100)\n    ˪ {NS}:Image (Path=images/hello.png)"
        );
        assert_eq!(ok(SIMPLE).to_string(), expected);
    }

    #[test]
    fn namespace_is_inherited() {
        let root = ok(SIMPLE);
        assert_eq!(root.namespace.as_deref(), Some(NS));
        assert_eq!(root.children[0].children[0].namespace.as_deref(), Some(NS));
    }

    #[test]
    fn shape_matches_independent_tag_count() {
        let docs = [
            SIMPLE,
            "<a/>",
            "<a><b/><c><d/><e/></c><f>text</f></a>",
            "<r><x a='1'/><x a='2'/><x a='3'><y/></x></r>",
        ];
        for src in docs {
            assert_eq!(ok(src).count(), count_start_tags(src), "{src}");
        }
    }

    #[test]
    fn children_keep_document_order() {
        let root = ok("<r><a/><b/><c/></r>");
        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn self_closing_has_no_children() {
        let root = ok("<Image Path='x.png'/>");
        assert!(root.children.is_empty());
        assert_eq!(root.attributes.get_or("Path", "").as_str(), "x.png");
    }

    #[test]
    fn no_namespace_is_none() {
        assert_eq!(ok("<Page/>").namespace, None);
    }

    #[test]
    fn prefixed_namespace() {
        let root = ok(r#"<y:Page xmlns:y="urn:custom"><y:Label/></y:Page>"#);
        assert_eq!(root.namespace.as_deref(), Some("urn:custom"));
        assert_eq!(root.children[0].name, "Label");
    }

    #[test]
    fn xmlns_declarations_are_not_attributes() {
        assert!(ok(SIMPLE).attributes.is_empty());
    }

    #[test]
    fn character_data_accumulates() {
        let root = ok("<Label>Hello <!-- skipped -->world</Label>");
        assert_eq!(root.content, "Hello world");
        assert!(root.children.is_empty());
    }

    #[test]
    fn comments_and_instructions_are_discarded() {
        let root = ok("<?xml version='1.0'?><!-- c --><r><?pi data?><a/><!-- d --></r>");
        assert_eq!(root.count(), 2);
    }

    #[test]
    fn entities_are_decoded() {
        let root = ok("<Label Text='a &amp; b'>1 &lt; 2</Label>");
        assert_eq!(root.attributes.get_or("Text", "").as_str(), "a & b");
        assert_eq!(root.content, "1 < 2");
    }

    #[test]
    fn empty_input_is_incomplete() {
        assert!(matches!(parse_str(""), Err(ParseError::IncompleteDocument(_))));
        assert!(matches!(parse_str("   \n"), Err(ParseError::IncompleteDocument(_))));
    }

    #[test]
    fn unclosed_tag_is_incomplete() {
        let err = parse_str("<Page><Canvas></Canvas>").unwrap_err();
        assert!(matches!(err, ParseError::IncompleteDocument(_)), "{err:?}");
    }

    #[test]
    fn mismatched_tags_are_syntax_errors() {
        let err = parse_str("<Page><Canvas></Page></Canvas>").unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_)), "{err:?}");
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'<', b'a', 0xff, b'/', b'>'];
        assert!(matches!(parse_reader(bytes), Err(ParseError::Utf8(_))));
    }

    #[test]
    fn deep_nesting_keeps_content_with_its_element() {
        let root = ok("<a>x<b>y<c>z</c>y</b>x<d/></a>");
        assert_eq!(root.content, "xx");
        assert_eq!(root.children[0].content, "yy");
        assert_eq!(root.children[0].children[0].content, "z");
        assert_eq!(root.children[1].name, "d");
    }

    #[test]
    fn cdata_counts_as_character_data() {
        assert_eq!(ok("<Label><![CDATA[a < b]]></Label>").content, "a < b");
    }

    #[test]
    fn reader_parses_stream() {
        let root = parse_reader(SIMPLE.as_bytes()).unwrap();
        assert_eq!(root.count(), 3);
    }
}
