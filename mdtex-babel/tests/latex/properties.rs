//! Renderer properties over generated trees
//!
//! Trees are generated with the shapes the Markdown adapter produces: inline runs
//! inside paragraphs and headings, list items holding paragraphs or nested lists.

use mdtex_babel::ast::{Node, NodeKind};
use mdtex_babel::formats::latex::{escape_latex, render_document};
use proptest::prelude::*;

fn inline_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z #$%&_{}~^\\\\]{1,12}".prop_map(Node::text),
        "[a-z_ ]{1,8}".prop_map(Node::code_span),
        Just(Node::hard_break()),
        Just(Node::soft_break()),
        "[a-z]{1,8}".prop_map(|name| Node::image(format!("{name}.png"), "")),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::emphasis),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::strong),
            prop::collection::vec(inner, 0..4)
                .prop_map(|children| Node::link("https://example.com/a_b", children)),
        ]
    })
}

fn inlines() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(inline_strategy(), 0..5)
}

fn block_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        inlines().prop_map(Node::paragraph),
        (1u8..=6, inlines()).prop_map(|(level, children)| Node::heading(level, children)),
        "[a-z{}\\\\ \n]{0,20}".prop_map(Node::indented_code),
        (prop::option::of("[a-z]{1,6}"), "[a-z$_ \n]{0,20}")
            .prop_map(|(language, literal)| Node::fenced_code(language.as_deref(), literal)),
        Just(Node::thematic_break()),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        let item = prop::collection::vec(inner.clone(), 0..3).prop_map(Node::list_item);
        prop_oneof![
            prop::collection::vec(inner, 0..3).prop_map(Node::block_quote),
            (any::<bool>(), prop::collection::vec(item, 0..4))
                .prop_map(|(ordered, items)| Node::list(ordered, items)),
        ]
    })
}

fn document_strategy() -> impl Strategy<Value = Node> {
    prop::collection::vec(block_strategy(), 0..6).prop_map(Node::document)
}

fn contains_kind(node: &Node, pred: &dyn Fn(&NodeKind) -> bool) -> bool {
    pred(&node.kind) || node.children.iter().any(|child| contains_kind(child, pred))
}

fn declared_packages(latex: &str) -> Vec<&str> {
    latex
        .lines()
        .take_while(|line| *line != "\\begin{document}")
        .filter_map(|line| line.strip_prefix("\\usepackage{"))
        .filter_map(|rest| rest.strip_suffix('}'))
        .collect()
}

proptest! {
    #[test]
    fn rendering_is_deterministic(doc in document_strategy()) {
        let first = render_document(&doc).expect("generated trees are well formed");
        let second = render_document(&doc).expect("generated trees are well formed");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn only_used_packages_are_declared(doc in document_strategy()) {
        let latex = render_document(&doc).expect("generated trees are well formed");

        let mut expected = Vec::new();
        if contains_kind(&doc, &|k: &NodeKind| matches!(k, NodeKind::FencedCode { .. })) {
            expected.push("listings");
        }
        if contains_kind(&doc, &|k: &NodeKind| matches!(k, NodeKind::Image { .. })) {
            expected.push("graphicx");
        }
        if contains_kind(&doc, &|k: &NodeKind| matches!(k, NodeKind::BlockQuote)) {
            expected.push("csquotes");
        }
        prop_assert_eq!(declared_packages(&latex), expected);
    }

    #[test]
    fn document_frame_is_fixed(doc in document_strategy()) {
        let latex = render_document(&doc).expect("generated trees are well formed");
        let opens_with_class = latex.starts_with("\\documentclass{article}\n");
        let closes_document = latex.ends_with("\n\\end{document}\n");
        prop_assert!(opens_with_class, "missing documentclass line");
        prop_assert!(closes_document, "missing end of document");
        prop_assert_eq!(latex.matches("\\begin{document}").count(), 1);
    }

    #[test]
    fn text_is_escaped_exactly_once(text in "[a-z #$%&_{}~^\\\\]{1,30}") {
        let doc = Node::document(vec![Node::paragraph(vec![Node::text(text.clone())])]);
        let latex = render_document(&doc).expect("paragraph renders");
        let expected = format!(
            "\\documentclass{{article}}\n\\begin{{document}}\n{}\n\\end{{document}}\n",
            escape_latex(&text)
        );
        prop_assert_eq!(latex, expected);
    }

    #[test]
    fn code_literals_pass_through_unescaped(literal in "[a-z$_#{}\\\\ ]{1,20}") {
        let doc = Node::document(vec![Node::indented_code(format!("{literal}\n"))]);
        let latex = render_document(&doc).expect("code renders");
        let expected = format!("\\begin{{verbatim}}\n{literal}\n\\end{{verbatim}}");
        prop_assert!(latex.contains(&expected));
    }
}
