//! Markdown → LaTeX scenarios
//!
//! Each test feeds Markdown through comrak and the LaTeX renderer and compares the
//! complete document. The expectations are adapted from the marko LaTeX renderer's
//! test suite, with one change: sibling blocks are always separated by one blank
//! line, so headings and list openers get a blank line that marko did not print.

use insta::assert_snapshot;
use mdtex_babel::FormatRegistry;

fn to_latex(markdown: &str) -> String {
    FormatRegistry::default()
        .convert(markdown, "markdown", "latex")
        .expect("markdown should render")
}

/// Wrap a body the way the document wrapper does, for documents without packages.
fn document(body: &str) -> String {
    format!("\\documentclass{{article}}\n\\begin{{document}}\n{body}\n\\end{{document}}\n")
}

#[test]
fn test_render_paragraph() {
    let markdown = "This is a paragraph.\n\nThis is\n another paragraph.\n\nThis has line    \n   break!\n";
    assert_eq!(
        to_latex(markdown),
        document(
            "This is a paragraph.\n\n\
             This is\nanother paragraph.\n\n\
             This has line\\\\\nbreak!"
        )
    );
}

#[test]
fn test_render_special_characters() {
    let markdown = "\\# This paragraph contains $pecial_characters like: {%, ^, ~ & \\\\}\n";
    let latex = to_latex(markdown);
    assert_eq!(
        latex,
        document(
            "\\# This paragraph contains \\$pecial\\_characters like: \\{\\%, \\^{}, \\~{} \\& \\textbackslash{}\\}"
        )
    );
}

#[test]
fn test_render_format() {
    let latex = to_latex("This `test case` *tests* **basic** *text **formatting***.\n");
    let body = latex
        .lines()
        .nth(2)
        .expect("body line after the preamble");
    assert_snapshot!(body, @r"This \texttt{test case} \textit{tests} \textbf{basic} \textit{text \textbf{formatting}}.");
}

#[test]
fn test_render_unordered_list() {
    let markdown = "Items:\n* Item 1\n* Item 2\n* Item 3\n";
    assert_eq!(
        to_latex(markdown),
        document(
            "Items:\n\n\
             \\begin{itemize}\n\
             \\item Item 1\n\
             \\item Item 2\n\
             \\item Item 3\n\
             \\end{itemize}"
        )
    );
}

#[test]
fn test_render_ordered_list() {
    let markdown = "Items:\n1. Item 1\n1. Item 2\n1. Item 3\n";
    assert_eq!(
        to_latex(markdown),
        document(
            "Items:\n\n\
             \\begin{enumerate}\n\
             \\item Item 1\n\
             \\item Item 2\n\
             \\item Item 3\n\
             \\end{enumerate}"
        )
    );
}

#[test]
fn test_render_nested_list() {
    let markdown = "- outer\n  1. inner\n- last\n";
    assert_eq!(
        to_latex(markdown),
        document(
            "\\begin{itemize}\n\
             \\item outer\n\n\
             \\begin{enumerate}\n\
             \\item inner\n\
             \\end{enumerate}\n\
             \\item last\n\
             \\end{itemize}"
        )
    );
}

#[test]
fn test_render_headers() {
    let markdown = "\
# Header 1
Paragraph 1.

## Header 2
Paragraph 2.

### Header 3
Paragraph 3.

#### Header 4
Paragraph 4.

##### Header 5
Paragraph 5.

###### Header 6
Paragraph 6.

Alternate Header 1
==================
Alternate 1

Alternate Header 2
------------------
Alternate 2
";
    assert_eq!(
        to_latex(markdown),
        document(
            "\\part*{Header 1}\n\nParagraph 1.\n\n\
             \\section*{Header 2}\n\nParagraph 2.\n\n\
             \\subsection*{Header 3}\n\nParagraph 3.\n\n\
             \\subsubsection*{Header 4}\n\nParagraph 4.\n\n\
             \\paragraph*{Header 5}\n\nParagraph 5.\n\n\
             \\subparagraph*{Header 6}\n\nParagraph 6.\n\n\
             \\part*{Alternate Header 1}\n\nAlternate 1\n\n\
             \\section*{Alternate Header 2}\n\nAlternate 2"
        )
    );
}

#[test]
fn test_render_code() {
    let markdown = "\
The following is a code block:

    Text enclosed inside \\texttt{verbatim} environment
    is printed directly and all \\LaTeX{} commands are ignored.

While the following is a fenced code block:

```python
def do_while():
    while(not_finished):
        print(\"do something ...\")
    print(\"finished!\")
```
";
    let expected = "\
\\documentclass{article}
\\usepackage{listings}
\\begin{document}
The following is a code block:

\\begin{verbatim}
Text enclosed inside \\texttt{verbatim} environment
is printed directly and all \\LaTeX{} commands are ignored.
\\end{verbatim}

While the following is a fenced code block:

\\begin{lstlisting}[language=python]
def do_while():
    while(not_finished):
        print(\"do something ...\")
    print(\"finished!\")
\\end{lstlisting}
\\end{document}
";
    assert_eq!(to_latex(markdown), expected);
}

#[test]
fn test_render_links() {
    let markdown = "\
[marko](https://github.com/frostming/marko \"marko on GitHub\"): A markdown parser with high extensibility.

Documentation: <https://marko-py.readthedocs.io/en/latest/>.
";
    assert_eq!(
        to_latex(markdown),
        document(
            "\\href{https://github.com/frostming/marko}{marko}: A markdown parser with high extensibility.\n\n\
             Documentation: \\url{https://marko-py.readthedocs.io/en/latest/}."
        )
    );
}

#[test]
fn test_render_quote() {
    let markdown = "They used to say:\n\n> Take care of\n> important quotes.\n";
    assert_eq!(
        to_latex(markdown),
        "\\documentclass{article}\n\
         \\usepackage{csquotes}\n\
         \\begin{document}\n\
         They used to say:\n\n\
         \\begin{displayquote}\n\
         Take care of\nimportant quotes.\n\
         \\end{displayquote}\n\
         \\end{document}\n"
    );
}

#[test]
fn test_render_thematic_break() {
    let markdown = "\
This paragraph is above the horizontal line.

* * * 

While this paragraph is below the horizontal line.
";
    assert_eq!(
        to_latex(markdown),
        document(
            "This paragraph is above the horizontal line.\n\n\
             \\noindent\\rule{\\textwidth}{1pt}\n\n\
             While this paragraph is below the horizontal line."
        )
    );
}

#[test]
fn test_render_image() {
    let markdown = "## A simple image\n![This is a sample for an image](sample.jpg \"Title is ignored!\")\n";
    assert_eq!(
        to_latex(markdown),
        "\\documentclass{article}\n\
         \\usepackage{graphicx}\n\
         \\begin{document}\n\
         \\section*{A simple image}\n\n\
         \\includegraphics{sample.jpg}\n\
         \\end{document}\n"
    );
}

#[test]
fn test_all_packages_in_fixed_order() {
    let markdown = "> ![x](a.png)\n\n```\ncode\n```\n";
    let latex = to_latex(markdown);
    assert!(latex.starts_with(
        "\\documentclass{article}\n\
         \\usepackage{listings}\n\
         \\usepackage{graphicx}\n\
         \\usepackage{csquotes}\n\
         \\begin{document}\n"
    ));
}

#[test]
fn test_fenced_code_without_language_has_no_options() {
    let latex = to_latex("```\n$x_1$\n```\n");
    assert!(latex.contains("\\begin{lstlisting}\n$x_1$\n\\end{lstlisting}"));
}

#[test]
fn test_raw_html_is_skipped() {
    assert_eq!(
        to_latex("<div>block</div>\n\nkept <span>inline</span> text\n"),
        document("kept inline text")
    );
}

#[test]
fn test_empty_markdown_gives_empty_body() {
    assert_eq!(
        to_latex(""),
        "\\documentclass{article}\n\\begin{document}\n\n\\end{document}\n"
    );
}

#[test]
fn test_loose_item_keeps_paragraph_break() {
    assert_eq!(
        to_latex("- first para\n\n  second para\n"),
        document(
            "\\begin{itemize}\n\
             \\item first para\n\n\
             second para\n\
             \\end{itemize}"
        )
    );
}

#[test]
fn test_paragraphs_emptied_by_html_leave_no_gap() {
    assert_eq!(
        to_latex("A\n\n<b></b>\n\nB\n\n<i></i>\n"),
        document("A\n\nB")
    );
}
