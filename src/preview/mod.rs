//! Best-effort HTML preview of generated LaTeX.
//!
//! This is not a parser: [`render`] runs an ordered list of regex
//! substitutions over the whole text. Anything the rules do not cover,
//! math included, passes through untouched for MathJax to pick up in the
//! browser. Running the output through [`render`] again is not meaningful.

mod rules;

pub use rules::{Family, Rule, rule, rules};

pub fn render(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }

    let mut text = markup.to_string();
    for rule in rules() {
        text = rule.apply(&text).into_owned();
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::documentclass("documentclass", r"\documentclass[12pt]{article}", "")]
    #[case::usepackage("usepackage", r"\usepackage[margin=1in]{geometry}", "")]
    #[case::begin_document("begin_document", r"\begin{document}", "")]
    #[case::end_document("end_document", r"\end{document}", "")]
    #[case::title("title", r"\title{Calculus}", r#"<h1 class="latex-title">Calculus</h1>"#)]
    #[case::author("author", r"\author{Ada}", r#"<h3 class="latex-author">Ada</h3>"#)]
    #[case::date("date", r"\date{Today}", r#"<h4 class="latex-date">Today</h4>"#)]
    #[case::maketitle("maketitle", r"\maketitle", "")]
    #[case::section("section", r"\section{Intro}", r#"<h2 class="latex-section">Intro</h2>"#)]
    #[case::starred_section("section", r"\section*{Intro}", r#"<h2 class="latex-section">Intro</h2>"#)]
    #[case::subsection(
        "subsection",
        r"\subsection{Rules}",
        r#"<h3 class="latex-subsection">Rules</h3>"#
    )]
    #[case::subsubsection(
        "subsubsection",
        r"\subsubsection{Power}",
        r#"<h4 class="latex-subsubsection">Power</h4>"#
    )]
    #[case::textbf("textbf", r"\textbf{Hi}", "<strong>Hi</strong>")]
    #[case::textit("textit", r"\textit{Hi}", "<em>Hi</em>")]
    #[case::emph("emph", r"\emph{Hi}", "<em>Hi</em>")]
    #[case::underline("underline", r"\underline{Hi}", "<u>Hi</u>")]
    #[case::newline("newline", r"a\newline b", "a<br> b")]
    #[case::linebreak("linebreak", r"a\linebreak b", "a<br> b")]
    #[case::par("par", r"a\par b", "a<br><br> b")]
    #[case::line_end_break("line_end_break", "a \\\\\nb", "a <br>\nb")]
    #[case::begin_itemize("begin_itemize", r"\begin{itemize}", r#"<ul style="list-style-type: disc;">"#)]
    #[case::end_itemize("end_itemize", r"\end{itemize}", "</ul>")]
    #[case::begin_enumerate(
        "begin_enumerate",
        r"\begin{enumerate}",
        r#"<ol style="list-style-type: decimal;">"#
    )]
    #[case::end_enumerate("end_enumerate", r"\end{enumerate}", "</ol>")]
    #[case::item("item", r"\item First", "<li> First")]
    #[case::blank_lines("blank_lines", "a\n\n  \n\nb", "a<br><br>b")]
    fn test_single_rule(#[case] name: &str, #[case] input: &str, #[case] expected: &str) {
        let rule = rule(name).unwrap();
        assert_eq!(rule.apply(input), expected);
    }

    #[test]
    fn test_families_run_in_order() {
        let families: Vec<Family> = rules().iter().map(|rule| rule.family).collect();
        let mut sorted = families.clone();
        sorted.sort();
        assert_eq!(families, sorted);
    }

    #[test]
    fn test_section_and_bold() {
        assert_eq!(
            render(r"\section{Intro}\textbf{Hi}"),
            r#"<h2 class="latex-section">Intro</h2><strong>Hi</strong>"#
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[rstest]
    #[case::prose("  Just some prose with $x^2 + y^2 = z^2$.  ")]
    #[case::unknown_commands(r"\frac{a}{b} and \sqrt{2} and \cite{knuth}")]
    #[case::display_math("$$\\int_0^1 x\\,dx = \\frac{1}{2}$$")]
    #[case::bracket_math(r"\[ e^{i\pi} + 1 = 0 \]")]
    fn test_unrecognized_text_passes_through(#[case] input: &str) {
        assert_eq!(render(input), input.trim());
    }

    #[test]
    fn test_plain_text_blank_lines_collapse() {
        assert_eq!(render("first\n\n\nsecond\n"), "first<br><br>second");
    }

    #[test]
    fn test_wrapped_document() {
        let input = "\\documentclass{article}\n\\usepackage{amsmath}\n\\begin{document}\n\\title{Notes}\n\\maketitle\nBody\n\\end{document}\n";
        let output = render(input);

        assert!(!output.contains("documentclass"));
        assert!(!output.contains("usepackage"));
        assert!(!output.contains("maketitle"));
        assert!(output.contains(r#"<h1 class="latex-title">Notes</h1>"#));
        assert!(output.contains("Body"));
    }

    #[test]
    fn test_lists() {
        let input = "\\begin{itemize}\n\\item One\n\\item Two\n\\end{itemize}\n\\begin{enumerate}\n\\item Three\n\\end{enumerate}";
        assert_eq!(
            render(input),
            "<ul style=\"list-style-type: disc;\">\n<li> One\n<li> Two\n</ul>\n<ol style=\"list-style-type: decimal;\">\n<li> Three\n</ol>"
        );
    }

    #[test]
    fn test_line_end_break_does_not_touch_inline_backslashes() {
        let input = "a \\\\ b\nc \\\\\nd";
        assert_eq!(render(input), "a \\\\ b\nc <br>\nd");
    }

    #[test]
    fn test_math_inside_sections_is_kept() {
        assert_eq!(
            render(r"\subsection{Rule $f'(x)$} See $\frac{d}{dx}$"),
            r#"<h3 class="latex-subsection">Rule $f'(x)$</h3> See $\frac{d}{dx}$"#
        );
    }

    #[test]
    fn test_paragraph_command_is_not_a_par() {
        assert_eq!(render(r"\paragraph{Note}"), r"\paragraph{Note}");
    }
}
