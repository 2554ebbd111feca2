use once_cell::sync::Lazy;
use regex::Regex;

const SYSTEM_INSTRUCTION: &str = r"You are an expert LaTeX author. Convert the user's description into LaTeX markup.

Rules:
- Use \section{}, \subsection{} and \subsubsection{} for structure
- Use $...$ for inline math and $$...$$ or \[...\] for display math
- Use \textbf{}, \textit{} and \underline{} for formatting
- Use the itemize and enumerate environments for lists
- Do NOT include \documentclass, \usepackage, \begin{document} or \end{document}
- Output only the LaTeX markup, without explanations";

/// Wraps a user description in the fixed LaTeX generation instruction.
pub fn build_prompt(description: &str) -> String {
    format!(
        "{}\n\nDescription: {}\n\nLaTeX:",
        SYSTEM_INSTRUCTION,
        description.trim()
    )
}

static OPEN_TAGGED_FENCE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\A```[A-Za-z][\w+-]*[ \t]*(?:\r?\n|\z)").unwrap()
});

static OPEN_BARE_FENCE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\A```[ \t]*(?:\r?\n|\z)").unwrap()
});

static CLOSING_FENCE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?:\r?\n|\A)```[ \t]*\z").unwrap()
});

/// Removes a leading and a trailing code fence that a model may wrap its
/// answer in.
///
/// The three passes are independent and anchored to the start and end of
/// the whole text, so fences inside the body are left alone. Fences are
/// not checked for pairing.
pub fn strip_code_fences(text: &str) -> String {
    let text = OPEN_TAGGED_FENCE.replace(text, "");
    let text = OPEN_BARE_FENCE.replace(&text, "");
    CLOSING_FENCE.replace(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_build_prompt_wraps_description() {
        let prompt = build_prompt("  the quadratic formula \n");

        assert!(prompt.starts_with("You are an expert LaTeX author."));
        assert!(prompt.contains("Description: the quadratic formula\n"));
        assert!(prompt.contains(r"Do NOT include \documentclass"));
        assert!(prompt.ends_with("LaTeX:"));
    }

    #[rstest]
    #[case::tagged("```latex\n\\section{A}\n```", "\\section{A}")]
    #[case::bare("```\n\\section{A}\n```", "\\section{A}")]
    #[case::tex_tag("```tex\nx\n```", "x")]
    #[case::no_fence("\\section{A}", "\\section{A}")]
    #[case::open_only("```latex\n\\textbf{B}", "\\textbf{B}")]
    #[case::close_only("\\textbf{B}\n```", "\\textbf{B}")]
    #[case::lone_fence("```", "")]
    fn test_strip_code_fences(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_code_fences(input), expected);
    }

    #[test]
    fn test_interior_content_is_byte_identical() {
        let body = "  indented line\n```python\nprint(1)\n```\n\ttabbed $x^2$";
        let input = format!("```latex\n{}\n```", body);

        assert_eq!(strip_code_fences(&input), body);
    }

    #[test]
    fn test_literal_fence_text_is_stripped_unpaired() {
        // A closing fence with no opener is still removed.
        assert_eq!(strip_code_fences("see below\n```"), "see below");
    }
}
