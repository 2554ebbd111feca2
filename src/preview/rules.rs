use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Construct families, in the order their rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Family {
    DocumentWrapper,
    TitleMetadata,
    Sectioning,
    InlineEmphasis,
    Break,
    List,
    BlankLines,
}

/// One pattern-to-replacement substitution over the whole text.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub family: Family,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(
        name: &'static str,
        family: Family,
        pattern: &str,
        replacement: &'static str,
    ) -> Self {
        #[allow(clippy::unwrap_used)]
        let pattern = Regex::new(pattern).unwrap();
        Self {
            name,
            family,
            pattern,
            replacement,
        }
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

// Breaks run after every brace-argument construct so that a `\\` left
// inside those constructs is not matched twice.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use Family::*;

    vec![
        Rule::new(
            "documentclass",
            DocumentWrapper,
            r"\\documentclass(?:\[[^\]]*\])?\{[^}]*\}",
            "",
        ),
        Rule::new(
            "usepackage",
            DocumentWrapper,
            r"\\usepackage(?:\[[^\]]*\])?\{[^}]*\}",
            "",
        ),
        Rule::new("begin_document", DocumentWrapper, r"\\begin\{document\}", ""),
        Rule::new("end_document", DocumentWrapper, r"\\end\{document\}", ""),
        Rule::new(
            "title",
            TitleMetadata,
            r"\\title\{([^}]*)\}",
            r#"<h1 class="latex-title">${1}</h1>"#,
        ),
        Rule::new(
            "author",
            TitleMetadata,
            r"\\author\{([^}]*)\}",
            r#"<h3 class="latex-author">${1}</h3>"#,
        ),
        Rule::new(
            "date",
            TitleMetadata,
            r"\\date\{([^}]*)\}",
            r#"<h4 class="latex-date">${1}</h4>"#,
        ),
        Rule::new("maketitle", TitleMetadata, r"\\maketitle\b", ""),
        Rule::new(
            "section",
            Sectioning,
            r"\\section\*?\{([^}]*)\}",
            r#"<h2 class="latex-section">${1}</h2>"#,
        ),
        Rule::new(
            "subsection",
            Sectioning,
            r"\\subsection\*?\{([^}]*)\}",
            r#"<h3 class="latex-subsection">${1}</h3>"#,
        ),
        Rule::new(
            "subsubsection",
            Sectioning,
            r"\\subsubsection\*?\{([^}]*)\}",
            r#"<h4 class="latex-subsubsection">${1}</h4>"#,
        ),
        Rule::new(
            "textbf",
            InlineEmphasis,
            r"\\textbf\{([^}]*)\}",
            "<strong>${1}</strong>",
        ),
        Rule::new(
            "textit",
            InlineEmphasis,
            r"\\textit\{([^}]*)\}",
            "<em>${1}</em>",
        ),
        Rule::new("emph", InlineEmphasis, r"\\emph\{([^}]*)\}", "<em>${1}</em>"),
        Rule::new(
            "underline",
            InlineEmphasis,
            r"\\underline\{([^}]*)\}",
            "<u>${1}</u>",
        ),
        Rule::new("newline", Break, r"\\newline\b", "<br>"),
        Rule::new("linebreak", Break, r"\\linebreak\b", "<br>"),
        Rule::new("par", Break, r"\\par\b", "<br><br>"),
        Rule::new("line_end_break", Break, r"(?m)\\\\[ \t]*\r?$", "<br>"),
        Rule::new(
            "begin_itemize",
            List,
            r"\\begin\{itemize\}",
            r#"<ul style="list-style-type: disc;">"#,
        ),
        Rule::new("end_itemize", List, r"\\end\{itemize\}", "</ul>"),
        Rule::new(
            "begin_enumerate",
            List,
            r"\\begin\{enumerate\}",
            r#"<ol style="list-style-type: decimal;">"#,
        ),
        Rule::new("end_enumerate", List, r"\\end\{enumerate\}", "</ol>"),
        Rule::new("item", List, r"\\item\b", "<li>"),
        Rule::new("blank_lines", BlankLines, r"\n\s*\n", "<br><br>"),
    ]
});

/// All rules in application order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

pub fn rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.name == name)
}
