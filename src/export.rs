use crate::{Error, Result};

pub const PREAMBLE: &str = "\\documentclass{article}
\\usepackage{amsmath}
\\usepackage{amssymb}
\\usepackage{amsfonts}
\\usepackage[margin=1in]{geometry}

\\begin{document}

";

pub const POSTAMBLE: &str = "

\\end{document}
";

pub const EXTENSION: &str = "tex";

/// A complete, standalone `.tex` file ready to be offered for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub content: String,
}

/// Places canonical output verbatim between the fixed preamble and postamble.
pub fn wrap_document(body: &str) -> String {
    let mut document = String::with_capacity(PREAMBLE.len() + body.len() + POSTAMBLE.len());
    document.push_str(PREAMBLE);
    document.push_str(body);
    document.push_str(POSTAMBLE);
    document
}

pub fn export(body: &str, base_name: &str) -> Result<ExportedDocument> {
    if body.trim().is_empty() {
        return Err(Error::export("Nothing to export: generate some LaTeX first"));
    }

    Ok(ExportedDocument {
        file_name: format!("{}.{}", base_name, EXTENSION),
        content: wrap_document(body),
    })
}
