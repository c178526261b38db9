use swatch_types::Diagnostic;

const BANNER: &str = "Generated by swatch from design token sources. Do not edit directly.";

/// The comment syntax of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    Css,
    Script,
}

impl CommentStyle {
    /// The fixed banner every generated file starts with. It carries no
    /// timestamp so that regeneration stays byte-identical.
    pub fn header(self) -> String {
        match self {
            CommentStyle::Css => format!("/* {} */\n", BANNER),
            CommentStyle::Script => format!("// {}\n", BANNER),
        }
    }
}

/// One generated file, not yet written.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Relative to the output root.
    pub path: String,
    pub contents: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Artifact {
    pub fn new(path: impl Into<String>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}
