//! TypeScript and JavaScript frontend using Tree-sitter.

use std::path::Path;

use convex_lint_core::{ParseError, Program, SourceParser};
use tree_sitter::{Language, Node as TsNode, Parser};

use crate::lower::lower_program;

/// Parses `.ts`/`.js` family files with the TypeScript grammar and
/// `.tsx`/`.jsx` with the TSX grammar.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptParser {
    reject_syntax_errors: bool,
}

impl TypeScriptParser {
    /// Creates a new parser that tolerates syntax errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`ParseError::Syntax`] instead of linting a partially
    /// recovered tree.
    #[must_use]
    pub fn reject_syntax_errors(mut self, reject: bool) -> Self {
        self.reject_syntax_errors = reject;
        self
    }

    fn language_for(path: &Path) -> Language {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsx" | "jsx") => tree_sitter_typescript::LANGUAGE_TSX.into(),
            _ => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Returns the first error or missing node in the tree, if any.
    ///
    /// Walks with a cursor and only descends into subtrees that contain an
    /// error.
    fn first_error(root: TsNode<'_>) -> Option<TsNode<'_>> {
        if !root.has_error() {
            return None;
        }

        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            if node.is_error() || node.is_missing() {
                return Some(node);
            }
            if node.has_error() && cursor.goto_first_child() {
                continue;
            }
            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    return None;
                }
            }
        }
    }
}

impl SourceParser for TypeScriptParser {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".ts", ".mts", ".cts", ".tsx", ".js", ".mjs", ".cjs", ".jsx"]
    }

    fn parse(&self, path: &Path, source: &str) -> Result<Program, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&Self::language_for(path))
            .map_err(|e| ParseError::Language(e.to_string()))?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ParseError::ParseFailed)?;
        let root = tree.root_node();

        if self.reject_syntax_errors {
            if let Some(error) = Self::first_error(root) {
                let pos = error.start_position();
                return Err(ParseError::Syntax {
                    line: pos.row + 1,
                    column: pos.column + 1,
                });
            }
        }

        lower_program(root, src)
    }
}
