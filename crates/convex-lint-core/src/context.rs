//! Context and reporting types for rule execution.

use std::path::{Path, PathBuf};

use crate::ast::Node;
use crate::types::{Location, Severity, Suggestion, Violation};

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Location of `node` relative to the project root.
    #[must_use]
    pub fn location(&self, node: &Node) -> Location {
        Location::from_span(self.relative_path.clone(), node.span)
    }
}

/// Reporting capability handed to rules.
///
/// Reporting never fails and does not affect traversal.
pub trait Report {
    /// Reports a violation anchored at `node`.
    fn report(&mut self, node: &Node, message: &str);
}

/// [`Report`] implementation that collects [`Violation`]s for one rule and one file.
pub struct ViolationSink<'a> {
    ctx: &'a FileContext<'a>,
    code: &'static str,
    rule: &'static str,
    severity: Severity,
    help: Option<&'static str>,
    violations: Vec<Violation>,
}

impl<'a> ViolationSink<'a> {
    /// Creates a sink that stamps every report with the given rule identity.
    #[must_use]
    pub fn new(
        ctx: &'a FileContext<'a>,
        code: &'static str,
        rule: &'static str,
        severity: Severity,
    ) -> Self {
        Self {
            ctx,
            code,
            rule,
            severity,
            help: None,
            violations: Vec::new(),
        }
    }

    /// Attaches `help` as a suggestion to every reported violation.
    #[must_use]
    pub fn with_help(mut self, help: Option<&'static str>) -> Self {
        self.help = help;
        self
    }

    /// Consumes the sink, returning collected violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl Report for ViolationSink<'_> {
    fn report(&mut self, node: &Node, message: &str) {
        let mut violation = Violation::new(
            self.code,
            self.rule,
            self.severity,
            self.ctx.location(node),
            message,
        );
        if let Some(help) = self.help {
            violation = violation.with_suggestion(Suggestion::new(help));
        }
        self.violations.push(violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;

    #[test]
    fn relative_path_strips_root() {
        let ctx = FileContext::new(
            Path::new("/project/convex/users.ts"),
            "",
            Path::new("/project"),
        );
        assert_eq!(ctx.relative_path, PathBuf::from("convex/users.ts"));
    }

    #[test]
    fn relative_path_falls_back_to_full_path() {
        let ctx = FileContext::new(Path::new("/elsewhere/a.ts"), "", Path::new("/project"));
        assert_eq!(ctx.relative_path, PathBuf::from("/elsewhere/a.ts"));
    }

    #[test]
    fn sink_stamps_rule_identity_and_help() {
        let ctx = FileContext::new(Path::new("a.ts"), "", Path::new("."));
        let mut sink = ViolationSink::new(&ctx, "CVX001", "some-rule", Severity::Warning)
            .with_help(Some("do the thing"));

        let node = Node::identifier("x").with_span(Span::new(3, 4, 2, 1));
        sink.report(&node, "bad");

        let violations = sink.into_violations();
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.code, "CVX001");
        assert_eq!(v.rule, "some-rule");
        assert_eq!(v.severity, Severity::Warning);
        assert_eq!((v.location.line, v.location.offset), (2, 3));
        assert_eq!(
            v.suggestion.as_ref().map(|s| s.message.as_str()),
            Some("do the thing")
        );
    }
}
