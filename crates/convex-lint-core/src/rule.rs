//! Rule trait for defining lint rules.

use serde::{Deserialize, Serialize};

use crate::ast::{CallExpression, Node, Program};
use crate::context::{FileContext, Report, ViolationSink};
use crate::types::{Severity, Violation};
use crate::visit::{walk_program, Visit};

/// What kind of problem a rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Code that is wrong or will break with the framework's current API.
    Problem,
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Problem => write!(f, "problem"),
        }
    }
}

/// A per-file lint rule over the syntax model.
///
/// Rules hook call expressions through [`Rule::check_call`] and report
/// through the sink they are handed. They hold no per-file state, so
/// running a rule twice over the same tree yields the same reports.
///
/// # Example
///
/// ```ignore
/// use convex_lint_core::{CallExpression, Node, Report, Rule};
///
/// pub struct NoEval;
///
/// impl Rule for NoEval {
///     fn name(&self) -> &'static str { "no-eval" }
///     fn code(&self) -> &'static str { "X001" }
///
///     fn check_call(&self, node: &Node, call: &CallExpression, sink: &mut dyn Report) {
///         if call.callee.as_identifier() == Some("eval") {
///             sink.report(node, "eval is forbidden");
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "explicit-table-ids").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CVX003").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the category tag of this rule.
    fn category(&self) -> RuleCategory {
        RuleCategory::Problem
    }

    /// Whether the rule declares an autofix.
    ///
    /// This is metadata only: no rewriting is performed.
    fn fixable(&self) -> bool {
        false
    }

    /// Optional remediation hint attached to every violation.
    fn help(&self) -> Option<&'static str> {
        None
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Call-expression hook.
    ///
    /// `node` is the call node itself, `call` its payload.
    fn check_call(&self, node: &Node, call: &CallExpression, sink: &mut dyn Report);

    /// Checks a single file and returns any violations found.
    fn check(&self, ctx: &FileContext, program: &Program) -> Vec<Violation> {
        let mut sink = ViolationSink::new(ctx, self.code(), self.name(), self.default_severity())
            .with_help(self.help());
        let mut visitor = RuleVisitor {
            rule: self,
            sink: &mut sink,
        };
        walk_program(&mut visitor, program);
        sink.into_violations()
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Binds a rule to a reporting sink for one traversal.
struct RuleVisitor<'a, R: ?Sized> {
    rule: &'a R,
    sink: &'a mut dyn Report,
}

impl<R: Rule + ?Sized> Visit for RuleVisitor<'_, R> {
    fn visit_call(&mut self, node: &Node, call: &CallExpression) {
        self.rule.check_call(node, call, self.sink);
    }
}
