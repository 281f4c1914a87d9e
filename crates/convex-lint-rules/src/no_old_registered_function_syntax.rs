//! Rule to require object syntax for registered Convex functions.
//!
//! # Rationale
//!
//! Passing the handler directly (`query(async (ctx) => ...)`) is the old
//! registration form. The object form (`query({ args, handler })`) leaves
//! room for argument validators and other options.
//!
//! # Detected Patterns
//!
//! - `query(async (ctx, args) => { ... })`
//! - `internalMutation(function (ctx) { ... })`
//! - `action(opts)(async (ctx) => { ... })`
//!
//! # Allowed Patterns
//!
//! - `query({ handler: async (ctx) => { ... } })`
//! - `query(handler)`: identifiers are not resolved

use convex_lint_core::{CallExpression, Node, Report, Rule, Severity};

use crate::classifier::is_registration_call;

/// Rule code for no-old-registered-function-syntax.
pub const CODE: &str = "CVX001";

/// Rule name for no-old-registered-function-syntax.
pub const NAME: &str = "no-old-registered-function-syntax";

const MESSAGE: &str =
    "Use object syntax with 'handler' property instead of passing a function directly";

/// Flags registrations whose first argument is a function literal.
#[derive(Debug, Clone)]
pub struct NoOldRegisteredFunctionSyntax {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoOldRegisteredFunctionSyntax {
    fn default() -> Self {
        Self::new()
    }
}

impl NoOldRegisteredFunctionSyntax {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoOldRegisteredFunctionSyntax {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Prefer object syntax for registered Convex functions"
    }

    fn fixable(&self) -> bool {
        true
    }

    fn help(&self) -> Option<&'static str> {
        Some("wrap it as `{ args: { ... }, handler: <function> }`")
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_call(&self, node: &Node, call: &CallExpression, sink: &mut dyn Report) {
        if !is_registration_call(node) {
            return;
        }

        let Some(first) = call.arguments.first() else {
            return;
        };

        if first.is_function() {
            sink.report(first, MESSAGE);
        }
    }
}
