//! Rule to require explicit table names in `ctx.db` accessor calls.
//!
//! # Rationale
//!
//! `ctx.db.get`, `patch`, `replace` and `delete` now take the table name as
//! their first argument. The legacy forms infer it from the document ID.
//!
//! # Detected Patterns
//!
//! | Call | Legacy arity |
//! |------|--------------|
//! | `ctx.db.get(id)` | 1 |
//! | `ctx.db.patch(id, updates)` | 2 |
//! | `ctx.db.replace(id, doc)` | 2 |
//! | `ctx.db.delete(id)` | 1 |
//!
//! The old and new forms are told apart by argument count alone. Any other
//! arity is assumed to already carry the table name.

use convex_lint_core::{CallExpression, MemberExpression, Node, Report, Rule, Severity};

use crate::classifier::is_accessor_call;

/// Rule code for explicit-table-ids.
pub const CODE: &str = "CVX003";

/// Rule name for explicit-table-ids.
pub const NAME: &str = "explicit-table-ids";

/// Legacy arity and message per accessor method.
const LEGACY_FORMS: &[(&str, usize, &str)] = &[
    (
        "get",
        1,
        "Use explicit table name: ctx.db.get(tableName, id) instead of ctx.db.get(id)",
    ),
    (
        "patch",
        2,
        "Use explicit table name: ctx.db.patch(tableName, id, updates) instead of ctx.db.patch(id, updates)",
    ),
    (
        "replace",
        2,
        "Use explicit table name: ctx.db.replace(tableName, id, doc) instead of ctx.db.replace(id, doc)",
    ),
    (
        "delete",
        1,
        "Use explicit table name: ctx.db.delete(tableName, id) instead of ctx.db.delete(id)",
    ),
];

/// Flags `ctx.db` accessor calls using the legacy arity.
#[derive(Debug, Clone)]
pub struct ExplicitTableIds {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ExplicitTableIds {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplicitTableIds {
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

    /// Message for `method` called with `arity` arguments, if that is the legacy form.
    fn legacy_message(method: &str, arity: usize) -> Option<&'static str> {
        LEGACY_FORMS
            .iter()
            .find(|(name, legacy, _)| *name == method && *legacy == arity)
            .map(|(_, _, message)| *message)
    }
}

impl Rule for ExplicitTableIds {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Require explicit table names in database operations"
    }

    fn fixable(&self) -> bool {
        true
    }

    fn help(&self) -> Option<&'static str> {
        Some("pass the table name as the first argument")
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_call(&self, node: &Node, call: &CallExpression, sink: &mut dyn Report) {
        if !is_accessor_call(&call.callee) {
            return;
        }

        let Some(method) = call
            .callee
            .as_member()
            .and_then(MemberExpression::property_name)
        else {
            return;
        };

        if let Some(message) = Self::legacy_message(method, call.arguments.len()) {
            sink.report(node, message);
        }
    }
}
