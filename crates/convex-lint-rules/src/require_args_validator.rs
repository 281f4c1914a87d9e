//! Rule to require an `args` validator on registered Convex functions.
//!
//! # Rationale
//!
//! Without `args`, a public function accepts whatever the client sends.
//!
//! # Detected Patterns
//!
//! - `mutation({ handler: async (ctx, args) => { ... } })`
//!
//! # Allowed Patterns
//!
//! - `mutation({ args: { id: v.id("users") }, handler })`
//! - `mutation({ returns: v.null() })`: no handler, so not a full definition
//! - `mutation({ ...shared, handler })`: spread members are not expanded
//!
//! Only direct identifier-keyed properties are considered. Computed and
//! string-literal keys are invisible to this rule.

use convex_lint_core::{CallExpression, Node, Report, Rule, Severity};

use crate::classifier::is_registration_call;

/// Rule code for require-args-validator.
pub const CODE: &str = "CVX002";

/// Rule name for require-args-validator.
pub const NAME: &str = "require-args-validator";

const MESSAGE: &str = "Convex functions should have an 'args' validator";

/// Flags object-syntax registrations that define `handler` but not `args`.
#[derive(Debug, Clone)]
pub struct RequireArgsValidator {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for RequireArgsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequireArgsValidator {
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

impl Rule for RequireArgsValidator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Require argument validators for Convex functions"
    }

    fn fixable(&self) -> bool {
        true
    }

    fn help(&self) -> Option<&'static str> {
        Some("add `args: {}` (or the validators the handler expects)")
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_call(&self, node: &Node, call: &CallExpression, sink: &mut dyn Report) {
        if !is_registration_call(node) {
            return;
        }

        let Some(config) = call.arguments.first() else {
            return;
        };
        let Some(object) = config.as_object() else {
            return;
        };

        if object.has_property("handler") && !object.has_property("args") {
            sink.report(config, MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{registration, run};
    use convex_lint_core::{ObjectMember, Property, PropertyKey, PropertyKind, Span};

    fn config(members: Vec<ObjectMember>) -> Node {
        Node::object(members).with_span(Span::new(9, 30, 1, 10))
    }

    #[test]
    fn handler_without_args_reported_at_object() {
        let node = registration(
            "mutation",
            vec![config(vec![Property::init("handler", Node::identifier("fn")).into()])],
        );

        let reports = run(&RequireArgsValidator::new(), &node);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, Span::new(9, 30, 1, 10));
        assert_eq!(reports[0].1, MESSAGE);
    }

    #[test]
    fn handler_with_args_not_reported() {
        let node = registration(
            "mutation",
            vec![config(vec![
                Property::init("args", Node::object(vec![])).into(),
                Property::init("handler", Node::identifier("fn")).into(),
            ])],
        );
        assert!(run(&RequireArgsValidator::new(), &node).is_empty());
    }

    #[test]
    fn args_without_handler_not_reported() {
        let node = registration(
            "mutation",
            vec![config(vec![Property::init("args", Node::object(vec![])).into()])],
        );
        assert!(run(&RequireArgsValidator::new(), &node).is_empty());
    }

    #[test]
    fn shorthand_properties_count() {
        let rule = RequireArgsValidator::new();

        let handler_only = registration(
            "query",
            vec![config(vec![Property::shorthand("handler").into()])],
        );
        assert_eq!(run(&rule, &handler_only).len(), 1);

        let both = registration(
            "query",
            vec![config(vec![
                Property::shorthand("args").into(),
                Property::shorthand("handler").into(),
            ])],
        );
        assert!(run(&rule, &both).is_empty());
    }

    #[test]
    fn method_handler_counts() {
        let method = Property {
            key: PropertyKey::Identifier("handler".into()),
            value: Node::function(None, vec![]),
            kind: PropertyKind::Method,
            span: Span::default(),
        };
        let node = registration("internalQuery", vec![config(vec![method.into()])]);
        assert_eq!(run(&RequireArgsValidator::new(), &node).len(), 1);
    }

    #[test]
    fn spread_and_computed_keys_are_invisible() {
        let rule = RequireArgsValidator::new();

        // { ...withArgs, handler }: args hidden in the spread still counts as missing
        let spread = registration(
            "mutation",
            vec![config(vec![
                ObjectMember::Spread(Node::identifier("withArgs")),
                Property::shorthand("handler").into(),
            ])],
        );
        assert_eq!(run(&rule, &spread).len(), 1);

        // { [key]: fn }: a computed handler is not seen at all
        let computed = registration(
            "mutation",
            vec![config(vec![Property::computed(
                Node::identifier("key"),
                Node::identifier("fn"),
            )
            .into()])],
        );
        assert!(run(&rule, &computed).is_empty());

        // { "args": {}, handler }: literal keys are not identifiers
        let literal = registration(
            "mutation",
            vec![config(vec![
                Property {
                    key: PropertyKey::Literal("args".into()),
                    value: Node::object(vec![]),
                    kind: PropertyKind::Init,
                    span: Span::default(),
                }
                .into(),
                Property::shorthand("handler").into(),
            ])],
        );
        assert_eq!(run(&rule, &literal).len(), 1);
    }

    #[test]
    fn non_object_first_argument_not_reported() {
        let rule = RequireArgsValidator::new();
        for arg in [Node::arrow(vec![]), Node::identifier("definition")] {
            assert!(run(&rule, &registration("action", vec![arg])).is_empty());
        }
        assert!(run(&rule, &registration("action", vec![])).is_empty());
    }

    #[test]
    fn unrelated_call_not_reported() {
        let node = registration(
            "defineTable",
            vec![config(vec![Property::shorthand("handler").into()])],
        );
        assert!(run(&RequireArgsValidator::new(), &node).is_empty());
    }
}
