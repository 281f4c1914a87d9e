//! Helpers for driving a single rule over a hand-built node.

use convex_lint_core::visit::{walk_node, Visit};
use convex_lint_core::{CallExpression, Node, Report, Rule, Span};

/// Collected `(span, message)` pairs.
#[derive(Default)]
struct Reports(Vec<(Span, String)>);

impl Report for Reports {
    fn report(&mut self, node: &Node, message: &str) {
        self.0.push((node.span, message.to_string()));
    }
}

struct Driver<'a, R> {
    rule: &'a R,
    reports: Reports,
}

impl<R: Rule> Visit for Driver<'_, R> {
    fn visit_call(&mut self, node: &Node, call: &CallExpression) {
        self.rule.check_call(node, call, &mut self.reports);
    }
}

/// Runs `rule` over every call in `node`.
pub(crate) fn run<R: Rule>(rule: &R, node: &Node) -> Vec<(Span, String)> {
    let mut driver = Driver {
        rule,
        reports: Reports::default(),
    };
    walk_node(&mut driver, node);
    driver.reports.0
}

/// `name(args...)`
pub(crate) fn registration(name: &str, args: Vec<Node>) -> Node {
    Node::call(Node::identifier(name), args)
}
