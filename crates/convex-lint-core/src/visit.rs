//! Depth-first traversal over the syntax model.
//!
//! Implement [`Visit`] for the hooks you care about and drive it with
//! [`walk_program`]. Nodes are visited in pre-order, so an outer call is
//! seen before the calls in its arguments.

use crate::ast::{CallExpression, Node, NodeKind, ObjectMember, Program, PropertyKey};

/// Per-kind visitation hooks.
pub trait Visit {
    /// Called for every call expression.
    fn visit_call(&mut self, node: &Node, call: &CallExpression) {
        let _ = (node, call);
    }
}

/// Walks every top-level node of `program`.
pub fn walk_program<V: Visit + ?Sized>(visitor: &mut V, program: &Program) {
    for node in &program.body {
        walk_node(visitor, node);
    }
}

/// Walks `node` and all of its descendants.
///
/// Uses an explicit work stack, so nesting depth is bounded by memory
/// rather than by the thread's stack.
pub fn walk_node<V: Visit + ?Sized>(visitor: &mut V, node: &Node) {
    let mut stack = vec![node];

    while let Some(node) = stack.pop() {
        let first_child = stack.len();
        match &node.kind {
            NodeKind::Identifier(_) => {}
            NodeKind::Call(call) => {
                visitor.visit_call(node, call);
                stack.push(&call.callee);
                stack.extend(&call.arguments);
            }
            NodeKind::Member(member) => {
                stack.push(&member.object);
                stack.push(&member.property);
            }
            NodeKind::Object(object) => {
                for member in &object.members {
                    match member {
                        ObjectMember::Property(p) => {
                            if let PropertyKey::Computed(key) = &p.key {
                                stack.push(key);
                            }
                            stack.push(&p.value);
                        }
                        ObjectMember::Spread(inner) => stack.push(inner),
                    }
                }
            }
            NodeKind::Function(function) => stack.extend(&function.body),
            NodeKind::Spread(inner) => stack.push(inner),
            NodeKind::Other(other) => stack.extend(&other.children),
        }
        // children were pushed in source order; pop them that way too
        stack[first_child..].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Property;

    #[derive(Default)]
    struct CalleeNames(Vec<String>);

    impl Visit for CalleeNames {
        fn visit_call(&mut self, _node: &Node, call: &CallExpression) {
            let name = match call.callee.as_identifier() {
                Some(name) => name.to_string(),
                None => "<expr>".to_string(),
            };
            self.0.push(name);
        }
    }

    #[test]
    fn visits_nested_calls_in_pre_order() {
        // query({ handler: () => { helper(inner()) } })
        let program = Program::new(vec![Node::other(
            "expression_statement",
            vec![Node::call(
                Node::identifier("query"),
                vec![Node::object(vec![Property::init(
                    "handler",
                    Node::arrow(vec![Node::call(
                        Node::identifier("helper"),
                        vec![Node::call(Node::identifier("inner"), vec![])],
                    )]),
                )
                .into()])],
            )],
        )]);

        let mut names = CalleeNames::default();
        walk_program(&mut names, &program);
        assert_eq!(names.0, vec!["query", "helper", "inner"]);
    }

    #[test]
    fn visits_curried_callee() {
        // action(opts)(fn)
        let program = Program::new(vec![Node::call(
            Node::call(Node::identifier("action"), vec![Node::identifier("opts")]),
            vec![Node::identifier("fn")],
        )]);

        let mut names = CalleeNames::default();
        walk_program(&mut names, &program);
        assert_eq!(names.0, vec!["<expr>", "action"]);
    }

    #[test]
    fn sibling_order_is_source_order() {
        // f(a(), b(c()), d())
        let call = |name: &str, args| Node::call(Node::identifier(name), args);
        let program = Program::new(vec![call(
            "f",
            vec![
                call("a", vec![]),
                call("b", vec![call("c", vec![])]),
                call("d", vec![]),
            ],
        )]);

        let mut names = CalleeNames::default();
        walk_program(&mut names, &program);
        assert_eq!(names.0, vec!["f", "a", "b", "c", "d"]);
    }

    #[test]
    fn deep_nesting_does_not_exhaust_the_stack() {
        let mut node = Node::call(Node::identifier("leaf"), vec![]);
        for _ in 0..100_000 {
            node = Node::other("parenthesized_expression", vec![node]);
        }

        let mut names = CalleeNames::default();
        walk_node(&mut names, &node);
        assert_eq!(names.0, vec!["leaf"]);

        // unwind iteratively so the test's own drop stays shallow
        let mut current = Some(node);
        while let Some(next) = current.take() {
            if let NodeKind::Other(mut other) = next.kind {
                current = other.children.pop();
            }
        }
    }
}
