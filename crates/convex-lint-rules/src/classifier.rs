//! Call-shape classifier for Convex registrations and database accessors.
//!
//! Both predicates are purely syntactic and total: any node shape they do
//! not recognise is simply "no match".

use convex_lint_core::{MemberExpression, Node};
use phf::phf_set;

/// Functions that register a Convex query, mutation, action or HTTP action.
pub static REGISTRATION_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "query",
    "mutation",
    "action",
    "internalQuery",
    "internalMutation",
    "internalAction",
    "httpAction",
};

/// `ctx.db` methods whose newer form takes a table name first.
pub static DB_METHODS: phf::Set<&'static str> = phf_set! {
    "get",
    "patch",
    "replace",
    "delete",
};

/// Member name of the database handle on the function context.
pub const DB_HANDLE: &str = "db";

/// Returns true if `node` registers a Convex function.
///
/// Matches `query(...)` and the curried `query(...)(...)`. The arguments of
/// the outer factory call are not inspected.
#[must_use]
pub fn is_registration_call(node: &Node) -> bool {
    let Some(call) = node.as_call() else {
        return false;
    };

    if let Some(name) = call.callee.as_identifier() {
        return REGISTRATION_FUNCTIONS.contains(name);
    }

    call.callee
        .as_call()
        .and_then(|inner| inner.callee.as_identifier())
        .is_some_and(|name| REGISTRATION_FUNCTIONS.contains(name))
}

/// Returns true if `node` is `<anything>.db.<method>` for a known method.
///
/// Only the two-level chain matches: `db.get` and `ctx.store.get` do not.
#[must_use]
pub fn is_accessor_call(node: &Node) -> bool {
    let Some(member) = node.as_member() else {
        return false;
    };

    if !member
        .property_name()
        .is_some_and(|name| DB_METHODS.contains(name))
    {
        return false;
    }

    member
        .object
        .as_member()
        .and_then(MemberExpression::property_name)
        == Some(DB_HANDLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(callee: &str) -> Node {
        Node::call(Node::identifier(callee), vec![Node::arrow(vec![])])
    }

    fn ctx_db(method: &str) -> Node {
        Node::member(Node::member(Node::identifier("ctx"), "db"), method)
    }

    #[test]
    fn direct_registration_names_match() {
        for name in [
            "query",
            "mutation",
            "action",
            "internalQuery",
            "internalMutation",
            "internalAction",
            "httpAction",
        ] {
            assert!(is_registration_call(&call(name)), "{name} should match");
        }
    }

    #[test]
    fn other_identifiers_do_not_match() {
        for name in ["fetch", "Query", "queryFn", "internal", "cronJobs", ""] {
            assert!(!is_registration_call(&call(name)), "{name} should not match");
        }
    }

    #[test]
    fn curried_registration_matches_regardless_of_inner_args() {
        let curried = |inner_args: Vec<Node>| {
            Node::call(
                Node::call(Node::identifier("action"), inner_args),
                vec![Node::arrow(vec![])],
            )
        };

        assert!(is_registration_call(&curried(vec![])));
        assert!(is_registration_call(&curried(vec![Node::object(vec![])])));
        assert!(is_registration_call(&curried(vec![
            Node::identifier("x"),
            Node::spread(Node::identifier("rest")),
        ])));
    }

    #[test]
    fn curried_unknown_name_does_not_match() {
        let node = Node::call(
            Node::call(Node::identifier("wrap"), vec![]),
            vec![Node::arrow(vec![])],
        );
        assert!(!is_registration_call(&node));
    }

    #[test]
    fn member_and_deeper_callees_do_not_match() {
        // api.query(fn)
        let member = Node::call(
            Node::member(Node::identifier("api"), "query"),
            vec![Node::arrow(vec![])],
        );
        assert!(!is_registration_call(&member));

        // query()()(fn): two levels of currying
        let twice = Node::call(
            Node::call(Node::call(Node::identifier("query"), vec![]), vec![]),
            vec![Node::arrow(vec![])],
        );
        assert!(!is_registration_call(&twice));

        // (0, query)(fn)
        let other = Node::call(
            Node::other("parenthesized_expression", vec![Node::identifier("query")]),
            vec![],
        );
        assert!(!is_registration_call(&other));
    }

    #[test]
    fn non_call_is_not_registration() {
        assert!(!is_registration_call(&Node::identifier("query")));
    }

    #[test]
    fn ctx_db_methods_match() {
        for method in ["get", "patch", "replace", "delete"] {
            assert!(is_accessor_call(&ctx_db(method)), "{method} should match");
        }
    }

    #[test]
    fn any_object_before_db_matches() {
        // this.ctx.db.get / getCtx().db.get
        let nested = Node::member(
            Node::member(Node::member(Node::identifier("this"), "ctx"), "db"),
            "get",
        );
        assert!(is_accessor_call(&nested));

        let called = Node::member(
            Node::member(Node::call(Node::identifier("getCtx"), vec![]), "db"),
            "patch",
        );
        assert!(is_accessor_call(&called));
    }

    #[test]
    fn unknown_method_does_not_match() {
        for method in ["insert", "query", "normalizeId", "system"] {
            assert!(!is_accessor_call(&ctx_db(method)), "{method} should not match");
        }
    }

    #[test]
    fn single_level_db_does_not_match() {
        let node = Node::member(Node::identifier("db"), "get");
        assert!(!is_accessor_call(&node));
    }

    #[test]
    fn other_handle_name_does_not_match() {
        let node = Node::member(Node::member(Node::identifier("ctx"), "store"), "get");
        assert!(!is_accessor_call(&node));
    }

    #[test]
    fn computed_access_does_not_match() {
        // ctx["db"].get
        let computed_db = Node::member(
            Node::computed_member(Node::identifier("ctx"), Node::other("string", vec![])),
            "get",
        );
        assert!(!is_accessor_call(&computed_db));

        // ctx.db[method]
        let computed_method = Node::computed_member(
            Node::member(Node::identifier("ctx"), "db"),
            Node::identifier("get"),
        );
        assert!(!is_accessor_call(&computed_method));
    }

    #[test]
    fn call_object_does_not_match() {
        // db().get
        let node = Node::member(Node::call(Node::identifier("db"), vec![]), "get");
        assert!(!is_accessor_call(&node));
        assert!(!is_accessor_call(&Node::identifier("get")));
    }
}
