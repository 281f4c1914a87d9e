//! Plugin metadata and the rule table.

use std::collections::BTreeMap;

use crate::{ExplicitTableIds, NoOldRegisteredFunctionSyntax, RequireArgsValidator};
use convex_lint_core::RuleBox;

/// Identity of the rule plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginMeta {
    /// Plugin name.
    pub name: &'static str,
    /// Plugin version.
    pub version: &'static str,
}

/// The Convex rule plugin.
pub const PLUGIN: PluginMeta = PluginMeta {
    name: "convex",
    version: env!("CARGO_PKG_VERSION"),
};

/// Returns every rule in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoOldRegisteredFunctionSyntax::new()),
        Box::new(RequireArgsValidator::new()),
        Box::new(ExplicitTableIds::new()),
    ]
}

/// Returns the rule table keyed by rule name.
#[must_use]
pub fn rules() -> BTreeMap<&'static str, RuleBox> {
    all_rules().into_iter().map(|r| (r.name(), r)).collect()
}

/// Looks up a rule by name (`explicit-table-ids`) or code (`CVX003`).
#[must_use]
pub fn find_rule(name_or_code: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|r| r.name() == name_or_code || r.code().eq_ignore_ascii_case(name_or_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use convex_lint_core::RuleCategory;

    #[test]
    fn plugin_identity() {
        assert_eq!(PLUGIN.name, "convex");
        assert_eq!(PLUGIN.version, "0.1.0");
    }

    #[test]
    fn rule_table_has_three_named_rules() {
        let table = rules();
        let names: Vec<&str> = table.keys().copied().collect();
        assert_eq!(
            names,
            vec![
                "explicit-table-ids",
                "no-old-registered-function-syntax",
                "require-args-validator",
            ]
        );
    }

    #[test]
    fn every_rule_declares_metadata() {
        for rule in all_rules() {
            assert_eq!(rule.category(), RuleCategory::Problem);
            assert!(rule.fixable(), "{} should declare fixable", rule.name());
            assert!(!rule.description().is_empty());
            assert!(rule.code().starts_with("CVX"));
        }
    }

    #[test]
    fn find_by_name_or_code() {
        assert_eq!(
            find_rule("require-args-validator").map(|r| r.code()),
            Some("CVX002")
        );
        assert_eq!(
            find_rule("cvx003").map(|r| r.name()),
            Some("explicit-table-ids")
        );
        assert!(find_rule("no-unwrap-expect").is_none());
    }
}
