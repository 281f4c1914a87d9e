//! # convex-lint-rules
//!
//! Lint rules for Convex function registration and database access.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CVX001 | `no-old-registered-function-syntax` | Prefer object syntax for registered Convex functions |
//! | CVX002 | `require-args-validator` | Require argument validators for Convex functions |
//! | CVX003 | `explicit-table-ids` | Require explicit table names in database operations |
//!
//! ## Usage
//!
//! ```ignore
//! use convex_lint_core::Analyzer;
//! use convex_lint_rules::all_rules;
//!
//! let mut builder = Analyzer::builder().root("./convex");
//! for rule in all_rules() {
//!     builder = builder.rule_box(rule);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classifier;

mod explicit_table_ids;
mod no_old_registered_function_syntax;
mod plugin;
mod require_args_validator;

#[cfg(test)]
mod test_support;

pub use classifier::{is_accessor_call, is_registration_call};
pub use explicit_table_ids::ExplicitTableIds;
pub use no_old_registered_function_syntax::NoOldRegisteredFunctionSyntax;
pub use plugin::{all_rules, find_rule, rules, PluginMeta, PLUGIN};
pub use require_args_validator::RequireArgsValidator;

/// Re-export core types for convenience.
pub use convex_lint_core::{Rule, Severity, Violation};
