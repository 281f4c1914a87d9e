//! # convex-lint-ts
//!
//! Tree-sitter based TypeScript/JavaScript frontend for convex-lint.
//!
//! [`TypeScriptParser`] implements [`convex_lint_core::SourceParser`]: it
//! parses source with `tree-sitter-typescript` and lowers the concrete tree
//! into the [`convex_lint_core::ast`] model the rules match against.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod lower;
pub mod typescript;

pub use typescript::TypeScriptParser;
