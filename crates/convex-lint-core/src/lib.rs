//! # convex-lint-core
//!
//! Core framework for convex-lint.
//!
//! This crate owns everything the rules consume but do not implement:
//!
//! - [`ast`]: the closed syntax model frontends lower into
//! - [`visit`]: depth-first traversal with per-kind hooks
//! - [`Rule`] trait with a call-expression hook and a per-file check
//! - [`Report`], the reporting capability handed to rules
//! - [`SourceParser`] for pluggable language frontends
//! - [`Analyzer`] for orchestrating lint execution over a directory
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use convex_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./convex")
//!     .parser(TypeScriptParser::new())
//!     .rule(MyRule)
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ast;
pub mod visit;

mod analyzer;
mod config;
mod context;
mod parser;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use ast::{
    CallExpression, FunctionExpression, Identifier, MemberExpression, Node, NodeKind,
    ObjectExpression, ObjectMember, Other, Program, Property, PropertyKey, PropertyKind, Span,
};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::{FileContext, Report, ViolationSink};
pub use parser::{ParseError, SourceParser};
pub use rule::{Rule, RuleBox, RuleCategory};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
