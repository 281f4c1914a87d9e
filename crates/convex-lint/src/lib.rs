//! # convex-lint
//!
//! Syntax-level lint rules for Convex backend functions.
//!
//! This is the facade crate: it re-exports the core framework, the rules
//! and the TypeScript frontend, and wires them together.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let violations = convex_lint::lint_source("convex/users.ts", source)?;
//! for v in &violations {
//!     println!("{v}");
//! }
//! ```
//!
//! ## Whole project
//!
//! ```rust,ignore
//! let analyzer = convex_lint::analyzer().root("./convex").build()?;
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

// Re-export core types and traits
pub use convex_lint_core::*;

/// Convex rules and plugin table.
pub mod rules {
    pub use convex_lint_rules::*;
}

pub use convex_lint_ts::TypeScriptParser;

/// Returns an analyzer builder with the TypeScript frontend and every rule.
#[must_use]
pub fn analyzer() -> AnalyzerBuilder {
    convex_lint_rules::all_rules()
        .into_iter()
        .fold(Analyzer::builder().parser(TypeScriptParser::new()), |b, rule| {
            b.rule_box(rule)
        })
}

/// Lints one in-memory source with every rule.
///
/// `path` selects the grammar (`.tsx`/`.jsx` use TSX). Violations are
/// located relative to the current directory.
///
/// # Errors
///
/// Returns an error if `path` has an unsupported extension or parsing fails.
pub fn lint_source(path: impl AsRef<Path>, source: &str) -> Result<Vec<Violation>, AnalyzerError> {
    let analyzer = analyzer().root(".").build()?;
    analyzer.analyze_source(path.as_ref(), source)
}
