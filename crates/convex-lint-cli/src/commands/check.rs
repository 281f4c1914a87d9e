//! Check command implementation.

use anyhow::{bail, Context, Result};
use convex_lint_core::{Analyzer, Config, RuleBox};
use convex_lint_rules::{all_rules, find_rule};
use convex_lint_ts::TypeScriptParser;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
///
/// Without an explicit `path` the analysis root comes from the config.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    if let Some(p) = source.path() {
        if source.is_global() {
            tracing::info!("Using global config: {}", p.display());
        } else {
            tracing::debug!("Using config: {}", p.display());
        }
    }
    let config = source.load().context("Failed to load config")?;
    let fail_on = config.fail_on();
    let root = analysis_root(path, source, &config);

    let mut builder = Analyzer::builder()
        .root(root)
        .config(config)
        .parser(TypeScriptParser::new());

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let rules = match rules_filter {
        Some(filter) => select_rules(filter)?,
        None => all_rules(),
    };
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {:?} with {} rules",
        analyzer.root(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Picks the directory to analyze.
///
/// An explicit path wins. Otherwise `[analyzer] root` is used, resolved
/// against the directory of the config file it came from.
fn analysis_root(path: Option<&Path>, source: &ConfigSource, config: &Config) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }

    let configured = &config.analyzer.root;
    match source.path().and_then(Path::parent) {
        Some(dir) if configured.is_relative() => dir.join(configured),
        _ => configured.clone(),
    }
}

/// Resolves a comma-separated list of rule names or codes.
fn select_rules(filter: &str) -> Result<Vec<RuleBox>> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in filter.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match find_rule(name) {
            Some(rule) if rules.iter().any(|r| r.name() == rule.name()) => {}
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    if rules.is_empty() {
        bail!("No known rules in --rules {filter:?}; see `convex-lint list-rules`");
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rules: &[RuleBox]) -> Vec<&'static str> {
        rules.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn explicit_path_wins_over_configured_root() {
        let config = Config::parse("[analyzer]\nroot = \"./convex\"\n").unwrap();
        let source = ConfigSource::Project(PathBuf::from("/project/convex-lint.toml"));

        assert_eq!(
            analysis_root(Some(Path::new("other")), &source, &config),
            PathBuf::from("other")
        );
        assert_eq!(
            analysis_root(None, &source, &config),
            PathBuf::from("/project/./convex")
        );
    }

    #[test]
    fn configured_root_without_file_is_used_as_is() {
        let config = Config::default();
        assert_eq!(
            analysis_root(None, &ConfigSource::Default, &config),
            PathBuf::from(".")
        );

        let absolute = Config::parse("[analyzer]\nroot = \"/srv/app\"\n").unwrap();
        let source = ConfigSource::Global(PathBuf::from("/home/me/.convex-lint/config.toml"));
        assert_eq!(
            analysis_root(None, &source, &absolute),
            PathBuf::from("/srv/app")
        );
    }

    #[test]
    fn select_by_name_and_code() {
        let rules = select_rules("require-args-validator, cvx003").unwrap();
        assert_eq!(
            names(&rules),
            vec!["require-args-validator", "explicit-table-ids"]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let rules = select_rules("CVX001,no-old-registered-function-syntax").unwrap();
        assert_eq!(names(&rules), vec!["no-old-registered-function-syntax"]);
    }

    #[test]
    fn unknown_rules_are_skipped() {
        let rules = select_rules("no-such-rule,CVX002").unwrap();
        assert_eq!(names(&rules), vec!["require-args-validator"]);
    }

    #[test]
    fn nothing_known_is_an_error() {
        assert!(select_rules("no-such-rule").is_err());
        assert!(select_rules(" , ").is_err());
    }
}
