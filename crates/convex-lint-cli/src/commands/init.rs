//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# convex-lint configuration

# Minimum severity that makes `convex-lint check` exit non-zero
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./convex"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/_generated/**",
    "**/dist/**",
]

# Respect .gitignore files
respect_gitignore = true

# Each rule can be disabled or have its severity overridden

[rules.no-old-registered-function-syntax]
enabled = true

[rules.require-args-validator]
enabled = true
# severity = "warning"

[rules.explicit-table-ids]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("convex-lint.toml");
    write_config(config_path, force)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit convex-lint.toml to configure rules");
    println!("  2. Run: convex-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}
