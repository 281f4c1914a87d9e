//! List rules command implementation.

use convex_lint_rules::{all_rules, PLUGIN};

/// Runs the list-rules command.
pub fn run() {
    println!("Plugin {} v{}\n", PLUGIN.name, PLUGIN.version);
    println!(
        "{:<8} {:<36} {:<11} Description",
        "Code", "Name", "Category"
    );
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        let fix = if rule.fixable() { " (fixable)" } else { "" };
        println!(
            "{:<8} {:<36} {:<11} {}{}",
            rule.code(),
            rule.name(),
            rule.category(),
            rule.description(),
            fix
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  convex-lint check --rules explicit-table-ids");
    println!("  convex-lint check --rules CVX001,CVX002");
}
