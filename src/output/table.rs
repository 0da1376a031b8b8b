//! Plain-text table rendering of ranked scopes.

use crate::aggregator::metrics::percentage;
use crate::aggregator::RankedScope;

const SCOPE_WIDTH: usize = 48;

/// Render ranked scopes as a fixed-width table
///
/// **Public** - used by the profile command for terminal output
///
/// # Arguments
/// * `ranked` - Scopes in rank order
/// * `limit` - Show at most this many rows (None = all)
///
/// Percentages are relative to all ranked steps, not only the shown rows.
pub fn render_table(ranked: &[RankedScope], limit: Option<usize>) -> String {
    let total: u64 = ranked.iter().map(|s| s.steps).sum();
    let shown = limit.unwrap_or(ranked.len()).min(ranked.len());

    let mut lines = Vec::with_capacity(shown + 5);
    let rule = format!("+-{}-+-{}-+-{}-+", "-".repeat(SCOPE_WIDTH), "-".repeat(12), "-".repeat(7));

    lines.push(rule.clone());
    lines.push(format!(
        "| {:<width$} | {:>12} | {:>7} |",
        "Scope",
        "Steps",
        "%",
        width = SCOPE_WIDTH
    ));
    lines.push(rule.clone());

    for entry in &ranked[..shown] {
        lines.push(format!(
            "| {:<width$} | {:>12} | {:>6.1}% |",
            truncate_scope(&entry.scope),
            entry.steps,
            percentage(entry.steps, total),
            width = SCOPE_WIDTH
        ));
    }

    lines.push(rule);

    if shown < ranked.len() {
        lines.push(format!("  ... {} more scopes", ranked.len() - shown));
    }
    lines.push(format!("  Total steps: {}", total));

    lines.join("\n")
}

/// Keep the innermost end of long dotted scopes
fn truncate_scope(scope: &str) -> String {
    let chars = scope.chars().count();
    if chars <= SCOPE_WIDTH {
        return scope.to_string();
    }

    let tail: String = scope.chars().skip(chars - (SCOPE_WIDTH - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_all_rows() {
        let ranked = vec![RankedScope::new("m.main", 3), RankedScope::new("unmapped", 1)];
        let table = render_table(&ranked, None);

        assert!(table.contains("m.main"));
        assert!(table.contains("75.0%"));
        assert!(table.contains("Total steps: 4"));
        assert!(!table.contains("more scopes"));
    }

    #[test]
    fn test_render_limit() {
        let ranked: Vec<RankedScope> = (0..5)
            .map(|i| RankedScope::new(format!("m.f{}", i), 10 - i))
            .collect();
        let table = render_table(&ranked, Some(2));

        assert!(table.contains("m.f1"));
        assert!(!table.contains("m.f2"));
        assert!(table.contains("... 3 more scopes"));
    }

    #[test]
    fn test_truncate_keeps_innermost() {
        let long = format!("{}.inner_function", "outer".repeat(20));
        let shown = truncate_scope(&long);
        assert_eq!(shown.chars().count(), SCOPE_WIDTH);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with(".inner_function"));
    }
}
