//! Plain-text rendering of the reports.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::models::{CoverageReport, Suggestion, TagCatalogReport};

pub fn write_coverage<W: Write>(
    out: &mut W,
    report: &CoverageReport,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "Total decks: {}", report.total_decks)?;
    writeln!(
        out,
        "\nDecks with empty primary creature_types: {}",
        report.empty_primary.len()
    )?;
    writeln!(
        out,
        "Decks with empty secondary creature_types: {}",
        report.empty_secondary.len()
    )?;

    if report.empty_primary.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        "\n\nFirst {} decks with empty primary creature types:",
        limit.min(report.empty_primary.len())
    )?;
    for deck in report.empty_primary.iter().take(limit) {
        writeln!(out, "  - {} ({})", deck.name, deck.commander)?;
    }
    Ok(())
}

pub fn write_suggestions<W: Write>(
    out: &mut W,
    suggestions: &[Suggestion],
    limit: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "Found {} decks with potential creature type additions:\n",
        suggestions.len()
    )?;
    for s in suggestions.iter().take(limit) {
        writeln!(out, "{}", s.deck)?;
        writeln!(out, "  Commander: {}", s.commander)?;
        writeln!(out, "  Current: {}", label_list(&s.current))?;
        writeln!(out, "  Suggested: {}", label_list(&s.suggested))?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_catalog<W: Write>(out: &mut W, report: &TagCatalogReport) -> io::Result<()> {
    writeln!(out, "Analyzing {} precon decks...\n", report.total_decks)?;

    for (category, labels) in &report.categories {
        writeln!(out, "{} ({}):", heading(category), labels.len())?;
        writeln!(out, "{}\n", join(labels))?;
    }

    writeln!(out, "IPS / UNIVERSES ({}):", report.ips.len())?;
    writeln!(out, "{}\n", join(&report.ips))?;

    writeln!(out, "COMPLEXITY LEVELS:")?;
    writeln!(out, "{}\n", join(&report.complexity_levels))?;

    writeln!(out, "POWER LEVEL DISTRIBUTION:")?;
    for (level, count) in &report.power_levels {
        writeln!(out, "  {}: {} decks", level, count)?;
    }

    writeln!(out, "\nSUGGESTED THEME GROUPINGS:\n")?;
    for (index, grouping) in report.groupings.iter().enumerate() {
        writeln!(out, "{}. {} ({} decks)", index + 1, grouping.name, grouping.deck_count)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `["a", "b"]`-style list, matching how the labels are stored in the dataset.
fn label_list(labels: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = labels.iter().map(|l| format!("{:?}", l)).collect();
    format!("[{}]", quoted.join(", "))
}

fn join(labels: &BTreeSet<String>) -> String {
    labels.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn heading(category: &str) -> String {
    category.replace('_', " ").to_uppercase()
}
