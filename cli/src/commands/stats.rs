use anyhow::Context;
use colored::*;
use rego_common::config::Config;
use rego_common::source::LineSource;
use rego_core::{SharedRegistry, SourceReport};

use crate::terminal::{colors, format, print};

/// Skipped lines listed per source before the rest are summarised.
const SKIP_PREVIEW: usize = 5;

pub fn stats<V: LineSource, R: LineSource>(
    shared: &SharedRegistry<V, R>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let registry = shared.get();
    let report = shared
        .report()
        .context("registry was not bootstrapped")?;

    for (idx, source) in [&report.vehicles, &report.registrations].into_iter().enumerate() {
        print_source(idx, source, cfg);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    let summary = format!(
        "{} vehicles cataloged, {} registrations bound",
        registry.vehicle_count().to_string().green().bold(),
        registry.registration_count().to_string().green().bold(),
    );
    print::print_status(summary);
    Ok(())
}

fn print_source(idx: usize, source: &SourceReport, cfg: &Config) {
    print::tree_head(idx, &source.source);
    print::as_tree_one_level(format::source_to_details(source));

    if cfg.quiet > 0 {
        return;
    }
    for skip in source.skipped.iter().take(SKIP_PREVIEW) {
        print::print_status(format!(
            "line {}: {}",
            skip.line.to_string().color(colors::ACCENT),
            skip.reason
        ));
    }
    if let Some(rest) = source.skipped_count().checked_sub(SKIP_PREVIEW).filter(|n| *n > 0) {
        print::print_status(format!("... and {rest} more"));
    }
}
