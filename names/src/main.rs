//! Name Table Report
//!
//! Logs coverage of the built-in name tables and prints it as JSON.

use names::{NameKind, FIRST_NAMES, LAST_NAMES};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Serialize)]
struct Report {
    first_names: names::TableSummary,
    last_names: names::TableSummary,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let report = Report {
        first_names: FIRST_NAMES.summary(),
        last_names: LAST_NAMES.summary(),
    };

    for (kind, summary) in [
        (NameKind::First, &report.first_names),
        (NameKind::Last, &report.last_names),
    ] {
        info!(
            "{} table: {} names across {} descents",
            kind,
            summary.total,
            summary.descents.len()
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
