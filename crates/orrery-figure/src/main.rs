//! Orrery - N-body efficiency and planet-discovery figure
//!
//! Fetches exoplanet discovery years from the NASA Exoplanet Archive, reads
//! the local CPU clock-rate history, and draws both against the landmark
//! N-body simulation efficiency records.
//!
//! ## Usage
//!
//! ```bash
//! # Reproduce the published figure
//! orrery
//!
//! # Step-count-corrected rescaling with the extra landmark runs
//! orrery --variant revised
//!
//! # Custom inputs and outputs
//! orrery --frequency-file data/frequency.dat --png-out figure.png --svg-out figure.svg
//!
//! # Machine-readable record of what was plotted
//! orrery --summary-json run.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orrery_core::{DiscoveryCurve, FigureVariant, Regime, load_clock_samples};
use orrery_figure::archive::{ARCHIVE_TAP_URL, ArchiveClient, discovery_years, distinct_hosts};
use orrery_figure::render::{Figure, render_figure};

/// Draw the N-body efficiency and planet-discovery comparison figure
#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(about = "N-body efficiency and planet-discovery figure", long_about = None)]
struct Args {
    /// Figure variant (classic, revised)
    #[arg(long, default_value = "classic")]
    variant: String,

    /// CPU clock-rate history file (year and MHz per line)
    #[arg(short, long, default_value = "data/frequency.dat")]
    frequency_file: PathBuf,

    /// PNG output path
    #[arg(long, default_value = "Nbody-Moores-Law.png")]
    png_out: PathBuf,

    /// SVG output path
    #[arg(long, default_value = "Nbody-Moores-Law.svg")]
    svg_out: PathBuf,

    /// TAP base URL of the exoplanet archive
    #[arg(long, default_value = ARCHIVE_TAP_URL)]
    tap_url: String,

    /// Write a JSON run summary to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

/// Where one record landed on the chart
#[derive(Debug, Serialize)]
struct RecordSummary {
    short_code: &'static str,
    label: &'static str,
    regime: Regime,
    year: f64,
    myr_per_cpu_month: f64,
}

/// What a run plotted, for the optional JSON output
#[derive(Debug, Serialize)]
struct RunSummary {
    variant: &'static str,
    outer_to_inner_rescale: f64,
    planet_rows: usize,
    distinct_hosts: usize,
    curve_points: usize,
    clock_samples: usize,
    records: Vec<RecordSummary>,
    png_out: String,
    svg_out: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orrery=info,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let Some(variant) = FigureVariant::from_str(&args.variant) else {
        bail!(
            "unknown variant `{}` (expected classic or revised)",
            args.variant
        );
    };

    info!("🔭 Querying the exoplanet archive at {}", args.tap_url);
    let client = ArchiveClient::with_base_url(&args.tap_url);
    let rows = client.fetch_planets().await?;
    let hosts = distinct_hosts(&rows);
    info!("🪐 {} planets around {} host stars", rows.len(), hosts);

    let curve = DiscoveryCurve::from_years(discovery_years(&rows));

    let samples = load_clock_samples(&args.frequency_file)
        .with_context(|| format!("reading {}", args.frequency_file.display()))?;
    info!(
        "💻 {} clock samples from {}",
        samples.len(),
        args.frequency_file.display()
    );

    let figure = Figure {
        variant,
        clock_samples: &samples,
        curve: &curve,
    };
    render_figure(&figure, &args.png_out, &args.svg_out)?;

    if let Some(path) = &args.summary_json {
        let rescale = variant.outer_to_inner_rescale();
        let summary = RunSummary {
            variant: variant.name(),
            outer_to_inner_rescale: rescale,
            planet_rows: rows.len(),
            distinct_hosts: hosts,
            curve_points: curve.len(),
            clock_samples: samples.len(),
            records: variant
                .records()
                .iter()
                .map(|record| RecordSummary {
                    short_code: record.short_code,
                    label: record.label,
                    regime: record.regime,
                    year: record.year,
                    myr_per_cpu_month: record.normalized_efficiency(rescale),
                })
                .collect(),
            png_out: args.png_out.display().to_string(),
            svg_out: args.svg_out.display().to_string(),
        };
        fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        info!("💾 Summary written to {}", path.display());
    }

    info!("✅ Figure complete ({} variant)", variant.name());

    Ok(())
}
