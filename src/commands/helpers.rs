//! Helper functions for the minimizers CLI: argument parsers, sequence
//! loading and report formatting.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use minimizers::constants::DEFAULT_RANDOM_LENGTH;
use minimizers::{random_sequence, read_sequence, DecyclingTest, DensityReport, HasherKind};
use minimizers::{SchemeKind, SchemeParams};

/// Parse a scheme name from the CLI.
pub fn parse_scheme(s: &str) -> Result<SchemeKind, String> {
    s.parse().map_err(|e: minimizers::MinimizerError| e.to_string())
}

/// Parse a hasher name from the CLI.
pub fn parse_hasher(s: &str) -> Result<HasherKind, String> {
    s.parse().map_err(|e: minimizers::MinimizerError| e.to_string())
}

/// Parse a decycling membership test from the CLI.
pub fn parse_decycling_test(s: &str) -> Result<DecyclingTest, String> {
    s.parse().map_err(|e: minimizers::MinimizerError| e.to_string())
}

/// Parse the window size, which must be at least 2.
pub fn parse_window(s: &str) -> Result<usize, String> {
    let w: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid window size", s))?;
    if w < 2 {
        return Err(format!("window size must be at least 2, got {}", w));
    }
    Ok(w)
}

/// Load the sequence to scan: `input` if given, else a random one.
pub fn load_sequence(
    input: Option<&Path>,
    length: Option<usize>,
    rng_seed: u64,
) -> Result<Vec<u8>> {
    match input {
        Some(path) => read_sequence(path, length)
            .with_context(|| format!("Failed to load sequence from {}", path.display())),
        None => {
            let len = length.unwrap_or(DEFAULT_RANDOM_LENGTH);
            log::info!("Generating {} random symbols (seed {:#x})", len, rng_seed);
            Ok(random_sequence(len, rng_seed))
        }
    }
}

/// Column header of the density report.
pub const REPORT_HEADER: &str =
    "scheme\tw\tk\tt\tdensity\tlower_bound\tfactor\tredundancy_perc\tforward";

/// Format one density report as a tab-separated row.
pub fn format_report_row(report: &DensityReport, params: &SchemeParams) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.6}\t{:.6}\t{:.4}\t{:.2}\t{}",
        report.scheme,
        params.w,
        params.k,
        params.t,
        report.density,
        report.lower_bound,
        report.redundancy_factor(),
        report.redundancy_perc(),
        report.is_forward
    )
}

/// Write the header and rows to `out`.
pub fn write_reports<W: Write>(
    out: &mut W,
    rows: &[(DensityReport, SchemeParams)],
) -> Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for (report, params) in rows {
        writeln!(out, "{}", format_report_row(report, params))?;
    }
    out.flush()?;
    Ok(())
}
