//! Density command handlers.

use anyhow::{anyhow, Context, Result};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use minimizers::config::{parse_config, resolve_path, validate_config};
use minimizers::{
    build_scheme, closed_form_density, is_not_forward, measure_density,
    redundancy_in_density_as_factor, redundancy_in_density_in_perc, DensityReport, HasherKind,
    SchemeKind, SchemeParams,
};

use super::helpers::{load_sequence, write_reports, REPORT_HEADER};

/// Options of the `density` subcommand.
#[derive(Debug, Clone)]
pub struct DensityOptions {
    pub scheme: SchemeKind,
    pub params: SchemeParams,
    pub hasher: HasherKind,
    pub length: Option<usize>,
    pub rng_seed: u64,
    pub input: Option<PathBuf>,
    pub check: bool,
}

fn scan_one(
    kind: SchemeKind,
    hasher: HasherKind,
    params: &SchemeParams,
    sequence: &[u8],
    check: bool,
) -> Result<DensityReport> {
    if !kind.uses_t() && params.t != params.k {
        log::warn!("{} ignores t={} (k={})", kind, params.t, params.k);
    }
    let mut scheme = build_scheme(kind, hasher, params.clone())
        .with_context(|| format!("Failed to build {}", kind))?;
    measure_density(scheme.as_mut(), sequence, check)
        .with_context(|| format!("Density measurement failed for {}", kind))
}

/// Measure the density of a single scheme and print one report row.
pub fn run_density(opts: &DensityOptions) -> Result<()> {
    let sequence = load_sequence(opts.input.as_deref(), opts.length, opts.rng_seed)?;
    log::info!(
        "Scanning {} symbols with {} (hasher {})",
        sequence.len(),
        opts.scheme,
        opts.hasher
    );
    let report = scan_one(opts.scheme, opts.hasher, &opts.params, &sequence, opts.check)?;
    let mut out = BufWriter::new(io::stdout().lock());
    write_reports(&mut out, &[(report, opts.params.clone())])
}

/// Print the closed-form density and the forwardness predicate.
pub fn run_formula(scheme: SchemeKind, w: usize, k: usize, t: usize) -> Result<()> {
    if t == 0 || t > k {
        return Err(anyhow!("t must be in [1, k={}] (got {})", k, t));
    }
    let density = closed_form_density(scheme.name(), k, w, t)?;
    let lower_bound = 1.0 / w as f64;
    println!("{}", REPORT_HEADER);
    println!(
        "{}\t{}\t{}\t{}\t{:.6}\t{:.6}\t{:.4}\t{:.2}\t{}",
        scheme,
        w,
        k,
        t,
        density,
        lower_bound,
        redundancy_in_density_as_factor(density, lower_bound),
        redundancy_in_density_in_perc(density, lower_bound),
        !is_not_forward(k, w, t)
    );
    Ok(())
}

/// Run every scheme of a config file over the same sequence.
pub fn run_config(config_path: &Path) -> Result<()> {
    let config = parse_config(config_path)?;
    let config_dir = config_path
        .parent()
        .ok_or_else(|| anyhow!("Invalid config path: {}", config_path.display()))?;
    let plan = validate_config(&config, config_dir)?;

    let fasta = config
        .input
        .fasta
        .as_ref()
        .map(|p| resolve_path(config_dir, p));
    let sequence = load_sequence(fasta.as_deref(), config.input.length, config.input.rng_seed)?;

    log::info!(
        "Running {} scheme(s) over {} symbols",
        plan.schemes.len(),
        sequence.len()
    );

    let mut rows = Vec::with_capacity(plan.schemes.len());
    for &kind in &plan.schemes {
        let report = scan_one(kind, plan.hasher, &plan.params, &sequence, plan.check)?;
        rows.push((report, plan.params.clone()));
    }

    let mut out = BufWriter::new(io::stdout().lock());
    write_reports(&mut out, &rows)
}
