use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_RANDOM_LENGTH, DEFAULT_RNG_SEED, DEFAULT_SEED};
use crate::core::hasher::HasherKind;
use crate::schemes::{DecyclingTest, SchemeKind, SchemeParams};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub scan: ScanSettings,
    #[serde(default)]
    pub input: InputSettings,
}

#[derive(Debug, Deserialize)]
pub struct ScanSettings {
    pub w: usize,
    pub k: usize,
    /// Anchor length; defaults to `k`.
    pub t: Option<usize>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_hasher")]
    pub hasher: String,
    pub schemes: Vec<String>,
    pub tolerance: Option<u64>,
    pub decycling_test: Option<String>,
    /// Compare streaming against batch evaluation on every window.
    #[serde(default)]
    pub check: bool,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_hasher() -> String {
    HasherKind::default().name().to_string()
}

#[derive(Debug, Deserialize)]
pub struct InputSettings {
    /// Length of the random sequence, or maximum symbols read from `fasta`.
    pub length: Option<usize>,
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
    pub fasta: Option<PathBuf>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            length: None,
            rng_seed: DEFAULT_RNG_SEED,
            fasta: None,
        }
    }
}

fn default_rng_seed() -> u64 {
    DEFAULT_RNG_SEED
}

impl InputSettings {
    /// Random sequence length, falling back to the default.
    pub fn random_length(&self) -> usize {
        self.length.unwrap_or(DEFAULT_RANDOM_LENGTH)
    }
}

/// A scan with every name resolved.
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub params: SchemeParams,
    pub hasher: HasherKind,
    pub schemes: Vec<SchemeKind>,
    pub check: bool,
}

pub fn parse_config(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .context(format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = toml::from_str(&contents).context("Failed to parse TOML config")?;

    if config.scan.schemes.is_empty() {
        return Err(anyhow!("Config must list at least one scheme in [scan].schemes"));
    }

    if config.input.length == Some(0) {
        return Err(anyhow!("Config error: [input].length must be positive"));
    }

    Ok(config)
}

/// Resolve names and check parameters; relative input paths are taken from
/// `config_dir`.
pub fn validate_config(config: &ConfigFile, config_dir: &Path) -> Result<ScanPlan> {
    let scan = &config.scan;
    let t = scan.t.unwrap_or(scan.k);

    let mut params = SchemeParams::new(scan.w, scan.k, t, scan.seed);
    if let Some(tolerance) = scan.tolerance {
        params = params.with_tolerance(tolerance);
    }
    if let Some(name) = &scan.decycling_test {
        let test: DecyclingTest = name
            .parse()
            .with_context(|| "Config error in [scan].decycling_test")?;
        params = params.with_decycling_test(test);
    }
    params
        .validate()
        .with_context(|| "Config error in [scan]")?;

    let hasher: HasherKind = scan
        .hasher
        .parse()
        .with_context(|| "Config error in [scan].hasher")?;

    let mut schemes = Vec::with_capacity(scan.schemes.len());
    for name in &scan.schemes {
        let kind: SchemeKind = name
            .parse()
            .with_context(|| "Config error in [scan].schemes")?;
        if schemes.contains(&kind) {
            return Err(anyhow!("Scheme '{}' listed twice in [scan].schemes", name));
        }
        schemes.push(kind);
    }

    if let Some(fasta) = &config.input.fasta {
        let abs_path = resolve_path(config_dir, fasta);
        if !abs_path.exists() {
            return Err(anyhow!("Input file not found: {}", abs_path.display()));
        }
    }

    Ok(ScanPlan {
        params,
        hasher,
        schemes,
        check: scan.check,
    })
}

pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
