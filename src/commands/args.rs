//! Command-line argument definitions for the minimizers CLI.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use minimizers::constants::{DEFAULT_RNG_SEED, DEFAULT_SEED};
use minimizers::{DecyclingTest, HasherKind, SchemeKind};

use super::helpers::{parse_decycling_test, parse_hasher, parse_scheme, parse_window};

#[derive(Parser)]
#[command(name = "minimizers")]
#[command(about = "Density benchmarks for window fingerprint selection schemes")]
#[command(
    long_about = "Minimizers: measure the density of window fingerprint selection schemes.

A scheme picks one of the w overlapping k-mers of every window of w + k - 1
symbols. Density is the fraction of k-mer positions picked by at least one
window; 1/w is the lower bound for forward schemes.

SCHEMES:
  mod_sampling, miniception     use the anchor length t (1 <= t <= k)
  rotational_alt                largest symbol sum at positions 0 mod w
  rotational_orig               restricted set, requires k divisible by w
  decycling, double_decycling   decycling-set members first

OUTPUT FORMAT (density, run):
  Tab-separated columns:
  scheme<TAB>w<TAB>k<TAB>t<TAB>density<TAB>lower_bound<TAB>factor<TAB>redundancy_perc<TAB>forward

  factor is density / lower_bound; redundancy_perc is (factor - 1) * 100."
)]
#[command(after_help = "EXAMPLES:
  # Density of mod-sampling on 1M random symbols
  minimizers density --scheme mod_sampling -w 10 -k 21 -t 11

  # Decycling on a FASTA file, checking streaming against batch
  minimizers density --scheme decycling -w 10 -k 21 --input genome.fa --check

  # Closed-form density and forwardness
  minimizers formula --scheme miniception -w 10 -k 21 -t 11

  # Every scheme listed in a config file
  minimizers run --config scan.toml")]
pub struct Cli {
    /// Enable verbose progress output with timestamps
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Window parameters shared by subcommands.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Number of k-mers per window (at least 2)
    #[arg(short, long, value_parser = parse_window)]
    pub w: usize,

    /// Length of the selected k-mer
    #[arg(short, long)]
    pub k: usize,

    /// Anchor length for mod_sampling and miniception. Defaults to k.
    #[arg(short, long)]
    pub t: Option<usize>,
}

impl WindowArgs {
    pub fn t_or_k(&self) -> usize {
        self.t.unwrap_or(self.k)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Measure the density of one scheme on a sequence
    #[command(after_help = "EXAMPLES:
  minimizers density --scheme miniception -w 10 -k 21 -t 11 --length 100000
  minimizers density --scheme rotational_orig -w 4 -k 16 --tolerance 2")]
    Density {
        /// Scheme name
        #[arg(short, long, value_parser = parse_scheme)]
        scheme: SchemeKind,

        #[command(flatten)]
        window: WindowArgs,

        /// Seed for k-mer hashing
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Hash function: murmur64, murmur128 or fx
        #[arg(long, default_value = "murmur64", value_parser = parse_hasher)]
        hasher: HasherKind,

        /// Length of the random sequence (ignored with --input, where it caps
        /// the number of symbols read)
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for the random sequence
        #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
        rng_seed: u64,

        /// FASTA/FASTQ file to scan instead of a random sequence
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Slack of the rotational_orig restricted-set test
        #[arg(long)]
        tolerance: Option<u64>,

        /// Decycling membership test: original, arg_pos or arg_neg
        #[arg(long, default_value = "arg_pos", value_parser = parse_decycling_test)]
        decycling_test: DecyclingTest,

        /// Compare streaming against batch evaluation on every window
        #[arg(long)]
        check: bool,
    },

    /// Print the closed-form density and whether the parameters are forward
    Formula {
        /// Scheme name (mod_sampling or miniception)
        #[arg(short, long, value_parser = parse_scheme)]
        scheme: SchemeKind,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Run every scheme listed in a TOML config file
    #[command(after_help = "CONFIG FORMAT:
  [scan]
  w = 10
  k = 21
  t = 11                        # optional, defaults to k
  seed = 0                      # optional
  hasher = \"murmur64\"           # optional
  schemes = [\"mod_sampling\", \"miniception\"]
  tolerance = 3                 # optional, rotational_orig
  decycling_test = \"arg_pos\"    # optional
  check = false                 # optional

  [input]
  length = 1000000              # random sequence length
  rng_seed = 42                 # optional
  fasta = \"genome.fa\"           # optional, relative to the config file")]
    Run {
        /// Path to the TOML config file
        #[arg(short, long)]
        config: PathBuf,
    },
}

