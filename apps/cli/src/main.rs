//! pseudoloc command-line utility.
//!
//! Reads a flat JSON string table, pseudo-localizes every value, and writes
//! the result as indented JSON. All transformation lives in pseudoloc-core;
//! this binary is argument parsing, file validation, and JSON plumbing.

mod files;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use pseudoloc_core::{
    ExpansionPolicy, FixedTierPolicy, PolicyTable, ProfileBasedPolicy, Transformer, DEFAULT_GLYPHS,
};

use crate::files::{read_string_table, validate_input_path, write_string_table};

/// Generate pseudo-localized variants of a JSON string table.
#[derive(Parser, Debug)]
#[command(name = "pseudoloc", version, about, long_about = None)]
struct Args {
    /// Path to a JSON file holding a flat key → string object
    input: PathBuf,

    /// Target language profile (es, fr, de, zh, ja)
    #[arg(short, long, default_value = "de")]
    language: String,

    /// Content category of the strings (ui, technical, marketing, legal)
    #[arg(short, long, default_value = "ui")]
    category: String,

    /// Where to write the transformed table
    #[arg(short, long, default_value = "pseudoloc.json")]
    output: PathBuf,

    /// Use the legacy fixed length tiers instead of language profiles
    #[arg(long)]
    fixed_tiers: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    validate_input_path(&args.input)?;
    let strings = read_string_table(&args.input)?;

    let policy: Arc<dyn ExpansionPolicy> = if args.fixed_tiers {
        Arc::new(FixedTierPolicy)
    } else {
        Arc::new(ProfileBasedPolicy::new(PolicyTable::builtin()))
    };
    let transformer = Transformer::new(&DEFAULT_GLYPHS, policy);

    let transformed = transformer.transform(&strings, &args.language, &args.category)?;
    write_string_table(&args.output, &transformed)?;

    println!("Pseudo-localized table written to {}", args.output.display());
    Ok(())
}
