//! `sifis-policy`: renders XACML request stubs and policy fragments for the
//! Hazard individuals of the SIFIS-Home ontology.
//!
//! **Usage:**
//! ```text
//! sifis-policy [--ontology <path>] [--format <turtle|ntriples|rdfxml>]
//!              [--strict] [--require-attribute-id] [--audit] [INDIVIDUAL]
//! ```
//!
//! With no `INDIVIDUAL`, every Hazard is rendered. Fragments go to stdout;
//! logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sifis_ontology::{rdf, OntologyGraph, RdfFormat};
use sifis_policy::{audit, run, Options, Severity};
use tracing_subscriber::EnvFilter;

/// Document format accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    Ntriples,
    /// RDF/XML.
    Rdfxml,
}

impl From<Format> for RdfFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Turtle => RdfFormat::Turtle,
            Format::Ntriples => RdfFormat::NTriples,
            Format::Rdfxml => RdfFormat::RdfXml,
        }
    }
}

/// Generate XACML fragments for SIFIS-Home hazards.
#[derive(Parser)]
#[command(
    name = "sifis-policy",
    about = "Generate XACML request and policy fragments for ontology hazards"
)]
struct Args {
    /// Short name of a single individual (the part after `#`).
    individual: Option<String>,

    /// Path to the ontology document.
    #[arg(long, default_value = "ontology.rdf")]
    ontology: PathBuf,

    /// Document format (default: inferred from the file extension).
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Fail when the requested individual is not a Hazard, or no Hazard exists.
    #[arg(long)]
    strict: bool,

    /// Fail on hazards without an attributeId instead of rendering "null".
    #[arg(long)]
    require_attribute_id: bool,

    /// Audit hazard attribute identifiers instead of rendering fragments.
    #[arg(long)]
    audit: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let ontology = rdf::load_path(&args.ontology, args.format.map(RdfFormat::from))
        .with_context(|| format!("Failed to load ontology {}", args.ontology.display()))?;

    if args.audit {
        print_audit(&ontology);
        return Ok(());
    }

    let options = Options {
        individual: args.individual,
        strict: args.strict,
        require_attribute_id: args.require_attribute_id,
    };
    let stdout = io::stdout();
    let count = run(&ontology, &options, &mut stdout.lock())
        .context("Failed to generate policy fragments")?;
    tracing::info!(count, "hazard blocks written");
    Ok(())
}

/// Prints the attribute audit and exits non-zero if any check failed.
fn print_audit(ontology: &OntologyGraph) {
    let report = audit(ontology);

    println!("Hazard Attribute Audit");
    println!("======================");
    println!();

    for result in &report.results {
        let status = match result.severity() {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {}: {}", status, result.check.as_str(), result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    println!();
    if !report.all_passed() {
        eprintln!(
            "Audit FAILED: {} check(s) did not pass.",
            report.failure_count()
        );
        process::exit(1);
    }
    println!("Audit PASSED.");
}
