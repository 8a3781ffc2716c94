//! XACML policy fragments for SIFIS-Home hazards.
//!
//! For every Hazard individual in an ontology, this crate emits an XACML
//! request attribute stub and a policy condition fragment. Hazards that carry
//! a `riskScore` are typed `xsd:integer`; all others are boolean flags.
//!
//! The pipeline runs once per hazard, with no state shared across hazards:
//!
//! | Step | Module |
//! |------|--------|
//! | Choose one or all individuals | [`selector`] |
//! | Skip individuals that are not Hazards | [`generate`] / [`run`] |
//! | Read `attributeId` and `riskScore` | [`extractor`] |
//! | Render the two fragments | [`template`] |
//!
//! # Entry Point
//!
//! ```
//! use sifis_ontology::{iris, Literal, OntologyGraph};
//! use sifis_policy::{generate, Options};
//!
//! let fire = "https://purl.org/sifis/hazards#HighImpactFire";
//! let graph = OntologyGraph::new()
//!     .with_type(fire, iris::HAZARD_CLASS)
//!     .with_assertion(fire, iris::ATTRIBUTE_ID, Literal::plain("HighImpactFire"))
//!     .with_assertion(fire, iris::RISK_SCORE, Literal::plain("9"));
//!
//! let blocks = generate(&graph, &Options::default())?;
//! assert_eq!(blocks.len(), 1);
//! assert!(blocks[0].rendered.policy.contains("integer-greater-than"));
//! # Ok::<(), sifis_policy::PolicyError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fmt;
use std::io::Write;

use sifis_ontology::{iris, HazardIndividual, OntologyFacts};

pub mod audit;
pub mod error;
pub mod extractor;
pub mod selector;
pub mod template;

pub use audit::{audit, AuditReport, AuditResult, Check, Severity};
pub use error::PolicyError;
pub use extractor::{extract, RenderInput};
pub use selector::{hazard_iri, select};
pub use template::{render, Rendered, ValueKind};

/// Line printed after every hazard block.
pub const SEPARATOR: &str = "----------------------------";

/// Options of a generation run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Short name of a single individual; `None` or empty selects all.
    pub individual: Option<String>,
    /// Fail when the selection yields no Hazard instead of printing nothing.
    pub strict: bool,
    /// Fail on hazards without `attributeId` instead of rendering `null`.
    pub require_attribute_id: bool,
}

/// The rendered output for one hazard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HazardBlock {
    /// The hazard the fragments were rendered for.
    pub individual: HazardIndividual,
    /// Request and policy fragments.
    pub rendered: Rendered,
}

impl fmt::Display for HazardBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Individual: {}", self.individual.short_form())?;
        writeln!(f)?;
        writeln!(f, "Request:")?;
        f.write_str(&self.rendered.request)?;
        writeln!(f)?;
        writeln!(f, "Policy:")?;
        f.write_str(&self.rendered.policy)?;
        writeln!(f)?;
        writeln!(f, "{SEPARATOR}")
    }
}

/// Renders the block for `individual`, or `None` if it is not a Hazard.
///
/// # Errors
///
/// Returns [`PolicyError::MissingAttributeId`] when
/// [`Options::require_attribute_id`] is set and the hazard has no identifier.
pub fn process<F>(
    facts: &F,
    individual: &HazardIndividual,
    options: &Options,
) -> Result<Option<HazardBlock>, PolicyError>
where
    F: OntologyFacts + ?Sized,
{
    if !facts.is_type(individual, iris::HAZARD_CLASS) {
        tracing::debug!(individual = %individual, "not a Hazard; skipped");
        return Ok(None);
    }
    let mut input = extract(facts, individual);
    if options.require_attribute_id {
        input = input.require_attribute_id(individual)?;
    } else if input.attribute_id.is_none() {
        tracing::warn!(individual = %individual, "hazard has no attributeId");
    }
    Ok(Some(HazardBlock {
        individual: individual.clone(),
        rendered: render(&input),
    }))
}

/// Renders the blocks of every selected hazard, in IRI order.
///
/// # Errors
///
/// Returns the first error [`process`] reports, or the strict-mode error
/// described in [`check_selection`].
pub fn generate<F>(facts: &F, options: &Options) -> Result<Vec<HazardBlock>, PolicyError>
where
    F: OntologyFacts + ?Sized,
{
    let mut blocks = Vec::new();
    for individual in select(facts, options.individual.as_deref()) {
        if let Some(block) = process(facts, &individual, options)? {
            blocks.push(block);
        }
    }
    check_selection(options, blocks.len())?;
    Ok(blocks)
}

/// Writes the version header and every hazard block to `out`, as each block
/// is rendered. Returns the number of blocks written.
///
/// Blocks written before an error stay written.
///
/// # Errors
///
/// Returns [`PolicyError::Io`] if writing fails, and otherwise the same
/// errors as [`generate`].
pub fn run<F, W>(facts: &F, options: &Options, out: &mut W) -> Result<usize, PolicyError>
where
    F: OntologyFacts + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Ontology Version: {}", facts.ontology_version())?;
    writeln!(out)?;

    let mut written = 0usize;
    for individual in select(facts, options.individual.as_deref()) {
        if let Some(block) = process(facts, &individual, options)? {
            write!(out, "{block}")?;
            written += 1;
        }
    }
    out.flush()?;
    check_selection(options, written)?;
    Ok(written)
}

/// In strict mode, turns an empty result into an error.
///
/// # Errors
///
/// Returns [`PolicyError::NotAHazard`] when a single individual was requested,
/// and [`PolicyError::NoHazards`] otherwise. Never fails when
/// [`Options::strict`] is unset or `count` is non-zero.
pub fn check_selection(options: &Options, count: usize) -> Result<(), PolicyError> {
    if !options.strict || count > 0 {
        return Ok(());
    }
    match options.individual.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => Err(PolicyError::NotAHazard {
            iri: hazard_iri(name),
        }),
        None => Err(PolicyError::NoHazards),
    }
}
