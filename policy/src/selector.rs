//! Hazard selection: one requested individual, or every individual.

use std::collections::BTreeSet;

use sifis_ontology::{iris, HazardIndividual, OntologyFacts};

/// Returns the full IRI for a short name in the hazards namespace.
#[must_use]
pub fn hazard_iri(short_name: &str) -> String {
    format!("{}{}", iris::HAZARDS, short_name)
}

/// Resolves the working set of individuals to process.
///
/// An absent or empty `requested` name selects every individual. A non-empty
/// name selects exactly one handle, built without checking that the
/// individual exists or is a Hazard; the caller's type check filters it.
pub fn select<F>(facts: &F, requested: Option<&str>) -> BTreeSet<HazardIndividual>
where
    F: OntologyFacts + ?Sized,
{
    match requested.filter(|name| !name.is_empty()) {
        Some(name) => BTreeSet::from([facts.resolve_individual(&hazard_iri(name))]),
        None => facts.all_individuals(),
    }
}
