//! The ontology collaborator contract.

use std::collections::BTreeSet;

use crate::model::{HazardIndividual, PropertyAssertion};

/// Resolved facts about an ontology snapshot.
///
/// Every query is side-effect free: for a fixed snapshot the same call
/// always returns the same answer.
pub trait OntologyFacts {
    /// Builds a handle for `iri`. Does not check that the individual exists.
    fn resolve_individual(&self, iri: &str) -> HazardIndividual {
        HazardIndividual::new(iri)
    }

    /// Returns every named individual in the ontology signature.
    fn all_individuals(&self) -> BTreeSet<HazardIndividual>;

    /// Returns true if `individual` is an instance of `class_iri`, directly or
    /// through the class hierarchy.
    fn is_type(&self, individual: &HazardIndividual, class_iri: &str) -> bool;

    /// Returns the data property assertions whose subject is `individual`,
    /// in document order.
    fn property_assertions_of(&self, individual: &HazardIndividual) -> Vec<PropertyAssertion>;

    /// Returns the ontology's `owl:versionInfo`, or `"-"` when it has none.
    fn ontology_version(&self) -> String;
}
