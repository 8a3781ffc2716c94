//! Errors surfaced by the policy generator.

use thiserror::Error;

/// Failures of a generation run.
///
/// With default options only [`PolicyError::Io`] can occur; the other
/// variants are opt-in strict checks.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The requested individual is absent or not typed as a Hazard.
    #[error("individual {iri} is not a Hazard in this ontology")]
    NotAHazard {
        /// Full IRI that was requested.
        iri: String,
    },
    /// A run over all individuals matched no Hazard.
    #[error("the ontology contains no Hazard individuals")]
    NoHazards,
    /// A hazard has no `attributeId` assertion.
    #[error("hazard {individual} has no attributeId")]
    MissingAttributeId {
        /// Short form of the hazard.
        individual: String,
    },
    /// Writing the output failed.
    #[error("failed to write policy output")]
    Io(#[from] std::io::Error),
}
