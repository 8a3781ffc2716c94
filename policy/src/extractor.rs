//! Attribute extraction: identifier and value kind of one hazard.

use sifis_ontology::{iris, HazardIndividual, OntologyFacts};

use crate::error::PolicyError;

/// Everything the template renderer needs to know about a hazard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInput {
    /// Lexical value of the first `attributeId` assertion, if any.
    pub attribute_id: Option<String>,
    /// Whether the hazard carries at least one `riskScore` assertion.
    pub has_risk_score: bool,
}

impl RenderInput {
    /// Creates an input from its parts.
    pub fn new(attribute_id: Option<impl Into<String>>, has_risk_score: bool) -> Self {
        Self {
            attribute_id: attribute_id.map(Into::into),
            has_risk_score,
        }
    }

    /// Rejects inputs without an attribute identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MissingAttributeId`] naming `hazard` when
    /// `attribute_id` is `None`.
    pub fn require_attribute_id(self, hazard: &HazardIndividual) -> Result<Self, PolicyError> {
        if self.attribute_id.is_none() {
            return Err(PolicyError::MissingAttributeId {
                individual: hazard.short_form().to_string(),
            });
        }
        Ok(self)
    }
}

/// Derives the [`RenderInput`] of `hazard` from its property assertions.
///
/// A missing `attributeId` is not an error here; it stays `None`.
pub fn extract<F>(facts: &F, hazard: &HazardIndividual) -> RenderInput
where
    F: OntologyFacts + ?Sized,
{
    let assertions = facts.property_assertions_of(hazard);
    let attribute_id = assertions
        .iter()
        .find(|a| a.property == iris::ATTRIBUTE_ID)
        .map(|a| a.value.lexical.clone());
    let has_risk_score = assertions.iter().any(|a| a.property == iris::RISK_SCORE);
    RenderInput {
        attribute_id,
        has_risk_score,
    }
}

/// Counts the `attributeId` assertions on `hazard`.
pub fn attribute_id_count<F>(facts: &F, hazard: &HazardIndividual) -> usize
where
    F: OntologyFacts + ?Sized,
{
    facts
        .property_assertions_of(hazard)
        .iter()
        .filter(|a| a.property == iris::ATTRIBUTE_ID)
        .count()
}
