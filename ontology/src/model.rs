//! Core ontology model types.
//!
//! These types carry the already-resolved facts the policy generator consumes:
//! named individuals, literal values, and data property assertions. All of
//! them are read-only once constructed.

use std::fmt;

/// A named individual, identified by its full IRI.
///
/// Constructing a handle never checks that the individual exists in any
/// ontology; membership is answered by [`OntologyFacts`](crate::OntologyFacts).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HazardIndividual(String);

impl HazardIndividual {
    /// Creates a handle for the individual with the given full IRI.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the full IRI.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.0
    }

    /// Returns the local part of the IRI (after the last `#`, else after the
    /// last `/`). Falls back to the full IRI when that remainder is empty.
    #[must_use]
    pub fn short_form(&self) -> &str {
        short_form(&self.0)
    }
}

impl fmt::Display for HazardIndividual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the local part of `iri`.
#[must_use]
pub fn short_form(iri: &str) -> &str {
    let local = match iri.rfind('#') {
        Some(pos) => &iri[pos + 1..],
        None => iri.rfind('/').map_or(iri, |pos| &iri[pos + 1..]),
    };
    if local.is_empty() {
        iri
    } else {
        local
    }
}

/// An RDF literal: lexical form plus optional datatype IRI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Lexical form, exactly as written in the document.
    pub lexical: String,
    /// Full IRI of the datatype, or `None` for a plain literal.
    pub datatype: Option<String>,
}

impl Literal {
    /// A plain string literal.
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
        }
    }

    /// A literal with an explicit datatype IRI.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
        }
    }
}

/// A data property assertion `(subject, property, value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAssertion {
    /// The individual the fact is about.
    pub subject: HazardIndividual,
    /// Full IRI of the data property.
    pub property: String,
    /// Literal value.
    pub value: Literal,
}

/// Standard IRI constants used by the hazard ontology.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// SIFIS-Home hazards namespace; short names are appended to it.
    pub const HAZARDS: &str = "https://purl.org/sifis/hazards#";
    /// The `Hazard` class.
    pub const HAZARD_CLASS: &str = "https://purl.org/sifis/hazards#Hazard";
    /// Data property holding the XACML attribute identifier of a hazard.
    pub const ATTRIBUTE_ID: &str = "https://purl.org/sifis/hazards#attributeId";
    /// Data property whose presence marks a hazard as risk-scored.
    pub const RISK_SCORE: &str = "https://purl.org/sifis/hazards#riskScore";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `owl:equivalentClass`.
    pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:NamedIndividual`.
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    /// `owl:versionInfo`.
    pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";

    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// Returns true if `iri` belongs to the RDF, RDFS, OWL, or XSD vocabularies.
    #[must_use]
    pub fn is_builtin(iri: &str) -> bool {
        [OWL, RDF, RDFS, XSD].iter().any(|ns| iri.starts_with(ns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_after_hash() {
        let ind = HazardIndividual::new("https://purl.org/sifis/hazards#FireHazard");
        assert_eq!(ind.short_form(), "FireHazard");
    }

    #[test]
    fn short_form_after_slash() {
        assert_eq!(short_form("https://example.org/things/Flood"), "Flood");
    }

    #[test]
    fn short_form_empty_local_part_keeps_iri() {
        assert_eq!(
            short_form("https://purl.org/sifis/hazards#"),
            "https://purl.org/sifis/hazards#"
        );
    }

    #[test]
    fn builtin_vocabularies() {
        assert!(iris::is_builtin(iris::OWL_NAMED_INDIVIDUAL));
        assert!(iris::is_builtin(iris::RDFS_SUBCLASS_OF));
        assert!(!iris::is_builtin(iris::HAZARD_CLASS));
    }
}
