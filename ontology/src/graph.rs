//! In-memory fact store with a structural reasoner.
//!
//! [`OntologyGraph`] keeps only what the hazard queries need: the ontology
//! header's version, declared named individuals, asserted class memberships,
//! the `rdfs:subClassOf` hierarchy, and literal-valued property assertions.
//! Type queries follow the subclass hierarchy transitively, the same answer a
//! structural (non-direct) OWL reasoner gives for named classes. An
//! `owl:equivalentClass` pair is stored as two subclass edges.

use std::collections::{BTreeMap, BTreeSet};

use crate::facts::OntologyFacts;
use crate::model::{iris, HazardIndividual, Literal, PropertyAssertion};

/// Object position of an ingested triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object<'a> {
    /// An IRI reference.
    Iri(&'a str),
    /// A literal value.
    Literal(Literal),
    /// A blank node or any other term kind the store does not track.
    Other,
}

/// Header IRI used by [`OntologyGraph::with_version`].
const DEFAULT_HEADER: &str = "https://purl.org/sifis/hazards";

/// Resolved facts about one ontology snapshot.
#[derive(Debug, Clone, Default)]
pub struct OntologyGraph {
    headers: BTreeSet<String>,
    version_infos: Vec<(String, String)>,
    declared: BTreeSet<String>,
    types: BTreeMap<String, BTreeSet<String>>,
    superclasses: BTreeMap<String, BTreeSet<String>>,
    assertions: BTreeMap<String, Vec<PropertyAssertion>>,
}

impl OntologyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one triple. Triples that carry nothing the hazard queries use
    /// are dropped.
    pub fn insert(&mut self, subject: &str, predicate: &str, object: Object<'_>) {
        match (predicate, object) {
            (iris::RDF_TYPE, Object::Iri(class)) => match class {
                iris::OWL_ONTOLOGY => {
                    self.headers.insert(subject.to_string());
                }
                iris::OWL_NAMED_INDIVIDUAL => {
                    self.declared.insert(subject.to_string());
                }
                _ => {
                    self.types
                        .entry(subject.to_string())
                        .or_default()
                        .insert(class.to_string());
                }
            },
            (iris::RDFS_SUBCLASS_OF, Object::Iri(parent)) => {
                self.superclasses
                    .entry(subject.to_string())
                    .or_default()
                    .insert(parent.to_string());
            }
            (iris::OWL_EQUIVALENT_CLASS, Object::Iri(other)) => {
                self.superclasses
                    .entry(subject.to_string())
                    .or_default()
                    .insert(other.to_string());
                self.superclasses
                    .entry(other.to_string())
                    .or_default()
                    .insert(subject.to_string());
            }
            (iris::OWL_VERSION_INFO, Object::Literal(lit)) => {
                self.version_infos.push((subject.to_string(), lit.lexical));
            }
            (property, Object::Literal(value)) if !iris::is_builtin(property) => {
                self.assertions
                    .entry(subject.to_string())
                    .or_default()
                    .push(PropertyAssertion {
                        subject: HazardIndividual::new(subject),
                        property: property.to_string(),
                        value,
                    });
            }
            _ => {}
        }
    }

    /// Asserts that `individual` is an instance of `class`.
    #[must_use]
    pub fn with_type(mut self, individual: &str, class: &str) -> Self {
        self.insert(individual, iris::RDF_TYPE, Object::Iri(class));
        self
    }

    /// Asserts `sub rdfs:subClassOf sup`.
    #[must_use]
    pub fn with_subclass(mut self, sub: &str, sup: &str) -> Self {
        self.insert(sub, iris::RDFS_SUBCLASS_OF, Object::Iri(sup));
        self
    }

    /// Asserts a data property value on `individual`.
    #[must_use]
    pub fn with_assertion(mut self, individual: &str, property: &str, value: Literal) -> Self {
        self.insert(individual, property, Object::Literal(value));
        self
    }

    /// Declares `individual` as an `owl:NamedIndividual`.
    #[must_use]
    pub fn declare_individual(mut self, individual: &str) -> Self {
        self.insert(
            individual,
            iris::RDF_TYPE,
            Object::Iri(iris::OWL_NAMED_INDIVIDUAL),
        );
        self
    }

    /// Adds an ontology header carrying `owl:versionInfo`.
    #[must_use]
    pub fn with_version(mut self, version: &str) -> Self {
        self.insert(DEFAULT_HEADER, iris::RDF_TYPE, Object::Iri(iris::OWL_ONTOLOGY));
        self.insert(
            DEFAULT_HEADER,
            iris::OWL_VERSION_INFO,
            Object::Literal(Literal::plain(version)),
        );
        self
    }

    /// Returns the total number of stored property assertions.
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        self.assertions.values().map(Vec::len).sum()
    }

    /// Returns every class `class` is a subclass of, itself included.
    fn ancestors<'a>(&'a self, class: &'a str) -> BTreeSet<&'a str> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![class];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            if let Some(parents) = self.superclasses.get(current) {
                stack.extend(parents.iter().map(String::as_str));
            }
        }
        seen
    }
}

impl OntologyFacts for OntologyGraph {
    fn all_individuals(&self) -> BTreeSet<HazardIndividual> {
        let typed = self
            .types
            .iter()
            .filter(|(_, classes)| classes.iter().any(|c| !iris::is_builtin(c)))
            .map(|(subject, _)| subject);
        self.declared
            .iter()
            .chain(typed)
            .map(HazardIndividual::new)
            .collect()
    }

    fn is_type(&self, individual: &HazardIndividual, class_iri: &str) -> bool {
        self.types.get(individual.iri()).is_some_and(|asserted| {
            asserted
                .iter()
                .any(|class| self.ancestors(class).contains(class_iri))
        })
    }

    fn property_assertions_of(&self, individual: &HazardIndividual) -> Vec<PropertyAssertion> {
        self.assertions
            .get(individual.iri())
            .cloned()
            .unwrap_or_default()
    }

    fn ontology_version(&self) -> String {
        self.version_infos
            .iter()
            .find(|(subject, _)| self.headers.contains(subject))
            .map_or_else(|| "-".to_string(), |(_, version)| version.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRE: &str = "https://purl.org/sifis/hazards#FireHazard";
    const FIRE_CLASS: &str = "https://purl.org/sifis/hazards#FireHazardClass";
    const SAFETY: &str = "https://purl.org/sifis/hazards#Safety";

    fn ind(iri: &str) -> HazardIndividual {
        HazardIndividual::new(iri)
    }

    #[test]
    fn direct_type() {
        let g = OntologyGraph::new().with_type(FIRE, iris::HAZARD_CLASS);
        assert!(g.is_type(&ind(FIRE), iris::HAZARD_CLASS));
    }

    #[test]
    fn type_through_subclass_chain() {
        let g = OntologyGraph::new()
            .with_type(FIRE, FIRE_CLASS)
            .with_subclass(FIRE_CLASS, SAFETY)
            .with_subclass(SAFETY, iris::HAZARD_CLASS);
        assert!(g.is_type(&ind(FIRE), iris::HAZARD_CLASS));
    }

    #[test]
    fn type_through_equivalent_class() {
        let risk = "https://purl.org/sifis/hazards#Risk";
        let mut g = OntologyGraph::new().with_type(FIRE, risk);
        g.insert(risk, iris::OWL_EQUIVALENT_CLASS, Object::Iri(iris::HAZARD_CLASS));
        assert!(g.is_type(&ind(FIRE), iris::HAZARD_CLASS));

        let mut reversed = OntologyGraph::new().with_type(FIRE, risk);
        reversed.insert(iris::HAZARD_CLASS, iris::OWL_EQUIVALENT_CLASS, Object::Iri(risk));
        assert!(reversed.is_type(&ind(FIRE), iris::HAZARD_CLASS));
    }

    #[test]
    fn subclass_cycle_terminates() {
        let g = OntologyGraph::new()
            .with_type(FIRE, FIRE_CLASS)
            .with_subclass(FIRE_CLASS, SAFETY)
            .with_subclass(SAFETY, FIRE_CLASS);
        assert!(!g.is_type(&ind(FIRE), iris::HAZARD_CLASS));
    }

    #[test]
    fn unknown_individual_has_no_type() {
        let g = OntologyGraph::new();
        assert!(!g.is_type(&ind(FIRE), iris::HAZARD_CLASS));
        assert!(g.property_assertions_of(&ind(FIRE)).is_empty());
    }

    #[test]
    fn individuals_exclude_classes_and_properties() {
        let g = OntologyGraph::new()
            .with_type(FIRE_CLASS, "http://www.w3.org/2002/07/owl#Class")
            .with_type(iris::RISK_SCORE, "http://www.w3.org/2002/07/owl#DatatypeProperty")
            .with_type(FIRE, FIRE_CLASS)
            .declare_individual("https://purl.org/sifis/hazards#Untyped");
        let all: Vec<_> = g.all_individuals().into_iter().collect();
        assert_eq!(
            all,
            vec![ind(FIRE), ind("https://purl.org/sifis/hazards#Untyped")]
        );
    }

    #[test]
    fn assertions_keep_document_order() {
        let g = OntologyGraph::new()
            .with_assertion(FIRE, iris::ATTRIBUTE_ID, Literal::plain("first"))
            .with_assertion(FIRE, iris::RISK_SCORE, Literal::typed("3", iris::XSD_INTEGER))
            .with_assertion(FIRE, iris::ATTRIBUTE_ID, Literal::plain("second"));
        let values: Vec<_> = g
            .property_assertions_of(&ind(FIRE))
            .into_iter()
            .map(|a| a.value.lexical)
            .collect();
        assert_eq!(values, vec!["first", "3", "second"]);
        assert_eq!(g.assertion_count(), 3);
    }

    #[test]
    fn version_defaults_to_dash() {
        assert_eq!(OntologyGraph::new().ontology_version(), "-");
    }

    #[test]
    fn version_requires_ontology_header() {
        let mut g = OntologyGraph::new();
        g.insert(
            "https://example.org/not-a-header",
            iris::OWL_VERSION_INFO,
            Object::Literal(Literal::plain("9.9")),
        );
        assert_eq!(g.ontology_version(), "-");
        assert_eq!(g.with_version("1.2.0").ontology_version(), "1.2.0");
    }

    #[test]
    fn iri_valued_properties_are_not_assertions() {
        let mut g = OntologyGraph::new();
        g.insert(FIRE, iris::ATTRIBUTE_ID, Object::Iri(SAFETY));
        g.insert(FIRE, iris::RISK_SCORE, Object::Other);
        assert_eq!(g.assertion_count(), 0);
    }
}
