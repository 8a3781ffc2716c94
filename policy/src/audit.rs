//! Attribute audit over the hazards of an ontology.
//!
//! Rendering tolerates identifier problems silently: a missing `attributeId`
//! becomes `null`, and a repeated one is reduced to its first value. The
//! audit names each such hazard, and fails when two hazards share an
//! identifier, since their request attributes would collide.

use std::collections::BTreeMap;

use sifis_ontology::{iris, HazardIndividual, OntologyFacts};

use crate::extractor::{attribute_id_count, extract};

/// Severity level of an audit result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Non-blocking.
    Warning,
    /// Blocks the audit.
    Failure,
}

/// The identifier checks the audit runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Totals of integer and boolean hazards.
    Summary,
    /// A hazard has no `attributeId`.
    MissingAttributeId,
    /// A hazard has more than one `attributeId`.
    RepeatedAttributeId,
    /// Several hazards share one `attributeId`.
    SharedAttributeId,
}

impl Check {
    /// Returns the label printed for this check.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Check::Summary => "hazards/summary",
            Check::MissingAttributeId => "attributeId/missing",
            Check::RepeatedAttributeId => "attributeId/repeated",
            Check::SharedAttributeId => "attributeId/shared",
        }
    }

    /// Returns the severity every result of this check carries.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Check::Summary => Severity::Pass,
            Check::MissingAttributeId | Check::RepeatedAttributeId => Severity::Warning,
            Check::SharedAttributeId => Severity::Failure,
        }
    }
}

/// A single audit result.
#[derive(Debug, Clone)]
pub struct AuditResult {
    /// Check that produced this result.
    pub check: Check,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Short forms of the hazards involved, when more than one.
    pub details: Vec<String>,
}

impl AuditResult {
    /// Returns the severity of the producing check.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.check.severity()
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity() == Severity::Failure
    }
}

/// Aggregated audit results.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// All individual results.
    pub results: Vec<AuditResult>,
}

impl AuditReport {
    fn record(&mut self, check: Check, message: String, details: Vec<String>) {
        self.results.push(AuditResult {
            check,
            message,
            details,
        });
    }

    /// Returns the count of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Audits the `attributeId` of every Hazard individual in `facts`.
pub fn audit<F>(facts: &F) -> AuditReport
where
    F: OntologyFacts + ?Sized,
{
    let mut report = AuditReport::default();
    let hazards: Vec<HazardIndividual> = facts
        .all_individuals()
        .into_iter()
        .filter(|ind| facts.is_type(ind, iris::HAZARD_CLASS))
        .collect();

    let mut owners: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    let mut scored = 0usize;
    for hazard in &hazards {
        let input = extract(facts, hazard);
        if input.has_risk_score {
            scored += 1;
        }
        match input.attribute_id {
            Some(id) => owners.entry(id).or_default().push(hazard.short_form()),
            None => report.record(
                Check::MissingAttributeId,
                format!(
                    "{} has no attributeId; it renders as \"null\"",
                    hazard.short_form()
                ),
                Vec::new(),
            ),
        }
        let count = attribute_id_count(facts, hazard);
        if count > 1 {
            report.record(
                Check::RepeatedAttributeId,
                format!(
                    "{} has {} attributeId values; only the first is used",
                    hazard.short_form(),
                    count
                ),
                Vec::new(),
            );
        }
    }

    for (id, holders) in owners.iter().filter(|(_, h)| h.len() > 1) {
        report.record(
            Check::SharedAttributeId,
            format!("attributeId \"{}\" is shared by {} hazards", id, holders.len()),
            holders.iter().map(|h| (*h).to_string()).collect(),
        );
    }

    report.record(
        Check::Summary,
        format!(
            "{} hazards audited ({} integer, {} boolean)",
            hazards.len(),
            scored,
            hazards.len() - scored
        ),
        Vec::new(),
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use sifis_ontology::{Literal, OntologyGraph};

    const NS: &str = "https://purl.org/sifis/hazards#";

    fn hazard(g: OntologyGraph, name: &str, id: Option<&str>) -> OntologyGraph {
        let iri = format!("{NS}{name}");
        let g = g.with_type(&iri, iris::HAZARD_CLASS);
        match id {
            Some(id) => g.with_assertion(&iri, iris::ATTRIBUTE_ID, Literal::plain(id)),
            None => g,
        }
    }

    fn checks(report: &AuditReport) -> Vec<Check> {
        report.results.iter().map(|r| r.check).collect()
    }

    #[test]
    fn clean_ontology_passes() {
        let g = hazard(OntologyGraph::new(), "Fire", Some("fire"));
        let g = hazard(g, "Smoke", Some("smoke"));
        let report = audit(&g);
        assert!(report.all_passed());
        assert_eq!(checks(&report), vec![Check::Summary]);
        assert_eq!(report.results[0].severity(), Severity::Pass);
    }

    #[test]
    fn missing_id_warns() {
        let g = hazard(OntologyGraph::new(), "Fire", None);
        let report = audit(&g);
        assert!(report.all_passed());
        assert_eq!(
            checks(&report),
            vec![Check::MissingAttributeId, Check::Summary]
        );
        assert!(report.results[0].message.starts_with("Fire "));
        assert_eq!(report.results[0].severity(), Severity::Warning);
    }

    #[test]
    fn shared_id_fails() {
        let g = hazard(OntologyGraph::new(), "Fire", Some("dup"));
        let g = hazard(g, "Smoke", Some("dup"));
        let report = audit(&g);
        assert_eq!(report.failure_count(), 1);
        let failure = report.results.iter().find(|r| r.is_failure());
        assert_eq!(failure.map(|r| r.check), Some(Check::SharedAttributeId));
        assert_eq!(
            failure.map(|r| r.details.clone()),
            Some(vec!["Fire".to_string(), "Smoke".to_string()])
        );
    }

    #[test]
    fn repeated_id_warns() {
        let g = hazard(OntologyGraph::new(), "Fire", Some("a")).with_assertion(
            &format!("{NS}Fire"),
            iris::ATTRIBUTE_ID,
            Literal::plain("b"),
        );
        let report = audit(&g);
        assert!(report.all_passed());
        assert_eq!(
            checks(&report),
            vec![Check::RepeatedAttributeId, Check::Summary]
        );
        assert!(report.results[0].message.contains("2 attributeId values"));
    }

    #[test]
    fn non_hazards_are_not_audited() {
        let g = OntologyGraph::new().with_type(&format!("{NS}Kitchen"), "https://example.org/Room");
        let report = audit(&g);
        assert_eq!(checks(&report), vec![Check::Summary]);
        assert!(report.results[0].message.starts_with("0 hazards"));
    }
}
