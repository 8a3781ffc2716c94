//! RDF document loader.
//!
//! Parses Turtle 1.1, N-Triples, or RDF/XML with the sophia toolkit and
//! streams each triple into an [`OntologyGraph`].

use std::fmt;
use std::fs;
use std::path::Path;

use sophia_api::prelude::*;

use crate::error::OntologyError;
use crate::facts::OntologyFacts;
use crate::graph::{Object, OntologyGraph};
use crate::model::Literal;

/// Serialization of an ontology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    /// Turtle 1.1 (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
    /// RDF/XML (`.rdf`, `.owl`, `.xml`).
    RdfXml,
}

impl RdfFormat {
    /// Infers the format from a file extension. Returns `None` for unknown
    /// extensions.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ttl" => Some(Self::Turtle),
            "nt" => Some(Self::NTriples),
            "rdf" | "owl" | "xml" => Some(Self::RdfXml),
            _ => None,
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Turtle => "Turtle",
            Self::NTriples => "N-Triples",
            Self::RdfXml => "RDF/XML",
        })
    }
}

/// Loads the ontology document at `path`.
///
/// When `format` is `None` it is inferred from the file extension.
///
/// # Errors
///
/// Returns [`OntologyError::UnknownFormat`] if no format is given and the
/// extension is not recognised, [`OntologyError::Io`] if the file cannot be
/// read, and [`OntologyError::Parse`] if the document is malformed.
pub fn load_path(path: &Path, format: Option<RdfFormat>) -> Result<OntologyGraph, OntologyError> {
    let format = match format {
        Some(format) => format,
        None => RdfFormat::from_path(path)
            .ok_or_else(|| OntologyError::UnknownFormat(path.to_path_buf()))?,
    };
    let text = fs::read_to_string(path).map_err(|source| OntologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_str(&text, format)?;
    tracing::info!(
        path = %path.display(),
        %format,
        individuals = graph.all_individuals().len(),
        assertions = graph.assertion_count(),
        "loaded ontology"
    );
    Ok(graph)
}

/// Parses an ontology document held in memory.
///
/// Triples are fed to the store in parser stream order, so property
/// assertions keep their document order.
///
/// # Errors
///
/// Returns [`OntologyError::Parse`] if the document is malformed.
pub fn parse_str(text: &str, format: RdfFormat) -> Result<OntologyGraph, OntologyError> {
    let mut store = OntologyGraph::new();
    let streamed = match format {
        RdfFormat::Turtle => sophia_turtle::parser::turtle::parse_str(text)
            .for_each_triple(|t| ingest(&mut store, &t))
            .map_err(|e| e.to_string()),
        RdfFormat::NTriples => sophia_turtle::parser::nt::parse_str(text)
            .for_each_triple(|t| ingest(&mut store, &t))
            .map_err(|e| e.to_string()),
        RdfFormat::RdfXml => sophia_xml::parser::parse_str(text)
            .for_each_triple(|t| ingest(&mut store, &t))
            .map_err(|e| e.to_string()),
    };
    streamed.map_err(|message| OntologyError::Parse { format, message })?;
    Ok(store)
}

/// Records `triple` if its subject and predicate are IRIs.
fn ingest<T: Triple>(store: &mut OntologyGraph, triple: &T) {
    let (s, p) = (triple.s(), triple.p());
    let (Some(subject), Some(predicate)) = (s.iri(), p.iri()) else {
        return;
    };
    let o = triple.o();
    let object_iri = o.iri();
    let object = match (&object_iri, o.lexical_form()) {
        (Some(iri), _) => Object::Iri(iri.as_str()),
        (None, Some(lexical)) => Object::Literal(Literal {
            lexical: lexical.to_string(),
            datatype: o.datatype().map(|dt| dt.as_str().to_string()),
        }),
        (None, None) => Object::Other,
    };
    store.insert(subject.as_str(), predicate.as_str(), object);
}
