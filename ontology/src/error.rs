//! Errors raised while loading an ontology document.

use std::path::PathBuf;

use thiserror::Error;

use crate::rdf::RdfFormat;

/// Fatal faults at startup: the ontology document is unreachable or malformed.
#[derive(Debug, Error)]
pub enum OntologyError {
    /// The document could not be read.
    #[error("failed to read ontology document {}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// No format was given and the extension does not name one.
    #[error("cannot infer the RDF format of {}; expected .ttl, .nt, .rdf, .owl, or .xml", .0.display())]
    UnknownFormat(PathBuf),
    /// The document is not well-formed in the given format.
    #[error("malformed {format} document: {message}")]
    Parse {
        /// Format the parser expected.
        format: RdfFormat,
        /// Parser diagnostic.
        message: String,
    },
}
