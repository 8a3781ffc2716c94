//! SIFIS-Home hazard ontology facts.
//!
//! The `sifis-ontology` crate answers the handful of questions the policy
//! generator asks about an ontology snapshot: which named individuals exist,
//! whether one of them is a `Hazard`, which data property values it carries,
//! and which version the ontology declares.
//!
//! # Entry Point
//!
//! ```
//! use sifis_ontology::{iris, HazardIndividual, OntologyFacts, OntologyGraph};
//!
//! let graph = OntologyGraph::new()
//!     .with_version("1.0")
//!     .with_type("https://purl.org/sifis/hazards#Smoke", iris::HAZARD_CLASS);
//! let smoke = HazardIndividual::new("https://purl.org/sifis/hazards#Smoke");
//! assert!(graph.is_type(&smoke, iris::HAZARD_CLASS));
//! assert_eq!(graph.ontology_version(), "1.0");
//! ```
//!
//! # Loading
//!
//! ```no_run
//! use std::path::Path;
//!
//! let graph = sifis_ontology::rdf::load_path(Path::new("ontology.rdf"), None)?;
//! # Ok::<(), sifis_ontology::OntologyError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod facts;
pub mod graph;
pub mod model;
pub mod rdf;

pub use error::OntologyError;
pub use facts::OntologyFacts;
pub use graph::{Object, OntologyGraph};
pub use model::{iris, short_form, HazardIndividual, Literal, PropertyAssertion};
pub use rdf::RdfFormat;
