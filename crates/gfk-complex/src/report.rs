use gfk_core::serde_io::{from_json_slice, to_canonical_json_bytes};
use gfk_core::{ErrorInfo, GfkError, SchemaVersion};
use gfk_diagram::canonical_hash;
use serde::{Deserialize, Serialize};

use crate::construction::Construction;

/// Number of generators at one bidegree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCount {
    /// Maslov grading.
    pub maslov: i32,
    /// Alexander grading.
    pub alexander: i32,
    /// Generators at this bidegree.
    pub count: usize,
}

/// Serializable overview of a construction's generator distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionSummary {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Name of the diagram.
    pub diagram_name: String,
    /// Canonical hash of the diagram's markings.
    pub diagram_hash: String,
    /// Grid number of the diagram.
    pub grid_number: u8,
    /// Total number of retained generators.
    pub number_of_generators: usize,
    /// Inclusive Maslov range.
    pub maslov_range: (i32, i32),
    /// Inclusive Alexander range.
    pub alexander_range: (i32, i32),
    /// Generator counts per populated bidegree, ascending.
    pub distribution: Vec<BucketCount>,
}

impl ConstructionSummary {
    pub(crate) fn from_construction(construction: &Construction) -> Self {
        let diagram = construction.diagram();
        let maslov = construction.maslov_range();
        let alexander = construction.alexander_range();
        Self {
            schema_version: SchemaVersion::default(),
            diagram_name: diagram.name().to_string(),
            diagram_hash: canonical_hash(diagram),
            grid_number: diagram.grid_number(),
            number_of_generators: construction.number_of_generators(),
            maslov_range: (*maslov.start(), *maslov.end()),
            alexander_range: (*alexander.start(), *alexander.end()),
            distribution: construction
                .buckets()
                .iter()
                .map(|(bidegree, bucket)| BucketCount {
                    maslov: bidegree.maslov,
                    alexander: bidegree.alexander,
                    count: bucket.len(),
                })
                .collect(),
        }
    }

    /// Canonical JSON encoding.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, GfkError> {
        to_canonical_json_bytes(self)
    }

    /// Loads a summary, rejecting payloads from an incompatible schema.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, GfkError> {
        let summary: Self = from_json_slice(bytes)?;
        let current = SchemaVersion::default();
        if !current.is_compatible_with(&summary.schema_version) {
            return Err(GfkError::Serde(
                ErrorInfo::new("schema-version", "summary written by an incompatible schema")
                    .with_context("found", format!("{:?}", summary.schema_version))
                    .with_context("supported", format!("{current:?}")),
            ));
        }
        Ok(summary)
    }
}
