use gfk_core::GfkError;

use crate::diagram::GridDiagram;

/// Serializes the diagram to a compact binary representation using `bincode`.
pub fn diagram_to_bytes(diagram: &GridDiagram) -> Result<Vec<u8>, GfkError> {
    bincode::serialize(diagram).map_err(|err| GfkError::serde("serialize-bytes", err))
}

/// Restores a diagram from its binary representation, re-validating the markings.
pub fn diagram_from_bytes(bytes: &[u8]) -> Result<GridDiagram, GfkError> {
    bincode::deserialize(bytes).map_err(|err| GfkError::serde("deserialize-bytes", err))
}

/// Serializes the diagram to a JSON string.
pub fn diagram_to_json(diagram: &GridDiagram) -> Result<String, GfkError> {
    serde_json::to_string_pretty(diagram).map_err(|err| GfkError::serde("serialize-json", err))
}

/// Restores a diagram from a JSON string, re-validating the markings.
pub fn diagram_from_json(json: &str) -> Result<GridDiagram, GfkError> {
    serde_json::from_str(json).map_err(|err| GfkError::serde("deserialize-json", err))
}
