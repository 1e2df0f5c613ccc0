use sha2::{Digest, Sha256};

use crate::diagram::{GridDiagram, Marker};

/// Computes the canonical structural hash of a diagram.
///
/// The name is not hashed: two diagrams with the same markings hash equally.
pub fn canonical_hash(diagram: &GridDiagram) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"gfk-grid-diagram");
    hasher.update([diagram.grid_number()]);
    for marker in [Marker::O, Marker::X] {
        hasher.update(match marker {
            Marker::O => b"O",
            Marker::X => b"X",
        });
        for p in diagram.markers(marker) {
            hasher.update([p.x, p.y]);
        }
    }
    format!("{:x}", hasher.finalize())
}
