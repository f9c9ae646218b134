//! Display helper functions for tubes

use shared::{Tube, TubeKind};

/// Get display name for a tube
pub fn tube_display_name(tube: &Tube) -> String {
    let kind = match tube.spec.kind {
        TubeKind::Square { .. } => "square",
        TubeKind::Rectangular { .. } => "rectangular",
    };
    format!("{} [{}] ({})", tube.name, kind, short_id(&tube.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    if id.len() > 8 {
        &id[..8]
    } else {
        id
    }
}
