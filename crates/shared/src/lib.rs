use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier of a tube in the scene
pub type TubeId = String;

/// Error for rejected tube dimensions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensionError {
    /// A dimension that must be strictly positive was zero or negative.
    #[error("{what} must be positive")]
    NonPositive {
        /// Name of the offending dimension
        what: &'static str,
    },
    /// Wall thickness would leave no material or an inverted inner cavity.
    #[error("wall thickness {thickness} must be below {limit} (half of the smaller cross-section side)")]
    ThicknessTooLarge {
        /// The rejected thickness
        thickness: f64,
        /// Exclusive upper bound: min(width, height) / 2
        limit: f64,
    },
}

/// Cross-section shape of a tube
///
/// Square tubes carry a single side length, so width = height holds by
/// construction rather than by an update-time side effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TubeKind {
    Square {
        size: f64,
    },
    Rectangular {
        width: f64,
        height: f64,
    },
}

impl TubeKind {
    /// Cross-section width (X extent)
    pub fn width(&self) -> f64 {
        match *self {
            Self::Square { size } => size,
            Self::Rectangular { width, .. } => width,
        }
    }

    /// Cross-section height (Y extent)
    pub fn height(&self) -> f64 {
        match *self {
            Self::Square { size } => size,
            Self::Rectangular { height, .. } => height,
        }
    }

    /// Convert to a square cross-section, keeping the current width
    pub fn to_square(self) -> Self {
        Self::Square { size: self.width() }
    }

    /// Convert to a rectangular cross-section with the current extents
    pub fn to_rectangular(self) -> Self {
        Self::Rectangular {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Tube profile: cross-section, length along Z, wall thickness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeSpec {
    pub kind: TubeKind,
    pub length: f64,
    pub thickness: f64,
}

impl TubeSpec {
    /// Cross-section width (X extent)
    pub fn width(&self) -> f64 {
        self.kind.width()
    }

    /// Cross-section height (Y extent)
    pub fn height(&self) -> f64 {
        self.kind.height()
    }

    /// Inner cavity width after subtracting both walls
    pub fn inner_width(&self) -> f64 {
        self.width() - 2.0 * self.thickness
    }

    /// Inner cavity height after subtracting both walls
    pub fn inner_height(&self) -> f64 {
        self.height() - 2.0 * self.thickness
    }

    /// Set the cross-section width. For square tubes this resizes both axes.
    pub fn set_width(&mut self, width: f64) {
        match &mut self.kind {
            TubeKind::Square { size } => *size = width,
            TubeKind::Rectangular { width: w, .. } => *w = width,
        }
    }

    /// Set the cross-section height.
    ///
    /// Square tubes have no independent height; returns false and leaves the
    /// spec untouched.
    pub fn set_height(&mut self, height: f64) -> bool {
        match &mut self.kind {
            TubeKind::Square { .. } => false,
            TubeKind::Rectangular { height: h, .. } => {
                *h = height;
                true
            }
        }
    }

    /// Check that the profile describes a valid hollow tube
    pub fn validate(&self) -> Result<(), DimensionError> {
        if self.width() <= 0.0 {
            return Err(DimensionError::NonPositive { what: "width" });
        }
        if self.height() <= 0.0 {
            return Err(DimensionError::NonPositive { what: "height" });
        }
        if self.length <= 0.0 {
            return Err(DimensionError::NonPositive { what: "length" });
        }
        if self.thickness <= 0.0 {
            return Err(DimensionError::NonPositive { what: "thickness" });
        }
        let limit = self.width().min(self.height()) / 2.0;
        if self.thickness >= limit {
            return Err(DimensionError::ThicknessTooLarge {
                thickness: self.thickness,
                limit,
            });
        }
        Ok(())
    }
}

impl Default for TubeSpec {
    fn default() -> Self {
        Self {
            kind: TubeKind::Rectangular {
                width: 1.0,
                height: 1.0,
            },
            length: 3.0,
            thickness: 0.1,
        }
    }
}

/// Object transform
///
/// Rotation angles are in degrees, applied about X, then Y, then Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// True when the transform is invertible (no zero scale component)
    pub fn is_invertible(&self) -> bool {
        self.scale.iter().all(|&s| s != 0.0)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Active manipulator mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// View toggles carried in the editable state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewSettings {
    pub wireframe: bool,
    pub transform_mode: TransformMode,
}

/// One recorded joint subtraction
///
/// Freezes everything the replay needs: the tool tube's profile, the tool's
/// world transform, and the cut tube's own world transform at the moment the
/// joint was made. Later edits to the tool tube do not reach back into
/// already-cut geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointCut {
    pub id: String,
    pub tool_spec: TubeSpec,
    pub tool_transform: Transform,
    pub base_transform: Transform,
}

/// A tube entity in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tube {
    pub id: TubeId,
    pub name: String,
    pub spec: TubeSpec,
    pub transform: Transform,
    pub visible: bool,
    /// Joint cuts applied to this tube, in the order they were made
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuts: Vec<JointCut>,
}

/// The full editable state: tube list, selection, view toggles.
///
/// This is the unit of history: undo/redo snapshots capture and restore the
/// whole description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    pub tubes: Vec<Tube>,
    pub selected: Option<TubeId>,
    #[serde(default)]
    pub view: ViewSettings,
}
