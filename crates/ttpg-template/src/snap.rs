//! # Snap Points and Die Faces
//!
//! Small positional compound structures: the snap points an object exposes,
//! and the named faces of a die. Both flatten their position into top-level
//! `X`/`Y`/`Z` wire fields.

use ttpg_core::{SnapFlipValidity, SnapRotation, SnapShape, Vector3};

/// The volume shape of a snap point, with the box shape's extra extent.
///
/// Invariant: the secondary range exists iff the shape is a box. Sphere and
/// cylinder share the single-`Range` field set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapShapeSpec {
    /// Spherical snap volume.
    Sphere,
    /// Cylindrical snap volume.
    Cylinder,
    /// Box snap volume with a second extent.
    Box {
        /// Extent along the box's secondary axis.
        secondary_range: f64,
    },
}

impl SnapShapeSpec {
    /// The wire code of the underlying shape.
    pub fn shape(&self) -> SnapShape {
        match self {
            Self::Sphere => SnapShape::Sphere,
            Self::Cylinder => SnapShape::Cylinder,
            Self::Box { .. } => SnapShape::Box,
        }
    }
}

/// A point other objects snap to.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPoint {
    /// Position relative to the object (wire-flattened `X`/`Y`/`Z`).
    pub position: Vector3,
    /// Snap capture radius.
    pub range: f64,
    /// How a snapping object rotates.
    pub rotation: SnapRotation,
    /// Which orientations may snap.
    pub flip_validity: SnapFlipValidity,
    /// Free-form tags filtering which objects snap here.
    pub tags: Vec<String>,
    /// Volume shape (box carries the secondary range).
    pub shape: SnapShapeSpec,
}

/// One face of a die: a direction vector plus the face's name and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DieFace {
    /// Face direction relative to the die (wire-flattened `X`/`Y`/`Z`).
    pub position: Vector3,
    /// Face label shown to players.
    pub name: String,
    /// Free-form metadata attached to the face.
    pub metadata: String,
}
