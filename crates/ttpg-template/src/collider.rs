//! # Colliders — Physics Shape Variants
//!
//! A template carries a list of collision shapes. Exactly one of three
//! variants per entry: a convex 3D mesh, an analytic sphere, or a convex
//! shape traced from a 2D image. On the wire the variants share the
//! `Type`/`Model` fields; the typed form keeps each variant's field set
//! separate so mixed entries cannot exist.

use ttpg_core::FilePathRef;

use crate::model::Transform3;

/// One collision shape of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// Convex collision from a 3D mesh (`Type: "Convex"`, mesh path).
    Mesh {
        /// The mesh reference (`.obj`/`.fbx`).
        model: FilePathRef,
        /// Placement relative to the object.
        transform: Transform3,
    },
    /// Analytic sphere (`Type: "Sphere"`, empty `Model`).
    Sphere {
        /// Placement relative to the object.
        transform: Transform3,
        /// Sphere radius.
        radius: f64,
    },
    /// Convex collision traced from a 2D image (`Type: "Convex"`, image
    /// path plus tracing accuracy).
    ImageShape {
        /// The image reference (`.jpg`/`.png`/`.tga`).
        model: FilePathRef,
        /// Silhouette tracing accuracy.
        shape_accuracy: f64,
        /// Placement relative to the object.
        transform: Transform3,
        /// Use convex decomposition for the traced shape.
        convex_collision: bool,
    },
}

impl Collider {
    /// The wire value of the `Type` field for this variant.
    pub fn wire_type(&self) -> &'static str {
        match self {
            Self::Mesh { .. } | Self::ImageShape { .. } => "Convex",
            Self::Sphere { .. } => "Sphere",
        }
    }

    /// The placement shared by every variant.
    pub fn transform(&self) -> &Transform3 {
        match self {
            Self::Mesh { transform, .. }
            | Self::Sphere { transform, .. }
            | Self::ImageShape { transform, .. } => transform,
        }
    }
}
