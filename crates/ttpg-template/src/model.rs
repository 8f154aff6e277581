//! # Model Structures — Static and Multistate Geometry
//!
//! A template renders through a list of models. A static [`Model`] sources
//! its geometry either from a 3D mesh or from a 2D image silhouette; a
//! [`ModelMultistate`] (used by multistate objects) combines two
//! *independent* choices — where its silhouette comes from, and where its
//! per-state textures come from. Modeling each choice as its own sum type
//! makes illegal branch mixtures unrepresentable.

use ttpg_core::{CardSilhouette, FilePathRef, SurfaceType, Vector3};

/// Combined mesh-and-image extension set, for diagnostics on geometry
/// fields where either role would be legal.
pub const GEOMETRY_EXTENSIONS: &[&str] = &["obj", "fbx", "jpg", "png", "tga"];

/// Combined document-and-image extension set, for diagnostics on the
/// multistate texture field where either role would be legal.
pub const MULTISTATE_TEXTURE_EXTENSIONS: &[&str] = &["pdf", "jpg", "png", "tga"];

/// Placement of a model or collider relative to its object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3 {
    /// Translation offset.
    pub offset: Vector3,
    /// Per-axis scale.
    pub scale: Vector3,
    /// Euler rotation in degrees.
    pub rotation: Vector3,
}

impl Transform3 {
    /// Identity placement: zero offset and rotation, unit scale.
    pub const IDENTITY: Transform3 = Transform3 {
        offset: Vector3::ZERO,
        scale: Vector3::ONE,
        rotation: Vector3::ZERO,
    };
}

/// Where a static model's geometry comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelGeometry {
    /// A 3D mesh reference (`.obj`/`.fbx`).
    Mesh(FilePathRef),
    /// A 2D image silhouette (`.jpg`/`.png`/`.tga`) traced into geometry
    /// at the given accuracy.
    Image {
        /// The image reference.
        model: FilePathRef,
        /// Silhouette tracing accuracy.
        shape_accuracy: f64,
    },
}

/// A static rendered model.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Geometry source (the 3D/2D discriminant).
    pub geometry: ModelGeometry,
    /// Placement relative to the object.
    pub transform: Transform3,
    /// Base texture name (opaque to the engine).
    pub texture: String,
    /// Normal map name.
    pub normal_map: String,
    /// First extra map name.
    pub extra_map: String,
    /// Second extra map name.
    pub extra_map2: String,
    /// Render with transparency.
    pub is_transparent: bool,
    /// Cast dynamic shadows.
    pub cast_shadow: bool,
    /// Render both faces.
    pub is_two_sided: bool,
    /// Use per-object color/material overrides.
    pub use_overrides: bool,
    /// Material family for impact sounds.
    pub surface_type: SurfaceType,
}

/// Where a multistate model's silhouette comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum MultistateSilhouette {
    /// One of the built-in card silhouettes.
    Card(CardSilhouette),
    /// A custom image silhouette traced at the given accuracy.
    Image {
        /// The image reference.
        model: FilePathRef,
        /// Silhouette tracing accuracy.
        shape_accuracy: f64,
    },
}

/// Where a multistate model's per-state textures come from.
#[derive(Debug, Clone, PartialEq)]
pub enum MultistateTexture {
    /// One state per page of a document (`.pdf`).
    Document(FilePathRef),
    /// A sprite-sheet image cut into a grid of states.
    Sheet {
        /// The sheet image reference.
        texture: FilePathRef,
        /// Grid columns.
        num_horizontal: u32,
        /// Grid rows.
        num_vertical: u32,
        /// Optional dedicated back texture (empty on the wire means unset).
        back_texture: Option<FilePathRef>,
        /// Sheet index used for the back face.
        back_index: i64,
    },
}

/// A model whose appearance switches between indexed states.
///
/// The silhouette and texture sources are independent discriminants; all
/// four combinations are legal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMultistate {
    /// Silhouette source (first discriminant).
    pub silhouette: MultistateSilhouette,
    /// Texture source (second discriminant).
    pub texture: MultistateTexture,
    /// Placement relative to the object.
    pub transform: Transform3,
    /// Optional normal map image.
    pub normal_map: Option<FilePathRef>,
    /// Optional first extra map image.
    pub extra_map: Option<FilePathRef>,
    /// Optional second extra map image.
    pub extra_map2: Option<FilePathRef>,
    /// Render with transparency.
    pub is_transparent: bool,
    /// Cast dynamic shadows.
    pub cast_shadow: bool,
    /// Render both faces.
    pub is_two_sided: bool,
    /// Use per-object color/material overrides.
    pub use_overrides: bool,
    /// Material family for impact sounds.
    pub surface_type: SurfaceType,
    /// Render on the thin built-in card geometry.
    pub use_card_model: bool,
    /// Which state indices this model exposes.
    pub indices: Vec<u32>,
    /// Emissive rendering.
    pub emissive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttpg_core::FileRole;

    #[test]
    fn test_identity_transform() {
        let t = Transform3::IDENTITY;
        assert_eq!(t.offset, Vector3::ZERO);
        assert_eq!(t.scale, Vector3::ONE);
        assert_eq!(t.rotation, Vector3::ZERO);
    }

    #[test]
    fn test_geometry_extension_sets_cover_roles() {
        for ext in FileRole::Mesh.allowed_extensions() {
            assert!(GEOMETRY_EXTENSIONS.contains(ext));
        }
        for ext in FileRole::Image.allowed_extensions() {
            assert!(GEOMETRY_EXTENSIONS.contains(ext));
            assert!(MULTISTATE_TEXTURE_EXTENSIONS.contains(ext));
        }
        for ext in FileRole::Document.allowed_extensions() {
            assert!(MULTISTATE_TEXTURE_EXTENSIONS.contains(ext));
        }
    }
}
