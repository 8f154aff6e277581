//! # Template Base — Fields Shared by Every Variant
//!
//! Every object template, whatever its variant, carries the same common
//! record: identity, physical material properties, behavior flags, a
//! script hook, and the model/collider/light/snap-point collections. All
//! of these fields are required on the wire; none is optional in the host
//! protocol.

use ttpg_core::{Color3, CollisionType, GroundAccessibility, SurfaceType, Vector3};

use crate::collider::Collider;
use crate::light::Light;
use crate::model::Model;
use crate::snap::SnapPoint;

/// The common record shared by all nine template variants.
///
/// Immutable once constructed; the engine never mutates a validated value
/// in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateBase {
    /// Stable identifier assigned by the editor.
    pub guid: String,
    /// Display name.
    pub name: String,
    /// Free-form metadata for scripts.
    pub metadata: String,
    /// Physics collision class (`Static` only on Table templates).
    pub collision_type: CollisionType,
    /// Surface friction coefficient.
    pub friction: f64,
    /// Bounciness.
    pub restitution: f64,
    /// Mass density.
    pub density: f64,
    /// Material family for impact sounds.
    pub surface_type: SurfaceType,
    /// Material roughness.
    pub roughness: f64,
    /// Material metalness.
    pub metallic: f64,
    /// Primary tint color.
    pub primary_color: Color3,
    /// Secondary tint color.
    pub secondary_color: Color3,
    /// Players may flip the object.
    pub flippable: bool,
    /// Object rights itself when dropped.
    pub auto_straighten: bool,
    /// Object participates in snapping.
    pub should_snap: bool,
    /// Script attached to every instance of this template.
    pub script_name: String,
    /// Rendered models (empty for Card templates).
    pub models: Vec<Model>,
    /// Collision shapes (empty for Card templates).
    pub collision: Vec<Collider>,
    /// Attached lights.
    pub lights: Vec<Light>,
    /// Snap points apply in world space rather than object space.
    pub snap_points_global: bool,
    /// Snap points the object exposes.
    pub snap_points: Vec<SnapPoint>,
    /// Camera direction used for the zoom view.
    pub zoom_view_direction: Vector3,
    /// Interaction offered while lying on the ground.
    pub ground_accessibility: GroundAccessibility,
    /// Free-form tags.
    pub tags: Vec<String>,
}
