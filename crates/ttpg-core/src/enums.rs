//! # Enumerated Constant Tables — Host Protocol Closed Sets
//!
//! The host platform's protocol fixes several closed sets of named codes.
//! Each set is a plain Rust enum here, with a stable mapping between the
//! symbolic name and the wire value. The tables are process-wide constants;
//! no caller can register additional members.
//!
//! Two wire kinds exist:
//!
//! - **String-wire** tables (`CollisionType`, `SurfaceType`,
//!   `GroundAccessibility`, `CardSilhouette`): the symbolic name *is* the
//!   wire value. `as_str()` resolves name → wire, `FromStr` resolves
//!   wire → name, rejecting unknown members.
//! - **Integer-wire** tables (`SnapRotation`, `SnapShape`,
//!   `SnapFlipValidity`): `wire()` resolves name → code, `from_wire()`
//!   resolves code → name, rejecting unmapped values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViolationKind;

// ─── String-wire tables ──────────────────────────────────────────────

/// How the physics engine treats an object's collision.
///
/// `Static` is a special wire value only legal on Table templates; the
/// validation engine enforces that restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionType {
    /// Normal dynamic collision.
    Regular,
    /// Object acts as ground for other objects.
    Ground,
    /// Other objects may pass through.
    Penetrable,
    /// Immovable scenery (Table templates only).
    Static,
}

impl CollisionType {
    /// All members in canonical order.
    pub fn all() -> &'static [CollisionType] {
        &[Self::Regular, Self::Ground, Self::Penetrable, Self::Static]
    }

    /// The wire spelling of this member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Ground => "Ground",
            Self::Penetrable => "Penetrable",
            Self::Static => "Static",
        }
    }
}

/// The material family driving impact sounds and default physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    /// Plastic surface.
    Plastic,
    /// Wood surface.
    Wood,
    /// Metal surface.
    Metal,
    /// Cardboard surface.
    Cardboard,
    /// Cloth surface.
    Cloth,
    /// Glass surface.
    Glass,
    /// No impact sound at all.
    Silent,
}

impl SurfaceType {
    /// All members in canonical order.
    pub fn all() -> &'static [SurfaceType] {
        &[
            Self::Plastic,
            Self::Wood,
            Self::Metal,
            Self::Cardboard,
            Self::Cloth,
            Self::Glass,
            Self::Silent,
        ]
    }

    /// The wire spelling of this member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plastic => "Plastic",
            Self::Wood => "Wood",
            Self::Metal => "Metal",
            Self::Cardboard => "Cardboard",
            Self::Cloth => "Cloth",
            Self::Glass => "Glass",
            Self::Silent => "Silent",
        }
    }
}

/// What interaction an object lying on the ground still offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundAccessibility {
    /// No interaction while grounded.
    Nothing,
    /// Zoom view only.
    Zoom,
    /// Zoom view and context menu.
    ZoomAndContext,
}

impl GroundAccessibility {
    /// All members in canonical order.
    pub fn all() -> &'static [GroundAccessibility] {
        &[Self::Nothing, Self::Zoom, Self::ZoomAndContext]
    }

    /// The wire spelling of this member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nothing => "Nothing",
            Self::Zoom => "Zoom",
            Self::ZoomAndContext => "ZoomAndContext",
        }
    }
}

/// Built-in card silhouette models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSilhouette {
    /// Rectangle with rounded corners.
    Rounded,
    /// Sharp-cornered rectangle.
    Square,
    /// Circular card.
    Round,
    /// Hexagonal tile.
    Hexagonal,
}

impl CardSilhouette {
    /// All members in canonical order.
    pub fn all() -> &'static [CardSilhouette] {
        &[Self::Rounded, Self::Square, Self::Round, Self::Hexagonal]
    }

    /// The wire spelling of this member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rounded => "Rounded",
            Self::Square => "Square",
            Self::Round => "Round",
            Self::Hexagonal => "Hexagonal",
        }
    }
}

/// Implement `Display` + `FromStr` for a string-wire table.
macro_rules! string_wire_table {
    ($ty:ident, $name:literal, [$($member:ident),+ $(,)?]) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ViolationKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($member) => Ok(Self::$member),)+
                    other => Err(ViolationKind::UnknownEnumMember {
                        table: $name,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_wire_table!(CollisionType, "CollisionType", [Regular, Ground, Penetrable, Static]);
string_wire_table!(
    SurfaceType,
    "SurfaceType",
    [Plastic, Wood, Metal, Cardboard, Cloth, Glass, Silent]
);
string_wire_table!(GroundAccessibility, "GroundAccessibility", [Nothing, Zoom, ZoomAndContext]);
string_wire_table!(CardSilhouette, "CardSilhouette", [Rounded, Square, Round, Hexagonal]);

// ─── Integer-wire tables ─────────────────────────────────────────────

/// How an object rotates when it snaps to a snap point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SnapRotation {
    /// Keep the current rotation.
    NoChange = 0,
    /// Keep rotation but never flip.
    NoFlip = 1,
    /// Rotate to the snap point, never flip.
    RotateNoFlip = 2,
    /// Rotate and force upright.
    RotateUpright = 3,
    /// Rotate and force upside down.
    RotateUpsideDown = 4,
    /// Force upright without rotating.
    Upright = 5,
    /// Force upside down without rotating.
    UpsideDown = 6,
}

/// The volume shape of a snap point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SnapShape {
    /// Spherical snap volume.
    Sphere = 0,
    /// Cylindrical snap volume.
    Cylinder = 1,
    /// Box snap volume (carries a secondary range).
    Box = 2,
}

/// Which object orientations a snap point accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SnapFlipValidity {
    /// Any orientation snaps.
    Always = 0,
    /// Only upright objects snap.
    Upright = 1,
    /// Only upside-down objects snap.
    UpsideDown = 2,
}

/// Implement `wire()`/`from_wire()`/`all()` for an integer-wire table.
macro_rules! integer_wire_table {
    ($ty:ident, $name:literal, [$(($member:ident, $code:literal)),+ $(,)?]) => {
        impl $ty {
            /// All members in wire-value order.
            pub fn all() -> &'static [$ty] {
                &[$(Self::$member),+]
            }

            /// The integer wire value of this member.
            pub fn wire(&self) -> u8 {
                *self as u8
            }

            /// Resolve a wire value back to a member.
            pub fn from_wire(value: i64) -> Result<Self, ViolationKind> {
                match value {
                    $($code => Ok(Self::$member),)+
                    other => Err(ViolationKind::InvalidWireValue {
                        table: $name,
                        value: other,
                    }),
                }
            }
        }
    };
}

integer_wire_table!(
    SnapRotation,
    "SnapRotation",
    [
        (NoChange, 0),
        (NoFlip, 1),
        (RotateNoFlip, 2),
        (RotateUpright, 3),
        (RotateUpsideDown, 4),
        (Upright, 5),
        (UpsideDown, 6),
    ]
);
integer_wire_table!(SnapShape, "SnapShape", [(Sphere, 0), (Cylinder, 1), (Box, 2)]);
integer_wire_table!(
    SnapFlipValidity,
    "SnapFlipValidity",
    [(Always, 0), (Upright, 1), (UpsideDown, 2)]
);
