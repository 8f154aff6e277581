//! # Numeric Primitives — Vectors and Colors
//!
//! Fixed-arity numeric tuples used throughout template documents: 3-component
//! vectors, and 3/4-component colors. All components are `f64` on the wire.
//!
//! ## Design
//!
//! Checked constructors reject illegal values at construction — a `Vector3`
//! with a NaN component cannot exist. The validation engine performs the
//! same checks per component so violations carry exact field paths; these
//! constructors guard hand-built values with the identical rules.
//!
//! Serde renames give the host platform's PascalCase wire casing
//! (`X`/`Y`/`Z`, `R`/`G`/`B`/`A`).

use serde::{Deserialize, Serialize};

use crate::error::ViolationKind;
use crate::options::NumericRange;

/// A 3-component vector (position, scale, rotation, direction).
///
/// Invariant: every component is a finite real number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    /// The unit-scale vector.
    pub const ONE: Vector3 = Vector3 { x: 1.0, y: 1.0, z: 1.0 };

    /// Construct a vector, rejecting non-finite components.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, ViolationKind> {
        for component in [x, y, z] {
            if !component.is_finite() {
                return Err(ViolationKind::NonFiniteComponent);
            }
        }
        Ok(Self { x, y, z })
    }

    /// The components in X, Y, Z order.
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A 3-channel color (RGB).
///
/// Invariant: every channel is finite and, when a channel range is
/// configured, within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Color3 {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color3 {
    /// Construct a color, rejecting non-finite channels.
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self, ViolationKind> {
        check_channels(&[r, g, b], None)?;
        Ok(Self { r, g, b })
    }

    /// Construct a color, additionally enforcing a channel range.
    pub fn new_in_range(r: f64, g: f64, b: f64, range: &NumericRange) -> Result<Self, ViolationKind> {
        check_channels(&[r, g, b], Some(range))?;
        Ok(Self { r, g, b })
    }

    /// The channels in R, G, B order.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// A 4-channel color (RGBA).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Color4 {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color4 {
    /// Construct a color, rejecting non-finite channels.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self, ViolationKind> {
        check_channels(&[r, g, b, a], None)?;
        Ok(Self { r, g, b, a })
    }

    /// Construct a color, additionally enforcing a channel range.
    pub fn new_in_range(
        r: f64,
        g: f64,
        b: f64,
        a: f64,
        range: &NumericRange,
    ) -> Result<Self, ViolationKind> {
        check_channels(&[r, g, b, a], Some(range))?;
        Ok(Self { r, g, b, a })
    }

    /// The channels in R, G, B, A order.
    pub fn channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Shared channel check: finite always, range when configured.
fn check_channels(channels: &[f64], range: Option<&NumericRange>) -> Result<(), ViolationKind> {
    for &channel in channels {
        if !channel.is_finite() {
            return Err(ViolationKind::NonFiniteComponent);
        }
        if let Some(range) = range {
            if !range.contains(channel) {
                return Err(ViolationKind::ComponentOutOfRange {
                    value: channel,
                    min: range.min,
                    max: range.max,
                });
            }
        }
    }
    Ok(())
}
