//! # Lights — Spot and Point Variants
//!
//! A template may attach lights. Spot lights carry a direction and inner/
//! outer cone angles; point lights carry neither. The wire discriminant is
//! the presence of `Direction`.

use ttpg_core::{Color3, Vector3};

/// One light attached to a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Directional cone light.
    Spot {
        /// Position relative to the object.
        offset: Vector3,
        /// Light color.
        color: Color3,
        /// Light intensity.
        intensity: f64,
        /// Cone direction.
        direction: Vector3,
        /// Inner (full-brightness) cone angle in degrees.
        inner_angle: f64,
        /// Outer (falloff) cone angle in degrees.
        outer_angle: f64,
    },
    /// Omnidirectional light.
    Point {
        /// Position relative to the object.
        offset: Vector3,
        /// Light color.
        color: Color3,
        /// Light intensity.
        intensity: f64,
    },
}

impl Light {
    /// Position shared by both variants.
    pub fn offset(&self) -> &Vector3 {
        match self {
            Self::Spot { offset, .. } | Self::Point { offset, .. } => offset,
        }
    }

    /// Color shared by both variants.
    pub fn color(&self) -> &Color3 {
        match self {
            Self::Spot { color, .. } | Self::Point { color, .. } => color,
        }
    }

    /// Intensity shared by both variants.
    pub fn intensity(&self) -> f64 {
        match self {
            Self::Spot { intensity, .. } | Self::Point { intensity, .. } => *intensity,
        }
    }
}
