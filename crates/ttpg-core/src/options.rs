//! # Validation Options — Configurable Numeric Bounds
//!
//! The source schema types several physical scalars (`Friction`,
//! `Restitution`, `Roughness`, `Metallic`) and color channels as bare
//! numbers without bounds. Rather than guessing silently, the engine
//! surfaces the bounds as configuration: color channels default to the
//! normalized `[0, 1]` range the host renders with, physical scalars
//! default to unconstrained.

/// An inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl NumericRange {
    /// The normalized unit interval `[0, 1]`.
    pub const UNIT: NumericRange = NumericRange { min: 0.0, max: 1.0 };

    /// Construct a range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Tunable validation behavior.
///
/// A `ValidationOptions` value is read-only once handed to a validator;
/// concurrent validations may share one freely.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOptions {
    /// Accepted range for `Color3`/`Color4` channels. `None` disables the
    /// range check (finiteness is always enforced).
    pub color_channel_range: Option<NumericRange>,
    /// Accepted range for `Friction`, `Restitution`, `Roughness`, and
    /// `Metallic`. `None` leaves them unconstrained, matching the source
    /// schema.
    pub physics_range: Option<NumericRange>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            color_channel_range: Some(NumericRange::UNIT),
            physics_range: None,
        }
    }
}

impl ValidationOptions {
    /// Options with every range check disabled.
    pub fn permissive() -> Self {
        Self { color_channel_range: None, physics_range: None }
    }

    /// Replace the color channel range.
    pub fn with_color_channel_range(mut self, range: Option<NumericRange>) -> Self {
        self.color_channel_range = range;
        self
    }

    /// Replace the physical scalar range.
    pub fn with_physics_range(mut self, range: Option<NumericRange>) -> Self {
        self.physics_range = range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_range() {
        assert!(NumericRange::UNIT.contains(0.0));
        assert!(NumericRange::UNIT.contains(1.0));
        assert!(!NumericRange::UNIT.contains(-0.001));
        assert!(!NumericRange::UNIT.contains(1.001));
    }

    #[test]
    fn test_defaults() {
        let options = ValidationOptions::default();
        assert_eq!(options.color_channel_range, Some(NumericRange::UNIT));
        assert_eq!(options.physics_range, None);
    }

    #[test]
    fn test_builder() {
        let options = ValidationOptions::default()
            .with_physics_range(Some(NumericRange::new(0.0, 2.0)))
            .with_color_channel_range(None);
        assert!(options.color_channel_range.is_none());
        assert_eq!(options.physics_range, Some(NumericRange::new(0.0, 2.0)));
    }

    #[test]
    fn test_permissive() {
        let options = ValidationOptions::permissive();
        assert!(options.color_channel_range.is_none());
        assert!(options.physics_range.is_none());
    }
}
