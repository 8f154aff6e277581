//! # ttpg-core — Foundational Types for the Template Engine
//!
//! This crate is the bedrock of the tabletop template engine. It defines the
//! violation taxonomy, field paths, numeric and file-reference primitives,
//! and the host platform's enumerated constant tables. The `ttpg-template`
//! crate builds the typed template model and the validation engine on top of
//! it; this crate depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated constructors.** `Vector3`, `Color3`, `Color4`, and
//!    `FilePathRef` reject illegal values at construction — non-finite
//!    components, out-of-range channels, wrong filename extensions. No bare
//!    floats or strings for values the host platform constrains.
//!
//! 2. **Closed enum tables.** The host protocol's constant sets
//!    (`CollisionType`, `SurfaceType`, `SnapRotation`, ...) are plain Rust
//!    enums with stable wire values. Exhaustive `match` everywhere; no
//!    runtime registration.
//!
//! 3. **Structured violations.** Every rejection is a [`Violation`] — a
//!    [`ViolationKind`] plus the [`FieldPath`] it occurred at — aggregated
//!    into an [`ErrorReport`]. No stringly-typed errors.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ttpg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod enums;
pub mod error;
pub mod fileref;
pub mod options;
pub mod primitive;

// Re-export primary types for ergonomic imports.
pub use enums::{
    CardSilhouette, CollisionType, GroundAccessibility, SnapFlipValidity, SnapRotation, SnapShape,
    SurfaceType,
};
pub use error::{ErrorReport, FieldPath, PathSegment, Violation, ViolationKind};
pub use fileref::{FilePathRef, FileRole};
pub use options::{NumericRange, ValidationOptions};
pub use primitive::{Color3, Color4, Vector3};
