//! # ttpg-template — Object Template Validation and Canonical Construction
//!
//! Typed representation of tabletop object-template documents, a validation
//! engine turning raw JSON documents into those typed values, and the
//! canonical serializer turning them back.
//!
//! ## Design
//!
//! - **Parse, don't validate-in-place.** A raw document is either converted
//!   into a [`Template`] whose types make illegal states unrepresentable,
//!   or rejected with an [`ErrorReport`](ttpg_core::ErrorReport) listing
//!   every violation at once.
//! - **Discriminant-first.** The `Type`/`Blueprint` pair selects the rule
//!   set before any field validation runs; inside compound structures, the
//!   branch discriminant is resolved before branch fields are touched.
//! - **All-or-nothing.** No partially validated value ever escapes.
//!
//! ## Example
//!
//! ```no_run
//! use ttpg_template::{validate, Template};
//!
//! # fn demo(raw: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let document: serde_json::Value = serde_json::from_str(raw)?;
//! match validate(&document)? {
//!     Template::Dice(dice) => println!("{} faces", dice.faces.len()),
//!     other => println!("a {} template", other.kind()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod collider;
pub mod light;
pub mod model;
mod reader;
pub mod ser;
pub mod snap;
pub mod template;
pub mod validate;

pub use base::TemplateBase;
pub use collider::Collider;
pub use light::Light;
pub use model::{
    Model, ModelGeometry, ModelMultistate, MultistateSilhouette, MultistateTexture, Transform3,
};
pub use ser::to_document;
pub use snap::{DieFace, SnapPoint, SnapShapeSpec};
pub use template::{
    CardHolderTemplate, CardShape, CardTemplate, CardboardFigureTemplate, DiceTemplate,
    FigureCutout, MultistateObjectTemplate, Template, TemplateKind,
};
pub use validate::{validate, validate_as, Validator};
