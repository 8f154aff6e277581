//! # Violation Taxonomy — Structured Validation Errors
//!
//! Defines the closed set of violation kinds a template document can be
//! rejected with, the field-path type that locates a violation inside a
//! document, and the [`ErrorReport`] aggregate returned by the validation
//! engine.
//!
//! ## Design
//!
//! - Validation is all-or-nothing: one validation pass collects *every*
//!   violation into a single `ErrorReport`. No violation is silently
//!   dropped, and no partial typed value is ever produced.
//! - Violations carry a [`FieldPath`] so diagnostics name the exact field
//!   (`Models[2].Offset.X`), not just the document.
//! - Report ordering is stable — violations appear in field declaration
//!   order, so the same document always produces the same report.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// The kind of a single validation violation.
///
/// Each variant corresponds to one rule class of the template schema. The
/// wire-facing context (offending value, allowed set) is carried in the
/// variant payload; the *location* lives in [`Violation::path`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// The top-level `Type`/`Blueprint` pair matches no known template.
    #[error("Type {type_name:?} with Blueprint {blueprint:?} matches no known template variant")]
    UnrecognizedVariant {
        /// Value of the document's `Type` field.
        type_name: String,
        /// Value of the document's `Blueprint` field (empty if absent).
        blueprint: String,
    },

    /// A field mandated by the resolved variant or branch is absent.
    #[error("required field is missing")]
    MissingRequiredField,

    /// A field belonging to a non-selected variant or discriminant branch
    /// is present (or a collection that must stay empty is non-empty).
    #[error("field is not legal for the selected variant or branch")]
    ForbiddenFieldPresent,

    /// A field holds a value of the wrong JSON type.
    #[error("expected {expected}")]
    TypeMismatch {
        /// Human-readable name of the expected JSON shape.
        expected: &'static str,
    },

    /// A symbolic name is not a member of a closed enum table.
    #[error("{value:?} is not a member of the {table} table")]
    UnknownEnumMember {
        /// Name of the table that was consulted.
        table: &'static str,
        /// The offending symbolic name.
        value: String,
    },

    /// A numeric wire value maps to no member of a closed enum table.
    #[error("wire value {value} maps to no member of the {table} table")]
    InvalidWireValue {
        /// Name of the table that was consulted.
        table: &'static str,
        /// The offending wire value.
        value: i64,
    },

    /// A file reference carries an extension outside its role's allowed set.
    #[error("filename extension must be one of {allowed:?}")]
    ExtensionMismatch {
        /// Extensions legal for the field's role.
        allowed: &'static [&'static str],
    },

    /// A file reference is empty where the field role requires a path.
    #[error("an empty path is not allowed for this field")]
    EmptyPathNotAllowed,

    /// A numeric component is NaN or infinite.
    #[error("component is not a finite number")]
    NonFiniteComponent,

    /// A numeric component is outside the accepted range.
    #[error("value {value} is outside the accepted range [{min}, {max}]")]
    ComponentOutOfRange {
        /// The offending value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// A keyed-map key is not the decimal text of a non-negative integer.
    #[error("map key {key:?} is not the decimal text of a non-negative integer")]
    InvalidIndexKey {
        /// The offending key.
        key: String,
    },

    /// A dependent-field rule spanning multiple fields does not hold.
    #[error("{rule}")]
    CrossFieldConstraintViolated {
        /// Description of the violated rule.
        rule: String,
    },
}

/// One segment of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named record field (`Offset`).
    Field(Cow<'static, str>),
    /// A position in an ordered collection (`[2]`).
    Index(usize),
    /// A string key in a keyed map (`["7"]`).
    Key(String),
}

/// Location of a field inside a template document.
///
/// Paths are built top-down while the engine descends the document and
/// render as `Models[2].Offset.X`. The root path renders as `(root)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Extend the path with a named field.
    pub fn field(&self, name: impl Into<Cow<'static, str>>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Field(name.into()));
        Self(segments)
    }

    /// Extend the path with a collection index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// Extend the path with a keyed-map key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.into()));
        Self(segments)
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// The name of the final field segment, if the path ends in one.
    pub fn leaf_field(&self) -> Option<&str> {
        match self.0.last() {
            Some(PathSegment::Field(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

/// A single validation violation: what went wrong, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Location of the violation inside the document.
    pub path: FieldPath,
    /// The rule class that was violated.
    pub kind: ViolationKind,
}

impl Violation {
    /// Create a violation at the given path.
    pub fn new(path: FieldPath, kind: ViolationKind) -> Self {
        Self { path, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Aggregate of all violations found during one validation pass.
///
/// Returned as the `Err` side of `validate`. Implements `std::error::Error`
/// so it composes with `?` in calling code.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    violations: Vec<Violation>,
}

impl ErrorReport {
    /// Build a report from an ordered violation list.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Number of violations in the report.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in stable document order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the report and return the inner list.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Whether any violation satisfies the predicate.
    pub fn any(&self, predicate: impl Fn(&Violation) -> bool) -> bool {
        self.violations.iter().any(predicate)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s):", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}
