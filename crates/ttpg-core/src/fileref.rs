//! # File References — Role-Gated Path Strings
//!
//! Template documents reference geometry, texture, and document assets by
//! relative path. The engine never opens these files; a path is checked
//! only for *shape* — its filename extension must belong to the closed set
//! the field's role allows.
//!
//! ## Roles
//!
//! | Role | Extensions |
//! |------|------------|
//! | Mesh | `.obj`, `.fbx` |
//! | Image | `.jpg`, `.png`, `.tga` |
//! | Document | `.pdf` |
//!
//! Suffix matching is ASCII-case-insensitive (`.PNG` is accepted).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ViolationKind;

/// The role a file-path field plays, determining its legal extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    /// A 3D geometry reference.
    Mesh,
    /// A 2D image reference (texture, silhouette, shape source).
    Image,
    /// A multi-page document reference.
    Document,
}

impl FileRole {
    /// The extensions legal for this role, lowercase, without the dot.
    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Mesh => &["obj", "fbx"],
            Self::Image => &["jpg", "png", "tga"],
            Self::Document => &["pdf"],
        }
    }

    /// Whether `path` carries an extension legal for this role.
    pub fn matches(&self, path: &str) -> bool {
        match path.rsplit_once('.') {
            Some((_, ext)) => self
                .allowed_extensions()
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mesh => "mesh",
            Self::Image => "image",
            Self::Document => "document",
        };
        f.write_str(s)
    }
}

/// A validated asset path: non-empty, with an extension legal for the role
/// it was constructed under.
///
/// The path is otherwise opaque — existence and content are the host
/// platform's concern, not the engine's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePathRef(String);

impl FilePathRef {
    /// Validate a raw path for a role. The empty string is rejected.
    pub fn new(raw: impl Into<String>, role: FileRole) -> Result<Self, ViolationKind> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ViolationKind::EmptyPathNotAllowed);
        }
        if !role.matches(&raw) {
            return Err(ViolationKind::ExtensionMismatch {
                allowed: role.allowed_extensions(),
            });
        }
        Ok(Self(raw))
    }

    /// Validate a raw path for a role where the empty string means "unset".
    pub fn new_optional(raw: &str, role: FileRole) -> Result<Option<Self>, ViolationKind> {
        if raw.is_empty() {
            return Ok(None);
        }
        Self::new(raw, role).map(Some)
    }

    /// The validated path string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FilePathRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilePathRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_extensions() {
        assert!(FilePathRef::new("Models/die.obj", FileRole::Mesh).is_ok());
        assert!(FilePathRef::new("Models/die.fbx", FileRole::Mesh).is_ok());
    }

    #[test]
    fn test_image_extension_rejected_for_mesh_role() {
        let err = FilePathRef::new("Textures/face.png", FileRole::Mesh).unwrap_err();
        assert_eq!(
            err,
            ViolationKind::ExtensionMismatch { allowed: &["obj", "fbx"] }
        );
    }

    #[test]
    fn test_image_extensions() {
        for path in ["a.jpg", "a.png", "a.tga"] {
            assert!(FilePathRef::new(path, FileRole::Image).is_ok(), "{path}");
        }
        assert!(FilePathRef::new("a.bmp", FileRole::Image).is_err());
    }

    #[test]
    fn test_document_extension() {
        assert!(FilePathRef::new("Cards/deck.pdf", FileRole::Document).is_ok());
        assert!(FilePathRef::new("Cards/deck.png", FileRole::Document).is_err());
    }

    #[test]
    fn test_case_insensitive_suffix() {
        assert!(FilePathRef::new("a.PNG", FileRole::Image).is_ok());
        assert!(FilePathRef::new("a.Obj", FileRole::Mesh).is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(
            FilePathRef::new("", FileRole::Mesh).unwrap_err(),
            ViolationKind::EmptyPathNotAllowed
        );
    }

    #[test]
    fn test_no_extension_rejected() {
        assert!(FilePathRef::new("Models/die", FileRole::Mesh).is_err());
    }

    #[test]
    fn test_optional_empty_is_none() {
        assert_eq!(FilePathRef::new_optional("", FileRole::Image).unwrap(), None);
        let some = FilePathRef::new_optional("back.png", FileRole::Image).unwrap();
        assert_eq!(some.map(|r| r.as_str().to_string()), Some("back.png".to_string()));
    }

    #[test]
    fn test_optional_bad_extension_still_rejected() {
        assert!(FilePathRef::new_optional("back.pdf", FileRole::Image).is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let r = FilePathRef::new("a.png", FileRole::Image).unwrap();
        assert_eq!(serde_json::to_value(&r).unwrap(), serde_json::json!("a.png"));
    }
}
