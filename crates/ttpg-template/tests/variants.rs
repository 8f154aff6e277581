//! Variant classification, cross-field rules, and error aggregation over
//! whole documents.

mod common;

use serde_json::{json, Value};

use ttpg_core::{NumericRange, ValidationOptions, ViolationKind};
use ttpg_template::{validate, validate_as, TemplateKind, Validator};

fn paths_of(report: &ttpg_core::ErrorReport) -> Vec<String> {
    report.violations().iter().map(|v| v.path.to_string()).collect()
}

// ─── Classification ──────────────────────────────────────────────────

#[test]
fn test_known_pair_with_wrong_blueprint_is_rejected() {
    let mut doc = common::document(TemplateKind::Dice);
    doc["Blueprint"] = json!("Blueprints/Board.json");
    let report = validate(&doc).unwrap_err();
    assert_eq!(report.len(), 1);
    assert!(matches!(
        report.violations()[0].kind,
        ViolationKind::UnrecognizedVariant { .. }
    ));
}

#[test]
fn test_board_and_generic_share_type() {
    let board = validate(&common::document(TemplateKind::Board)).unwrap();
    assert_eq!(board.kind(), TemplateKind::Board);
    let generic = validate(&common::document(TemplateKind::Generic)).unwrap();
    assert_eq!(generic.kind(), TemplateKind::Generic);
}

#[test]
fn test_validate_as_rejects_other_variants() {
    let doc = common::document(TemplateKind::Dice);
    assert!(validate_as(&doc, TemplateKind::Dice).is_ok());
    let report = validate_as(&doc, TemplateKind::Card).unwrap_err();
    assert_eq!(report.len(), 1);
    assert!(matches!(
        report.violations()[0].kind,
        ViolationKind::UnrecognizedVariant { .. }
    ));
}

#[test]
fn test_unknown_type_is_rejected() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["Type"] = json!("Token");
    let report = validate(&doc).unwrap_err();
    assert_eq!(report.len(), 1);
}

// ─── Required-field sweep ────────────────────────────────────────────

#[test]
fn test_removing_any_required_field_yields_one_missing_violation() {
    for kind in TemplateKind::all() {
        let doc = common::document(*kind);
        let keys: Vec<String> = doc.as_object().unwrap().keys().cloned().collect();
        for key in keys {
            // The discriminant pair is classification's concern, not the
            // field sweep's.
            if key == "Type" || key == "Blueprint" {
                continue;
            }
            let mut pruned = doc.clone();
            pruned.as_object_mut().unwrap().remove(&key);
            let report = validate(&pruned).unwrap_err();
            assert_eq!(
                report.len(),
                1,
                "{kind}: removing {key} produced {report}"
            );
            assert_eq!(report.violations()[0].kind, ViolationKind::MissingRequiredField);
            assert_eq!(report.violations()[0].path.to_string(), key);
        }
    }
}

#[test]
fn test_removing_blueprint_is_reported_when_classification_survives() {
    let mut doc = common::document(TemplateKind::Dice);
    doc.as_object_mut().unwrap().remove("Blueprint");
    let report = validate(&doc).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations()[0].path.to_string(), "Blueprint");
}

// ─── Foreign variant fields ──────────────────────────────────────────

#[test]
fn test_foreign_variant_fields_rejected() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["Faces"] = json!([]);
    doc["MaxCards"] = json!(5);
    doc["FrontTexture"] = json!("front.jpg");
    let report = validate(&doc).unwrap_err();
    assert_eq!(paths_of(&report), vec!["Faces", "FrontTexture", "MaxCards"]);
    assert!(report
        .violations()
        .iter()
        .all(|v| v.kind == ViolationKind::ForbiddenFieldPresent));
}

#[test]
fn test_shared_field_name_is_legal_for_both_owners() {
    // Card and Cardboard Figure both declare FrontTexture; neither sees
    // the other's copy as foreign.
    assert!(validate(&common::document(TemplateKind::Card)).is_ok());
    assert!(validate(&common::document(TemplateKind::CardboardFigure)).is_ok());
}

#[test]
fn test_unknown_top_level_keys_are_ignored() {
    // Keys outside every variant's vocabulary pass through; only sibling
    // variants' fields are rejected.
    let mut doc = common::document(TemplateKind::Generic);
    doc["EditorComment"] = json!("wip");
    assert!(validate(&doc).is_ok());
}

// ─── Card rules ──────────────────────────────────────────────────────

#[test]
fn test_card_rejects_populated_model_collections() {
    let mut doc = common::document(TemplateKind::Card);
    doc["Models"] = json!([{"Model": "body.obj"}]);
    doc["Collision"] = json!([{"Type": "Sphere"}]);
    let report = validate(&doc).unwrap_err();
    let forbidden = paths_of(&report);
    assert!(forbidden.contains(&"Models".to_string()));
    assert!(forbidden.contains(&"Collision".to_string()));
    // The entries themselves are not descended into.
    assert!(report
        .violations()
        .iter()
        .all(|v| v.kind == ViolationKind::ForbiddenFieldPresent));
}

#[test]
fn test_card_standard_shape_rejects_custom_fields() {
    let mut doc = common::document(TemplateKind::Card);
    doc["ShapeAccuracy"] = json!(0.5);
    doc["ConvexCollision"] = json!(true);
    let report = validate(&doc).unwrap_err();
    assert_eq!(report.len(), 2);
    assert!(report
        .violations()
        .iter()
        .all(|v| v.kind == ViolationKind::ForbiddenFieldPresent));
}

#[test]
fn test_card_custom_shape_requires_both_fields() {
    let mut doc = common::document(TemplateKind::Card);
    doc["Model"] = json!("coin.png");
    let report = validate(&doc).unwrap_err();
    let missing = paths_of(&report);
    assert_eq!(missing, vec!["ConvexCollision", "ShapeAccuracy"]);
}

#[test]
fn test_card_model_neither_name_nor_path() {
    let mut doc = common::document(TemplateKind::Card);
    doc["Model"] = json!("Triangular");
    let report = validate(&doc).unwrap_err();
    assert!(matches!(
        &report.violations()[0].kind,
        ViolationKind::UnknownEnumMember { table: "CardSilhouette", .. }
    ));

    doc["Model"] = json!("coin.docx");
    let report = validate(&doc).unwrap_err();
    assert!(matches!(
        report.violations()[0].kind,
        ViolationKind::ExtensionMismatch { .. }
    ));
}

#[test]
fn test_card_index_maps_reject_bad_keys() {
    let mut doc = common::document(TemplateKind::Card);
    doc["CardNames"] = json!({"0": "Ace", "ace": "bad"});
    doc["CardTags"] = json!({"-1": ["bad"]});
    let report = validate(&doc).unwrap_err();
    let keys: Vec<&str> = report
        .violations()
        .iter()
        .filter_map(|v| match &v.kind {
            ViolationKind::InvalidIndexKey { key } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(keys, vec!["ace", "-1"]);
}

// ─── Cardboard figure rules ──────────────────────────────────────────

#[test]
fn test_figure_alpha_requires_shape_accuracy() {
    let mut doc = common::document(TemplateKind::CardboardFigure);
    doc["UseAlpha"] = json!(true);
    let report = validate(&doc).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations()[0].kind, ViolationKind::MissingRequiredField);
    assert_eq!(report.violations()[0].path.to_string(), "ShapeAccuracy");
}

#[test]
fn test_figure_without_alpha_rejects_shape_accuracy() {
    let mut doc = common::document(TemplateKind::CardboardFigure);
    doc["ShapeAccuracy"] = json!(0.5);
    let report = validate(&doc).unwrap_err();
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations()[0].kind, ViolationKind::ForbiddenFieldPresent);
}

// ─── Table collision rule ────────────────────────────────────────────

#[test]
fn test_table_requires_static_collision() {
    let mut doc = common::document(TemplateKind::Table);
    doc["CollisionType"] = json!("Regular");
    let report = validate(&doc).unwrap_err();
    assert!(report.any(|v| matches!(
        v.kind,
        ViolationKind::CrossFieldConstraintViolated { .. }
    )));
}

#[test]
fn test_static_collision_is_table_only() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["CollisionType"] = json!("Static");
    let report = validate(&doc).unwrap_err();
    assert!(report.any(|v| matches!(
        v.kind,
        ViolationKind::CrossFieldConstraintViolated { .. }
    )));
}

// ─── Collection elements ─────────────────────────────────────────────

#[test]
fn test_collider_branch_conflict_is_located() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["Collision"] = json!([{
        "Type": "Convex",
        "Model": "hull.obj",
        "Radius": 2.0,
        "Offset": {"X": 0.0, "Y": 0.0, "Z": 0.0},
        "Scale": {"X": 1.0, "Y": 1.0, "Z": 1.0},
        "Rotation": {"X": 0.0, "Y": 0.0, "Z": 0.0}
    }]);
    let report = validate(&doc).unwrap_err();
    assert_eq!(paths_of(&report), vec!["Collision[0].Radius"]);
    assert_eq!(report.violations()[0].kind, ViolationKind::ForbiddenFieldPresent);
}

#[test]
fn test_bad_extension_in_model_geometry() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["Models"] = json!([{
        "Model": "body.docx",
        "Offset": {"X": 0.0, "Y": 0.0, "Z": 0.0},
        "Scale": {"X": 1.0, "Y": 1.0, "Z": 1.0},
        "Rotation": {"X": 0.0, "Y": 0.0, "Z": 0.0},
        "Texture": "", "NormalMap": "", "ExtraMap": "", "ExtraMap2": "",
        "IsTransparent": false, "CastShadow": true, "IsTwoSided": false,
        "UseOverrides": false, "SurfaceType": "Plastic"
    }]);
    let report = validate(&doc).unwrap_err();
    assert_eq!(paths_of(&report), vec!["Models[0].Model"]);
    assert!(matches!(
        report.violations()[0].kind,
        ViolationKind::ExtensionMismatch { .. }
    ));
}

#[test]
fn test_errors_across_independent_fields_aggregate() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["Friction"] = json!("sticky");
    doc["SurfaceType"] = json!("Rubber");
    doc["PrimaryColor"] = json!({"R": 0.5, "G": 2.5, "B": 0.5});
    let report = validate(&doc).unwrap_err();
    assert_eq!(
        paths_of(&report),
        vec!["Friction", "SurfaceType", "PrimaryColor.G"]
    );
}

#[test]
fn test_non_numeric_component_is_reported() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["ZoomViewDirection"] = json!({"X": 0.0, "Y": 0.0, "Z": true});
    let report = validate(&doc).unwrap_err();
    assert_eq!(paths_of(&report), vec!["ZoomViewDirection.Z"]);
}

// ─── Options ─────────────────────────────────────────────────────────

#[test]
fn test_color_range_is_configurable() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["PrimaryColor"] = json!({"R": 1.5, "G": 0.0, "B": 0.0});
    assert!(validate(&doc).is_err());

    let permissive = Validator::with_options(ValidationOptions::permissive());
    let template = permissive.validate(&doc).unwrap();
    assert_eq!(template.base().primary_color.r, 1.5);
}

#[test]
fn test_physics_range_is_opt_in() {
    let mut doc = common::document(TemplateKind::Generic);
    doc["Friction"] = json!(9.0);
    assert!(validate(&doc).is_ok());

    let options = ValidationOptions::default()
        .with_physics_range(Some(NumericRange::new(0.0, 2.0)));
    let strict = Validator::with_options(options);
    let report = strict.validate(&doc).unwrap_err();
    assert!(report.any(|v| matches!(v.kind, ViolationKind::ComponentOutOfRange { .. })));
}

// ─── All-or-nothing ──────────────────────────────────────────────────

#[test]
fn test_valid_document_roundtrips_to_same_value() {
    let doc = common::document(TemplateKind::CardHolder);
    let first = validate(&doc).unwrap();
    let second = validate(&first.to_document()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_non_object_document_is_rejected() {
    let report = validate(&Value::String("Generic".to_string())).unwrap_err();
    assert_eq!(
        report.violations()[0].kind,
        ViolationKind::TypeMismatch { expected: "object" }
    );
    assert!(report.violations()[0].path.is_root());
}
