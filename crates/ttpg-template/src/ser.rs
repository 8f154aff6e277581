//! # Canonical Serialization — Typed Template to Raw Document
//!
//! The inverse of validation: renders a typed [`Template`] back into its
//! wire document. The output is canonical by construction — discriminant
//! fields carry their fixed literals, branch-exclusive fields of the
//! non-selected branch are absent, enum members appear as their wire
//! values, and index-keyed maps use decimal-text keys.
//!
//! Round-trip law: for any typed template, serializing and re-validating
//! yields an equal value.

use serde_json::{Map, Value};

use ttpg_core::{Color3, Vector3};

use crate::base::TemplateBase;
use crate::collider::Collider;
use crate::light::Light;
use crate::model::{Model, ModelGeometry, ModelMultistate, MultistateSilhouette, MultistateTexture, Transform3};
use crate::snap::{DieFace, SnapPoint, SnapShapeSpec};
use crate::template::{CardShape, CardTemplate, FigureCutout, Template};

impl Template {
    /// Render this template as its canonical wire document.
    pub fn to_document(&self) -> Value {
        to_document(self)
    }
}

/// Render a typed template as its canonical wire document.
pub fn to_document(template: &Template) -> Value {
    let mut doc = base_document(template.base(), template);

    match template {
        Template::Generic(_)
        | Template::Board(_)
        | Template::Container(_)
        | Template::Table(_) => {}
        Template::Dice(dice) => {
            put(&mut doc, "Faces", dice.faces.iter().map(die_face_entry).collect::<Value>());
        }
        Template::Card(card) => card_fields(&mut doc, card),
        Template::CardHolder(holder) => {
            put(&mut doc, "CardsCenter", vector3_value(&holder.cards_center));
            put(&mut doc, "CardsWidth", holder.cards_width);
            put(&mut doc, "MaxCards", holder.max_cards);
            put(&mut doc, "MaxCardHeight", holder.max_card_height);
        }
        Template::CardboardFigure(figure) => {
            put(&mut doc, "FrontTexture", figure.front_texture.clone());
            put(&mut doc, "BackTexture", figure.back_texture.clone());
            put(&mut doc, "FrontExtraMap", figure.front_extra_map.clone());
            put(&mut doc, "BackExtraMap", figure.back_extra_map.clone());
            put(&mut doc, "FigureWidth", figure.figure_width);
            put(&mut doc, "FigureHeight", figure.figure_height);
            put(&mut doc, "FigureZOffset", figure.figure_z_offset);
            put(&mut doc, "Collide", figure.collide);
            match figure.cutout {
                FigureCutout::Alpha { shape_accuracy } => {
                    put(&mut doc, "UseAlpha", true);
                    put(&mut doc, "ShapeAccuracy", shape_accuracy);
                }
                FigureCutout::FullRect => {
                    put(&mut doc, "UseAlpha", false);
                }
            }
        }
        Template::MultistateObject(multistate) => {
            put(
                &mut doc,
                "MultistateModels",
                multistate.models.iter().map(multistate_entry).collect::<Value>(),
            );
            put(&mut doc, "Circular", multistate.circular);
        }
    }

    Value::Object(doc)
}

fn base_document(base: &TemplateBase, template: &Template) -> Map<String, Value> {
    let kind = template.kind();
    let mut doc = Map::new();
    put(&mut doc, "Type", kind.type_name());
    put(&mut doc, "Blueprint", kind.blueprint());
    put(&mut doc, "GUID", base.guid.clone());
    put(&mut doc, "Name", base.name.clone());
    put(&mut doc, "Metadata", base.metadata.clone());
    put(&mut doc, "CollisionType", base.collision_type.as_str());
    put(&mut doc, "Friction", base.friction);
    put(&mut doc, "Restitution", base.restitution);
    put(&mut doc, "Density", base.density);
    put(&mut doc, "SurfaceType", base.surface_type.as_str());
    put(&mut doc, "Roughness", base.roughness);
    put(&mut doc, "Metallic", base.metallic);
    put(&mut doc, "PrimaryColor", color3_value(&base.primary_color));
    put(&mut doc, "SecondaryColor", color3_value(&base.secondary_color));
    put(&mut doc, "Flippable", base.flippable);
    put(&mut doc, "AutoStraighten", base.auto_straighten);
    put(&mut doc, "ShouldSnap", base.should_snap);
    put(&mut doc, "ScriptName", base.script_name.clone());
    put(&mut doc, "Models", base.models.iter().map(model_entry).collect::<Value>());
    put(&mut doc, "Collision", base.collision.iter().map(collider_entry).collect::<Value>());
    put(&mut doc, "Lights", base.lights.iter().map(light_entry).collect::<Value>());
    put(&mut doc, "SnapPointsGlobal", base.snap_points_global);
    put(&mut doc, "SnapPoints", base.snap_points.iter().map(snap_entry).collect::<Value>());
    put(&mut doc, "ZoomViewDirection", vector3_value(&base.zoom_view_direction));
    put(&mut doc, "GroundAccessibility", base.ground_accessibility.as_str());
    put(&mut doc, "Tags", base.tags.clone());
    doc
}

// ─── Compound entries ────────────────────────────────────────────────

fn model_entry(model: &Model) -> Value {
    let mut doc = Map::new();
    match &model.geometry {
        ModelGeometry::Mesh(path) => {
            put(&mut doc, "Model", path.as_str());
        }
        ModelGeometry::Image { model, shape_accuracy } => {
            put(&mut doc, "Model", model.as_str());
            put(&mut doc, "ShapeAccuracy", *shape_accuracy);
        }
    }
    transform_fields(&mut doc, &model.transform);
    put(&mut doc, "Texture", model.texture.clone());
    put(&mut doc, "NormalMap", model.normal_map.clone());
    put(&mut doc, "ExtraMap", model.extra_map.clone());
    put(&mut doc, "ExtraMap2", model.extra_map2.clone());
    put(&mut doc, "IsTransparent", model.is_transparent);
    put(&mut doc, "CastShadow", model.cast_shadow);
    put(&mut doc, "IsTwoSided", model.is_two_sided);
    put(&mut doc, "UseOverrides", model.use_overrides);
    put(&mut doc, "SurfaceType", model.surface_type.as_str());
    Value::Object(doc)
}

fn collider_entry(collider: &Collider) -> Value {
    let mut doc = Map::new();
    put(&mut doc, "Type", collider.wire_type());
    transform_fields(&mut doc, collider.transform());
    match collider {
        Collider::Mesh { model, .. } => {
            put(&mut doc, "Model", model.as_str());
        }
        Collider::Sphere { radius, .. } => {
            put(&mut doc, "Model", "");
            put(&mut doc, "Radius", *radius);
        }
        Collider::ImageShape { model, shape_accuracy, convex_collision, .. } => {
            put(&mut doc, "Model", model.as_str());
            put(&mut doc, "ShapeAccuracy", *shape_accuracy);
            put(&mut doc, "ConvexCollision", *convex_collision);
        }
    }
    Value::Object(doc)
}

fn light_entry(light: &Light) -> Value {
    let mut doc = Map::new();
    put(&mut doc, "Offset", vector3_value(light.offset()));
    put(&mut doc, "Color", color3_value(light.color()));
    put(&mut doc, "Intensity", light.intensity());
    if let Light::Spot { direction, inner_angle, outer_angle, .. } = light {
        put(&mut doc, "Direction", vector3_value(direction));
        put(&mut doc, "InnerAngle", *inner_angle);
        put(&mut doc, "OuterAngle", *outer_angle);
    }
    Value::Object(doc)
}

fn snap_entry(point: &SnapPoint) -> Value {
    let mut doc = Map::new();
    position_fields(&mut doc, &point.position);
    put(&mut doc, "Range", point.range);
    put(&mut doc, "SnapRotation", point.rotation.wire());
    // Fixed wire literal.
    put(&mut doc, "RotationOffset", 0);
    put(&mut doc, "FlipValidity", point.flip_validity.wire());
    put(&mut doc, "Tags", point.tags.clone());
    put(&mut doc, "Shape", point.shape.shape().wire());
    if let SnapShapeSpec::Box { secondary_range } = point.shape {
        put(&mut doc, "SecondaryRange", secondary_range);
    }
    Value::Object(doc)
}

fn die_face_entry(face: &DieFace) -> Value {
    let mut doc = Map::new();
    position_fields(&mut doc, &face.position);
    put(&mut doc, "Name", face.name.clone());
    put(&mut doc, "Metadata", face.metadata.clone());
    Value::Object(doc)
}

fn multistate_entry(model: &ModelMultistate) -> Value {
    let mut doc = Map::new();
    match &model.silhouette {
        MultistateSilhouette::Card(silhouette) => {
            put(&mut doc, "Model", silhouette.as_str());
        }
        MultistateSilhouette::Image { model, shape_accuracy } => {
            put(&mut doc, "Model", model.as_str());
            put(&mut doc, "ShapeAccuracy", *shape_accuracy);
        }
    }
    match &model.texture {
        MultistateTexture::Document(path) => {
            put(&mut doc, "Texture", path.as_str());
        }
        MultistateTexture::Sheet {
            texture,
            num_horizontal,
            num_vertical,
            back_texture,
            back_index,
        } => {
            put(&mut doc, "Texture", texture.as_str());
            put(&mut doc, "NumHorizontal", *num_horizontal);
            put(&mut doc, "NumVertical", *num_vertical);
            put(&mut doc, "BackTexture", optional_path(back_texture.as_ref()));
            put(&mut doc, "BackIndex", *back_index);
        }
    }
    transform_fields(&mut doc, &model.transform);
    put(&mut doc, "NormalMap", optional_path(model.normal_map.as_ref()));
    put(&mut doc, "ExtraMap", optional_path(model.extra_map.as_ref()));
    put(&mut doc, "ExtraMap2", optional_path(model.extra_map2.as_ref()));
    put(&mut doc, "IsTransparent", model.is_transparent);
    put(&mut doc, "CastShadow", model.cast_shadow);
    put(&mut doc, "IsTwoSided", model.is_two_sided);
    put(&mut doc, "UseOverrides", model.use_overrides);
    put(&mut doc, "SurfaceType", model.surface_type.as_str());
    put(&mut doc, "UseCardModel", model.use_card_model);
    put(&mut doc, "Indices", model.indices.clone());
    put(&mut doc, "Emissive", model.emissive);
    Value::Object(doc)
}

fn card_fields(doc: &mut Map<String, Value>, card: &CardTemplate) {
    match &card.shape {
        CardShape::Standard(silhouette) => {
            put(doc, "Model", silhouette.as_str());
        }
        CardShape::Custom { model, convex_collision, shape_accuracy } => {
            put(doc, "Model", model.as_str());
            put(doc, "ConvexCollision", *convex_collision);
            put(doc, "ShapeAccuracy", *shape_accuracy);
        }
    }
    put(doc, "FrontTexture", card.front_texture.clone());
    put(doc, "BackTexture", card.back_texture.clone());
    put(doc, "HiddenTexture", card.hidden_texture.clone());
    put(doc, "BackIndex", card.back_index);
    put(doc, "HiddenIndex", card.hidden_index);
    put(doc, "NumHorizontal", card.num_horizontal);
    put(doc, "NumVertical", card.num_vertical);
    put(doc, "Width", card.width);
    put(doc, "Height", card.height);
    put(doc, "Thickness", card.thickness);
    put(doc, "HiddenInHand", card.hidden_in_hand);
    put(doc, "CanStack", card.can_stack);
    put(doc, "UsedWithCardHolders", card.used_with_card_holders);
    put(doc, "UsePrimaryColorForSide", card.use_primary_color_for_side);
    put(doc, "FrontTextureOverrideExposed", card.front_texture_override_exposed);
    put(doc, "AllowFlippedInStack", card.allow_flipped_in_stack);
    put(doc, "MirrorBack", card.mirror_back);
    put(doc, "EmissiveFront", card.emissive_front);
    put(doc, "Indices", card.indices.clone());
    put(
        doc,
        "CardNames",
        indexed_map(card.card_names.iter().map(|(k, v)| (*k, Value::from(v.clone())))),
    );
    put(
        doc,
        "CardMetadata",
        indexed_map(card.card_metadata.iter().map(|(k, v)| (*k, Value::from(v.clone())))),
    );
    put(
        doc,
        "CardTags",
        indexed_map(card.card_tags.iter().map(|(k, v)| (*k, Value::from(v.clone())))),
    );
}

// ─── Wire primitives ─────────────────────────────────────────────────

fn put(doc: &mut Map<String, Value>, key: &str, value: impl Into<Value>) {
    doc.insert(key.to_string(), value.into());
}

fn vector3_value(v: &Vector3) -> Value {
    let mut doc = Map::new();
    put(&mut doc, "X", v.x);
    put(&mut doc, "Y", v.y);
    put(&mut doc, "Z", v.z);
    Value::Object(doc)
}

fn color3_value(c: &Color3) -> Value {
    let mut doc = Map::new();
    put(&mut doc, "R", c.r);
    put(&mut doc, "G", c.g);
    put(&mut doc, "B", c.b);
    Value::Object(doc)
}

/// Flatten a position into top-level `X`/`Y`/`Z` fields.
fn position_fields(doc: &mut Map<String, Value>, position: &Vector3) {
    put(doc, "X", position.x);
    put(doc, "Y", position.y);
    put(doc, "Z", position.z);
}

fn transform_fields(doc: &mut Map<String, Value>, transform: &Transform3) {
    put(doc, "Offset", vector3_value(&transform.offset));
    put(doc, "Scale", vector3_value(&transform.scale));
    put(doc, "Rotation", vector3_value(&transform.rotation));
}

/// An unset optional reference serializes as the empty string.
fn optional_path(path: Option<&ttpg_core::FilePathRef>) -> Value {
    Value::String(path.map(|p| p.as_str().to_string()).unwrap_or_default())
}

/// Render an index-keyed map with decimal-text keys.
fn indexed_map(entries: impl Iterator<Item = (u32, Value)>) -> Value {
    let mut doc = Map::new();
    for (index, value) in entries {
        doc.insert(index.to_string(), value);
    }
    Value::Object(doc)
}
