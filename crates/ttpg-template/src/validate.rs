//! # Validation Engine — Raw Document to Typed Template
//!
//! Orchestrates the primitive, enum, and compound rules: given an untyped
//! JSON document (and optionally the variant the caller expects), resolves
//! the variant chain, validates every field against its structural and
//! cross-field rules, and produces either a canonical typed [`Template`]
//! or an aggregated [`ErrorReport`].
//!
//! ## Algorithm
//!
//! 1. Classify the variant from `Type`/`Blueprint`. Classification failure
//!    is fail-fast — no field-level rule set can be selected without it.
//! 2. Validate the base fields; every element of the model/collider/light/
//!    snap-point collections is validated independently and all per-element
//!    violations are collected.
//! 3. Validate variant-specific fields, discriminant-first: read the
//!    field(s) selecting a branch, validate only that branch's fields, then
//!    assert absence of every sibling-branch field. Validating fields
//!    before resolving the discriminant would misattribute errors when a
//!    document mixes branches.
//! 4. Apply cross-field rules: Card's shape exclusivity, the figure's
//!    `UseAlpha` ⇔ `ShapeAccuracy` dependency, the multistate double
//!    discriminant (both axes checked independently, both error sets
//!    reported), Table's `Static` collision requirement, and the snap
//!    point's fixed `RotationOffset`.
//! 5. Return the typed value only if the pass recorded no violation.
//!
//! Validation is a pure function of its input: no I/O, no retries, no
//! state across calls. A [`Validator`] may be shared across threads.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::{Map, Value};

use ttpg_core::{
    CardSilhouette, CollisionType, Color3, ErrorReport, FieldPath, FilePathRef, FileRole,
    GroundAccessibility, SnapFlipValidity, SnapRotation, SnapShape, SurfaceType,
    ValidationOptions, Vector3, ViolationKind,
};

use crate::base::TemplateBase;
use crate::collider::Collider;
use crate::light::Light;
use crate::model::{
    Model, ModelGeometry, ModelMultistate, MultistateSilhouette, MultistateTexture, Transform3,
    GEOMETRY_EXTENSIONS, MULTISTATE_TEXTURE_EXTENSIONS,
};
use crate::reader::{as_object, single, Fields, Report};
use crate::snap::{DieFace, SnapPoint, SnapShapeSpec};
use crate::template::{
    CardHolderTemplate, CardShape, CardTemplate, CardboardFigureTemplate, DiceTemplate,
    FigureCutout, MultistateObjectTemplate, Template, TemplateKind,
};

/// The validation engine. Stateless across calls; safe to share between
/// threads and reuse for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    /// Engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit options.
    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// The options this engine validates with.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate a raw document into a typed template.
    pub fn validate(&self, document: &Value) -> Result<Template, ErrorReport> {
        self.validate_inner(document, None)
    }

    /// Validate a raw document that the caller expects to be a specific
    /// variant. A document of any other variant is rejected outright.
    pub fn validate_as(
        &self,
        document: &Value,
        expected: TemplateKind,
    ) -> Result<Template, ErrorReport> {
        self.validate_inner(document, Some(expected))
    }

    fn validate_inner(
        &self,
        document: &Value,
        expected: Option<TemplateKind>,
    ) -> Result<Template, ErrorReport> {
        let map = match document.as_object() {
            Some(map) => map,
            None => {
                return Err(single(
                    FieldPath::root(),
                    ViolationKind::TypeMismatch { expected: "object" },
                ))
            }
        };

        let kind = classify(map)?;
        if let Some(expected) = expected {
            if kind != expected {
                return Err(single(
                    FieldPath::root(),
                    ViolationKind::UnrecognizedVariant {
                        type_name: kind.type_name().to_string(),
                        blueprint: kind.blueprint().to_string(),
                    },
                ));
            }
        }

        let mut report = Report::new();
        let fields = Fields::new(map, FieldPath::root());

        // Classification tolerates an absent Blueprint; the field itself is
        // still required on the wire.
        if !fields.has("Blueprint") {
            report.push(fields.at("Blueprint"), ViolationKind::MissingRequiredField);
        }

        sweep_foreign_fields(&fields, &mut report, kind);

        let base = self.validate_base(&fields, &mut report, kind);

        let template = match kind {
            TemplateKind::Generic => base.map(Template::Generic),
            TemplateKind::Board => base.map(Template::Board),
            TemplateKind::Container => base.map(Template::Container),
            TemplateKind::Table => base.map(Template::Table),
            TemplateKind::Dice => {
                let faces =
                    collection(&fields, &mut report, "Faces", |f, r| self.validate_die_face(f, r));
                (|| Some(Template::Dice(DiceTemplate { base: base?, faces: faces? })))()
            }
            TemplateKind::Card => self
                .validate_card(&fields, &mut report, base)
                .map(|card| Template::Card(Box::new(card))),
            TemplateKind::CardHolder => {
                let cards_center = vector3(&fields, &mut report, "CardsCenter");
                let cards_width = fields.req_f64(&mut report, "CardsWidth");
                let max_cards = fields.req_u32(&mut report, "MaxCards");
                let max_card_height = fields.req_f64(&mut report, "MaxCardHeight");
                (|| {
                    Some(Template::CardHolder(CardHolderTemplate {
                        base: base?,
                        cards_center: cards_center?,
                        cards_width: cards_width?,
                        max_cards: max_cards?,
                        max_card_height: max_card_height?,
                    }))
                })()
            }
            TemplateKind::CardboardFigure => self
                .validate_figure(&fields, &mut report, base)
                .map(Template::CardboardFigure),
            TemplateKind::MultistateObject => {
                let models = collection(&fields, &mut report, "MultistateModels", |f, r| {
                    self.validate_multistate(f, r)
                });
                let circular = fields.req_bool(&mut report, "Circular");
                (|| {
                    Some(Template::MultistateObject(MultistateObjectTemplate {
                        base: base?,
                        models: models?,
                        circular: circular?,
                    }))
                })()
            }
        };

        report.finish(template)
    }

    // ─── Base record ─────────────────────────────────────────────────

    fn validate_base(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
        kind: TemplateKind,
    ) -> Option<TemplateBase> {
        let guid = fields.req_string(report, "GUID");
        let name = fields.req_string(report, "Name");
        let metadata = fields.req_string(report, "Metadata");

        let collision_type = enum_str::<CollisionType>(fields, report, "CollisionType");
        if let Some(collision_type) = collision_type {
            let is_static = collision_type == CollisionType::Static;
            if kind == TemplateKind::Table && !is_static {
                report.push(
                    fields.at("CollisionType"),
                    ViolationKind::CrossFieldConstraintViolated {
                        rule: "Table templates require CollisionType \"Static\"".to_string(),
                    },
                );
            } else if kind != TemplateKind::Table && is_static {
                report.push(
                    fields.at("CollisionType"),
                    ViolationKind::CrossFieldConstraintViolated {
                        rule: "CollisionType \"Static\" is only legal for Table templates"
                            .to_string(),
                    },
                );
            }
        }

        let friction = self.physics_scalar(fields, report, "Friction");
        let restitution = self.physics_scalar(fields, report, "Restitution");
        let density = fields.req_f64(report, "Density");
        let surface_type = enum_str::<SurfaceType>(fields, report, "SurfaceType");
        let roughness = self.physics_scalar(fields, report, "Roughness");
        let metallic = self.physics_scalar(fields, report, "Metallic");
        let primary_color = self.color3(fields, report, "PrimaryColor");
        let secondary_color = self.color3(fields, report, "SecondaryColor");
        let flippable = fields.req_bool(report, "Flippable");
        let auto_straighten = fields.req_bool(report, "AutoStraighten");
        let should_snap = fields.req_bool(report, "ShouldSnap");
        let script_name = fields.req_string(report, "ScriptName");

        // Cards render through dedicated card geometry: their model and
        // collider collections must be present but empty.
        let models = if kind == TemplateKind::Card {
            empty_collection(fields, report, "Models")
        } else {
            collection(fields, report, "Models", |f, r| self.validate_model(f, r))
        };
        let collision = if kind == TemplateKind::Card {
            empty_collection(fields, report, "Collision")
        } else {
            collection(fields, report, "Collision", |f, r| self.validate_collider(f, r))
        };

        let lights = collection(fields, report, "Lights", |f, r| self.validate_light(f, r));
        let snap_points_global = fields.req_bool(report, "SnapPointsGlobal");
        let snap_points =
            collection(fields, report, "SnapPoints", |f, r| self.validate_snap_point(f, r));
        let zoom_view_direction = vector3(fields, report, "ZoomViewDirection");
        let ground_accessibility =
            enum_str::<GroundAccessibility>(fields, report, "GroundAccessibility");
        let tags = fields.req_str_array(report, "Tags");

        (|| {
            Some(TemplateBase {
                guid: guid?,
                name: name?,
                metadata: metadata?,
                collision_type: collision_type?,
                friction: friction?,
                restitution: restitution?,
                density: density?,
                surface_type: surface_type?,
                roughness: roughness?,
                metallic: metallic?,
                primary_color: primary_color?,
                secondary_color: secondary_color?,
                flippable: flippable?,
                auto_straighten: auto_straighten?,
                should_snap: should_snap?,
                script_name: script_name?,
                models: models?,
                collision: collision?,
                lights: lights?,
                snap_points_global: snap_points_global?,
                snap_points: snap_points?,
                zoom_view_direction: zoom_view_direction?,
                ground_accessibility: ground_accessibility?,
                tags: tags?,
            })
        })()
    }

    // ─── Compound structures ─────────────────────────────────────────

    fn validate_model(&self, fields: &Fields<'_>, report: &mut Report) -> Option<Model> {
        // Discriminant first: the geometry reference's extension selects
        // the 3D or 2D shape of the record.
        let geometry = match fields.req_str(report, "Model") {
            None => None,
            Some("") => {
                report.push(fields.at("Model"), ViolationKind::EmptyPathNotAllowed);
                None
            }
            Some(raw) if FileRole::Mesh.matches(raw) => {
                fields.forbid(report, &["ShapeAccuracy"]);
                checked_ref(fields, report, "Model", raw, FileRole::Mesh).map(ModelGeometry::Mesh)
            }
            Some(raw) if FileRole::Image.matches(raw) => {
                let model = checked_ref(fields, report, "Model", raw, FileRole::Image);
                let shape_accuracy = fields.req_f64(report, "ShapeAccuracy");
                (|| Some(ModelGeometry::Image { model: model?, shape_accuracy: shape_accuracy? }))()
            }
            Some(_) => {
                report.push(
                    fields.at("Model"),
                    ViolationKind::ExtensionMismatch { allowed: GEOMETRY_EXTENSIONS },
                );
                None
            }
        };

        let transform = self.transform3(fields, report);
        let texture = fields.req_string(report, "Texture");
        let normal_map = fields.req_string(report, "NormalMap");
        let extra_map = fields.req_string(report, "ExtraMap");
        let extra_map2 = fields.req_string(report, "ExtraMap2");
        let is_transparent = fields.req_bool(report, "IsTransparent");
        let cast_shadow = fields.req_bool(report, "CastShadow");
        let is_two_sided = fields.req_bool(report, "IsTwoSided");
        let use_overrides = fields.req_bool(report, "UseOverrides");
        let surface_type = enum_str::<SurfaceType>(fields, report, "SurfaceType");

        (|| {
            Some(Model {
                geometry: geometry?,
                transform: transform?,
                texture: texture?,
                normal_map: normal_map?,
                extra_map: extra_map?,
                extra_map2: extra_map2?,
                is_transparent: is_transparent?,
                cast_shadow: cast_shadow?,
                is_two_sided: is_two_sided?,
                use_overrides: use_overrides?,
                surface_type: surface_type?,
            })
        })()
    }

    fn validate_collider(&self, fields: &Fields<'_>, report: &mut Report) -> Option<Collider> {
        let transform = self.transform3(fields, report);

        match fields.req_str(report, "Type") {
            None => None,
            Some("Sphere") => {
                // Model is the fixed empty literal for spheres.
                if let Some(model) = fields.req_str(report, "Model") {
                    if !model.is_empty() {
                        report.push(
                            fields.at("Model"),
                            ViolationKind::CrossFieldConstraintViolated {
                                rule: "Model must be empty for Sphere colliders".to_string(),
                            },
                        );
                    }
                }
                fields.forbid(report, &["ShapeAccuracy", "ConvexCollision"]);
                let radius = fields.req_f64(report, "Radius");
                (|| Some(Collider::Sphere { transform: transform?, radius: radius? }))()
            }
            Some("Convex") => match fields.req_str(report, "Model") {
                None => None,
                Some("") => {
                    report.push(fields.at("Model"), ViolationKind::EmptyPathNotAllowed);
                    None
                }
                Some(raw) if FileRole::Mesh.matches(raw) => {
                    fields.forbid(report, &["Radius", "ShapeAccuracy", "ConvexCollision"]);
                    let model = checked_ref(fields, report, "Model", raw, FileRole::Mesh);
                    (|| Some(Collider::Mesh { model: model?, transform: transform? }))()
                }
                Some(raw) if FileRole::Image.matches(raw) => {
                    fields.forbid(report, &["Radius"]);
                    let model = checked_ref(fields, report, "Model", raw, FileRole::Image);
                    let shape_accuracy = fields.req_f64(report, "ShapeAccuracy");
                    let convex_collision = fields.req_bool(report, "ConvexCollision");
                    (|| {
                        Some(Collider::ImageShape {
                            model: model?,
                            shape_accuracy: shape_accuracy?,
                            transform: transform?,
                            convex_collision: convex_collision?,
                        })
                    })()
                }
                Some(_) => {
                    report.push(
                        fields.at("Model"),
                        ViolationKind::ExtensionMismatch { allowed: GEOMETRY_EXTENSIONS },
                    );
                    None
                }
            },
            Some(other) => {
                report.push(
                    fields.at("Type"),
                    ViolationKind::UnknownEnumMember {
                        table: "ColliderType",
                        value: other.to_string(),
                    },
                );
                None
            }
        }
    }

    fn validate_light(&self, fields: &Fields<'_>, report: &mut Report) -> Option<Light> {
        let offset = vector3(fields, report, "Offset");
        let color = self.color3(fields, report, "Color");
        let intensity = fields.req_f64(report, "Intensity");

        // The presence of Direction selects the spot variant.
        if fields.has("Direction") {
            let direction = vector3(fields, report, "Direction");
            let inner_angle = fields.req_f64(report, "InnerAngle");
            let outer_angle = fields.req_f64(report, "OuterAngle");
            (|| {
                Some(Light::Spot {
                    offset: offset?,
                    color: color?,
                    intensity: intensity?,
                    direction: direction?,
                    inner_angle: inner_angle?,
                    outer_angle: outer_angle?,
                })
            })()
        } else {
            fields.forbid(report, &["InnerAngle", "OuterAngle"]);
            (|| Some(Light::Point { offset: offset?, color: color?, intensity: intensity? }))()
        }
    }

    fn validate_snap_point(&self, fields: &Fields<'_>, report: &mut Report) -> Option<SnapPoint> {
        let position = vector3_flat(fields, report);
        let range = fields.req_f64(report, "Range");
        let rotation = wire_enum(fields, report, "SnapRotation", SnapRotation::from_wire);

        // RotationOffset is a fixed wire literal.
        if let Some(value) = fields.req_f64(report, "RotationOffset") {
            if value != 0.0 {
                report.push(
                    fields.at("RotationOffset"),
                    ViolationKind::CrossFieldConstraintViolated {
                        rule: "RotationOffset must be 0".to_string(),
                    },
                );
            }
        }

        let flip_validity = wire_enum(fields, report, "FlipValidity", SnapFlipValidity::from_wire);
        let tags = fields.req_str_array(report, "Tags");

        let shape = match wire_enum(fields, report, "Shape", SnapShape::from_wire) {
            None => None,
            Some(SnapShape::Box) => fields
                .req_f64(report, "SecondaryRange")
                .map(|secondary_range| SnapShapeSpec::Box { secondary_range }),
            Some(SnapShape::Sphere) => {
                fields.forbid(report, &["SecondaryRange"]);
                Some(SnapShapeSpec::Sphere)
            }
            Some(SnapShape::Cylinder) => {
                fields.forbid(report, &["SecondaryRange"]);
                Some(SnapShapeSpec::Cylinder)
            }
        };

        (|| {
            Some(SnapPoint {
                position: position?,
                range: range?,
                rotation: rotation?,
                flip_validity: flip_validity?,
                tags: tags?,
                shape: shape?,
            })
        })()
    }

    fn validate_die_face(&self, fields: &Fields<'_>, report: &mut Report) -> Option<DieFace> {
        let position = vector3_flat(fields, report);
        let name = fields.req_string(report, "Name");
        let metadata = fields.req_string(report, "Metadata");
        (|| Some(DieFace { position: position?, name: name?, metadata: metadata? }))()
    }

    fn validate_multistate(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
    ) -> Option<ModelMultistate> {
        // First axis: silhouette source. Independent of the texture axis;
        // an error here must not suppress texture-axis errors.
        let silhouette = match fields.req_str(report, "Model") {
            None => None,
            Some("") => {
                report.push(fields.at("Model"), ViolationKind::EmptyPathNotAllowed);
                None
            }
            Some(raw) => match raw.parse::<CardSilhouette>() {
                Ok(silhouette) => {
                    fields.forbid(report, &["ShapeAccuracy"]);
                    Some(MultistateSilhouette::Card(silhouette))
                }
                Err(_) if raw.contains('.') => {
                    let model = checked_ref(fields, report, "Model", raw, FileRole::Image);
                    let shape_accuracy = fields.req_f64(report, "ShapeAccuracy");
                    (|| {
                        Some(MultistateSilhouette::Image {
                            model: model?,
                            shape_accuracy: shape_accuracy?,
                        })
                    })()
                }
                Err(kind) => {
                    report.push(fields.at("Model"), kind);
                    None
                }
            },
        };

        // Second axis: texture source.
        let texture = match fields.req_str(report, "Texture") {
            None => None,
            Some("") => {
                report.push(fields.at("Texture"), ViolationKind::EmptyPathNotAllowed);
                None
            }
            Some(raw) if FileRole::Document.matches(raw) => {
                fields.forbid(report, &["NumHorizontal", "NumVertical", "BackTexture", "BackIndex"]);
                checked_ref(fields, report, "Texture", raw, FileRole::Document)
                    .map(MultistateTexture::Document)
            }
            Some(raw) if FileRole::Image.matches(raw) => {
                let sheet = checked_ref(fields, report, "Texture", raw, FileRole::Image);
                let num_horizontal = fields.req_u32(report, "NumHorizontal");
                let num_vertical = fields.req_u32(report, "NumVertical");
                let back_texture =
                    self.optional_file_ref(fields, report, "BackTexture", FileRole::Image);
                let back_index = fields.req_i64(report, "BackIndex");
                (|| {
                    Some(MultistateTexture::Sheet {
                        texture: sheet?,
                        num_horizontal: num_horizontal?,
                        num_vertical: num_vertical?,
                        back_texture: back_texture?,
                        back_index: back_index?,
                    })
                })()
            }
            Some(_) => {
                report.push(
                    fields.at("Texture"),
                    ViolationKind::ExtensionMismatch { allowed: MULTISTATE_TEXTURE_EXTENSIONS },
                );
                None
            }
        };

        let transform = self.transform3(fields, report);
        let normal_map = self.optional_file_ref(fields, report, "NormalMap", FileRole::Image);
        let extra_map = self.optional_file_ref(fields, report, "ExtraMap", FileRole::Image);
        let extra_map2 = self.optional_file_ref(fields, report, "ExtraMap2", FileRole::Image);
        let is_transparent = fields.req_bool(report, "IsTransparent");
        let cast_shadow = fields.req_bool(report, "CastShadow");
        let is_two_sided = fields.req_bool(report, "IsTwoSided");
        let use_overrides = fields.req_bool(report, "UseOverrides");
        let surface_type = enum_str::<SurfaceType>(fields, report, "SurfaceType");
        let use_card_model = fields.req_bool(report, "UseCardModel");
        let indices = fields.req_u32_array(report, "Indices");
        let emissive = fields.req_bool(report, "Emissive");

        (|| {
            Some(ModelMultistate {
                silhouette: silhouette?,
                texture: texture?,
                transform: transform?,
                normal_map: normal_map?,
                extra_map: extra_map?,
                extra_map2: extra_map2?,
                is_transparent: is_transparent?,
                cast_shadow: cast_shadow?,
                is_two_sided: is_two_sided?,
                use_overrides: use_overrides?,
                surface_type: surface_type?,
                use_card_model: use_card_model?,
                indices: indices?,
                emissive: emissive?,
            })
        })()
    }

    // ─── Variant-specific records ────────────────────────────────────

    fn validate_card(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
        base: Option<TemplateBase>,
    ) -> Option<CardTemplate> {
        // Shape discriminant: a silhouette name or a custom image path.
        let shape = match fields.req_str(report, "Model") {
            None => None,
            Some("") => {
                report.push(fields.at("Model"), ViolationKind::EmptyPathNotAllowed);
                None
            }
            Some(raw) => match raw.parse::<CardSilhouette>() {
                Ok(silhouette) => {
                    fields.forbid(report, &["ConvexCollision", "ShapeAccuracy"]);
                    Some(CardShape::Standard(silhouette))
                }
                Err(_) if raw.contains('.') => {
                    let model = checked_ref(fields, report, "Model", raw, FileRole::Image);
                    let convex_collision = fields.req_bool(report, "ConvexCollision");
                    let shape_accuracy = fields.req_f64(report, "ShapeAccuracy");
                    (|| {
                        Some(CardShape::Custom {
                            model: model?,
                            convex_collision: convex_collision?,
                            shape_accuracy: shape_accuracy?,
                        })
                    })()
                }
                Err(kind) => {
                    report.push(fields.at("Model"), kind);
                    None
                }
            },
        };

        let front_texture = fields.req_string(report, "FrontTexture");
        let back_texture = fields.req_string(report, "BackTexture");
        let hidden_texture = fields.req_string(report, "HiddenTexture");
        let back_index = fields.req_i64(report, "BackIndex");
        let hidden_index = fields.req_i64(report, "HiddenIndex");
        let num_horizontal = fields.req_u32(report, "NumHorizontal");
        let num_vertical = fields.req_u32(report, "NumVertical");
        let width = fields.req_f64(report, "Width");
        let height = fields.req_f64(report, "Height");
        let thickness = fields.req_f64(report, "Thickness");
        let hidden_in_hand = fields.req_bool(report, "HiddenInHand");
        let can_stack = fields.req_bool(report, "CanStack");
        let used_with_card_holders = fields.req_bool(report, "UsedWithCardHolders");
        let use_primary_color_for_side = fields.req_bool(report, "UsePrimaryColorForSide");
        let front_texture_override_exposed =
            fields.req_bool(report, "FrontTextureOverrideExposed");
        let allow_flipped_in_stack = fields.req_bool(report, "AllowFlippedInStack");
        let mirror_back = fields.req_bool(report, "MirrorBack");
        let emissive_front = fields.req_bool(report, "EmissiveFront");
        let indices = fields.req_u32_array(report, "Indices");
        let card_names = indexed_string_map(fields, report, "CardNames");
        let card_metadata = indexed_string_map(fields, report, "CardMetadata");
        let card_tags = indexed_tags_map(fields, report, "CardTags");

        (|| {
            Some(CardTemplate {
                base: base?,
                shape: shape?,
                front_texture: front_texture?,
                back_texture: back_texture?,
                hidden_texture: hidden_texture?,
                back_index: back_index?,
                hidden_index: hidden_index?,
                num_horizontal: num_horizontal?,
                num_vertical: num_vertical?,
                width: width?,
                height: height?,
                thickness: thickness?,
                hidden_in_hand: hidden_in_hand?,
                can_stack: can_stack?,
                used_with_card_holders: used_with_card_holders?,
                use_primary_color_for_side: use_primary_color_for_side?,
                front_texture_override_exposed: front_texture_override_exposed?,
                allow_flipped_in_stack: allow_flipped_in_stack?,
                mirror_back: mirror_back?,
                emissive_front: emissive_front?,
                indices: indices?,
                card_names: card_names?,
                card_metadata: card_metadata?,
                card_tags: card_tags?,
            })
        })()
    }

    fn validate_figure(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
        base: Option<TemplateBase>,
    ) -> Option<CardboardFigureTemplate> {
        let front_texture = fields.req_string(report, "FrontTexture");
        let back_texture = fields.req_string(report, "BackTexture");
        let front_extra_map = fields.req_string(report, "FrontExtraMap");
        let back_extra_map = fields.req_string(report, "BackExtraMap");
        let figure_width = fields.req_f64(report, "FigureWidth");
        let figure_height = fields.req_f64(report, "FigureHeight");
        let figure_z_offset = fields.req_f64(report, "FigureZOffset");
        let collide = fields.req_bool(report, "Collide");

        // The alpha flag gates the tracing accuracy: required with alpha
        // cutout, forbidden without.
        let cutout = match fields.req_bool(report, "UseAlpha") {
            None => None,
            Some(true) => fields
                .req_f64(report, "ShapeAccuracy")
                .map(|shape_accuracy| FigureCutout::Alpha { shape_accuracy }),
            Some(false) => {
                fields.forbid(report, &["ShapeAccuracy"]);
                Some(FigureCutout::FullRect)
            }
        };

        (|| {
            Some(CardboardFigureTemplate {
                base: base?,
                front_texture: front_texture?,
                back_texture: back_texture?,
                front_extra_map: front_extra_map?,
                back_extra_map: back_extra_map?,
                figure_width: figure_width?,
                figure_height: figure_height?,
                figure_z_offset: figure_z_offset?,
                collide: collide?,
                cutout: cutout?,
            })
        })()
    }

    // ─── Option-dependent primitives ─────────────────────────────────

    fn color3(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
        name: &'static str,
    ) -> Option<Color3> {
        let value = fields.require(report, name)?;
        let path = fields.at(name);
        let map = as_object(value, &path, report)?;
        let channels = Fields::new(map, path);
        let r = self.color_channel(&channels, report, "R");
        let g = self.color_channel(&channels, report, "G");
        let b = self.color_channel(&channels, report, "B");
        (|| Some(Color3 { r: r?, g: g?, b: b? }))()
    }

    fn color_channel(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
        name: &'static str,
    ) -> Option<f64> {
        let value = fields.req_f64(report, name)?;
        if let Some(range) = &self.options.color_channel_range {
            if !range.contains(value) {
                report.push(
                    fields.at(name),
                    ViolationKind::ComponentOutOfRange { value, min: range.min, max: range.max },
                );
                return None;
            }
        }
        Some(value)
    }

    fn physics_scalar(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
        name: &'static str,
    ) -> Option<f64> {
        let value = fields.req_f64(report, name)?;
        if let Some(range) = &self.options.physics_range {
            if !range.contains(value) {
                report.push(
                    fields.at(name),
                    ViolationKind::ComponentOutOfRange { value, min: range.min, max: range.max },
                );
                return None;
            }
        }
        Some(value)
    }

    fn transform3(&self, fields: &Fields<'_>, report: &mut Report) -> Option<Transform3> {
        let offset = vector3(fields, report, "Offset");
        let scale = vector3(fields, report, "Scale");
        let rotation = vector3(fields, report, "Rotation");
        (|| Some(Transform3 { offset: offset?, scale: scale?, rotation: rotation? }))()
    }

    fn optional_file_ref(
        &self,
        fields: &Fields<'_>,
        report: &mut Report,
        name: &'static str,
        role: FileRole,
    ) -> Option<Option<FilePathRef>> {
        let raw = fields.req_str(report, name)?;
        match FilePathRef::new_optional(raw, role) {
            Ok(reference) => Some(reference),
            Err(kind) => {
                report.push(fields.at(name), kind);
                None
            }
        }
    }
}

/// Validate a raw document with default options.
pub fn validate(document: &Value) -> Result<Template, ErrorReport> {
    Validator::new().validate(document)
}

/// Validate a raw document as a specific variant, with default options.
pub fn validate_as(document: &Value, expected: TemplateKind) -> Result<Template, ErrorReport> {
    Validator::new().validate_as(document, expected)
}

// ─── Classification ──────────────────────────────────────────────────

/// Resolve the document's variant from `Type`/`Blueprint`, fail-fast.
fn classify(map: &Map<String, Value>) -> Result<TemplateKind, ErrorReport> {
    let type_path = FieldPath::root().field("Type");
    let type_name = match map.get("Type") {
        None => return Err(single(type_path, ViolationKind::MissingRequiredField)),
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(single(type_path, ViolationKind::TypeMismatch { expected: "string" }))
        }
    };
    // An absent Blueprint classifies like the empty string; its required
    // presence is enforced by the field pass afterwards.
    let blueprint = match map.get("Blueprint") {
        None => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(single(
                FieldPath::root().field("Blueprint"),
                ViolationKind::TypeMismatch { expected: "string" },
            ))
        }
    };
    TemplateKind::classify(type_name, blueprint).map_err(|kind| single(FieldPath::root(), kind))
}

// ─── Free helpers ────────────────────────────────────────────────────

/// Top-level wire fields of the common base record, including the
/// discriminant pair. Legal for every variant.
const COMMON_FIELDS: &[&str] = &[
    "Type",
    "Blueprint",
    "GUID",
    "Name",
    "Metadata",
    "CollisionType",
    "Friction",
    "Restitution",
    "Density",
    "SurfaceType",
    "Roughness",
    "Metallic",
    "PrimaryColor",
    "SecondaryColor",
    "Flippable",
    "AutoStraighten",
    "ShouldSnap",
    "ScriptName",
    "Models",
    "Collision",
    "Lights",
    "SnapPointsGlobal",
    "SnapPoints",
    "ZoomViewDirection",
    "GroundAccessibility",
    "Tags",
];

/// Report every top-level key that belongs to a sibling variant's field
/// set but not to the resolved variant's own set. Keys outside every
/// variant's vocabulary are ignored.
fn sweep_foreign_fields(fields: &Fields<'_>, report: &mut Report, kind: TemplateKind) {
    for key in fields.keys() {
        if COMMON_FIELDS.contains(&key) || kind.variant_fields().contains(&key) {
            continue;
        }
        let foreign = TemplateKind::all()
            .iter()
            .any(|sibling| sibling.variant_fields().contains(&key));
        if foreign {
            report.push(
                FieldPath::root().field(key.to_string()),
                ViolationKind::ForbiddenFieldPresent,
            );
        }
    }
}

/// Validate every element of an array field independently, collecting all
/// per-element violations.
fn collection<T>(
    fields: &Fields<'_>,
    report: &mut Report,
    name: &'static str,
    mut element: impl FnMut(&Fields<'_>, &mut Report) -> Option<T>,
) -> Option<Vec<T>> {
    let items = fields.req_array(report, name)?;
    let path = fields.at(name);
    let mut out = Vec::with_capacity(items.len());
    let mut clean = true;
    for (index, item) in items.iter().enumerate() {
        let element_path = path.index(index);
        match as_object(item, &element_path, report) {
            Some(map) => match element(&Fields::new(map, element_path), report) {
                Some(value) => out.push(value),
                None => clean = false,
            },
            None => clean = false,
        }
    }
    clean.then_some(out)
}

/// Require an array field to be present and empty.
fn empty_collection<T>(
    fields: &Fields<'_>,
    report: &mut Report,
    name: &'static str,
) -> Option<Vec<T>> {
    let items = fields.req_array(report, name)?;
    if items.is_empty() {
        Some(Vec::new())
    } else {
        report.push(fields.at(name), ViolationKind::ForbiddenFieldPresent);
        None
    }
}

/// Parse a string-wire enum member.
fn enum_str<T>(fields: &Fields<'_>, report: &mut Report, name: &'static str) -> Option<T>
where
    T: FromStr<Err = ViolationKind>,
{
    let raw = fields.req_str(report, name)?;
    match raw.parse::<T>() {
        Ok(member) => Some(member),
        Err(kind) => {
            report.push(fields.at(name), kind);
            None
        }
    }
}

/// Resolve an integer-wire enum member.
fn wire_enum<T>(
    fields: &Fields<'_>,
    report: &mut Report,
    name: &'static str,
    from_wire: fn(i64) -> Result<T, ViolationKind>,
) -> Option<T> {
    let value = fields.req_i64(report, name)?;
    match from_wire(value) {
        Ok(member) => Some(member),
        Err(kind) => {
            report.push(fields.at(name), kind);
            None
        }
    }
}

/// Validate a file reference field with a known-nonempty raw value.
fn checked_ref(
    fields: &Fields<'_>,
    report: &mut Report,
    name: &'static str,
    raw: &str,
    role: FileRole,
) -> Option<FilePathRef> {
    match FilePathRef::new(raw, role) {
        Ok(reference) => Some(reference),
        Err(kind) => {
            report.push(fields.at(name), kind);
            None
        }
    }
}

/// Validate a nested `{X, Y, Z}` vector field.
fn vector3(fields: &Fields<'_>, report: &mut Report, name: &'static str) -> Option<Vector3> {
    let value = fields.require(report, name)?;
    let path = fields.at(name);
    let map = as_object(value, &path, report)?;
    vector3_flat(&Fields::new(map, path), report)
}

/// Validate `X`/`Y`/`Z` components at the current object level (snap
/// points and die faces flatten their position).
fn vector3_flat(fields: &Fields<'_>, report: &mut Report) -> Option<Vector3> {
    let x = fields.req_f64(report, "X");
    let y = fields.req_f64(report, "Y");
    let z = fields.req_f64(report, "Z");
    (|| Some(Vector3 { x: x?, y: y?, z: z? }))()
}

/// Whether a key is the decimal text of a non-negative integer.
fn parse_index_key(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Validate an index-keyed map of strings (`CardNames`, `CardMetadata`).
fn indexed_string_map(
    fields: &Fields<'_>,
    report: &mut Report,
    name: &'static str,
) -> Option<BTreeMap<u32, String>> {
    let map = fields.req_object(report, name)?;
    let path = fields.at(name);
    let mut out = BTreeMap::new();
    let mut clean = true;
    for (key, value) in map {
        match parse_index_key(key) {
            Some(index) => match value.as_str() {
                Some(s) => {
                    out.insert(index, s.to_string());
                }
                None => {
                    report.push(path.key(key), ViolationKind::TypeMismatch { expected: "string" });
                    clean = false;
                }
            },
            None => {
                report.push(path.key(key), ViolationKind::InvalidIndexKey { key: key.clone() });
                clean = false;
            }
        }
    }
    clean.then_some(out)
}

/// Validate an index-keyed map of string lists (`CardTags`).
fn indexed_tags_map(
    fields: &Fields<'_>,
    report: &mut Report,
    name: &'static str,
) -> Option<BTreeMap<u32, Vec<String>>> {
    let map = fields.req_object(report, name)?;
    let path = fields.at(name);
    let mut out = BTreeMap::new();
    let mut clean = true;
    for (key, value) in map {
        let Some(index) = parse_index_key(key) else {
            report.push(path.key(key), ViolationKind::InvalidIndexKey { key: key.clone() });
            clean = false;
            continue;
        };
        match value {
            Value::Array(items) => {
                let entry_path = path.key(key);
                let mut tags = Vec::with_capacity(items.len());
                let mut entry_clean = true;
                for (i, item) in items.iter().enumerate() {
                    match item.as_str() {
                        Some(s) => tags.push(s.to_string()),
                        None => {
                            report.push(
                                entry_path.index(i),
                                ViolationKind::TypeMismatch { expected: "string" },
                            );
                            entry_clean = false;
                        }
                    }
                }
                if entry_clean {
                    out.insert(index, tags);
                } else {
                    clean = false;
                }
            }
            _ => {
                report.push(path.key(key), ViolationKind::TypeMismatch { expected: "array" });
                clean = false;
            }
        }
    }
    clean.then_some(out)
}
