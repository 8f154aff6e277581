//! Round-trip coverage: serializing a typed template and validating the
//! result must reproduce the original value, for every variant and for
//! every discriminated branch.

mod common;

use std::collections::BTreeMap;

use proptest::prelude::*;

use ttpg_core::{
    CardSilhouette, Color3, SnapFlipValidity, SnapRotation, SurfaceType, Vector3,
};
use ttpg_template::{
    validate, CardShape, Collider, FigureCutout, Light, Model, ModelGeometry,
    MultistateSilhouette, MultistateTexture, SnapPoint, SnapShapeSpec, Template, TemplateKind,
    Transform3,
};

fn roundtrip(template: Template) {
    let doc = template.to_document();
    let reparsed = validate(&doc).unwrap_or_else(|report| {
        panic!("canonical document of {} failed validation: {report}", template.kind())
    });
    assert_eq!(reparsed, template);
}

#[test]
fn test_every_variant_roundtrips_minimal() {
    for kind in TemplateKind::all() {
        roundtrip(common::typed(*kind));
    }
}

#[test]
fn test_generic_with_all_collection_branches() {
    let mut base = common::minimal_base(ttpg_core::CollisionType::Regular);
    base.models = vec![
        Model {
            geometry: ModelGeometry::Mesh(common::mesh("body.obj")),
            transform: Transform3::IDENTITY,
            texture: "body.jpg".to_string(),
            normal_map: String::new(),
            extra_map: String::new(),
            extra_map2: String::new(),
            is_transparent: false,
            cast_shadow: true,
            is_two_sided: false,
            use_overrides: true,
            surface_type: SurfaceType::Wood,
        },
        Model {
            geometry: ModelGeometry::Image {
                model: common::image("token.png"),
                shape_accuracy: 0.8,
            },
            transform: Transform3 {
                offset: Vector3 { x: 0.0, y: 0.0, z: 0.2 },
                scale: Vector3::ONE,
                rotation: Vector3::ZERO,
            },
            texture: "token.png".to_string(),
            normal_map: String::new(),
            extra_map: String::new(),
            extra_map2: String::new(),
            is_transparent: true,
            cast_shadow: false,
            is_two_sided: true,
            use_overrides: false,
            surface_type: SurfaceType::Cardboard,
        },
    ];
    base.collision = vec![
        Collider::Mesh { model: common::mesh("hull.obj"), transform: Transform3::IDENTITY },
        Collider::Sphere { transform: Transform3::IDENTITY, radius: 1.5 },
        Collider::ImageShape {
            model: common::image("token.png"),
            shape_accuracy: 0.5,
            transform: Transform3::IDENTITY,
            convex_collision: true,
        },
    ];
    base.lights = vec![
        Light::Point {
            offset: Vector3 { x: 0.0, y: 0.0, z: 3.0 },
            color: Color3 { r: 1.0, g: 0.9, b: 0.7 },
            intensity: 4.0,
        },
        Light::Spot {
            offset: Vector3 { x: 0.0, y: 0.0, z: 5.0 },
            color: Color3 { r: 1.0, g: 1.0, b: 1.0 },
            intensity: 8.0,
            direction: Vector3 { x: 0.0, y: 0.0, z: -1.0 },
            inner_angle: 20.0,
            outer_angle: 35.0,
        },
    ];
    base.snap_points = vec![
        SnapPoint {
            position: Vector3 { x: 1.0, y: 0.0, z: 0.0 },
            range: 1.0,
            rotation: SnapRotation::NoChange,
            flip_validity: SnapFlipValidity::Always,
            tags: vec!["seat".to_string()],
            shape: SnapShapeSpec::Sphere,
        },
        SnapPoint {
            position: Vector3 { x: -1.0, y: 0.0, z: 0.0 },
            range: 2.0,
            rotation: SnapRotation::RotateUpright,
            flip_validity: SnapFlipValidity::Upright,
            tags: vec![],
            shape: SnapShapeSpec::Box { secondary_range: 3.0 },
        },
        SnapPoint {
            position: Vector3::ZERO,
            range: 0.5,
            rotation: SnapRotation::NoFlip,
            flip_validity: SnapFlipValidity::UpsideDown,
            tags: vec![],
            shape: SnapShapeSpec::Cylinder,
        },
    ];
    base.tags = vec!["scenery".to_string(), "heavy".to_string()];
    roundtrip(Template::Generic(base));
}

#[test]
fn test_card_with_custom_shape_and_maps() {
    let mut template = common::typed(TemplateKind::Card);
    if let Template::Card(card) = &mut template {
        card.shape = CardShape::Custom {
            model: common::image("coin.png"),
            convex_collision: true,
            shape_accuracy: 0.9,
        };
        card.indices = vec![0, 1, 2];
        card.card_names = BTreeMap::from([
            (0, "Ace".to_string()),
            (1, "Two".to_string()),
            (12, "Queen".to_string()),
        ]);
        card.card_metadata = BTreeMap::from([(1, "{\"suit\":\"spades\"}".to_string())]);
        card.card_tags = BTreeMap::from([(0, vec!["red".to_string(), "royal".to_string()])]);
    }
    roundtrip(template);
}

#[test]
fn test_figure_with_alpha_cutout() {
    let mut template = common::typed(TemplateKind::CardboardFigure);
    if let Template::CardboardFigure(figure) = &mut template {
        figure.cutout = FigureCutout::Alpha { shape_accuracy: 0.75 };
    }
    roundtrip(template);
}

#[test]
fn test_multistate_all_branch_combinations() {
    let silhouettes = [
        MultistateSilhouette::Card(CardSilhouette::Hexagonal),
        MultistateSilhouette::Image { model: common::image("tile.png"), shape_accuracy: 0.6 },
    ];
    let textures = [
        MultistateTexture::Document(common::document_ref("states.pdf")),
        MultistateTexture::Sheet {
            texture: common::image("sheet.png"),
            num_horizontal: 4,
            num_vertical: 2,
            back_texture: Some(common::image("back.png")),
            back_index: 7,
        },
        MultistateTexture::Sheet {
            texture: common::image("sheet.png"),
            num_horizontal: 2,
            num_vertical: 2,
            back_texture: None,
            back_index: -1,
        },
    ];
    for silhouette in &silhouettes {
        for texture in &textures {
            let mut template = common::typed(TemplateKind::MultistateObject);
            if let Template::MultistateObject(multistate) = &mut template {
                multistate.models[0].silhouette = silhouette.clone();
                multistate.models[0].texture = texture.clone();
                multistate.models[0].normal_map = Some(common::image("normals.tga"));
            }
            roundtrip(template);
        }
    }
}

#[test]
fn test_serialization_is_deterministic() {
    for kind in TemplateKind::all() {
        let template = common::typed(*kind);
        let first = template.to_document().to_string();
        let second = template.to_document().to_string();
        assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_generic_scalars_roundtrip(
        friction in 0.0f64..4.0,
        restitution in 0.0f64..1.0,
        density in 0.01f64..100.0,
        red in 0.0f64..=1.0,
        name in "[A-Za-z0-9 _-]{0,16}",
    ) {
        let mut base = common::minimal_base(ttpg_core::CollisionType::Regular);
        base.friction = friction;
        base.restitution = restitution;
        base.density = density;
        base.primary_color.r = red;
        base.name = name;
        let template = Template::Generic(base);
        let doc = template.to_document();
        prop_assert_eq!(validate(&doc).unwrap(), template);
    }

    #[test]
    fn prop_card_index_maps_roundtrip(entries in proptest::collection::btree_map(0u32..200, "[a-z]{1,8}", 0..6)) {
        let mut template = common::typed(TemplateKind::Card);
        if let Template::Card(card) = &mut template {
            card.card_names = entries;
        }
        let doc = template.to_document();
        prop_assert_eq!(validate(&doc).unwrap(), template);
    }
}
