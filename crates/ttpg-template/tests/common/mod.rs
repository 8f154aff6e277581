//! Shared builders: a minimal legal typed template per variant, and the
//! matching canonical document.

#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::Value;

use ttpg_core::{
    CardSilhouette, CollisionType, Color3, FilePathRef, FileRole, GroundAccessibility,
    SurfaceType, Vector3,
};
use ttpg_template::{
    CardHolderTemplate, CardShape, CardTemplate, CardboardFigureTemplate, DiceTemplate,
    DieFace, FigureCutout, ModelMultistate, MultistateObjectTemplate, MultistateSilhouette,
    MultistateTexture, Template, TemplateBase, TemplateKind, Transform3,
};

pub fn image(path: &str) -> FilePathRef {
    FilePathRef::new(path, FileRole::Image).unwrap()
}

pub fn mesh(path: &str) -> FilePathRef {
    FilePathRef::new(path, FileRole::Mesh).unwrap()
}

pub fn document_ref(path: &str) -> FilePathRef {
    FilePathRef::new(path, FileRole::Document).unwrap()
}

pub fn minimal_base(collision_type: CollisionType) -> TemplateBase {
    TemplateBase {
        guid: "0123456789ABCDEF0123456789ABCDEF".to_string(),
        name: "thing".to_string(),
        metadata: String::new(),
        collision_type,
        friction: 0.7,
        restitution: 0.3,
        density: 1.0,
        surface_type: SurfaceType::Plastic,
        roughness: 0.4,
        metallic: 0.0,
        primary_color: Color3 { r: 1.0, g: 1.0, b: 1.0 },
        secondary_color: Color3 { r: 0.0, g: 0.0, b: 0.0 },
        flippable: false,
        auto_straighten: false,
        should_snap: true,
        script_name: String::new(),
        models: Vec::new(),
        collision: Vec::new(),
        lights: Vec::new(),
        snap_points_global: false,
        snap_points: Vec::new(),
        zoom_view_direction: Vector3::ZERO,
        ground_accessibility: GroundAccessibility::Nothing,
        tags: Vec::new(),
    }
}

/// A minimal legal typed instance of the given variant.
pub fn typed(kind: TemplateKind) -> Template {
    match kind {
        TemplateKind::Generic => Template::Generic(minimal_base(CollisionType::Regular)),
        TemplateKind::Board => Template::Board(minimal_base(CollisionType::Ground)),
        TemplateKind::Container => Template::Container(minimal_base(CollisionType::Regular)),
        TemplateKind::Table => Template::Table(minimal_base(CollisionType::Static)),
        TemplateKind::Dice => Template::Dice(DiceTemplate {
            base: minimal_base(CollisionType::Regular),
            faces: vec![
                DieFace {
                    position: Vector3 { x: 0.0, y: 0.0, z: 1.0 },
                    name: "1".to_string(),
                    metadata: String::new(),
                },
                DieFace {
                    position: Vector3 { x: 0.0, y: 0.0, z: -1.0 },
                    name: "2".to_string(),
                    metadata: String::new(),
                },
            ],
        }),
        TemplateKind::Card => Template::Card(Box::new(CardTemplate {
            base: minimal_base(CollisionType::Regular),
            shape: CardShape::Standard(CardSilhouette::Rounded),
            front_texture: "front.jpg".to_string(),
            back_texture: "back.jpg".to_string(),
            hidden_texture: String::new(),
            back_index: -1,
            hidden_index: -2,
            num_horizontal: 1,
            num_vertical: 1,
            width: 6.0,
            height: 9.0,
            thickness: 0.05,
            hidden_in_hand: true,
            can_stack: true,
            used_with_card_holders: true,
            use_primary_color_for_side: false,
            front_texture_override_exposed: false,
            allow_flipped_in_stack: false,
            mirror_back: true,
            emissive_front: false,
            indices: vec![0],
            card_names: BTreeMap::from([(0, "Ace".to_string())]),
            card_metadata: BTreeMap::new(),
            card_tags: BTreeMap::new(),
        })),
        TemplateKind::CardHolder => Template::CardHolder(CardHolderTemplate {
            base: minimal_base(CollisionType::Regular),
            cards_center: Vector3 { x: 0.0, y: 0.0, z: 1.0 },
            cards_width: 20.0,
            max_cards: 32,
            max_card_height: 12.0,
        }),
        TemplateKind::CardboardFigure => Template::CardboardFigure(CardboardFigureTemplate {
            base: minimal_base(CollisionType::Regular),
            front_texture: "front.png".to_string(),
            back_texture: "back.png".to_string(),
            front_extra_map: String::new(),
            back_extra_map: String::new(),
            figure_width: 4.0,
            figure_height: 6.0,
            figure_z_offset: 0.0,
            collide: true,
            cutout: FigureCutout::FullRect,
        }),
        TemplateKind::MultistateObject => {
            Template::MultistateObject(MultistateObjectTemplate {
                base: minimal_base(CollisionType::Regular),
                models: vec![ModelMultistate {
                    silhouette: MultistateSilhouette::Card(CardSilhouette::Rounded),
                    texture: MultistateTexture::Document(document_ref("states.pdf")),
                    transform: Transform3::IDENTITY,
                    normal_map: None,
                    extra_map: None,
                    extra_map2: None,
                    is_transparent: false,
                    cast_shadow: true,
                    is_two_sided: false,
                    use_overrides: false,
                    surface_type: SurfaceType::Cardboard,
                    use_card_model: true,
                    indices: vec![0, 1],
                    emissive: false,
                }],
                circular: false,
            })
        }
    }
}

/// The canonical document of the minimal instance for the given variant.
pub fn document(kind: TemplateKind) -> Value {
    typed(kind).to_document()
}
