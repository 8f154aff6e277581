//! # Template Variant Registry
//!
//! The top-level discriminated union of the nine object-template kinds.
//! The wire discriminant is the `Type` field, disambiguated by `Blueprint`
//! where two kinds share a `Type` (Generic vs Board) or where a kind
//! requires a fixed blueprint (Cardboard Figure).
//!
//! | Kind | `Type` | `Blueprint` |
//! |------|--------|-------------|
//! | Generic | `Generic` | `` |
//! | Board | `Generic` | `Blueprints/Board.json` |
//! | Dice | `Dice` | `` |
//! | Card | `Card` | `` |
//! | CardHolder | `Card Holder` | `` |
//! | Container | `Container` | `` |
//! | CardboardFigure | `Cardboard Figure` | `Blueprints/Figure.json` |
//! | MultistateObject | `Multistate Object` | `` |
//! | Table | `Table` | `` |
//!
//! Any other pair is unrecognized — a Dice document pointing at the board
//! blueprint is rejected outright, not coerced.

use std::collections::BTreeMap;

use ttpg_core::{CardSilhouette, FilePathRef, Vector3, ViolationKind};

use crate::base::TemplateBase;
use crate::model::ModelMultistate;
use crate::snap::DieFace;

/// Tag identifying one of the nine template variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Plain physical object.
    Generic,
    /// Game board (Generic type, fixed board blueprint).
    Board,
    /// Die with named faces.
    Dice,
    /// Card or card stack.
    Card,
    /// Holder that racks cards for one player.
    CardHolder,
    /// Container other objects can be dropped into.
    Container,
    /// Flat figure standing upright.
    CardboardFigure,
    /// Object switching between indexed states.
    MultistateObject,
    /// The table itself.
    Table,
}

impl TemplateKind {
    /// All variant tags in canonical order.
    pub fn all() -> &'static [TemplateKind] {
        &[
            Self::Generic,
            Self::Board,
            Self::Dice,
            Self::Card,
            Self::CardHolder,
            Self::Container,
            Self::CardboardFigure,
            Self::MultistateObject,
            Self::Table,
        ]
    }

    /// The canonical `Type` wire value for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Generic | Self::Board => "Generic",
            Self::Dice => "Dice",
            Self::Card => "Card",
            Self::CardHolder => "Card Holder",
            Self::Container => "Container",
            Self::CardboardFigure => "Cardboard Figure",
            Self::MultistateObject => "Multistate Object",
            Self::Table => "Table",
        }
    }

    /// The canonical `Blueprint` wire value for this kind.
    pub fn blueprint(&self) -> &'static str {
        match self {
            Self::Board => "Blueprints/Board.json",
            Self::CardboardFigure => "Blueprints/Figure.json",
            _ => "",
        }
    }

    /// Top-level wire fields specific to this variant, beyond the common
    /// base record. A document key appearing in a sibling's set but not in
    /// the resolved variant's own set is illegal.
    pub fn variant_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Generic | Self::Board | Self::Container | Self::Table => &[],
            Self::Dice => &["Faces"],
            Self::Card => &[
                "Model",
                "ConvexCollision",
                "ShapeAccuracy",
                "FrontTexture",
                "BackTexture",
                "HiddenTexture",
                "BackIndex",
                "HiddenIndex",
                "NumHorizontal",
                "NumVertical",
                "Width",
                "Height",
                "Thickness",
                "HiddenInHand",
                "CanStack",
                "UsedWithCardHolders",
                "UsePrimaryColorForSide",
                "FrontTextureOverrideExposed",
                "AllowFlippedInStack",
                "MirrorBack",
                "EmissiveFront",
                "Indices",
                "CardNames",
                "CardMetadata",
                "CardTags",
            ],
            Self::CardHolder => &["CardsCenter", "CardsWidth", "MaxCards", "MaxCardHeight"],
            Self::CardboardFigure => &[
                "FrontTexture",
                "BackTexture",
                "FrontExtraMap",
                "BackExtraMap",
                "FigureWidth",
                "FigureHeight",
                "FigureZOffset",
                "Collide",
                "UseAlpha",
                "ShapeAccuracy",
            ],
            Self::MultistateObject => &["MultistateModels", "Circular"],
        }
    }

    /// Resolve a `Type`/`Blueprint` pair to a variant tag.
    ///
    /// The pair must match a known combination exactly; near-misses (a
    /// known `Type` with the wrong blueprint) are unrecognized.
    pub fn classify(type_name: &str, blueprint: &str) -> Result<Self, ViolationKind> {
        for kind in Self::all() {
            if kind.type_name() == type_name && kind.blueprint() == blueprint {
                return Ok(*kind);
            }
        }
        Err(ViolationKind::UnrecognizedVariant {
            type_name: type_name.to_string(),
            blueprint: blueprint.to_string(),
        })
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Generic => "Generic",
            Self::Board => "Board",
            Self::Dice => "Dice",
            Self::Card => "Card",
            Self::CardHolder => "CardHolder",
            Self::Container => "Container",
            Self::CardboardFigure => "CardboardFigure",
            Self::MultistateObject => "MultistateObject",
            Self::Table => "Table",
        };
        f.write_str(s)
    }
}

// ─── Variant payloads ────────────────────────────────────────────────

/// A die template: base plus its faces.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceTemplate {
    /// Common fields.
    pub base: TemplateBase,
    /// The die's faces.
    pub faces: Vec<DieFace>,
}

/// Where a card's silhouette comes from.
///
/// Mutually exclusive with any custom-shape field: a named silhouette never
/// carries `ConvexCollision`/`ShapeAccuracy`.
#[derive(Debug, Clone, PartialEq)]
pub enum CardShape {
    /// One of the built-in silhouettes.
    Standard(CardSilhouette),
    /// A custom image silhouette.
    Custom {
        /// The image reference.
        model: FilePathRef,
        /// Use convex decomposition for collision.
        convex_collision: bool,
        /// Silhouette tracing accuracy.
        shape_accuracy: f64,
    },
}

/// A card (or stack) template.
///
/// Cards render through dedicated card geometry: the base `Models` and
/// `Collision` collections must stay empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTemplate {
    /// Common fields (with empty model/collision collections).
    pub base: TemplateBase,
    /// Silhouette source.
    pub shape: CardShape,
    /// Front texture name.
    pub front_texture: String,
    /// Back texture name.
    pub back_texture: String,
    /// Texture shown while hidden in a stack.
    pub hidden_texture: String,
    /// Sheet index for the back face (negative sentinels allowed).
    pub back_index: i64,
    /// Sheet index for the hidden face (negative sentinels allowed).
    pub hidden_index: i64,
    /// Sheet grid columns.
    pub num_horizontal: u32,
    /// Sheet grid rows.
    pub num_vertical: u32,
    /// Card width.
    pub width: f64,
    /// Card height.
    pub height: f64,
    /// Card thickness.
    pub thickness: f64,
    /// Face stays hidden while held in a hand.
    pub hidden_in_hand: bool,
    /// Cards of this template may stack.
    pub can_stack: bool,
    /// Card may be placed in card holders.
    pub used_with_card_holders: bool,
    /// Tint card sides with the primary color.
    pub use_primary_color_for_side: bool,
    /// Expose the front texture as a script override.
    pub front_texture_override_exposed: bool,
    /// Allow flipped cards inside a stack.
    pub allow_flipped_in_stack: bool,
    /// Mirror the back texture.
    pub mirror_back: bool,
    /// Emissive front rendering.
    pub emissive_front: bool,
    /// Which sheet indices this template exposes.
    pub indices: Vec<u32>,
    /// Per-index card names, keyed by sheet index.
    pub card_names: BTreeMap<u32, String>,
    /// Per-index metadata, keyed by sheet index.
    pub card_metadata: BTreeMap<u32, String>,
    /// Per-index tags, keyed by sheet index.
    pub card_tags: BTreeMap<u32, Vec<String>>,
}

/// A card holder template.
#[derive(Debug, Clone, PartialEq)]
pub struct CardHolderTemplate {
    /// Common fields.
    pub base: TemplateBase,
    /// Center of the card row.
    pub cards_center: Vector3,
    /// Width of the card row.
    pub cards_width: f64,
    /// Maximum number of held cards.
    pub max_cards: u32,
    /// Maximum height of a held card.
    pub max_card_height: f64,
}

/// How a cardboard figure's outline is cut.
///
/// The tracing accuracy exists iff the alpha channel drives the cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FigureCutout {
    /// Cut along the front texture's alpha channel.
    Alpha {
        /// Outline tracing accuracy.
        shape_accuracy: f64,
    },
    /// Use the full rectangle.
    FullRect,
}

/// A cardboard figure template.
#[derive(Debug, Clone, PartialEq)]
pub struct CardboardFigureTemplate {
    /// Common fields.
    pub base: TemplateBase,
    /// Front texture name.
    pub front_texture: String,
    /// Back texture name.
    pub back_texture: String,
    /// Front extra map name.
    pub front_extra_map: String,
    /// Back extra map name.
    pub back_extra_map: String,
    /// Figure width.
    pub figure_width: f64,
    /// Figure height.
    pub figure_height: f64,
    /// Vertical offset of the figure above its base.
    pub figure_z_offset: f64,
    /// Figure blocks other objects.
    pub collide: bool,
    /// Outline cutout mode (the `UseAlpha` discriminant).
    pub cutout: FigureCutout,
}

/// A multistate object template.
#[derive(Debug, Clone, PartialEq)]
pub struct MultistateObjectTemplate {
    /// Common fields.
    pub base: TemplateBase,
    /// The state-switching models.
    pub models: Vec<ModelMultistate>,
    /// State index wraps around instead of clamping.
    pub circular: bool,
}

/// A validated object template: one of the nine variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// Plain physical object.
    Generic(TemplateBase),
    /// Game board.
    Board(TemplateBase),
    /// Die with named faces.
    Dice(DiceTemplate),
    /// Card or card stack.
    Card(Box<CardTemplate>),
    /// Card holder.
    CardHolder(CardHolderTemplate),
    /// Container.
    Container(TemplateBase),
    /// Cardboard figure.
    CardboardFigure(CardboardFigureTemplate),
    /// Multistate object.
    MultistateObject(MultistateObjectTemplate),
    /// Table (collision forced to `Static`).
    Table(TemplateBase),
}

impl Template {
    /// The variant tag of this template.
    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::Generic(_) => TemplateKind::Generic,
            Self::Board(_) => TemplateKind::Board,
            Self::Dice(_) => TemplateKind::Dice,
            Self::Card(_) => TemplateKind::Card,
            Self::CardHolder(_) => TemplateKind::CardHolder,
            Self::Container(_) => TemplateKind::Container,
            Self::CardboardFigure(_) => TemplateKind::CardboardFigure,
            Self::MultistateObject(_) => TemplateKind::MultistateObject,
            Self::Table(_) => TemplateKind::Table,
        }
    }

    /// The common base record of any variant.
    pub fn base(&self) -> &TemplateBase {
        match self {
            Self::Generic(base)
            | Self::Board(base)
            | Self::Container(base)
            | Self::Table(base) => base,
            Self::Dice(t) => &t.base,
            Self::Card(t) => &t.base,
            Self::CardHolder(t) => &t.base,
            Self::CardboardFigure(t) => &t.base,
            Self::MultistateObject(t) => &t.base,
        }
    }
}
