use crate::config::{ContentRotationMode, WheelConfig};
use crate::error::WheelError;
use crate::geometry::{FULL_TURN, Vec2, wrap_degrees};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Winding of a radial fill.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FillDirection {
    #[default]
    #[strum(to_string = "clockwise", serialize = "cw")]
    Clockwise,
    #[strum(
        to_string = "counterclockwise",
        serialize = "ccw",
        serialize = "anticlockwise"
    )]
    CounterClockwise,
}

impl FillDirection {
    fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// Edge a radial fill starts from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FillOrigin {
    #[default]
    #[strum(to_string = "bottom", serialize = "b", serialize = "0")]
    Bottom,
    #[strum(to_string = "right", serialize = "r", serialize = "1")]
    Right,
    #[strum(to_string = "top", serialize = "t", serialize = "2")]
    Top,
    #[strum(to_string = "left", serialize = "l", serialize = "3")]
    Left,
}

impl FillOrigin {
    /// Quarter turns from "up" to the origin edge, measured along a clockwise fill.
    fn quarter_turns(self) -> f64 {
        match self {
            Self::Bottom => 2.0,
            Self::Right => 3.0,
            Self::Top => 0.0,
            Self::Left => 1.0,
        }
    }
}

impl TryFrom<u8> for FillOrigin {
    type Error = WheelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Bottom),
            1 => Ok(Self::Right),
            2 => Ok(Self::Top),
            3 => Ok(Self::Left),
            other => Err(WheelError::FillOriginOutOfRange(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RadialFill {
    pub direction: FillDirection,
    pub origin: FillOrigin,
}

impl RadialFill {
    pub fn new(direction: FillDirection, origin: FillOrigin) -> Self {
        Self { direction, origin }
    }

    /// Rotation that lines the unfilled gap up with the seam between slots.
    pub fn rotation_offset(&self, slot_width: f64) -> f64 {
        let sign = self.direction.sign();
        let offset = slot_width * 0.5 * sign + self.origin.quarter_turns() * 90.0 * sign;
        wrap_degrees(offset)
    }
}

/// A highlight-capable graphic attached to an item or to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemGraphic {
    Plain,
    Radial(RadialFill),
}

impl ItemGraphic {
    pub fn radial_fill(&self) -> Option<&RadialFill> {
        match self {
            Self::Plain => None,
            Self::Radial(fill) => Some(fill),
        }
    }

    pub fn rotation_offset(&self, slot_width: f64) -> f64 {
        self.radial_fill()
            .map(|fill| fill.rotation_offset(slot_width))
            .unwrap_or(0.0)
    }
}

/// One entry of the ring. Items without a graphic still occupy a slot but are never
/// highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemSlot {
    pub graphic: Option<ItemGraphic>,
}

impl ItemSlot {
    pub fn bare() -> Self {
        Self { graphic: None }
    }

    pub fn plain() -> Self {
        Self {
            graphic: Some(ItemGraphic::Plain),
        }
    }

    pub fn radial(direction: FillDirection, origin: FillOrigin) -> Self {
        Self {
            graphic: Some(ItemGraphic::Radial(RadialFill::new(direction, origin))),
        }
    }

    pub fn is_highlightable(&self) -> bool {
        self.graphic.is_some()
    }
}

/// Orientation directive for an item's inner content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentRotation {
    Keep,
    /// World rotation forced to zero.
    Upright,
    /// Local rotation forced to the given angle in degrees.
    Local(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    pub index: usize,
    /// De-spaced rotation offset in `[0, 360)`.
    pub rotation_offset: f64,
    /// Set only for items whose graphic is a radial fill.
    pub fill_amount: Option<f64>,
    pub content_offset: Vec2,
    pub content_rotation: ContentRotation,
    /// Placement angle of the item container.
    pub slot_rotation: f64,
    pub highlightable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorLayout {
    /// Raw (not de-spaced) offset added to the selection angle.
    pub rotation_offset: f64,
    pub fill_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub slot_width: f64,
    pub items: Vec<ItemLayout>,
    pub cursor: Option<CursorLayout>,
    /// Uniform scale of the dead-zone indicator.
    pub pivot_scale: f64,
}

impl WheelLayout {
    pub fn compute(items: &[ItemSlot], cursor: Option<&ItemGraphic>, config: &WheelConfig) -> Self {
        let count = items.len();
        let spacing = config.item_spacing();

        if count == 0 {
            return Self {
                slot_width: FULL_TURN,
                items: Vec::new(),
                cursor: cursor.map(|graphic| CursorLayout {
                    rotation_offset: graphic.rotation_offset(FULL_TURN),
                    fill_amount: None,
                }),
                pivot_scale: config.input_dead_zone(),
            };
        }

        let slot_width = FULL_TURN / count as f64;
        let fill_amount = (1.0 - spacing) / count as f64;

        let items = items
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                Self::layout_item(index, count, slot, slot_width, fill_amount, config)
            })
            .collect();

        let cursor = cursor.map(|graphic| CursorLayout {
            rotation_offset: graphic.rotation_offset(slot_width),
            fill_amount: graphic.radial_fill().map(|_| fill_amount),
        });

        log::trace!("layout: {count} items, slot width {slot_width:.3}, fill {fill_amount:.4}");

        Self {
            slot_width,
            items,
            cursor,
            pivot_scale: config.input_dead_zone(),
        }
    }

    fn layout_item(
        index: usize,
        count: usize,
        slot: &ItemSlot,
        slot_width: f64,
        fill_amount: f64,
        config: &WheelConfig,
    ) -> ItemLayout {
        let spacing = config.item_spacing();
        let rotation_offset = slot
            .graphic
            .map(|graphic| {
                let raw = graphic.rotation_offset(slot_width);
                wrap_degrees(raw - raw * spacing)
            })
            .unwrap_or(0.0);

        let content_rotation = match config.content_rotation_mode() {
            ContentRotationMode::Free => ContentRotation::Keep,
            ContentRotationMode::FixedToView => ContentRotation::Upright,
            ContentRotationMode::FixedToItem => ContentRotation::Local(-rotation_offset),
        };

        let position = if config.orientation().is_clockwise() {
            count - index
        } else {
            index
        };

        ItemLayout {
            index,
            rotation_offset,
            fill_amount: slot
                .graphic
                .and_then(|graphic| graphic.radial_fill().map(|_| fill_amount)),
            content_offset: Vec2::from_degrees(rotation_offset) * config.content_height(),
            content_rotation,
            slot_rotation: slot_width * position as f64 + rotation_offset,
            highlightable: slot.is_highlightable(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item to highlight for `index`, if it exists and carries a graphic.
    pub fn highlight_target(&self, index: usize) -> Option<usize> {
        self.items
            .get(index)
            .filter(|item| item.highlightable)
            .map(|item| item.index)
    }

    pub fn cursor_offset(&self) -> f64 {
        self.cursor.map(|c| c.rotation_offset).unwrap_or(0.0)
    }
}
