use serde::{Deserialize, Deserializer, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// How an item's inner content is oriented once the item itself is rotated into its slot.
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
pub enum ContentRotationMode {
    /// Content keeps whatever orientation it already has.
    #[strum(to_string = "free")]
    Free,
    /// Content stays upright relative to the screen.
    #[default]
    #[strum(to_string = "fixed-to-view", serialize = "FixedToView", serialize = "view")]
    FixedToView,
    /// Content counter-rotates against its item's offset, upright relative to the wheel.
    #[strum(to_string = "fixed-to-item", serialize = "FixedToItem", serialize = "item")]
    FixedToItem,
}

/// Rotational order of item indices around the wheel.
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
pub enum Orientation {
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

impl Orientation {
    pub fn is_clockwise(self) -> bool {
        self == Self::Clockwise
    }
}

pub const DEFAULT_INPUT_DEAD_ZONE: f64 = 0.0625;

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

fn unit_interval<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_unit)
}

fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(clamp_non_negative)
}

/// Wheel parameters. Every numeric field is clamped into range on deserialize, on set,
/// and again by [`WheelConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    orientation: Orientation,
    #[serde(deserialize_with = "unit_interval")]
    item_spacing: f64,
    #[serde(deserialize_with = "non_negative")]
    content_height: f64,
    content_rotation_mode: ContentRotationMode,
    #[serde(deserialize_with = "unit_interval")]
    input_dead_zone: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Clockwise,
            item_spacing: 0.0,
            content_height: 0.0,
            content_rotation_mode: ContentRotationMode::FixedToView,
            input_dead_zone: DEFAULT_INPUT_DEAD_ZONE,
        }
    }
}

impl WheelConfig {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.set_orientation(orientation);
        self
    }

    /// Fraction of the full circle left as gaps between items.
    pub fn item_spacing(&self) -> f64 {
        self.item_spacing
    }

    pub fn set_item_spacing(&mut self, spacing: f64) {
        self.item_spacing = clamp_unit(spacing);
    }

    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.set_item_spacing(spacing);
        self
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn set_content_height(&mut self, height: f64) {
        self.content_height = clamp_non_negative(height);
    }

    pub fn with_content_height(mut self, height: f64) -> Self {
        self.set_content_height(height);
        self
    }

    pub fn content_rotation_mode(&self) -> ContentRotationMode {
        self.content_rotation_mode
    }

    pub fn set_content_rotation_mode(&mut self, mode: ContentRotationMode) {
        self.content_rotation_mode = mode;
    }

    pub fn with_content_rotation_mode(mut self, mode: ContentRotationMode) -> Self {
        self.set_content_rotation_mode(mode);
        self
    }

    /// Radius in normalized direction space below which input is ignored.
    pub fn input_dead_zone(&self) -> f64 {
        self.input_dead_zone
    }

    pub fn set_input_dead_zone(&mut self, dead_zone: f64) {
        self.input_dead_zone = clamp_unit(dead_zone);
    }

    pub fn with_input_dead_zone(mut self, dead_zone: f64) -> Self {
        self.set_input_dead_zone(dead_zone);
        self
    }

    /// Re-clamps every field.
    pub fn validate(&mut self) {
        self.item_spacing = clamp_unit(self.item_spacing);
        self.content_height = clamp_non_negative(self.content_height);
        self.input_dead_zone = clamp_unit(self.input_dead_zone);
    }
}
