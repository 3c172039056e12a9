use crate::config::{Orientation, WheelConfig};
use crate::events::{SlotIndex, WheelEvent};
use crate::geometry::{Vec2, signed_angle, wrap_degrees};
use crate::input::InputSample;
use crate::layout::WheelLayout;

/// Host geometry used to turn a pointer position into a direction. All positions share
/// the pointer's screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerGeometry {
    pub canvas_size: Vec2,
    pub content_size: Vec2,
    pub content_center: Vec2,
}

impl ContainerGeometry {
    pub fn new(canvas_size: Vec2, content_size: Vec2, content_center: Vec2) -> Self {
        Self {
            canvas_size,
            content_size,
            content_center,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.canvas_size.is_degenerate() || self.content_size.is_degenerate()
    }

    /// Pointer offset from the content centre, scaled by the content size.
    pub fn normalize_pointer(&self, pointer: Vec2) -> Option<Vec2> {
        (pointer - self.content_center).div_components(self.content_size)
    }
}

/// Picks the authoritative source and applies the dead zone. The pointer only wins while
/// the stick sits inside the dead zone.
pub fn resolve_direction(
    sample: &InputSample,
    geometry: &ContainerGeometry,
    dead_zone: f64,
) -> Option<Vec2> {
    let threshold = dead_zone * dead_zone;
    let axis = sample.axis_or_zero();

    let raw = match sample.pointer {
        Some(pointer) if axis.length_squared() <= threshold => {
            geometry.normalize_pointer(pointer)?
        }
        _ => axis,
    };

    if raw.length_squared() > threshold {
        raw.normalized()
    } else {
        None
    }
}

/// Angle of `direction` from "up", counterclockwise positive, shifted by the cursor's
/// offset and wrapped into `[0, 360)`.
pub fn selection_angle(direction: Vec2, cursor_offset: f64) -> f64 {
    wrap_degrees(signed_angle(Vec2::UP, direction) + cursor_offset)
}

/// Index of the slot containing `angle`. Lower slot edges are inclusive.
pub fn quantize(angle: f64, slot_width: f64, count: usize) -> usize {
    if count == 0 || slot_width.is_nan() || slot_width <= 0.0 {
        return 0;
    }
    let raw = (angle / slot_width).floor();
    if raw.is_nan() || raw < 0.0 {
        0
    } else {
        (raw as usize).min(count - 1)
    }
}

/// Maps a counterclockwise sweep index into the wheel's item order.
pub fn remap_for_orientation(raw: usize, count: usize, orientation: Orientation) -> usize {
    if count == 0 {
        return 0;
    }
    match orientation {
        Orientation::Clockwise => (count - raw % count) % count,
        Orientation::CounterClockwise => raw,
    }
}

/// Everything one selection pass reads.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    pub sample: &'a InputSample,
    pub geometry: &'a ContainerGeometry,
    pub layout: &'a WheelLayout,
    pub config: &'a WheelConfig,
    /// Whether the control is pressed or selected.
    pub engaged: bool,
    pub previous: Option<SlotIndex>,
    pub clicking: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionOutcome {
    pub index: Option<SlotIndex>,
    pub events: Vec<WheelEvent>,
    /// Cursor rotation for this tick, `None` when no direction qualified.
    pub cursor_rotation: Option<f64>,
}

pub fn compute_selection(request: &SelectionRequest<'_>) -> SelectionOutcome {
    let count = request.layout.item_count();
    let direction = (request.engaged && count > 0 && !request.geometry.is_degenerate())
        .then(|| {
            resolve_direction(
                request.sample,
                request.geometry,
                request.config.input_dead_zone(),
            )
        })
        .flatten();

    let mut outcome = SelectionOutcome::default();

    let Some(direction) = direction else {
        if let Some(previous) = request.previous {
            outcome.events.push(WheelEvent::Deselected(Some(previous)));
        }
        return outcome;
    };

    let cursor_offset = request.layout.cursor_offset();
    let angle = selection_angle(direction, cursor_offset);
    outcome.cursor_rotation = Some(angle - cursor_offset * request.config.item_spacing());

    let raw = quantize(angle, request.layout.slot_width, count);
    let index = SlotIndex::new(remap_for_orientation(
        raw,
        count,
        request.config.orientation(),
    ));

    if request.previous != Some(index) {
        outcome.events.push(WheelEvent::Deselected(request.previous));
        outcome.events.push(WheelEvent::Selected(index));
    }
    if request.clicking {
        outcome.events.push(WheelEvent::Clicked(index));
    }
    outcome.index = Some(index);
    outcome
}
