use crate::config::WheelConfig;
use crate::error::WheelError;
use crate::events::{Observers, SlotIndex, WheelEvent, WheelObserver};
use crate::input::InputProvider;
use crate::layout::{ItemGraphic, ItemSlot, WheelLayout};
use crate::selection::{ContainerGeometry, SelectionRequest, compute_selection};
use strum::{Display as StrumDisplay, EnumString};

/// Interaction state of the control as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum SelectionState {
    #[default]
    Normal,
    Highlighted,
    Pressed,
    Selected,
    Disabled,
}

impl SelectionState {
    /// Direction sampling only happens while pressed or selected.
    pub fn is_engaged(self) -> bool {
        matches!(self, Self::Pressed | Self::Selected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PointerButton {
    #[strum(serialize = "left", serialize = "primary")]
    Primary,
    #[strum(serialize = "right", serialize = "secondary")]
    Secondary,
    Middle,
}

/// What a tick produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    pub events: Vec<WheelEvent>,
    pub selected: Option<SlotIndex>,
    pub highlight: Option<SlotIndex>,
    pub cursor_rotation: Option<f64>,
}

/// A radial selection wheel. Owns its items, selection and click latch, and recomputes
/// layout and selection on every [`DaisyWheel::tick`].
#[derive(Debug)]
pub struct DaisyWheel {
    config: WheelConfig,
    items: Vec<ItemSlot>,
    cursor: Option<ItemGraphic>,
    state: SelectionState,
    interactable: bool,
    selected: Option<SlotIndex>,
    clicking: bool,
    cursor_rotation: f64,
    layout: WheelLayout,
    observers: Observers,
}

impl Default for DaisyWheel {
    fn default() -> Self {
        Self::new(WheelConfig::default())
    }
}

impl DaisyWheel {
    pub fn new(config: WheelConfig) -> Self {
        let layout = WheelLayout::compute(&[], None, &config);
        Self {
            config,
            items: Vec::new(),
            cursor: None,
            state: SelectionState::Normal,
            interactable: true,
            selected: None,
            clicking: false,
            cursor_rotation: 0.0,
            layout,
            observers: Observers::default(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemSlot>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn with_cursor(mut self, cursor: ItemGraphic) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn set_config(&mut self, mut config: WheelConfig) {
        config.validate();
        self.config = config;
    }

    pub fn items(&self) -> &[ItemSlot] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<ItemSlot>) {
        self.items = items;
    }

    pub fn push_item(&mut self, item: ItemSlot) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, index: usize) -> Result<ItemSlot, WheelError> {
        if index >= self.items.len() {
            return Err(WheelError::SlotOutOfRange {
                index,
                count: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn cursor(&self) -> Option<&ItemGraphic> {
        self.cursor.as_ref()
    }

    pub fn set_cursor(&mut self, cursor: Option<ItemGraphic>) {
        self.cursor = cursor;
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn set_state(&mut self, state: SelectionState) {
        if !self.interactable && state != SelectionState::Disabled {
            log::debug!("Ignoring {} on a disabled wheel", state);
            return;
        }
        self.state = state;
    }

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Disabling forces [`SelectionState::Disabled`]; re-enabling returns to
    /// [`SelectionState::Normal`]. Setting the current value leaves the state alone.
    pub fn set_interactable(&mut self, interactable: bool) {
        if self.interactable == interactable {
            return;
        }
        self.interactable = interactable;
        self.state = if interactable {
            SelectionState::Normal
        } else {
            SelectionState::Disabled
        };
    }

    pub fn subscribe(&mut self, observer: impl WheelObserver + 'static) {
        self.observers.subscribe(observer);
    }

    fn can_click(&self) -> bool {
        self.interactable && self.state != SelectionState::Disabled
    }

    /// Latches a click for the next tick. Only the primary button counts.
    pub fn pointer_click(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.submit();
        }
    }

    /// Latches a click for the next tick.
    pub fn submit(&mut self) {
        if self.can_click() {
            self.clicking = true;
        }
    }

    /// Current selection, `None` if nothing is selected or the item count has since
    /// shrunk below it.
    pub fn selected_index(&self) -> Option<SlotIndex> {
        self.selected.filter(|i| i.get() < self.items.len())
    }

    /// Item to highlight for the current selection, `None` for a stale index or an item
    /// without a graphic.
    pub fn highlight_target(&self) -> Option<SlotIndex> {
        self.selected_index().filter(|i| {
            self.items
                .get(i.get())
                .is_some_and(ItemSlot::is_highlightable)
        })
    }

    /// Layout computed by the most recent tick.
    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn cursor_rotation(&self) -> f64 {
        self.cursor_rotation
    }

    pub fn tick(
        &mut self,
        input: &mut impl InputProvider,
        geometry: &ContainerGeometry,
    ) -> TickReport {
        self.layout = WheelLayout::compute(&self.items, self.cursor.as_ref(), &self.config);

        let sample = input.sample();
        if sample.submit {
            self.submit();
        }

        let outcome = compute_selection(&SelectionRequest {
            sample: &sample,
            geometry,
            layout: &self.layout,
            config: &self.config,
            engaged: self.state.is_engaged(),
            previous: self.selected,
            clicking: self.clicking,
        });
        self.clicking = false;

        if self.selected != outcome.index {
            log::debug!(
                "Selection {:?} -> {:?}",
                self.selected.map(SlotIndex::get),
                outcome.index.map(SlotIndex::get)
            );
        }
        self.selected = outcome.index;
        if let Some(rotation) = outcome.cursor_rotation {
            self.cursor_rotation = rotation;
        }

        self.observers.dispatch(&outcome.events);

        TickReport {
            events: outcome.events,
            selected: self.selected_index(),
            highlight: self.highlight_target(),
            cursor_rotation: outcome.cursor_rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use crate::geometry::Vec2;
    use crate::input::{InputSample, ScriptedInput};
    use crate::layout::{FillDirection, FillOrigin};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn geometry() -> ContainerGeometry {
        ContainerGeometry::new(
            Vec2::new(800.0, 600.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(400.0, 300.0),
        )
    }

    fn wheel(count: usize) -> DaisyWheel {
        let config = WheelConfig::default().with_orientation(Orientation::CounterClockwise);
        let mut wheel = DaisyWheel::new(config).with_items(vec![ItemSlot::plain(); count]);
        wheel.set_state(SelectionState::Pressed);
        wheel
    }

    fn index(i: usize) -> SlotIndex {
        SlotIndex::new(i)
    }

    fn deselected(i: usize) -> WheelEvent {
        WheelEvent::Deselected(Some(index(i)))
    }

    fn first_selected(i: usize) -> Vec<WheelEvent> {
        vec![WheelEvent::Deselected(None), WheelEvent::Selected(index(i))]
    }

    #[test]
    fn release_mid_hold_deselects_without_click() {
        let mut wheel = wheel(4);
        // down is 180 degrees, slot 2
        let mut down = InputSample::idle().with_axis(Vec2::new(0.0, -1.0));
        let report = wheel.tick(&mut down, &geometry());
        assert_eq!(report.selected, Some(index(2)));

        wheel.set_state(SelectionState::Normal);
        wheel.submit();
        let report = wheel.tick(&mut down, &geometry());
        assert_eq!(report.events, vec![deselected(2)]);
        assert_eq!(report.selected, None);
        assert_eq!(wheel.selected_index(), None);
    }

    #[test]
    fn click_without_direction_is_suppressed() {
        let mut wheel = wheel(4);
        let mut idle = InputSample::idle().with_submit();
        let report = wheel.tick(&mut idle, &geometry());
        assert!(report.events.is_empty());

        // the latch does not survive into the next tick
        let mut up = InputSample::idle().with_axis(Vec2::UP);
        let report = wheel.tick(&mut up, &geometry());
        assert_eq!(report.events, first_selected(0));
    }

    #[test]
    fn click_with_direction_fires_after_selection() {
        let mut wheel = wheel(4);
        wheel.pointer_click(PointerButton::Secondary);
        let mut up = InputSample::idle().with_axis(Vec2::UP);
        let report = wheel.tick(&mut up, &geometry());
        assert_eq!(report.events, first_selected(0));

        wheel.pointer_click(PointerButton::Primary);
        let report = wheel.tick(&mut up, &geometry());
        assert_eq!(report.events, vec![WheelEvent::Clicked(index(0))]);
    }

    #[test]
    fn disabled_wheel_ignores_clicks_and_presses() {
        let mut wheel = wheel(4);
        wheel.set_interactable(false);
        wheel.set_state(SelectionState::Pressed);
        assert_eq!(wheel.state(), SelectionState::Disabled);
        wheel.submit();
        let mut up = InputSample::idle().with_axis(Vec2::UP).with_submit();
        let report = wheel.tick(&mut up, &geometry());
        assert!(report.events.is_empty());

        wheel.set_interactable(true);
        wheel.set_state(SelectionState::Selected);
        let report = wheel.tick(&mut up, &geometry());
        assert_eq!(
            report.events,
            vec![
                WheelEvent::Deselected(None),
                WheelEvent::Selected(index(0)),
                WheelEvent::Clicked(index(0))
            ]
        );
    }

    #[test]
    fn enabling_an_enabled_wheel_keeps_the_hold() {
        let mut wheel = wheel(4);
        wheel.set_interactable(true);
        assert_eq!(wheel.state(), SelectionState::Pressed);

        wheel.set_interactable(false);
        wheel.set_interactable(false);
        assert_eq!(wheel.state(), SelectionState::Disabled);
        wheel.set_interactable(true);
        assert_eq!(wheel.state(), SelectionState::Normal);
    }

    #[test]
    fn highlighted_state_does_not_sample() {
        let mut wheel = wheel(4);
        wheel.set_state(SelectionState::Highlighted);
        let mut up = InputSample::idle().with_axis(Vec2::UP).with_submit();
        let report = wheel.tick(&mut up, &geometry());
        assert!(report.events.is_empty());
        assert_eq!(report.selected, None);
    }

    #[test]
    fn shrinking_items_clears_stale_selection() {
        let mut wheel = wheel(4);
        let mut down = InputSample::idle().with_axis(Vec2::new(0.0, -1.0));
        wheel.tick(&mut down, &geometry());
        assert_eq!(wheel.selected_index(), Some(index(2)));
        assert_eq!(wheel.highlight_target(), Some(index(2)));

        wheel.remove_item(3).unwrap();
        wheel.remove_item(2).unwrap();
        assert_eq!(wheel.selected_index(), None);
        assert_eq!(wheel.highlight_target(), None);
        assert_eq!(
            wheel.remove_item(5),
            Err(WheelError::SlotOutOfRange { index: 5, count: 2 })
        );

        let mut idle = InputSample::idle();
        let report = wheel.tick(&mut idle, &geometry());
        assert_eq!(report.events, vec![deselected(2)]);
        assert_eq!(report.highlight, None);
    }

    #[test]
    fn growing_items_recomputes_every_tick() {
        let mut wheel = wheel(2);
        let mut left = InputSample::idle().with_axis(Vec2::new(-1.0, 0.0));
        assert_eq!(wheel.tick(&mut left, &geometry()).selected, Some(index(0)));
        assert_eq!(wheel.layout().slot_width, 180.0);

        wheel.push_item(ItemSlot::plain());
        wheel.push_item(ItemSlot::plain());
        let report = wheel.tick(&mut left, &geometry());
        assert_eq!(wheel.layout().slot_width, 90.0);
        assert_eq!(
            report.events,
            vec![deselected(0), WheelEvent::Selected(index(1))]
        );
    }

    #[test]
    fn highlight_skips_items_without_graphic() {
        let config = WheelConfig::default().with_orientation(Orientation::CounterClockwise);
        let mut wheel = DaisyWheel::new(config).with_items([
            ItemSlot::plain(),
            ItemSlot::bare(),
            ItemSlot::plain(),
            ItemSlot::plain(),
        ]);
        wheel.set_state(SelectionState::Selected);

        let mut left = InputSample::idle().with_axis(Vec2::new(-1.0, 0.0));
        let report = wheel.tick(&mut left, &geometry());
        assert_eq!(report.selected, Some(index(1)));
        assert_eq!(report.highlight, None);

        let mut down = InputSample::idle().with_axis(Vec2::new(0.0, -1.0));
        let report = wheel.tick(&mut down, &geometry());
        assert_eq!(report.highlight, Some(index(2)));
    }

    #[test]
    fn observers_see_events_in_tick_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut wheel = wheel(4);
        let sink = seen.clone();
        wheel.subscribe(move |e: WheelEvent| sink.borrow_mut().push(e));

        let mut input = ScriptedInput::new([
            InputSample::idle().with_axis(Vec2::UP),
            InputSample::idle().with_axis(Vec2::new(0.0, -1.0)).with_submit(),
            InputSample::idle(),
        ]);
        for _ in 0..3 {
            wheel.tick(&mut input, &geometry());
        }
        assert_eq!(
            *seen.borrow(),
            vec![
                WheelEvent::Deselected(None),
                WheelEvent::Selected(index(0)),
                deselected(0),
                WheelEvent::Selected(index(2)),
                WheelEvent::Clicked(index(2)),
                deselected(2),
            ]
        );
    }

    #[test]
    fn radial_cursor_offset_shifts_selection() {
        // clockwise top-origin cursor on a 4 slot wheel adds 45 degrees
        let config = WheelConfig::default().with_orientation(Orientation::CounterClockwise);
        let mut wheel = DaisyWheel::new(config)
            .with_items(vec![ItemSlot::plain(); 4])
            .with_cursor(ItemGraphic::Radial(crate::layout::RadialFill::new(
                FillDirection::Clockwise,
                FillOrigin::Top,
            )));
        wheel.set_state(SelectionState::Pressed);

        // 60 degrees counterclockwise + 45 lands in slot 1
        let rad = 60.0_f64.to_radians();
        let mut input = InputSample::idle().with_axis(Vec2::new(-rad.sin(), rad.cos()));
        let report = wheel.tick(&mut input, &geometry());
        assert_eq!(report.selected, Some(index(1)));
        assert!((wheel.cursor_rotation() - 105.0).abs() < 1.0e-9);
    }

    #[test]
    fn set_config_validates() {
        let mut wheel = DaisyWheel::default();
        let config = WheelConfig::default().with_item_spacing(0.4);
        wheel.set_config(config);
        assert_eq!(wheel.config().item_spacing(), 0.4);
    }

    #[test]
    fn pointer_button_names() {
        assert_eq!("left".parse::<PointerButton>(), Ok(PointerButton::Primary));
        assert_eq!("RIGHT".parse::<PointerButton>(), Ok(PointerButton::Secondary));
        assert_eq!("middle".parse::<PointerButton>(), Ok(PointerButton::Middle));
    }
}
