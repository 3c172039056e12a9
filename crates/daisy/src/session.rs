use crate::config::AppConfig;
use crate::protocol::Command;
use daisywheel::layout::{ContentRotation, WheelLayout};
use daisywheel::{
    ContainerGeometry, DaisyWheel, ItemSlot, LatestInput, SelectionState, SlotIndex, TickReport,
    WheelConfig,
};
use std::fmt::Write;

/// A wheel driven by protocol commands, with the latest pointer and stick state held
/// between ticks.
#[derive(Debug)]
pub struct Session {
    wheel: DaisyWheel,
    input: LatestInput,
    geometry: ContainerGeometry,
    template: Vec<ItemSlot>,
    labels: Vec<Option<String>>,
    ticks: u64,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let mut wheel = DaisyWheel::new(config.wheel).with_items(config.slots());
        wheel.set_cursor(config.cursor_graphic());
        Self {
            wheel,
            input: LatestInput::new(),
            geometry: config.geometry.into(),
            template: config.slots(),
            labels: config.labels(),
            ticks: 0,
        }
    }

    /// Swaps in a new configuration. Selection and interaction state carry over.
    pub fn reload(&mut self, config: &AppConfig) {
        self.wheel.set_config(config.wheel);
        self.wheel.set_items(config.slots());
        self.wheel.set_cursor(config.cursor_graphic());
        self.geometry = config.geometry.into();
        self.template = config.slots();
        self.labels = config.labels();
    }

    pub fn wheel(&self) -> &DaisyWheel {
        &self.wheel
    }

    /// Applies one command, returning a line per tick it ran.
    pub fn apply(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Press => self.wheel.set_state(SelectionState::Pressed),
            Command::Release => self.wheel.set_state(SelectionState::Normal),
            Command::Hover => self.wheel.set_state(SelectionState::Highlighted),
            Command::Focus => self.wheel.set_state(SelectionState::Selected),
            Command::Disable => self.wheel.set_interactable(false),
            Command::Enable => self.wheel.set_interactable(true),
            Command::Pointer(position) => self.input.move_pointer(position),
            Command::Axis(direction) => self.input.set_axis(direction),
            Command::Click(button) => self.wheel.pointer_click(button),
            Command::Submit => self.input.press_submit(),
            Command::Tick(count) => return (0..count).map(|_| self.tick()).collect(),
            Command::Items(count) => self.resize(count),
            Command::Spacing(spacing) => self.update_config(|c| c.set_item_spacing(spacing)),
            Command::DeadZone(dead_zone) => {
                self.update_config(|c| c.set_input_dead_zone(dead_zone))
            }
            Command::Orientation(orientation) => {
                self.update_config(|c| c.set_orientation(orientation))
            }
            Command::Quit => {}
        }
        Vec::new()
    }

    fn update_config(&mut self, update: impl FnOnce(&mut WheelConfig)) {
        let mut config = *self.wheel.config();
        update(&mut config);
        self.wheel.set_config(config);
    }

    /// Keeps the first `count` configured items, padding with plain ones.
    fn resize(&mut self, count: usize) {
        let items = (0..count)
            .map(|i| self.template.get(i).copied().unwrap_or_else(ItemSlot::plain))
            .collect();
        self.wheel.set_items(items);
    }

    fn tick(&mut self) -> String {
        self.ticks += 1;
        let report = self.wheel.tick(&mut self.input, &self.geometry);
        self.describe(self.ticks, &report)
    }

    pub fn label(&self, index: SlotIndex) -> String {
        self.labels
            .get(index.get())
            .cloned()
            .flatten()
            .unwrap_or_else(|| format!("#{}", index))
    }

    fn describe(&self, tick: u64, report: &TickReport) -> String {
        let events = if report.events.is_empty() {
            "-".to_string()
        } else {
            report
                .events
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        let selected = report
            .selected
            .map(|i| self.label(i))
            .unwrap_or_else(|| "none".to_string());

        let mut line = format!("tick {tick}: {events} => {selected}");
        if let Some(rotation) = report.cursor_rotation {
            let _ = write!(line, " (cursor {rotation:.1})");
        }
        line
    }

    /// Fresh layout of the current items, one line per item after a header.
    pub fn layout_table(&self) -> Vec<String> {
        let layout = WheelLayout::compute(
            self.wheel.items(),
            self.wheel.cursor(),
            self.wheel.config(),
        );

        let mut lines = vec![format!(
            "{} items, slot width {:.2}, dead zone {:.4}",
            layout.item_count(),
            layout.slot_width,
            layout.pivot_scale
        )];
        lines.extend(layout.items.iter().map(|item| {
            let fill = item
                .fill_amount
                .map(|f| format!("{f:.4}"))
                .unwrap_or_else(|| "-".to_string());
            let rotation = match item.content_rotation {
                ContentRotation::Keep => "keep".to_string(),
                ContentRotation::Upright => "upright".to_string(),
                ContentRotation::Local(angle) => format!("{angle:.2}"),
            };
            format!(
                "{:>3} {:<12} slot {:>7.2} offset {:>6.2} fill {:>6} content ({:.1}, {:.1}) {}",
                item.index,
                self.label(SlotIndex::new(item.index)),
                item.slot_rotation,
                item.rotation_offset,
                fill,
                item.content_offset.x,
                item.content_offset.y,
                rotation
            )
        }));
        lines
    }
}
