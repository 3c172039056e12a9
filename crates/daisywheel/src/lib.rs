pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod selection;
pub mod wheel;

pub use config::{ContentRotationMode, Orientation, WheelConfig};
pub use error::WheelError;
pub use events::{SlotIndex, WheelEvent, WheelObserver};
pub use geometry::Vec2;
pub use input::{InputProvider, InputSample, LatestInput, ScriptedInput};
pub use layout::{FillDirection, FillOrigin, ItemGraphic, ItemSlot, RadialFill, WheelLayout};
pub use selection::ContainerGeometry;
pub use wheel::{DaisyWheel, PointerButton, SelectionState, TickReport};
