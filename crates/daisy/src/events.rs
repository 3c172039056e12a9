use crate::protocol::Command;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Command(Command),
    ConfigReload,
    InputClosed,
}
