use derive_more::{Deref, Display, From, Into};
use std::fmt;

/// Position of an item in the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref, From, Into)]
pub struct SlotIndex(usize);

impl SlotIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Transitions raised by a tick, always in Deselected, Selected, Clicked order.
///
/// A selection change always deselects first, so the very first selection reports
/// `Deselected(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelEvent {
    Deselected(Option<SlotIndex>),
    Selected(SlotIndex),
    Clicked(SlotIndex),
}

impl WheelEvent {
    pub fn index(&self) -> Option<SlotIndex> {
        match *self {
            Self::Deselected(i) => i,
            Self::Selected(i) | Self::Clicked(i) => Some(i),
        }
    }
}

impl fmt::Display for WheelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deselected(Some(i)) => write!(f, "deselected({i})"),
            Self::Deselected(None) => write!(f, "deselected(none)"),
            Self::Selected(i) => write!(f, "selected({i})"),
            Self::Clicked(i) => write!(f, "clicked({i})"),
        }
    }
}

pub trait WheelObserver {
    fn notify(&mut self, event: WheelEvent);
}

impl<F: FnMut(WheelEvent)> WheelObserver for F {
    fn notify(&mut self, event: WheelEvent) {
        self(event)
    }
}

impl WheelObserver for async_channel::Sender<WheelEvent> {
    fn notify(&mut self, event: WheelEvent) {
        if let Err(e) = self.try_send(event) {
            log::warn!("Dropped wheel event {}: {}", event, e);
        }
    }
}

/// Observer list notified in subscription order.
#[derive(Default)]
pub struct Observers {
    list: Vec<Box<dyn WheelObserver>>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: impl WheelObserver + 'static) {
        self.list.push(Box::new(observer));
    }

    pub fn dispatch(&mut self, events: &[WheelEvent]) {
        for &event in events {
            for observer in &mut self.list {
                observer.notify(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.list.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn closures_receive_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        let sink = seen.clone();
        observers.subscribe(move |e: WheelEvent| sink.borrow_mut().push(e));

        let events = [
            WheelEvent::Deselected(Some(SlotIndex::new(1))),
            WheelEvent::Selected(SlotIndex::new(2)),
            WheelEvent::Clicked(SlotIndex::new(2)),
        ];
        observers.dispatch(&events);
        assert_eq!(*seen.borrow(), events.to_vec());
    }

    #[test]
    fn channel_observer_forwards_events() {
        let (tx, rx) = async_channel::unbounded();
        let mut observers = Observers::default();
        observers.subscribe(tx);
        observers.dispatch(&[WheelEvent::Selected(SlotIndex::new(3))]);
        assert_eq!(
            rx.try_recv().unwrap(),
            WheelEvent::Selected(SlotIndex::new(3))
        );
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let (tx, rx) = async_channel::bounded(1);
        let mut observers = Observers::default();
        observers.subscribe(tx);
        observers.dispatch(&[
            WheelEvent::Selected(SlotIndex::new(0)),
            WheelEvent::Clicked(SlotIndex::new(0)),
        ]);
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn event_display() {
        assert_eq!(
            WheelEvent::Clicked(SlotIndex::new(4)).to_string(),
            "clicked(4)"
        );
        assert_eq!(
            WheelEvent::Deselected(None).to_string(),
            "deselected(none)"
        );
        assert_eq!(
            WheelEvent::Deselected(Some(SlotIndex::new(1))).index(),
            Some(SlotIndex::new(1))
        );
        assert_eq!(WheelEvent::Deselected(None).index(), None);
    }
}
