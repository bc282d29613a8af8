use std::fmt;

use super::GameState;

/// Receives the game state after every accepted move.
pub trait Observer {
    fn notify(&mut self, state: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&GameState),
{
    fn notify(&mut self, state: &GameState) {
        self(state)
    }
}

/// Handle returned on registration, used to unregister later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Subscriber list, notified in registration order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn Observer>)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<O: Observer + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the handle was not registered
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify_all(&mut self, state: &GameState) {
        for (_, observer) in self.entries.iter_mut() {
            observer.notify(state);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
