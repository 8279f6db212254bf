//! Acquire/release bookkeeping for constructed variants.
//!
//! Each layer of a variant (the identity, then each role stacked on top of it)
//! takes a [`Guard`] from a shared [`Ledger`] when it is built. [`Layers`] owns
//! those guards and releases them in strict reverse order of acquisition when
//! the variant is dropped, so the ledger can prove that every instance was
//! released exactly once and in the right order.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Acquired(&'static str),
    Released(&'static str),
}

#[derive(Debug, Default)]
struct LedgerState {
    live: usize,
    acquired: usize,
    released: usize,
    events: Vec<Event>,
}

/// Shared counter of live layers. Cloning shares the same books.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    state: Rc<RefCell<LedgerState>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, layer: &'static str) -> Guard {
        let mut state = self.state.borrow_mut();
        state.live += 1;
        state.acquired += 1;
        state.events.push(Event::Acquired(layer));
        trace!(layer, live = state.live, "acquired");

        Guard {
            ledger: self.clone(),
            layer,
        }
    }

    fn release(&self, layer: &'static str) {
        let mut state = self.state.borrow_mut();
        state.live -= 1;
        state.released += 1;
        state.events.push(Event::Released(layer));
        trace!(layer, live = state.live, "released");
    }

    pub fn live(&self) -> usize {
        self.state.borrow().live
    }

    pub fn acquired(&self) -> usize {
        self.state.borrow().acquired
    }

    pub fn released(&self) -> usize {
        self.state.borrow().released
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn shares_books_with(&self, other: &Ledger) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

/// One acquired layer. Not `Clone`: a guard is released exactly once, when dropped.
#[derive(Debug)]
pub struct Guard {
    ledger: Ledger,
    layer: &'static str,
}

impl Guard {
    pub fn layer(&self) -> &'static str {
        self.layer
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.ledger.release(self.layer);
    }
}

/// Stack of guards for one instance, root first.
#[derive(Debug)]
pub struct Layers {
    ledger: Ledger,
    guards: Vec<Guard>,
}

impl Layers {
    pub fn root(ledger: &Ledger, layer: &'static str) -> Self {
        Self {
            ledger: ledger.clone(),
            guards: vec![ledger.acquire(layer)],
        }
    }

    /// Acquires a layer on top of everything already established.
    pub fn push(&mut self, layer: &'static str) {
        let guard = self.ledger.acquire(layer);
        self.guards.push(guard);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.guards.iter().map(Guard::layer).collect()
    }
}

impl Drop for Layers {
    fn drop(&mut self) {
        // Vec drops front to back; release top-down explicitly instead.
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let ledger = Ledger::new();
        let guard = ledger.acquire("Employee");
        assert_eq!(ledger.live(), 1);

        drop(guard);
        assert_eq!(ledger.live(), 0);
        assert_eq!(ledger.acquired(), 1);
        assert_eq!(ledger.released(), 1);
    }

    #[test]
    fn test_layers_release_in_reverse() {
        let ledger = Ledger::new();
        {
            let mut layers = Layers::root(&ledger, "Employee");
            layers.push("Developer");
            layers.push("SeniorDeveloper");
            assert_eq!(layers.names(), vec!["Employee", "Developer", "SeniorDeveloper"]);
        }

        assert_eq!(
            ledger.events(),
            vec![
                Event::Acquired("Employee"),
                Event::Acquired("Developer"),
                Event::Acquired("SeniorDeveloper"),
                Event::Released("SeniorDeveloper"),
                Event::Released("Developer"),
                Event::Released("Employee"),
            ]
        );
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn test_clones_share_books() {
        let ledger = Ledger::new();
        let other = ledger.clone();
        let _guard = other.acquire("Manager");

        assert!(ledger.shares_books_with(&other));
        assert!(!ledger.shares_books_with(&Ledger::new()));
        assert_eq!(ledger.live(), 1);
    }
}
