//! Dispatch driver: owns a heterogeneous set of employees behind `Box<dyn Staff>`.

use crate::error::RosterError;
use crate::lifecycle::Ledger;
use crate::profile::{Describe, Profile};
use crate::staff::{Developer, Identity, Intern, Manager, SeniorDeveloper, Staff, TechnicalLead};
use tracing::{debug, info, warn};

#[derive(Default)]
pub struct Roster {
    ledger: Ledger,
    members: Vec<Box<dyn Staff>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The staff from the HR exercise: one of each inheritance kind.
    pub fn demo() -> Result<Self, RosterError> {
        let mut roster = Self::new();

        let alice = roster.identity("Alice", 101);
        roster.enroll(Manager::new(alice, 5))?;

        let bob = roster.identity("Bob", 102);
        roster.enroll(Intern::new(bob, 12))?;

        let david = roster.identity("David", 104);
        roster.enroll(Developer::new(david, "C++, Python"))?;

        let eve = roster.identity("Eve", 105);
        roster.enroll(TechnicalLead::new(eve, "Java, JavaScript", 10))?;

        let frank = roster.identity("Frank", 106);
        roster.enroll(SeniorDeveloper::new(Developer::new(frank, "Go, Rust"), 8))?;

        Ok(roster)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// An identity booked against this roster's ledger.
    pub fn identity(&self, name: impl Into<String>, id: u32) -> Identity {
        Identity::tracked(&self.ledger, name, id)
    }

    /// Members must come from [`Roster::identity`]; anything booked against
    /// another ledger is refused so `release` can account for every layer.
    pub fn enroll(&mut self, member: impl Staff + 'static) -> Result<&mut Self, RosterError> {
        if !member.identity().ledger().shares_books_with(&self.ledger) {
            warn!(name = member.name(), id = member.id(), "refusing member from a different ledger");
            return Err(RosterError::ForeignLedger {
                name: member.name().to_string(),
                id: member.id(),
            });
        }
        debug!(name = member.name(), id = member.id(), "enrolled");
        self.members.push(Box::new(member));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = &dyn Staff> {
        self.members.iter().map(|m| m.as_ref() as &dyn Staff)
    }

    pub fn find(&self, id: u32) -> Option<&dyn Staff> {
        self.members().find(|m| m.id() == id)
    }

    pub fn describe_all(&self) -> Vec<Profile> {
        self.members.iter().map(|m| m.describe()).collect()
    }

    /// Drops every member in enrollment order and returns how many were released.
    pub fn release(mut self) -> usize {
        let count = self.members.len();
        for member in self.members.drain(..) {
            debug!(name = member.name(), "releasing");
            drop(member);
        }
        info!(released = count, live = self.ledger.live(), "roster released");
        count
    }
}
