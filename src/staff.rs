//! HR hierarchy built from small capability traits.
//!
//! [`Staff`] is the contract every employee satisfies. [`Identity`] holds the
//! state common to all of them and is owned exactly once by each variant;
//! roles are plain structs layered on top of it:
//!
//! - single: [`Developer`] = identity + developer role
//! - multilevel: [`SeniorDeveloper`] wraps a [`Developer`]
//! - hierarchical: [`Manager`] and [`Intern`] both extend the identity
//! - multiple/hybrid: [`TechnicalLead`] carries both the developer and the
//!   manager role over one shared identity
//!
//! The bare contract cannot be instantiated; an [`Identity`] on its own is not
//! a [`Staff`]:
//!
//! ```compile_fail
//! use oop_patterns::staff::{Identity, Staff};
//! let bare: Box<dyn Staff> = Box::new(Identity::new("Charlie", 103));
//! ```
//!
//! A method both capability traits define is ambiguous unless the combining
//! type provides its own, so a caller holding only the two traits is rejected:
//!
//! ```compile_fail
//! use oop_patterns::staff::{Programmer, Supervisor};
//! fn headline_of<T: Programmer + Supervisor>(lead: &T) -> String {
//!     lead.headline()
//! }
//! ```

use crate::lifecycle::{Layers, Ledger};
use crate::profile::{Describe, Profile};
use tracing::debug;

/// Name and numeric id, plus the lifecycle layers stacked on this employee.
#[derive(Debug)]
pub struct Identity {
    name: String,
    id: u32,
    layers: Layers,
}

impl Identity {
    /// Untracked identity with its own private ledger.
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self::tracked(&Ledger::new(), name, id)
    }

    pub fn tracked(ledger: &Ledger, name: impl Into<String>, id: u32) -> Self {
        let name = name.into();
        debug!(%name, id, "establishing identity");
        Self {
            name,
            id,
            layers: Layers::root(ledger, "Employee"),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Lifecycle layers from the root up.
    pub fn layers(&self) -> Vec<&'static str> {
        self.layers.names()
    }

    pub fn ledger(&self) -> &Ledger {
        self.layers.ledger()
    }

    fn extend(&mut self, layer: &'static str) {
        self.layers.push(layer);
    }

    fn profile(&self, kind: &'static str) -> Profile {
        Profile::new(kind)
            .field("Name", &self.name)
            .field("ID", self.id)
    }
}

/// The contract. `describe` comes from [`Describe`] and has no default.
pub trait Staff: Describe {
    fn identity(&self) -> &Identity;

    /// The only write into the shared identity; id and layers stay fixed.
    fn rename(&mut self, name: String);

    fn name(&self) -> &str {
        self.identity().name()
    }

    fn id(&self) -> u32 {
        self.identity().id()
    }
}

pub trait Programmer: Staff {
    fn skills(&self) -> &str;
    fn set_skills(&mut self, skills: String);

    fn headline(&self) -> String {
        format!("{} codes in {}", self.name(), self.skills())
    }
}

pub trait Supervisor: Staff {
    fn team_size(&self) -> u32;

    fn headline(&self) -> String {
        format!("{} leads a team of {}", self.name(), self.team_size())
    }
}

// =============================================================================
// Role parts
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct DeveloperRole {
    skills: String,
}

impl DeveloperRole {
    fn render(&self, profile: Profile) -> Profile {
        profile.field("Programming Skills", &self.skills)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ManagerRole {
    team_size: u32,
}

impl ManagerRole {
    fn render(&self, profile: Profile) -> Profile {
        profile.field("Team Size", self.team_size)
    }
}

// =============================================================================
// Single inheritance
// =============================================================================

#[derive(Debug)]
pub struct Developer {
    identity: Identity,
    role: DeveloperRole,
}

impl Developer {
    pub fn new(mut identity: Identity, skills: impl Into<String>) -> Self {
        identity.extend("Developer");
        Self {
            identity,
            role: DeveloperRole {
                skills: skills.into(),
            },
        }
    }
}

impl Describe for Developer {
    fn describe(&self) -> Profile {
        self.role.render(self.identity.profile("Developer"))
    }
}

impl Staff for Developer {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rename(&mut self, name: String) {
        self.identity.set_name(name);
    }
}

impl Programmer for Developer {
    fn skills(&self) -> &str {
        &self.role.skills
    }

    fn set_skills(&mut self, skills: String) {
        self.role.skills = skills;
    }
}

// =============================================================================
// Multilevel inheritance
// =============================================================================

#[derive(Debug)]
pub struct SeniorDeveloper {
    developer: Developer,
    years: u32,
}

impl SeniorDeveloper {
    pub fn new(mut developer: Developer, years: u32) -> Self {
        developer.identity.extend("SeniorDeveloper");
        Self { developer, years }
    }

    pub fn years(&self) -> u32 {
        self.years
    }
}

impl Describe for SeniorDeveloper {
    fn describe(&self) -> Profile {
        self.developer
            .describe()
            .extend("SeniorDeveloper")
            .field("Experience", format!("{} years", self.years))
    }
}

impl Staff for SeniorDeveloper {
    fn identity(&self) -> &Identity {
        self.developer.identity()
    }

    fn rename(&mut self, name: String) {
        self.developer.rename(name);
    }
}

impl Programmer for SeniorDeveloper {
    fn skills(&self) -> &str {
        self.developer.skills()
    }

    fn set_skills(&mut self, skills: String) {
        self.developer.set_skills(skills);
    }
}

// =============================================================================
// Hierarchical inheritance
// =============================================================================

#[derive(Debug)]
pub struct Manager {
    identity: Identity,
    role: ManagerRole,
}

impl Manager {
    pub fn new(mut identity: Identity, team_size: u32) -> Self {
        identity.extend("Manager");
        Self {
            identity,
            role: ManagerRole { team_size },
        }
    }
}

impl Describe for Manager {
    fn describe(&self) -> Profile {
        self.role.render(self.identity.profile("Manager"))
    }
}

impl Staff for Manager {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rename(&mut self, name: String) {
        self.identity.set_name(name);
    }
}

impl Supervisor for Manager {
    fn team_size(&self) -> u32 {
        self.role.team_size
    }
}

#[derive(Debug)]
pub struct Intern {
    identity: Identity,
    programme_weeks: u32,
}

impl Intern {
    pub fn new(mut identity: Identity, programme_weeks: u32) -> Self {
        identity.extend("Intern");
        Self {
            identity,
            programme_weeks,
        }
    }

    pub fn programme_weeks(&self) -> u32 {
        self.programme_weeks
    }
}

impl Describe for Intern {
    fn describe(&self) -> Profile {
        self.identity
            .profile("Intern")
            .field("Programme", format!("{} weeks", self.programme_weeks))
    }
}

impl Staff for Intern {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rename(&mut self, name: String) {
        self.identity.set_name(name);
    }
}

// =============================================================================
// Multiple + hybrid inheritance
// =============================================================================

/// Developer and manager over a single shared [`Identity`].
///
/// Both role parts sit next to the one identity, so reads and writes through
/// either the [`Programmer`] or the [`Supervisor`] path see the same state.
#[derive(Debug)]
pub struct TechnicalLead {
    identity: Identity,
    developer: DeveloperRole,
    manager: ManagerRole,
}

impl TechnicalLead {
    pub fn new(mut identity: Identity, skills: impl Into<String>, team_size: u32) -> Self {
        identity.extend("Developer");
        identity.extend("Manager");
        identity.extend("TechnicalLead");
        Self {
            identity,
            developer: DeveloperRole {
                skills: skills.into(),
            },
            manager: ManagerRole { team_size },
        }
    }

    /// Resolves the headline both capability traits provide.
    pub fn headline(&self) -> String {
        format!(
            "{} codes in {} and leads a team of {}",
            self.identity.name, self.developer.skills, self.manager.team_size
        )
    }
}

impl Describe for TechnicalLead {
    fn describe(&self) -> Profile {
        let profile = self.identity.profile("TechnicalLead");
        let profile = self.developer.render(profile);
        self.manager.render(profile)
    }
}

impl Staff for TechnicalLead {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn rename(&mut self, name: String) {
        self.identity.set_name(name);
    }
}

impl Programmer for TechnicalLead {
    fn skills(&self) -> &str {
        &self.developer.skills
    }

    fn set_skills(&mut self, skills: String) {
        self.developer.skills = skills;
    }
}

impl Supervisor for TechnicalLead {
    fn team_size(&self) -> u32 {
        self.manager.team_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Event;

    fn eve(ledger: &Ledger) -> TechnicalLead {
        TechnicalLead::new(Identity::tracked(ledger, "Eve", 105), "Java, JavaScript", 10)
    }

    #[test]
    fn test_developer_renders_inherited_and_local_fields() {
        let dev = Developer::new(Identity::new("David", 104), "C++, Python");
        let profile = dev.describe();

        assert_eq!(profile.kind(), "Developer");
        assert_eq!(profile.labels(), vec!["Name", "ID", "Programming Skills"]);
        assert_eq!(profile.get("Name"), Some("David"));
        assert_eq!(profile.get("ID"), Some("104"));
        assert_eq!(profile.get("Programming Skills"), Some("C++, Python"));
    }

    #[test]
    fn test_manager_has_no_developer_fields() {
        let manager = Manager::new(Identity::new("Alice", 101), 5);
        let profile = manager.describe();

        assert_eq!(profile.get("Team Size"), Some("5"));
        assert_eq!(profile.get("Programming Skills"), None);
    }

    #[test]
    fn test_intern_has_no_sibling_fields() {
        let intern = Intern::new(Identity::new("Bob", 102), 12);
        let profile = intern.describe();

        assert_eq!(profile.labels(), vec!["Name", "ID", "Programme"]);
        assert_eq!(profile.get("Programme"), Some("12 weeks"));
    }

    #[test]
    fn test_senior_developer_includes_every_ancestor_field() {
        let dev = Developer::new(Identity::new("Frank", 106), "Go, Rust");
        let senior = SeniorDeveloper::new(dev, 8);
        let profile = senior.describe();

        assert_eq!(profile.kind(), "SeniorDeveloper");
        assert_eq!(
            profile.labels(),
            vec!["Name", "ID", "Programming Skills", "Experience"]
        );
        assert_eq!(senior.skills(), "Go, Rust");
        assert_eq!(
            senior.identity().layers(),
            vec!["Employee", "Developer", "SeniorDeveloper"]
        );
    }

    #[test]
    fn test_technical_lead_reports_each_field_once() {
        let lead = eve(&Ledger::new());
        let profile = lead.describe();

        assert_eq!(profile.kind(), "TechnicalLead");
        for label in ["Name", "ID", "Programming Skills", "Team Size"] {
            assert_eq!(profile.count(label), 1, "{label} should appear once");
        }
        assert_eq!(profile.get("Name"), Some("Eve"));
        assert_eq!(profile.get("ID"), Some("105"));
        assert_eq!(profile.get("Programming Skills"), Some("Java, JavaScript"));
        assert_eq!(profile.get("Team Size"), Some("10"));
    }

    #[test]
    fn test_technical_lead_shares_one_identity_across_paths() {
        let mut lead = eve(&Ledger::new());

        {
            let as_programmer: &mut dyn Programmer = &mut lead;
            as_programmer.rename("Eve Adams".to_string());
        }

        let as_supervisor: &dyn Supervisor = &lead;
        assert_eq!(as_supervisor.name(), "Eve Adams");
        assert_eq!(as_supervisor.id(), 105);
        assert_eq!(lead.describe().get("Name"), Some("Eve Adams"));
    }

    #[test]
    fn test_rename_through_either_path_keeps_id_and_layers() {
        let ledger = Ledger::new();
        let mut lead = eve(&ledger);
        let layers = lead.identity().layers();

        {
            let as_supervisor: &mut dyn Supervisor = &mut lead;
            as_supervisor.rename("Eve Manager".to_string());
        }
        let as_programmer: &dyn Programmer = &lead;
        assert_eq!(as_programmer.name(), "Eve Manager");

        {
            let as_programmer: &mut dyn Programmer = &mut lead;
            as_programmer.rename("Eve Coder".to_string());
        }
        let as_supervisor: &dyn Supervisor = &lead;
        assert_eq!(as_supervisor.name(), "Eve Coder");
        assert_eq!(as_supervisor.id(), 105);
        assert_eq!(lead.identity().layers(), layers);
        assert_eq!(ledger.live(), 4);

        drop(lead);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn test_rename_senior_developer_reaches_inner_identity() {
        let mut senior = SeniorDeveloper::new(Developer::new(Identity::new("Frank", 106), "Go"), 8);
        senior.rename("Frank Jr".to_string());

        assert_eq!(senior.describe().get("Name"), Some("Frank Jr"));
        assert_eq!(
            senior.identity().layers(),
            vec!["Employee", "Developer", "SeniorDeveloper"]
        );
    }

    #[test]
    fn test_technical_lead_resolves_headline() {
        let lead = eve(&Ledger::new());

        assert_eq!(lead.headline(), "Eve codes in Java, JavaScript and leads a team of 10");
        assert_eq!(Programmer::headline(&lead), "Eve codes in Java, JavaScript");
        assert_eq!(Supervisor::headline(&lead), "Eve leads a team of 10");
    }

    #[test]
    fn test_technical_lead_establishes_identity_first_and_releases_it_last() {
        let ledger = Ledger::new();
        drop(eve(&ledger));

        assert_eq!(
            ledger.events(),
            vec![
                Event::Acquired("Employee"),
                Event::Acquired("Developer"),
                Event::Acquired("Manager"),
                Event::Acquired("TechnicalLead"),
                Event::Released("TechnicalLead"),
                Event::Released("Manager"),
                Event::Released("Developer"),
                Event::Released("Employee"),
            ]
        );
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    fn test_dispatch_reaches_concrete_describe() {
        let staff: Vec<Box<dyn Staff>> = vec![
            Box::new(Manager::new(Identity::new("Alice", 101), 5)),
            Box::new(Developer::new(Identity::new("David", 104), "C++")),
        ];

        let kinds: Vec<_> = staff.iter().map(|s| s.describe().kind()).collect();
        assert_eq!(kinds, vec!["Manager", "Developer"]);
    }
}
