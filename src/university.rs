//! Abstract university member with dynamic dispatch over its duties.

use crate::profile::{Describe, Profile};

pub trait Member: Describe {
    fn show_role(&self) -> String;
    fn perform_duty(&self) -> String;
}

macro_rules! member {
    ($ty:ident, $kind:literal, $role:literal, $duty:literal) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty {
            name: String,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }

            pub fn name(&self) -> &str {
                &self.name
            }
        }

        impl Member for $ty {
            fn show_role(&self) -> String {
                $role.to_string()
            }

            fn perform_duty(&self) -> String {
                $duty.to_string()
            }
        }

        impl Describe for $ty {
            fn describe(&self) -> Profile {
                Profile::new($kind)
                    .field("Name", &self.name)
                    .field("Role", self.show_role())
                    .field("Duty", self.perform_duty())
            }
        }
    };
}

member!(Professor, "Professor", "I am a professor.", "Conducting lectures.");
member!(Student, "Student", "I am a student.", "Attending classes.");
member!(
    AdminStaff,
    "AdminStaff",
    "I am an admin staff.",
    "Managing university records."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_member_reports_its_own_duty() {
        let members: Vec<Box<dyn Member>> = vec![
            Box::new(Professor::new("Dr. Rahman")),
            Box::new(Student::new("Nadia")),
            Box::new(AdminStaff::new("Karim")),
        ];

        let duties: Vec<_> = members.iter().map(|m| m.perform_duty()).collect();
        assert_eq!(
            duties,
            vec![
                "Conducting lectures.",
                "Attending classes.",
                "Managing university records."
            ]
        );
        assert_eq!(members[1].show_role(), "I am a student.");
    }

    #[test]
    fn test_describe_includes_role_and_duty() {
        let profile = Professor::new("Dr. Rahman").describe();
        assert_eq!(profile.kind(), "Professor");
        assert_eq!(profile.get("Name"), Some("Dr. Rahman"));
        assert_eq!(profile.get("Duty"), Some("Conducting lectures."));
    }
}
