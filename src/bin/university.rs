use colored::Colorize;
use oop_patterns::university::{AdminStaff, Member, Professor, Student};
use oop_patterns::{logging, DemoConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);

    let members: Vec<Box<dyn Member>> = vec![
        Box::new(Professor::new("Dr. Rahman")),
        Box::new(Student::new("Nadia")),
        Box::new(AdminStaff::new("Karim")),
    ];

    println!("{}", "== University: dynamic dispatch ==".bold());
    for member in &members {
        println!("{}", member.show_role());
        println!("{}", member.perform_duty());
        println!("------------------");
    }

    Ok(())
}
