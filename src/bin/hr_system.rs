use colored::Colorize;
use oop_patterns::roster::Roster;
use oop_patterns::staff::{Programmer, Staff, Supervisor, TechnicalLead};
use oop_patterns::{logging, DemoConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);

    let roster = Roster::demo()?;

    println!("{}", "== HR system: dispatch through Box<dyn Staff> ==".bold());
    for profile in roster.describe_all() {
        print!("{profile}");
        println!("------------------");
    }

    println!("\n{}", "== Diamond: one identity, two roles ==".bold());
    let mut lead = {
        let identity = roster.identity("Grace", 107);
        TechnicalLead::new(identity, "Rust, Haskell", 4)
    };
    println!("{}", lead.headline());
    {
        let as_programmer: &mut dyn Programmer = &mut lead;
        as_programmer.rename("Grace Hopper".to_string());
    }
    let as_supervisor: &dyn Supervisor = &lead;
    println!("Renamed via developer path, seen via manager path: {}", as_supervisor.name());
    println!("Layers: {}", lead.identity().layers().join(" -> "));
    drop(lead);

    let ledger = roster.ledger().clone();
    let released = roster.release();
    println!("\nReleased {released} employees");

    if ledger.live() == 0 {
        println!("{}", format!("All {} layers released", ledger.released()).green());
    } else {
        println!("{}", format!("{} layers still live", ledger.live()).red());
    }

    Ok(())
}
