use colored::Colorize;
use oop_patterns::campervan::Campervan;
use oop_patterns::{logging, DemoConfig, Describe};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);

    let camper = Campervan::new(2, 2000.0);

    println!("{}", "== Campervan: house + van ==".bold());
    print!("{}", camper.describe());
    print!("{}", camper.house().describe());
    print!("{}", camper.van().describe());

    Ok(())
}
