use colored::Colorize;
use oop_patterns::arithmetic::divide;
use oop_patterns::{logging, DemoConfig};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);

    for (a, b) in [(10.0, 4.0), (10.0, 0.0)] {
        match divide(a, b) {
            Ok(quotient) => println!("{a} / {b} = {quotient}"),
            Err(err) => println!("{} {err}", "Error:".red()),
        }
    }

    Ok(())
}
