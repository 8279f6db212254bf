use colored::Colorize;
use oop_patterns::input::read_pair;
use oop_patterns::operators::Counter;
use oop_patterns::{logging, DemoConfig};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);

    println!("Enter two integers:");
    let Some(parsed) = read_pair(io::stdin().lock())? else {
        println!("{}", "No input".yellow());
        return Ok(());
    };

    match parsed {
        Ok((a, b)) => {
            let first = Counter::new(a);
            let second = Counter::new(b);
            println!("first: {}", first.value());
            println!("second: {}", second.value());
            match first.checked_add(second) {
                Ok(sum) => println!("first + second: {}", sum.value()),
                Err(err) => println!("{} {err}", "Overflow:".red()),
            }
        }
        Err(err) => println!("{} {err}", "Invalid input:".red()),
    }

    Ok(())
}
