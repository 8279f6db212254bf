use colored::Colorize;
use oop_patterns::summation::{closed_form, parallel_sum, partition, threaded_sum};
use oop_patterns::{logging, DemoConfig};
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);
    let upper = config.summation.upper;
    let workers = config.summation.workers;

    println!("{}", "== Partitioned summation ==".bold());
    for (index, range) in partition(upper, workers)?.iter().enumerate() {
        println!("worker {index}: {}..={}", range.start(), range.end());
    }

    let start = Instant::now();
    let total = threaded_sum(upper, workers)?;
    println!("Sum 1..{upper} = {total} ({:?} on threads)", start.elapsed());

    let start = Instant::now();
    let pooled = parallel_sum(upper, workers)?;
    println!("Sum 1..{upper} = {pooled} ({:?} on rayon)", start.elapsed());

    if closed_form(upper) == Some(total) && pooled == total {
        println!("{}", "matches n(n+1)/2".green());
    } else {
        println!("{}", "does not match n(n+1)/2".red());
    }

    Ok(())
}
