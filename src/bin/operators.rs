use colored::Colorize;
use oop_patterns::operators::{Cart, Counter, Point3D, Pricing};
use oop_patterns::{logging, DemoConfig, Describe};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);

    println!("{}", "== Counter ==".bold());
    let mut c1 = Counter::new(5);
    let c2 = Counter::new(10);
    let c3 = c1 + c2;
    c1.increment();
    println!("c1: {}", c1.value());
    println!("c2: {}", c2.value());
    println!("c3: {}", c3.value());

    println!("\n{}", "== Point3D ==".bold());
    let a = Point3D::new(-1.0, 2.0, -3.0);
    let b = Point3D::new(4.0, -5.0, 6.0);
    let sum = a + b;
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b = {sum}");
    println!("+a = {}", a.positive());
    println!("+(a+b) = {}", sum.positive());

    println!("\n{}", "== Cart ==".bold());
    let mut cart1 = Cart::new();
    cart1
        .add_item("Book", 2, Pricing::Base)
        .add_item("Pen", 3, Pricing::Discounted(1.0));
    let mut cart2 = Cart::new();
    cart2.add_item("Laptop", 1, Pricing::Member { discount: 5.0 });

    print!("{}", cart1.describe());
    print!("{}", cart2.describe());
    let combined = &cart1 + &cart2;
    print!("{}", combined.describe());
    println!("{}", serde_json::to_string(&combined)?);

    Ok(())
}
