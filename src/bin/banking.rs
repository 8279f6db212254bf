use colored::Colorize;
use oop_patterns::bank::{Account, AccountCore, CurrentAccount, SavingsAccount};
use oop_patterns::{logging, DemoConfig};
use std::error::Error;

fn run(account: &mut dyn Account, currency: &str, label: &str, amount: f64, deposit: bool) {
    let result = if deposit {
        account.deposit(amount)
    } else {
        account.withdraw(amount)
    };

    match result {
        Ok(balance) => println!(
            "{} {label} {currency}{amount:.2}, new balance {currency}{balance:.2}",
            "[ok]".green()
        ),
        Err(err) => println!("{} {err}", "[denied]".red()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::discover()?;
    logging::init(&config.logging.level);
    let currency = config.bank.currency.as_str();

    let mut accounts: Vec<Box<dyn Account>> = vec![
        Box::new(SavingsAccount::new(
            AccountCore::new("SAV001", "Alice Johnson", 500.0),
            100.0,
        )),
        Box::new(CurrentAccount::new(
            AccountCore::new("CUR001", "Bob Smith", 300.0),
            1000.0,
        )),
    ];

    println!("{}", "=== BANKING SYSTEM DEMONSTRATION ===".bold());
    for account in &accounts {
        println!("\n{}", account.describe());
    }

    println!("{}", "=== TRANSACTION TESTING ===".bold());

    println!("\n--- Testing Savings Account ---");
    let savings = accounts[0].as_mut();
    run(savings, currency, "withdrew", 200.0, false);
    run(savings, currency, "withdrew", 250.0, false);
    run(savings, currency, "deposited", 100.0, true);

    println!("\n--- Testing Current Account ---");
    let current = accounts[1].as_mut();
    run(current, currency, "withdrew", 500.0, false);
    run(current, currency, "withdrew", 900.0, false);
    run(current, currency, "deposited", 400.0, true);

    println!("\n{}", "=== FINAL ACCOUNT STATES ===".bold());
    for account in &accounts {
        println!("\n{}", account.describe());
    }

    Ok(())
}
