//! Accounts with runtime-polymorphic withdrawal rules.

use crate::error::AccountError;
use crate::profile::{Describe, Profile};
use tracing::{info, warn};

pub const DEFAULT_MINIMUM_BALANCE: f64 = 100.0;
pub const DEFAULT_OVERDRAFT_LIMIT: f64 = 1000.0;

/// State shared by every account kind.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountCore {
    number: String,
    owner: String,
    balance: f64,
}

impl AccountCore {
    pub fn new(number: impl Into<String>, owner: impl Into<String>, balance: f64) -> Self {
        Self {
            number: number.into(),
            owner: owner.into(),
            balance,
        }
    }

    fn deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        if !is_valid_amount(amount) {
            warn!(account = %self.number, amount, "rejected deposit");
            return Err(AccountError::invalid_amount("deposit", amount));
        }
        self.balance += amount;
        info!(account = %self.number, amount, balance = self.balance, "deposit");
        Ok(self.balance)
    }

    fn profile(&self, kind: &'static str) -> Profile {
        Profile::new(kind)
            .field("Account Number", &self.number)
            .field("Owner", &self.owner)
            .field("Current Balance", format!("{:.2}", self.balance))
    }
}

pub trait Account: Describe {
    fn core(&self) -> &AccountCore;

    fn deposit(&mut self, amount: f64) -> Result<f64, AccountError>;

    /// Returns the new balance, or the reason the withdrawal was refused.
    /// A refused withdrawal never changes the balance.
    fn withdraw(&mut self, amount: f64) -> Result<f64, AccountError>;

    fn balance(&self) -> f64 {
        self.core().balance
    }

    fn number(&self) -> &str {
        &self.core().number
    }

    fn owner(&self) -> &str {
        &self.core().owner
    }
}

/// Positive and finite. NaN fails every comparison, so test for it explicitly.
fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

fn check_withdrawal(core: &AccountCore, amount: f64) -> Result<(), AccountError> {
    if !is_valid_amount(amount) {
        warn!(account = %core.number, amount, "rejected withdrawal");
        return Err(AccountError::invalid_amount("withdrawal", amount));
    }
    Ok(())
}

// =============================================================================
// Savings: no overdraft, minimum balance
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    core: AccountCore,
    minimum_balance: f64,
}

impl SavingsAccount {
    pub fn new(core: AccountCore, minimum_balance: f64) -> Self {
        Self {
            core,
            minimum_balance,
        }
    }

    pub fn with_default_minimum(core: AccountCore) -> Self {
        Self::new(core, DEFAULT_MINIMUM_BALANCE)
    }

    pub fn minimum_balance(&self) -> f64 {
        self.minimum_balance
    }
}

impl Account for SavingsAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        self.core.deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> Result<f64, AccountError> {
        check_withdrawal(&self.core, amount)?;

        if self.core.balance - amount < self.minimum_balance {
            warn!(account = %self.core.number, amount, "withdrawal below minimum balance");
            return Err(AccountError::BelowMinimum {
                amount,
                balance: self.core.balance,
                minimum: self.minimum_balance,
            });
        }

        self.core.balance -= amount;
        info!(account = %self.core.number, amount, balance = self.core.balance, "withdrawal");
        Ok(self.core.balance)
    }
}

impl Describe for SavingsAccount {
    fn describe(&self) -> Profile {
        self.core
            .profile("Savings Account")
            .field("Minimum Balance", format!("{:.2}", self.minimum_balance))
            .field("Overdraft", "Not Allowed")
    }
}

// =============================================================================
// Current: overdraft up to a limit
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAccount {
    core: AccountCore,
    overdraft_limit: f64,
}

impl CurrentAccount {
    pub fn new(core: AccountCore, overdraft_limit: f64) -> Self {
        Self {
            core,
            overdraft_limit,
        }
    }

    pub fn with_default_overdraft(core: AccountCore) -> Self {
        Self::new(core, DEFAULT_OVERDRAFT_LIMIT)
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    pub fn available(&self) -> f64 {
        self.core.balance + self.overdraft_limit
    }

    /// How far below zero the balance currently is.
    pub fn overdrawn_by(&self) -> f64 {
        (-self.core.balance).max(0.0)
    }
}

impl Account for CurrentAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn deposit(&mut self, amount: f64) -> Result<f64, AccountError> {
        self.core.deposit(amount)
    }

    fn withdraw(&mut self, amount: f64) -> Result<f64, AccountError> {
        check_withdrawal(&self.core, amount)?;

        let available = self.available();
        // Test the resulting balance itself: accepted withdrawals keep it >= -limit.
        if self.core.balance - amount < -self.overdraft_limit {
            warn!(account = %self.core.number, amount, available, "withdrawal exceeds overdraft");
            return Err(AccountError::OverdraftExceeded {
                amount,
                limit: self.overdraft_limit,
                available,
            });
        }

        self.core.balance -= amount;
        info!(account = %self.core.number, amount, balance = self.core.balance, "withdrawal");
        Ok(self.core.balance)
    }
}

impl Describe for CurrentAccount {
    fn describe(&self) -> Profile {
        self.core
            .profile("Current Account")
            .field("Overdraft Limit", format!("{:.2}", self.overdraft_limit))
            .field("Available Balance", format!("{:.2}", self.available()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn savings() -> SavingsAccount {
        SavingsAccount::new(AccountCore::new("SAV001", "Alice Johnson", 500.0), 100.0)
    }

    fn current() -> CurrentAccount {
        CurrentAccount::new(AccountCore::new("CUR001", "Bob Smith", 300.0), 1000.0)
    }

    #[test]
    fn test_savings_scenario() {
        let mut account = savings();

        assert_eq!(account.withdraw(200.0), Ok(300.0));
        assert!(matches!(
            account.withdraw(250.0),
            Err(AccountError::BelowMinimum { .. })
        ));
        assert_eq!(account.balance(), 300.0);
        assert_eq!(account.deposit(100.0), Ok(400.0));
    }

    #[test]
    fn test_savings_refuses_to_cross_minimum_from_opening_balance() {
        let mut account = savings();

        assert!(account.withdraw(450.0).is_err());
        assert_eq!(account.balance(), 500.0);
        // Landing exactly on the minimum is allowed.
        assert_eq!(account.withdraw(400.0), Ok(100.0));
    }

    #[test]
    fn test_current_scenario() {
        let mut account = current();

        assert_eq!(account.withdraw(500.0), Ok(-200.0));
        assert_eq!(account.overdrawn_by(), 200.0);

        let err = account.withdraw(900.0).unwrap_err();
        assert_eq!(
            err,
            AccountError::OverdraftExceeded {
                amount: 900.0,
                limit: 1000.0,
                available: 800.0,
            }
        );
        assert_eq!(account.balance(), -200.0);

        assert_eq!(account.deposit(400.0), Ok(200.0));
        assert_eq!(account.overdrawn_by(), 0.0);
    }

    #[test]
    fn test_non_positive_amounts_are_rejected() {
        let mut account = current();

        assert_eq!(
            account.deposit(0.0),
            Err(AccountError::invalid_amount("deposit", 0.0))
        );
        assert_eq!(
            account.withdraw(-5.0),
            Err(AccountError::invalid_amount("withdrawal", -5.0))
        );
        assert_eq!(account.balance(), 300.0);
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let mut savings = savings();
        let mut current = current();

        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                savings.withdraw(amount),
                Err(AccountError::InvalidAmount { operation: "withdrawal", .. })
            ));
            assert!(matches!(
                savings.deposit(amount),
                Err(AccountError::InvalidAmount { operation: "deposit", .. })
            ));
            assert!(matches!(
                current.withdraw(amount),
                Err(AccountError::InvalidAmount { .. })
            ));
            assert!(matches!(
                current.deposit(amount),
                Err(AccountError::InvalidAmount { .. })
            ));
        }

        assert_eq!(savings.balance(), 500.0);
        assert_eq!(current.balance(), 300.0);
        // Limits still hold afterwards.
        assert!(current.withdraw(1e6).is_err());
        assert_eq!(current.balance(), 300.0);
    }

    #[test]
    fn test_dispatch_through_contract() {
        let mut accounts: Vec<Box<dyn Account>> = vec![Box::new(savings()), Box::new(current())];

        let results: Vec<_> = accounts.iter_mut().map(|a| a.withdraw(450.0)).collect();
        assert!(results[0].is_err());
        assert_eq!(results[1], Ok(-150.0));

        let kinds: Vec<_> = accounts.iter().map(|a| a.describe().kind()).collect();
        assert_eq!(kinds, vec!["Savings Account", "Current Account"]);
    }

    #[test]
    fn test_describe_fields() {
        let profile = current().describe();
        assert_eq!(profile.get("Owner"), Some("Bob Smith"));
        assert_eq!(profile.get("Available Balance"), Some("1300.00"));
        assert_eq!(profile.get("Minimum Balance"), None);
    }

    #[test]
    fn test_defaults() {
        let core = AccountCore::new("X", "Y", 0.0);
        assert_eq!(SavingsAccount::with_default_minimum(core.clone()).minimum_balance(), 100.0);
        assert_eq!(CurrentAccount::with_default_overdraft(core).overdraft_limit(), 1000.0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Deposit(f64),
        Withdraw(f64),
    }

    fn amount() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => -50.0f64..1500.0,
            1 => Just(f64::NAN),
            1 => Just(f64::INFINITY),
            1 => Just(f64::NEG_INFINITY),
        ]
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            amount().prop_map(Op::Deposit),
            amount().prop_map(Op::Withdraw),
        ]
    }

    proptest! {
        #[test]
        fn prop_savings_never_below_minimum(ops in prop::collection::vec(op(), 0..40)) {
            let mut account = savings();
            for op in ops {
                let before = account.balance();
                let result = match op {
                    Op::Deposit(n) => account.deposit(n),
                    Op::Withdraw(n) => account.withdraw(n),
                };
                if result.is_err() {
                    prop_assert_eq!(account.balance(), before);
                }
                prop_assert!(account.balance().is_finite());
                prop_assert!(account.balance() >= account.minimum_balance());
            }
        }

        #[test]
        fn prop_current_never_beyond_overdraft(ops in prop::collection::vec(op(), 0..40)) {
            let mut account = current();
            for op in ops {
                let before = account.balance();
                let result = match op {
                    Op::Deposit(n) => account.deposit(n),
                    Op::Withdraw(n) => account.withdraw(n),
                };
                if result.is_err() {
                    prop_assert_eq!(account.balance(), before);
                }
                prop_assert!(account.balance().is_finite());
                prop_assert!(account.balance() >= -account.overdraft_limit());
            }
        }
    }
}
