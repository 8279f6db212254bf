use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("Invalid {operation} amount: {amount}")]
    InvalidAmount { operation: &'static str, amount: f64 },

    #[error("Withdrawal of {amount} denied: minimum balance of {minimum} must be maintained (balance {balance})")]
    BelowMinimum {
        amount: f64,
        balance: f64,
        minimum: f64,
    },

    #[error("Withdrawal of {amount} denied: exceeds overdraft limit of {limit} (available {available})")]
    OverdraftExceeded {
        amount: f64,
        limit: f64,
        available: f64,
    },
}

impl AccountError {
    pub fn invalid_amount(operation: &'static str, amount: f64) -> Self {
        Self::InvalidAmount { operation, amount }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("divide by zero: {numerator} / 0")]
    DivisionByZero { numerator: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("{lhs} + {rhs} overflows a 64-bit counter")]
    Overflow { lhs: i64, rhs: i64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("{name} ({id}) is tracked by a different ledger")]
    ForeignLedger { name: String, id: u32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummationError {
    #[error("at least one worker is required")]
    NoWorkers,

    #[error("{workers} workers requested, at most {max} threads are allowed")]
    TooManyWorkers { workers: usize, max: usize },

    #[error("sum of 1..={upper} does not fit in 64 bits (largest upper bound is {max})")]
    Overflow { upper: u64, max: u64 },

    #[error("worker {index} panicked while summing {start}..={end}")]
    WorkerPanicked { index: usize, start: u64, end: u64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("expected two integers, found {found}")]
    WrongCount { found: usize },

    #[error("'{token}' is not an integer")]
    NotAnInteger { token: String },
}

impl InputError {
    pub fn not_an_integer(token: impl Into<String>) -> Self {
        Self::NotAnInteger {
            token: token.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
