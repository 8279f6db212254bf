use crate::error::ArithmeticError;

pub fn divide(numerator: f64, denominator: f64) -> Result<f64, ArithmeticError> {
    if denominator == 0.0 {
        return Err(ArithmeticError::DivisionByZero { numerator });
    }
    Ok(numerator / denominator)
}

/// Divides each pair, stopping at the first failure.
pub fn divide_all(pairs: &[(f64, f64)]) -> Result<Vec<f64>, ArithmeticError> {
    pairs.iter().map(|&(a, b)| divide(a, b)).collect()
}
