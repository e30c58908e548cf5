use crate::domain::model::ProcessedNumbers;
use crate::utils::error::{Result, ShowcaseError};

/// Squares, even subset, sum and doubled values of `numbers`, in input order.
pub fn process_numbers(numbers: &[i64]) -> ProcessedNumbers {
    let squared = numbers
        .iter()
        .map(|&x| i128::from(x) * i128::from(x))
        .collect();
    let evens = numbers.iter().copied().filter(|x| x % 2 == 0).collect();
    let total = numbers
        .iter()
        .fold(0i128, |acc, &x| acc + i128::from(x));
    let doubled = numbers.iter().map(|&x| i128::from(x) * 2).collect();

    ProcessedNumbers {
        squared,
        evens,
        total,
        doubled,
    }
}

pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(ShowcaseError::DivisionByZero);
    }
    Ok(a / b)
}
