// This file is part of the numtheory package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Errors returned by the arithmetic core.

use thiserror::Error;
use uucore::error::UError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumTheoryError {
    /// `lcm(0, 0)`, or a zero modulus in the modular operations.
    #[error("division by zero")]
    DivisionByZero,

    /// Input outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl UError for NumTheoryError {
    fn code(&self) -> i32 {
        1
    }
}
