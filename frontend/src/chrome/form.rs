use thiserror::Error;

use super::phone::{national_digits, NATIONAL_DIGITS};

pub const MIN_NAME_CHARS: usize = 2;

/// Validation failure; the message is shown to the visitor as is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Пожалуйста, введите ваше имя")]
    InvalidName,
    #[error("Пожалуйста, введите корректный номер телефона")]
    InvalidPhone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactRequest {
    /// Checks the fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(FormError::InvalidName);
        }
        if national_digits(&self.phone).len() != NATIONAL_DIGITS {
            return Err(FormError::InvalidPhone);
        }
        Ok(())
    }
}
