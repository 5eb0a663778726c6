//! Bounded body measurements: age in years, weight in kilograms, height in
//! centimetres.

use crate::errors::UserDomainError;

pub const AGE_RANGE: (u32, u32) = (1, 150);
pub const WEIGHT_RANGE: (u32, u32) = (1, 500);
pub const HEIGHT_RANGE: (u32, u32) = (1, 300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyMetric(u32);

impl BodyMetric {
    pub fn age(value: u32) -> Result<Self, UserDomainError> {
        Self::bounded("age", value, AGE_RANGE)
    }

    pub fn weight(value: u32) -> Result<Self, UserDomainError> {
        Self::bounded("weight", value, WEIGHT_RANGE)
    }

    pub fn height(value: u32) -> Result<Self, UserDomainError> {
        Self::bounded("height", value, HEIGHT_RANGE)
    }

    fn bounded(field: &str, value: u32, (min, max): (u32, u32)) -> Result<Self, UserDomainError> {
        if value < min || value > max {
            return Err(UserDomainError::InvalidAttribute {
                field: field.to_string(),
                min,
                max,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}
