use crate::utils::error::Result;
use crate::utils::validation::validate_postal_code;
use std::fmt;

/// Postal address. Immutable once built; the postal code is checked on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    number: String,
    floor: String,
    postal_code: String,
    province: String,
    locality: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        floor: impl Into<String>,
        postal_code: impl Into<String>,
        province: impl Into<String>,
        locality: impl Into<String>,
    ) -> Result<Self> {
        let postal_code = postal_code.into();
        validate_postal_code("address.postal_code", &postal_code)?;

        Ok(Self {
            street: street.into(),
            number: number.into(),
            floor: floor.into(),
            postal_code,
            province: province.into(),
            locality: locality.into(),
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn floor(&self) -> &str {
        &self.floor
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {} ({})",
            self.street, self.number, self.floor, self.locality, self.province, self.postal_code
        )
    }
}
