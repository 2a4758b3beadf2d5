//! Price of a video.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};

/// Purchase option of a priced video.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Rent,
    Own,
}

impl PriceType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEnumValue`] for anything but `rent` or `own`.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        Self::from_str(value).map_err(|_| ModelError::invalid_enum("video.price.type", value))
    }
}

/// Quality the price applies to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Hd,
    Sd,
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEnumValue`] for anything but `hd` or `sd`.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        Self::from_str(value).map_err(|_| ModelError::invalid_enum("video.price.resolution", value))
    }
}

/// A `video:price` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    value: f64,
    // TODO: validate against ISO 4217 once a currency table is available.
    currency: String,
    price_type: Option<PriceType>,
    resolution: Option<Resolution>,
}

impl Price {
    /// # Errors
    ///
    /// Returns [`ModelError::ValueOutOfRange`] unless `value` is finite and greater than zero.
    pub fn new(
        value: f64,
        currency: impl Into<String>,
        price_type: Option<PriceType>,
        resolution: Option<Resolution>,
    ) -> Result<Self, ModelError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ModelError::out_of_range(
                "video.price.value",
                format!("price must be a finite number greater than 0, got {value}"),
            ));
        }

        Ok(Self {
            value,
            currency: currency.into(),
            price_type,
            resolution,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn price_type(&self) -> Option<PriceType> {
        self.price_type
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_price_creation() {
        let price = Price::new(1.99, "EUR", Some(PriceType::Rent), Some(Resolution::Hd)).unwrap();
        assert_eq!(price.value(), 1.99);
        assert_eq!(price.currency(), "EUR");
        assert_eq!(price.price_type(), Some(PriceType::Rent));
        assert_eq!(price.resolution(), Some(Resolution::Hd));
    }

    #[test]
    fn test_price_zero_rejected() {
        let err = Price::new(0.0, "USD", None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    }

    #[test]
    fn test_price_negative_rejected() {
        let err = Price::new(-5.0, "USD", None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    }

    #[test]
    fn test_price_nan_rejected() {
        assert!(Price::new(f64::NAN, "USD", None, None).is_err());

        let err = Price::new(f64::INFINITY, "EUR", None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
    }

    #[test]
    fn test_currency_not_validated() {
        assert!(Price::new(3.0, "not-a-currency", None, None).is_ok());
    }

    #[test]
    fn test_enum_parse() {
        assert_eq!(PriceType::parse("own").unwrap(), PriceType::Own);
        assert_eq!(Resolution::parse("sd").unwrap(), Resolution::Sd);

        let err = PriceType::parse("lease").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);

        let err = Resolution::parse("4k").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEnumValue);
    }
}
