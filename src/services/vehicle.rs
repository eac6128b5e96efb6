// src/services/vehicle.rs
//! Vehicle purchase records and the checks applied when one is built from
//! submitted form values.

use std::{fmt, str::FromStr};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Column headers of the purchase table, in display order.
pub const COLUMNS: [&str; 8] = [
    "Nom",
    "Contact",
    "Type",
    "Modèle",
    "Prix",
    "Date",
    "Paiement",
    "Commentaires",
];

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("unknown vehicle type: {0:?}")]
    UnknownVehicleType(String),

    #[error("unknown payment method: {0:?}")]
    UnknownPaymentMethod(String),

    #[error("price must be a finite number >= 0, got {0}")]
    InvalidPrice(f64),

    #[error("purchase date must be formatted YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Suv,
    Citadine,
    Berline,
    Pickup,
    Fourgon,
    Autre,
}

impl VehicleType {
    /// Selector order of the intake form.
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Suv,
        VehicleType::Citadine,
        VehicleType::Berline,
        VehicleType::Pickup,
        VehicleType::Fourgon,
        VehicleType::Autre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Suv => "SUV",
            VehicleType::Citadine => "Citadine",
            VehicleType::Berline => "Berline",
            VehicleType::Pickup => "Pickup",
            VehicleType::Fourgon => "Fourgon",
            VehicleType::Autre => "Autre",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVehicleType(s.to_string()))
    }
}

impl Serialize for VehicleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Comptant,
    Financement,
    LocationLongueDuree,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Comptant,
        PaymentMethod::Financement,
        PaymentMethod::LocationLongueDuree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Comptant => "Comptant",
            PaymentMethod::Financement => "Financement",
            PaymentMethod::LocationLongueDuree => "Location longue durée",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPaymentMethod(s.to_string()))
    }
}

impl Serialize for PaymentMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of the purchase table. Serialized with the table's column names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VehicleRecord {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Type")]
    pub vehicle_type: VehicleType,
    #[serde(rename = "Modèle")]
    pub model: String,
    #[serde(rename = "Prix")]
    pub price: f64,
    #[serde(rename = "Date")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "Paiement")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "Commentaires")]
    pub comments: String,
}

/// Raw control values posted with the form's submit action.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VehicleSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub price: f64,
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub comments: String,
}

impl VehicleSubmission {
    /// Builds the record. A missing date falls back to `today`, the date
    /// control's default.
    pub fn into_record(self, today: NaiveDate) -> Result<VehicleRecord, ValidationError> {
        let vehicle_type = self.vehicle_type.parse::<VehicleType>()?;
        let payment_method = self.payment_method.parse::<PaymentMethod>()?;

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice(self.price));
        }

        let purchase_date = match self.purchase_date.as_deref() {
            None => today,
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?,
        };

        Ok(VehicleRecord {
            name: self.name,
            contact: self.contact,
            vehicle_type,
            model: self.model,
            price: self.price,
            purchase_date,
            payment_method,
            comments: self.comments,
        })
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
