//! Vehicle entity and its validated attributes.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MIN_RELEASE_YEAR;
use crate::error::{DomainError, DomainResult};
use crate::lifecycle::{EntityKind, Persistable};

/// Vehicle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
    Other,
}

impl VehicleType {
    /// Localized display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "carro",
            VehicleType::Motorcycle => "motocicleta",
            VehicleType::Truck => "caminhão",
            VehicleType::Other => "outro",
        }
    }
}

impl std::str::FromStr for VehicleType {
    type Err = DomainError;

    /// Case-insensitive on the variant name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CAR" => Ok(VehicleType::Car),
            "MOTORCYCLE" => Ok(VehicleType::Motorcycle),
            "TRUCK" => Ok(VehicleType::Truck),
            "OTHER" => Ok(VehicleType::Other),
            _ => Err(DomainError::validation(format!(
                "Invalid vehicle type: '{}'",
                s
            ))),
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleType::Car => "CAR",
            VehicleType::Motorcycle => "MOTORCYCLE",
            VehicleType::Truck => "TRUCK",
            VehicleType::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// Validated vehicle description.
///
/// The release year is checked against the calendar year at validation
/// time; stored values are never re-checked retroactively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleAttributes {
    vehicle_type: VehicleType,
    model: String,
    release_year: i32,
    color: String,
}

impl VehicleAttributes {
    /// Validate all four fields in order: type, model, year, color.
    pub fn new(vehicle_type: &str, model: &str, release_year: i32, color: &str) -> DomainResult<Self> {
        Ok(Self {
            vehicle_type: vehicle_type.parse()?,
            model: validate_model(model)?,
            release_year: validate_release_year(release_year)?,
            color: validate_color(color)?,
        })
    }

    pub fn with_type(&self, vehicle_type: &str) -> DomainResult<Self> {
        Ok(Self {
            vehicle_type: vehicle_type.parse()?,
            ..self.clone()
        })
    }

    pub fn with_model(&self, model: &str) -> DomainResult<Self> {
        Ok(Self {
            model: validate_model(model)?,
            ..self.clone()
        })
    }

    pub fn with_release_year(&self, release_year: i32) -> DomainResult<Self> {
        Ok(Self {
            release_year: validate_release_year(release_year)?,
            ..self.clone()
        })
    }

    pub fn with_color(&self, color: &str) -> DomainResult<Self> {
        Ok(Self {
            color: validate_color(color)?,
            ..self.clone()
        })
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

fn validate_model(model: &str) -> DomainResult<String> {
    let trimmed = model.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Vehicle model cannot be null or empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_color(color: &str) -> DomainResult<String> {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Vehicle color cannot be null or empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_release_year(release_year: i32) -> DomainResult<i32> {
    check_release_year(release_year, Utc::now().year())
}

fn check_release_year(release_year: i32, current_year: i32) -> DomainResult<i32> {
    if release_year > current_year {
        return Err(DomainError::validation(format!(
            "Vehicle release year cannot be in the future. Provided: {}",
            release_year
        )));
    }
    if release_year < MIN_RELEASE_YEAR {
        return Err(DomainError::validation(format!(
            "Vehicle release year must be after {}. Provided: {}",
            MIN_RELEASE_YEAR, release_year
        )));
    }
    Ok(release_year)
}

/// Vehicle entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub id: Option<Uuid>,
    pub attributes: VehicleAttributes,
}

impl Vehicle {
    pub fn new(attributes: VehicleAttributes) -> Self {
        Self {
            id: None,
            attributes,
        }
    }
}

impl Persistable for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

/// Raw vehicle description from a request
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRequest {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub model: String,
    pub release_year: i32,
    pub color: String,
}

impl VehicleRequest {
    pub fn validate(&self) -> DomainResult<VehicleAttributes> {
        VehicleAttributes::new(&self.vehicle_type, &self.model, self.release_year, &self.color)
    }
}

/// Partial vehicle update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicle {
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub model: Option<String>,
    pub release_year: Option<i32>,
    pub color: Option<String>,
}

impl UpdateVehicle {
    /// Apply every present field to `current`, failing on the first invalid one.
    pub fn apply(&self, current: &VehicleAttributes) -> DomainResult<VehicleAttributes> {
        let mut next = current.clone();
        if let Some(vehicle_type) = &self.vehicle_type {
            next = next.with_type(vehicle_type)?;
        }
        if let Some(model) = &self.model {
            next = next.with_model(model)?;
        }
        if let Some(release_year) = self.release_year {
            next = next.with_release_year(release_year)?;
        }
        if let Some(color) = &self.color {
            next = next.with_color(color)?;
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_year() -> i32 {
        Utc::now().year()
    }

    #[test]
    fn test_valid_attributes_are_trimmed() {
        let attrs = VehicleAttributes::new("car", "  Civic ", 2020, " Black ").unwrap();
        assert_eq!(attrs.vehicle_type(), VehicleType::Car);
        assert_eq!(attrs.model(), "Civic");
        assert_eq!(attrs.release_year(), 2020);
        assert_eq!(attrs.color(), "Black");
    }

    #[test]
    fn test_type_parsing_is_case_insensitive() {
        for raw in ["TRUCK", "truck", "Truck"] {
            assert_eq!(raw.parse::<VehicleType>().unwrap(), VehicleType::Truck);
        }
        assert!("bicycle".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_release_year_bounds() {
        let now = current_year();
        assert!(VehicleAttributes::new("CAR", "Model", 1900, "Red").is_ok());
        assert!(VehicleAttributes::new("CAR", "Model", now, "Red").is_ok());
        assert!(VehicleAttributes::new("CAR", "Model", 1899, "Red").is_err());
        assert!(VehicleAttributes::new("CAR", "Model", now + 1, "Red").is_err());
    }

    #[test]
    fn test_release_year_against_given_year() {
        assert!(check_release_year(2030, 2030).is_ok());
        assert!(check_release_year(2031, 2030).is_err());
    }

    #[test]
    fn test_first_failing_field_is_reported() {
        let err = VehicleAttributes::new("boat", "", 1800, "").unwrap_err();
        assert!(err.to_string().contains("vehicle type"));

        let err = VehicleAttributes::new("CAR", " ", 1800, "").unwrap_err();
        assert_eq!(err.to_string(), "Vehicle model cannot be null or empty");

        let err = VehicleAttributes::new("CAR", "Civic", 1800, "").unwrap_err();
        assert!(err.to_string().contains("after 1900"));

        let err = VehicleAttributes::new("CAR", "Civic", 2000, "  ").unwrap_err();
        assert_eq!(err.to_string(), "Vehicle color cannot be null or empty");
    }

    #[test]
    fn test_with_methods_revalidate() {
        let attrs = VehicleAttributes::new("CAR", "Civic", 2020, "Black").unwrap();
        assert!(attrs.with_model("").is_err());
        assert!(attrs.with_release_year(current_year() + 1).is_err());
        assert_eq!(attrs.with_color("White").unwrap().color(), "White");
        assert_eq!(attrs.color(), "Black");
    }

    #[test]
    fn test_update_vehicle_applies_all_or_nothing() {
        let attrs = VehicleAttributes::new("CAR", "Civic", 2020, "Black").unwrap();

        let update = UpdateVehicle {
            model: Some("Corolla".to_string()),
            color: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(update.apply(&attrs).is_err());

        let update = UpdateVehicle {
            vehicle_type: Some("truck".to_string()),
            release_year: Some(2015),
            ..Default::default()
        };
        let next = update.apply(&attrs).unwrap();
        assert_eq!(next.vehicle_type(), VehicleType::Truck);
        assert_eq!(next.release_year(), 2015);
        assert_eq!(next.model(), "Civic");
    }

    #[test]
    fn test_labels_and_serde() {
        assert_eq!(VehicleType::Truck.label(), "caminhão");
        assert_eq!(
            serde_json::to_string(&VehicleType::Motorcycle).unwrap(),
            "\"MOTORCYCLE\""
        );
    }
}
