//! Name value objects for people and companies.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

fn required(value: &str, message: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(trimmed.to_string())
}

/// First and last name of a person, both non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    pub fn new(first_name: &str, last_name: &str) -> DomainResult<Self> {
        Ok(Self {
            first_name: required(first_name, "First name cannot be null or empty")?,
            last_name: required(last_name, "Last name cannot be null or empty")?,
        })
    }

    pub fn with_first_name(&self, first_name: &str) -> DomainResult<Self> {
        Self::new(first_name, &self.last_name)
    }

    pub fn with_last_name(&self, last_name: &str) -> DomainResult<Self> {
        Self::new(&self.first_name, last_name)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Registered company name of a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(value: &str) -> DomainResult<Self> {
        required(value, "Company name cannot be null or empty").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompanyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CompanyName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CompanyName> for String {
    fn from(name: CompanyName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_trims() {
        let name = PersonName::new("  John ", " Doe  ").unwrap();
        assert_eq!(name.first_name(), "John");
        assert_eq!(name.last_name(), "Doe");
        assert_eq!(name.full_name(), "John Doe");
    }

    #[test]
    fn test_person_name_rejects_blank_parts() {
        assert_eq!(
            PersonName::new("  ", "Doe").unwrap_err().to_string(),
            "First name cannot be null or empty"
        );
        assert_eq!(
            PersonName::new("John", "").unwrap_err().to_string(),
            "Last name cannot be null or empty"
        );
    }

    #[test]
    fn test_with_first_name_keeps_last_name() {
        let name = PersonName::new("John", "Doe").unwrap();
        let renamed = name.with_first_name(" Jane ").unwrap();
        assert_eq!(renamed.full_name(), "Jane Doe");
        assert!(name.with_last_name(" ").is_err());
    }

    #[test]
    fn test_company_name() {
        assert_eq!(CompanyName::new(" Auto Center ").unwrap().as_str(), "Auto Center");
        assert!(CompanyName::new("").is_err());
    }
}
