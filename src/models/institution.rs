//! Institution model.

use serde::{Deserialize, Serialize};

use super::Record;

/// Closed set of institution categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InstitutionCategory {
    Kanyapeeth,
    Vidyapeeth,
    Hospital,
    Education,
    Trust,
    Other,
}

impl InstitutionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionCategory::Kanyapeeth => "Kanyapeeth",
            InstitutionCategory::Vidyapeeth => "Vidyapeeth",
            InstitutionCategory::Hospital => "Hospital",
            InstitutionCategory::Education => "Education",
            InstitutionCategory::Trust => "Trust",
            InstitutionCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Kanyapeeth" => Some(InstitutionCategory::Kanyapeeth),
            "Vidyapeeth" => Some(InstitutionCategory::Vidyapeeth),
            "Hospital" => Some(InstitutionCategory::Hospital),
            "Education" => Some(InstitutionCategory::Education),
            "Trust" => Some(InstitutionCategory::Trust),
            "Other" => Some(InstitutionCategory::Other),
            _ => None,
        }
    }
}

/// Contact details for an institution.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A school, hospital, or trust run by the sangha.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: String,
    pub name: String,
    pub category: InstitutionCategory,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub contact: InstitutionContact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Record for Institution {
    fn id(&self) -> &str {
        &self.id
    }
}
