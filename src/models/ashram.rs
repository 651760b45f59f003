//! Ashram model.

use serde::{Deserialize, Serialize};

use super::Record;

/// Geographic coordinates for map display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where an ashram is located.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AshramLocation {
    pub city: String,
    pub state: String,
    pub country: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Contact details for an ashram.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AshramContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_charge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Practical information for visitors.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisitingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub darshan_timings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<String>,
}

/// An ashram or centre listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ashram {
    pub id: String,
    pub name: String,
    pub location: AshramLocation,
    pub history: String,
    pub significance: String,
    pub photo_url: String,
    #[serde(default)]
    pub contact: AshramContact,
    #[serde(default)]
    pub visiting_info: VisitingInfo,
    /// e.g. "Main Centre", "Historic", "Retreat Centre"
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for Ashram {
    fn id(&self) -> &str {
        &self.id
    }
}
