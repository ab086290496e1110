//! Markers placed on a map and the utility categories they belong to.
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub type MarkerId = String;

/// Utility category of a marker. Clustering never groups across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UtilityType {
    Smoke,
    Flash,
    Molotov,
    He,
}

impl UtilityType {
    pub const ALL: [UtilityType; 4] = [
        UtilityType::Smoke,
        UtilityType::Flash,
        UtilityType::Molotov,
        UtilityType::He,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UtilityType::Smoke => "smoke",
            UtilityType::Flash => "flash",
            UtilityType::Molotov => "molotov",
            UtilityType::He => "he",
        }
    }
}

impl fmt::Display for UtilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for UtilityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smoke" => Ok(UtilityType::Smoke),
            "flash" => Ok(UtilityType::Flash),
            "molotov" => Ok(UtilityType::Molotov),
            "he" => Ok(UtilityType::He),
            _ => Err(Error::UnknownUtilityType { value: s.to_owned() }),
        }
    }
}

/// A single annotation on the map.
///
/// Only `position` and `category` take part in clustering; `id` breaks ordering
/// ties and `payload` is carried through untouched.
///
/// Positions are expected to be finite. Markers with non-finite coordinates
/// are still partitioned, but their grouping is unspecified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Marker<P = ()> {
    /// Stable unique identifier.
    pub id: MarkerId,
    /// Position in map coordinates.
    pub position: Vec2,
    /// Utility category.
    pub category: UtilityType,
    /// Opaque caller data.
    pub payload: P,
}

impl Marker<()> {
    /// Create a marker without payload.
    pub fn new(id: impl Into<MarkerId>, position: impl Into<Vec2>, category: UtilityType) -> Self {
        Self::with_payload(id, position, category, ())
    }
}

impl<P> Marker<P> {
    /// Create a marker carrying caller data.
    pub fn with_payload(
        id: impl Into<MarkerId>,
        position: impl Into<Vec2>,
        category: UtilityType,
        payload: P,
    ) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
            category,
            payload,
        }
    }
}
