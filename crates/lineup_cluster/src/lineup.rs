//! Lineup records and the side/utility filters applied before clustering.
//!
//! A [`Lineup`] is one saved utility throw on a map. The viewer shows the
//! lineups of the active map that pass the current [`LineupFilters`] and hands
//! them to the clustering engine as [`Marker`]s via [`markers_for_map`].
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::marker::{Marker, MarkerId, UtilityType};

/// Team side a lineup is thrown from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    T,
    Ct,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::T => "t",
            Side::Ct => "ct",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "t" => Ok(Side::T),
            "ct" => Ok(Side::Ct),
            _ => Err(Error::UnknownSide { value: s.to_owned() }),
        }
    }
}

/// A saved lineup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lineup {
    pub id: MarkerId,
    pub title: String,
    pub map_name: String,
    pub side: Side,
    pub utility_type: UtilityType,
    /// Where the utility lands; this is the clustered position.
    pub landing: Vec2,
    /// Where the throw is made from, if recorded.
    pub origin: Option<Vec2>,
    pub description: Option<String>,
}

impl Lineup {
    pub fn new(
        id: impl Into<MarkerId>,
        title: impl Into<String>,
        map_name: impl Into<String>,
        side: Side,
        utility_type: UtilityType,
        landing: impl Into<Vec2>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            map_name: map_name.into(),
            side,
            utility_type,
            landing: landing.into(),
            origin: None,
            description: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<Vec2>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marker at the landing point carrying this lineup as payload.
    pub fn to_marker(&self) -> Marker<Lineup> {
        Marker::with_payload(
            self.id.clone(),
            self.landing,
            self.utility_type,
            self.clone(),
        )
    }
}

/// Visibility per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideFilter {
    pub t: bool,
    pub ct: bool,
}

impl Default for SideFilter {
    fn default() -> Self {
        Self { t: true, ct: true }
    }
}

impl SideFilter {
    pub fn allows(&self, side: Side) -> bool {
        match side {
            Side::T => self.t,
            Side::Ct => self.ct,
        }
    }

    fn slot(&mut self, side: Side) -> &mut bool {
        match side {
            Side::T => &mut self.t,
            Side::Ct => &mut self.ct,
        }
    }
}

/// Visibility per utility type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtilityFilter {
    pub smoke: bool,
    pub flash: bool,
    pub molotov: bool,
    pub he: bool,
}

impl Default for UtilityFilter {
    fn default() -> Self {
        Self {
            smoke: true,
            flash: true,
            molotov: true,
            he: true,
        }
    }
}

impl UtilityFilter {
    pub fn allows(&self, utility: UtilityType) -> bool {
        match utility {
            UtilityType::Smoke => self.smoke,
            UtilityType::Flash => self.flash,
            UtilityType::Molotov => self.molotov,
            UtilityType::He => self.he,
        }
    }

    fn slot(&mut self, utility: UtilityType) -> &mut bool {
        match utility {
            UtilityType::Smoke => &mut self.smoke,
            UtilityType::Flash => &mut self.flash,
            UtilityType::Molotov => &mut self.molotov,
            UtilityType::He => &mut self.he,
        }
    }
}

/// Side and utility toggles of the viewer. Everything is visible by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineupFilters {
    pub side: SideFilter,
    pub utility: UtilityFilter,
}

impl LineupFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips visibility of `side` and returns the new state.
    pub fn toggle_side(&mut self, side: Side) -> bool {
        let slot = self.side.slot(side);
        *slot = !*slot;
        *slot
    }

    /// Flips visibility of `utility` and returns the new state.
    pub fn toggle_utility(&mut self, utility: UtilityType) -> bool {
        let slot = self.utility.slot(utility);
        *slot = !*slot;
        *slot
    }

    pub fn with_side(mut self, side: Side, visible: bool) -> Self {
        *self.side.slot(side) = visible;
        self
    }

    pub fn with_utility(mut self, utility: UtilityType, visible: bool) -> Self {
        *self.utility.slot(utility) = visible;
        self
    }

    pub fn allows(&self, lineup: &Lineup) -> bool {
        self.side.allows(lineup.side) && self.utility.allows(lineup.utility_type)
    }
}

/// Markers for the lineups of `map_name` that pass `filters`, in input order.
pub fn markers_for_map<'a>(
    lineups: impl IntoIterator<Item = &'a Lineup>,
    map_name: &str,
    filters: &LineupFilters,
) -> Vec<Marker<Lineup>> {
    lineups
        .into_iter()
        .filter(|l| l.map_name == map_name && filters.allows(l))
        .map(Lineup::to_marker)
        .collect()
}
