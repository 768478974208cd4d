use crate::error::{CoreError, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_BAG_SIZE: usize = 14;
pub const MIN_BAG_SIZE: usize = 1;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClubName {
    Driver,
    #[serde(rename = "3 Wood")]
    Wood3,
    #[serde(rename = "5 Wood")]
    Wood5,
    #[serde(rename = "7 Wood")]
    Wood7,
    #[serde(rename = "9 Wood")]
    Wood9,
    #[serde(rename = "2 Hybrid")]
    Hybrid2,
    #[serde(rename = "3 Hybrid")]
    Hybrid3,
    #[serde(rename = "4 Hybrid")]
    Hybrid4,
    #[serde(rename = "5 Hybrid")]
    Hybrid5,
    #[serde(rename = "6 Hybrid")]
    Hybrid6,
    #[serde(rename = "2 Iron")]
    Iron2,
    #[serde(rename = "3 Iron")]
    Iron3,
    #[serde(rename = "4 Iron")]
    Iron4,
    #[serde(rename = "5 Iron")]
    Iron5,
    #[serde(rename = "6 Iron")]
    Iron6,
    #[serde(rename = "7 Iron")]
    Iron7,
    #[serde(rename = "8 Iron")]
    Iron8,
    #[serde(rename = "9 Iron")]
    Iron9,
    #[serde(rename = "PW")]
    PitchingWedge,
    #[serde(rename = "GW")]
    GapWedge,
    #[serde(rename = "AW")]
    ApproachWedge,
    #[serde(rename = "SW")]
    SandWedge,
    #[serde(rename = "LW")]
    LobWedge,
}

impl ClubName {
    /// Catalogue order, longest club first.
    pub const CATALOGUE: [ClubName; 23] = [
        Self::Driver,
        Self::Wood3,
        Self::Wood5,
        Self::Wood7,
        Self::Wood9,
        Self::Hybrid2,
        Self::Hybrid3,
        Self::Hybrid4,
        Self::Hybrid5,
        Self::Hybrid6,
        Self::Iron2,
        Self::Iron3,
        Self::Iron4,
        Self::Iron5,
        Self::Iron6,
        Self::Iron7,
        Self::Iron8,
        Self::Iron9,
        Self::PitchingWedge,
        Self::GapWedge,
        Self::ApproachWedge,
        Self::SandWedge,
        Self::LobWedge,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Wood3 => "3 Wood",
            Self::Wood5 => "5 Wood",
            Self::Wood7 => "7 Wood",
            Self::Wood9 => "9 Wood",
            Self::Hybrid2 => "2 Hybrid",
            Self::Hybrid3 => "3 Hybrid",
            Self::Hybrid4 => "4 Hybrid",
            Self::Hybrid5 => "5 Hybrid",
            Self::Hybrid6 => "6 Hybrid",
            Self::Iron2 => "2 Iron",
            Self::Iron3 => "3 Iron",
            Self::Iron4 => "4 Iron",
            Self::Iron5 => "5 Iron",
            Self::Iron6 => "6 Iron",
            Self::Iron7 => "7 Iron",
            Self::Iron8 => "8 Iron",
            Self::Iron9 => "9 Iron",
            Self::PitchingWedge => "PW",
            Self::GapWedge => "GW",
            Self::ApproachWedge => "AW",
            Self::SandWedge => "SW",
            Self::LobWedge => "LW",
        }
    }

    fn iron_number(self) -> Option<u32> {
        match self {
            Self::Iron2 => Some(2),
            Self::Iron3 => Some(3),
            Self::Iron4 => Some(4),
            Self::Iron5 => Some(5),
            Self::Iron6 => Some(6),
            Self::Iron7 => Some(7),
            Self::Iron8 => Some(8),
            Self::Iron9 => Some(9),
            _ => None,
        }
    }

    /// Starting distance offered when a club is added to a bag.
    #[must_use]
    pub fn estimated_distance(self) -> u32 {
        if let Some(n) = self.iron_number() {
            return 200 - n * 10;
        }
        match self {
            Self::Driver => 250,
            Self::Wood3 | Self::Wood5 | Self::Wood7 | Self::Wood9 => 220,
            Self::Hybrid2 | Self::Hybrid3 | Self::Hybrid4 | Self::Hybrid5 | Self::Hybrid6 => 190,
            Self::PitchingWedge => 130,
            Self::GapWedge | Self::ApproachWedge => 110,
            Self::SandWedge => 90,
            Self::LobWedge => 70,
            _ => 150,
        }
    }
}

impl fmt::Display for ClubName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ClubName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::CATALOGUE
            .into_iter()
            .find(|club| club.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::Parse(format!("unknown club name '{wanted}'")))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClubEntry {
    pub name: ClubName,
    #[serde(rename = "distance")]
    pub base_distance_yards: u32,
}

impl ClubEntry {
    #[must_use]
    pub fn new(name: ClubName, base_distance_yards: u32) -> Self {
        Self {
            name,
            base_distance_yards,
        }
    }
}

/// The 13-club bag a new registration starts from.
#[must_use]
pub fn default_bag() -> Vec<ClubEntry> {
    [
        (ClubName::Driver, 250),
        (ClubName::Wood3, 230),
        (ClubName::Wood5, 210),
        (ClubName::Iron4, 190),
        (ClubName::Iron5, 180),
        (ClubName::Iron6, 170),
        (ClubName::Iron7, 160),
        (ClubName::Iron8, 150),
        (ClubName::Iron9, 140),
        (ClubName::PitchingWedge, 130),
        (ClubName::GapWedge, 110),
        (ClubName::SandWedge, 90),
        (ClubName::LobWedge, 70),
    ]
    .into_iter()
    .map(|(name, yards)| ClubEntry::new(name, yards))
    .collect()
}

/// The club an "add club" action puts in the bag: the first catalogue club
/// not already carried, or a duplicate 7 iron once every name is used.
#[must_use]
pub fn next_club(bag: &[ClubEntry]) -> ClubEntry {
    ClubName::CATALOGUE
        .into_iter()
        .find(|name| !bag.iter().any(|entry| entry.name == *name))
        .map_or_else(
            || ClubEntry::new(ClubName::Iron7, 160),
            |name| ClubEntry::new(name, name.estimated_distance()),
        )
}

/// Push `next_club` onto the bag.
///
/// # Errors
/// Returns `Validation` if the bag already holds the maximum number of clubs.
pub fn add_club(bag: &mut Vec<ClubEntry>) -> Result<ClubEntry, CoreError> {
    if bag.len() >= MAX_BAG_SIZE {
        return Err(CoreError::Validation(vec![ValidationIssue::new(
            "clubs",
            format!("maximum {MAX_BAG_SIZE} clubs allowed"),
        )]));
    }
    let entry = next_club(bag);
    bag.push(entry);
    Ok(entry)
}

/// Remove the club at `index`.
///
/// # Errors
/// Returns `Validation` when removing would empty the bag and
/// `IndexOutOfRange` for a position past the end.
pub fn remove_club(bag: &mut Vec<ClubEntry>, index: usize) -> Result<ClubEntry, CoreError> {
    if index >= bag.len() {
        return Err(CoreError::IndexOutOfRange {
            index,
            len: bag.len(),
        });
    }
    if bag.len() <= MIN_BAG_SIZE {
        return Err(CoreError::Validation(vec![ValidationIssue::new(
            "clubs",
            "you must have at least one club",
        )]));
    }
    Ok(bag.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_distances_follow_club_family() {
        assert_eq!(ClubName::Driver.estimated_distance(), 250);
        assert_eq!(ClubName::Wood7.estimated_distance(), 220);
        assert_eq!(ClubName::Hybrid4.estimated_distance(), 190);
        assert_eq!(ClubName::Iron3.estimated_distance(), 170);
        assert_eq!(ClubName::Iron9.estimated_distance(), 110);
        assert_eq!(ClubName::ApproachWedge.estimated_distance(), 110);
        assert_eq!(ClubName::LobWedge.estimated_distance(), 70);
    }

    #[test]
    fn next_club_skips_clubs_in_bag() {
        let bag = default_bag();
        let next = next_club(&bag);
        assert_eq!(next, ClubEntry::new(ClubName::Wood7, 220));
    }

    #[test]
    fn next_club_duplicates_seven_iron_when_catalogue_used_up() {
        let bag: Vec<ClubEntry> = ClubName::CATALOGUE
            .into_iter()
            .map(|name| ClubEntry::new(name, 100))
            .collect();
        assert_eq!(next_club(&bag), ClubEntry::new(ClubName::Iron7, 160));
    }

    #[test]
    fn bag_size_limits() {
        let mut bag = default_bag();
        assert!(add_club(&mut bag).is_ok());
        assert_eq!(bag.len(), MAX_BAG_SIZE);
        assert!(matches!(add_club(&mut bag), Err(CoreError::Validation(_))));

        let mut single = vec![ClubEntry::new(ClubName::Driver, 250)];
        assert!(matches!(
            remove_club(&mut single, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            remove_club(&mut single, 3),
            Err(CoreError::IndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn club_names_parse_and_serialize_as_labels() {
        assert_eq!("pw".parse::<ClubName>().ok(), Some(ClubName::PitchingWedge));
        assert_eq!(" 5 Hybrid ".parse::<ClubName>().ok(), Some(ClubName::Hybrid5));
        assert!("Putter".parse::<ClubName>().is_err());
        let json = serde_json::to_string(&ClubEntry::new(ClubName::Wood3, 230)).unwrap();
        assert_eq!(json, r#"{"name":"3 Wood","distance":230}"#);
    }
}
