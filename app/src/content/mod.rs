//! Career, sector and ship content.
//!
//! The types are shared with the browser; loading them from the YAML data
//! files only happens on the server, once, in [`Catalog::load`].

#[cfg(feature = "ssr")]
mod catalog;
#[cfg(feature = "ssr")]
pub mod errors;

#[cfg(feature = "ssr")]
pub use catalog::Catalog;
#[cfg(feature = "ssr")]
pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};

use crate::state::SectionKey;

/// Served from the public assets for ships without their own picture.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Sector {
    Deck,
    Engineering,
    Supply,
    Specialized,
}

impl Sector {
    pub fn key(self) -> &'static str {
        match self {
            Sector::Deck => "deck",
            Sector::Engineering => "engineering",
            Sector::Supply => "supply",
            Sector::Specialized => "specialized",
        }
    }

    /// Where the sector sits on the careers compass.
    pub fn bearing(self) -> Bearing {
        match self {
            Sector::Deck => Bearing::North,
            Sector::Engineering => Bearing::East,
            Sector::Supply => Bearing::South,
            Sector::Specialized => Bearing::West,
        }
    }
}

impl SectionKey for Sector {
    // clockwise from north
    const ALL: &'static [Self] = &[
        Sector::Deck,
        Sector::Engineering,
        Sector::Supply,
        Sector::Specialized,
    ];

    fn label(self) -> &'static str {
        match self {
            Sector::Deck => "Deck",
            Sector::Engineering => "Engineering",
            Sector::Supply => "Supply & Steward",
            Sector::Specialized => "Specialized",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bearing {
    North,
    East,
    South,
    West,
}

impl Bearing {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Bearing::North => "N",
            Bearing::East => "E",
            Bearing::South => "S",
            Bearing::West => "W",
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Bearing::North => 0,
            Bearing::East => 90,
            Bearing::South => 180,
            Bearing::West => 270,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SectorGuide {
    pub sector: Sector,
    pub title: String,
    pub tagline: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Role {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub credentials: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CareerCategory {
    pub slug: String,
    pub sector: Sector,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Everything the careers-and-sectors page shows.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CareerAtlas {
    pub guides: Vec<SectorGuide>,
    pub categories: Vec<CareerCategory>,
}

impl CareerAtlas {
    pub fn guide(&self, sector: Sector) -> Option<&SectorGuide> {
        self.guides.iter().find(|guide| guide.sector == sector)
    }

    pub fn categories_in(&self, sector: Sector) -> impl Iterator<Item = &CareerCategory> {
        self.categories
            .iter()
            .filter(move |category| category.sector == sector)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NewsItem {
    pub headline: String,
    pub url: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    pub slug: String,
    pub name: String,
    pub hull_number: String,
    pub class: String,
    pub kind: String,
    #[serde(default)]
    pub image: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub specs: Vec<Spec>,
    pub overview: String,
    #[serde(default)]
    pub missions: Vec<String>,
    pub life_aboard: String,
    #[serde(default)]
    pub news_url: Option<String>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

impl Ship {
    pub fn image_path(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// The tabs of a ship profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipSection {
    Overview,
    Specifications,
    Missions,
    LifeAboard,
}

impl SectionKey for ShipSection {
    const ALL: &'static [Self] = &[
        ShipSection::Overview,
        ShipSection::Specifications,
        ShipSection::Missions,
        ShipSection::LifeAboard,
    ];

    fn label(self) -> &'static str {
        match self {
            ShipSection::Overview => "Overview",
            ShipSection::Specifications => "Specifications",
            ShipSection::Missions => "Missions",
            ShipSection::LifeAboard => "Life aboard",
        }
    }
}
