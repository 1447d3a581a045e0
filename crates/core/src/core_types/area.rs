//! Administrative districts (kecamatan) of Pontianak
//!
//! The registry is a fixed lookup: each district has a representative
//! coordinate for the map layer and an exposure class that scales its
//! dry-season hotspot baseline.

use crate::error::HotspotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic coordinate in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, positive north of the equator
    pub latitude: f64,
    /// Longitude, positive east of Greenwich
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Land-use exposure of a district, used only for the hotspot baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exposure {
    /// Dense city centre, fewer burnable parcels
    Urban,
    /// Peat and scrub fringe downwind of the dry-season easterlies
    Windward,
    /// Everything else
    Standard,
}

impl Exposure {
    /// Multiplier applied to the dry-season hotspot baseline
    #[must_use]
    pub fn hotspot_multiplier(self) -> f64 {
        match self {
            Exposure::Urban => 0.6,
            Exposure::Windward => 1.3,
            Exposure::Standard => 1.0,
        }
    }
}

/// One of the six districts of Kota Pontianak
///
/// Serializes as the official name; deserializes through [`FromStr`], so
/// config files accept the same short names as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Area {
    /// Pontianak Kota (city centre)
    #[serde(rename = "Pontianak Kota")]
    Kota,
    /// Pontianak Selatan
    #[serde(rename = "Pontianak Selatan")]
    Selatan,
    /// Pontianak Utara (north bank of the Kapuas)
    #[serde(rename = "Pontianak Utara")]
    Utara,
    /// Pontianak Timur
    #[serde(rename = "Pontianak Timur")]
    Timur,
    /// Pontianak Barat
    #[serde(rename = "Pontianak Barat")]
    Barat,
    /// Pontianak Tenggara
    #[serde(rename = "Pontianak Tenggara")]
    Tenggara,
}

impl Area {
    /// Full registry in display order
    pub const ALL: [Area; 6] = [
        Area::Kota,
        Area::Selatan,
        Area::Utara,
        Area::Timur,
        Area::Barat,
        Area::Tenggara,
    ];

    /// Official district name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Area::Kota => "Pontianak Kota",
            Area::Selatan => "Pontianak Selatan",
            Area::Utara => "Pontianak Utara",
            Area::Timur => "Pontianak Timur",
            Area::Barat => "Pontianak Barat",
            Area::Tenggara => "Pontianak Tenggara",
        }
    }

    /// Approximate district centroid
    #[must_use]
    pub fn coordinates(self) -> Coordinates {
        match self {
            Area::Kota => Coordinates::new(-0.0263, 109.3425),
            Area::Selatan => Coordinates::new(-0.0500, 109.3200),
            Area::Utara => Coordinates::new(0.0100, 109.3300),
            Area::Timur => Coordinates::new(-0.0200, 109.3600),
            Area::Barat => Coordinates::new(-0.0300, 109.3000),
            Area::Tenggara => Coordinates::new(-0.0600, 109.3500),
        }
    }

    /// Exposure class
    #[must_use]
    pub fn exposure(self) -> Exposure {
        match self {
            Area::Kota => Exposure::Urban,
            Area::Utara | Area::Timur => Exposure::Windward,
            Area::Selatan | Area::Barat | Area::Tenggara => Exposure::Standard,
        }
    }

    /// Shorthand for `self.exposure().hotspot_multiplier()`
    #[must_use]
    pub fn hotspot_multiplier(self) -> f64 {
        self.exposure().hotspot_multiplier()
    }

    /// Short suffix ("Kota", "Utara", ...)
    fn short_name(self) -> &'static str {
        self.name().trim_start_matches("Pontianak ")
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Area {
    type Err = HotspotError;

    /// Accepts the full name or the short suffix, case-insensitive
    /// (`"Pontianak Utara"`, `"utara"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Area::ALL
            .into_iter()
            .find(|area| {
                area.name().eq_ignore_ascii_case(wanted)
                    || area.short_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| HotspotError::UnknownArea(s.to_string()))
    }
}

impl TryFrom<String> for Area {
    type Error = HotspotError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
