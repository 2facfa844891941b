// ── Flavour ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The category every unicorn belongs to.
///
/// Serialized as its lowercase raw value (`"red"`, `"green"`, `"blue"`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Flavour {
    #[default]
    Red,
    Green,
    Blue,
}

impl Flavour {
    /// Parse a raw wire value, falling back to [`Flavour::Red`] for
    /// anything unrecognized.
    pub fn from_raw(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// Every flavour, in picker order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Human-readable name shown in pickers and cells.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }

    /// Named color asset used to tint this flavour.
    pub fn color(self) -> &'static str {
        match self {
            Self::Red => "deepMaroon",
            Self::Green => "oliveShade",
            Self::Blue => "oceanDepths",
        }
    }

    /// Image asset shown next to the unicorn's name.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Red => "redFlavour",
            Self::Green => "greenFlavour",
            Self::Blue => "blueFlavour",
        }
    }
}
