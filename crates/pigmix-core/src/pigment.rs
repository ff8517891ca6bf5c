//! Named artist pigments and their representative sRGB values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb8;
use crate::error::PigmixError;

/// A commonly used paint pigment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pigment {
    CadmiumYellow,
    HansaYellow,
    CadmiumOrange,
    CadmiumRed,
    QuinacridoneMagenta,
    CobaltViolet,
    UltramarineBlue,
    CobaltBlue,
    PhthaloBlue,
    PhthaloGreen,
    PermanentGreen,
    SapGreen,
    BurntSienna,
}

impl Pigment {
    /// Every pigment in palette order.
    pub const ALL: [Pigment; 13] = [
        Self::CadmiumYellow,
        Self::HansaYellow,
        Self::CadmiumOrange,
        Self::CadmiumRed,
        Self::QuinacridoneMagenta,
        Self::CobaltViolet,
        Self::UltramarineBlue,
        Self::CobaltBlue,
        Self::PhthaloBlue,
        Self::PhthaloGreen,
        Self::PermanentGreen,
        Self::SapGreen,
        Self::BurntSienna,
    ];

    /// sRGB value of the pigment at full strength.
    pub const fn rgb(self) -> Rgb8 {
        match self {
            Self::CadmiumYellow => [254, 236, 0],
            Self::HansaYellow => [252, 211, 0],
            Self::CadmiumOrange => [255, 105, 0],
            Self::CadmiumRed => [255, 39, 2],
            Self::QuinacridoneMagenta => [128, 2, 46],
            Self::CobaltViolet => [78, 0, 66],
            Self::UltramarineBlue => [25, 0, 89],
            Self::CobaltBlue => [0, 33, 133],
            Self::PhthaloBlue => [13, 27, 68],
            Self::PhthaloGreen => [0, 60, 50],
            Self::PermanentGreen => [7, 109, 22],
            Self::SapGreen => [107, 148, 4],
            Self::BurntSienna => [123, 72, 0],
        }
    }

    /// Kebab-case identifier, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::CadmiumYellow => "cadmium-yellow",
            Self::HansaYellow => "hansa-yellow",
            Self::CadmiumOrange => "cadmium-orange",
            Self::CadmiumRed => "cadmium-red",
            Self::QuinacridoneMagenta => "quinacridone-magenta",
            Self::CobaltViolet => "cobalt-violet",
            Self::UltramarineBlue => "ultramarine-blue",
            Self::CobaltBlue => "cobalt-blue",
            Self::PhthaloBlue => "phthalo-blue",
            Self::PhthaloGreen => "phthalo-green",
            Self::PermanentGreen => "permanent-green",
            Self::SapGreen => "sap-green",
            Self::BurntSienna => "burnt-sienna",
        }
    }
}

impl fmt::Display for Pigment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pigment {
    type Err = PigmixError;

    /// Accepts kebab-case, snake_case or space separated names, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| PigmixError::UnknownPigment(s.to_string()))
    }
}
