//! Aspect taxonomy - the ten ability dimensions shared by every vector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Number of ability dimensions tracked throughout the system.
pub const ASPECT_COUNT: usize = 10;

/// One of the fixed ability dimensions.
///
/// The declaration order is the canonical vector order: ability vectors,
/// tendency samples, posterior vectors and profession matrix columns are all
/// indexed by [`Aspect::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Aspect {
    #[serde(rename = "Mathematical Skills")]
    MathematicalSkills,
    #[serde(rename = "Programming Ability")]
    ProgrammingAbility,
    #[serde(rename = "Creativity")]
    Creativity,
    #[serde(rename = "Analytical Skills")]
    AnalyticalSkills,
    #[serde(rename = "Communication Skills")]
    CommunicationSkills,
    #[serde(rename = "Leadership Skills")]
    LeadershipSkills,
    #[serde(rename = "Business Acumen")]
    BusinessAcumen,
    #[serde(rename = "Problem-Solving")]
    ProblemSolving,
    #[serde(rename = "Teamwork")]
    Teamwork,
    #[serde(rename = "Adaptability")]
    Adaptability,
}

impl Aspect {
    /// All aspects in canonical order.
    pub const ALL: [Aspect; ASPECT_COUNT] = [
        Aspect::MathematicalSkills,
        Aspect::ProgrammingAbility,
        Aspect::Creativity,
        Aspect::AnalyticalSkills,
        Aspect::CommunicationSkills,
        Aspect::LeadershipSkills,
        Aspect::BusinessAcumen,
        Aspect::ProblemSolving,
        Aspect::Teamwork,
        Aspect::Adaptability,
    ];

    /// Returns the position of this aspect in every vector.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the aspect at the given vector position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks up an aspect by its display name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Aspect::MathematicalSkills => "Mathematical Skills",
            Aspect::ProgrammingAbility => "Programming Ability",
            Aspect::Creativity => "Creativity",
            Aspect::AnalyticalSkills => "Analytical Skills",
            Aspect::CommunicationSkills => "Communication Skills",
            Aspect::LeadershipSkills => "Leadership Skills",
            Aspect::BusinessAcumen => "Business Acumen",
            Aspect::ProblemSolving => "Problem-Solving",
            Aspect::Teamwork => "Teamwork",
            Aspect::Adaptability => "Adaptability",
        }
    }

    /// Description text compared against user sentences by the similarity oracle.
    ///
    /// The descriptions are the names themselves.
    pub fn description(&self) -> &'static str {
        self.name()
    }

    /// Description strings for all aspects, in canonical order.
    pub fn descriptions() -> [&'static str; ASPECT_COUNT] {
        Self::ALL.map(|a| a.description())
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Aspect {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim())
            .ok_or_else(|| ValidationError::invalid_format("aspect", format!("unknown aspect '{}'", s)))
    }
}
