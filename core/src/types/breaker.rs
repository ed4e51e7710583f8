use serde::{Deserialize, Serialize};
use std::fmt;

/// One breaker in the panel.
///
/// `position` is an ordering hint for display, not a slot index; it is
/// not guaranteed unique or contiguous after reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breaker {
    pub id: i32,
    pub name: String,
    /// Rated amps; 0 means not set.
    pub amperage: i32,
    pub is_on: bool,
    pub position: i32,
    #[serde(default)]
    pub interruption_type: InterruptionType,
    #[serde(default)]
    pub breaker_type: BreakerType,
}

impl Breaker {
    /// Physical slots this breaker occupies.
    pub fn space_width(&self) -> i32 {
        self.breaker_type.space_width()
    }

    /// Label to display; falls back to a positional label when the
    /// user has not named the circuit.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Breaker {}", self.position)
        } else {
            self.name.clone()
        }
    }
}

/// Trip mechanism of a breaker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterruptionType {
    #[default]
    #[serde(rename = "Standard Trip")]
    StandardTrip,
    #[serde(rename = "GFCI")]
    Gfci,
    #[serde(rename = "AFCI")]
    Afci,
    #[serde(rename = "AFCI/GFCI")]
    AfciGfci,
}

impl fmt::Display for InterruptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterruptionType::StandardTrip => write!(f, "Standard Trip"),
            InterruptionType::Gfci => write!(f, "GFCI"),
            InterruptionType::Afci => write!(f, "AFCI"),
            InterruptionType::AfciGfci => write!(f, "AFCI/GFCI"),
        }
    }
}

/// Pole configuration of a breaker, which determines its space width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakerType {
    #[default]
    #[serde(rename = "Single Pole")]
    SinglePole,
    #[serde(rename = "Double Pole")]
    DoublePole,
    #[serde(rename = "Triple Pole")]
    TriplePole,
    Main,
}

impl BreakerType {
    /// Physical slots a breaker of this type occupies.
    pub fn space_width(self) -> i32 {
        match self {
            BreakerType::SinglePole => 1,
            BreakerType::DoublePole | BreakerType::Main => 2,
            BreakerType::TriplePole => 3,
        }
    }
}

impl fmt::Display for BreakerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakerType::SinglePole => write!(f, "Single Pole"),
            BreakerType::DoublePole => write!(f, "Double Pole"),
            BreakerType::TriplePole => write!(f, "Triple Pole"),
            BreakerType::Main => write!(f, "Main"),
        }
    }
}
