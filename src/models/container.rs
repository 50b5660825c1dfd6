use super::error::AppError;
use serde::{Deserialize, Serialize};

/// One of the four physical pill compartments of the dispenser.
/// Serialized as its number (1-4), which is how the device stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Container {
    One,
    Two,
    Three,
    Four,
}

impl Container {
    /// Returns the number printed on the device and used on the wire.
    pub fn number(&self) -> u8 {
        match self {
            Container::One => 1,
            Container::Two => 2,
            Container::Three => 3,
            Container::Four => 4,
        }
    }

    /// Accent color shared by the container's header, border and dialogs.
    pub fn color(&self) -> &'static str {
        match self {
            Container::One => "#007bff",   // blue
            Container::Two => "#dc3545",   // red
            Container::Three => "#ffc107", // yellow
            Container::Four => "#28a745",  // green
        }
    }

    /// All containers, in display order.
    pub fn all() -> &'static [Container] {
        &[
            Container::One,
            Container::Two,
            Container::Three,
            Container::Four,
        ]
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Container {}", self.number())
    }
}

impl TryFrom<u8> for Container {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Container::One),
            2 => Ok(Container::Two),
            3 => Ok(Container::Three),
            4 => Ok(Container::Four),
            _ => Err(AppError::DataError(format!("Invalid container: {value}"))),
        }
    }
}

impl From<Container> for u8 {
    fn from(container: Container) -> Self {
        container.number()
    }
}

impl std::str::FromStr for Container {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| AppError::DataError(format!("Invalid container: {s}")))
            .and_then(Container::try_from)
    }
}
