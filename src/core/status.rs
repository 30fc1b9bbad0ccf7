use crate::error::TicketDeskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket status
///
/// Any status may follow any other. Only `Closed` allows a ticket to be archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl Status {
    /// All statuses in display order
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for Status {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "inprogress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            _ => Err(TicketDeskError::InvalidInput(format!("unknown status '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_variants() {
        assert_eq!("Open".parse::<Status>().unwrap(), Status::Open);
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!(" closed ".parse::<Status>().unwrap(), Status::Closed);
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_display_matches_serde() {
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
