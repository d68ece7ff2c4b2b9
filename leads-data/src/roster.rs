use crate::Lead;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    pub leads: Vec<Lead>,
}

impl std::str::FromStr for Roster {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let roster: Roster = serde_json::from_str(s)?;
        log::debug!("Parsed roster with {} leads", roster.leads.len());
        Ok(roster)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("could not read roster {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid roster: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RosterError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        RosterError::Io {
            path: path.into(),
            source,
        }
    }
}
