use serde::{Deserialize, Serialize};

/// Ordered roster of support agent names
///
/// Duplicate names are accepted; removal takes out the first match only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentRoster(Vec<String>);

impl AgentRoster {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Remove the first occurrence of `name`, returning it if present
    pub fn remove_first(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|agent| agent == name)?;
        Some(self.0.remove(index))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|agent| agent == name)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AgentRoster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<AgentRoster> for Vec<String> {
    fn from(roster: AgentRoster) -> Self {
        roster.0
    }
}
