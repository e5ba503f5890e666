//! Application and per-row UI state.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    ListView,
}

/// Top-level app state. `has_onboarded` only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    has_onboarded: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_onboarded(&self) -> bool {
        self.has_onboarded
    }

    pub fn screen(&self) -> Screen {
        if self.has_onboarded {
            Screen::ListView
        } else {
            Screen::Onboarding
        }
    }

    /// Leave onboarding. Returns true only on the first call.
    pub fn complete_onboarding(&mut self) -> bool {
        if self.has_onboarded {
            return false;
        }
        debug!("onboarding complete, switching to list view");
        self.has_onboarded = true;
        true
    }
}

/// One greeting, identified by its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GreetingItem {
    id: String,
}

impl GreetingItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `"0"`, `"1"`, ..., `"count - 1"`.
    pub fn sequence(count: usize) -> Vec<GreetingItem> {
        (0..count).map(|i| Self::new(i.to_string())).collect()
    }

    pub fn from_names<I, S>(names: I) -> Vec<GreetingItem>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::new).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowState {
    pub expanded: bool,
}

/// Row states keyed by item identity.
///
/// Rows that were never toggled have no entry and read as collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStates {
    rows: HashMap<String, RowState>,
}

impl RowStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> RowState {
        self.rows.get(id).copied().unwrap_or_default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.get(id).expanded
    }

    /// Flip one row and return its new `expanded` value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let row = self.rows.entry(id.to_string()).or_default();
        row.expanded = !row.expanded;
        debug!("row {} expanded={}", id, row.expanded);
        row.expanded
    }

    /// Ids of expanded rows, in no particular order.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(|(_, row)| row.expanded)
            .map(|(id, _)| id.as_str())
    }
}
