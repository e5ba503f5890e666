//! Screens and the shell that switches between them.
//!
//! Rendering is immediate mode: every frame the shell repaints into a
//! `tuidom::Buffer` and records clickable regions in a [`HitMap`]; the
//! terminal then writes only the cells that changed.

mod list;
mod onboarding;
mod row;
mod shell;

pub use list::{GreetingList, ScrollAnchor};
pub use onboarding::{CONTINUE, OnboardingScreen, WELCOME};
pub use row::{GREETING, GreetingRow, RowLayout};
pub use shell::AppShell;

use tuidom::{Buffer, HitMap};

use crate::config::GreetingsConfig;
use crate::resources::Resources;

/// Read-only collaborators shared by every screen.
#[derive(Debug, Default)]
pub struct AppEnv {
    pub config: GreetingsConfig,
    pub resources: Resources,
}

impl AppEnv {
    /// Built-in resources for the configured locale.
    pub fn new(config: GreetingsConfig) -> Self {
        let resources = Resources::new(config.locale.clone());
        Self { config, resources }
    }

    pub fn with_resources(config: GreetingsConfig, resources: Resources) -> Self {
        Self { config, resources }
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The onboarding "Continue" button.
    Continue,
    /// Body of the row at this list index.
    Row(usize),
    /// Expand/collapse control of the row at this list index.
    Toggle(usize),
}

/// Per-frame paint context.
pub(crate) struct Frame<'a> {
    pub buf: &'a mut Buffer,
    pub hits: &'a mut HitMap<Target>,
    pub env: &'a AppEnv,
}
