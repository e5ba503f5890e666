//! Greeting cards sample: an onboarding screen followed by a long list of
//! expandable greeting cards, drawn in the terminal with `tuidom`.

pub mod config;
pub mod error;
pub mod paths;
pub mod resources;
pub mod runtime;
pub mod saveable;
pub mod state;
pub mod theme;
pub mod ui;

pub use config::GreetingsConfig;
pub use error::{GreetingsError, ResourceError, SnapshotError};
pub use resources::{Icon, IconSet, Resources, StringKey, StringTable};
pub use runtime::Runtime;
pub use saveable::{Saveable, SavedState};
pub use state::{AppState, GreetingItem, RowState, RowStates, Screen};
pub use theme::{TextRole, Theme};
pub use ui::{AppEnv, AppShell, GreetingList, OnboardingScreen, Target};
