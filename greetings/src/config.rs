//! Runtime configuration.

use std::time::Duration;

use tuidom::SpringSpec;

use crate::theme::Theme;

/// Default number of generated greeting rows.
pub const DEFAULT_ITEM_COUNT: usize = 1000;

/// Extra bottom padding of an expanded row, in distance units.
pub const DEFAULT_EXPANDED_PADDING: f32 = 48.0;

/// Configuration for one app run.
///
/// Built with `Default` plus the builder methods below; there is no file or
/// flag parsing.
#[derive(Debug, Clone)]
pub struct GreetingsConfig {
    /// How many rows to generate ("0".."N-1").
    pub item_count: usize,

    /// Padding target for an expanded row, in distance units (dp).
    pub expanded_padding: f32,

    /// Distance units per terminal line.
    pub dp_per_line: f32,

    /// Spring driving the expand/collapse padding.
    pub spring: SpringSpec,

    /// Skip animations; springs jump to their target.
    pub reduced_motion: bool,

    /// Frame pacing while an animation is running.
    pub frame_interval: Duration,

    /// Locale used to resolve strings, falling back to `en`.
    pub locale: String,

    pub theme: Theme,
}

impl Default for GreetingsConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            expanded_padding: DEFAULT_EXPANDED_PADDING,
            dp_per_line: 16.0,
            spring: SpringSpec::new(SpringSpec::DAMPING_MEDIUM_BOUNCY, SpringSpec::STIFFNESS_LOW),
            reduced_motion: false,
            frame_interval: Duration::from_millis(16),
            locale: "en".to_string(),
            theme: Theme::dark(),
        }
    }
}

impl GreetingsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    pub fn expanded_padding(mut self, dp: f32) -> Self {
        self.expanded_padding = dp.max(0.0);
        self
    }

    pub fn dp_per_line(mut self, dp: f32) -> Self {
        self.dp_per_line = dp.max(1.0);
        self
    }

    pub fn spring(mut self, spec: SpringSpec) -> Self {
        self.spring = spec;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GreetingsConfig::default();
        assert_eq!(config.item_count, 1000);
        assert_eq!(config.expanded_padding, 48.0);
        assert_eq!(config.spring.damping_ratio, 0.5);
        assert_eq!(config.spring.stiffness, 200.0);
        assert!(!config.reduced_motion);
    }
}
