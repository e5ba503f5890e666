//! Localized strings and icon glyphs.
//!
//! Both are opaque lookups supplied from outside the UI. A failed lookup is
//! reported as a [`ResourceError`]; the `*_or_placeholder` helpers turn it
//! into something visible on screen and log it once.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use log::warn;

use crate::error::ResourceError;

const FALLBACK_LOCALE: &str = "en";

const CARD_DESC_EN: &str = "Composem ipsum color sit lazy, padding theme elit, sed do bouncy. \
     Composem ipsum color sit lazy, padding theme elit, sed do bouncy. \
     Composem ipsum color sit lazy, padding theme elit, sed do bouncy.";

/// Keys of the localized strings the UI looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Long description shown under an expanded card.
    CardDesc,
    /// Toggle label while collapsed.
    ShowMore,
    /// Toggle label while expanded.
    ShowLess,
}

impl StringKey {
    pub const fn name(self) -> &'static str {
        match self {
            StringKey::CardDesc => "card_desc",
            StringKey::ShowMore => "show_more",
            StringKey::ShowLess => "show_less",
        }
    }
}

/// Strings for one locale.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    locale: String,
    entries: HashMap<StringKey, String>,
}

impl StringTable {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    /// The built-in English table.
    pub fn english() -> Self {
        Self::new(FALLBACK_LOCALE)
            .with(StringKey::CardDesc, CARD_DESC_EN)
            .with(StringKey::ShowMore, "Show more")
            .with(StringKey::ShowLess, "Show less")
    }

    pub fn with(mut self, key: StringKey, value: impl Into<String>) -> Self {
        self.entries.insert(key, value.into());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: StringKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }
}

/// Icon glyphs the UI can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ChevronUp,
    ChevronDown,
}

impl Icon {
    pub const fn name(self) -> &'static str {
        match self {
            Icon::ChevronUp => "chevron_up",
            Icon::ChevronDown => "chevron_down",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IconSet {
    glyphs: HashMap<Icon, char>,
}

impl IconSet {
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    pub fn with(mut self, icon: Icon, glyph: char) -> Self {
        self.glyphs.insert(icon, glyph);
        self
    }

    pub fn get(&self, icon: Icon) -> Option<char> {
        self.glyphs.get(&icon).copied()
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::empty()
            .with(Icon::ChevronUp, '▲')
            .with(Icon::ChevronDown, '▼')
    }
}

/// Locale-resolved strings plus icons.
#[derive(Debug)]
pub struct Resources {
    locale: String,
    tables: Vec<StringTable>,
    icons: IconSet,
    reported: RefCell<HashSet<&'static str>>,
}

impl Resources {
    /// Built-in tables and icons, resolving for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            tables: vec![StringTable::english()],
            icons: IconSet::default(),
            reported: RefCell::new(HashSet::new()),
        }
    }

    /// No tables and no icons; every lookup fails.
    pub fn empty(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            tables: Vec::new(),
            icons: IconSet::empty(),
            reported: RefCell::new(HashSet::new()),
        }
    }

    /// Add a table, replacing any table for the same locale.
    pub fn with_table(mut self, table: StringTable) -> Self {
        self.tables.retain(|t| t.locale() != table.locale());
        self.tables.push(table);
        self
    }

    pub fn with_icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn table(&self, locale: &str) -> Option<&StringTable> {
        self.tables.iter().find(|t| t.locale() == locale)
    }

    /// Look `key` up in the active locale, then in the fallback locale.
    pub fn string(&self, key: StringKey) -> Result<&str, ResourceError> {
        self.table(&self.locale)
            .and_then(|t| t.get(key))
            .or_else(|| self.table(FALLBACK_LOCALE).and_then(|t| t.get(key)))
            .ok_or_else(|| ResourceError::MissingString {
                key: key.name(),
                locale: self.locale.clone(),
            })
    }

    pub fn icon(&self, icon: Icon) -> Result<char, ResourceError> {
        self.icons
            .get(icon)
            .ok_or(ResourceError::MissingIcon(icon.name()))
    }

    /// The string, or `<missing:key>` if it cannot be resolved.
    pub fn string_or_placeholder(&self, key: StringKey) -> Cow<'_, str> {
        match self.string(key) {
            Ok(s) => Cow::Borrowed(s),
            Err(err) => {
                self.report(key.name(), &err);
                Cow::Owned(format!("<missing:{}>", key.name()))
            }
        }
    }

    /// The glyph, or `?` if it cannot be resolved.
    pub fn icon_or_placeholder(&self, icon: Icon) -> char {
        self.icon(icon).unwrap_or_else(|err| {
            self.report(icon.name(), &err);
            '?'
        })
    }

    fn report(&self, name: &'static str, err: &ResourceError) {
        if self.reported.borrow_mut().insert(name) {
            warn!("{}", err);
        }
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}
