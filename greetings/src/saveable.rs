//! State that survives UI re-creation.
//!
//! Before the UI is torn down (terminal resize, explicit recreate) every
//! component writes its durable state into a [`SavedState`] under stable
//! keys. The rebuilt UI reads it back before its first paint. Values are
//! serialized with bincode so a snapshot can be carried as plain bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::SnapshotError;

/// Keyed snapshot of serialized component state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    entries: BTreeMap<String, Vec<u8>>,
}

impl SavedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the value stored under `key`, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SnapshotError> {
        match self.entries.get(key) {
            Some(bytes) => bincode::deserialize(bytes)
                .map(Some)
                .map_err(|source| SnapshotError::Decode {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Like [`get`](Self::get), with a default for absent keys.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SnapshotError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), SnapshotError> {
        let bytes = bincode::serialize(value).map_err(|source| SnapshotError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.entries.insert(key.to_string(), bytes);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Corrupt)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Corrupt)
    }
}

/// A component whose state must survive UI re-creation.
pub trait Saveable {
    /// Write durable state into `saved`.
    fn save(&self, saved: &mut SavedState) -> Result<(), SnapshotError>;

    /// Replace current state with whatever `saved` holds. Missing keys keep
    /// the initial values.
    fn restore(&mut self, saved: &SavedState) -> Result<(), SnapshotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_round_trip_through_bytes() {
        let mut saved = SavedState::new();
        saved.set("flag", &true).unwrap();
        saved.set("anchor", &(7usize, 2u16)).unwrap();

        let restored = SavedState::from_bytes(&saved.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.get::<bool>("flag").unwrap(), Some(true));
        assert_eq!(restored.get::<(usize, u16)>("anchor").unwrap(), Some((7, 2)));
        assert_eq!(restored.get::<bool>("absent").unwrap(), None);
        assert!(restored.get_or("absent", false).is_ok_and(|v| !v));
    }

    #[test]
    fn wrong_type_is_a_decode_error() {
        let mut saved = SavedState::new();
        saved.set("flag", &true).unwrap();
        let err = saved.get::<String>("flag").unwrap_err();
        assert!(matches!(err, SnapshotError::Decode { ref key, .. } if key == "flag"));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            SavedState::from_bytes(&[0xff, 0xff, 0xff]),
            Err(SnapshotError::Corrupt(_))
        ));
    }
}
