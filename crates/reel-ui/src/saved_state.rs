//! Scroll offset persistence across host teardown and recreation.

use rustc_hash::FxHashMap;

/// Key the scroll offset is stored under.
pub const CURRENT_X_KEY: &str = "reel.current_x";

/// Host-owned key/value store the list writes its state into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateBundle {
    values: FxHashMap<String, i64>,
}

impl StateBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i64) {
        self.values.insert(key.into(), value);
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    MissingKey { key: &'static str },
    OutOfRange { key: &'static str, value: i64 },
}

impl std::fmt::Display for RestoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestoreError::MissingKey { key } => write!(f, "saved list state has no `{key}`"),
            RestoreError::OutOfRange { key, value } => {
                write!(f, "saved `{key}` value {value} is not a valid scroll offset")
            }
        }
    }
}

impl std::error::Error for RestoreError {}

/// Persisted list state: the committed scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SavedListState {
    pub current_x: i32,
}

impl SavedListState {
    pub fn write_to(&self, bundle: &mut StateBundle) {
        bundle.put_int(CURRENT_X_KEY, i64::from(self.current_x));
    }

    pub fn read_from(bundle: &StateBundle) -> Result<Self, RestoreError> {
        let value = bundle
            .get_int(CURRENT_X_KEY)
            .ok_or(RestoreError::MissingKey { key: CURRENT_X_KEY })?;
        let current_x = i32::try_from(value)
            .ok()
            .filter(|x| *x >= 0)
            .ok_or(RestoreError::OutOfRange {
                key: CURRENT_X_KEY,
                value,
            })?;
        Ok(Self { current_x })
    }
}
