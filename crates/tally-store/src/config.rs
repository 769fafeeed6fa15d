//! Store configuration.

/// Configuration for a [`SharedStore`](crate::SharedStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of keys the map is pre-sized for.
    pub initial_capacity: usize,
    /// Label attached to every log event the store emits.
    pub name: String,
}

impl StoreConfig {
    /// Default configuration with a custom label.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style capacity override.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            name: "tally".to_string(),
        }
    }
}
