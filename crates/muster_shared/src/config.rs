//! # Roster Configuration
//!
//! Loaded once at startup from a TOML file. Every field is optional in the
//! file; missing fields take the defaults from [`crate::constants`].
//!
//! ```toml
//! num_slots = 4
//! max_participants = 32
//! max_squad_members = 8
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_PARTICIPANTS, DEFAULT_MAX_SQUAD_MEMBERS, DEFAULT_NUM_SLOTS, MAX_SLOTS,
};
use crate::error::{ConfigError, ConfigResult};

/// Roster engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Number of rows in the slot table.
    pub num_slots: usize,
    /// Connection indices `0..max_participants` are scanned for participants.
    pub max_participants: usize,
    /// Registry indices `0..max_squad_members` are scanned for squad-members.
    pub max_squad_members: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            num_slots: DEFAULT_NUM_SLOTS,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            max_squad_members: DEFAULT_MAX_SQUAD_MEMBERS,
        }
    }
}

impl RosterConfig {
    /// Config with the given slot count and default enumeration bounds.
    #[must_use]
    pub fn with_slots(num_slots: usize) -> Self {
        Self {
            num_slots,
            ..Self::default()
        }
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// the validation errors of [`RosterConfig::validate`].
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`RosterConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Renders the config as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks the bounds the engine relies on.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroSlots`] if `num_slots` is 0
    /// - [`ConfigError::TooManySlots`] if `num_slots` exceeds [`MAX_SLOTS`]
    /// - [`ConfigError::ZeroBound`] if an enumeration bound is 0
    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_slots == 0 {
            return Err(ConfigError::ZeroSlots);
        }
        if self.num_slots > MAX_SLOTS {
            return Err(ConfigError::TooManySlots {
                requested: self.num_slots,
                max: MAX_SLOTS,
            });
        }
        if self.max_participants == 0 {
            return Err(ConfigError::ZeroBound { field: "max_participants" });
        }
        if self.max_squad_members == 0 {
            return Err(ConfigError::ZeroBound { field: "max_squad_members" });
        }
        Ok(())
    }
}
