//! # Button Configuration
//!
//! Per-instance settings plus the preset book they are drawn from.
//!
//! ## Preset file
//!
//! ```toml
//! [presets.snappy]
//! text_fade_out = 200
//! icon_center = 250
//!
//! [sizes.medium]
//! height = 64.0
//! min_width = 220.0
//! compact_width = 54.0
//! icon_size = 32.0
//! icon_left = 20.0
//! text_left = 68.0
//! font_size = 18.0
//! ```
//!
//! Keys omitted from a preset keep their `showcase` values. Size tables must
//! be complete and are checked against the geometry invariants on load.

use crate::error::{ConfigError, ConfigResult};
use crate::size::{SizeKind, SizeProfile};
use crate::timing::PhaseTiming;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the default timing preset.
pub const SHOWCASE_PRESET: &str = "showcase";

/// Name of the all-zero timing preset.
pub const INSTANT_PRESET: &str = "instant";

/// Everything one button instance is configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    /// Label shown at rest.
    pub label: String,
    /// Label shown once the run completes.
    pub success_label: String,
    /// Size variant.
    pub size: SizeKind,
    /// Geometry for `size`.
    pub profile: SizeProfile,
    /// Timing table.
    pub timing: PhaseTiming,
    /// Whether the status icon is rendered (and its phases run).
    pub show_icon: bool,
    /// Host accessibility preference; collapses the run to its end state.
    pub reduced_motion: bool,
    /// Render the terminal state regardless of local phase.
    pub forced_success: bool,
}

impl ButtonConfig {
    /// Sets both labels.
    #[must_use]
    pub fn with_labels(
        mut self,
        label: impl Into<String>,
        success_label: impl Into<String>,
    ) -> Self {
        self.label = label.into();
        self.success_label = success_label.into();
        self
    }

    /// Uses the built-in geometry of `size`.
    #[must_use]
    pub fn with_size(mut self, size: SizeKind) -> Self {
        self.size = size;
        self.profile = size.profile();
        self
    }

    /// Uses custom geometry for `size`.
    #[must_use]
    pub fn with_profile(mut self, size: SizeKind, profile: SizeProfile) -> Self {
        self.size = size;
        self.profile = profile;
        self
    }

    /// Replaces the timing table.
    #[must_use]
    pub fn with_timing(mut self, timing: PhaseTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Shows or hides the status icon.
    #[must_use]
    pub fn with_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// Sets the reduced-motion preference.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Forces the terminal state on or off.
    #[must_use]
    pub fn with_forced_success(mut self, forced_success: bool) -> Self {
        self.forced_success = forced_success;
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: "Book a flight".to_string(),
            success_label: "Flight booked".to_string(),
            size: SizeKind::Medium,
            profile: SizeProfile::MEDIUM,
            timing: PhaseTiming::showcase(),
            show_icon: true,
            reduced_motion: false,
            forced_success: false,
        }
    }
}

/// On-disk shape of a preset document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetFile {
    #[serde(default)]
    presets: BTreeMap<String, PhaseTiming>,
    #[serde(default)]
    sizes: BTreeMap<String, SizeProfile>,
}

/// Named timing presets and size profiles.
///
/// Divergent timing tables for the same button are kept here as named
/// presets of the one sequencer rather than as separate machines.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetBook {
    timings: BTreeMap<String, PhaseTiming>,
    sizes: BTreeMap<SizeKind, SizeProfile>,
}

impl PresetBook {
    /// Built-in presets only.
    #[must_use]
    pub fn builtin() -> Self {
        let timings = BTreeMap::from([
            (SHOWCASE_PRESET.to_string(), PhaseTiming::showcase()),
            (INSTANT_PRESET.to_string(), PhaseTiming::instant()),
        ]);
        let sizes = SizeKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.profile()))
            .collect();
        Self { timings, sizes }
    }

    /// Built-ins merged with a TOML document. Entries in the document win.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML,
    /// [`ConfigError::UnknownSize`] for a size table not named
    /// small/medium/large, and the validation errors of
    /// [`PhaseTiming::validate`] and [`SizeProfile::validate`].
    pub fn from_toml_str(doc: &str) -> ConfigResult<Self> {
        let file: PresetFile =
            toml::from_str(doc).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut book = Self::builtin();
        for (name, timing) in file.presets {
            timing.validate(&name)?;
            tracing::debug!("Loaded timing preset {name}");
            book.timings.insert(name, timing);
        }
        for (name, profile) in file.sizes {
            let kind: SizeKind = name.parse()?;
            profile.validate(kind)?;
            tracing::debug!("Loaded size profile override for {kind}");
            book.sizes.insert(kind, profile);
        }

        Ok(book)
    }

    /// Reads and merges a TOML preset file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`PresetBook::from_toml_str`].
    pub fn from_toml_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let doc = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&doc)
    }

    /// Looks up a timing preset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if no preset has that name.
    pub fn timing(&self, name: &str) -> ConfigResult<PhaseTiming> {
        self.timings
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Geometry for `size`, including any override.
    #[must_use]
    pub fn profile(&self, size: SizeKind) -> SizeProfile {
        self.sizes.get(&size).copied().unwrap_or_else(|| size.profile())
    }

    /// Preset names in sorted order.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.timings.keys().map(String::as_str)
    }

    /// A default button using `preset` timing at `size`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] if no preset has that name.
    pub fn button(&self, preset: &str, size: SizeKind) -> ConfigResult<ButtonConfig> {
        Ok(ButtonConfig::default()
            .with_profile(size, self.profile(size))
            .with_timing(self.timing(preset)?))
    }
}

impl Default for PresetBook {
    fn default() -> Self {
        Self::builtin()
    }
}
