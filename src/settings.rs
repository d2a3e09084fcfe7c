//! Background settings and preferences
//!
//! Persisted as JSON in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Triangles per disc
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 24,
            QualityPreset::High => 48,
        }
    }
}

/// Background settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tessellation quality
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Soft halo around balls and demon parts
    pub glow: bool,
    /// Floating blurred orbs behind the field
    pub backdrop_orbs: bool,
    /// Scrolling grid overlay
    pub backdrop_grid: bool,
    /// Pulsing color wash above the orbs
    pub backdrop_overlay: bool,

    // === Timing ===
    /// Milliseconds between ticks
    pub tick_interval_ms: u32,
    /// Fixed spawn seed; a fresh one per load otherwise
    pub seed: Option<u64>,

    // === Accessibility ===
    /// Draw the field but never start the tick timer
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            glow: true,
            backdrop_orbs: true,
            backdrop_grid: true,
            backdrop_overlay: true,

            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset drops the backdrop decorations
        let decorated = preset != QualityPreset::Low;
        self.backdrop_orbs = decorated;
        self.backdrop_grid = decorated;
        self.backdrop_overlay = decorated;
    }

    /// Apply a preset given by name ("low", "medium", "high")
    pub fn apply_preset_named(&mut self, name: &str) -> Option<QualityPreset> {
        let Some(preset) = QualityPreset::from_str(name) else {
            log::warn!("Unknown quality preset: {}", name);
            return None;
        };
        self.apply_preset(preset);
        log::info!("Quality set to {}", preset.as_str());
        Some(preset)
    }

    /// Whether the tick timer should run at all
    pub fn animate(&self) -> bool {
        !self.reduced_motion
    }

    /// Timer interval, never zero
    pub fn effective_tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms.max(1)
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "demon_field_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
