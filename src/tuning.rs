//! Game balance parameters
//!
//! Persisted separately from the high score in LocalStorage, so tweaks
//! survive a reload. Defaults reproduce the classic feel.

use serde::{Deserialize, Serialize};

/// Tunable simulation constants. World and hitbox geometry are fixed in
/// `consts`; everything that shapes difficulty lives here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity set by a flap (negative is upward)
    pub flap_impulse: f32,
    /// Horizontal pipe speed per tick
    pub pipe_speed: f32,
    /// Vertical opening between a pipe's segments
    pub pipe_gap: f32,
    /// Lower bound for the top segment height
    pub pipe_min_top: f32,
    /// Random range added to the top segment height
    pub pipe_top_range: f32,
    /// Wall-clock period between pipe spawns (ms)
    pub pipe_interval_ms: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.3,
            flap_impulse: -8.0,
            pipe_speed: 2.0,
            pipe_gap: 300.0,
            pipe_min_top: 50.0,
            pipe_top_range: 300.0,
            pipe_interval_ms: 2000,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "flavicon_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.gravity, tuning.gravity);
        assert_eq!(back.pipe_interval_ms, 2000);
    }
}
