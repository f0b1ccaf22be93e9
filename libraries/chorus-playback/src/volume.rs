//! Output volume with perceptual scaling
//!
//! Levels are 0-100%, mapped internally to -60 dB..0 dB so equal slider
//! steps feel like equal loudness steps. The engine never touches samples;
//! it hands the resulting linear gain to the audio output.

/// Volume controller
#[derive(Debug, Clone)]
pub struct Volume {
    /// Level (0-100)
    level: u8,

    /// Mute state; the level is preserved while muted
    muted: bool,
}

impl Volume {
    /// Create a volume controller, clamping the level to 0-100
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set the level, clamping to 0-100
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Current level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute, preserving the level
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Linear gain multiplier for the audio output
    ///
    /// Zero when muted or at level 0; otherwise 10^(dB/20) with the level
    /// mapped linearly onto -60 dB..0 dB.
    pub fn gain(&self) -> f32 {
        if self.muted || self.level == 0 {
            return 0.0;
        }
        let db = (f32::from(self.level) - 100.0) * 0.6;
        10.0_f32.powf(db / 20.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(75)
    }
}
