/// Nominal per-frame timestep. Frame-count based, not wall-clock based.
pub const FRAME_STEP: f64 = 1.0 / 60.0;
/// Background drift added every frame regardless of motion.
pub const DRIFT_STEP: f64 = 0.001;
/// Divisor turning speed into per-frame travel.
pub const TRAVEL_DIVISOR: f64 = 50.0;

/// Accumulated visual time of the water surface.
///
/// `time` advances unconditionally each frame; `travel` advances only while
/// moving, proportionally to speed. Both only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub time: f64,
    pub travel: f64,
}

impl ScrollOffset {
    /// Advance by one frame. `speed` is `Some` only while moving.
    pub fn advance(&mut self, speed: Option<f32>) {
        self.time += FRAME_STEP;
        self.time += DRIFT_STEP;
        if let Some(speed) = speed {
            self.travel += f64::from(speed) / TRAVEL_DIVISOR;
        }
    }

    /// Total offset: time plus travel.
    pub fn total(&self) -> f64 {
        self.time + self.travel
    }
}
