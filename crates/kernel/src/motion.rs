use seascape_common::{ease_out_cubic, ease_out_quad};

/// Speed gained per accelerate action, before easing.
pub const ACCELERATION_STEP: f32 = 0.002;
/// Brake accumulator growth per brake action.
pub const BRAKE_STEP: f32 = 0.1;

/// Kinematic state of the implicit vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    pub is_moving: bool,
    /// Always within `0.0..=1.0`.
    pub speed: f32,
    /// Grows with each consecutive brake; reset by accelerate.
    pub brake_accumulator: f32,
}

/// Coarse state of the motion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    Idle,
    Moving,
}

/// Owns a [`MotionState`] and applies accelerate/brake actions to it.
///
/// Accelerating eases toward a top speed of 1.0 with shrinking marginal gains.
/// Braking decelerates harder the longer it is repeated without an
/// intervening accelerate. Once moving, the model never returns to idle, even
/// at zero speed.
#[derive(Debug, Clone, Default)]
pub struct MotionModel {
    state: MotionState,
}

impl MotionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit state. `speed` is clamped into range and the
    /// brake accumulator to non-negative; non-finite values become 0.
    pub fn with_state(mut state: MotionState) -> Self {
        state.speed = finite_or_zero(state.speed).clamp(0.0, 1.0);
        state.brake_accumulator = finite_or_zero(state.brake_accumulator).max(0.0);
        Self { state }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    pub fn is_moving(&self) -> bool {
        self.state.is_moving
    }

    pub fn phase(&self) -> MotionPhase {
        if self.state.is_moving {
            MotionPhase::Moving
        } else {
            MotionPhase::Idle
        }
    }

    /// `speed = clamp(ease_out_quad(speed + 0.002), 0, 1)`; resets the brake
    /// accumulator.
    pub fn accelerate(&mut self) {
        self.start_moving();
        self.state.brake_accumulator = 0.0;
        let before = self.state.speed;
        self.state.speed = ease_out_quad(before + ACCELERATION_STEP).clamp(0.0, 1.0);
        tracing::debug!(before, after = self.state.speed, "accelerate");
    }

    /// `accumulator += 0.1`, then `speed = max(0, speed - ease_out_cubic(accumulator))`.
    pub fn brake(&mut self) {
        self.start_moving();
        self.state.brake_accumulator += BRAKE_STEP;
        let decel = ease_out_cubic(self.state.brake_accumulator);
        let before = self.state.speed;
        self.state.speed = (before - decel).max(0.0);
        tracing::debug!(
            before,
            after = self.state.speed,
            accumulator = self.state.brake_accumulator,
            "brake"
        );
    }

    fn start_moving(&mut self) {
        if !self.state.is_moving {
            self.state.is_moving = true;
            tracing::info!("motion started");
        }
    }
}

fn finite_or_zero(x: f32) -> f32 {
    if x.is_finite() { x } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_speed(speed: f32) -> MotionModel {
        MotionModel::with_state(MotionState {
            speed,
            ..MotionState::default()
        })
    }

    #[test]
    fn starts_idle() {
        let m = MotionModel::new();
        assert_eq!(m.phase(), MotionPhase::Idle);
        assert_eq!(m.speed(), 0.0);
        assert_eq!(m.state().brake_accumulator, 0.0);
    }

    #[test]
    fn accelerate_from_rest() {
        let mut m = MotionModel::new();
        m.accelerate();
        assert_eq!(m.phase(), MotionPhase::Moving);
        assert!((m.speed() - ease_out_quad(0.002)).abs() < 1e-7);
        assert!((m.speed() - 0.003996).abs() < 1e-6);
    }

    #[test]
    fn accelerate_from_half() {
        let mut m = at_speed(0.5);
        m.accelerate();
        assert!((m.speed() - 0.751_996).abs() < 1e-5);
    }

    #[test]
    fn accelerate_never_decreases_or_overshoots() {
        for i in 0..=1000 {
            let start = i as f32 / 1000.0;
            let mut m = at_speed(start);
            m.accelerate();
            assert!(m.speed() >= start, "decreased from {start}");
            assert!(m.speed() <= 1.0, "overshot from {start}");
        }
    }

    #[test]
    fn repeated_acceleration_converges_below_one() {
        let mut m = MotionModel::new();
        let mut last = m.speed();
        for _ in 0..500 {
            m.accelerate();
            assert!(m.speed() >= last);
            assert!(m.speed() <= 1.0);
            last = m.speed();
        }
        assert!(m.speed() > 0.99);
    }

    #[test]
    fn marginal_gains_shrink_near_the_cap() {
        let mut m = at_speed(0.5);
        m.accelerate();
        let first_gain = m.speed() - 0.5;
        let before = m.speed();
        m.accelerate();
        assert!(m.speed() - before < first_gain);
    }

    #[test]
    fn brake_ramps_up() {
        let mut m = at_speed(0.3);
        let expected = [
            (0.3 - ease_out_cubic(0.1)).max(0.0),
            0.0,
            0.0,
        ];
        for (i, want) in expected.iter().enumerate() {
            m.brake();
            assert!(
                (m.speed() - want).abs() < 1e-6,
                "tick {i}: got {} want {want}",
                m.speed()
            );
        }
        assert!((m.state().brake_accumulator - 0.3).abs() < 1e-6);
    }

    #[test]
    fn brake_subtracts_eased_accumulator_each_tick() {
        let mut m = at_speed(1.0);
        let mut speed = 1.0_f32;
        for tick in 1..=3 {
            m.brake();
            speed = (speed - ease_out_cubic(tick as f32 * 0.1)).max(0.0);
            assert!((m.speed() - speed).abs() < 1e-6);
        }
    }

    #[test]
    fn brake_never_goes_negative() {
        let mut m = MotionModel::new();
        for _ in 0..50 {
            m.brake();
            assert!(m.speed() >= 0.0);
        }
        assert_eq!(m.speed(), 0.0);
    }

    #[test]
    fn brake_from_idle_starts_moving() {
        let mut m = MotionModel::new();
        m.brake();
        assert!(m.is_moving());
        assert_eq!(m.speed(), 0.0);
    }

    #[test]
    fn accelerate_resets_brake_ramp() {
        let mut m = at_speed(1.0);
        m.brake();
        m.brake();
        m.accelerate();
        assert_eq!(m.state().brake_accumulator, 0.0);

        let before = m.speed();
        m.brake();
        assert!((before - m.speed() - ease_out_cubic(0.1)).abs() < 1e-6);
    }

    #[test]
    fn moving_flag_survives_zero_speed() {
        let mut m = MotionModel::new();
        m.accelerate();
        for _ in 0..10 {
            m.brake();
        }
        assert_eq!(m.speed(), 0.0);
        assert_eq!(m.phase(), MotionPhase::Moving);
    }

    #[test]
    fn with_state_clamps_speed() {
        assert_eq!(at_speed(3.0).speed(), 1.0);
        assert_eq!(at_speed(-1.0).speed(), 0.0);
    }

    #[test]
    fn with_state_rejects_non_finite_values() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut m = MotionModel::with_state(MotionState {
                is_moving: true,
                speed: bad,
                brake_accumulator: bad,
            });
            assert_eq!(m.speed(), 0.0);
            assert_eq!(m.state().brake_accumulator, 0.0);

            m.accelerate();
            assert!((0.0..=1.0).contains(&m.speed()));
            m.brake();
            assert!((0.0..=1.0).contains(&m.speed()));
        }
    }

    #[test]
    fn with_state_floors_brake_accumulator() {
        let m = MotionModel::with_state(MotionState {
            is_moving: true,
            speed: 0.5,
            brake_accumulator: -0.4,
        });
        assert_eq!(m.state().brake_accumulator, 0.0);
        assert_eq!(m.speed(), 0.5);
    }
}
