use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::constants::DEGREES_PER_TURN;
use crate::wheel_config::WheelConfig;

/// The two random values behind one spin
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinDraw {
    pub full_turns: u32,
    pub extra_degrees: f64, // in [0, 360)
}

impl SpinDraw {
    pub fn new(full_turns: u32, extra_degrees: f64) -> Self {
        Self { full_turns, extra_degrees }
    }

    /// Total rotation this spin adds to the wheel, in degrees.
    pub fn rotation_delta(&self) -> f64 {
        self.full_turns as f64 * DEGREES_PER_TURN + self.extra_degrees
    }
}

/// Source of spin draws. The controller only ever talks to this trait so
/// outcome logic can be exercised without real entropy.
pub trait SpinSource {
    fn next_draw(&mut self, config: &WheelConfig) -> SpinDraw;
}

/// Uniform draws from any `rand` generator.
pub struct RandomSpins<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSpins<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSpins<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SpinSource for RandomSpins<R> {
    fn next_draw(&mut self, config: &WheelConfig) -> SpinDraw {
        let full_turns = self
            .rng
            .gen_range(config.min_full_turns..=config.max_full_turns);
        let extra_degrees = self.rng.gen_range(0.0..DEGREES_PER_TURN);
        SpinDraw { full_turns, extra_degrees }
    }
}

/// Replays a fixed list of draws, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct FixedSpins {
    draws: Vec<SpinDraw>,
    next: usize,
}

impl FixedSpins {
    pub fn new(first: SpinDraw) -> Self {
        Self {
            draws: vec![first],
            next: 0,
        }
    }

    pub fn then(mut self, draw: SpinDraw) -> Self {
        self.draws.push(draw);
        self
    }
}

impl SpinSource for FixedSpins {
    fn next_draw(&mut self, _config: &WheelConfig) -> SpinDraw {
        let draw = self.draws[self.next];
        self.next = (self.next + 1) % self.draws.len();
        draw
    }
}
