use serde::{Serialize, Deserialize};
use log::{debug, info, warn};

use crate::constants::DEGREES_PER_TURN;
use crate::spin_rng::{SpinDraw, SpinSource};
use crate::wheel_config::{WheelConfig, WheelConfigError};

/// Everything the screen renders from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameState {
    pub bet: i32,
    pub balance: f64,
    pub is_spinning: bool,
    pub rotation_angle: f64, // Cumulative, never reset
    pub last_result: Option<String>,
    pub last_outcome: Option<SpinOutcome>,
}

/// Where a resolved spin landed and what it paid
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub segment_index: usize,
    pub segment_label: String,
    pub multiplier: f64,
    pub bet: i32,
    pub winnings: f64,
}

/// A spin that has been paid for but not yet resolved.
///
/// Only `WheelGame::start_spin` hands these out and `complete_spin` consumes
/// one by value, so each spin resolves at most once.
#[derive(Debug, PartialEq)]
#[must_use = "a pending spin must be completed once its delay elapses"]
pub struct PendingSpin {
    bet: i32,
    draw: SpinDraw,
    resolve_after_ms: u32,
}

impl PendingSpin {
    pub fn bet(&self) -> i32 {
        self.bet
    }

    pub fn draw(&self) -> SpinDraw {
        self.draw
    }

    pub fn rotation_delta(&self) -> f64 {
        self.draw.rotation_delta()
    }

    /// Delay before `complete_spin` should run, matching the wheel animation.
    pub fn resolve_after_ms(&self) -> u32 {
        self.resolve_after_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejection {
    AlreadySpinning,
    InsufficientBalance,
}

impl GameState {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            bet: config.initial_bet,
            balance: config.initial_balance,
            is_spinning: false,
            rotation_angle: 0.0,
            last_result: None,
            last_outcome: None,
        }
    }
}

/// Index of the segment a spin lands on, from that spin's rotation alone.
pub fn segment_index(rotation_delta: f64, segment_count: usize) -> usize {
    let width = DEGREES_PER_TURN / segment_count as f64;
    let index = (rotation_delta.rem_euclid(DEGREES_PER_TURN) / width).floor() as usize;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    index.min(segment_count - 1)
}

pub fn winnings(bet: i32, multiplier: f64) -> f64 {
    bet as f64 * multiplier
}

/// Two decimal places, ties rounded away from zero.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

pub fn result_message(winnings: f64) -> String {
    format!("Won ${}!", format_money(winnings))
}

/// The spin game controller: owns the configuration and the one mutable
/// `GameState`, and is the only place that state changes.
#[derive(Debug, Clone)]
pub struct WheelGame {
    config: WheelConfig,
    state: GameState,
}

impl Default for WheelGame {
    fn default() -> Self {
        let config = WheelConfig::default();
        let state = GameState::new(&config);
        Self { config, state }
    }
}

impl WheelGame {
    /// Rejects configs that would leave the wheel unspinnable, such as an
    /// empty segment table or an inverted turn range.
    pub fn new(config: WheelConfig) -> Result<Self, WheelConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Saturates at the configured bounds instead of rejecting. No effect
    /// while a spin is in flight.
    pub fn adjust_bet(&mut self, delta: i32) {
        if self.state.is_spinning {
            debug!("Bet change by {} ignored: spin in flight", delta);
            return;
        }
        let old_bet = self.state.bet;
        self.state.bet = old_bet
            .saturating_add(delta)
            .clamp(self.config.min_bet, self.config.max_bet);
        debug!("Bet adjusted by {}: {} -> {}", delta, old_bet, self.state.bet);
    }

    pub fn check_spin(&self) -> Result<(), SpinRejection> {
        if self.state.is_spinning {
            Err(SpinRejection::AlreadySpinning)
        } else if self.state.bet as f64 > self.state.balance {
            Err(SpinRejection::InsufficientBalance)
        } else {
            Ok(())
        }
    }

    pub fn can_spin(&self) -> bool {
        self.check_spin().is_ok()
    }

    /// Starts a spin with a draw from `source`. Returns `None`, leaving the
    /// state untouched and the source undrawn, when a spin is in flight or
    /// the bet exceeds the balance.
    pub fn start_spin<S: SpinSource + ?Sized>(&mut self, source: &mut S) -> Option<PendingSpin> {
        if let Err(reason) = self.check_spin() {
            debug!("Spin refused: {:?}", reason);
            return None;
        }
        let draw = source.next_draw(&self.config);
        self.start_spin_with(draw)
    }

    /// Same as `start_spin` with an explicit draw.
    pub fn start_spin_with(&mut self, draw: SpinDraw) -> Option<PendingSpin> {
        if let Err(reason) = self.check_spin() {
            debug!("Spin refused: {:?}", reason);
            return None;
        }

        let bet = self.state.bet;
        self.state.is_spinning = true;
        self.state.last_result = None;
        self.state.last_outcome = None;
        self.state.balance -= bet as f64;
        self.state.rotation_angle += draw.rotation_delta();

        info!(
            "Spin started: bet {} ({} turns + {:.2} deg), angle now {:.2}",
            bet, draw.full_turns, draw.extra_degrees, self.state.rotation_angle
        );

        Some(PendingSpin {
            bet,
            draw,
            resolve_after_ms: self.config.spin_duration_ms,
        })
    }

    /// Pays out a pending spin. A spin resolves against the bet captured when
    /// it started, not the current one.
    pub fn complete_spin(&mut self, pending: PendingSpin) -> Option<SpinOutcome> {
        if !self.state.is_spinning {
            warn!("Ignoring spin completion with no spin in flight");
            return None;
        }

        let outcome = self.outcome_for(pending.bet, pending.rotation_delta());
        self.state.balance += outcome.winnings;
        self.state.last_result = Some(result_message(outcome.winnings));
        self.state.last_outcome = Some(outcome.clone());
        self.state.is_spinning = false;

        info!(
            "Spin landed on {} (x{}): won {}, balance {}",
            outcome.segment_label,
            outcome.multiplier,
            format_money(outcome.winnings),
            format_money(self.state.balance)
        );

        Some(outcome)
    }

    /// Pure mapping from a bet and rotation to the payout.
    pub fn outcome_for(&self, bet: i32, rotation_delta: f64) -> SpinOutcome {
        let index = segment_index(rotation_delta, self.config.segment_count());
        let segment = &self.config.segments[index];
        SpinOutcome {
            segment_index: index,
            segment_label: segment.label.clone(),
            multiplier: segment.multiplier,
            bet,
            winnings: winnings(bet, segment.multiplier),
        }
    }
}
