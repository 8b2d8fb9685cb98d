use crate::constants::{SPINNING_LABEL, SPIN_LABEL};
use crate::shared_wheel_game::{format_money, PendingSpin, WheelGame};
use crate::spin_rng::SpinSource;

/// Which controls the screen should enable. Bet changes are also locked
/// while a spin is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub can_decrement: bool,
    pub can_increment: bool,
    pub can_spin: bool,
}

/// Read model handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct WheelView {
    pub bet: i32,
    pub balance: f64,
    pub is_spinning: bool,
    pub rotation_angle: f64,
    pub last_result: Option<String>,
    pub landed_segment: Option<usize>,
    pub controls: Controls,
}

impl WheelView {
    pub fn from_game(game: &WheelGame) -> Self {
        let state = game.state();
        let config = game.config();
        Self {
            bet: state.bet,
            balance: state.balance,
            is_spinning: state.is_spinning,
            rotation_angle: state.rotation_angle,
            last_result: state.last_result.clone(),
            landed_segment: state.last_outcome.as_ref().map(|o| o.segment_index),
            controls: Controls {
                can_decrement: !state.is_spinning && state.bet > config.min_bet,
                can_increment: !state.is_spinning && state.bet < config.max_bet,
                can_spin: game.can_spin(),
            },
        }
    }

    pub fn spin_label(&self) -> &'static str {
        if self.is_spinning {
            SPINNING_LABEL
        } else {
            SPIN_LABEL
        }
    }

    pub fn balance_text(&self) -> String {
        format_money(self.balance)
    }
}

/// The three intents the screen can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelIntent {
    DecrementBet,
    IncrementBet,
    Spin,
}

impl WheelGame {
    /// Routes a screen intent to the matching operation. Only `Spin` can
    /// produce a pending spin; bet intents are no-ops while one is in flight.
    pub fn dispatch<S: SpinSource + ?Sized>(
        &mut self,
        intent: WheelIntent,
        source: &mut S,
    ) -> Option<PendingSpin> {
        match intent {
            WheelIntent::DecrementBet => {
                self.adjust_bet(-1);
                None
            }
            WheelIntent::IncrementBet => {
                self.adjust_bet(1);
                None
            }
            WheelIntent::Spin => self.start_spin(source),
        }
    }

    pub fn view(&self) -> WheelView {
        WheelView::from_game(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin_rng::{FixedSpins, SpinDraw};
    use crate::wheel_config::WheelConfig;

    fn source() -> FixedSpins {
        FixedSpins::new(SpinDraw::new(3, 0.1))
    }

    #[test]
    fn test_initial_view() {
        let view = WheelGame::default().view();
        assert_eq!(view.bet, 1);
        assert_eq!(view.balance, 100.0);
        assert_eq!(view.balance_text(), "100.00");
        assert_eq!(view.last_result, None);
        assert_eq!(view.landed_segment, None);
        assert_eq!(
            view.controls,
            Controls { can_decrement: false, can_increment: true, can_spin: true }
        );
        assert_eq!(view.spin_label(), "SPIN!");
    }

    #[test]
    fn test_intents_route_to_bet_manager() {
        let mut game = WheelGame::default();
        let mut source = source();

        assert!(game.dispatch(WheelIntent::IncrementBet, &mut source).is_none());
        assert!(game.dispatch(WheelIntent::IncrementBet, &mut source).is_none());
        assert_eq!(game.view().bet, 3);
        assert!(game.view().controls.can_decrement);

        game.dispatch(WheelIntent::DecrementBet, &mut source);
        game.dispatch(WheelIntent::DecrementBet, &mut source);
        game.dispatch(WheelIntent::DecrementBet, &mut source);
        assert_eq!(game.view().bet, 1);
    }

    #[test]
    fn test_increment_disabled_at_max() {
        let mut game = WheelGame::default();
        game.adjust_bet(1000);
        let view = game.view();
        assert_eq!(view.bet, 100);
        assert!(!view.controls.can_increment);
        assert!(view.controls.can_decrement);
        assert!(view.controls.can_spin); // 100 <= 100
    }

    #[test]
    fn test_spin_disabled_while_spinning() {
        let mut game = WheelGame::default();
        let pending = game.dispatch(WheelIntent::Spin, &mut source()).unwrap();

        let view = game.view();
        assert!(view.is_spinning);
        assert!(!view.controls.can_spin);
        assert!(!view.controls.can_decrement);
        assert!(!view.controls.can_increment);
        assert_eq!(view.spin_label(), "Spinning...");
        assert_eq!(view.balance, 99.0);

        game.complete_spin(pending);
        let view = game.view();
        assert!(view.controls.can_spin);
        assert_eq!(view.landed_segment, Some(0));
        assert_eq!(view.last_result.as_deref(), Some("Won $2.00!"));
        assert_eq!(view.balance_text(), "101.00");
    }

    #[test]
    fn test_bet_intents_ignored_while_spinning() {
        let mut game = WheelGame::default();
        let mut source = source();
        let pending = game.dispatch(WheelIntent::Spin, &mut source).unwrap();
        let before = game.state().clone();

        assert!(game.dispatch(WheelIntent::IncrementBet, &mut source).is_none());
        assert_eq!(game.state(), &before);
        assert!(game.dispatch(WheelIntent::DecrementBet, &mut source).is_none());
        assert_eq!(game.state(), &before);

        game.complete_spin(pending);
        game.dispatch(WheelIntent::IncrementBet, &mut source);
        assert_eq!(game.view().bet, 2);
    }

    #[test]
    fn test_spin_disabled_when_bet_exceeds_balance() {
        let config = WheelConfig {
            initial_balance: 40.0,
            ..WheelConfig::default()
        };
        let mut game = WheelGame::new(config).unwrap();
        game.adjust_bet(49);

        let view = game.view();
        assert_eq!(view.bet, 50);
        assert!(!view.is_spinning);
        assert!(!view.controls.can_spin);
        assert!(game.dispatch(WheelIntent::Spin, &mut source()).is_none());
        assert_eq!(game.view(), view);
    }

    #[test]
    fn test_all_in_spin_reenables_after_payout() {
        let mut game = WheelGame::default();
        game.adjust_bet(1000);
        let pending = game.start_spin_with(SpinDraw::new(3, 65.0)).unwrap();
        assert_eq!(game.view().balance, 0.0);

        game.complete_spin(pending); // Face 2, 100 * 1.5
        let view = game.view();
        assert_eq!(view.balance, 150.0);
        assert!(view.controls.can_spin);
    }
}
