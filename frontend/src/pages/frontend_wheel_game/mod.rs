mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;
use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::shared_wheel_game::WheelGame;
use shared::spin_rng::RandomSpins;
use shared::wheel_view::WheelIntent;
use crate::config::load_wheel_config;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{BetControls, PayoutTable, ResultDisplay, SpinButton};

#[function_component(FrontendWheelGame)]
pub fn frontend_wheel_game() -> Html {
    // One controller for the life of the page; every mutation goes through it
    let game = use_mut_ref(|| {
        WheelGame::new(load_wheel_config()).unwrap_or_else(|e| {
            log::warn!("Rejected wheel config, using defaults: {}", e);
            WheelGame::default()
        })
    });
    let spins = use_mut_ref(|| RandomSpins::new(SmallRng::from_entropy()));
    let view = use_state(|| game.borrow().view());

    let send = {
        let game = game.clone();
        let spins = spins.clone();
        let view = view.clone();

        Callback::from(move |intent: WheelIntent| {
            let pending = game
                .borrow_mut()
                .dispatch(intent, &mut *spins.borrow_mut());
            view.set(game.borrow().view());

            // Resolution runs once on the same event loop after the wheel stops.
            // There is no way to cancel it.
            if let Some(pending) = pending {
                let game = game.clone();
                let view = view.clone();
                Timeout::new(pending.resolve_after_ms(), move || {
                    if game.borrow_mut().complete_spin(pending).is_none() {
                        log::warn!("Spin timer fired with no spin in flight");
                    }
                    view.set(game.borrow().view());
                })
                .forget();
            }
        })
    };

    let on_decrement = send.reform(|_: MouseEvent| WheelIntent::DecrementBet);
    let on_increment = send.reform(|_: MouseEvent| WheelIntent::IncrementBet);
    let on_spin = send.reform(|_: MouseEvent| WheelIntent::Spin);

    let (segments, spin_duration_ms) = {
        let game = game.borrow();
        (game.config().segments.clone(), game.config().spin_duration_ms)
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class={styles::TITLE}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Spin the Wheel"}</span>
            </h1>

            <div class="relative mx-auto mb-8 flex justify-center items-center">
                <div class="w-full max-w-[450px] mx-auto">
                    <WheelCanvas
                        segments={segments.clone()}
                        rotation={view.rotation_angle}
                        spin_duration_ms={spin_duration_ms}
                        is_spinning={view.is_spinning}
                    />
                </div>
            </div>

            <div class={styles::CONTROLS_CARD}>
                <BetControls
                    bet={view.bet}
                    can_decrement={view.controls.can_decrement}
                    can_increment={view.controls.can_increment}
                    on_decrement={on_decrement}
                    on_increment={on_increment}
                />

                <div class="text-xl mb-4 text-center">
                    {"Balance: $"}{view.balance_text()}
                </div>

                <SpinButton
                    label={view.spin_label()}
                    is_spinning={view.is_spinning}
                    disabled={!view.controls.can_spin}
                    onclick={on_spin}
                />

                <ResultDisplay message={view.last_result.clone()} />

                <PayoutTable segments={segments} landed={view.landed_segment} />
            </div>
        </div>
    }
}
