pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use crate::pages::frontend_wheel_game::FrontendWheelGame;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <div class="max-w-2xl mx-auto text-center">
                <FrontendWheelGame />
            </div>
        </div>
    }
}
