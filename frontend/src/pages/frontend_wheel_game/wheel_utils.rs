use yew::prelude::*;
use shared::wheel_config::WheelSegment;
use crate::styles;
use super::wheel_canvas::segment_color;

pub fn multiplier_text(multiplier: f64) -> String {
    format!("x{}", multiplier)
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub message: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="mt-4 flex justify-center">
                <div class={styles::RESULT_BANNER}>
                    <span>{message}</span>
                </div>
            </div>
        },
        None => html! {},
    }
}

// Bet stepper
#[derive(Properties, PartialEq)]
pub struct BetControlsProps {
    pub bet: i32,
    pub can_decrement: bool,
    pub can_increment: bool,
    pub on_decrement: Callback<MouseEvent>,
    pub on_increment: Callback<MouseEvent>,
}

#[function_component(BetControls)]
pub fn bet_controls(props: &BetControlsProps) -> Html {
    html! {
        <div class="flex items-center justify-center gap-4 mb-4">
            <button
                onclick={props.on_decrement.clone()}
                disabled={!props.can_decrement}
                class={classes!(styles::BET_BUTTON, "bg-red-500", "hover:bg-red-600")}
            >
                {"-"}
            </button>
            <div class="text-2xl font-bold">{format!("${}", props.bet)}</div>
            <button
                onclick={props.on_increment.clone()}
                disabled={!props.can_increment}
                class={classes!(styles::BET_BUTTON, "bg-green-500", "hover:bg-green-600")}
            >
                {"+"}
            </button>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub label: AttrValue,
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            class={classes!(styles::SPIN_BUTTON, button_class)}
        >
            <div class="flex items-center justify-center">
                <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </svg>
                <span>{props.label.clone()}</span>
            </div>
        </button>
    }
}

// Legend of every segment and what it pays
#[derive(Properties, PartialEq)]
pub struct PayoutTableProps {
    pub segments: Vec<WheelSegment>,
    pub landed: Option<usize>,
}

#[function_component(PayoutTable)]
pub fn payout_table(props: &PayoutTableProps) -> Html {
    html! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-3 mt-6">
            { for props.segments.iter().enumerate().map(|(index, segment)| {
                let highlight = if props.landed == Some(index) {
                    "ring-2 ring-yellow-400"
                } else {
                    ""
                };
                html! {
                    <div key={segment.id} class={classes!(styles::PAYOUT_ROW, highlight)}>
                        <div class="w-4 h-4 rounded-full mr-3 flex-shrink-0"
                            style={format!("background-color: {}", segment_color(index))}></div>
                        <div class="text-left">
                            <div class="font-medium">{&segment.label}</div>
                            <div class="text-xs text-purple-200">{multiplier_text(segment.multiplier)}</div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_text() {
        assert_eq!(multiplier_text(2.0), "x2");
        assert_eq!(multiplier_text(1.5), "x1.5");
        assert_eq!(multiplier_text(1.8), "x1.8");
    }
}
