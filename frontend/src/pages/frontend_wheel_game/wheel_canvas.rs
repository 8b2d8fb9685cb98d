use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use shared::wheel_config::WheelSegment;
use super::wheel_utils::multiplier_text;

const SEGMENT_COLORS: [&str; 6] = [
    "#f97316", // Orange
    "#06b6d4", // Cyan
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#22c55e", // Green
    "#eab308", // Gold
];

pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

/// Canvas arc (start, end) in radians for a segment.
///
/// Segments run counter-clockwise from the pointer at twelve o'clock, so a
/// clockwise turn of `k * width` degrees brings segment `k` under the pointer.
pub fn segment_arc(index: usize, count: usize) -> (f64, f64) {
    let width = 2.0 * PI / count as f64;
    let top = -0.5 * PI;
    (top - (index + 1) as f64 * width, top - index as f64 * width)
}

/// CSS for the rotating canvas. The transition length matches the spin delay
/// so the wheel comes to rest exactly when the payout lands.
pub fn wheel_style(rotation: f64, spin_duration_ms: u32) -> String {
    format!(
        "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99);",
        rotation, spin_duration_ms
    )
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<WheelSegment>,
    pub rotation: f64,
    pub spin_duration_ms: u32,
    pub is_spinning: bool,
}

fn draw_wheel(context: &CanvasRenderingContext2d, width: f64, height: f64, segments: &[WheelSegment]) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = if width < height { width / 2.0 - 10.0 } else { height / 2.0 - 10.0 };
    let count = segments.len();

    context.clear_rect(0.0, 0.0, width, height);

    for (index, segment) in segments.iter().enumerate() {
        let (start, end) = segment_arc(index, count);

        context.begin_path();
        context.set_fill_style_str(segment_color(index));
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(2.5);
        context.stroke();

        // Label sits along the middle of the slice
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate((start + end) / 2.0);
        let _ = context.translate(radius * 0.62, 0.0);
        let _ = context.rotate(0.5 * PI);
        context.set_fill_style_str("#ffffff");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text(&segment.label, 0.0, -10.0);
        context.set_font("bold 20px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text(&multiplier_text(segment.multiplier), 0.0, 12.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#1a1c2e");
    let _ = context.arc(center_x, center_y, radius * 0.12, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_stroke_style_str("rgba(130, 100, 255, 0.6)");
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // The slices only change with the configuration; rotation is pure CSS
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.segments.clone(), move |segments| {
            let context = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| {
                    let context = canvas.get_context("2d").ok().flatten()?;
                    let context = context.dyn_into::<CanvasRenderingContext2d>().ok()?;
                    Some((canvas, context))
                });

            match context {
                Some((canvas, context)) => draw_wheel(
                    &context,
                    canvas.width() as f64,
                    canvas.height() as f64,
                    segments,
                ),
                None => log::warn!("Wheel canvas has no 2d context"),
            }
            || ()
        });
    }

    html! {
        <div class="relative">
            // Fixed pointer at twelve o'clock
            <div class="absolute left-1/2 -translate-x-1/2 -top-2 z-10 w-0 h-0 border-l-[14px] border-r-[14px] border-t-[28px] border-l-transparent border-r-transparent border-t-yellow-400 drop-shadow-lg"></div>
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg"
                style={format!(
                    "{} {}",
                    wheel_style(props.rotation, props.spin_duration_ms),
                    if props.is_spinning {
                        "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                    } else {
                        "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                    }
                )}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_degrees(radians: f64) -> f64 {
        radians * 180.0 / PI
    }

    #[test]
    fn test_first_segment_ends_at_pointer() {
        let (start, end) = segment_arc(0, 6);
        assert!((to_degrees(end) + 90.0).abs() < 1e-9);
        assert!((to_degrees(start) + 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_segments_tile_the_circle() {
        for count in 1..8 {
            for index in 0..count - 1 {
                let (start, _) = segment_arc(index, count);
                let (_, next_end) = segment_arc(index + 1, count);
                assert!((start - next_end).abs() < 1e-9);
            }
            let (first_start, first_end) = segment_arc(0, count);
            assert!(((first_end - first_start) - 2.0 * PI / count as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_colors_cycle() {
        assert_eq!(segment_color(0), "#f97316");
        assert_eq!(segment_color(6), segment_color(0));
    }

    #[test]
    fn test_wheel_style_uses_spin_duration() {
        let style = wheel_style(1080.5, 8000);
        assert!(style.starts_with("transform: rotate(1080.5deg);"));
        assert!(style.contains("transition: transform 8000ms"));
    }
}
