//! Headless simulation of a download-button session.
//!
//! Drives the widget with a manual clock through a full
//! click/load/complete cycle and prints the draw commands each frame
//! would issue. Run with:
//!
//! ```sh
//! cargo run -p loading-button --example simulate
//! ```

use std::sync::Arc;
use std::time::Duration;

use loading_button::{ButtonState, ButtonStyle, LoadingButton, MeasureSpec};
use loading_button_core::{Clock, ManualClock};
use loading_button_render::{Color, RecordingRenderer};

fn main() {
    tracing_subscriber::fmt::init();

    let clock = Arc::new(ManualClock::new());
    let style = ButtonStyle::new()
        .with_base_color(Color::from_rgb8(0, 96, 166))
        .with_overlay_color(Color::from_rgb8(0, 64, 128))
        .with_arc_color(Color::from_rgb8(255, 200, 0))
        .with_text_color(Color::WHITE)
        .with_idle_label("Download")
        .with_loading_label("We are loading");

    let mut button = LoadingButton::new(style, clock.clone() as Arc<dyn Clock>);
    let size = button.measure(MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(100.0));
    println!("measured {}x{}", size.width, size.height);

    button.redraw_requested().connect(|_| {
        tracing::info!("redraw requested");
    });

    let mut surface = RecordingRenderer::new();

    button.set_state(ButtonState::Clicked);
    button.set_state(ButtonState::Loading);

    // Ten frames at 250 ms covers one full ramp and part of the next.
    for frame in 0..10 {
        clock.advance(Duration::from_millis(250));
        if let Some(progress) = button.tick() {
            println!("frame {frame}: progress {progress:.3}");
        }
        surface.clear();
        button.render(Some(&mut surface));
        for command in surface.commands() {
            println!("  {command:?}");
        }
    }

    button.set_state(ButtonState::Completed);
    surface.clear();
    button.render(Some(&mut surface));
    println!("completed frame:");
    for command in surface.commands() {
        println!("  {command:?}");
    }
}
