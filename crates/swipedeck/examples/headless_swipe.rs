//! Headless swipe demo
//!
//! Drives a small deck with scripted gestures and prints what a host would
//! paint after each one. Set `RUST_LOG=swipedeck=trace` for more detail.
//!
//! Run with: cargo run -p swipedeck --example headless_swipe

use anyhow::Result;
use std::time::Duration;
use swipedeck::{renderer, Bounce, CardRole, Composition, Deck, DeckConfig};
use swipedeck_animation::AnimationScheduler;
use swipedeck_core::{GestureEvent, GestureSample};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

const CONFIG: &str = r#"
viewport_width = 390.0
swipe_threshold_ratio = 0.4
exit_duration_ms = 250
exit_easing = "ease_out"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swipedeck=debug")),
        )
        .init();

    let config = DeckConfig::from_toml_str(CONFIG)?;
    let width = config.viewport_width;
    let scheduler = AnimationScheduler::new();

    let mut deck = Deck::new(
        ["Ada", "Grace", "Linus", "Barbara"],
        config,
        &scheduler.handle(),
    )?
    .on_swipe_left(|name| println!("  <- passed on {name}"))
    .on_swipe_right(|name| println!("  -> liked {name}"));

    let mut bounce = Bounce::new(&scheduler.handle());
    bounce.mount();

    let script = [0.6 * width, 0.15 * width, -0.9 * width, 0.45 * width, -width];
    for dx in script {
        println!("drag {dx:+.0}px");
        drag(&mut deck, dx);
        run_until_idle(&scheduler);
        print_stack(&deck);
    }

    println!("bounce settled at {:?}", bounce.layout());
    Ok(())
}

fn drag(deck: &mut Deck<&'static str>, dx: f32) {
    deck.handle_event(GestureEvent::Start);
    for step in 1..=5 {
        let partial = dx * step as f32 / 5.0;
        deck.handle_event(GestureEvent::Move(GestureSample::horizontal(partial)));
    }
    let outcome = deck.handle_event(GestureEvent::Release(GestureSample::horizontal(dx)));
    println!("  release: {outcome:?}");
}

fn run_until_idle(scheduler: &AnimationScheduler) {
    let mut frames = 0;
    while scheduler.has_active_animations() && frames < 600 {
        scheduler.tick_by(FRAME);
        frames += 1;
    }
}

fn print_stack(deck: &Deck<&'static str>) {
    let mut render = renderer(|name: &&'static str| name.to_string(), || "no more cards".to_string());
    match deck.compose(&mut render) {
        Composition::Exhausted(view) => println!("  [{view}]"),
        Composition::Stack(layers) => {
            for layer in layers {
                let marker = match layer.role {
                    CardRole::Active { style } => format!(
                        "active at {:.0},{:.0} tilted {:.1}deg",
                        style.offset.x,
                        style.offset.y,
                        style.rotation.as_degrees()
                    ),
                    CardRole::Queued => "queued".to_string(),
                };
                println!("  z={:>2} {:<8} {marker}", layer.z_index, layer.visual);
            }
        }
    }
}
