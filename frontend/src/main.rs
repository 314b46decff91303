use zoon::*;

mod app;
mod beams;
mod counter;
mod footer;
mod navbar;
mod reveal;
mod sections;
mod smooth_scroll;
mod theme;
mod widgets;

/// Tick of the frame loops driving scroll tweens, counters and the hero.
pub const FRAME_MS: u32 = 16;

fn main() {
    start_app("app", app::App::new);
}
