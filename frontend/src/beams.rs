//! The hero's background: a radial glow with drifting light beams.

use crate::FRAME_MS;
use capable_site::beams::{BeamField, LiveBeam, SpawnSchedule, entropy_rng, initial_spawn_offsets};
use capable_site::config::BeamConfig;
use zoon::*;

const BEAM_GRADIENT: &str =
    "linear-gradient(90deg, transparent, rgba(99, 102, 241, 0.8), rgba(147, 51, 234, 0.6), transparent)";

/// Spawns and retires beams on the frame loop and publishes the elapsed
/// time on `clock` for everything else in the hero that moves.
async fn run_beams(config: BeamConfig, beams: MutableVec<LiveBeam>, clock: Mutable<f64>) {
    let mut rng = entropy_rng();
    let mut field = BeamField::new();
    let mut initial = initial_spawn_offsets(config.initial_count, config.initial_stagger_ms)
        .map(|offset| offset as f64)
        .peekable();
    let mut schedule = SpawnSchedule::new(config.spawn_interval_ms);
    let started = js_sys::Date::now();

    loop {
        let elapsed = js_sys::Date::now() - started;
        let mut spawned = 0;
        while initial.next_if(|offset| *offset <= elapsed).is_some() {
            field.spawn(elapsed, &mut rng);
            spawned += 1;
        }
        if schedule.is_due(elapsed) {
            field.spawn(elapsed, &mut rng);
            spawned += 1;
        }
        let expired = field.expire(elapsed);
        if spawned > 0 || !expired.is_empty() {
            let mut beams = beams.lock_mut();
            beams.retain(|beam| !expired.contains(&beam.id));
            let live = field.live();
            for beam in &live[live.len() - spawned..] {
                beams.push_cloned(*beam);
            }
        }
        clock.set(elapsed);
        Timer::sleep(FRAME_MS).await;
    }
}

pub fn beam_layer(config: BeamConfig, clock: Mutable<f64>) -> impl Element {
    let beams = MutableVec::new();
    let beams_task = Task::start_droppable(run_beams(config, beams.clone(), clock.clone()));
    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| {
            raw_el
                .attr("aria-hidden", "true")
                .style("position", "absolute")
                .style("inset", "0")
                .style("overflow", "hidden")
                .style("pointer-events", "none")
                .style(
                    "background",
                    "radial-gradient(ellipse at center, rgba(99, 102, 241, 0.12) 0%, transparent 70%)",
                )
        })
        .layers_signal_vec(
            beams
                .signal_vec_cloned()
                .map(move |beam| beam_element(beam, &clock)),
        )
        .after_remove(move |_| drop(beams_task))
}

fn beam_element(beam: LiveBeam, clock: &Mutable<f64>) -> impl Element + use<> {
    let spec = beam.spec;
    let frame = clock.signal().map(move |now| beam.frame_at(now)).broadcast();
    El::new().update_raw_el(|raw_el| {
        raw_el
            .attr("data-beam", &beam.id.to_string())
            .style("position", "absolute")
            .style("left", &format!("{}%", spec.left_pct))
            .style("top", &format!("{}%", spec.top_pct))
            .style("width", &format!("{}px", spec.width_px))
            .style("height", &format!("{}px", spec.height_px))
            .style("border-radius", "9999px")
            .style("background", BEAM_GRADIENT)
            .style("will-change", "transform, opacity")
            .style_signal("opacity", frame.signal().map(|frame| frame.opacity.to_string()))
            .style_signal(
                "transform",
                frame
                    .signal()
                    .map(move |frame| frame.css_transform(spec.rotation_deg)),
            )
    })
}
