//! Light beams drifting across the hero background.
//!
//! Beams are spawned with random geometry, sweep left to right and back
//! until their lifetime (`delay + duration`) runs out, then get removed.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::motion::Easing;

/// Generator for beam layouts, seeded from the OS.
pub fn entropy_rng() -> SmallRng {
    SmallRng::try_from_os_rng().unwrap_or_else(|error| {
        log::warn!("No entropy for beam layout, using a fixed seed: {error}");
        SmallRng::seed_from_u64(0)
    })
}

/// Geometry and timing of one beam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamSpec {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub rotation_deg: f64,
    /// One sweep across.
    pub duration_ms: f64,
    pub delay_ms: f64,
}

/// Sampled look of a beam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamFrame {
    pub opacity: f64,
    pub translate_x: f64,
    pub scale: f64,
}

impl BeamFrame {
    const EDGE_IN: BeamFrame = BeamFrame {
        opacity: 0.0,
        translate_x: -100.0,
        scale: 0.0,
    };
    const PEAK: BeamFrame = BeamFrame {
        opacity: 0.8,
        translate_x: 0.0,
        scale: 1.0,
    };
    const EDGE_OUT: BeamFrame = BeamFrame {
        opacity: 0.0,
        translate_x: 100.0,
        scale: 0.0,
    };

    fn lerp(from: BeamFrame, to: BeamFrame, t: f64) -> BeamFrame {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        BeamFrame {
            opacity: mix(from.opacity, to.opacity),
            translate_x: mix(from.translate_x, to.translate_x),
            scale: mix(from.scale, to.scale),
        }
    }

    pub fn css_transform(&self, rotation_deg: f64) -> String {
        format!(
            "rotate({rotation_deg}deg) translateX({}px) scale({})",
            self.translate_x, self.scale
        )
    }
}

impl BeamSpec {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            width_px: rng.random_range(100.0..300.0),
            height_px: rng.random_range(1.0..4.0),
            duration_ms: rng.random_range(2000.0..5000.0),
            delay_ms: rng.random_range(0.0..2000.0),
            rotation_deg: rng.random_range(-22.5..22.5),
        }
    }

    pub fn lifetime_ms(&self) -> f64 {
        self.duration_ms + self.delay_ms
    }

    /// Look of the beam `elapsed_ms` after it was spawned. Hidden during
    /// its delay; sweeps in, peaks mid-way and sweeps out, then plays the
    /// sweep backwards.
    pub fn frame_at(&self, elapsed_ms: f64) -> BeamFrame {
        let local = elapsed_ms - self.delay_ms;
        if local < 0.0 {
            return BeamFrame::EDGE_IN;
        }
        let sweeps = local / self.duration_ms.max(1.0);
        let progress = sweeps.fract();
        let progress = if (sweeps as u64) % 2 == 0 {
            progress
        } else {
            1.0 - progress
        };
        let ease = Easing::PowerTwoInOut;
        if progress <= 0.5 {
            BeamFrame::lerp(BeamFrame::EDGE_IN, BeamFrame::PEAK, ease.apply(progress * 2.0))
        } else {
            BeamFrame::lerp(
                BeamFrame::PEAK,
                BeamFrame::EDGE_OUT,
                ease.apply((progress - 0.5) * 2.0),
            )
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeamId(u64);

impl fmt::Display for BeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "beam-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveBeam {
    pub id: BeamId,
    pub spec: BeamSpec,
    pub spawned_at_ms: f64,
}

impl LiveBeam {
    pub fn frame_at(&self, now_ms: f64) -> BeamFrame {
        self.spec.frame_at(now_ms - self.spawned_at_ms)
    }

    pub fn expires_at_ms(&self) -> f64 {
        self.spawned_at_ms + self.spec.lifetime_ms()
    }
}

/// The set of beams currently on screen.
#[derive(Clone, Debug, Default)]
pub struct BeamField {
    next_id: u64,
    beams: Vec<LiveBeam>,
}

impl BeamField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> BeamId {
        let id = BeamId(self.next_id);
        self.next_id += 1;
        self.beams.push(LiveBeam {
            id,
            spec: BeamSpec::sample(rng),
            spawned_at_ms: now_ms,
        });
        id
    }

    /// Remove every beam whose lifetime is over; returns their ids.
    pub fn expire(&mut self, now_ms: f64) -> Vec<BeamId> {
        let mut expired = Vec::new();
        self.beams.retain(|beam| {
            let alive = now_ms < beam.expires_at_ms();
            if !alive {
                expired.push(beam.id);
            }
            alive
        });
        expired
    }

    pub fn live(&self) -> &[LiveBeam] {
        &self.beams
    }

    pub fn clear(&mut self) {
        self.beams.clear();
    }
}

/// Periodic spawns. Fires at most once per check and resyncs after a long
/// pause, so a throttled tab does not replay every missed spawn on resume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnSchedule {
    interval_ms: f64,
    next_at_ms: f64,
}

impl SpawnSchedule {
    /// First spawn one interval after start.
    pub fn new(interval_ms: u32) -> Self {
        let interval_ms = f64::from(interval_ms.max(1));
        Self {
            interval_ms,
            next_at_ms: interval_ms,
        }
    }

    pub fn next_at_ms(&self) -> f64 {
        self.next_at_ms
    }

    pub fn is_due(&mut self, now_ms: f64) -> bool {
        if now_ms < self.next_at_ms {
            return false;
        }
        self.next_at_ms += self.interval_ms;
        if self.next_at_ms <= now_ms {
            self.next_at_ms = now_ms + self.interval_ms;
        }
        true
    }
}

/// Offsets of the initial burst: `count` beams, `stagger_ms` apart.
pub fn initial_spawn_offsets(count: u32, stagger_ms: u32) -> impl Iterator<Item = u64> {
    (0..u64::from(count)).map(move |i| i * u64::from(stagger_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_within_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let spec = BeamSpec::sample(&mut rng);
            assert!((0.0..100.0).contains(&spec.left_pct));
            assert!((0.0..100.0).contains(&spec.top_pct));
            assert!((100.0..300.0).contains(&spec.width_px));
            assert!((1.0..4.0).contains(&spec.height_px));
            assert!((2000.0..5000.0).contains(&spec.duration_ms));
            assert!((0.0..2000.0).contains(&spec.delay_ms));
            assert!((-22.5..22.5).contains(&spec.rotation_deg));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        assert_eq!(BeamSpec::sample(&mut a), BeamSpec::sample(&mut b));
        let mut c = SmallRng::seed_from_u64(8);
        assert_ne!(BeamSpec::sample(&mut a), BeamSpec::sample(&mut c));
    }

    #[test]
    fn frame_peaks_mid_sweep() {
        let spec = BeamSpec {
            left_pct: 0.0,
            top_pct: 0.0,
            width_px: 100.0,
            height_px: 2.0,
            rotation_deg: 0.0,
            duration_ms: 2000.0,
            delay_ms: 500.0,
        };
        assert_eq!(spec.frame_at(100.0), BeamFrame::EDGE_IN);
        assert_eq!(spec.frame_at(1500.0), BeamFrame::PEAK);
        assert_eq!(spec.frame_at(2500.0), BeamFrame::EDGE_OUT);
        // Alternate direction: half way back is the peak again.
        assert_eq!(spec.frame_at(3500.0), BeamFrame::PEAK);
    }

    #[test]
    fn beams_expire_after_delay_plus_duration() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = BeamField::new();
        let first = field.spawn(0.0, &mut rng);
        let second = field.spawn(1000.0, &mut rng);
        assert_eq!(field.live().len(), 2);

        let first_end = field.live()[0].expires_at_ms();
        let second_end = field.live()[1].expires_at_ms();
        let mut expired = field.expire(first_end - 1.0);
        assert!(!expired.contains(&first));
        expired.extend(field.expire(first_end));
        assert!(expired.contains(&first));
        expired.extend(field.expire(second_end));
        expired.sort();
        assert_eq!(expired, vec![first, second]);
        assert!(field.live().is_empty());
    }

    #[test]
    fn spawn_schedule_fires_once_per_interval() {
        let mut schedule = SpawnSchedule::new(500);
        assert!(!schedule.is_due(499.0));
        assert!(schedule.is_due(516.0));
        assert!(!schedule.is_due(600.0));
        assert!(schedule.is_due(1000.0));
        assert_eq!(schedule.next_at_ms(), 1500.0);
    }

    #[test]
    fn spawn_schedule_skips_missed_spawns_after_a_pause() {
        let mut schedule = SpawnSchedule::new(500);
        assert!(schedule.is_due(60_000.0));
        assert!(!schedule.is_due(60_016.0));
        assert_eq!(schedule.next_at_ms(), 60_500.0);
    }

    #[test]
    fn initial_burst_is_staggered() {
        let offsets = initial_spawn_offsets(15, 100).collect::<Vec<_>>();
        assert_eq!(offsets.len(), 15);
        assert_eq!(offsets.first(), Some(&0));
        assert_eq!(offsets.last(), Some(&1400));
    }
}
