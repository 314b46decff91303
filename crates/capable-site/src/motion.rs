//! Easing curves, entrance presets and the small tweens the page animates
//! with.
//!
//! Everything here is a pure function of elapsed time so the frontend can
//! sample it from a frame timer and tests can sample it directly.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    /// Cubic deceleration.
    PowerTwoOut,
    PowerTwoInOut,
    /// Overshoots slightly before settling.
    BackOut,
}

const BACK_OVERSHOOT: f64 = 1.7;

impl Easing {
    /// Eased progress for `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::PowerTwoOut => 1.0 - (1.0 - t).powi(3),
            Self::PowerTwoInOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::BackOut => {
                let s = BACK_OVERSHOOT;
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }

    /// CSS timing function approximating the curve.
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Self::PowerTwoOut => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Self::PowerTwoInOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
            Self::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Transform and opacity of an element at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate_x: f64,
    pub opacity: f64,
}

impl Pose {
    /// Where every entrance ends.
    pub const REST: Pose = Pose {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
        opacity: 1.0,
    };

    pub fn to_css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({}) rotateX({}deg)",
            self.x, self.y, self.scale, self.rotate_x
        )
    }

    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate_x: mix(self.rotate_x, to.rotate_x),
            opacity: mix(self.opacity, to.opacity),
        }
    }
}

/// A one-shot animation from `from` to [`Pose::REST`], played when an
/// element is revealed. Item `i` of a group starts `delay_ms + i * stagger_ms`
/// after the reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub easing: Easing,
}

/// Inline style values for an entrance at one state.
#[derive(Clone, Debug, PartialEq)]
pub struct EntranceStyle {
    pub transform: String,
    pub opacity: f64,
    pub transition: String,
}

impl Entrance {
    const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    fn new(from: Pose, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            duration_ms,
            delay_ms: 0,
            stagger_ms: 0,
            easing,
        }
    }

    /// Fade in while moving up by `distance` pixels.
    pub fn rise(distance: f64) -> Self {
        Self::new(Pose { y: distance, ..Self::HIDDEN }, 800, Easing::PowerTwoOut)
    }

    /// Grow from 80% with a small overshoot.
    pub fn pop() -> Self {
        Self::new(
            Pose { y: 30.0, scale: 0.8, ..Self::HIDDEN },
            600,
            Easing::BackOut,
        )
    }

    /// Enter from the left.
    pub fn slide_left() -> Self {
        Self::new(Pose { x: -50.0, ..Self::HIDDEN }, 800, Easing::EaseOut)
    }

    pub fn slide_right() -> Self {
        Self::new(Pose { x: 50.0, ..Self::HIDDEN }, 800, Easing::EaseOut)
    }

    /// Rotate up into place around the x axis; used for the hero title.
    pub fn flip_up() -> Self {
        Self::new(
            Pose { y: 100.0, rotate_x: -90.0, ..Self::HIDDEN },
            1200,
            Easing::BackOut,
        )
    }

    pub fn fade() -> Self {
        Self::new(Self::HIDDEN, 600, Easing::EaseOut)
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_stagger(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms
            .saturating_add(index.saturating_mul(self.stagger_ms))
    }

    /// Hidden items sit at `from` with no transition; revealed items
    /// transition to rest.
    pub fn style(&self, index: usize, revealed: bool) -> EntranceStyle {
        if !revealed {
            return EntranceStyle {
                transform: self.from.to_css_transform(),
                opacity: self.from.opacity,
                transition: "none".to_string(),
            };
        }
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_for(index)
        );
        EntranceStyle {
            transform: Pose::REST.to_css_transform(),
            opacity: Pose::REST.opacity,
            transition: format!("transform {timing}, opacity {timing}"),
        }
    }

    /// Sampled pose `elapsed_ms` after the reveal.
    pub fn pose_at(&self, index: usize, elapsed_ms: f64) -> Pose {
        let local = elapsed_ms - f64::from(self.delay_for(index));
        if local <= 0.0 {
            return self.from;
        }
        let t = local / f64::from(self.duration_ms.max(1));
        self.from.lerp(&Pose::REST, self.easing.apply(t))
    }

    /// When the last of `count` staggered items has finished.
    pub fn total_duration(&self, count: usize) -> Duration {
        let last = self.delay_for(count.saturating_sub(1));
        Duration::from_millis(u64::from(last) + u64::from(self.duration_ms))
    }
}

/// Reports the first time an element becomes visible and never again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only for the call that reveals.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Value shown by an animated counter `elapsed_ms` after it started.
/// Eases out with a quartic curve and lands exactly on `target`.
pub fn counter_value(target: u32, elapsed_ms: f64, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= f64::from(duration_ms) {
        return target;
    }
    let progress = (elapsed_ms / f64::from(duration_ms)).max(0.0);
    let eased = 1.0 - (1.0 - progress).powi(4);
    (f64::from(target) * eased).floor() as u32
}

/// The smooth-scroll curve: fast start, long exponential tail.
pub fn smooth_scroll_curve(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t.max(0.0))).min(1.0)
}

/// Vertical scroll from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.duration_ms)
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = elapsed_ms / f64::from(self.duration_ms);
        self.from + (self.to - self.from) * smooth_scroll_curve(t)
    }
}

/// Pixels per line for wheel events reported in lines.
pub const WHEEL_LINE_PX: f64 = 16.0;

/// Unit of a wheel event's delta, as `WheelEvent.deltaMode` reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }

    pub fn to_pixels(self, delta: f64, page_px: f64) -> f64 {
        match self {
            Self::Pixel => delta,
            Self::Line => delta * WHEEL_LINE_PX,
            Self::Page => delta * page_px,
        }
    }
}

/// Where wheel scrolling is headed. Deltas add up on the target rather
/// than on the current position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelTarget {
    target: Option<f64>,
    multiplier: f64,
}

impl WheelTarget {
    pub fn new(multiplier: f64) -> Self {
        Self {
            target: None,
            multiplier,
        }
    }

    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Adds one wheel step and returns the new target, kept inside
    /// `0..=max_scroll`. The first step after a reset starts from `current`.
    pub fn push(&mut self, current: f64, delta_px: f64, max_scroll: f64) -> f64 {
        let base = self.target.unwrap_or(current);
        let target = (base + delta_px * self.multiplier).clamp(0.0, max_scroll.max(0.0));
        self.target = Some(target);
        target
    }

    /// Forget the target once its tween lands or another scroll takes over.
    pub fn reset(&mut self) {
        self.target = None;
    }
}

/// Endless back-and-forth between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub from: f64,
    pub to: f64,
    /// One leg, `from` to `to`.
    pub half_period_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Oscillation {
    /// Background shapes drifting up 20px; `index` staggers them by 500ms.
    pub fn float(index: u32) -> Self {
        Self {
            from: 0.0,
            to: -20.0,
            half_period_ms: 3000,
            delay_ms: index * 500,
            easing: Easing::PowerTwoInOut,
        }
    }

    /// Accent dots growing to 110%; staggered by 300ms.
    pub fn pulse(index: u32) -> Self {
        Self {
            from: 1.0,
            to: 1.1,
            half_period_ms: 2000,
            delay_ms: index * 300,
            easing: Easing::PowerTwoInOut,
        }
    }

    /// The scroll hint under the hero.
    pub fn bob() -> Self {
        Self {
            from: 0.0,
            to: 10.0,
            half_period_ms: 1000,
            delay_ms: 0,
            easing: Easing::PowerTwoInOut,
        }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let local = elapsed_ms - f64::from(self.delay_ms);
        if local <= 0.0 {
            return self.from;
        }
        let half = f64::from(self.half_period_ms.max(1));
        let legs = local / half;
        let phase = legs.fract();
        let phase = if (legs as u64) % 2 == 0 { phase } else { 1.0 - phase };
        self.from + (self.to - self.from) * self.easing.apply(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn easings_start_at_zero_and_end_at_one() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::PowerTwoOut,
            Easing::PowerTwoInOut,
            Easing::BackOut,
        ] {
            assert!(close(easing.apply(0.0), 0.0), "{easing:?}");
            assert!(close(easing.apply(1.0), 1.0), "{easing:?}");
            assert!(close(easing.apply(7.0), 1.0), "{easing:?}");
        }
    }

    #[test]
    fn back_out_overshoots() {
        assert!(Easing::BackOut.apply(0.7) > 1.0);
    }

    #[test]
    fn stagger_offsets_each_item() {
        let entrance = Entrance::rise(50.0).with_delay(200).with_stagger(100);
        assert_eq!(entrance.delay_for(0), 200);
        assert_eq!(entrance.delay_for(3), 500);
        assert_eq!(entrance.total_duration(4), Duration::from_millis(1300));
    }

    #[test]
    fn hidden_style_has_no_transition() {
        let style = Entrance::fade().style(0, false);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.transition, "none");

        let style = Entrance::fade().with_stagger(100).style(2, true);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(
            style.transition,
            "transform 600ms cubic-bezier(0, 0, 0.58, 1) 200ms, opacity 600ms cubic-bezier(0, 0, 0.58, 1) 200ms"
        );
    }

    #[test]
    fn pose_waits_for_its_delay() {
        let entrance = Entrance::slide_left().with_delay(100);
        assert_eq!(entrance.pose_at(0, 50.0), entrance.from);
        assert_eq!(entrance.pose_at(0, 900.0), Pose::REST);
    }

    #[test]
    fn reveal_latch_never_replays() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn counter_lands_on_target() {
        assert_eq!(counter_value(500, 0.0, 2000), 0);
        assert_eq!(counter_value(500, 1000.0, 2000), 468);
        assert_eq!(counter_value(500, 1999.0, 2000), 499);
        assert_eq!(counter_value(500, 2000.0, 2000), 500);
        assert_eq!(counter_value(98, 5.0, 0), 98);
    }

    #[test]
    fn scroll_tween_settles_on_target() {
        let tween = ScrollTween::new(0.0, 1000.0, 1200);
        assert!(tween.position_at(600.0) > 900.0);
        assert!(tween.position_at(1199.0) <= 1000.0);
        assert_eq!(tween.position_at(1200.0), 1000.0);
        assert!(tween.is_finished(1200.0));

        let upward = ScrollTween::new(800.0, 0.0, 1200);
        assert!(upward.position_at(300.0) < 800.0);
    }

    #[test]
    fn wheel_steps_accumulate_on_the_target() {
        let mut wheel = WheelTarget::new(1.0);
        assert_eq!(wheel.push(200.0, 100.0, 5000.0), 300.0);
        // The page has only moved a little, the next step still builds on 300.
        assert_eq!(wheel.push(220.0, 100.0, 5000.0), 400.0);
        assert_eq!(wheel.push(260.0, -50.0, 5000.0), 350.0);

        wheel.reset();
        assert_eq!(wheel.target(), None);
        assert_eq!(wheel.push(1000.0, 100.0, 5000.0), 1100.0);

        let mut doubled = WheelTarget::new(2.0);
        assert_eq!(doubled.push(0.0, 100.0, 5000.0), 200.0);
    }

    #[test]
    fn wheel_target_stays_inside_the_document() {
        let mut wheel = WheelTarget::new(1.0);
        assert_eq!(wheel.push(4950.0, 300.0, 5000.0), 5000.0);
        assert_eq!(wheel.push(4950.0, 300.0, 5000.0), 5000.0);
        assert_eq!(wheel.push(4950.0, -200.0, 5000.0), 4800.0);

        wheel.reset();
        assert_eq!(wheel.push(40.0, -300.0, 5000.0), 0.0);

        // Shorter than the viewport: nothing to scroll.
        let mut short = WheelTarget::new(1.0);
        assert_eq!(short.push(0.0, 120.0, -300.0), 0.0);
    }

    #[test]
    fn line_and_page_deltas_become_pixels() {
        assert_eq!(WheelDeltaMode::from_dom(0), WheelDeltaMode::Pixel);
        assert_eq!(WheelDeltaMode::from_dom(1).to_pixels(3.0, 900.0), 48.0);
        assert_eq!(WheelDeltaMode::from_dom(2).to_pixels(1.0, 900.0), 900.0);
        assert_eq!(WheelDeltaMode::Pixel.to_pixels(-53.0, 900.0), -53.0);
    }

    #[test]
    fn oscillation_swings_back() {
        let float = Oscillation::float(0);
        assert!(close(float.value_at(0.0), 0.0));
        assert!(close(float.value_at(3000.0), -20.0));
        assert!(close(float.value_at(6000.0), 0.0));
        assert!(close(float.value_at(1500.0), float.value_at(4500.0)));
        assert!(close(Oscillation::pulse(2).value_at(500.0), 1.0));
    }
}
