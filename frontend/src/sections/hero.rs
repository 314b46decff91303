use crate::app::Site;
use crate::beams::beam_layer;
use crate::widgets::{animated, icon_glyph, outline_button, primary_button};
use capable_site::content::{HERO_CTAS, HERO_STATS, HERO_SUBTITLE, HERO_TITLE, HeroStat};
use capable_site::motion::{Entrance, Oscillation};
use capable_site::navigation::Section;
use zoon::*;

/// Time from mount to the first title word starting to move.
const INTRO_DELAY_MS: u32 = 500;

struct FloatingShape {
    position: [(&'static str, &'static str); 2],
    size_px: u32,
    radius: &'static str,
    rotate_deg: u32,
    opacity: (f64, f64),
}

static FLOATING_SHAPES: [FloatingShape; 3] = [
    FloatingShape {
        position: [("top", "80px"), ("left", "40px")],
        size_px: 80,
        radius: "9999px",
        rotate_deg: 0,
        opacity: (0.2, 0.1),
    },
    FloatingShape {
        position: [("top", "160px"), ("right", "80px")],
        size_px: 128,
        radius: "8px",
        rotate_deg: 45,
        opacity: (0.1, 0.05),
    },
    FloatingShape {
        position: [("bottom", "80px"), ("left", "80px")],
        size_px: 96,
        radius: "9999px",
        rotate_deg: 0,
        opacity: (0.15, 0.08),
    },
];

pub fn hero(site: &Site) -> impl Element + use<> {
    let clock = Mutable::new(0.0);
    let revealed = Mutable::new(false);
    let intro_task = Task::start_droppable({
        let revealed = revealed.clone();
        async move {
            Timer::sleep(INTRO_DELAY_MS).await;
            revealed.set(true);
        }
    });

    Stack::new()
        .s(Width::fill())
        .update_raw_el(|raw_el| {
            raw_el
                .attr("id", Section::Home.anchor_id())
                .style("position", "relative")
                .style("min-height", "100vh")
                .style("overflow", "hidden")
                .style_signal(
                    "background",
                    site.theme.color(|palette| palette.background).map(|background| {
                        format!("linear-gradient(135deg, {background} 0%, {background} 60%, rgba(113, 113, 122, 0.12) 100%)")
                    }),
                )
        })
        .layer(beam_layer(site.config.beams.clone(), clock.clone()))
        .layers(
            FLOATING_SHAPES
                .iter()
                .zip(0..)
                .map(|(shape, index)| floating_shape(site, shape, index, &clock)),
        )
        .layer(
            El::new()
                .s(Width::fill())
                .s(Align::center())
                .s(Padding::new().x(16).top(128).bottom(96))
                .child(content(site, &revealed, &clock)),
        )
        .layer(scroll_indicator(site, &clock))
        .after_remove(move |_| drop(intro_task))
}

fn floating_shape(
    site: &Site,
    shape: &'static FloatingShape,
    index: u32,
    clock: &Mutable<f64>,
) -> impl Element + use<> {
    let float = Oscillation::float(index);
    let rotate_deg = shape.rotate_deg;
    El::new()
        .s(Width::exact(shape.size_px))
        .s(Height::exact(shape.size_px))
        .update_raw_el(|raw_el| {
            let raw_el = shape
                .position
                .iter()
                .fold(raw_el, |raw_el, (side, offset)| raw_el.style(side, offset));
            raw_el
                .attr("aria-hidden", "true")
                .style("position", "absolute")
                .style("border-radius", shape.radius)
                .style("filter", "blur(24px)")
                .style("pointer-events", "none")
                .style_signal(
                    "background",
                    site.theme.color(|palette| palette.primary).map(move |color| {
                        let (from, to) = shape.opacity;
                        format!(
                            "linear-gradient(90deg, color-mix(in srgb, {color} {}%, transparent), color-mix(in srgb, {color} {}%, transparent))",
                            from * 100.0,
                            to * 100.0
                        )
                    }),
                )
                .style_signal(
                    "transform",
                    clock.signal().map(move |now| {
                        format!("translateY({}px) rotate({rotate_deg}deg)", float.value_at(now))
                    }),
                )
        })
}

fn content(site: &Site, revealed: &Mutable<bool>, clock: &Mutable<f64>) -> impl Element + use<> {
    let theme = &site.theme;
    let title_entrance = Entrance::flip_up().with_stagger(100);
    let subtitle_entrance = Entrance::rise(50.0).with_delay(700);
    let cta_entrance = Entrance::pop().with_delay(1100).with_stagger(100);
    let stat_entrance = Entrance::rise(50.0).with_delay(1500).with_stagger(100);
    let (lead, highlight, tail) = HERO_SUBTITLE;

    Column::new()
        .s(Width::fill().max(1024))
        .s(Align::new().center_x())
        .s(Gap::new().y(48))
        .s(Font::new().center())
        .item(
            Row::new()
                .multiline()
                .s(Align::new().center_x())
                .s(Gap::new().x(16))
                .update_raw_el(|raw_el| raw_el.style("perspective", "1000px"))
                .items(HERO_TITLE.iter().enumerate().map(|(index, word)| {
                    animated(title_entrance, index, revealed, title_word(site, *word, index))
                })),
        )
        .item(animated(
            subtitle_entrance,
            0,
            revealed,
            Paragraph::new()
                .s(Width::fill().max(896))
                .s(Align::new().center_x())
                .s(Font::new().size(24).line_height(38))
                .update_raw_el(|raw_el| {
                    raw_el.style_signal("color", theme.color(|palette| palette.muted))
                })
                .content(lead)
                .content(
                    El::new()
                        .s(Font::new().weight(FontWeight::SemiBold))
                        .update_raw_el(|raw_el| {
                            raw_el
                                .style("display", "inline")
                                .style_signal("color", theme.color(|palette| palette.primary))
                        })
                        .child(highlight),
                )
                .content(tail),
        ))
        .item(
            Row::new()
                .multiline()
                .s(Align::new().center_x())
                .s(Gap::both(16))
                .items(HERO_CTAS.iter().enumerate().map(|(index, (label, section))| {
                    let scroller = site.scroller.clone();
                    let (label, section) = (*label, *section);
                    let on_press = move || {
                        scroller.scroll_to_section(section);
                    };
                    let button = if index == 0 {
                        primary_button(theme, label, on_press).unify()
                    } else {
                        outline_button(theme, label, on_press).unify()
                    };
                    El::new().child(animated(cta_entrance, index, revealed, button))
                })),
        )
        .item(
            Row::new()
                .multiline()
                .s(Width::fill().max(896))
                .s(Align::new().center_x())
                .s(Gap::both(32))
                .items(HERO_STATS.iter().enumerate().map(|(index, stat)| {
                    El::new()
                        .s(Width::growable().min(160))
                        .child(animated(
                            stat_entrance,
                            index,
                            revealed,
                            hero_stat(site, stat, index, clock),
                        ))
                })),
        )
}

fn title_word(site: &Site, word: &'static str, index: usize) -> impl Element + use<> {
    El::new()
        .s(Font::new().size(88).weight(FontWeight::Bold).line_height(100).no_wrap())
        .update_raw_el(|raw_el| {
            raw_el
                .style("-webkit-background-clip", "text")
                .style("background-clip", "text")
                .style("color", "transparent")
                .style_signal(
                    "background-image",
                    map_ref! {
                        let foreground = site.theme.color(|palette| palette.foreground),
                        let primary = site.theme.color(|palette| palette.primary) =>
                        if index == 0 {
                            format!("linear-gradient(90deg, {foreground}, {foreground}, {primary})")
                        } else {
                            format!("linear-gradient(90deg, {primary}, {primary}, {foreground})")
                        }
                    },
                )
        })
        .child(word)
}

fn hero_stat(
    site: &Site,
    stat: &'static HeroStat,
    index: usize,
    clock: &Mutable<f64>,
) -> impl Element + use<> {
    let theme = &site.theme;
    let pulse = Oscillation::pulse(u32::try_from(index).unwrap_or_default());
    let hovered = Mutable::new(false);
    Column::new()
        .s(Gap::new().y(8))
        .s(Align::new().center_x())
        .update_raw_el(|raw_el| {
            raw_el
                .style("transition", "transform 200ms ease")
                .style_signal(
                    "transform",
                    hovered.signal().map_bool(|| "scale(1.05)", || "scale(1)"),
                )
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .item(
            El::new()
                .s(Width::exact(48))
                .s(Height::exact(48))
                .s(RoundedCorners::all(8))
                .s(Align::new().center_x())
                .update_raw_el(|raw_el| {
                    raw_el
                        .style_signal("color", theme.color(|palette| palette.primary))
                        .style_signal(
                            "background",
                            theme.color(|palette| palette.primary).map(|color| {
                                format!("linear-gradient(90deg, color-mix(in srgb, {color} 20%, transparent), color-mix(in srgb, {color} 10%, transparent))")
                            }),
                        )
                        .style_signal(
                            "transform",
                            clock.signal().map(move |now| format!("scale({})", pulse.value_at(now))),
                        )
                })
                .child(El::new().s(Align::center()).child(icon_glyph(stat.icon, 24))),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(36).weight(FontWeight::Bold))
                .update_raw_el(|raw_el| {
                    raw_el.style_signal("color", theme.color(|palette| palette.foreground))
                })
                .child(stat.value),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(16))
                .update_raw_el(|raw_el| {
                    raw_el.style_signal("color", theme.color(|palette| palette.muted))
                })
                .child(stat.label),
        )
}

fn scroll_indicator(site: &Site, clock: &Mutable<f64>) -> impl Element + use<> {
    let bob = Oscillation::bob();
    let border = site
        .theme
        .color(|palette| palette.primary)
        .map(|color| format!("2px solid {color}"));
    El::new()
        .s(Width::exact(24))
        .s(Height::exact(40))
        .s(RoundedCorners::all(999))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("aria-hidden", "true")
                .style("position", "absolute")
                .style("bottom", "32px")
                .style("left", "50%")
                .style_signal("border", border)
                .style_signal(
                    "transform",
                    clock.signal().map(move |now| {
                        format!("translateX(-50%) translateY({}px)", bob.value_at(now))
                    }),
                )
        })
        .child(
            El::new()
                .s(Width::exact(4))
                .s(Height::exact(12))
                .s(RoundedCorners::all(999))
                .s(Align::new().center_x())
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("margin-top", "8px")
                        .style_signal("background-color", site.theme.color(|palette| palette.primary))
                }),
        )
}
