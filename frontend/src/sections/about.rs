use crate::app::Site;
use crate::counter::animated_counter;
use crate::widgets::{
    accent, animated, call_to_action, card, gradient_tile, heading, icon_glyph, reveals,
    section_intro, section_shell, subheading, themed_text, wrap_grid,
};
use capable_site::content::{
    ABOUT_CTA, ABOUT_INTRO, ABOUT_STATS, ColorToken, CompanyValue, Icon, JOURNEY_HEADING,
    MILESTONES, MISSION, Milestone, TESTIMONIALS, TESTIMONIALS_HEADING, Testimonial, VALUES,
    VALUES_HEADING, VISION,
};
use capable_site::motion::Entrance;
use capable_site::navigation::Section;
use zoon::*;

pub fn about(site: &Site) -> impl Element + use<> {
    section_shell(
        Section::About,
        &site.theme,
        true,
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(96))
            .item(
                Column::new()
                    .s(Width::fill())
                    .item(section_intro(site, &ABOUT_INTRO))
                    .item(counters(site)),
            )
            .item(mission_and_vision(site))
            .item(values(site))
            .item(journey(site))
            .item(
                Column::new()
                    .s(Width::fill())
                    .item(testimonials(site))
                    .item(call_to_action(site, &ABOUT_CTA)),
            ),
    )
}

fn counters(site: &Site) -> impl Element + use<> {
    let revealed = Mutable::new(false);
    let entrance = Entrance::rise(50.0).with_duration(600).with_stagger(100);
    let duration_ms = site.config.motion.counter_duration_ms;
    Column::new()
        .s(Width::fill())
        .update_raw_el(reveals(site, &revealed))
        .item(wrap_grid(
            200,
            32,
            ABOUT_STATS.iter().enumerate().map(|(index, stat)| {
                animated(
                    entrance,
                    index,
                    &revealed,
                    Column::new()
                        .s(Gap::new().y(16))
                        .s(Font::new().center())
                        .item(
                            El::new()
                                .s(Align::new().center_x())
                                .s(Font::new().size(48).weight(FontWeight::Bold))
                                .update_raw_el(|raw_el| {
                                    raw_el.style_signal(
                                        "color",
                                        site.theme.color(|palette| palette.primary),
                                    )
                                })
                                .child(animated_counter(stat, &revealed, duration_ms)),
                        )
                        .item(
                            El::new()
                                .s(Align::new().center_x())
                                .s(Font::new().weight(FontWeight::Medium))
                                .update_raw_el(|raw_el| {
                                    raw_el.style_signal(
                                        "color",
                                        site.theme.color(|palette| palette.muted),
                                    )
                                })
                                .child(stat.label),
                        ),
                )
            }),
        ))
}

fn mission_and_vision(site: &Site) -> impl Element + use<> {
    let revealed = Mutable::new(false);
    let statements = [
        (Entrance::slide_left(), Icon::Target, "Our Mission", MISSION),
        (Entrance::slide_right(), Icon::Eye, "Our Vision", VISION),
    ];
    Column::new()
        .s(Width::fill())
        .update_raw_el(reveals(site, &revealed))
        .item(wrap_grid(
            420,
            48,
            statements.into_iter().map(|(entrance, icon, title, body)| {
                animated(
                    entrance,
                    0,
                    &revealed,
                    Column::new()
                        .s(Gap::new().y(24))
                        .item(
                            Row::new()
                                .s(Gap::new().x(16))
                                .item(gradient_tile(ColorToken::BluePurple, icon, 48))
                                .item(heading(&site.theme, title, 30)),
                        )
                        .item(themed_text(&site.theme, body, 18, |palette| palette.muted)),
                )
            }),
        ))
}

fn values(site: &Site) -> impl Element + use<> {
    let revealed = Mutable::new(false);
    let entrance = Entrance::pop().with_duration(800).with_stagger(200);
    Column::new()
        .s(Width::fill())
        .update_raw_el(reveals(site, &revealed))
        .item(subheading(&site.theme, &VALUES_HEADING))
        .item(wrap_grid(
            240,
            32,
            VALUES
                .iter()
                .enumerate()
                .map(|(index, value)| animated(entrance, index, &revealed, value_card(site, value))),
        ))
}

fn value_card(site: &Site, value: &'static CompanyValue) -> impl Element + use<> {
    card(
        &site.theme,
        Column::new()
            .s(Gap::new().y(16))
            .s(Padding::all(8))
            .s(Font::new().center())
            .item(El::new().s(Align::new().center_x()).child(gradient_tile(value.color, value.icon, 64)))
            .item(El::new().s(Align::new().center_x()).child(heading(&site.theme, value.title, 20)))
            .item(themed_text(&site.theme, value.description, 16, |palette| palette.muted)),
    )
}

fn journey(site: &Site) -> impl Element + use<> {
    let revealed = Mutable::new(false);
    let entrance = Entrance::slide_left().with_stagger(200);
    Column::new()
        .s(Width::fill())
        .update_raw_el(reveals(site, &revealed))
        .item(subheading(&site.theme, &JOURNEY_HEADING))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(32))
                .update_raw_el(|raw_el| {
                    raw_el.style("position", "relative").style_signal(
                        "border-left",
                        site.theme
                            .color(|palette| palette.primary)
                            .map(|color| format!("2px solid {color}")),
                    )
                })
                .items(
                    MILESTONES
                        .iter()
                        .enumerate()
                        .map(|(index, milestone)| animated(entrance, index, &revealed, milestone_row(site, milestone))),
                ),
        )
}

fn milestone_row(site: &Site, milestone: &'static Milestone) -> impl Element + use<> {
    let theme = &site.theme;
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(24))
        .item(
            El::new()
                .s(Width::exact(32))
                .s(Height::exact(32))
                .s(RoundedCorners::all(999))
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("margin-left", "-17px")
                        .style("flex-shrink", "0")
                        .style_signal("background-color", theme.color(|palette| palette.primary))
                        .style_signal(
                            "border",
                            theme
                                .color(|palette| palette.background)
                                .map(|color| format!("4px solid {color}")),
                        )
                }),
        )
        .item(card(
            theme,
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(16))
                .item(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(8))
                        .item(accent(theme, milestone.year.to_string(), 24))
                        .item(heading(theme, milestone.title, 20))
                        .item(themed_text(theme, milestone.description, 16, |palette| palette.muted)),
                )
                .item(
                    El::new()
                        .s(Align::new().center_y())
                        .update_raw_el(|raw_el| {
                            raw_el.style_signal("color", theme.color(|palette| palette.primary))
                        })
                        .child(icon_glyph(Icon::CheckCircle, 32)),
                ),
        ))
}

fn testimonials(site: &Site) -> impl Element + use<> {
    let revealed = Mutable::new(false);
    let entrance = Entrance::rise(50.0).with_stagger(200);
    Column::new()
        .s(Width::fill())
        .update_raw_el(reveals(site, &revealed))
        .item(subheading(&site.theme, &TESTIMONIALS_HEADING))
        .item(wrap_grid(
            300,
            32,
            TESTIMONIALS
                .iter()
                .enumerate()
                .map(|(index, testimonial)| animated(entrance, index, &revealed, testimonial_card(site, testimonial))),
        ))
}

fn testimonial_card(site: &Site, testimonial: &'static Testimonial) -> impl Element + use<> {
    let theme = &site.theme;
    card(
        theme,
        Column::new()
            .s(Gap::new().y(24))
            .s(Padding::all(8))
            .item(
                El::new()
                    .update_raw_el(|raw_el| {
                        raw_el.style_signal("color", theme.color(|palette| palette.primary))
                    })
                    .child(icon_glyph(Icon::Quote, 32)),
            )
            .item(
                Paragraph::new()
                    .s(Font::new().line_height(26))
                    .update_raw_el(|raw_el| {
                        raw_el.style_signal("color", theme.color(|palette| palette.muted))
                    })
                    .content(format!("\"{}\"", testimonial.content)),
            )
            .item(
                Row::new()
                    .s(Gap::new().x(2))
                    .s(Font::new().color(color!("#eab308")))
                    .update_raw_el(|raw_el| {
                        raw_el.attr("aria-label", &format!("{} out of 5 stars", testimonial.rating))
                    })
                    .items((0..testimonial.rating).map(|_| icon_glyph(Icon::Star, 16))),
            )
            .item(
                Row::new()
                    .s(Gap::new().x(16))
                    .item(
                        El::new()
                            .s(Width::exact(48))
                            .s(Height::exact(48))
                            .s(RoundedCorners::all(999))
                            .update_raw_el(|raw_el| {
                                raw_el
                                    .style_signal("color", theme.color(|palette| palette.primary))
                                    .style_signal(
                                        "background-color",
                                        theme.color(|palette| palette.primary).map(|color| {
                                            format!("color-mix(in srgb, {color} 10%, transparent)")
                                        }),
                                    )
                            })
                            .child(El::new().s(Align::center()).child(icon_glyph(Icon::Users, 24))),
                    )
                    .item(
                        Column::new()
                            .s(Gap::new().y(4))
                            .item(
                                El::new()
                                    .s(Font::new().weight(FontWeight::SemiBold))
                                    .update_raw_el(|raw_el| {
                                        raw_el.style_signal(
                                            "color",
                                            theme.color(|palette| palette.foreground),
                                        )
                                    })
                                    .child(testimonial.name),
                            )
                            .item(themed_text(theme, testimonial.role, 14, |palette| palette.muted)),
                    ),
            ),
    )
}
