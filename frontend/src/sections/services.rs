use crate::app::Site;
use crate::widgets::{
    animated, call_to_action, card, gradient_tile, icon_glyph, primary_button, reveals,
    section_intro, section_shell, subheading, themed_text, wrap_grid,
};
use capable_site::content::{
    ADDITIONAL_SERVICES, ADDITIONAL_SERVICES_HEADING, Highlight, Icon, SERVICES, SERVICES_CTA,
    SERVICES_INTRO, Service,
};
use capable_site::motion::Entrance;
use capable_site::navigation::Section;
use zoon::*;

pub fn services(site: &Site) -> impl Element + use<> {
    section_shell(
        Section::Services,
        &site.theme,
        false,
        Column::new()
            .s(Width::fill())
            .item(section_intro(site, &SERVICES_INTRO))
            .item(service_cards(site))
            .item(additional_services(site))
            .item(call_to_action(site, &SERVICES_CTA)),
    )
}

fn service_cards(site: &Site) -> impl Element + use<> {
    let revealed = Mutable::new(false);
    let entrance = Entrance::rise(100.0).with_stagger(200);
    Column::new()
        .s(Width::fill())
        .s(Padding::new().bottom(64))
        .update_raw_el(reveals(site, &revealed))
        .item(wrap_grid(
            420,
            32,
            SERVICES
                .iter()
                .enumerate()
                .map(|(index, service)| animated(entrance, index, &revealed, service_card(site, service))),
        ))
}

fn service_card(site: &Site, service: &'static Service) -> impl Element + use<> {
    let theme = &site.theme;
    let scroller = site.scroller.clone();
    card(
        theme,
        Column::new()
            .s(Gap::new().y(24))
            .s(Padding::all(8))
            .item(
                Row::new()
                    .s(Gap::new().x(16))
                    .item(gradient_tile(service.color, service.icon, 64))
                    .item(
                        Column::new()
                            .s(Gap::new().y(8))
                            .item(
                                El::new()
                                    .s(Font::new().size(24).weight(FontWeight::Bold))
                                    .update_raw_el(|raw_el| {
                                        raw_el.style_signal(
                                            "color",
                                            theme.color(|palette| palette.foreground),
                                        )
                                    })
                                    .child(service.title),
                            )
                            .item(
                                El::new()
                                    .s(Width::exact(48))
                                    .s(Height::exact(4))
                                    .s(RoundedCorners::all(999))
                                    .update_raw_el(|raw_el| {
                                        raw_el.style_signal(
                                            "background-color",
                                            theme.color(|palette| palette.primary),
                                        )
                                    }),
                            ),
                    ),
            )
            .item(themed_text(theme, service.description, 16, |palette| palette.muted))
            .item(labelled_block(
                site,
                "Key Features",
                wrap_grid(
                    180,
                    8,
                    service.features.iter().map(|feature| {
                        Row::new()
                            .s(Gap::new().x(8))
                            .item(
                                El::new()
                                    .update_raw_el(|raw_el| {
                                        raw_el.style_signal(
                                            "color",
                                            theme.color(|palette| palette.primary),
                                        )
                                    })
                                    .child(icon_glyph(Icon::Zap, 14)),
                            )
                            .item(themed_text(theme, *feature, 14, |palette| palette.muted))
                    }),
                ),
            ))
            .item(labelled_block(
                site,
                "Technologies",
                Row::new()
                    .multiline()
                    .s(Gap::both(8))
                    .items(service.technologies.iter().map(|tech| chip(site, *tech))),
            ))
            .item(
                El::new().s(Width::fill()).child(primary_button(theme, "Learn More", move || {
                    scroller.scroll_to_section(Section::Contact);
                })),
            ),
    )
}

fn labelled_block<E: Element>(site: &Site, title: &'static str, content: E) -> impl Element + use<E> {
    Column::new()
        .s(Gap::new().y(12))
        .item(
            El::new()
                .s(Font::new().weight(FontWeight::SemiBold))
                .update_raw_el(|raw_el| {
                    raw_el.style_signal("color", site.theme.color(|palette| palette.foreground))
                })
                .child(title),
        )
        .item(content)
}

/// Small neutral tag.
pub fn chip<T: IntoCowStr<'static>>(site: &Site, text: T) -> impl Element + use<T> {
    El::new()
        .s(Padding::new().x(10).y(4))
        .s(RoundedCorners::all(999))
        .s(Font::new().size(12).weight(FontWeight::Medium).no_wrap())
        .update_raw_el(|raw_el| {
            raw_el
                .style_signal("background-color", site.theme.color(|palette| palette.surface))
                .style_signal("color", site.theme.color(|palette| palette.foreground))
        })
        .child(Text::new(text))
}

fn additional_services(site: &Site) -> impl Element + use<> {
    let revealed = Mutable::new(false);
    let entrance = Entrance::pop().with_stagger(100);
    Column::new()
        .s(Width::fill())
        .update_raw_el(reveals(site, &revealed))
        .item(subheading(&site.theme, &ADDITIONAL_SERVICES_HEADING))
        .item(wrap_grid(
            220,
            24,
            ADDITIONAL_SERVICES
                .iter()
                .enumerate()
                .map(|(index, highlight)| animated(entrance, index, &revealed, highlight_tile(site, highlight))),
        ))
}

/// Icon over a title and a one-line description; grows on hover.
pub fn highlight_tile(site: &Site, highlight: &'static Highlight) -> impl Element + use<> {
    let theme = &site.theme;
    let hovered = Mutable::new(false);
    let hovered_signal = hovered.signal().broadcast();
    Column::new()
        .s(Gap::new().y(12))
        .s(Width::fill())
        .s(Font::new().center())
        .update_raw_el(|raw_el| {
            raw_el
                .style("cursor", "pointer")
                .style("transition", "transform 200ms ease")
                .style_signal(
                    "transform",
                    hovered_signal.signal().map_bool(|| "scale(1.05)", || "scale(1)"),
                )
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .item(
            El::new()
                .s(Width::exact(80))
                .s(Height::exact(80))
                .s(RoundedCorners::all(16))
                .s(Align::new().center_x())
                .update_raw_el(|raw_el| {
                    raw_el
                        .style_signal("color", theme.color(|palette| palette.primary))
                        .style_signal(
                            "background",
                            map_ref! {
                                let color = theme.color(|palette| palette.primary),
                                let hovered = hovered_signal.signal() => {
                                    let (from, to) = if *hovered { (20, 10) } else { (10, 5) };
                                    format!("linear-gradient(90deg, color-mix(in srgb, {color} {from}%, transparent), color-mix(in srgb, {color} {to}%, transparent))")
                                }
                            },
                        )
                })
                .child(El::new().s(Align::center()).child(icon_glyph(highlight.icon, 32))),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().weight(FontWeight::SemiBold))
                .update_raw_el(|raw_el| {
                    raw_el.style_signal(
                        "color",
                        map_ref! {
                            let primary = theme.color(|palette| palette.primary),
                            let foreground = theme.color(|palette| palette.foreground),
                            let hovered = hovered_signal.signal() =>
                            if *hovered { *primary } else { *foreground }
                        },
                    )
                })
                .child(highlight.title),
        )
        .item(themed_text(theme, highlight.description, 14, |palette| palette.muted))
}
