//! Building blocks shared by the page sections.

use crate::app::Site;
use crate::reveal;
use crate::theme::Theme;
use capable_site::content::{CallToAction, ColorToken, Icon, SectionIntro, Subheading};
use capable_site::motion::Entrance;
use capable_site::navigation::Section;
use capable_site::theme::Palette;
use zoon::*;

type HtmlRawEl = RawHtmlEl<web_sys::HtmlElement>;

/// Outer wrapper of a page section: anchor `id`, vertical padding and a
/// centered content column.
pub fn section_shell<E: Element>(
    section: Section,
    theme: &Theme,
    surface: bool,
    content: E,
) -> impl Element + use<E> {
    let pick: fn(&Palette) -> &'static str = if surface {
        |palette| palette.surface
    } else {
        |palette| palette.background
    };
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(16).y(96))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("id", section.anchor_id())
                .style("position", "relative")
                .style("overflow", "hidden")
                .style_signal("background-color", theme.color(pick))
        })
        .child(
            El::new()
                .s(Width::fill().max(1280))
                .s(Align::new().center_x())
                .child(content),
        )
}

/// `update_raw_el` hook flipping `revealed` on first visibility.
pub fn reveals(site: &Site, revealed: &Mutable<bool>) -> impl FnOnce(HtmlRawEl) -> HtmlRawEl + use<> {
    let threshold = site.config.motion.reveal_threshold;
    let revealed = revealed.clone();
    move |raw_el| reveal::observe(raw_el, threshold, revealed)
}

/// Wraps `child` in an entrance animation that plays when `revealed` turns
/// true. `index` staggers siblings.
pub fn animated<E: Element>(
    entrance: Entrance,
    index: usize,
    revealed: &Mutable<bool>,
    child: E,
) -> impl Element + use<E> {
    let style = revealed
        .signal()
        .map(move |revealed| entrance.style(index, revealed))
        .broadcast();
    El::new()
        .s(Width::fill())
        .update_raw_el(|raw_el| {
            raw_el
                .style_signal("transform", style.signal_ref(|style| style.transform.clone()))
                .style_signal("opacity", style.signal_ref(|style| style.opacity.to_string()))
                .style_signal("transition", style.signal_ref(|style| style.transition.clone()))
        })
        .child(child)
}

/// Wrapping row; each cell grows from `cell_min_px`.
pub fn wrap_grid<E: Element>(
    cell_min_px: u32,
    gap: u32,
    cells: impl IntoIterator<Item = E>,
) -> RawElOrText {
    let basis = format!("1 1 {cell_min_px}px");
    Row::new()
        .multiline()
        .s(Width::fill())
        .s(Gap::both(gap))
        .items(cells.into_iter().map(|cell| {
            El::new()
                .update_raw_el(|raw_el| raw_el.style("flex", &basis).style("align-self", "stretch"))
                .child(cell)
        }))
        .unify()
}

pub fn themed_text(
    theme: &Theme,
    text: &'static str,
    size: u32,
    pick: fn(&Palette) -> &'static str,
) -> impl Element + use<> {
    Paragraph::new()
        .s(Font::new().size(size).line_height(size * 3 / 2))
        .update_raw_el(|raw_el| raw_el.style_signal("color", theme.color(pick)))
        .content(text)
}

pub fn heading(theme: &Theme, text: &'static str, size: u32) -> impl Element + use<> {
    El::new()
        .s(Font::new().size(size).weight(FontWeight::Bold))
        .update_raw_el(|raw_el| {
            raw_el.style_signal("color", theme.color(|palette| palette.foreground))
        })
        .child(text)
}

/// Bold text in the primary color.
pub fn accent<T: IntoCowStr<'static>>(theme: &Theme, text: T, size: u32) -> impl Element + use<T> {
    El::new()
        .s(Font::new().size(size).weight(FontWeight::Bold))
        .update_raw_el(|raw_el| raw_el.style_signal("color", theme.color(|palette| palette.primary)))
        .child(Text::new(text))
}

pub fn badge(theme: &Theme, text: &'static str) -> impl Element + use<> {
    El::new()
        .s(Padding::new().x(16).y(8))
        .s(RoundedCorners::all(999))
        .s(Font::new().size(14).weight(FontWeight::Medium).no_wrap())
        .s(Align::new().center_x())
        .update_raw_el(|raw_el| {
            raw_el
                .style_signal("color", theme.color(|palette| palette.primary))
                .style_signal(
                    "background-color",
                    theme
                        .color(|palette| palette.primary)
                        .map(|color| format!("color-mix(in srgb, {color} 12%, transparent)")),
                )
        })
        .child(text)
}

/// Badge, two-line heading and lead paragraph.
pub fn section_intro(site: &Site, intro: &'static SectionIntro) -> impl Element + use<> {
    let theme = &site.theme;
    let revealed = Mutable::new(false);
    let entrance = Entrance::rise(50.0).with_stagger(100);
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(24))
        .s(Padding::new().bottom(64))
        .s(Font::new().center())
        .update_raw_el(reveals(site, &revealed))
        .item(animated(entrance, 0, &revealed, badge(theme, intro.badge)))
        .item(animated(
            entrance,
            1,
            &revealed,
            Column::new()
                .s(Width::fill())
                .s(Font::new().size(48).weight(FontWeight::Bold).center())
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .update_raw_el(|raw_el| {
                            raw_el.style_signal("color", theme.color(|palette| palette.foreground))
                        })
                        .child(intro.title),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .update_raw_el(|raw_el| {
                            raw_el.style_signal("color", theme.color(|palette| palette.primary))
                        })
                        .child(intro.highlight),
                ),
        ))
        .item(animated(
            entrance,
            2,
            &revealed,
            El::new()
                .s(Width::fill().max(768))
                .s(Align::new().center_x())
                .child(themed_text(theme, intro.lead, 20, |palette| palette.muted)),
        ))
}

pub fn subheading(theme: &Theme, heading: &'static Subheading) -> impl Element + use<> {
    Column::new()
        .s(Gap::new().y(12))
        .s(Width::fill())
        .s(Padding::new().bottom(32))
        .s(Font::new().center())
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(30).weight(FontWeight::Bold))
                .update_raw_el(|raw_el| {
                    raw_el.style_signal("color", theme.color(|palette| palette.foreground))
                })
                .child(heading.title),
        )
        .item(themed_text(theme, heading.subtitle, 18, |palette| palette.muted))
}

pub fn icon_glyph(icon: Icon, size: u32) -> impl Element {
    El::new()
        .s(Font::new().size(size).no_wrap())
        .update_raw_el(|raw_el| raw_el.attr("aria-hidden", "true"))
        .child(icon.glyph())
}

/// Rounded square with a gradient fill and a white glyph.
pub fn gradient_tile(color: ColorToken, icon: Icon, size: u32) -> impl Element {
    El::new()
        .s(Width::exact(size))
        .s(Height::exact(size))
        .s(RoundedCorners::all(size / 4))
        .s(Font::new().color(color!("#ffffff")))
        .update_raw_el(|raw_el| raw_el.style("background", &color.css_gradient()))
        .child(El::new().s(Align::center()).child(icon_glyph(icon, size / 2)))
}

/// Bordered surface that lifts on hover.
pub fn card<E: Element>(theme: &Theme, content: E) -> impl Element + use<E> {
    let hovered = Mutable::new(false);
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(24))
        .s(RoundedCorners::all(16))
        .s(Transform::with_signal_self(
            hovered.signal().map_true(|| Transform::new().move_up(5)),
        ))
        .s(Shadows::with_signal(hovered.signal().map_bool(
            || vec![Shadow::new().color(color!("rgba(0, 0, 0, 0.25)")).y(20).blur(40).spread(-10)],
            Vec::new,
        )))
        .update_raw_el(|raw_el| {
            raw_el
                .style("transition", "transform 300ms ease-out, box-shadow 300ms ease-out")
                .style_signal("background-color", theme.color(|palette| palette.background))
                .style_signal(
                    "border",
                    theme
                        .color(|palette| palette.border)
                        .map(|color| format!("1px solid {color}")),
                )
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .child(content)
}

/// Filled gradient button.
pub fn primary_button<F: FnMut() + 'static>(
    theme: &Theme,
    label: &'static str,
    on_press: F,
) -> impl Element + use<F> {
    let hovered = Mutable::new(false);
    Button::new()
        .s(Padding::new().x(32).y(16))
        .s(RoundedCorners::all(12))
        .s(Font::new().size(18).weight(FontWeight::SemiBold).no_wrap())
        .update_raw_el(|raw_el| {
            raw_el
                .style("transition", "transform 200ms ease-out")
                .style_signal(
                    "transform",
                    hovered.signal().map_bool(|| "scale(1.05)", || "scale(1)"),
                )
                .style_signal("color", theme.color(|palette| palette.primary_foreground))
                .style_signal(
                    "background",
                    theme.color(|palette| palette.primary).map(|color| {
                        let (_, end) = ColorToken::BluePurple.stops();
                        format!("linear-gradient(90deg, {color} 0%, {end} 100%)")
                    }),
                )
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(label)
        .on_press(on_press)
}

/// Transparent button with a primary-colored border.
pub fn outline_button<F: FnMut() + 'static>(
    theme: &Theme,
    label: &'static str,
    on_press: F,
) -> impl Element + use<F> {
    let hovered = Mutable::new(false);
    let primary = theme.color(|palette| palette.primary).broadcast();
    Button::new()
        .s(Padding::new().x(32).y(16))
        .s(RoundedCorners::all(12))
        .s(Font::new().size(18).weight(FontWeight::SemiBold).no_wrap())
        .update_raw_el(|raw_el| {
            raw_el
                .style("transition", "background-color 200ms ease-out, color 200ms ease-out")
                .style_signal(
                    "border",
                    primary.signal().map(|color| format!("2px solid {color}")),
                )
                .style_signal(
                    "color",
                    map_ref! {
                        let color = primary.signal(),
                        let hovered = hovered.signal() => if *hovered { "#ffffff" } else { *color }
                    },
                )
                .style_signal(
                    "background-color",
                    map_ref! {
                        let color = primary.signal(),
                        let hovered = hovered.signal() => if *hovered { *color } else { "transparent" }
                    },
                )
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(label)
        .on_press(on_press)
}

/// Closing panel with one or two buttons that scroll to other sections.
pub fn call_to_action(site: &Site, cta: &'static CallToAction) -> impl Element + use<> {
    let theme = &site.theme;
    let revealed = Mutable::new(false);
    let (primary_label, primary_section) = cta.primary;
    let buttons = Row::new()
        .multiline()
        .s(Gap::both(16))
        .s(Align::new().center_x())
        .item({
            let scroller = site.scroller.clone();
            primary_button(theme, primary_label, move || {
                scroller.scroll_to_section(primary_section);
            })
        })
        .items(cta.secondary.map(|(label, section)| {
            let scroller = site.scroller.clone();
            outline_button(theme, label, move || {
                scroller.scroll_to_section(section);
            })
        }));

    Column::new()
        .s(Width::fill())
        .s(Padding::new().top(80))
        .update_raw_el(reveals(site, &revealed))
        .item(animated(
            Entrance::rise(50.0),
            0,
            &revealed,
            Column::new()
                .s(Width::fill().max(896))
                .s(Align::new().center_x())
                .s(Padding::new().x(32).y(48))
                .s(RoundedCorners::all(24))
                .s(Gap::new().y(24))
                .s(Font::new().center())
                .update_raw_el(|raw_el| {
                    raw_el.style_signal(
                        "background",
                        theme.color(|palette| palette.primary).map(|color| {
                            format!(
                                "linear-gradient(90deg, color-mix(in srgb, {color} 12%, transparent), rgba(147, 51, 234, 0.12))"
                            )
                        }),
                    )
                })
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(30).weight(FontWeight::Bold))
                        .update_raw_el(|raw_el| {
                            raw_el.style_signal("color", theme.color(|palette| palette.foreground))
                        })
                        .child(cta.title),
                )
                .item(themed_text(theme, cta.body, 18, |palette| palette.muted))
                .item(buttons),
        ))
}
