use crate::app::Site;
use crate::widgets::{animated, heading, icon_glyph, reveals, themed_text, wrap_grid};
use capable_site::contact::{NewsletterSignup, NewsletterStatus};
use capable_site::content::{
    FOOTER_BLURB, FOOTER_CONTACT, FOOTER_LINK_GROUPS, FOOTER_SOCIALS, FooterContact,
    FooterLinkGroup, Icon, LEGAL_LINKS, LinkTarget, NEWSLETTER, NEWSLETTER_FINE_PRINT,
    SocialLink,
};
use capable_site::motion::Entrance;
use zoon::{eprintln, *};

#[derive(Clone)]
pub struct Footer {
    site: Site,
    newsletter: Mutable<NewsletterSignup>,
}

impl Footer {
    pub fn new(site: &Site) -> impl Element + use<> {
        Self {
            site: site.clone(),
            newsletter: Mutable::new(NewsletterSignup::new()),
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        let revealed = Mutable::new(false);
        let entrance = Entrance::rise(30.0).with_stagger(100);
        let columns = [
            self.brand_column().unify(),
            link_group(&self.site, &FOOTER_LINK_GROUPS[0]).unify(),
            link_group(&self.site, &FOOTER_LINK_GROUPS[1]).unify(),
            link_group(&self.site, &FOOTER_LINK_GROUPS[2]).unify(),
        ];
        Column::new()
            .s(Width::fill())
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("role", "contentinfo")
                    .style_signal("background-color", theme.color(|palette| palette.surface))
                    .style_signal(
                        "border-top",
                        theme.color(|palette| palette.border).map(|color| format!("1px solid {color}")),
                    )
            })
            .item(self.newsletter())
            .item(
                El::new()
                    .s(Width::fill().max(1280))
                    .s(Align::new().center_x())
                    .s(Padding::new().x(16).y(64))
                    .update_raw_el(reveals(&self.site, &revealed))
                    .child(wrap_grid(
                        220,
                        48,
                        columns
                            .into_iter()
                            .enumerate()
                            .map(|(index, column)| animated(entrance, index, &revealed, column)),
                    )),
            )
            .item(self.bottom_bar())
    }

    fn newsletter(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        let status = self.newsletter.signal_ref(NewsletterSignup::status).dedupe();
        Column::new()
            .s(Width::fill())
            .s(Padding::new().x(16).y(48))
            .s(Gap::new().y(24))
            .s(Font::new().center())
            .update_raw_el(|raw_el| {
                raw_el
                    .style_signal(
                        "border-bottom",
                        theme.color(|palette| palette.border).map(|color| format!("1px solid {color}")),
                    )
                    .style_signal(
                        "background",
                        theme.color(|palette| palette.primary).map(|color| {
                            format!("linear-gradient(90deg, color-mix(in srgb, {color} 6%, transparent), rgba(147, 51, 234, 0.06))")
                        }),
                    )
            })
            .item(El::new().s(Align::new().center_x()).child(heading(theme, NEWSLETTER.title, 30)))
            .item(
                El::new()
                    .s(Width::fill().max(640))
                    .s(Align::new().center_x())
                    .child(themed_text(theme, NEWSLETTER.subtitle, 18, |palette| palette.muted)),
            )
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill().max(480))
                    .s(Align::new().center_x())
                    .s(Gap::both(12))
                    .item(self.email_input())
                    .item(self.subscribe_button()),
            )
            .item_signal(status.map(|status| match status {
                NewsletterStatus::Idle => None,
                NewsletterStatus::Invalid => Some(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(14).color(color!("#ef4444")))
                        .update_raw_el(|raw_el| raw_el.attr("role", "alert"))
                        .child("Please enter a valid email address."),
                ),
                NewsletterStatus::Subscribed => Some(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(14).color(color!("#22c55e")))
                        .update_raw_el(|raw_el| raw_el.attr("role", "status"))
                        .child("Thanks for subscribing! Watch your inbox for our next issue."),
                ),
            }))
            .item(themed_text(theme, NEWSLETTER_FINE_PRINT, 14, |palette| palette.muted))
    }

    fn subscribe(&self) {
        if let Err(error) = self.newsletter.lock_mut().subscribe() {
            eprintln!("[newsletter] {error}");
        }
    }

    fn email_input(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        let newsletter = self.newsletter.clone();
        let this = self.clone();
        TextInput::new()
            .s(Width::growable().min(220))
            .s(Padding::new().x(16).y(12))
            .s(RoundedCorners::all(8))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("type", "email")
                    .style("outline", "none")
                    .style_signal("color", theme.color(|palette| palette.foreground))
                    .style_signal("background-color", theme.color(|palette| palette.background))
                    .style_signal(
                        "border",
                        theme.color(|palette| palette.border).map(|color| format!("1px solid {color}")),
                    )
            })
            .id("newsletter-email")
            .label_hidden("Email address")
            .placeholder(Placeholder::new("Enter your email address"))
            .text_signal(
                self.newsletter
                    .signal_ref(|signup| signup.email().to_owned())
                    .dedupe_cloned(),
            )
            .on_change(move |email| newsletter.lock_mut().set_email(email))
            .on_key_down_event(move |event| {
                if let Key::Enter = event.key() {
                    this.subscribe();
                }
            })
    }

    fn subscribe_button(&self) -> impl Element + use<> {
        let this = self.clone();
        let theme = &self.site.theme;
        let hovered = Mutable::new(false);
        Button::new()
            .s(Padding::new().x(24).y(12))
            .s(RoundedCorners::all(8))
            .s(Font::new().weight(FontWeight::SemiBold).no_wrap())
            .update_raw_el(|raw_el| {
                raw_el
                    .style("transition", "transform 200ms ease")
                    .style_signal("transform", hovered.signal().map_bool(|| "scale(1.05)", || "scale(1)"))
                    .style_signal("color", theme.color(|palette| palette.primary_foreground))
                    .style_signal("background-color", theme.color(|palette| palette.primary))
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(
                Row::new()
                    .s(Gap::new().x(8))
                    .item("Subscribe")
                    .item(icon_glyph(Icon::ArrowRight, 16)),
            )
            .on_press(move || this.subscribe())
    }

    fn brand_column(&self) -> impl Element + use<> {
        let site = &self.site;
        let theme = &site.theme;
        Column::new()
            .s(Gap::new().y(20))
            .item(brand_mark(site))
            .item(themed_text(theme, FOOTER_BLURB, 15, |palette| palette.muted))
            .item(
                Column::new()
                    .s(Gap::new().y(12))
                    .items(FOOTER_CONTACT.iter().map(|contact| contact_line(site, contact))),
            )
            .item(
                Row::new()
                    .multiline()
                    .s(Gap::both(8))
                    .items(FOOTER_SOCIALS.iter().map(|social| social_icon(site, social))),
            )
    }

    fn bottom_bar(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        let scroller = self.site.scroller.clone();
        let year = js_sys::Date::new_0().get_full_year();
        let copyright = format!("© {year} {}. All rights reserved.", self.site.config.site.brand);
        Row::new()
            .multiline()
            .s(Width::fill().max(1280))
            .s(Align::new().center_x())
            .s(Padding::new().x(16).y(24))
            .s(Gap::both(16))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("justify-content", "space-between")
                    .style_signal(
                        "border-top",
                        theme.color(|palette| palette.border).map(|color| format!("1px solid {color}")),
                    )
            })
            .item(
                El::new()
                    .s(Font::new().size(14))
                    .update_raw_el(|raw_el| raw_el.style_signal("color", theme.color(|palette| palette.muted)))
                    .child(copyright),
            )
            .item(
                Row::new()
                    .multiline()
                    .s(Gap::both(24))
                    .items(LEGAL_LINKS.iter().map(|link| footer_link(&self.site, link.label, link.target)))
                    .item(
                        Button::new()
                            .s(Width::exact(40))
                            .s(Height::exact(40))
                            .s(RoundedCorners::all(999))
                            .update_raw_el(|raw_el| {
                                raw_el
                                    .attr("aria-label", "Back to top")
                                    .style_signal("color", theme.color(|palette| palette.primary_foreground))
                                    .style_signal("background-color", theme.color(|palette| palette.primary))
                            })
                            .label(El::new().s(Align::center()).child(icon_glyph(Icon::ArrowUp, 18)))
                            .on_press(move || scroller.scroll_to_top()),
                    ),
            )
    }
}

fn brand_mark(site: &Site) -> impl Element + use<> {
    let scroller = site.scroller.clone();
    Button::new()
        .s(Font::new().size(24).weight(FontWeight::Bold).no_wrap())
        .update_raw_el(|raw_el| {
            raw_el
                .style("-webkit-background-clip", "text")
                .style("background-clip", "text")
                .style("color", "transparent")
                .style_signal(
                    "background-image",
                    site.theme
                        .color(|palette| palette.primary)
                        .map(|color| format!("linear-gradient(90deg, {color}, #9333ea)")),
                )
        })
        .label(site.config.site.brand.clone())
        .on_press(move || scroller.scroll_to_top())
}

fn link_group(site: &Site, group: &'static FooterLinkGroup) -> impl Element + use<> {
    Column::new()
        .s(Gap::new().y(16))
        .update_raw_el(|raw_el| raw_el.attr("aria-label", group.title))
        .item(heading(&site.theme, group.title, 18))
        .items(group.links.iter().map(|link| footer_link(site, link.label, link.target)))
}

/// Section targets scroll smoothly; other targets are plain links.
fn footer_link(site: &Site, label: &'static str, target: LinkTarget) -> RawElOrText {
    let theme = &site.theme;
    let hovered = Mutable::new(false);
    let color = map_ref! {
        let primary = theme.color(|palette| palette.primary),
        let muted = theme.color(|palette| palette.muted),
        let hovered = hovered.signal() =>
        if *hovered { *primary } else { *muted }
    };
    let on_hovered_change = move |is_hovered| hovered.set_neq(is_hovered);
    match target {
        LinkTarget::Section(section) => {
            let scroller = site.scroller.clone();
            Button::new()
                .s(Font::new().size(15))
                .update_raw_el(|raw_el| {
                    raw_el
                        .attr("data-href", &section.href())
                        .style("transition", "color 200ms ease")
                        .style_signal("color", color)
                })
                .on_hovered_change(on_hovered_change)
                .label(label)
                .on_press(move || {
                    scroller.scroll_to_section(section);
                })
                .unify()
        }
        LinkTarget::Page(_) | LinkTarget::External(_) => {
            let link = Link::new()
                .s(Font::new().size(15))
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("transition", "color 200ms ease")
                        .style_signal("color", color)
                })
                .on_hovered_change(on_hovered_change)
                .label(label)
                .to(target.href());
            if target.opens_new_tab() {
                link.new_tab(NewTab::new()).unify()
            } else {
                link.unify()
            }
        }
    }
}

fn contact_line(site: &Site, contact: &'static FooterContact) -> impl Element + use<> {
    let theme = &site.theme;
    Row::new()
        .s(Gap::new().x(12))
        .item(
            El::new()
                .update_raw_el(|raw_el| raw_el.style_signal("color", theme.color(|palette| palette.primary)))
                .child(icon_glyph(contact.icon, 16)),
        )
        .item(footer_link(site, contact.text, contact.target))
}

/// Tinted with the network's brand color on hover.
fn social_icon(site: &Site, social: &'static SocialLink) -> impl Element + use<> {
    let theme = &site.theme;
    let hovered = Mutable::new(false);
    let hovered_signal = hovered.signal().broadcast();
    let brand_color = social.brand_color;
    Link::new()
        .s(Width::exact(40))
        .s(Height::exact(40))
        .s(RoundedCorners::all(10))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("aria-label", social.label)
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("transition", "background-color 200ms ease, color 200ms ease, transform 200ms ease")
                .style_signal(
                    "transform",
                    hovered_signal.signal().map_bool(|| "translateY(-2px)", || "translateY(0)"),
                )
                .style_signal(
                    "color",
                    map_ref! {
                        let muted = theme.color(|palette| palette.muted),
                        let hovered = hovered_signal.signal() =>
                        if *hovered && brand_color.is_some() { "#ffffff" } else { *muted }
                    },
                )
                .style_signal(
                    "background-color",
                    map_ref! {
                        let background = theme.color(|palette| palette.background),
                        let hovered = hovered_signal.signal() =>
                        match (*hovered, brand_color) {
                            (true, Some(brand)) => brand,
                            _ => *background,
                        }
                    },
                )
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(icon_glyph(social.icon, 18))
        .to(social.href)
        .new_tab(NewTab::new())
}
