use crate::FRAME_MS;
use crate::app::Site;
use crate::sections::services::chip;
use crate::widgets::{
    accent, animated, call_to_action, card, heading, icon_glyph, reveals, section_intro,
    section_shell, themed_text, wrap_grid,
};
use capable_site::content::{Icon, PORTFOLIO_CTA, PORTFOLIO_INTRO, PROJECTS, Project};
use capable_site::motion::Entrance;
use capable_site::navigation::Section;
use capable_site::portfolio::{
    CategoryFilter, CategoryTab, PortfolioState, category_tabs, featured_projects,
    filter_projects, visible_technologies,
};
use zoon::*;

const FEATURED_TECHNOLOGIES: usize = 3;
const FEATURED_METRICS: usize = 2;
const GRID_TECHNOLOGIES: usize = 4;

#[derive(Clone)]
pub struct Portfolio {
    site: Site,
    state: Mutable<PortfolioState>,
}

impl Portfolio {
    pub fn new(site: &Site) -> impl Element {
        Self {
            site: site.clone(),
            state: Mutable::new(PortfolioState::new()),
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        section_shell(
            Section::Portfolio,
            &self.site.theme,
            false,
            Column::new()
                .s(Width::fill())
                .item(section_intro(&self.site, &PORTFOLIO_INTRO))
                .item(self.featured())
                .item(self.category_tabs())
                .item(self.project_grid())
                .item(call_to_action(&self.site, &PORTFOLIO_CTA)),
        )
    }

    fn select(&self, filter: CategoryFilter) {
        let mut state = self.state.get();
        if state.select(filter) {
            self.state.set(state);
        }
    }

    fn active_filter_signal(&self) -> impl Signal<Item = CategoryFilter> + use<> {
        self.state.signal().map(|state| state.active()).dedupe()
    }

    fn featured(&self) -> impl Element + use<> {
        let site = &self.site;
        let revealed = Mutable::new(false);
        let entrance = Entrance::rise(50.0).with_duration(600).with_stagger(200);
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(32))
            .s(Padding::new().bottom(64))
            .update_raw_el(reveals(site, &revealed))
            .item(El::new().s(Align::new().center_x()).child(heading(&site.theme, "Featured Projects", 30)))
            .item(wrap_grid(
                300,
                32,
                featured_projects(&PROJECTS)
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| animated(entrance, index, &revealed, featured_card(site, project))),
            ))
    }

    fn category_tabs(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        Row::new()
            .multiline()
            .s(Align::new().center_x())
            .s(Gap::both(4))
            .s(Padding::all(4))
            .s(RoundedCorners::all(12))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("role", "tablist")
                    .style_signal("background-color", theme.color(|palette| palette.surface))
            })
            .items(category_tabs(&PROJECTS).into_iter().map(|tab| self.tab_button(tab)))
    }

    fn tab_button(&self, tab: CategoryTab) -> impl Element + use<> {
        let theme = &self.site.theme;
        let this = self.clone();
        let active = self
            .active_filter_signal()
            .map(move |filter| filter == tab.filter)
            .broadcast();
        Button::new()
            .s(Padding::new().x(16).y(8))
            .s(RoundedCorners::all(8))
            .s(Font::new().size(14).weight(FontWeight::Medium).no_wrap())
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("role", "tab")
                    .attr("data-category", tab.filter.slug())
                    .attr_signal("aria-selected", active.signal().map(|active| active.to_string()))
                    .style("transition", "background-color 200ms ease, color 200ms ease")
                    .style_signal(
                        "background-color",
                        map_ref! {
                            let active = active.signal(),
                            let primary = theme.color(|palette| palette.primary) =>
                            if *active { *primary } else { "transparent" }
                        },
                    )
                    .style_signal(
                        "color",
                        map_ref! {
                            let active = active.signal(),
                            let on_primary = theme.color(|palette| palette.primary_foreground),
                            let foreground = theme.color(|palette| palette.foreground) =>
                            if *active { *on_primary } else { *foreground }
                        },
                    )
            })
            .label(
                Row::new()
                    .s(Gap::new().x(8))
                    .item(tab.label)
                    .item(
                        El::new()
                            .s(Padding::new().x(8).y(2))
                            .s(RoundedCorners::all(999))
                            .s(Font::new().size(12))
                            .update_raw_el(|raw_el| {
                                raw_el.style_signal(
                                    "background-color",
                                    theme.color(|palette| palette.border),
                                )
                            })
                            .child(tab.count.to_string()),
                    ),
            )
            .on_press(move || this.select(tab.filter))
    }

    /// Re-rendered whenever the active filter changes, replaying the
    /// entrance of every card.
    fn project_grid(&self) -> impl Element + use<> {
        let site = self.site.clone();
        El::new()
            .s(Width::fill())
            .s(Padding::new().top(48))
            .child_signal(self.active_filter_signal().map(move |filter| {
                let shown = Mutable::new(false);
                Task::start({
                    let shown = shown.clone();
                    async move {
                        Timer::sleep(FRAME_MS).await;
                        shown.set(true);
                    }
                });
                let entrance = Entrance::pop().with_duration(500).with_stagger(100);
                let projects = filter_projects(&PROJECTS, filter);
                wrap_grid(
                    320,
                    32,
                    projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| animated(entrance, index, &shown, grid_card(&site, project))),
                )
            }))
    }
}

/// Gradient placeholder standing in for the project screenshot.
fn cover(site: &Site, project: &'static Project, height: u32) -> impl Element + use<> {
    let tag_label = project.primary_tag().map(|tag| tag.label()).unwrap_or_default();
    Stack::new()
        .s(Width::fill())
        .s(Height::exact(height))
        .s(RoundedCorners::all(12))
        .update_raw_el(|raw_el| {
            raw_el.style_signal(
                "background",
                site.theme.color(|palette| palette.primary).map(|color| {
                    format!("linear-gradient(135deg, color-mix(in srgb, {color} 25%, transparent), rgba(147, 51, 234, 0.25))")
                }),
            )
        })
        .layer(
            El::new()
                .s(Align::center())
                .s(Font::new().size(48).weight(FontWeight::Bold).color(color!("rgba(255, 255, 255, 0.8)")))
                .child(project.title.chars().next().map(String::from).unwrap_or_default()),
        )
        .layer(
            El::new()
                .s(Align::new().top().left())
                .s(Padding::all(12))
                .child(
                    El::new()
                        .s(Padding::new().x(10).y(4))
                        .s(RoundedCorners::all(999))
                        .s(Font::new().size(12).weight(FontWeight::Medium).color(color!("#ffffff")))
                        .update_raw_el(|raw_el| {
                            raw_el
                                .style("background-color", "rgba(0, 0, 0, 0.35)")
                                .style("backdrop-filter", "blur(8px)")
                        })
                        .child(tag_label),
                ),
        )
}

fn external_link(site: &Site, icon: Icon, label: &'static str, href: &'static str) -> impl Element + use<> {
    Link::new()
        .s(Padding::all(6))
        .s(RoundedCorners::all(8))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("aria-label", label)
                .style_signal("color", site.theme.color(|palette| palette.primary))
        })
        .label(icon_glyph(icon, 16))
        .to(href)
        .new_tab(NewTab::new())
}

fn technology_chips(
    site: &Site,
    project: &'static Project,
    limit: usize,
    count_hidden: bool,
) -> impl Element + use<> {
    let (shown, hidden) = visible_technologies(project, limit);
    let overflow = (count_hidden && hidden > 0).then(|| format!("+{hidden} more"));
    Row::new()
        .multiline()
        .s(Gap::both(8))
        .items(shown.iter().map(|tech| chip(site, *tech)))
        .items(overflow.map(|text| chip(site, text)))
}

fn featured_card(site: &Site, project: &'static Project) -> impl Element + use<> {
    let theme = &site.theme;
    card(
        theme,
        Column::new()
            .s(Gap::new().y(16))
            .item(
                Stack::new()
                    .s(Width::fill())
                    .layer(cover(site, project, 192))
                    .layer(
                        Row::new()
                            .s(Align::new().top().right())
                            .s(Padding::all(12))
                            .s(Gap::new().x(8))
                            .item(
                                El::new()
                                    .s(Padding::new().x(10).y(4))
                                    .s(RoundedCorners::all(999))
                                    .s(Font::new().size(12).weight(FontWeight::SemiBold))
                                    .update_raw_el(|raw_el| {
                                        raw_el
                                            .style_signal("background-color", theme.color(|palette| palette.primary))
                                            .style_signal("color", theme.color(|palette| palette.primary_foreground))
                                    })
                                    .child(project.year.to_string()),
                            ),
                    ),
            )
            .item(
                Row::new()
                    .s(Width::fill())
                    .item(heading(theme, project.title, 20))
                    .item(
                        Row::new()
                            .s(Align::new().right())
                            .items(project.links.live.map(|href| external_link(site, Icon::ExternalLink, "Live site", href)))
                            .items(project.links.source.map(|href| external_link(site, Icon::Github, "Source code", href))),
                    ),
            )
            .item(themed_text(theme, project.description, 14, |palette| palette.muted))
            .item(technology_chips(site, project, FEATURED_TECHNOLOGIES, true))
            .item(
                Column::new()
                    .s(Width::fill())
                    .s(Gap::new().y(12))
                    .items(project.metrics.iter().take(FEATURED_METRICS).map(|metric| {
                        Row::new()
                            .s(Width::fill())
                            .s(Font::new().size(14))
                            .item(
                                Row::new()
                                    .s(Gap::new().x(8))
                                    .update_raw_el(|raw_el| {
                                        raw_el.style_signal("color", theme.color(|palette| palette.muted))
                                    })
                                    .item(icon_glyph(metric.icon, 14))
                                    .item(metric.label),
                            )
                            .item(El::new().s(Align::new().right()).child(accent(theme, metric.value, 14)))
                    })),
            )
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Padding::new().top(16))
                    .update_raw_el(|raw_el| {
                        raw_el.style_signal(
                            "border-top",
                            theme.color(|palette| palette.border).map(|color| format!("1px solid {color}")),
                        )
                    })
                    .item(
                        El::new()
                            .s(Font::new().size(12))
                            .update_raw_el(|raw_el| {
                                raw_el.style_signal("color", theme.color(|palette| palette.muted))
                            })
                            .child(format!("Client: {}", project.client)),
                    )
                    .items(project.links.live.map(|href| {
                        Link::new()
                            .s(Align::new().right())
                            .s(Font::new().size(14).weight(FontWeight::Medium))
                            .update_raw_el(|raw_el| {
                                raw_el.style_signal("color", theme.color(|palette| palette.primary))
                            })
                            .label(
                                Row::new()
                                    .s(Gap::new().x(4))
                                    .item("View Details")
                                    .item(icon_glyph(Icon::ArrowRight, 14)),
                            )
                            .to(href)
                            .new_tab(NewTab::new())
                    })),
            ),
    )
}

fn grid_card(site: &Site, project: &'static Project) -> impl Element + use<> {
    let theme = &site.theme;
    card(
        theme,
        Column::new()
            .s(Gap::new().y(16))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("data-project", project.id)
                    .style("cursor", "pointer")
            })
            .item(cover(site, project, 160))
            .item(heading(theme, project.title, 18))
            .item(
                El::new()
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("display", "-webkit-box")
                            .style("-webkit-line-clamp", "2")
                            .style("-webkit-box-orient", "vertical")
                            .style("overflow", "hidden")
                    })
                    .child(themed_text(theme, project.description, 14, |palette| palette.muted)),
            )
            .item(technology_chips(site, project, GRID_TECHNOLOGIES, false))
            .item(
                Row::new()
                    .s(Width::fill())
                    .item(
                        El::new()
                            .s(Font::new().size(12))
                            .update_raw_el(|raw_el| {
                                raw_el.style_signal("color", theme.color(|palette| palette.muted))
                            })
                            .child(project.year.to_string()),
                    )
                    .item(
                        Row::new()
                            .s(Align::new().right())
                            .s(Gap::new().x(8))
                            .items(project.links.live.map(|href| external_link(site, Icon::ExternalLink, "Live site", href)))
                            .items(project.links.source.map(|href| external_link(site, Icon::Github, "Source code", href))),
                    ),
            ),
    )
}
