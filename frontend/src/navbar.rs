use crate::FRAME_MS;
use crate::app::Site;
use crate::widgets::{icon_glyph, primary_button, themed_text};
use capable_site::content::{Icon, NAV_LINKS, NAV_SERVICES, NavLink};
use capable_site::motion::Entrance;
use capable_site::navigation::{NavigationState, ScrollRequest, Section};
use capable_site::theme::ThemeMode;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::*;

/// Below this width the links collapse into the menu panel.
const DESKTOP_MIN_WIDTH: u32 = 1024;
/// Below this width "Get Started" moves into the menu panel.
const WIDE_MIN_WIDTH: u32 = 640;

/// Calls back with `window.scrollY` on every scroll; unregisters on drop.
struct WindowScrollListener {
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowScrollListener {
    fn new(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                on_scroll(window.scroll_y().unwrap_or_default());
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for WindowScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}

#[derive(Clone)]
pub struct Navbar {
    site: Site,
    state: Mutable<NavigationState>,
    services_open: Mutable<bool>,
    viewport_width: Mutable<u32>,
    mounted: Mutable<bool>,
    _scroll_listener: Rc<Option<WindowScrollListener>>,
}

impl Navbar {
    pub fn new(site: &Site) -> impl Element {
        let threshold_px = site.config.navigation.scrolled_threshold_px;
        let mut initial = NavigationState::new();
        if let Some(window) = web_sys::window() {
            initial.on_scroll(window.scroll_y().unwrap_or_default(), threshold_px);
        }
        let state = Mutable::new(initial);
        let scroll_listener = WindowScrollListener::new({
            let state = state.clone();
            move |offset_y| {
                let mut next = state.get();
                if next.on_scroll(offset_y, threshold_px) {
                    state.set(next);
                }
            }
        });
        if scroll_listener.is_none() {
            zoon::eprintln!("[navbar] Failed to listen to window scroll");
        }
        Self {
            site: site.clone(),
            state,
            services_open: Mutable::new(false),
            viewport_width: Mutable::new(DESKTOP_MIN_WIDTH),
            mounted: Mutable::new(false),
            _scroll_listener: Rc::new(scroll_listener),
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        let this = self.clone();
        let theme = &self.site.theme;
        let scrolled = self.state.signal().map(|state| state.is_scrolled()).dedupe();
        let background = map_ref! {
            let scrolled = scrolled,
            let mode = theme.mode_signal() => if *scrolled { mode.palette().glass } else { "transparent" }
        };
        let slide_in = Entrance::rise(-100.0).with_duration(600);
        El::new()
            .s(Width::fill())
            .on_viewport_size_change({
                let viewport_width = self.viewport_width.clone();
                move |width, _| viewport_width.set_neq(width)
            })
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("role", "navigation")
                    .style("position", "fixed")
                    .style("top", "0")
                    .style("left", "0")
                    .style("z-index", "50")
                    .style("transition", "background-color 300ms ease, transform 600ms ease-out, opacity 600ms ease-out")
                    .style_signal("background-color", background)
                    .style_signal(
                        "backdrop-filter",
                        self.state
                            .signal()
                            .map(|state| state.is_scrolled())
                            .map_bool(|| "blur(12px)", || "none"),
                    )
                    .style_signal(
                        "transform",
                        self.mounted
                            .signal()
                            .map(move |mounted| slide_in.style(0, mounted).transform),
                    )
                    .style_signal(
                        "opacity",
                        self.mounted
                            .signal()
                            .map(move |mounted| slide_in.style(0, mounted).opacity.to_string()),
                    )
            })
            .after_insert({
                let mounted = self.mounted.clone();
                move |_| {
                    Task::start(async move {
                        Timer::sleep(FRAME_MS).await;
                        mounted.set(true);
                    })
                }
            })
            .child(
                Column::new()
                    .s(Width::fill().max(1280))
                    .s(Align::new().center_x())
                    .s(Padding::new().x(16))
                    .item(self.bar())
                    .item_signal(
                        map_ref! {
                            let menu_open = self.state.signal().map(|state| state.is_menu_open()),
                            let is_desktop = self.is_desktop_signal() => *menu_open && !*is_desktop
                        }
                        .dedupe()
                        .map_true(move || this.menu_panel()),
                    ),
            )
    }

    fn is_desktop_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.viewport_width
            .signal()
            .map(|width| width >= DESKTOP_MIN_WIDTH)
            .dedupe()
    }

    fn bar(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        Row::new()
            .s(Width::fill())
            .s(Height::exact(80))
            .s(Align::new().center_y())
            .item(self.brand())
            .item_signal(self.is_desktop_signal().map_true({
                let this = self.clone();
                move || this.desktop_links()
            }))
            .item(
                Row::new()
                    .s(Align::new().right())
                    .s(Gap::new().x(16))
                    .item_signal(self.viewport_width.signal().map(|width| width >= WIDE_MIN_WIDTH).dedupe().map_true({
                        let this = self.clone();
                        move || this.get_started_button()
                    }))
                    .item(self.theme_toggle())
                    .item_signal(self.is_desktop_signal().map_false({
                        let this = self.clone();
                        move || this.menu_toggle()
                    })),
            )
            .update_raw_el(|raw_el| {
                raw_el.style_signal("color", theme.color(|palette| palette.foreground))
            })
    }

    fn brand(&self) -> impl Element + use<> {
        let scroller = self.site.scroller.clone();
        let state = self.state.clone();
        Button::new()
            .s(Font::new().size(24).weight(FontWeight::Bold).no_wrap())
            .update_raw_el(|raw_el| {
                raw_el
                    .style("background", "linear-gradient(90deg, #2563eb, #9333ea)")
                    .style("-webkit-background-clip", "text")
                    .style("background-clip", "text")
                    .style("color", "transparent")
            })
            .label(self.site.config.site.brand.clone())
            .on_press(move || {
                state.update_mut(NavigationState::close_menu);
                scroller.handle(ScrollRequest::Top);
            })
    }

    fn navigate(&self, section: Section) {
        let mut state = self.state.get();
        let request = state.navigate_to(section);
        self.state.set_neq(state);
        self.services_open.set_neq(false);
        self.site.scroller.handle(request);
    }

    fn nav_link_button(&self, link: &'static NavLink) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        let theme = &self.site.theme;
        let this = self.clone();
        Button::new()
            .s(Padding::new().x(12).y(8))
            .s(Font::new().size(16).weight(FontWeight::Medium).no_wrap())
            .update_raw_el(|raw_el| {
                raw_el.style_signal(
                    "color",
                    map_ref! {
                        let hovered = hovered.signal(),
                        let primary = theme.color(|palette| palette.primary),
                        let foreground = theme.color(|palette| palette.foreground) =>
                        if *hovered { *primary } else { *foreground }
                    },
                )
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(link.label)
            .on_press(move || this.navigate(link.section))
    }

    fn desktop_links(&self) -> impl Element + use<> {
        Row::new()
            .s(Align::center())
            .s(Gap::new().x(16))
            .items(NAV_LINKS.iter().map(|link| {
                if link.section == Section::Services {
                    self.services_dropdown(link).unify()
                } else {
                    self.nav_link_button(link).unify()
                }
            }))
    }

    fn services_dropdown(&self, link: &'static NavLink) -> impl Element + use<> {
        let services_open = self.services_open.clone();
        let this = self.clone();
        Column::new()
            .update_raw_el(|raw_el| raw_el.style("position", "relative"))
            .on_hovered_change(move |is_hovered| services_open.set_neq(is_hovered))
            .item(self.nav_link_button(link))
            .item_signal(self.services_open.signal().map_true(move || this.services_panel()))
    }

    fn services_panel(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        Column::new()
            .s(Width::exact(320))
            .s(Padding::all(16))
            .s(Gap::new().y(8))
            .s(RoundedCorners::all(12))
            .s(Shadows::new([
                Shadow::new().color(color!("rgba(0, 0, 0, 0.25)")).y(10).blur(30),
            ]))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("position", "absolute")
                    .style("top", "100%")
                    .style("left", "0")
                    .style_signal("background-color", theme.color(|palette| palette.background))
                    .style_signal(
                        "border",
                        theme
                            .color(|palette| palette.border)
                            .map(|color| format!("1px solid {color}")),
                    )
            })
            .items(NAV_SERVICES.iter().map(|teaser| {
                let this = self.clone();
                Button::new()
                    .s(Width::fill())
                    .s(Padding::all(12))
                    .s(RoundedCorners::all(8))
                    .label(
                        Column::new()
                            .s(Gap::new().y(4))
                            .item(
                                El::new()
                                    .s(Font::new().weight(FontWeight::SemiBold))
                                    .child(teaser.title),
                            )
                            .item(themed_text(theme, teaser.description, 14, |palette| {
                                palette.muted
                            })),
                    )
                    .on_press(move || this.navigate(Section::Services))
            }))
    }

    fn get_started_button(&self) -> impl Element + use<> {
        let this = self.clone();
        primary_button(&self.site.theme, "Get Started", move || {
            this.navigate(Section::Contact)
        })
    }

    fn theme_toggle(&self) -> impl Element + use<> {
        let theme = self.site.theme.clone();
        Button::new()
            .s(Padding::all(8))
            .s(RoundedCorners::all(8))
            .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle theme"))
            .label_signal(self.site.theme.mode_signal().map(|mode| match mode {
                ThemeMode::Dark => icon_glyph(Icon::Sun, 20),
                ThemeMode::Light => icon_glyph(Icon::Moon, 20),
            }))
            .on_press(move || theme.toggle())
    }

    fn menu_toggle(&self) -> impl Element + use<> {
        let state = self.state.clone();
        Button::new()
            .s(Padding::all(8))
            .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle menu"))
            .label_signal(self.state.signal().map(|state| {
                icon_glyph(if state.is_menu_open() { Icon::Close } else { Icon::Menu }, 24)
            }))
            .on_press(move || state.update_mut(NavigationState::toggle_menu))
    }

    fn menu_panel(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        Column::new()
            .s(Width::fill())
            .s(Padding::new().y(16))
            .s(Gap::new().y(8))
            .update_raw_el(|raw_el| {
                raw_el.style_signal(
                    "border-top",
                    theme
                        .color(|palette| palette.border)
                        .map(|color| format!("1px solid {color}")),
                )
            })
            .items(NAV_LINKS.iter().map(|link| self.nav_link_button(link)))
            .item(self.get_started_button())
    }
}
