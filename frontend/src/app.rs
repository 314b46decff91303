use crate::footer::Footer;
use crate::navbar::Navbar;
use crate::sections::{about, contact, hero, portfolio, services};
use crate::smooth_scroll::{SmoothScroll, WindowWheelListener};
use crate::theme::Theme;
use capable_site::SiteConfig;
use std::rc::Rc;
use zoon::{eprintln, *};

/// What every part of the page shares.
#[derive(Clone)]
pub struct Site {
    pub config: Rc<SiteConfig>,
    pub theme: Theme,
    pub scroller: SmoothScroll,
}

impl Site {
    pub(crate) fn load() -> Self {
        let config = SiteConfig::embedded().unwrap_or_else(|error| {
            eprintln!("[config] {error}; using built-in defaults");
            SiteConfig::default()
        });
        Self {
            theme: Theme::load(),
            scroller: SmoothScroll::new(
                config.motion.smooth_scroll_duration_ms,
                config.motion.wheel_multiplier,
            ),
            config: Rc::new(config),
        }
    }
}

#[derive(Clone)]
pub struct App {
    site: Site,
    wheel_listener: Rc<Option<WindowWheelListener>>,
}

impl App {
    pub fn new() -> impl Element {
        let site = Site::load();
        let wheel_listener = site.scroller.listen_to_wheel();
        if wheel_listener.is_none() {
            eprintln!("[scroll] Failed to listen to the mouse wheel");
        }
        Self {
            site,
            wheel_listener: Rc::new(wheel_listener),
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        let wheel_listener = self.wheel_listener.clone();
        Column::new()
            .s(Width::fill())
            .s(Font::new().family([FontFamily::new("Inter"), FontFamily::SansSerif]))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr_signal("data-theme", theme.mode_signal().map(|mode| mode.as_str()))
                    .style("min-height", "100vh")
                    .style("overflow-x", "hidden")
                    .style("transition", "background-color 300ms ease, color 300ms ease")
                    .style_signal("background-color", theme.color(|palette| palette.background))
                    .style_signal("color", theme.color(|palette| palette.foreground))
            })
            .item(Navbar::new(&self.site))
            .item(
                Column::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| raw_el.attr("role", "main"))
                    .item(hero::hero(&self.site))
                    .item(services::services(&self.site))
                    .item(about::about(&self.site))
                    .item(portfolio::Portfolio::new(&self.site))
                    .item(contact::Contact::new(&self.site)),
            )
            .item(Footer::new(&self.site))
            .after_remove(move |_| drop(wheel_listener))
    }
}
