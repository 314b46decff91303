use crate::FRAME_MS;
use crate::app::Site;
use crate::sections::services::highlight_tile;
use crate::widgets::{
    animated, call_to_action, card, heading, icon_glyph, reveals, section_intro, section_shell,
    subheading, themed_text, wrap_grid,
};
use capable_site::contact::{
    ContactForm, FormField, InputKind, SubmissionTimeline, Ulid, choice_option, choice_value,
};
use capable_site::content::{
    CONTACT_CHANNELS, CONTACT_CHANNELS_HEADING, CONTACT_CTA, CONTACT_FEATURES,
    CONTACT_FEATURES_HEADING, CONTACT_FORM_HEADING, CONTACT_INTRO, CONTACT_SOCIALS,
    CONTACT_SUCCESS, ContactChannel, Icon, SocialLink,
};
use capable_site::error::FormError;
use capable_site::motion::Entrance;
use capable_site::navigation::Section;
use std::cell::RefCell;
use std::rc::Rc;
use zoon::{eprintln, *};

#[derive(Clone)]
pub struct Contact {
    site: Site,
    form: Mutable<ContactForm>,
    error: Mutable<Option<FormError>>,
    delivery: Rc<RefCell<Option<TaskHandle>>>,
}

impl Contact {
    pub fn new(site: &Site) -> impl Element + use<> {
        Self {
            site: site.clone(),
            form: Mutable::new(ContactForm::new()),
            error: Mutable::new(None),
            delivery: Rc::new(RefCell::new(None)),
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        let this = self.clone();
        let delivery = self.delivery.clone();
        section_shell(
            Section::Contact,
            &self.site.theme,
            true,
            Column::new()
                .s(Width::fill())
                .item(section_intro(&self.site, &CONTACT_INTRO))
                .item(El::new().s(Width::fill()).child_signal(
                    self.form
                        .signal_ref(ContactForm::is_submitted)
                        .dedupe()
                        .map(move |submitted| {
                            if submitted {
                                this.thank_you().unify()
                            } else {
                                this.form_and_channels().unify()
                            }
                        }),
                ))
                .after_remove(move |_| drop(delivery.borrow_mut().take())),
        )
    }

    /// Ignored while a submission is in flight or the success panel shows.
    fn submit(&self) {
        let result = {
            let mut form = self.form.lock_mut();
            if form.is_submitting() || form.is_submitted() {
                return;
            }
            form.submit()
        };
        match result {
            Ok(receipt) => {
                self.error.set(None);
                self.start_delivery(receipt);
            }
            Err(error) => {
                eprintln!("[contact] {error}");
                self.error.set(error.needs_input().then_some(error));
            }
        }
    }

    fn start_delivery(&self, receipt: Ulid) {
        let timeline = SubmissionTimeline::from(&self.site.config.contact);
        let form = self.form.clone();
        let task = Task::start_droppable(async move {
            let mut step = Some(timeline.first_step(receipt));
            while let Some((delay_ms, event)) = step {
                Timer::sleep(u32::try_from(delay_ms).unwrap_or(u32::MAX)).await;
                step = match timeline.apply(&mut form.lock_mut(), event) {
                    Ok(next) => next,
                    Err(error) => {
                        eprintln!("[contact] {error}");
                        None
                    }
                };
            }
        });
        self.delivery.replace(Some(task));
    }

    fn set_field(&self, field: FormField, value: String) {
        if self.form.lock_mut().set_field(field, value) {
            self.error.set_neq(None);
        }
    }

    fn field_signal(&self, field: FormField) -> impl Signal<Item = String> + use<> {
        self.form
            .signal_ref(move |form| form.fields().get(field).to_owned())
            .dedupe_cloned()
    }

    fn form_and_channels(&self) -> impl Element + use<> {
        let revealed = Mutable::new(false);
        Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::both(48))
            .s(Align::new().top())
            .update_raw_el(reveals(&self.site, &revealed))
            .item(
                El::new()
                    .update_raw_el(|raw_el| raw_el.style("flex", "2 1 480px"))
                    .child(animated(Entrance::slide_left(), 0, &revealed, self.form_card())),
            )
            .item(
                El::new()
                    .update_raw_el(|raw_el| raw_el.style("flex", "1 1 320px"))
                    .child(animated(Entrance::slide_right(), 0, &revealed, self.channels())),
            )
            .item(
                El::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| raw_el.style("flex", "1 1 100%"))
                    .child(self.features()),
            )
            .item(
                El::new()
                    .s(Width::fill())
                    .update_raw_el(|raw_el| raw_el.style("flex", "1 1 100%"))
                    .child(call_to_action(&self.site, &CONTACT_CTA)),
            )
    }

    fn form_card(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        let pairs = [
            [FormField::Name, FormField::Email],
            [FormField::Company, FormField::Phone],
            [FormField::Service, FormField::Budget],
        ];
        card(
            theme,
            Column::new()
                .s(Gap::new().y(24))
                .s(Padding::all(8))
                .item(heading(theme, CONTACT_FORM_HEADING.title, 24))
                .item(themed_text(theme, CONTACT_FORM_HEADING.subtitle, 16, |palette| palette.muted))
                .items(
                    pairs
                        .into_iter()
                        .map(|fields| wrap_grid(240, 24, fields.into_iter().map(|field| self.field(field)))),
                )
                .item(self.field(FormField::Timeline))
                .item(self.field(FormField::Message))
                .item_signal(self.error.signal_ref(|error| {
                    error.as_ref().and_then(alert_text).map(|text| {
                        Paragraph::new()
                            .s(Font::new().size(14).weight(FontWeight::Medium).color(color!("#ef4444")))
                            .update_raw_el(|raw_el| raw_el.attr("role", "alert"))
                            .content(text)
                    })
                }))
                .item(self.submit_button()),
        )
    }

    fn field(&self, field: FormField) -> impl Element + use<> {
        let theme = &self.site.theme;
        let input = match field.input_kind() {
            InputKind::Text => self.text_input(field, "text").unify(),
            InputKind::Email => self.text_input(field, "email").unify(),
            InputKind::Tel => self.text_input(field, "tel").unify(),
            InputKind::Choice(options) => self.choices(field, options).unify(),
            InputKind::Multiline => self.textarea(field).unify(),
        };
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(8))
            .item(
                Label::new()
                    .s(Font::new().size(14).weight(FontWeight::Medium))
                    .update_raw_el(|raw_el| {
                        raw_el.style_signal("color", theme.color(|palette| palette.foreground))
                    })
                    .for_input(field_id(field))
                    .label(field.caption()),
            )
            .item(input)
    }

    fn text_input(&self, field: FormField, input_type: &'static str) -> impl Element + use<> {
        let this = self.clone();
        TextInput::new()
            .s(Width::fill())
            .s(Padding::new().x(16).y(12))
            .s(RoundedCorners::all(8))
            .update_raw_el(|raw_el| {
                let raw_el = raw_el.attr("type", input_type);
                field_colors(&self.site, raw_el)
            })
            .id(field_id(field))
            .label_hidden(field.label())
            .placeholder(Placeholder::new(field.placeholder()))
            .text_signal(self.field_signal(field))
            .on_change(move |text| this.set_field(field, text))
    }

    fn textarea(&self, field: FormField) -> impl Element + use<> {
        let this = self.clone();
        let raw_el = RawHtmlEl::<web_sys::HtmlElement>::new("textarea")
            .attr("id", &field_id(field))
            .attr("rows", "4")
            .attr("placeholder", field.placeholder())
            .attr("aria-label", field.label())
            .style("width", "100%")
            .style("padding", "12px 16px")
            .style("border-radius", "8px")
            .style("resize", "none")
            .style("font", "inherit")
            .prop_signal("value", self.field_signal(field))
            .event_handler(move |event: events::Input| {
                if let Some(textarea) = event.dyn_target::<web_sys::HtmlTextAreaElement>() {
                    this.set_field(field, textarea.value());
                }
            });
        field_colors(&self.site, raw_el)
    }

    /// One pill per option; the selected one is filled.
    fn choices(&self, field: FormField, options: &'static [&'static str]) -> impl Element + use<> {
        let selected = self
            .field_signal(field)
            .map(move |value| choice_option(options, &value))
            .broadcast();
        Row::new()
            .multiline()
            .s(Gap::both(8))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("id", &field_id(field))
                    .attr("role", "radiogroup")
                    .attr("aria-label", field.label())
            })
            .items(options.iter().map(|option| {
                let option = *option;
                let this = self.clone();
                let theme = &self.site.theme;
                let is_selected = selected.signal().map(move |selected| selected == Some(option)).broadcast();
                Button::new()
                    .s(Padding::new().x(14).y(8))
                    .s(RoundedCorners::all(999))
                    .s(Font::new().size(14).no_wrap())
                    .update_raw_el(|raw_el| {
                        raw_el
                            .attr("role", "radio")
                            .attr_signal(
                                "aria-checked",
                                is_selected.signal().map_bool(|| "true", || "false"),
                            )
                            .style("transition", "background-color 200ms ease, color 200ms ease")
                            .style_signal(
                                "border",
                                theme.color(|palette| palette.border).map(|color| format!("1px solid {color}")),
                            )
                            .style_signal(
                                "background-color",
                                map_ref! {
                                    let primary = theme.color(|palette| palette.primary),
                                    let background = theme.color(|palette| palette.background),
                                    let selected = is_selected.signal() =>
                                    if *selected { *primary } else { *background }
                                },
                            )
                            .style_signal(
                                "color",
                                map_ref! {
                                    let on_primary = theme.color(|palette| palette.primary_foreground),
                                    let foreground = theme.color(|palette| palette.foreground),
                                    let selected = is_selected.signal() =>
                                    if *selected { *on_primary } else { *foreground }
                                },
                            )
                    })
                    .label(option)
                    .on_press(move || this.set_field(field, choice_value(option)))
            }))
    }

    fn submit_button(&self) -> impl Element + use<> {
        let this = self.clone();
        let theme = &self.site.theme;
        let submitting = self.form.signal_ref(ContactForm::is_submitting).dedupe().broadcast();
        Button::new()
            .s(Width::fill())
            .s(Padding::new().y(16))
            .s(RoundedCorners::all(12))
            .s(Font::new().size(18).weight(FontWeight::SemiBold).center())
            .update_raw_el(|raw_el| {
                raw_el
                    .attr_signal("aria-busy", submitting.signal().map_bool(|| "true", || "false"))
                    .attr_signal("aria-disabled", submitting.signal().map_true(|| "true"))
                    .attr_signal("disabled", submitting.signal().map_true(|| "true"))
                    .style_signal("opacity", submitting.signal().map_bool(|| "0.7", || "1"))
                    .style_signal("cursor", submitting.signal().map_bool(|| "wait", || "pointer"))
                    .style_signal("color", theme.color(|palette| palette.primary_foreground))
                    .style_signal("background-color", theme.color(|palette| palette.primary))
            })
            .label_signal(submitting.signal().map(|submitting| {
                let label = if submitting { "Sending Message..." } else { "Send Message" };
                Row::new()
                    .s(Align::new().center_x())
                    .s(Gap::new().x(8))
                    .item(if submitting { spinner().unify() } else { icon_glyph(Icon::Send, 18).unify() })
                    .item(label)
            }))
            .on_press(move || this.submit())
    }

    fn channels(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(24))
            .item(heading(theme, CONTACT_CHANNELS_HEADING.title, 24))
            .item(themed_text(theme, CONTACT_CHANNELS_HEADING.subtitle, 16, |palette| palette.muted))
            .items(CONTACT_CHANNELS.iter().map(|channel| channel_card(&self.site, channel)))
            .item(
                Column::new()
                    .s(Gap::new().y(12))
                    .item(heading(theme, "Follow Us", 18))
                    .item(
                        Row::new()
                            .s(Gap::new().x(12))
                            .items(CONTACT_SOCIALS.iter().map(|social| social_link(&self.site, social))),
                    ),
            )
    }

    fn features(&self) -> impl Element + use<> {
        let revealed = Mutable::new(false);
        let entrance = Entrance::pop().with_stagger(100);
        Column::new()
            .s(Width::fill())
            .s(Padding::new().top(64))
            .update_raw_el(reveals(&self.site, &revealed))
            .item(subheading(&self.site.theme, &CONTACT_FEATURES_HEADING))
            .item(wrap_grid(
                220,
                24,
                CONTACT_FEATURES.iter().enumerate().map(|(index, feature)| {
                    animated(entrance, index, &revealed, highlight_tile(&self.site, feature))
                }),
            ))
    }

    fn thank_you(&self) -> impl Element + use<> {
        let theme = &self.site.theme;
        let shown = Mutable::new(false);
        let show_task = Task::start_droppable({
            let shown = shown.clone();
            async move {
                Timer::sleep(FRAME_MS).await;
                shown.set(true);
            }
        });
        El::new()
            .s(Width::fill().max(640))
            .s(Align::new().center_x())
            .update_raw_el(|raw_el| raw_el.attr("role", "status"))
            .child(animated(
                Entrance::pop().with_duration(500),
                0,
                &shown,
                card(
                    theme,
                    Column::new()
                        .s(Gap::new().y(24))
                        .s(Padding::all(24))
                        .s(Font::new().center())
                        .item(
                            El::new()
                                .s(Width::exact(80))
                                .s(Height::exact(80))
                                .s(RoundedCorners::all(999))
                                .s(Align::new().center_x())
                                .s(Font::new().color(color!("#ffffff")))
                                .update_raw_el(|raw_el| raw_el.style("background-color", "#22c55e"))
                                .child(El::new().s(Align::center()).child(icon_glyph(Icon::CheckCircle, 40))),
                        )
                        .item(El::new().s(Align::new().center_x()).child(heading(theme, CONTACT_SUCCESS.title, 30)))
                        .item(themed_text(theme, CONTACT_SUCCESS.subtitle, 18, |palette| palette.muted)),
                ),
            ))
            .after_remove(move |_| drop(show_task))
    }
}

fn field_id(field: FormField) -> String {
    format!("contact-{}", field.label().to_lowercase().replace(' ', "-"))
}

/// Text of the inline alert; busy-state refusals are never shown.
fn alert_text(error: &FormError) -> Option<String> {
    match error {
        FormError::MissingRequired(fields) => {
            let labels = fields.iter().map(|field| field.label()).collect::<Vec<_>>();
            Some(format!("Please fill in: {}.", labels.join(", ")))
        }
        FormError::InvalidEmail(_) => Some("Please enter a valid email address.".to_owned()),
        FormError::AlreadySubmitting
        | FormError::AlreadySubmitted
        | FormError::NoPendingSubmission(_) => None,
    }
}

fn field_colors<T: RawEl>(site: &Site, raw_el: T) -> T {
    raw_el
        .style("outline", "none")
        .style_signal("color", site.theme.color(|palette| palette.foreground))
        .style_signal("background-color", site.theme.color(|palette| palette.background))
        .style_signal(
            "border",
            site.theme
                .color(|palette| palette.border)
                .map(|color| format!("1px solid {color}")),
        )
}

/// Rotating ring shown while the message is on its way.
fn spinner() -> impl Element {
    let angle = Mutable::new(0_u32);
    let spin_task = Task::start_droppable({
        let angle = angle.clone();
        async move {
            loop {
                Timer::sleep(FRAME_MS).await;
                angle.update(|angle| (angle + 12) % 360);
            }
        }
    });
    El::new()
        .s(Width::exact(18))
        .s(Height::exact(18))
        .s(RoundedCorners::all(999))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("aria-hidden", "true")
                .style("border", "2px solid rgba(255, 255, 255, 0.35)")
                .style("border-top-color", "#ffffff")
                .style_signal("transform", angle.signal().map(|angle| format!("rotate({angle}deg)")))
        })
        .after_remove(move |_| drop(spin_task))
}

fn channel_card(site: &Site, channel: &'static ContactChannel) -> impl Element + use<> {
    let theme = &site.theme;
    card(
        theme,
        Row::new()
            .s(Gap::new().x(16))
            .s(Align::new().top())
            .item(
                El::new()
                    .s(Width::exact(48))
                    .s(Height::exact(48))
                    .s(RoundedCorners::all(12))
                    .update_raw_el(|raw_el| {
                        raw_el
                            .style("flex-shrink", "0")
                            .style_signal("color", theme.color(|palette| palette.primary))
                            .style_signal(
                                "background-color",
                                theme
                                    .color(|palette| palette.primary)
                                    .map(|color| format!("color-mix(in srgb, {color} 12%, transparent)")),
                            )
                    })
                    .child(El::new().s(Align::center()).child(icon_glyph(channel.icon, 24))),
            )
            .item(
                Column::new()
                    .s(Gap::new().y(4))
                    .item(heading(theme, channel.title, 18))
                    .items(
                        channel
                            .details
                            .iter()
                            .map(|line| themed_text(theme, *line, 16, |palette| palette.foreground)),
                    )
                    .item(themed_text(theme, channel.description, 14, |palette| palette.muted)),
            ),
    )
}

fn social_link(site: &Site, social: &'static SocialLink) -> impl Element + use<> {
    let theme = &site.theme;
    let hovered = Mutable::new(false);
    let hovered_signal = hovered.signal().broadcast();
    Link::new()
        .s(Width::exact(44))
        .s(Height::exact(44))
        .s(RoundedCorners::all(12))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("aria-label", social.label)
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("transition", "transform 200ms ease")
                .style_signal(
                    "transform",
                    hovered_signal.signal().map_bool(|| "scale(1.1)", || "scale(1)"),
                )
                .style_signal("color", theme.color(|palette| palette.primary))
                .style_signal(
                    "background-color",
                    map_ref! {
                        let color = theme.color(|palette| palette.primary),
                        let hovered = hovered_signal.signal() => {
                            let percent = if *hovered { 24 } else { 12 };
                            format!("color-mix(in srgb, {color} {percent}%, transparent)")
                        }
                    },
                )
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(icon_glyph(social.icon, 20))
        .to(social.href)
        .new_tab(NewTab::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn busy_form_errors_raise_no_alert() {
        assert_eq!(alert_text(&FormError::AlreadySubmitting), None);
        assert_eq!(alert_text(&FormError::AlreadySubmitted), None);
    }

    #[wasm_bindgen_test]
    fn second_submit_while_sending_is_ignored() {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "Ada Lovelace");
        form.set_field(FormField::Email, "ada@engines.io");
        form.set_field(FormField::Service, choice_value("Web Development"));
        form.set_field(FormField::Message, "A new storefront.");
        let error = Mutable::new(None);
        let contact = Contact {
            site: Site::load(),
            form: Mutable::new(form),
            error: error.clone(),
            delivery: Rc::new(RefCell::new(None)),
        };
        contact.submit();
        assert!(contact.form.lock_ref().is_submitting());
        contact.submit();
        assert!(contact.form.lock_ref().is_submitting());
        assert_eq!(error.get_cloned(), None);
    }

    #[wasm_bindgen_test]
    fn missing_fields_are_listed_in_the_alert() {
        let text = alert_text(&FormError::MissingRequired(vec![FormField::Name, FormField::Email]));
        assert_eq!(text.as_deref(), Some("Please fill in: Full Name, Email Address."));
    }
}
