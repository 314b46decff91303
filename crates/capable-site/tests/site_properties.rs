//! End-to-end checks of the page behaviors that do not need a browser.

use capable_site::beams::{initial_spawn_offsets, BeamField};
use capable_site::clock::VirtualClock;
use capable_site::contact::{
    choice_value, ContactForm, FormField, SubmissionEvent, SubmissionPhase, SubmissionTimeline,
};
use capable_site::content::PROJECTS;
use capable_site::navigation::{NavigationState, Section};
use capable_site::portfolio::{filter_projects, CategoryFilter, ProjectTag};
use capable_site::{FormError, SiteConfig};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(FormField::Name, "Grace Hopper");
    form.set_field(FormField::Email, "grace@navy.mil");
    form.set_field(FormField::Company, "Navy");
    form.set_field(FormField::Service, choice_value("App Development"));
    form.set_field(FormField::Message, "Compiler tooling.");
    form
}

/// Runs the virtual clock like the browser runs the form's timer task.
fn drive(
    clock: &mut VirtualClock<SubmissionEvent>,
    timeline: SubmissionTimeline,
    form: &mut ContactForm,
    ms: u64,
) {
    clock.advance_with(ms, |clock, event| {
        if let Ok(Some((delay_ms, next))) = timeline.apply(form, event) {
            clock.schedule_once(delay_ms, next);
        }
    });
}

#[test]
fn each_category_filter_returns_only_tagged_projects() {
    for tag in ProjectTag::ALL {
        for project in filter_projects(&PROJECTS, CategoryFilter::Tag(tag)) {
            assert!(project.tags.contains(&tag), "{} lacks {tag:?}", project.id);
        }
    }
}

#[test]
fn union_of_category_filters_equals_all() {
    let mut union = ProjectTag::ALL
        .into_iter()
        .flat_map(|tag| filter_projects(&PROJECTS, CategoryFilter::Tag(tag)))
        .map(|project| project.id)
        .collect::<Vec<_>>();
    union.sort_unstable();
    union.dedup();

    let mut all = filter_projects(&PROJECTS, CategoryFilter::All)
        .into_iter()
        .map(|project| project.id)
        .collect::<Vec<_>>();
    all.sort_unstable();

    assert_eq!(union, all);
}

#[test]
fn all_filter_returns_six_projects_in_source_order() {
    let all = filter_projects(&PROJECTS, CategoryFilter::All);
    assert_eq!(all.len(), 6);
    for (shown, source) in all.iter().zip(PROJECTS.iter()) {
        assert_eq!(shown.id, source.id);
    }
}

#[test]
fn accepted_submission_succeeds_then_resets_to_blank() {
    init_logger();
    let config = SiteConfig::embedded().unwrap();
    let timeline = SubmissionTimeline::from(&config.contact);
    let mut clock = VirtualClock::new();
    let mut form = filled_form();

    let receipt = form.submit().unwrap();
    timeline.schedule(&mut clock, receipt);
    assert_eq!(form.phase(), SubmissionPhase::Submitting { receipt });

    drive(&mut clock, timeline, &mut form, 1999);
    assert!(form.is_submitting());

    drive(&mut clock, timeline, &mut form, 1);
    assert_eq!(form.phase(), SubmissionPhase::Submitted { receipt });

    drive(&mut clock, timeline, &mut form, 2999);
    assert!(form.is_submitted());

    drive(&mut clock, timeline, &mut form, 1);
    assert_eq!(form, ContactForm::new());
    assert!(!clock.has_pending_timers());
}

#[test]
fn whole_submission_fits_in_one_advance() {
    let timeline = SubmissionTimeline::default();
    let mut clock = VirtualClock::new();
    let mut form = filled_form();
    let receipt = form.submit().unwrap();
    timeline.schedule(&mut clock, receipt);

    drive(&mut clock, timeline, &mut form, 5000);
    assert_eq!(form.phase(), SubmissionPhase::Editing);
    assert!(form.fields().name.is_empty());
}

#[test]
fn missing_required_field_keeps_the_form_editing() {
    for field in [FormField::Name, FormField::Email, FormField::Service, FormField::Message] {
        let mut form = filled_form();
        form.set_field(field, "");
        assert_eq!(
            form.submit(),
            Err(FormError::MissingRequired(vec![field])),
            "{field:?}"
        );
        assert_eq!(form.phase(), SubmissionPhase::Editing);
    }
}

#[test]
fn optional_fields_may_stay_empty() {
    let mut form = filled_form();
    form.set_field(FormField::Company, "");
    form.set_field(FormField::Phone, "");
    form.set_field(FormField::Budget, "");
    form.set_field(FormField::Timeline, "");
    assert!(form.submit().is_ok());
}

#[test]
fn unmounting_cancels_the_pending_reset() {
    let timeline = SubmissionTimeline::default();
    let mut clock = VirtualClock::new();
    let mut form = filled_form();
    let receipt = form.submit().unwrap();
    timeline.schedule(&mut clock, receipt);
    drive(&mut clock, timeline, &mut form, 2000);
    assert!(form.is_submitted());

    clock.cancel_all();
    drive(&mut clock, timeline, &mut form, 60_000);
    assert!(form.is_submitted());
}

#[test]
fn menu_toggle_twice_is_the_initial_state() {
    let initial = NavigationState::new();
    let mut nav = initial;
    nav.toggle_menu();
    nav.toggle_menu();
    assert_eq!(nav, initial);
    assert!(!nav.is_menu_open());
}

#[test]
fn unknown_anchor_is_not_a_section() {
    assert!("#team".parse::<Section>().is_err());
    assert_eq!("#contact".parse::<Section>(), Ok(Section::Contact));
}

#[test]
fn beam_schedule_keeps_the_field_bounded() {
    init_logger();
    let config = SiteConfig::embedded().unwrap().beams;

    #[derive(Clone)]
    enum BeamEvent {
        Spawn,
    }

    let mut clock = VirtualClock::new();
    for offset in initial_spawn_offsets(config.initial_count, config.initial_stagger_ms) {
        clock.schedule_once(offset, BeamEvent::Spawn);
    }
    clock.schedule_repeating(u64::from(config.spawn_interval_ms), BeamEvent::Spawn);

    let mut rng = SmallRng::seed_from_u64(2024);
    let mut field = BeamField::new();
    let mut spawned = 0;
    for _ in 0..60 {
        clock.advance_with(100, |clock, BeamEvent::Spawn| {
            field.spawn(clock.now_ms() as f64, &mut rng);
            spawned += 1;
        });
        field.expire(clock.now_ms() as f64);
    }

    // 15 at start, then one every 500ms over six seconds.
    assert_eq!(spawned, 15 + 12);
    assert!(field.live().len() < spawned);
    assert!(field
        .live()
        .iter()
        .all(|beam| beam.expires_at_ms() > clock.now_ms() as f64));
}
