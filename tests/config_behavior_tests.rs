use std::cell::RefCell;
use std::rc::Rc;

use star_rating::RatingError;
use star_rating::api::{RatingConfig, RatingControl};
use star_rating::events::{HoverPhase, RatingContext, RatingEvent, RatingListener};
use star_rating::render::NullSurface;

struct RecordingListener {
    events: Rc<RefCell<Vec<RatingEvent>>>,
}

impl RatingListener for RecordingListener {
    fn id(&self) -> &str {
        "config-recorder"
    }

    fn on_event(&mut self, event: RatingEvent, _context: RatingContext) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn defaults_match_documented_values() {
    let config = RatingConfig::default();
    assert_eq!(config.label, "");
    assert_eq!(config.value, 0.0);
    assert_eq!(config.max, 5);
    assert_eq!(config.precision, 1.0);
    assert!(!config.readonly);
    assert!(!config.disabled);
    assert!(config.is_interactive());
}

#[test]
fn partial_json_config_fills_defaults() {
    let config: RatingConfig =
        serde_json::from_str(r#"{"label":"Quality","precision":0.5}"#).expect("parse config");
    assert_eq!(config.label, "Quality");
    assert_eq!(config.precision, 0.5);
    assert_eq!(config.max, 5);
    assert_eq!(config.value, 0.0);
}

#[test]
fn invalid_configs_are_rejected_at_construction() {
    let err = RatingControl::new(NullSurface::default(), RatingConfig::default().with_max(0))
        .err()
        .expect("zero max must fail");
    assert!(matches!(err, RatingError::InvalidConfig(_)));

    let err = RatingControl::new(
        NullSurface::default(),
        RatingConfig::default().with_precision(0.0),
    )
    .err()
    .expect("zero precision must fail");
    assert!(format!("{err}").contains("precision"));
}

#[test]
fn initial_value_is_clamped_into_range() {
    let control = RatingControl::new(NullSurface::default(), RatingConfig::default().with_value(9.0))
        .expect("control init");
    assert_eq!(control.value(), 5.0);

    let control = RatingControl::new(
        NullSurface::default(),
        RatingConfig::default().with_value(-0.0),
    )
    .expect("control init");
    assert!(control.value().is_sign_positive());
}

#[test]
fn rejected_setters_leave_config_untouched() {
    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default()).expect("control init");

    assert!(control.set_precision(-1.0).is_err());
    assert!(control.set_max(0).is_err());
    assert!(
        control
            .set_config(RatingConfig::default().with_max(8).with_precision(f64::NAN))
            .is_err()
    );

    assert_eq!(control.precision(), 1.0);
    assert_eq!(control.max(), 5);
}

#[test]
fn lowering_max_clamps_value_and_hover_without_value_change() {
    let mut control = RatingControl::new(
        NullSurface::default(),
        RatingConfig::default().with_value(5.0),
    )
    .expect("control init");
    let events = Rc::new(RefCell::new(Vec::new()));
    control
        .register_listener(Box::new(RecordingListener {
            events: events.clone(),
        }))
        .expect("register listener");
    control.pointer_enter(90.0);
    events.borrow_mut().clear();

    control.set_max(3).expect("set max");

    assert_eq!(control.value(), 3.0);
    assert_eq!(control.hover_value(), 3.0);
    assert_eq!(
        *events.borrow(),
        vec![RatingEvent::hover(HoverPhase::Move, 3.0)]
    );
}

#[test]
fn assign_value_is_silent_and_clamped() {
    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default()).expect("control init");
    let events = Rc::new(RefCell::new(Vec::new()));
    control
        .register_listener(Box::new(RecordingListener {
            events: events.clone(),
        }))
        .expect("register listener");

    control.assign_value(3.0);
    assert_eq!(control.value(), 3.0);
    control.assign_value(12.0);
    assert_eq!(control.value(), 5.0);
    control.assign_value(f64::NAN);
    assert_eq!(control.value(), 0.0);

    assert!(events.borrow().is_empty());
}

#[test]
fn assign_value_then_same_click_still_toggles() {
    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default()).expect("control init");

    control.assign_value(3.0);
    control.click(50.0);

    assert_eq!(control.value(), 0.0);
}

#[test]
fn becoming_readonly_while_hovering_ends_hover() {
    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default()).expect("control init");
    let events = Rc::new(RefCell::new(Vec::new()));
    control
        .register_listener(Box::new(RecordingListener {
            events: events.clone(),
        }))
        .expect("register listener");
    control.pointer_enter(50.0);
    events.borrow_mut().clear();

    control.set_readonly(true);
    control.pointer_move(90.0);

    assert!(!control.is_hovering());
    assert_eq!(control.hover_value(), 3.0);
    assert_eq!(
        *events.borrow(),
        vec![RatingEvent::hover(HoverPhase::End, 3.0)]
    );
}

#[test]
fn set_config_applies_all_fields_and_reports_value() {
    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default()).expect("control init");

    control
        .set_config(
            RatingConfig::default()
                .with_label("Service")
                .with_max(10)
                .with_precision(0.5)
                .with_value(7.5)
                .with_readonly(true),
        )
        .expect("set config");

    let config = control.config();
    assert_eq!(config.label, "Service");
    assert_eq!(config.max, 10);
    assert_eq!(config.precision, 0.5);
    assert_eq!(config.value, 7.5);
    assert!(config.readonly);
    assert!(!control.is_interactive());
}

#[test]
fn config_value_tracks_committed_value() {
    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default()).expect("control init");

    control.click(50.0);

    assert_eq!(control.config().value, 3.0);
}

#[test]
fn focus_and_blur_delegate_to_surface() {
    let mut control = RatingControl::new(
        NullSurface::default(),
        RatingConfig::default().with_label("Test"),
    )
    .expect("control init");

    control.focus();
    assert!(control.surface().focused);

    control.blur();
    assert!(!control.surface().focused);
}

#[test]
fn default_tracing_is_a_no_op_without_telemetry_feature() {
    #[cfg(not(feature = "telemetry"))]
    assert!(!star_rating::telemetry::init_default_tracing());
}
