use approx::assert_abs_diff_eq;
use star_rating::api::{RatingConfig, RatingControl, build_rating_frame};
use star_rating::icon::{IconRole, RatingIcon};
use star_rating::interaction::RatingState;
use star_rating::render::{NullSurface, RatingClass, SymbolVariant};

#[test]
fn frame_has_one_symbol_per_max() {
    for max in [1, 5, 12] {
        let frame = build_rating_frame(
            RatingState::default(),
            &RatingConfig::default().with_max(max),
        );
        assert_eq!(frame.symbols.len(), max as usize);
        frame.validate().expect("valid frame");
    }
}

#[test]
fn fractional_value_partially_fills_one_symbol() {
    let state = RatingState::with_value(2.5, 5.0);
    let frame = build_rating_frame(state, &RatingConfig::default().with_precision(0.5));

    let fills: Vec<f64> = frame.symbols.iter().map(|symbol| symbol.fill).collect();
    assert_eq!(fills, vec![1.0, 1.0, 0.5, 0.0, 0.0]);
    assert_eq!(frame.active_symbol_count(), 3);
    assert_abs_diff_eq!(frame.symbols[2].clip_inset_right_percent(), 50.0, epsilon = 1e-9);
    assert_eq!(frame.symbols[4].variant, SymbolVariant::Inactive);
}

#[test]
fn hover_preview_drives_display_and_marks_hovered_symbol() {
    let mut control = RatingControl::new(
        NullSurface::default(),
        RatingConfig::default().with_value(1.0),
    )
    .expect("control init");
    control.pointer_enter(75.0);

    let frame = control.frame();

    assert_eq!(frame.display_value, 4.0);
    assert!(frame.is_hovering);
    assert_eq!(frame.symbols[3].variant, SymbolVariant::Hovered);
    assert_eq!(frame.symbols[2].variant, SymbolVariant::Active);
    assert_eq!(frame.symbols[4].variant, SymbolVariant::Inactive);
    assert_eq!(frame.base.aria_valuenow, 1.0);
}

#[test]
fn readonly_frame_shows_committed_value() {
    let mut state = RatingState::with_value(2.0, 5.0);
    state.begin_hover(5.0);

    let frame = build_rating_frame(state, &RatingConfig::default().with_readonly(true));

    assert_eq!(frame.display_value, 2.0);
    assert_eq!(frame.active_symbol_count(), 2);
}

#[test]
fn base_accessibility_matches_slider_contract() {
    let frame = build_rating_frame(
        RatingState::default(),
        &RatingConfig::default().with_label("Test"),
    );

    let attributes = frame.base.attributes();
    let get = |name: &str| {
        attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
            .expect("attribute present")
    };
    assert_eq!(get("role"), "slider");
    assert_eq!(get("aria-label"), "Test");
    assert_eq!(get("aria-disabled"), "false");
    assert_eq!(get("aria-readonly"), "false");
    assert_eq!(get("aria-valuenow"), "0");
    assert_eq!(get("aria-valuemin"), "0");
    assert_eq!(get("aria-valuemax"), "5");
    assert_eq!(get("tabindex"), "0");
    assert_eq!(get("class"), "rating");
}

#[test]
fn disabled_and_readonly_states_surface_in_classes() {
    let readonly = build_rating_frame(
        RatingState::default(),
        &RatingConfig::default().with_readonly(true),
    );
    assert!(readonly.base.aria_readonly);
    assert_eq!(readonly.base.class_attribute(), "rating rating--readonly");

    let disabled = build_rating_frame(
        RatingState::default(),
        &RatingConfig::default().with_disabled(true),
    );
    assert!(disabled.base.aria_disabled);
    assert_eq!(disabled.base.tabindex, -1);
    assert_eq!(
        disabled.base.classes,
        vec![RatingClass::Rating, RatingClass::Disabled]
    );
}

#[test]
fn symbol_icons_are_decorative_unless_labelled() {
    let frame = build_rating_frame(RatingState::default(), &RatingConfig::default());
    assert_eq!(frame.symbol_icon.role, IconRole::Presentation);
    assert!(frame.symbol_icon.aria_hidden);

    let frame = build_rating_frame(
        RatingState::default(),
        &RatingConfig::default().with_symbol_label("star"),
    );
    assert_eq!(frame.symbol_icon.role, IconRole::Img);
    assert_eq!(frame.symbol_icon.aria_label.as_deref(), Some("star"));
}

#[test]
fn icon_label_can_be_changed() {
    let mut icon = RatingIcon::default();
    assert!(icon.is_decorative());

    icon.set_label("This is a rating");
    let accessibility = icon.accessibility();
    assert_eq!(accessibility.role, IconRole::Img);
    assert!(!accessibility.aria_hidden);
    assert_eq!(icon.label(), "This is a rating");
}

#[test]
fn render_hands_validated_frame_to_surface() {
    let mut control = RatingControl::new(
        NullSurface::default(),
        RatingConfig::default().with_max(7).with_value(3.0),
    )
    .expect("control init");

    control.render().expect("render");
    control.render().expect("render again");

    let surface = control.into_surface();
    assert_eq!(surface.render_count, 2);
    let frame = surface.last_frame.expect("frame recorded");
    assert_eq!(frame.symbols.len(), 7);
    assert_eq!(frame.active_symbol_count(), 3);
}

#[test]
fn tampered_frame_fails_validation() {
    let mut frame = build_rating_frame(RatingState::default(), &RatingConfig::default());
    frame.symbols.pop();
    let err = frame.validate().expect_err("missing symbol must fail");
    assert!(format!("{err}").contains("expected 5 symbols"));

    let mut frame = build_rating_frame(RatingState::default(), &RatingConfig::default());
    frame.symbols[1].fill = 1.5;
    assert!(frame.validate().is_err());
}

#[test]
fn glyph_label_set_at_runtime_reaches_next_frame() {
    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default()).expect("control init");
    assert!(control.frame().symbol_icon.aria_hidden);

    control.set_symbol_label("star");
    let icon = control.frame().symbol_icon;
    assert_eq!(icon.role, IconRole::Img);
    assert!(!icon.aria_hidden);
    assert_eq!(icon.aria_label.as_deref(), Some("star"));

    control.render().expect("render");
    let frame = control.into_surface().last_frame.expect("frame recorded");
    assert_eq!(frame.symbol_icon.aria_label.as_deref(), Some("star"));
    assert_eq!(frame.symbols.len(), 5);

    let mut control =
        RatingControl::new(NullSurface::default(), RatingConfig::default().with_symbol_label("star"))
            .expect("control init");
    control.set_symbol_label("");
    assert_eq!(control.frame().symbol_icon.role, IconRole::Presentation);
}
