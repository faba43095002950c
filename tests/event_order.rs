//! Layout and natural-size callbacks arriving in every order.
//!
//! A view sees two independent notifications per image. Whatever order they
//! arrive in, the settled fit must equal the pure computation over the final
//! measurements, and the phase must only ever move forward until teardown.

use cardfit::*;
use rstest::rstest;

/// One callback delivered to a tracker.
#[derive(Copy, Clone, Debug)]
enum Event {
    Layout(f64, f64),
    Natural(u32, u32),
}

fn apply(tracker: &mut FitTracker, event: Event) -> Option<Size> {
    match event {
        Event::Layout(w, h) => tracker.on_layout(w, h),
        Event::Natural(w, h) => tracker.on_natural_size(w, h),
    }
}

fn rank(phase: Phase) -> u8 {
    match phase {
        Phase::Unmeasured => 0,
        Phase::PartiallyMeasured => 1,
        Phase::Fit => 2,
    }
}

#[rstest]
#[case::width_led_landscape(
    Event::Layout(100.0, 0.0),
    Event::Natural(200, 100),
    Size::new(100, 50)
)]
#[case::width_led_portrait(Event::Layout(90.0, 0.0), Event::Natural(300, 600), Size::new(90, 180))]
#[case::height_led_portrait(
    Event::Layout(320.0, 120.0),
    Event::Natural(100, 200),
    Size::new(60, 120)
)]
#[case::height_led_clamped(
    Event::Layout(50.0, 120.0),
    Event::Natural(400, 200),
    Size::new(50, 120)
)]
#[case::height_only(Event::Layout(0.0, 30.0), Event::Natural(16, 9), Size::new(53, 30))]
fn order_does_not_matter(
    #[case] layout: Event,
    #[case] natural: Event,
    #[case] expected: Size,
) {
    for order in [[layout, natural], [natural, layout]] {
        let mut tracker = FitTracker::new(ImageFit::new(SizeMode::Auto));
        let mut last = rank(tracker.phase());
        let mut fit = None;
        for event in order {
            fit = apply(&mut tracker, event);
            let now = rank(tracker.phase());
            assert!(now >= last, "phase went backwards in {order:?}");
            last = now;
        }
        assert_eq!(fit, Some(expected), "order {order:?}");
        assert_eq!(tracker.phase(), Phase::Fit);
    }
}

#[rstest]
#[case(SizeMode::Small, 40)]
#[case(SizeMode::Medium, 80)]
#[case(SizeMode::Large, 160)]
fn fixed_sizes_are_fit_before_any_callback(#[case] mode: SizeMode, #[case] side: u32) {
    let mut tracker = FitTracker::new(ImageFit::new(mode));
    assert_eq!(tracker.phase(), Phase::Fit);
    assert_eq!(tracker.on_natural_size(1000, 10), Some(Size::square(side)));
    assert_eq!(tracker.on_layout(12.0, 400.0), Some(Size::square(side)));
}

#[test]
fn settled_fit_matches_pure_computation() {
    let events = [
        Event::Natural(640, 480),
        Event::Layout(0.0, 0.0),
        Event::Layout(300.0, 0.0),
        Event::Layout(280.0, 0.0),
        Event::Natural(0, 0),
    ];
    let mut tracker = FitTracker::new(ImageFit::new(SizeMode::Auto));
    for event in events {
        apply(&mut tracker, event);
    }
    let expected = compute_fit(
        Some(Size::new(640, 480)),
        Container::width_only(280.0),
        SizeMode::Auto,
        tracker.axis(),
        &ImageSizes::default(),
    );
    assert_eq!(tracker.axis(), Some(FitAxis::Width));
    assert_eq!(tracker.fit(), expected);
    assert_eq!(expected, Some(Size::new(280, 210)));
}

#[test]
fn independent_images_do_not_share_axis() {
    let mut wide = FitTracker::new(ImageFit::new(SizeMode::Auto));
    let mut tall = FitTracker::new(ImageFit::new(SizeMode::Auto));
    wide.on_layout(200.0, 0.0);
    tall.on_layout(200.0, 100.0);
    assert_eq!(wide.axis(), Some(FitAxis::Width));
    assert_eq!(tall.axis(), Some(FitAxis::Height));

    let natural = Size::new(400, 100);
    assert_eq!(wide.on_natural_size(natural.width, natural.height), Some(Size::new(200, 50)));
    assert_eq!(tall.on_natural_size(natural.width, natural.height), Some(Size::new(200, 100)));
}

#[test]
fn persisted_axis_survives_a_new_tracker() {
    let mut first = FitTracker::new(ImageFit::new(SizeMode::Auto));
    first.on_layout(150.0, 0.0);
    let axis = first.axis().expect("axis inferred");

    let mut second = FitTracker::new(ImageFit::new(SizeMode::Auto).axis(axis));
    second.on_natural_size(300, 150);
    assert_eq!(second.phase(), Phase::Fit);
    assert_eq!(second.fit(), Some(Size::square(ImageSizes::DEFAULT_MIN)));
    assert_eq!(second.on_layout(150.0, 75.0), Some(Size::new(150, 75)));
}

#[test]
fn callbacks_after_teardown_are_dropped() {
    let mut tracker = FitTracker::new(ImageFit::new(SizeMode::Auto));
    tracker.on_layout(100.0, 0.0);
    tracker.teardown();
    assert_eq!(tracker.on_natural_size(200, 100), None);
    assert_eq!(tracker.natural(), None);
    assert_eq!(tracker.phase(), Phase::PartiallyMeasured);
}

#[test]
fn parsed_element_end_to_end() {
    let parsed = parse_image([
        ("type", "Image"),
        ("url", "https://example.com/profile.jpg"),
        ("style", "Person"),
        ("size", "Stretch"),
        ("altText", "Profile photo"),
    ]);
    assert!(parsed.warnings.is_empty());

    let mut tracker = parsed.image.tracker(ImageSizes::default());
    tracker.on_load();
    tracker.on_layout(96.0, 0.0);
    tracker.on_natural_size(512, 512);

    let plan = parsed.image.render_plan(&tracker).expect("valid element");
    assert_eq!(plan.size, Some(Size::square(96)));
    assert_eq!(plan.corner_radius, Some(48.0));
    assert_eq!(plan.alignment, SelfAlignment::Stretch);
    assert!(!plan.placeholder);
    assert_eq!(plan.accessibility_label, Some("Profile photo"));
}
