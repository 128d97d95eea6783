use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn sections() -> Vec<Section> {
    vec![
        Section::new("hero", "Home", "home"),
        Section::new("about", "About", "user"),
        Section::new("projects", "Projects", "cpu"),
    ]
}

fn layout() -> BTreeMap<String, SectionExtent> {
    let mut m = BTreeMap::new();
    m.insert("hero".to_owned(), SectionExtent::new(0.0, 800.0));
    m.insert("about".to_owned(), SectionExtent::new(800.0, 1600.0));
    m.insert("projects".to_owned(), SectionExtent::new(1600.0, 2600.0));
    m
}

#[test]
fn reverse_scan_picks_last_section_past_midpoint() {
    let sections = sections();
    let layout = layout();
    assert_eq!(
        compute_active_section(&sections, 0.0, 1000.0, &layout),
        Some("hero")
    );
    assert_eq!(
        compute_active_section(&sections, 350.0, 1000.0, &layout),
        Some("about")
    );
    assert_eq!(
        compute_active_section(&sections, 1200.0, 1000.0, &layout),
        Some("projects")
    );
    // Top exactly on the midpoint counts as past it.
    assert_eq!(
        compute_active_section(&sections, 300.0, 1000.0, &layout),
        Some("about")
    );
    assert_eq!(
        compute_active_section(&sections, 299.0, 1000.0, &layout),
        Some("hero")
    );
}

#[test]
fn unmounted_sections_are_skipped() {
    let sections = sections();
    let mut layout = layout();
    layout.remove("projects");
    assert_eq!(
        compute_active_section(&sections, 1200.0, 1000.0, &layout),
        Some("about")
    );
}

#[test]
fn nothing_qualifying_keeps_previous_active() {
    let mut layout = BTreeMap::new();
    layout.insert("hero".to_owned(), SectionExtent::new(900.0, 1200.0));
    layout.insert("about".to_owned(), SectionExtent::new(1200.0, 2000.0));

    let mut tracker = ScrollTracker::new(sections(), TrackerOpts::default()).unwrap();
    tracker.navigate_to("about", &layout).unwrap();
    let update = tracker.on_scroll(0.0, 1000.0, &layout);
    assert!(!update.active_changed);
    assert_eq!(tracker.active_section(), "about");

    let empty = BTreeMap::<String, SectionExtent>::new();
    tracker.on_scroll(5000.0, 1000.0, &empty);
    assert_eq!(tracker.active_section(), "about");
}

#[test]
fn scroll_top_flag_boundary_is_inclusive() {
    let layout = layout();
    let mut tracker = ScrollTracker::new(sections(), TrackerOpts::default()).unwrap();
    assert!(!tracker.on_scroll(499.0, 1000.0, &layout).show_scroll_top);
    assert!(tracker.on_scroll(500.0, 1000.0, &layout).show_scroll_top);
    assert!(tracker.on_scroll(501.0, 1000.0, &layout).show_scroll_top);
    assert!(!tracker.on_scroll(0.0, 1000.0, &layout).show_scroll_top);
    assert!(!tracker.show_scroll_top());
}

#[test]
fn header_turns_opaque_past_fifty_pixels() {
    let layout = layout();
    let mut tracker = ScrollTracker::new(sections(), TrackerOpts::default()).unwrap();
    tracker.on_scroll(50.0, 1000.0, &layout);
    assert!(!tracker.header_opaque());
    tracker.on_scroll(51.0, 1000.0, &layout);
    assert!(tracker.header_opaque());
}

#[test]
fn same_section_scrolls_do_not_notify() {
    let layout = layout();
    let mut tracker = ScrollTracker::new(sections(), TrackerOpts::default()).unwrap();
    let hits = Rc::new(RefCell::new(Vec::new()));
    let h = Rc::clone(&hits);
    tracker
        .active_store()
        .subscribe(move |id: &String| h.borrow_mut().push(id.clone()));

    for y in [0.0, 10.0, 100.0, 250.0] {
        assert!(!tracker.on_scroll(y, 1000.0, &layout).active_changed);
    }
    assert!(tracker.on_scroll(400.0, 1000.0, &layout).active_changed);
    assert!(!tracker.on_scroll(450.0, 1000.0, &layout).active_changed);

    assert_eq!(*hits.borrow(), vec!["about".to_owned()]);
}

#[test]
fn navigation_overrides_scroll_and_requests_alignment() {
    let layout = layout();
    let mut tracker = ScrollTracker::new(sections(), TrackerOpts::default()).unwrap();
    tracker.on_scroll(0.0, 1000.0, &layout);
    tracker.toggle_menu();
    assert!(tracker.menu_open());

    let req = tracker.navigate_to("projects", &layout).unwrap();
    assert_eq!(tracker.active_section(), "projects");
    assert_eq!(req, Some(ScrollRequest { target_y: 1600.0 }));
    assert!(!tracker.menu_open());

    let top = tracker.scroll_to_top(&layout).unwrap();
    assert_eq!(top, Some(ScrollRequest { target_y: 0.0 }));
    assert_eq!(tracker.active_section(), "hero");
}

#[test]
fn navigation_to_unmounted_section_sets_active_without_scrolling() {
    let mut layout = layout();
    layout.remove("about");
    let mut tracker = ScrollTracker::new(sections(), TrackerOpts::default()).unwrap();
    assert_eq!(tracker.navigate_to("about", &layout).unwrap(), None);
    assert_eq!(tracker.active_section(), "about");
}

#[test]
fn navigation_rejects_unknown_ids() {
    let mut tracker = ScrollTracker::new(sections(), TrackerOpts::default()).unwrap();
    let err = tracker.navigate_to("contact", &layout()).unwrap_err();
    assert!(err.to_string().contains("unknown section"));
    assert_eq!(tracker.active_section(), "hero");
}

#[test]
fn constructor_validates_sections() {
    assert!(ScrollTracker::new(Vec::new(), TrackerOpts::default()).is_err());
    let dup = vec![
        Section::new("a", "A", "x"),
        Section::new("a", "B", "y"),
    ];
    assert!(ScrollTracker::new(dup, TrackerOpts::default()).is_err());
    assert!(ScrollTracker::new(vec![Section::new("", "A", "x")], TrackerOpts::default()).is_err());
}
