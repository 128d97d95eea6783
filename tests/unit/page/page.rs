use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::tracker::SectionExtent;

fn page() -> Page {
    let doc: Document = [
        ("hero", SectionExtent::new(0.0, 800.0)),
        ("about", SectionExtent::new(800.0, 1600.0)),
        ("projects", SectionExtent::new(1600.0, 3000.0)),
    ]
    .into_iter()
    .collect();
    Page::new(1280.0, 1000.0, doc).unwrap()
}

#[test]
fn scroll_is_clamped_to_the_document() {
    let mut p = page();
    assert_eq!(p.max_scroll_y(), 2000.0);
    assert!(p.scroll_to(5000.0));
    assert_eq!(p.scroll_y(), 2000.0);
    assert!(p.scroll_to(-10.0));
    assert_eq!(p.scroll_y(), 0.0);
    assert!(!p.scroll_to(f64::NAN));
}

#[test]
fn scroll_listeners_fire_only_on_change_until_removed() {
    let mut p = page();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let id = p.add_scroll_listener(move |ev| sink.borrow_mut().push(ev.scroll_y));

    p.scroll_to(300.0);
    p.scroll_to(300.0);
    p.scroll_by(50.0);
    assert_eq!(*seen.borrow(), vec![300.0, 350.0]);

    assert!(p.remove_scroll_listener(id));
    assert!(!p.remove_scroll_listener(id));
    p.scroll_to(900.0);
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn resize_dispatches_and_reclamps_scroll() {
    let mut p = page();
    p.scroll_to(2000.0);
    let widths = Rc::new(RefCell::new(Vec::new()));
    let sink = widths.clone();
    p.add_resize_listener(move |vp| sink.borrow_mut().push(vp.width));

    p.resize(640.0, 2500.0).unwrap();
    assert_eq!(*widths.borrow(), vec![640.0]);
    assert_eq!(p.scroll_y(), 500.0);
    assert!(p.resize(f64::NAN, 10.0).is_err());
}

#[test]
fn frame_requests_are_one_shot() {
    let mut p = page();
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    p.request_animation_frame(Box::new(move |_| *c.borrow_mut() += 1));

    assert_eq!(p.tick(0.0), 1);
    assert_eq!(p.tick(16.0), 0);
    assert_eq!(*count.borrow(), 1);
    assert_eq!(p.frame_count(), 2);
}

#[test]
fn re_requests_wait_for_the_next_frame() {
    fn schedule(host: &mut dyn FrameRequester, log: Rc<RefCell<Vec<f64>>>) {
        host.request_animation_frame(Box::new(move |ctx| {
            log.borrow_mut().push(ctx.dt_ms);
            schedule(ctx, log.clone());
        }));
    }

    let mut p = page();
    let log = Rc::new(RefCell::new(Vec::new()));
    schedule(&mut p, log.clone());
    for now in [100.0, 116.0, 150.0] {
        assert_eq!(p.tick(now), 1);
    }
    assert_eq!(*log.borrow(), vec![0.0, 16.0, 34.0]);
    assert_eq!(p.pending_frames(), 1);
}

#[test]
fn cancelled_requests_never_run() {
    let mut p = page();
    let ran = Rc::new(RefCell::new(false));
    let r = ran.clone();
    let id = p.request_animation_frame(Box::new(move |_| *r.borrow_mut() = true));
    assert!(p.cancel_animation_frame(id));
    assert!(!p.cancel_animation_frame(id));
    p.tick(0.0);
    assert!(!*ran.borrow());
}

#[test]
fn frame_scroll_dispatches_within_the_frame() {
    let mut p = page();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    p.add_scroll_listener(move |ev| sink.borrow_mut().push(ev.scroll_y));
    p.request_animation_frame(Box::new(|ctx| ctx.scroll_to(1200.0)));
    p.tick(0.0);
    assert_eq!(*seen.borrow(), vec![1200.0]);
}

#[test]
fn run_for_ticks_at_fixed_interval() {
    let mut p = page();
    let end = p.run_for(0.0, 100.0, 20.0);
    assert_eq!(p.frame_count(), 6);
    assert_eq!(end, 120.0);
    assert_eq!(p.run_for(0.0, 100.0, 0.0), 0.0);
}
