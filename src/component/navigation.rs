use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::Ease;
use crate::content::Section;
use crate::foundation::error::{FolioError, FolioResult};
use crate::page::{FrameRequestId, FrameRequester, ListenerId, Page};
use crate::store::{Store, SubscriberId};
use crate::tracker::smooth::{DEFAULT_SMOOTH_SCROLL_MS, SmoothScroll};
use crate::tracker::{ScrollTracker, TrackerOpts};

/// How navigation clicks scroll the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollBehavior {
    /// Animation length. `0` jumps.
    pub duration_ms: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_SMOOTH_SCROLL_MS,
            ease: Ease::InOutCubic,
        }
    }
}

struct NavState {
    tracker: ScrollTracker,
    behavior: ScrollBehavior,
    smooth: Option<SmoothScroll>,
    frame: Option<FrameRequestId>,
    scroll_listener: Option<ListenerId>,
}

/// Values published to subscribers once the component state is released.
struct Published {
    active: Store<String>,
    show_scroll_top: Store<bool>,
}

/// The navigation bar: owns the scroll tracker and keeps it in sync with a [`Page`].
///
/// Subscribers run after the tracker update has finished, so they may read any accessor of the
/// same handle. Cloning yields another handle to the same component.
#[derive(Clone)]
pub struct Navigation {
    state: Rc<RefCell<NavState>>,
    published: Rc<RefCell<Published>>,
}

impl Navigation {
    /// Navigation over `sections` (on-page order).
    pub fn new(
        sections: Vec<Section>,
        opts: TrackerOpts,
        behavior: ScrollBehavior,
    ) -> FolioResult<Self> {
        let tracker = ScrollTracker::new(sections, opts)?;
        let published = Published {
            active: Store::new(tracker.active_section().to_owned()),
            show_scroll_top: Store::new(tracker.show_scroll_top()),
        };
        Ok(Self {
            state: Rc::new(RefCell::new(NavState {
                tracker,
                behavior,
                smooth: None,
                frame: None,
                scroll_listener: None,
            })),
            published: Rc::new(RefCell::new(published)),
        })
    }

    /// Whether the component is attached to a page.
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().scroll_listener.is_some()
    }

    /// Attach to `page`: listen for scroll events and run the initial check.
    pub fn mount(&self, page: &mut Page) -> FolioResult<()> {
        if self.is_mounted() {
            return Err(FolioError::validation("navigation is already mounted"));
        }
        let state = Rc::clone(&self.state);
        let published = Rc::clone(&self.published);
        let id = page.add_scroll_listener(move |ev| {
            state
                .borrow_mut()
                .tracker
                .on_scroll(ev.scroll_y, ev.viewport_height, ev.document);
            publish(&state, &published);
        });

        {
            let mut st = self.state.borrow_mut();
            st.scroll_listener = Some(id);
            let vp = page.viewport();
            st.tracker
                .on_scroll(vp.scroll_y, vp.height, page.document());
            tracing::debug!(active = st.tracker.active_section(), "navigation mounted");
        }
        publish(&self.state, &self.published);
        Ok(())
    }

    /// Detach from `page`: remove the scroll listener and stop any running scroll animation.
    pub fn unmount(&self, page: &mut Page) {
        let mut st = self.state.borrow_mut();
        if let Some(id) = st.scroll_listener.take() {
            page.remove_scroll_listener(id);
        }
        if let Some(id) = st.frame.take() {
            page.cancel_animation_frame(id);
        }
        st.smooth = None;
        tracing::debug!("navigation unmounted");
    }

    /// Id of the active section.
    pub fn active_section(&self) -> String {
        self.state.borrow().tracker.active_section().to_owned()
    }

    /// Whether the scroll-to-top control is shown.
    pub fn show_scroll_top(&self) -> bool {
        self.state.borrow().tracker.show_scroll_top()
    }

    /// Whether the header uses its opaque background.
    pub fn header_opaque(&self) -> bool {
        self.state.borrow().tracker.header_opaque()
    }

    /// Whether the mobile menu is open.
    pub fn menu_open(&self) -> bool {
        self.state.borrow().tracker.menu_open()
    }

    /// Toggle the mobile menu.
    pub fn toggle_menu(&self) -> bool {
        self.state.borrow_mut().tracker.toggle_menu()
    }

    /// Whether a smooth scroll is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.state.borrow().smooth.is_some()
    }

    /// Subscribe to active-section changes.
    ///
    /// Subscribing from inside a subscriber callback is not supported.
    pub fn on_active_change(&self, f: impl FnMut(&String) + 'static) -> SubscriberId {
        self.published.borrow_mut().active.subscribe(f)
    }

    /// Subscribe to scroll-to-top visibility changes.
    pub fn on_show_scroll_top_change(&self, f: impl FnMut(&bool) + 'static) -> SubscriberId {
        self.published.borrow_mut().show_scroll_top.subscribe(f)
    }

    /// Navigation click: activate `id` now and smooth-scroll its top to the viewport top.
    ///
    /// While unmounted only the highlight changes; no frames are requested.
    pub fn navigate_to(&self, page: &mut Page, id: &str) -> FolioResult<()> {
        let request = self
            .state
            .borrow_mut()
            .tracker
            .navigate_to(id, page.document())?;
        publish(&self.state, &self.published);
        if let Some(req) = request {
            self.start_scroll(page, req.target_y);
        }
        Ok(())
    }

    /// Scroll-to-top control.
    pub fn scroll_to_top(&self, page: &mut Page) -> FolioResult<()> {
        let request = self
            .state
            .borrow_mut()
            .tracker
            .scroll_to_top(page.document())?;
        publish(&self.state, &self.published);
        if let Some(req) = request {
            self.start_scroll(page, req.target_y);
        }
        Ok(())
    }

    fn start_scroll(&self, page: &mut Page, target_y: f64) {
        if !self.is_mounted() {
            tracing::debug!(target_y, "navigation not mounted, scroll skipped");
            return;
        }
        let target_y = target_y.min(page.max_scroll_y());
        let mut st = self.state.borrow_mut();
        if let Some(id) = st.frame.take() {
            page.cancel_animation_frame(id);
        }
        let behavior = st.behavior;
        st.smooth = Some(SmoothScroll::new(
            page.scroll_y(),
            target_y,
            behavior.duration_ms,
            behavior.ease,
        ));
        drop(st);
        schedule_scroll_step(&self.state, page);
    }
}

/// Copy the tracker's values into the published stores with the state borrow released.
fn publish(state: &Rc<RefCell<NavState>>, published: &Rc<RefCell<Published>>) {
    let (show_scroll_top, active) = {
        let st = state.borrow();
        (
            st.tracker.show_scroll_top(),
            st.tracker.active_section().to_owned(),
        )
    };
    let mut out = published.borrow_mut();
    out.show_scroll_top.set(show_scroll_top);
    out.active.set(active);
}

fn schedule_scroll_step(state: &Rc<RefCell<NavState>>, host: &mut dyn FrameRequester) {
    let handle = Rc::clone(state);
    let id = host.request_animation_frame(Box::new(move |ctx| {
        let mut st = handle.borrow_mut();
        st.frame = None;
        let Some(smooth) = st.smooth.as_mut() else {
            return;
        };
        let y = smooth.step(ctx.dt_ms);
        let finished = smooth.is_finished();
        if finished {
            st.smooth = None;
        }
        drop(st);

        ctx.scroll_to(y);
        if !finished {
            schedule_scroll_step(&handle, ctx);
        }
    }));
    state.borrow_mut().frame = Some(id);
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("Navigation")
            .field("active", &st.tracker.active_section())
            .field("mounted", &st.scroll_listener.is_some())
            .field("scrolling", &st.smooth.is_some())
            .finish()
    }
}
