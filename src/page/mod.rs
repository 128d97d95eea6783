//! Headless stand-in for the browser window: a scrollable viewport over a document of section
//! extents, scroll and resize listeners, and a one-shot frame scheduler.
//!
//! Everything runs on one thread. Listeners fire synchronously while an event is dispatched and
//! frame callbacks run in request order from [`Page::tick`].

/// Mounted section extents.
pub mod document;
/// Frame scheduling.
pub mod frame;

pub use document::Document;
pub use frame::{FrameCallback, FrameCtx, FrameRequestId, FrameRequester, FrameScheduler};

use crate::animation::FrameClock;
use crate::foundation::error::{FolioError, FolioResult};

/// Visible area of the page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
    /// Vertical scroll offset.
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    /// Viewport of the given size scrolled to the top.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }
}

/// Payload of a scroll event.
#[derive(Clone, Copy, Debug)]
pub struct ScrollEvent<'a> {
    /// New scroll offset.
    pub scroll_y: f64,
    /// Viewport height at the time of the event.
    pub viewport_height: f64,
    /// Current section extents.
    pub document: &'a Document,
}

/// Handle of a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Scroll listener.
pub type ScrollListener = Box<dyn FnMut(&ScrollEvent<'_>)>;
/// Resize listener.
pub type ResizeListener = Box<dyn FnMut(&Viewport)>;

struct Listeners<F> {
    entries: Vec<(ListenerId, F)>,
}

impl<F> Default for Listeners<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F> Listeners<F> {
    fn add(&mut self, id: ListenerId, f: F) {
        self.entries.push((id, f));
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(lid, _)| *lid != id);
        self.entries.len() != before
    }
}

/// The headless page host.
pub struct Page {
    viewport: Viewport,
    document: Document,
    next_listener: u64,
    scroll_listeners: Listeners<ScrollListener>,
    resize_listeners: Listeners<ResizeListener>,
    frames: FrameScheduler,
    clock: FrameClock,
    frame_count: u64,
}

impl Page {
    /// Page over `document` with a viewport of the given size, scrolled to the top.
    pub fn new(width: f64, height: f64, document: Document) -> FolioResult<Self> {
        validate_size(width, height)?;
        Ok(Self {
            viewport: Viewport::new(width, height),
            document,
            next_listener: 0,
            scroll_listeners: Listeners::default(),
            resize_listeners: Listeners::default(),
            frames: FrameScheduler::new(),
            clock: FrameClock::new(),
            frame_count: 0,
        })
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.viewport.scroll_y
    }

    /// Section extents.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable section extents. Changing them does not dispatch events.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll_y(&self) -> f64 {
        (self.document.height() - self.viewport.height).max(0.0)
    }

    /// Frames run so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Pending frame requests.
    pub fn pending_frames(&self) -> usize {
        self.frames.pending()
    }

    /// Registered scroll listeners.
    pub fn scroll_listener_count(&self) -> usize {
        self.scroll_listeners.entries.len()
    }

    /// Registered resize listeners.
    pub fn resize_listener_count(&self) -> usize {
        self.resize_listeners.entries.len()
    }

    fn next_listener_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        id
    }

    /// Register a scroll listener.
    pub fn add_scroll_listener(&mut self, f: impl FnMut(&ScrollEvent<'_>) + 'static) -> ListenerId {
        let id = self.next_listener_id();
        self.scroll_listeners.add(id, Box::new(f));
        id
    }

    /// Remove a scroll listener. Returns `false` when it was not registered.
    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        self.scroll_listeners.remove(id)
    }

    /// Register a resize listener.
    pub fn add_resize_listener(&mut self, f: impl FnMut(&Viewport) + 'static) -> ListenerId {
        let id = self.next_listener_id();
        self.resize_listeners.add(id, Box::new(f));
        id
    }

    /// Remove a resize listener. Returns `false` when it was not registered.
    pub fn remove_resize_listener(&mut self, id: ListenerId) -> bool {
        self.resize_listeners.remove(id)
    }

    /// Scroll to `y` (clamped to the document) and dispatch a scroll event if the offset changed.
    ///
    /// Returns `true` when the offset changed.
    pub fn scroll_to(&mut self, y: f64) -> bool {
        let y = if y.is_finite() { y } else { 0.0 };
        let y = y.clamp(0.0, self.max_scroll_y());
        if y == self.viewport.scroll_y {
            return false;
        }
        self.viewport.scroll_y = y;
        self.dispatch_scroll();
        true
    }

    /// Scroll by a relative amount.
    pub fn scroll_by(&mut self, dy: f64) -> bool {
        self.scroll_to(self.viewport.scroll_y + dy)
    }

    /// Dispatch a scroll event at the current offset without moving.
    pub fn dispatch_scroll(&mut self) {
        let ev = ScrollEvent {
            scroll_y: self.viewport.scroll_y,
            viewport_height: self.viewport.height,
            document: &self.document,
        };
        for (_, f) in &mut self.scroll_listeners.entries {
            f(&ev);
        }
    }

    /// Resize the viewport and dispatch a resize event.
    pub fn resize(&mut self, width: f64, height: f64) -> FolioResult<()> {
        validate_size(width, height)?;
        self.viewport.width = width;
        self.viewport.height = height;
        self.viewport.scroll_y = self.viewport.scroll_y.min(self.max_scroll_y());
        let viewport = self.viewport;
        for (_, f) in &mut self.resize_listeners.entries {
            f(&viewport);
        }
        Ok(())
    }

    /// Run one frame at host timestamp `now_ms`.
    ///
    /// Every callback requested before this call runs once, in request order. Callbacks requested
    /// during the frame wait for the next one. A scroll requested by a callback is applied after
    /// all callbacks ran, dispatching its scroll event within this frame. Returns the number of
    /// callbacks run.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        let dt_ms = self.clock.tick(now_ms);
        self.frame_count += 1;
        self.frames.begin_frame();

        let mut ran = 0;
        let mut scroll_to = None;
        while let Some((_, cb)) = self.frames.next_due() {
            let mut ctx = FrameCtx {
                now_ms,
                dt_ms,
                scroll_y: self.viewport.scroll_y,
                frames: &mut self.frames,
                scroll_to: None,
            };
            cb(&mut ctx);
            if ctx.scroll_to.is_some() {
                scroll_to = ctx.scroll_to;
            }
            ran += 1;
        }

        if let Some(y) = scroll_to {
            self.scroll_to(y);
        }
        ran
    }

    /// Drive frames at a fixed interval for `duration_ms`, starting at `start_ms`.
    ///
    /// Returns the timestamp after the last frame.
    pub fn run_for(&mut self, start_ms: f64, duration_ms: f64, frame_interval_ms: f64) -> f64 {
        if !(frame_interval_ms.is_finite() && frame_interval_ms > 0.0) {
            return start_ms;
        }
        let mut now = start_ms;
        let end = start_ms + duration_ms.max(0.0);
        while now <= end {
            self.tick(now);
            now += frame_interval_ms;
        }
        now
    }
}

impl FrameRequester for Page {
    fn request_animation_frame(&mut self, cb: FrameCallback) -> FrameRequestId {
        self.frames.request_animation_frame(cb)
    }

    fn cancel_animation_frame(&mut self, id: FrameRequestId) -> bool {
        self.frames.cancel_animation_frame(id)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("viewport", &self.viewport)
            .field("document", &self.document)
            .field("scroll_listeners", &self.scroll_listeners.entries.len())
            .field("resize_listeners", &self.resize_listeners.entries.len())
            .field("frames", &self.frames)
            .finish()
    }
}

fn validate_size(width: f64, height: f64) -> FolioResult<()> {
    if !(width.is_finite() && width >= 0.0 && height.is_finite() && height >= 0.0) {
        return Err(FolioError::validation(
            "viewport width/height must be finite and >= 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/page/page.rs"]
mod tests;
