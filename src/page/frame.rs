use std::collections::VecDeque;

/// Handle for a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequestId(u64);

/// One-shot callback run on the next frame.
pub type FrameCallback = Box<dyn FnOnce(&mut FrameCtx<'_>)>;

/// Anything frame callbacks can be scheduled on: the page itself, or a running frame.
pub trait FrameRequester {
    /// Run `cb` once on the next frame. The callback must re-request to keep animating.
    fn request_animation_frame(&mut self, cb: FrameCallback) -> FrameRequestId;

    /// Drop a pending request. Returns `false` when it already ran or was never scheduled.
    fn cancel_animation_frame(&mut self, id: FrameRequestId) -> bool;
}

/// Frame request queue.
///
/// Requests made while a frame runs are deferred to the following frame.
#[derive(Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Vec<(FrameRequestId, FrameCallback)>,
    running: VecDeque<(FrameRequestId, FrameCallback)>,
}

impl FrameScheduler {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting for the next frame (plus any not yet run in the current one).
    pub fn pending(&self) -> usize {
        self.pending.len() + self.running.len()
    }

    fn request(&mut self, cb: FrameCallback) -> FrameRequestId {
        let id = FrameRequestId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, cb));
        id
    }

    fn cancel(&mut self, id: FrameRequestId) -> bool {
        let before = self.pending();
        self.pending.retain(|(rid, _)| *rid != id);
        self.running.retain(|(rid, _)| *rid != id);
        self.pending() != before
    }

    /// Move every pending request into the running set.
    pub(crate) fn begin_frame(&mut self) -> usize {
        self.running.extend(self.pending.drain(..));
        self.running.len()
    }

    pub(crate) fn next_due(&mut self) -> Option<(FrameRequestId, FrameCallback)> {
        self.running.pop_front()
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("next_id", &self.next_id)
            .field("pending", &self.pending.len())
            .field("running", &self.running.len())
            .finish()
    }
}

impl FrameRequester for FrameScheduler {
    fn request_animation_frame(&mut self, cb: FrameCallback) -> FrameRequestId {
        self.request(cb)
    }

    fn cancel_animation_frame(&mut self, id: FrameRequestId) -> bool {
        self.cancel(id)
    }
}

/// What a frame callback can see and do.
pub struct FrameCtx<'a> {
    /// Host timestamp of this frame.
    pub now_ms: f64,
    /// Time since the previous frame (0 on the first one).
    pub dt_ms: f64,
    /// Scroll offset at the start of the frame.
    pub scroll_y: f64,
    pub(crate) frames: &'a mut FrameScheduler,
    pub(crate) scroll_to: Option<f64>,
}

impl FrameCtx<'_> {
    /// Ask the page to scroll to `y` once this frame's callbacks have run.
    ///
    /// The last request of a frame wins. The resulting scroll event is dispatched in the same
    /// frame.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_to = Some(y);
    }
}

impl FrameRequester for FrameCtx<'_> {
    fn request_animation_frame(&mut self, cb: FrameCallback) -> FrameRequestId {
        self.frames.request(cb)
    }

    fn cancel_animation_frame(&mut self, id: FrameRequestId) -> bool {
        self.frames.cancel(id)
    }
}
