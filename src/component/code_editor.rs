use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::error::{FolioError, FolioResult};
use crate::page::{FrameRequestId, FrameRequester, ListenerId, Page};
use crate::render::backend::{FrameRGBA, Rasterizer};
use crate::render::scene::TextMeasure;
use crate::typing::CodeEditorAnimation;

/// Maps the viewport width to the editor's container width.
pub type ContainerWidth = Box<dyn Fn(f64) -> f64>;

struct EditorState<R> {
    animation: CodeEditorAnimation,
    rasterizer: R,
    container: ContainerWidth,
    last_frame: Option<FrameRGBA>,
    frames_drawn: u64,
    frame: Option<FrameRequestId>,
    resize_listener: Option<ListenerId>,
}

/// A code editor panel: runs a [`CodeEditorAnimation`] on a page's frame loop and keeps the
/// latest rendered frame.
///
/// Cloning yields another handle to the same component.
pub struct CodeEditor<R> {
    state: Rc<RefCell<EditorState<R>>>,
}

impl<R> Clone for CodeEditor<R> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<R: Rasterizer + TextMeasure + 'static> CodeEditor<R> {
    /// Editor whose container spans the whole viewport width.
    pub fn new(animation: CodeEditorAnimation, rasterizer: R) -> Self {
        Self::with_container(animation, rasterizer, Box::new(|w| w))
    }

    /// Editor whose container width is derived from the viewport width by `container`.
    pub fn with_container(
        animation: CodeEditorAnimation,
        rasterizer: R,
        container: ContainerWidth,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(EditorState {
                animation,
                rasterizer,
                container,
                last_frame: None,
                frames_drawn: 0,
                frame: None,
                resize_listener: None,
            })),
        }
    }

    /// Whether the component is attached to a page.
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().resize_listener.is_some()
    }

    /// Attach to `page`: fit to the viewport, listen for resizes and start the frame loop.
    pub fn mount(&self, page: &mut Page) -> FolioResult<()> {
        if self.is_mounted() {
            return Err(FolioError::validation("code editor is already mounted"));
        }
        let state = Rc::clone(&self.state);
        let id = page.add_resize_listener(move |vp| {
            let mut st = state.borrow_mut();
            let width = (st.container)(vp.width);
            st.animation.resize(width);
        });

        {
            let mut st = self.state.borrow_mut();
            st.resize_listener = Some(id);
            let width = (st.container)(page.viewport().width);
            st.animation.resize(width);
            tracing::debug!(
                script = %st.animation.script().title,
                width = st.animation.layout().size().width,
                "code editor mounted"
            );
        }
        schedule_frame(&self.state, page);
        Ok(())
    }

    /// Detach from `page`: remove the resize listener and cancel the pending frame.
    pub fn unmount(&self, page: &mut Page) {
        let mut st = self.state.borrow_mut();
        if let Some(id) = st.resize_listener.take() {
            page.remove_resize_listener(id);
        }
        if let Some(id) = st.frame.take() {
            page.cancel_animation_frame(id);
        }
        tracing::debug!(frames = st.frames_drawn, "code editor unmounted");
    }

    /// Read the animation state.
    pub fn with_animation<T>(&self, f: impl FnOnce(&CodeEditorAnimation) -> T) -> T {
        f(&self.state.borrow().animation)
    }

    /// Most recent rendered frame.
    pub fn last_frame(&self) -> Option<FrameRGBA> {
        self.state.borrow().last_frame.clone()
    }

    /// Frames rendered so far.
    pub fn frames_drawn(&self) -> u64 {
        self.state.borrow().frames_drawn
    }
}

fn schedule_frame<R: Rasterizer + TextMeasure + 'static>(
    state: &Rc<RefCell<EditorState<R>>>,
    host: &mut dyn FrameRequester,
) {
    let handle = Rc::clone(state);
    let id = host.request_animation_frame(Box::new(move |ctx| {
        {
            let mut st = handle.borrow_mut();
            st.frame = None;
            draw_frame(&mut st, ctx.dt_ms);
        }
        schedule_frame(&handle, ctx);
    }));
    state.borrow_mut().frame = Some(id);
}

fn draw_frame<R: Rasterizer + TextMeasure>(st: &mut EditorState<R>, dt_ms: f64) {
    st.animation.advance(dt_ms);
    let EditorState {
        animation,
        rasterizer,
        ..
    } = &mut *st;
    let Some(scene) = animation.scene(&mut *rasterizer) else {
        return;
    };
    match rasterizer.rasterize(&scene) {
        Ok(Some(frame)) => {
            st.last_frame = Some(frame);
            st.frames_drawn += 1;
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "code editor frame failed"),
    }
}
