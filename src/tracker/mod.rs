//! Scroll-synchronized active-section tracking.
//!
//! The tracker turns scroll offsets into the "active section" shown by the navigation highlight.
//! The policy is a reverse linear scan: the active section is the last section (in document
//! order) whose top edge has crossed the vertical midpoint of the viewport. Section count is a
//! small constant, so the scan runs synchronously on every scroll event without throttling.

/// Smooth-scroll animation toward a navigation target.
pub mod smooth;

use std::collections::{BTreeMap, HashMap};

use crate::content::Section;
use crate::foundation::error::{FolioError, FolioResult};
use crate::store::Store;

/// Scroll offset at and beyond which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// Scroll offset beyond which the fixed header switches to its opaque background.
pub const HEADER_OPAQUE_THRESHOLD_PX: f64 = 50.0;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionExtent {
    /// Offset of the section's top edge from the top of the document.
    pub top: f64,
    /// Offset of the section's bottom edge from the top of the document.
    pub bottom: f64,
}

impl SectionExtent {
    /// Build an extent.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Section height in pixels (never negative).
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Source of section measurements, typically the page's document.
///
/// Returning `None` means the section element is not mounted yet; the tracker skips it.
pub trait SectionMeasure {
    /// Measure the section with the given id.
    fn extent(&self, id: &str) -> Option<SectionExtent>;
}

impl SectionMeasure for BTreeMap<String, SectionExtent> {
    fn extent(&self, id: &str) -> Option<SectionExtent> {
        self.get(id).copied()
    }
}

impl SectionMeasure for HashMap<String, SectionExtent> {
    fn extent(&self, id: &str) -> Option<SectionExtent> {
        self.get(id).copied()
    }
}

/// Thresholds for the derived scroll flags.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrackerOpts {
    /// Scroll offset at which the scroll-to-top control appears (inclusive).
    pub scroll_top_threshold_px: f64,
    /// Scroll offset beyond which the header becomes opaque (exclusive).
    pub header_opaque_threshold_px: f64,
}

impl Default for TrackerOpts {
    fn default() -> Self {
        Self {
            scroll_top_threshold_px: SCROLL_TOP_THRESHOLD_PX,
            header_opaque_threshold_px: HEADER_OPAQUE_THRESHOLD_PX,
        }
    }
}

/// Outcome of one scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollUpdate {
    /// The active section store was written (and its subscribers notified).
    pub active_changed: bool,
    /// Current value of the scroll-to-top flag.
    pub show_scroll_top: bool,
}

/// A request for the host to bring a section to the top of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    /// Target scroll offset (section top aligned with the viewport top).
    pub target_y: f64,
}

/// Pick the last section (document order) whose top edge is at or above the viewport midpoint.
///
/// Section tops are converted into viewport space (`top - scroll_y`). Unmounted sections are
/// skipped. Returns `None` when no section qualifies.
pub fn compute_active_section<'a>(
    sections: &'a [Section],
    scroll_y: f64,
    viewport_height: f64,
    measure: &dyn SectionMeasure,
) -> Option<&'a str> {
    let midpoint = viewport_height / 2.0;
    sections.iter().rev().find_map(|section| {
        let extent = measure.extent(&section.id)?;
        (extent.top - scroll_y <= midpoint).then_some(section.id.as_str())
    })
}

/// Owner of the scroll state consumed by the navigation UI.
#[derive(Debug)]
pub struct ScrollTracker {
    sections: Vec<Section>,
    opts: TrackerOpts,
    scroll_y: f64,

    active: Store<String>,
    show_scroll_top: Store<bool>,
    header_opaque: Store<bool>,
    menu_open: Store<bool>,
}

impl ScrollTracker {
    /// Create a tracker over `sections` (on-page order). The first section starts active.
    pub fn new(sections: Vec<Section>, opts: TrackerOpts) -> FolioResult<Self> {
        let first = sections
            .first()
            .ok_or_else(|| FolioError::validation("tracker needs at least one section"))?
            .id
            .clone();
        for (i, s) in sections.iter().enumerate() {
            if s.id.is_empty() {
                return Err(FolioError::validation("section id must be non-empty"));
            }
            if sections[..i].iter().any(|prev| prev.id == s.id) {
                return Err(FolioError::validation(format!(
                    "duplicate section id '{}'",
                    s.id
                )));
            }
        }

        Ok(Self {
            sections,
            opts,
            scroll_y: 0.0,
            active: Store::new(first),
            show_scroll_top: Store::new(false),
            header_opaque: Store::new(false),
            menu_open: Store::new(false),
        })
    }

    /// Sections in on-page order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Id of the active section.
    pub fn active_section(&self) -> &str {
        self.active.get()
    }

    /// Last observed scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Whether the scroll-to-top control is shown.
    pub fn show_scroll_top(&self) -> bool {
        *self.show_scroll_top.get()
    }

    /// Whether the header uses its opaque background.
    pub fn header_opaque(&self) -> bool {
        *self.header_opaque.get()
    }

    /// Whether the mobile navigation menu is open.
    pub fn menu_open(&self) -> bool {
        *self.menu_open.get()
    }

    /// Active-section store, for subscriptions.
    pub fn active_store(&mut self) -> &mut Store<String> {
        &mut self.active
    }

    /// Scroll-to-top flag store, for subscriptions.
    pub fn show_scroll_top_store(&mut self) -> &mut Store<bool> {
        &mut self.show_scroll_top
    }

    /// Handle a scroll-position change.
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        measure: &dyn SectionMeasure,
    ) -> ScrollUpdate {
        self.scroll_y = scroll_y;
        let show_scroll_top = scroll_y >= self.opts.scroll_top_threshold_px;
        self.show_scroll_top.set(show_scroll_top);
        self.header_opaque
            .set(scroll_y > self.opts.header_opaque_threshold_px);

        let computed =
            compute_active_section(&self.sections, scroll_y, viewport_height, measure)
                .map(str::to_owned);
        let active_changed = match computed {
            Some(id) if id != *self.active.get() => {
                tracing::debug!(from = %self.active.get(), to = %id, scroll_y, "active section changed");
                self.active.set(id)
            }
            _ => false,
        };

        ScrollUpdate {
            active_changed,
            show_scroll_top,
        }
    }

    /// Manual navigation: activate `id` immediately and close the mobile menu.
    ///
    /// Returns where the host should scroll to, or `None` when the section is not mounted.
    pub fn navigate_to(
        &mut self,
        id: &str,
        measure: &dyn SectionMeasure,
    ) -> FolioResult<Option<ScrollRequest>> {
        if !self.sections.iter().any(|s| s.id == id) {
            return Err(FolioError::validation(format!("unknown section '{id}'")));
        }
        self.menu_open.set(false);
        if self.active.set(id.to_owned()) {
            tracing::debug!(to = %id, "active section set by navigation");
        }
        Ok(measure.extent(id).map(|e| ScrollRequest {
            target_y: e.top.max(0.0),
        }))
    }

    /// Navigate to the first section.
    pub fn scroll_to_top(
        &mut self,
        measure: &dyn SectionMeasure,
    ) -> FolioResult<Option<ScrollRequest>> {
        let first = self.sections[0].id.clone();
        self.navigate_to(&first, measure)
    }

    /// Toggle the mobile menu and return its new state.
    pub fn toggle_menu(&mut self) -> bool {
        let open = !self.menu_open();
        self.menu_open.set(open);
        open
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tracker/tracker.rs"]
mod tests;
