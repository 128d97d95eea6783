use std::collections::BTreeMap;

use crate::tracker::{SectionExtent, SectionMeasure};

/// Mounted section elements and their extents in document coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    sections: BTreeMap<String, SectionExtent>,
}

impl Document {
    /// Empty document (nothing mounted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount or move a section element.
    pub fn set_extent(&mut self, id: impl Into<String>, extent: SectionExtent) {
        self.sections.insert(id.into(), extent);
    }

    /// Unmount a section element. Returns its last extent.
    pub fn remove(&mut self, id: &str) -> Option<SectionExtent> {
        self.sections.remove(id)
    }

    /// Total document height: the lowest section bottom, or 0 when empty.
    pub fn height(&self) -> f64 {
        self.sections
            .values()
            .map(|e| e.bottom)
            .fold(0.0, f64::max)
    }

    /// Number of mounted sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no section is mounted.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl SectionMeasure for Document {
    fn extent(&self, id: &str) -> Option<SectionExtent> {
        self.sections.get(id).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, SectionExtent)> for Document {
    fn from_iter<I: IntoIterator<Item = (S, SectionExtent)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().map(|(id, e)| (id.into(), e)).collect(),
        }
    }
}
