//! Labeled segment collections

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Classification target, derived from a file name or an in-text marker
pub type Label = String;

/// One whitespace-joined chunk of normalized text
pub type Segment = String;

/// Mapping from label to its segments, in extraction order
///
/// Labels iterate in sorted order so repeated runs touch the corpus tree
/// identically. Segment order inside a label is never changed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledSegments {
    inner: BTreeMap<Label, Vec<Segment>>,
}

impl LabeledSegments {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments of `label`, inserting an empty sequence on first access
    pub fn segments_mut(&mut self, label: &str) -> &mut Vec<Segment> {
        self.inner.entry(label.to_string()).or_default()
    }

    /// Append one segment to `label`
    pub fn push(&mut self, label: &str, segment: impl Into<Segment>) {
        self.segments_mut(label).push(segment.into());
    }

    /// Replace the segments of `label`
    pub fn insert(&mut self, label: impl Into<Label>, segments: Vec<Segment>) {
        self.inner.insert(label.into(), segments);
    }

    /// Segments of `label`, if the label exists
    pub fn get(&self, label: &str) -> Option<&[Segment]> {
        self.inner.get(label).map(Vec::as_slice)
    }

    /// Number of segments held for `label` (0 when absent)
    pub fn segment_count(&self, label: &str) -> usize {
        self.inner.get(label).map_or(0, Vec::len)
    }

    /// Whether `label` is present
    pub fn contains_label(&self, label: &str) -> bool {
        self.inner.contains_key(label)
    }

    /// Labels in iteration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no label is present
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Segment count summed over all labels
    pub fn total_segments(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    /// Drop labels that hold no segments
    pub fn retain_non_empty(&mut self) {
        self.inner.retain(|_, segments| !segments.is_empty());
    }

    /// Iterate over `(label, segments)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Segment])> {
        self.inner
            .iter()
            .map(|(label, segments)| (label.as_str(), segments.as_slice()))
    }
}

impl IntoIterator for LabeledSegments {
    type Item = (Label, Vec<Segment>);
    type IntoIter = btree_map::IntoIter<Label, Vec<Segment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl FromIterator<(Label, Vec<Segment>)> for LabeledSegments {
    fn from_iter<I: IntoIterator<Item = (Label, Vec<Segment>)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
