use std::collections::BTreeSet;

/// Frame indices confirmed loadable for the active color.
/// Always ascending and duplicate-free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailableFrames {
    indices: BTreeSet<u32>,
}

impl AvailableFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the index was newly added.
    pub fn insert(&mut self, index: u32) -> bool {
        self.indices.insert(index)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn contains(&self, index: u32) -> bool {
        self.indices.contains(&index)
    }

    /// Position of `index` within the ordered sequence.
    pub fn position(&self, index: u32) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        Some(self.indices.range(..index).count())
    }

    pub fn nth(&self, position: usize) -> Option<u32> {
        self.indices.iter().nth(position).copied()
    }

    pub fn first(&self) -> Option<u32> {
        self.indices.first().copied()
    }

    pub fn last(&self) -> Option<u32> {
        self.indices.last().copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl FromIterator<u32> for AvailableFrames {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}
