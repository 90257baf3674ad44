//! Tag-based admission with include (allow) and exclude (deny) lists
//!
//! When the include list is non-empty it fully overrides the exclude list:
//! only included tags pass. With an empty include list every tag passes
//! except the excluded ones.
//!
//! Tags are case-sensitive and compared after trimming surrounding
//! whitespace on both sides. The empty tag means "untagged" and is matched
//! like any other value.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of unique tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Add a tag. Returns `false` when an equivalent tag was already present.
    pub fn add(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns `false` when it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let key = tag.trim();
        match self.tags.iter().position(|t| t.trim() == key) {
            Some(idx) => {
                self.tags.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        let key = tag.trim();
        self.tags.iter().any(|t| t.trim() == key)
    }

    /// Snapshot of the tags in insertion order
    pub fn list(&self) -> Vec<String> {
        self.tags.clone()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.add(tag);
        }
        set
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    include: TagSet,
    exclude: TagSet,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(include: TagSet, exclude: TagSet) -> Self {
        Self { include, exclude }
    }

    pub fn admit(&self, tag: &str) -> bool {
        if !self.include.is_empty() {
            return self.include.contains(tag);
        }
        !self.exclude.contains(tag)
    }

    pub fn add_include(&mut self, tag: impl Into<String>) -> bool {
        self.include.add(tag)
    }

    pub fn remove_include(&mut self, tag: &str) -> bool {
        self.include.remove(tag)
    }

    pub fn clear_include(&mut self) {
        self.include.clear();
    }

    pub fn list_include(&self) -> Vec<String> {
        self.include.list()
    }

    pub fn add_exclude(&mut self, tag: impl Into<String>) -> bool {
        self.exclude.add(tag)
    }

    pub fn remove_exclude(&mut self, tag: &str) -> bool {
        self.exclude.remove(tag)
    }

    pub fn clear_exclude(&mut self) {
        self.exclude.clear();
    }

    pub fn list_exclude(&self) -> Vec<String> {
        self.exclude.list()
    }

    pub fn include(&self) -> &TagSet {
        &self.include
    }

    pub fn exclude(&self) -> &TagSet {
        &self.exclude
    }
}

/// Anything that owns an exclude list the tier helper can drive
pub trait ExclusionControl {
    fn exclude_tag(&mut self, tag: &str);
    fn unexclude_tag(&mut self, tag: &str);
}

impl ExclusionControl for TagFilter {
    fn exclude_tag(&mut self, tag: &str) {
        self.add_exclude(tag);
    }

    fn unexclude_tag(&mut self, tag: &str) {
        self.remove_exclude(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_admits_everything() {
        let filter = TagFilter::new();
        assert!(filter.admit(""));
        assert!(filter.admit("network"));
    }

    #[test]
    fn test_exclude_only_used_when_include_empty() {
        let mut filter = TagFilter::new();
        filter.add_exclude("noisy");
        assert!(!filter.admit("noisy"));
        assert!(filter.admit("quiet"));

        filter.add_include("noisy");
        assert!(filter.admit("noisy"));
        assert!(!filter.admit("quiet"));
        assert!(!filter.admit(""));
    }

    #[test]
    fn test_membership_is_trimmed_and_case_sensitive() {
        let mut filter = TagFilter::new();
        filter.add_exclude("Net");
        assert!(!filter.admit("  Net "));
        assert!(filter.admit("net"));
    }

    #[test]
    fn test_add_is_idempotent_and_remove_absent_is_noop() {
        let mut set = TagSet::new();
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert!(!set.add(" a "));
        assert_eq!(set.list(), vec!["a".to_string()]);

        assert!(!set.remove("missing"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_list_is_a_copy() {
        let mut filter = TagFilter::new();
        filter.add_include("x");
        let mut listed = filter.list_include();
        listed.push("y".to_string());
        listed.clear();
        assert_eq!(filter.list_include(), vec!["x".to_string()]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let set: TagSet = ["c", "a", "b", "a"].into_iter().collect();
        assert_eq!(set.list(), vec!["c", "a", "b"]);
    }
}
