use std::collections::HashSet;

use crate::data_models::Platform;
use crate::platforms::{PLATFORMS, find_platform};
use crate::search::SearchError;

/// The set of platform ids a search should cover.
///
/// Iteration always follows catalog order, never insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSelection {
    ids: HashSet<&'static str>,
}

impl Default for PlatformSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl PlatformSelection {
    pub fn all() -> Self {
        Self {
            ids: PLATFORMS.iter().map(|p| p.id).collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }

    /// Builds a selection from client-supplied ids, rejecting any id that is
    /// not in the catalog.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Self, SearchError> {
        let mut selection = Self::none();
        for id in ids {
            let platform = find_platform(id.as_ref())
                .ok_or_else(|| SearchError::UnknownPlatform(id.as_ref().to_string()))?;
            selection.ids.insert(platform.id);
        }
        Ok(selection)
    }

    pub fn select_all(&mut self) {
        *self = Self::all();
    }

    pub fn deselect_all(&mut self) {
        self.ids.clear();
    }

    /// Flips one platform in or out. Returns false for ids outside the catalog.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(platform) = find_platform(id) else {
            return false;
        };
        if !self.ids.remove(platform.id) {
            self.ids.insert(platform.id);
        }
        true
    }

    pub fn deselect(&mut self, id: &str) -> Result<(), SearchError> {
        let platform =
            find_platform(id).ok_or_else(|| SearchError::UnknownPlatform(id.to_string()))?;
        self.ids.remove(platform.id);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn platforms(&self) -> impl Iterator<Item = &'static Platform> + '_ {
        PLATFORMS.iter().filter(|p| self.ids.contains(p.id))
    }
}
