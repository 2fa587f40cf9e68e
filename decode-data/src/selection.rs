//! Selection State: which indicators are toggled on for this session.

use std::collections::BTreeSet;

/// Set of indicator names currently selected. Starts empty and is never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checkbox state for `name`.
    pub fn set(&mut self, name: &str, on: bool) {
        if on {
            self.selected.insert(name.to_string());
        } else {
            self.selected.remove(name);
        }
    }

    /// Flip the checkbox state for `name`, returning the new state.
    pub fn toggle(&mut self, name: &str) -> bool {
        let on = !self.is_selected(name);
        self.set(name, on);
        on
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected names in catalog (discovery) order. Selections that are not
    /// in `catalog` are still returned, after the catalog ones.
    pub fn in_catalog_order<'a>(&'a self, catalog: &'a [String]) -> Vec<&'a str> {
        let mut ordered: Vec<&str> = catalog
            .iter()
            .filter(|name| self.is_selected(name))
            .map(String::as_str)
            .collect();
        ordered.extend(
            self.selected
                .iter()
                .filter(|name| !catalog.contains(name))
                .map(String::as_str),
        );
        ordered
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().map(Into::into).collect(),
        }
    }
}
