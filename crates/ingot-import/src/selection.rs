//! Output category selection

use ingot_asset::AssetKind;
use std::collections::BTreeSet;

/// Which output categories an importer should produce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSelection {
    kinds: BTreeSet<AssetKind>,
}

impl OutputSelection {
    /// Nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Only models
    pub fn models_only() -> Self {
        Self::new().with(AssetKind::Model, true)
    }

    /// Every category
    pub fn all() -> Self {
        Self {
            kinds: AssetKind::ALL.into_iter().collect(),
        }
    }

    /// Builder form of [`OutputSelection::set`]
    pub fn with(mut self, kind: AssetKind, selected: bool) -> Self {
        self.set(kind, selected);
        self
    }

    pub fn set(&mut self, kind: AssetKind, selected: bool) {
        if selected {
            self.kinds.insert(kind);
        } else {
            self.kinds.remove(&kind);
        }
    }

    pub fn includes(&self, kind: AssetKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Selected kinds in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = AssetKind> + '_ {
        self.kinds.iter().copied()
    }
}
