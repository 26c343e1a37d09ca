// src/registry.rs

//! The colormap registry: name→colormap mapping, hand-authored
//! overlays, and the global (sort key, name) ordering the generator
//! walks.

use std::collections::BTreeMap;

use log::debug;

use crate::colormap::Colormap;
use crate::palettes;

/// Sort key assigned to colormaps without an explicit one, so they land
/// after every keyed entry and alphabetical among themselves. Assumes
/// fewer than one million registered colormaps.
pub const SORT_SENTINEL: u32 = 1_000_000;

/// Provenance of the hand-authored categorical palettes (Paul Tol's
/// color schemes).
pub const HAND_AUTHORED_URL: &str = "https://sronpersonalpages.nl/~pault/";

/// Mapping from colormap name to colormap. Insertion is last-write-wins,
/// so overlays replace same-named base entries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    maps: BTreeMap<String, Colormap>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Registry populated from an arbitrary colormap sequence.
    /// Later entries overwrite earlier same-named ones.
    pub fn from_colormaps(maps: impl IntoIterator<Item = Colormap>) -> Self {
        let mut registry = Registry::new();
        for cm in maps {
            registry.insert(cm);
        }
        registry
    }

    /// Registry populated with every built-in colormap plus its
    /// synthesized `_r` reversed variant (the library convention: each
    /// base entry has a reversed sibling).
    pub fn with_builtins() -> Self {
        let mut registry = Registry::new();
        for cm in palettes::BUILTINS.iter() {
            registry.insert(cm.reversed());
            registry.insert(cm.clone());
        }
        registry
    }

    /// The full base-plus-overlay registry the binary extracts from.
    pub fn assemble() -> Self {
        let mut registry = Registry::with_builtins();
        registry.overlay_hand_authored();
        registry
    }

    /// Inserts a colormap, replacing any same-named entry.
    pub fn insert(&mut self, cm: Colormap) {
        if let Some(old) = self.maps.insert(cm.name().to_string(), cm) {
            debug!("registry entry '{}' replaced by overlay", old.name());
        }
    }

    /// Overlays the three hand-authored categorical palettes. Applied
    /// after the base entries, so they win any name collision.
    pub fn overlay_hand_authored(&mut self) {
        self.insert(
            Colormap::listed_from_hex(
                "Bright",
                &[
                    "#4477AA", "#EE6677", "#228833", "#CCBB44", "#66CCEE", "#AA3377", "#BBBBBB",
                ],
            )
            .with_meta(HAND_AUTHORED_URL, 0),
        );
        self.insert(
            Colormap::listed_from_hex(
                "Vibrant",
                &[
                    "#EE7733", "#0077BB", "#33BBEE", "#EE3377", "#CC3311", "#009988", "#BBBBBB",
                ],
            )
            .with_meta(HAND_AUTHORED_URL, 1),
        );
        self.insert(
            Colormap::listed_from_hex(
                "Muted",
                &[
                    "#CC6677", "#332288", "#DDCC77", "#117733", "#88CCEE", "#882255", "#44AA99",
                    "#999933", "#AA4499",
                ],
            )
            .with_meta(HAND_AUTHORED_URL, 2),
        );
    }

    pub fn get(&self, name: &str) -> Option<&Colormap> {
        self.maps.get(name)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// All colormaps sorted ascending by (sort key, name), where a
    /// missing key counts as [`SORT_SENTINEL`]. Total order as long as
    /// names are unique, which the mapping guarantees.
    pub fn sorted(&self) -> Vec<&Colormap> {
        let mut maps: Vec<&Colormap> = self.maps.values().collect();
        maps.sort_by(|a, b| {
            let ka = (a.meta().sort_key.unwrap_or(SORT_SENTINEL), a.name());
            let kb = (b.meta().sort_key.unwrap_or(SORT_SENTINEL), b.name());
            ka.cmp(&kb)
        });
        maps
    }
}
