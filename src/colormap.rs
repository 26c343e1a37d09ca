// src/colormap.rs

//! Defines the `Colormap` type: a named color sequence that is either
//! discrete (a listed palette) or continuous (a segmented stop table
//! sampled at a fixed resolution), plus its provenance metadata.
//!
//! Metadata is an explicit record held alongside every colormap, never
//! an optional attribute bolted onto the color data.

use crate::color::Rgb;

/// Sampling resolution of segmented colormaps: a segmented map always
/// reports this many discrete entries.
pub const SEGMENTED_RESOLUTION: usize = 256;

/// Provenance metadata attached to a colormap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Source URL for the palette definition, if known.
    pub url: Option<String>,
    /// Manual ordering key. Absent means "sort after all keyed entries".
    pub sort_key: Option<u32>,
}

/// The two colormap kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ColormapKind {
    /// Discrete palette backed by a finite color list.
    Listed(Vec<Rgb>),
    /// Continuous map defined by interpolation stops over `[0, 1]`.
    /// Stops are ascending by position; the first sits at 0.0 and the
    /// last at 1.0.
    Segmented(Vec<(f64, Rgb)>),
}

/// A named colormap with its kind and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    kind: ColormapKind,
    meta: Metadata,
}

impl Colormap {
    /// Creates a discrete colormap from an explicit color list.
    pub fn listed(name: impl Into<String>, colors: Vec<Rgb>) -> Self {
        Colormap {
            name: name.into(),
            kind: ColormapKind::Listed(colors),
            meta: Metadata::default(),
        }
    }

    /// Creates a discrete colormap from `#RRGGBB` literals.
    ///
    /// # Panics
    /// Panics if any literal is malformed. Palette literals are compiled
    /// into the crate, so a malformed one is a defect, not an input error.
    pub fn listed_from_hex(name: impl Into<String>, hex: &[&str]) -> Self {
        let name = name.into();
        let colors = hex
            .iter()
            .map(|h| match Rgb::from_hex(h) {
                Ok(c) => c,
                Err(e) => panic!("palette '{}': {}", name, e),
            })
            .collect();
        Colormap {
            name,
            kind: ColormapKind::Listed(colors),
            meta: Metadata::default(),
        }
    }

    /// Creates a continuous colormap from an ascending stop table.
    pub fn segmented(name: impl Into<String>, stops: Vec<(f64, Rgb)>) -> Self {
        Colormap {
            name: name.into(),
            kind: ColormapKind::Segmented(stops),
            meta: Metadata::default(),
        }
    }

    /// Attaches provenance metadata, consuming and returning the colormap.
    pub fn with_meta(mut self, url: impl Into<String>, sort_key: u32) -> Self {
        self.meta.url = Some(url.into());
        self.meta.sort_key = Some(sort_key);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    /// True for discrete (listed) colormaps.
    pub fn is_listed(&self) -> bool {
        matches!(self.kind, ColormapKind::Listed(_))
    }

    /// Number of discrete entries: the palette length for listed maps,
    /// [`SEGMENTED_RESOLUTION`] for segmented ones.
    pub fn len(&self) -> usize {
        match &self.kind {
            ColormapKind::Listed(colors) => colors.len(),
            ColormapKind::Segmented(_) => SEGMENTED_RESOLUTION,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Color at index `i` in `[0, len())`.
    ///
    /// Segmented maps sample their stop table at `t = i / (len() - 1)`
    /// with piecewise-linear interpolation between bracketing stops.
    ///
    /// # Panics
    /// Panics if `i` is out of range for a listed map.
    pub fn color_at(&self, i: usize) -> Rgb {
        match &self.kind {
            ColormapKind::Listed(colors) => colors[i],
            ColormapKind::Segmented(stops) => {
                let t = i as f64 / (SEGMENTED_RESOLUTION - 1) as f64;
                sample_stops(stops, t)
            }
        }
    }

    /// The reversed variant: `<name>_r` with the color order mirrored.
    pub fn reversed(&self) -> Colormap {
        let kind = match &self.kind {
            ColormapKind::Listed(colors) => {
                ColormapKind::Listed(colors.iter().rev().copied().collect())
            }
            ColormapKind::Segmented(stops) => ColormapKind::Segmented(
                stops.iter().rev().map(|&(t, c)| (1.0 - t, c)).collect(),
            ),
        };
        Colormap {
            name: format!("{}_r", self.name),
            kind,
            meta: self.meta.clone(),
        }
    }
}

/// Piecewise-linear sample of an ascending stop table at `t`.
/// `t` outside the stop range takes the nearest endpoint color.
fn sample_stops(stops: &[(f64, Rgb)], t: f64) -> Rgb {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Rgb::new(0.0, 0.0, 0.0),
    };
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            if t1 <= t0 {
                return c1;
            }
            return c0.lerp(c1, (t - t0) / (t1 - t0));
        }
    }
    last.1
}
