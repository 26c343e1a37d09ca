// src/palettes.rs

//! Built-in palette data.
//!
//! The qualitative (listed) sets and segmented stop tables assembled
//! into the base registry. Qualitative data is the ColorBrewer/Tableau
//! family; segmented maps are anchor-stop renditions of the classic
//! continuous colormaps, sampled at emission time.

use once_cell::sync::Lazy;

use crate::color::Rgb;
use crate::colormap::Colormap;

// --- Qualitative (listed) sets ---

const ACCENT: &[&str] = &[
    "#7FC97F", "#BEAED4", "#FDC086", "#FFFF99", "#386CB0", "#F0027F", "#BF5B17", "#666666",
];

const DARK2: &[&str] = &[
    "#1B9E77", "#D95F02", "#7570B3", "#E7298A", "#66A61E", "#E6AB02", "#A6761D", "#666666",
];

const PAIRED: &[&str] = &[
    "#A6CEE3", "#1F78B4", "#B2DF8A", "#33A02C", "#FB9A99", "#E31A1C", "#FDBF6F", "#FF7F00",
    "#CAB2D6", "#6A3D9A", "#FFFF99", "#B15928",
];

const PASTEL1: &[&str] = &[
    "#FBB4AE", "#B3CDE3", "#CCEBC5", "#DECBE4", "#FED9A6", "#FFFFCC", "#E5D8BD", "#FDDAEC",
    "#F2F2F2",
];

const PASTEL2: &[&str] = &[
    "#B3E2CD", "#FDCDAC", "#CBD5E8", "#F4CAE4", "#E6F5C9", "#FFF2AE", "#F1E2CC", "#CCCCCC",
];

const SET1: &[&str] = &[
    "#E41A1C", "#377EB8", "#4DAF4A", "#984EA3", "#FF7F00", "#FFFF33", "#A65628", "#F781BF",
    "#999999",
];

const SET2: &[&str] = &[
    "#66C2A5", "#FC8D62", "#8DA0CB", "#E78AC3", "#A6D854", "#FFD92F", "#E5C494", "#B3B3B3",
];

const SET3: &[&str] = &[
    "#8DD3C7", "#FFFFB3", "#BEBADA", "#FB8072", "#80B1D3", "#FDB462", "#B3DE69", "#FCCDE5",
    "#D9D9D9", "#BC80BD", "#CCEBC5", "#FFED6F",
];

const TAB10: &[&str] = &[
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF",
];

const TAB20: &[&str] = &[
    "#1F77B4", "#AEC7E8", "#FF7F0E", "#FFBB78", "#2CA02C", "#98DF8A", "#D62728", "#FF9896",
    "#9467BD", "#C5B0D5", "#8C564B", "#C49C94", "#E377C2", "#F7B6D2", "#7F7F7F", "#C7C7C7",
    "#BCBD22", "#DBDB8D", "#17BECF", "#9EDAE5",
];

const TAB20B: &[&str] = &[
    "#393B79", "#5254A3", "#6B6ECF", "#9C9EDE", "#637939", "#8CA252", "#B5CF6B", "#CEDB9C",
    "#8C6D31", "#BD9E39", "#E7BA52", "#E7CB94", "#843C39", "#AD494A", "#D6616B", "#E7969C",
    "#7B4173", "#A55194", "#CE6DBD", "#DE9ED6",
];

const TAB20C: &[&str] = &[
    "#3182BD", "#6BAED6", "#9ECAE1", "#C6DBEF", "#E6550D", "#FD8D3C", "#FDAE6B", "#FDD0A2",
    "#31A354", "#74C476", "#A1D99B", "#C7E9C0", "#756BB1", "#9E9AC8", "#BCBDDC", "#DADAEB",
    "#636363", "#969696", "#BDBDBD", "#D9D9D9",
];

const QUALITATIVE: &[(&str, &[&str])] = &[
    ("Accent", ACCENT),
    ("Dark2", DARK2),
    ("Paired", PAIRED),
    ("Pastel1", PASTEL1),
    ("Pastel2", PASTEL2),
    ("Set1", SET1),
    ("Set2", SET2),
    ("Set3", SET3),
    ("tab10", TAB10),
    ("tab20", TAB20),
    ("tab20b", TAB20B),
    ("tab20c", TAB20C),
];

// --- Segmented (continuous) stop tables ---

const VIRIDIS: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.267004, 0.004874, 0.329415)),
    (0.125, Rgb::new(0.282910, 0.156963, 0.469201)),
    (0.25, Rgb::new(0.253935, 0.265254, 0.529983)),
    (0.375, Rgb::new(0.206756, 0.371758, 0.553117)),
    (0.5, Rgb::new(0.163625, 0.471133, 0.558148)),
    (0.625, Rgb::new(0.127568, 0.566949, 0.550556)),
    (0.75, Rgb::new(0.208030, 0.718701, 0.472873)),
    (0.875, Rgb::new(0.565498, 0.842430, 0.262877)),
    (1.0, Rgb::new(0.993248, 0.906157, 0.143936)),
];

const PLASMA: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.050383, 0.029803, 0.527975)),
    (0.25, Rgb::new(0.417642, 0.000564, 0.658390)),
    (0.5, Rgb::new(0.692840, 0.165141, 0.564522)),
    (0.75, Rgb::new(0.881443, 0.392529, 0.383229)),
    (1.0, Rgb::new(0.940015, 0.975158, 0.131326)),
];

const INFERNO: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.001462, 0.000466, 0.013866)),
    (0.25, Rgb::new(0.258234, 0.038571, 0.406485)),
    (0.5, Rgb::new(0.578304, 0.148039, 0.404411)),
    (0.75, Rgb::new(0.865006, 0.316822, 0.226055)),
    (1.0, Rgb::new(0.988362, 0.998364, 0.644924)),
];

const MAGMA: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.001462, 0.000466, 0.013866)),
    (0.25, Rgb::new(0.232077, 0.059889, 0.437695)),
    (0.5, Rgb::new(0.550287, 0.161158, 0.505719)),
    (0.75, Rgb::new(0.868793, 0.287728, 0.409303)),
    (1.0, Rgb::new(0.987053, 0.991438, 0.749504)),
];

const TURBO: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.18995, 0.07176, 0.23217)),
    (0.125, Rgb::new(0.25369, 0.52855, 0.97915)),
    (0.25, Rgb::new(0.09958, 0.81205, 0.77135)),
    (0.375, Rgb::new(0.31364, 0.97096, 0.40587)),
    (0.5, Rgb::new(0.64362, 0.98999, 0.23356)),
    (0.625, Rgb::new(0.90605, 0.84337, 0.21555)),
    (0.75, Rgb::new(0.97689, 0.55853, 0.13050)),
    (0.875, Rgb::new(0.84299, 0.27081, 0.04518)),
    (1.0, Rgb::new(0.47960, 0.01583, 0.01055)),
];

const JET: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.0, 0.0, 0.5)),
    (0.125, Rgb::new(0.0, 0.0, 1.0)),
    (0.375, Rgb::new(0.0, 1.0, 1.0)),
    (0.625, Rgb::new(1.0, 1.0, 0.0)),
    (0.875, Rgb::new(1.0, 0.0, 0.0)),
    (1.0, Rgb::new(0.5, 0.0, 0.0)),
];

const HOT: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.0, 0.0, 0.0)),
    (0.365, Rgb::new(1.0, 0.0, 0.0)),
    (0.746, Rgb::new(1.0, 1.0, 0.0)),
    (1.0, Rgb::new(1.0, 1.0, 1.0)),
];

const COOL: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.0, 1.0, 1.0)),
    (1.0, Rgb::new(1.0, 0.0, 1.0)),
];

const GRAY: &[(f64, Rgb)] = &[
    (0.0, Rgb::new(0.0, 0.0, 0.0)),
    (1.0, Rgb::new(1.0, 1.0, 1.0)),
];

const SEGMENTED: &[(&str, &[(f64, Rgb)])] = &[
    ("viridis", VIRIDIS),
    ("plasma", PLASMA),
    ("inferno", INFERNO),
    ("magma", MAGMA),
    ("turbo", TURBO),
    ("jet", JET),
    ("hot", HOT),
    ("cool", COOL),
    ("gray", GRAY),
];

/// Every built-in colormap, base entries only (no reversed variants —
/// the registry synthesizes those).
pub static BUILTINS: Lazy<Vec<Colormap>> = Lazy::new(|| {
    let mut maps = Vec::with_capacity(QUALITATIVE.len() + SEGMENTED.len());
    for (name, hex) in QUALITATIVE {
        maps.push(Colormap::listed_from_hex(*name, hex));
    }
    for (name, stops) in SEGMENTED {
        maps.push(Colormap::segmented(*name, stops.to_vec()));
    }
    maps
});
