// src/generator.rs

//! The extract-filter-sort-emit pipeline.
//!
//! One pass over the sorted registry fills the listed output file; a
//! second, optional pass over the configured allow-list fills the mesh
//! output file. The two passes share only the set of names the first
//! one emitted.

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::GeneratorConfig;
use crate::emitter::DeclWriter;
use crate::registry::Registry;

/// Listed-group output file name.
pub const LISTED_FILE: &str = "cmap-listed-colors.js";
/// Mesh-group output file name.
pub const MESH_FILE: &str = "cmap-mesh-colors.js";

/// Largest discrete palette admitted to the listed output. The mesh
/// path carries no size cap.
pub const MAX_LISTED_COLORS: usize = 255;

/// Names emitted per group, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Manifest names written to the listed file.
    pub listed: Vec<String>,
    /// Manifest names written to the mesh file; empty when mesh
    /// extraction is disabled.
    pub mesh: Vec<String>,
}

/// Runs one generation pass: writes the listed file, and the mesh file
/// when enabled, into `config.out_dir`.
pub fn run(registry: &Registry, config: &GeneratorConfig) -> Result<Summary> {
    let sorted = registry.sorted();

    // Listed pass: discrete maps only, no reversed variants, bounded size.
    let mut listed_names: HashSet<String> = HashSet::new();
    let listed_path = config.out_dir.join(LISTED_FILE);
    let mut writer = DeclWriter::create(
        &listed_path,
        "ListedCMAPABC",
        "LCM",
        "ListedColormaps",
        config.pretty,
    )
    .with_context(|| format!("Failed to create {}", listed_path.display()))?;

    for cm in &sorted {
        if !cm.is_listed() {
            continue;
        }
        if cm.name().ends_with("_r") {
            continue;
        }
        if cm.len() > MAX_LISTED_COLORS {
            debug!(
                "skipping '{}': {} colors exceeds the listed cap",
                cm.name(),
                cm.len()
            );
            continue;
        }
        listed_names.insert(cm.name().to_string());
        writer
            .write_colormap(cm)
            .with_context(|| format!("Failed writing '{}' to {}", cm.name(), listed_path.display()))?;
    }
    let listed = writer
        .finish()
        .with_context(|| format!("Failed finishing {}", listed_path.display()))?;
    info!(
        "Wrote {} listed colormaps to {}",
        listed.len(),
        listed_path.display()
    );

    // Mesh pass: fixed allow-list, case-insensitive lookup over the full
    // sorted sequence (continuous maps included, no size cap).
    let mut mesh = Vec::new();
    if config.extract_mesh {
        let mesh_path = config.out_dir.join(MESH_FILE);
        let mut writer = DeclWriter::create(
            &mesh_path,
            "MeshCMAPABC",
            "MCM",
            "MeshColormaps",
            config.pretty,
        )
        .with_context(|| format!("Failed to create {}", mesh_path.display()))?;

        for name in &config.mesh_colors {
            if listed_names.contains(name) {
                continue;
            }
            if name.ends_with("_r") {
                continue;
            }
            match sorted.iter().find(|cm| cm.name().eq_ignore_ascii_case(name)) {
                Some(cm) => writer.write_colormap(cm).with_context(|| {
                    format!("Failed writing '{}' to {}", cm.name(), mesh_path.display())
                })?,
                None => debug!("mesh colormap '{}' not in registry; skipped", name),
            }
        }
        mesh = writer
            .finish()
            .with_context(|| format!("Failed finishing {}", mesh_path.display()))?;
        info!(
            "Wrote {} mesh colormaps to {}",
            mesh.len(),
            mesh_path.display()
        );
    }

    Ok(Summary { listed, mesh })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::colormap::Colormap;
    use std::fs;
    use std::path::PathBuf;
    use test_log::test;

    fn temp_config(tag: &str) -> GeneratorConfig {
        let dir = std::env::temp_dir().join(format!("cmap-gen-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        GeneratorConfig {
            out_dir: dir,
            ..GeneratorConfig::default()
        }
    }

    fn cleanup(config: &GeneratorConfig) {
        fs::remove_dir_all(&config.out_dir).ok();
    }

    fn viridis_like() -> Colormap {
        Colormap::segmented(
            "viridis",
            vec![
                (0.0, Rgb::new(0.267004, 0.004874, 0.329415)),
                (1.0, Rgb::new(0.993248, 0.906157, 0.143936)),
            ],
        )
    }

    #[test]
    fn continuous_maps_are_excluded_from_listed_but_not_mesh() {
        let registry = {
            let mut r = Registry::from_colormaps([viridis_like()]);
            r.insert(
                Colormap::listed_from_hex(
                    "Bright",
                    &[
                        "#4477AA", "#EE6677", "#228833", "#CCBB44", "#66CCEE", "#AA3377",
                        "#BBBBBB",
                    ],
                )
                .with_meta(crate::registry::HAND_AUTHORED_URL, 0),
            );
            r
        };
        let mut config = temp_config("continuous");
        config.mesh_colors = vec!["viridis".to_string()];

        let summary = run(&registry, &config).unwrap();
        assert_eq!(summary.listed, vec!["LCMBright"]);
        // The size cap applies to the listed filter only: the 256-sample
        // continuous map still lands in the mesh file.
        assert_eq!(summary.mesh, vec!["MCMviridis"]);
        cleanup(&config);
    }

    #[test]
    fn reversed_names_never_appear_in_either_output() {
        let registry = Registry::from_colormaps([
            Colormap::listed_from_hex("Set1_r", &["#E41A1C", "#377EB8"]),
            viridis_like().reversed(),
        ]);
        let mut config = temp_config("reversed");
        config.mesh_colors = vec!["Set1_r".to_string(), "viridis_r".to_string()];

        let summary = run(&registry, &config).unwrap();
        assert!(summary.listed.is_empty());
        assert!(summary.mesh.is_empty());
        cleanup(&config);
    }

    #[test]
    fn oversized_listed_palettes_are_dropped() {
        let big = Colormap::listed(
            "big",
            (0..300).map(|i| Rgb::new(i as f64 / 299.0, 0.0, 0.0)).collect(),
        );
        let small = Colormap::listed_from_hex("small", &["#000000", "#FFFFFF"]);
        let registry = Registry::from_colormaps([big, small]);
        let config = temp_config("oversized");

        let summary = run(&registry, &config).unwrap();
        assert_eq!(summary.listed, vec!["LCMsmall"]);
        cleanup(&config);
    }

    #[test]
    fn listed_and_mesh_manifests_are_disjoint() {
        let registry = Registry::assemble();
        let mut config = temp_config("disjoint");
        // Ask for a palette that is already listed: the mesh pass must
        // skip it rather than emit a duplicate declaration.
        config.mesh_colors = vec!["Bright".to_string(), "viridis".to_string()];

        let summary = run(&registry, &config).unwrap();
        assert!(summary.listed.contains(&"LCMBright".to_string()));
        assert_eq!(summary.mesh, vec!["MCMviridis"]);
        cleanup(&config);
    }

    #[test]
    fn mesh_lookup_is_case_insensitive() {
        let registry = Registry::from_colormaps([viridis_like()]);
        let mut config = temp_config("case");
        config.mesh_colors = vec!["VIRIDIS".to_string()];

        let summary = run(&registry, &config).unwrap();
        // The declaration takes the registry's spelling, not the query's.
        assert_eq!(summary.mesh, vec!["MCMviridis"]);
        cleanup(&config);
    }

    #[test]
    fn mesh_lookup_miss_is_silent() {
        let registry = Registry::from_colormaps([viridis_like()]);
        let mut config = temp_config("miss");
        config.mesh_colors = vec!["no-such-map".to_string(), "viridis".to_string()];

        let summary = run(&registry, &config).unwrap();
        assert_eq!(summary.mesh, vec!["MCMviridis"]);
        cleanup(&config);
    }

    #[test]
    fn mesh_file_is_not_written_when_disabled() {
        let registry = Registry::assemble();
        let mut config = temp_config("disabled");
        config.extract_mesh = false;

        let summary = run(&registry, &config).unwrap();
        assert!(summary.mesh.is_empty());
        assert!(config.out_dir.join(LISTED_FILE).exists());
        assert!(!config.out_dir.join(MESH_FILE).exists());
        cleanup(&config);
    }

    #[test]
    fn hand_authored_palettes_lead_the_listed_manifest() {
        let registry = Registry::assemble();
        let config = temp_config("leading");

        let summary = run(&registry, &config).unwrap();
        assert_eq!(&summary.listed[..3], &["LCMBright", "LCMVibrant", "LCMMuted"]);
        // Everything listed is discrete, unreversed, and within the cap.
        for name in &summary.listed {
            let name = name.strip_prefix("LCM").unwrap();
            let cm = registry.get(name).unwrap();
            assert!(cm.is_listed());
            assert!(!name.ends_with("_r"));
            assert!(cm.len() <= MAX_LISTED_COLORS);
        }
        cleanup(&config);
    }

    #[test]
    fn manifest_order_matches_sorted_filter_order() {
        let registry = Registry::assemble();
        let config = temp_config("order");

        let summary = run(&registry, &config).unwrap();
        let expected: Vec<String> = registry
            .sorted()
            .iter()
            .filter(|cm| {
                cm.is_listed() && !cm.name().ends_with("_r") && cm.len() <= MAX_LISTED_COLORS
            })
            .map(|cm| format!("LCM{}", cm.name()))
            .collect();
        assert_eq!(summary.listed, expected);
        cleanup(&config);
    }

    #[test]
    fn generation_is_idempotent() {
        let registry = Registry::assemble();
        let config = temp_config("idempotent");

        run(&registry, &config).unwrap();
        let listed_1 = fs::read(config.out_dir.join(LISTED_FILE)).unwrap();
        let mesh_1 = fs::read(config.out_dir.join(MESH_FILE)).unwrap();

        run(&registry, &config).unwrap();
        let listed_2 = fs::read(config.out_dir.join(LISTED_FILE)).unwrap();
        let mesh_2 = fs::read(config.out_dir.join(MESH_FILE)).unwrap();

        assert_eq!(listed_1, listed_2);
        assert_eq!(mesh_1, mesh_2);
        cleanup(&config);
    }

    #[test]
    fn create_failure_carries_path_context() {
        let registry = Registry::assemble();
        let config = GeneratorConfig {
            out_dir: PathBuf::from("/no/such/dir/anywhere"),
            ..GeneratorConfig::default()
        };

        let err = run(&registry, &config).unwrap_err();
        assert!(format!("{:#}", err).contains(LISTED_FILE));
    }
}
