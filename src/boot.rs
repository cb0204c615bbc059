use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

/// Subdirectories of `static_dir` the pages reference.
const ASSET_DIRS: &[&str] = &["stock", "logos"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing asset directories and warns about empty ones.
/// Returns the number of warnings, or an error when a directory cannot be
/// created.
pub fn run(config: &SiteConfig) -> Result<u32, String> {
    info!("Grassroot boot check starting...");

    let static_dir = Path::new(&config.static_dir);
    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    let mut dirs = vec![static_dir.to_path_buf()];
    dirs.extend(ASSET_DIRS.iter().map(|d| static_dir.join(d)));
    for dir in &dirs {
        if !dir.exists() {
            match fs::create_dir_all(dir) {
                Ok(_) => info!("  Created directory: {}", dir.display()),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir.display(), e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Asset directories populated ─────────────────
    for dir in ASSET_DIRS {
        let path = static_dir.join(dir);
        let populated = fs::read_dir(&path)
            .map(|mut entries| entries.any(|e| e.is_ok()))
            .unwrap_or(false);
        if !populated {
            warn!("  Asset directory empty: {} (images will 404)", path.display());
            warnings += 1;
        }
    }

    // ── 3. Rocket.toml exists ───────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default server config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        return Err(format!(
            "Boot check FAILED: {} error(s), {} warning(s)",
            errors, warnings
        ));
    }

    if warnings > 0 {
        warn!("Boot check passed with {} warning(s).", warnings);
    } else {
        info!("Boot check passed.");
    }
    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_asset_dirs() {
        let root = std::env::temp_dir().join(format!("grassroot-boot-{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        let config = SiteConfig {
            static_dir: root.join("static").to_string_lossy().into_owned(),
            ..SiteConfig::default()
        };

        let warnings = run(&config).unwrap();
        assert!(root.join("static/stock").is_dir());
        assert!(root.join("static/logos").is_dir());
        // both asset dirs are empty
        assert!(warnings >= 2);

        fs::write(root.join("static/stock/a.jpg"), b"x").unwrap();
        fs::write(root.join("static/logos/b.png"), b"x").unwrap();
        assert_eq!(run(&config).unwrap(), warnings - 2);

        let _ = fs::remove_dir_all(&root);
    }
}
