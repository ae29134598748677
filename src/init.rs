//! Project initialization
//!
//! Creates `babbleon.json` plus a sample reference file and docs file under
//! `.babbleon/`. The sample docs only mention paths that exist in the
//! sample reference, so a fresh project checks clean.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{BabbleonConfig, CONFIG_FILE, DEFAULT_DOCS};
use crate::error::BabbleonError;

/// Initialize a new project in `project_dir`
///
/// Refuses to touch an existing `babbleon.json` unless `force` is set.
/// Existing reference and docs files are kept unless `force` is set.
pub fn init_project(project_dir: &Path, force: bool) -> Result<InitResult> {
    let config_path = project_dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        return Err(BabbleonError::AlreadyInitialized {
            path: config_path.display().to_string(),
        }
        .into());
    }

    let config = BabbleonConfig::default();
    let config_content = config.to_json().context("Failed to serialize config")?;

    let mut result = InitResult {
        project_dir: project_dir.display().to_string(),
        files_created: Vec::new(),
        files_skipped: Vec::new(),
    };

    fs::create_dir_all(project_dir)
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;
    fs::write(&config_path, format!("{config_content}\n"))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    result.files_created.push(CONFIG_FILE.to_string());

    // The reference template goes wherever the written config points.
    for (relative, template) in [
        (config.reference_file(), REFERENCE_TEMPLATE),
        (Path::new(DEFAULT_DOCS), DOCS_TEMPLATE),
    ] {
        let path = project_dir.join(relative);
        let relative = relative.display().to_string();
        if path.exists() && !force {
            result.files_skipped.push(relative);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, template).with_context(|| format!("Failed to write {}", path.display()))?;
        result.files_created.push(relative);
    }

    Ok(result)
}

/// Result of project initialization
#[derive(Debug)]
pub struct InitResult {
    pub project_dir: String,
    pub files_created: Vec<String>,
    pub files_skipped: Vec<String>,
}

const REFERENCE_TEMPLATE: &str = r#"# Reference data for babbleon
# Docs mention these entries as `tabs.index`, `buttons.save`, ...

tabs:
  index: Correction
  favorites: History
  settings:
    title: Settings
    description: Configure your preferences

buttons:
  save: Save
  cancel: Cancel
"#;

const DOCS_TEMPLATE: &str = r#"# Navigation

The main navigation contains several tabs:
- `tabs.index`: Main correction tab
- `tabs.favorites`: History view
- `tabs.settings.title`: Settings page

## Buttons
- `buttons.save`: Save button
- `buttons.cancel`: Cancel button

Run `babbleon check` to verify every reference above still exists.
"#;
