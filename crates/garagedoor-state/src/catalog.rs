//! Display metadata for the door variants, loadable from TOML.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::segment::DoorKind;

#[derive(Clone, Debug)]
pub struct Style {
    pub label: String,
    /// Glass variants let light through when rendered by the host.
    pub translucent: bool,
}

/// One style per [`DoorKind`], defaults merged under partial config.
#[derive(Clone, Debug)]
pub struct StyleCatalog {
    styles: [Style; 4],
}

impl Default for StyleCatalog {
    fn default() -> Self {
        let style = |label: &str, translucent| Style {
            label: label.to_string(),
            translucent,
        };
        Self {
            styles: [
                style("Default", false),
                style("Glass top", true),
                style("Glass", true),
                style("Siding", false),
            ],
        }
    }
}

impl StyleCatalog {
    #[inline]
    pub fn style(&self, kind: DoorKind) -> &Style {
        &self.styles[kind.bits() as usize]
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: StylesConfig = toml::from_str(toml_str)?;
        let mut catalog = StyleCatalog::default();
        for (key, entry) in cfg.styles {
            let kind = kind_by_key(&key).ok_or_else(|| format!("unknown door style: {key}"))?;
            let slot = &mut catalog.styles[kind.bits() as usize];
            if let Some(label) = entry.label {
                slot.label = label;
            }
            if let Some(translucent) = entry.translucent {
                slot.translucent = translucent;
            }
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

fn kind_by_key(key: &str) -> Option<DoorKind> {
    match key {
        "default" => Some(DoorKind::Default),
        "glass_top" => Some(DoorKind::GlassTop),
        "glass" => Some(DoorKind::Glass),
        "siding" => Some(DoorKind::Siding),
        _ => None,
    }
}

// --- Config ---

#[derive(Deserialize)]
struct StylesConfig {
    styles: HashMap<String, StyleEntry>,
}

#[derive(Deserialize)]
struct StyleEntry {
    label: Option<String>,
    translucent: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_kind() {
        let catalog = StyleCatalog::default();
        assert_eq!(catalog.style(DoorKind::Default).label, "Default");
        assert!(!catalog.style(DoorKind::Default).translucent);
        assert!(catalog.style(DoorKind::GlassTop).translucent);
        assert!(catalog.style(DoorKind::Glass).translucent);
        assert!(!catalog.style(DoorKind::Siding).translucent);
    }

    #[test]
    fn partial_config_merges_over_defaults() {
        let catalog = StyleCatalog::from_toml_str(
            r#"
            [styles.siding]
            label = "Painted siding"

            [styles.glass]
            translucent = false
        "#,
        )
        .unwrap();
        assert_eq!(catalog.style(DoorKind::Siding).label, "Painted siding");
        assert!(!catalog.style(DoorKind::Siding).translucent);
        assert!(!catalog.style(DoorKind::Glass).translucent);
        assert_eq!(catalog.style(DoorKind::Glass).label, "Glass");
        // Untouched kinds keep their defaults.
        assert_eq!(catalog.style(DoorKind::GlassTop).label, "Glass top");
    }

    #[test]
    fn unknown_style_key_is_rejected() {
        let err = StyleCatalog::from_toml_str(
            r#"
            [styles.barn]
            label = "Barn"
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("barn"));
    }
}
