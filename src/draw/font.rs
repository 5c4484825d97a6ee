//! Font resolution against the installed system font families.

use pango::prelude::*;
use thiserror::Error;

/// Errors raised while resolving the requested font.
#[derive(Debug, Error)]
pub enum FontError {
    /// No installed family matches the requested name (case-insensitive).
    ///
    /// Carries the full list of known family names so the caller can point
    /// the user at a valid one.
    #[error("Can't find font '{requested}' in system fonts")]
    NotFound {
        requested: String,
        available: Vec<String>,
    },
}

/// A font family that was found on the system, scaled to the requested size.
#[derive(Debug, Clone)]
pub struct ResolvedFont {
    family: String,
    size: f64,
    description: pango::FontDescription,
}

impl ResolvedFont {
    /// Builds a font handle for `family` at `size`.
    ///
    /// The size is applied as an absolute device size, so one point maps to
    /// one canvas pixel regardless of the font map's DPI.
    pub fn new(family: &str, size: f64) -> Self {
        let mut description = pango::FontDescription::new();
        description.set_family(family);
        description.set_absolute_size(size * f64::from(pango::SCALE));
        Self {
            family: family.to_owned(),
            size,
            description,
        }
    }

    /// Canonical family name, as the font map spells it.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font size in points (one point = one canvas pixel).
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Pango description used for measurement and rendering.
    pub fn description(&self) -> &pango::FontDescription {
        &self.description
    }
}

/// Looks up `requested` among the installed font families, ignoring case.
pub fn resolve(requested: &str, size: f64) -> Result<ResolvedFont, FontError> {
    let font_map = pangocairo::FontMap::default();
    let families = font_map.list_families();

    let wanted = requested.to_lowercase();
    match families
        .iter()
        .find(|family| family.name().to_lowercase() == wanted)
    {
        Some(family) => Ok(ResolvedFont::new(family.name().as_str(), size)),
        None => Err(FontError::NotFound {
            requested: requested.to_owned(),
            available: families
                .iter()
                .map(|family| family.name().to_string())
                .collect(),
        }),
    }
}
