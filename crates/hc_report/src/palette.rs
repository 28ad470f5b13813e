//! Party display colors.
//!
//! Presentation configuration, not core logic: an injected acronym → hex
//! lookup with an explicit fallback, never module-level mutable state.

use std::collections::BTreeMap;

use hc_core::Acronym;

pub const FALLBACK_COLOR: &str = "#A9A9A9";

#[derive(Clone, Debug, Default)]
pub struct PartyPalette {
    colors: BTreeMap<Acronym, String>,
    fallback: Option<String>,
}

impl PartyPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, acronym: Acronym, hex: impl Into<String>) -> Self {
        self.colors.insert(acronym, hex.into());
        self
    }

    pub fn with_fallback(mut self, hex: impl Into<String>) -> Self {
        self.fallback = Some(hex.into());
        self
    }

    /// Hex color for a party, or the fallback (dark gray by default).
    pub fn color_of(&self, acronym: &Acronym) -> &str {
        self.colors
            .get(acronym)
            .map(String::as_str)
            .unwrap_or_else(|| self.fallback.as_deref().unwrap_or(FALLBACK_COLOR))
    }

    /// Display colors for the parties contesting the 2025 legislative
    /// election.
    pub fn portuguese_2025() -> Self {
        let entries: &[(&str, &str)] = &[
            ("PPD/PSD.CDS-PP.PPM", "#FFA500"),
            ("PPD/PSD.CDS-PP", "#FFA500"),
            ("PPD/PSD", "#FFA500"),
            ("AD", "#FFA500"),
            ("PS", "#f472b6"),
            ("CH", "#00008B"),
            ("IL", "#7dd3fc"),
            ("PCP-PEV", "#60a5fa"),
            ("L", "#90EE90"),
            ("ADN", "#FFFF00"),
            ("B.E.", "#FF0000"),
            ("PAN", "#008080"),
            ("JPP", "#00FFFF"),
        ];
        let mut palette = Self::new();
        for (acronym, hex) in entries {
            let token = acronym.parse().expect("palette acronyms are well-formed");
            palette = palette.with_color(token, *hex);
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ac(s: &str) -> Acronym {
        s.parse().unwrap()
    }

    #[test]
    fn known_parties_resolve_unknown_fall_back() {
        let palette = PartyPalette::portuguese_2025();
        assert_eq!(palette.color_of(&ac("PS")), "#f472b6");
        assert_eq!(palette.color_of(&ac("PPD/PSD.CDS-PP")), "#FFA500");
        assert_eq!(palette.color_of(&ac("XYZ")), FALLBACK_COLOR);
    }

    #[test]
    fn fallback_is_injectable() {
        let palette = PartyPalette::new().with_fallback("#123456");
        assert_eq!(palette.color_of(&ac("PS")), "#123456");
    }
}
