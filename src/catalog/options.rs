/// Sentinel option meaning "this control contributes nothing to the prompt".
pub const NONE_OPTION: &str = "None";

pub const GENRES: &[&str] = &["portrait", "street", "product", "landscape", "editorial"];

pub const CAMERAS: &[&str] = &[
    "None",
    "Canon EOS R5",
    "Sony A7R V",
    "Nikon Z9",
    "Fujifilm GFX 100S",
    "Hasselblad X2D",
    "Leica M11",
    "Phase One XF IQ4",
    "Pentax 67",
    "Mamiya RZ67",
    "Polaroid SX-70",
];

const PORTRAIT_LENSES: &[&str] = &[
    "50mm prime",
    "85mm f/1.2 prime",
    "105mm portrait prime",
    "135mm f/1.8 prime",
    "70-200mm telephoto zoom",
];

const STREET_LENSES: &[&str] = &[
    "28mm wide prime",
    "35mm prime",
    "50mm prime",
    "24-70mm standard zoom",
];

const PRODUCT_LENSES: &[&str] = &[
    "90mm macro",
    "100mm macro",
    "45mm tilt-shift",
    "24-70mm standard zoom",
];

const LANDSCAPE_LENSES: &[&str] = &[
    "14-24mm ultra-wide zoom",
    "16-35mm wide zoom",
    "24mm prime",
    "70-200mm telephoto zoom",
];

const EDITORIAL_LENSES: &[&str] = &[
    "35mm prime",
    "50mm prime",
    "85mm f/1.2 prime",
    "24-70mm standard zoom",
];

/// Lens lists are genre-scoped. The surface prepends the "None" sentinel
/// itself, so the lists here carry real glass only. Unknown genres resolve
/// to an empty list rather than an error.
pub fn lenses_for_genre(genre: &str) -> &'static [&'static str] {
    match genre {
        "portrait" => PORTRAIT_LENSES,
        "street" => STREET_LENSES,
        "product" => PRODUCT_LENSES,
        "landscape" => LANDSCAPE_LENSES,
        "editorial" => EDITORIAL_LENSES,
        _ => &[],
    }
}

pub const APERTURES: &[&str] = &[
    "None", "f/1.2", "f/1.4", "f/1.8", "f/2.8", "f/4", "f/5.6", "f/8", "f/11", "f/16",
];

pub const SHUTTERS: &[&str] = &[
    "None", "1/2000s", "1/1000s", "1/500s", "1/250s", "1/125s", "1/60s", "1/30s", "1/15s", "1s",
    "30s",
];

pub const ISOS: &[&str] = &[
    "None", "50", "100", "200", "400", "800", "1600", "3200", "6400",
];

pub const FILMS: &[&str] = &[
    "None",
    "Kodak Portra 400",
    "Kodak Gold 200",
    "Kodak Ektachrome E100",
    "Kodak Tri-X 400",
    "Fujifilm Pro 400H",
    "Fujifilm Velvia 50",
    "Ilford HP5 Plus",
    "CineStill 800T",
];

pub const WHITE_BALANCES: &[&str] = &[
    "None",
    "Daylight",
    "Cloudy",
    "Shade",
    "Tungsten",
    "Fluorescent",
    "Golden hour warmth",
    "Cool blue cast",
];

pub const GRAINS: &[&str] = &[
    "None",
    "Fine grain",
    "Subtle film grain",
    "Heavy grain",
    "Silver halide texture",
];

pub const LENS_CHARACTERISTICS: &[&str] = &[
    "None",
    "Creamy bokeh",
    "Swirly bokeh",
    "Anamorphic lens flare",
    "Soft vintage glow",
    "Razor-sharp rendering",
    "Subtle vignette",
];

/// Single mutually-exclusive lighting mood, as opposed to the toggleable
/// setups below.
pub const LIGHTING_MOODS: &[&str] = &[
    "None",
    "Golden hour sunlight",
    "Soft window light",
    "Hard flash",
    "Neon glow",
    "Overcast diffused light",
    "Low-key chiaroscuro",
    "High-key studio light",
    "Candlelight",
];

pub const COMPOSITIONS: &[&str] = &[
    "None",
    "Rule of Thirds",
    "Centered symmetry",
    "Golden ratio",
    "Leading lines",
    "Negative space",
    "Dutch angle",
    "Frame within a frame",
];

pub const PRODUCT_SUBGENRES: &[&str] = &[
    "None",
    "Cosmetics flat lay",
    "Tech hero shot",
    "Food styling",
    "Jewelry macro",
    "Beverage splash",
    "Fashion lookbook",
];

/// An independently toggleable lighting descriptor. `label` is the short
/// name a surface shows on the toggle; `phrase` is the exact text that ends
/// up in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingSetup {
    pub label: &'static str,
    pub phrase: &'static str,
}

pub const LIGHTING_SETUPS: &[LightingSetup] = &[
    LightingSetup {
        label: "Rim Light",
        phrase: "rim light",
    },
    LightingSetup {
        label: "Fog Machine",
        phrase: "fog machine",
    },
    LightingSetup {
        label: "Softbox",
        phrase: "large softbox fill",
    },
    LightingSetup {
        label: "Colored Gels",
        phrase: "colored gel lighting",
    },
    LightingSetup {
        label: "Practicals",
        phrase: "practical bulbs in frame",
    },
    LightingSetup {
        label: "Reflector",
        phrase: "silver reflector bounce",
    },
    LightingSetup {
        label: "Smoke",
        phrase: "atmospheric smoke",
    },
    LightingSetup {
        label: "Backlight",
        phrase: "strong backlight",
    },
];

/// Every single-select control a surface can render, keyed to its option
/// list. Lenses are genre-scoped and live behind `lenses_for_genre`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Genre,
    Camera,
    Aperture,
    Shutter,
    Iso,
    Film,
    WhiteBalance,
    Grain,
    LensCharacteristic,
    Lighting,
    Composition,
    ProductSubgenre,
}

impl Control {
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Control::Genre => GENRES,
            Control::Camera => CAMERAS,
            Control::Aperture => APERTURES,
            Control::Shutter => SHUTTERS,
            Control::Iso => ISOS,
            Control::Film => FILMS,
            Control::WhiteBalance => WHITE_BALANCES,
            Control::Grain => GRAINS,
            Control::LensCharacteristic => LENS_CHARACTERISTICS,
            Control::Lighting => LIGHTING_MOODS,
            Control::Composition => COMPOSITIONS,
            Control::ProductSubgenre => PRODUCT_SUBGENRES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults_are_catalog_members() {
        assert!(lenses_for_genre("portrait").contains(&"50mm prime"));
        assert!(APERTURES.contains(&"f/2.8"));
        assert!(SHUTTERS.contains(&"1/125s"));
        assert!(ISOS.contains(&"100"));
        assert!(COMPOSITIONS.contains(&"Rule of Thirds"));
    }

    #[test]
    fn single_select_lists_lead_with_the_sentinel() {
        for control in [
            Control::Camera,
            Control::Aperture,
            Control::Shutter,
            Control::Iso,
            Control::Film,
            Control::WhiteBalance,
            Control::Grain,
            Control::LensCharacteristic,
            Control::Lighting,
            Control::Composition,
            Control::ProductSubgenre,
        ] {
            assert_eq!(control.options()[0], NONE_OPTION);
        }
    }

    #[test]
    fn every_genre_has_lenses_and_unknown_genres_have_none() {
        for genre in GENRES {
            assert!(!lenses_for_genre(genre).is_empty(), "no lenses for {genre}");
        }
        assert!(lenses_for_genre("astro").is_empty());
    }

    #[test]
    fn lighting_setup_phrases_are_unique() {
        let mut phrases: Vec<&str> = LIGHTING_SETUPS.iter().map(|s| s.phrase).collect();
        phrases.sort_unstable();
        phrases.dedup();
        assert_eq!(phrases.len(), LIGHTING_SETUPS.len());
    }
}
