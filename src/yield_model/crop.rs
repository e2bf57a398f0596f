use std::fmt;

use serde::{Deserialize, Serialize};

/// Crop types offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Crop {
    #[default]
    Wheat,
    Rice,
}

impl Crop {
    /// All crops in the order the selector lists them.
    pub const ALL: [Crop; 2] = [Crop::Wheat, Crop::Rice];

    pub fn label(self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Soil types offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Soil {
    #[default]
    Loamy,
    Clay,
    Sandy,
}

impl Soil {
    /// All soils in the order the selector lists them.
    pub const ALL: [Soil; 3] = [Soil::Loamy, Soil::Clay, Soil::Sandy];

    pub fn label(self) -> &'static str {
        match self {
            Soil::Loamy => "Loamy",
            Soil::Clay => "Clay",
            Soil::Sandy => "Sandy",
        }
    }
}

impl fmt::Display for Soil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_order_matches_form() {
        let crops: Vec<_> = Crop::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(crops, ["Wheat", "Rice"]);
        let soils: Vec<_> = Soil::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(soils, ["Loamy", "Clay", "Sandy"]);
    }

    #[test]
    fn serializes_as_variant_name() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            crop: Crop,
            soil: Soil,
        }
        let text = toml::to_string(&Wrapper {
            crop: Crop::Rice,
            soil: Soil::Sandy,
        })
        .unwrap();
        assert!(text.contains("crop = \"Rice\""));
        let back: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(back.soil, Soil::Sandy);
    }
}
