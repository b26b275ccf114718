//! Crop recommendation rules
//!
//! Soil type picks a base crop list; plot size (normalized to acres)
//! adjusts it for very small or large holdings.

use krishi_common::Lang;
use serde::{Deserialize, Serialize};

/// Acres per hectare, used to normalize land area before the size rules
const ACRES_PER_HECTARE: f64 = 2.47105;

/// Plots at or below this many acres get the small-holding adjustment
const SMALL_PLOT_ACRES: f64 = 0.5;
/// Plots at or above this many acres get sugarcane added
const LARGE_PLOT_ACRES: f64 = 2.0;

/// Land area unit accepted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    Acre,
    Hectare,
}

impl AreaUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::Acre => "acre",
            AreaUnit::Hectare => "hectare",
        }
    }
}

/// Soil types with dedicated crop lists; anything else gets the generic list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Black,
    Red,
    Sandy,
    #[default]
    Loamy,
    #[serde(other)]
    Other,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Other => "unknown",
        }
    }
}

/// Recommend crops for a plot.
///
/// Hectares convert to acres first. Small plots (<= 0.5 acre) keep only the
/// first two soil crops plus vegetables; large plots (>= 2 acres) add
/// sugarcane, deduplicated while preserving order.
pub fn recommend_crops(area: f64, unit: AreaUnit, soil: SoilType) -> Vec<&'static str> {
    let acres = match unit {
        AreaUnit::Hectare => area * ACRES_PER_HECTARE,
        AreaUnit::Acre => area,
    };

    let mut crops: Vec<&'static str> = match soil {
        SoilType::Black => vec!["soybean", "cotton", "pigeon pea"],
        SoilType::Red => vec!["groundnut", "millets", "sorghum"],
        SoilType::Sandy => vec!["groundnut", "millets", "sesame"],
        SoilType::Loamy => vec!["wheat", "rice", "vegetables"],
        SoilType::Other => vec!["millets", "pulses"],
    };

    if acres <= SMALL_PLOT_ACRES {
        crops.truncate(2);
        crops.push("vegetables");
    }
    if acres >= LARGE_PLOT_ACRES {
        crops.push("sugarcane");
        let mut unique = Vec::with_capacity(crops.len());
        for crop in crops {
            if !unique.contains(&crop) {
                unique.push(crop);
            }
        }
        crops = unique;
    }

    crops
}

/// Localized recommendation message for the crop list
pub fn crop_message(
    lang: Lang,
    land_area: f64,
    unit: AreaUnit,
    soil: SoilType,
    crops: &[&str],
) -> String {
    let crops = crops.join(", ");
    let unit = unit.as_str();
    let soil = soil.as_str();
    match lang {
        Lang::En => format!(
            "Recommended crops for {land_area} {unit} with {soil} soil: {crops}"
        ),
        Lang::Hi => format!(
            "आपकी {land_area} {unit} की {soil} मिट्टी के लिए सुझाई गई फसलें: {crops}"
        ),
        Lang::Mr => format!("{land_area} {unit} {soil} माती जमिनीसाठी योग्य पिके: {crops}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loamy_one_acre() {
        let crops = recommend_crops(1.0, AreaUnit::Acre, SoilType::Loamy);
        assert_eq!(crops, vec!["wheat", "rice", "vegetables"]);
    }

    #[test]
    fn test_black_soil_base_list() {
        let crops = recommend_crops(1.0, AreaUnit::Acre, SoilType::Black);
        assert_eq!(crops, vec!["soybean", "cotton", "pigeon pea"]);
    }

    #[test]
    fn test_unknown_soil_generic_list() {
        let crops = recommend_crops(1.0, AreaUnit::Acre, SoilType::Other);
        assert_eq!(crops, vec!["millets", "pulses"]);
    }

    #[test]
    fn test_small_plot_keeps_two_and_adds_vegetables() {
        let crops = recommend_crops(0.5, AreaUnit::Acre, SoilType::Red);
        assert_eq!(crops, vec!["groundnut", "millets", "vegetables"]);
    }

    #[test]
    fn test_large_plot_adds_sugarcane() {
        let crops = recommend_crops(2.0, AreaUnit::Acre, SoilType::Black);
        assert_eq!(crops, vec!["soybean", "cotton", "pigeon pea", "sugarcane"]);
    }

    #[test]
    fn test_hectare_conversion_crosses_large_threshold() {
        // 1 hectare = 2.47 acres, which is a large plot
        let crops = recommend_crops(1.0, AreaUnit::Hectare, SoilType::Loamy);
        assert!(crops.contains(&"sugarcane"));
    }

    #[test]
    fn test_small_hectare_plot_stays_small() {
        // 0.2 hectare is about 0.49 acres, still a small plot
        let crops = recommend_crops(0.2, AreaUnit::Hectare, SoilType::Loamy);
        assert_eq!(crops, vec!["wheat", "rice", "vegetables"]);
    }

    #[test]
    fn test_soil_type_deserializes_unknown_as_other() {
        let soil: SoilType = serde_json::from_str("\"volcanic\"").unwrap();
        assert_eq!(soil, SoilType::Other);
    }

    #[test]
    fn test_message_lists_crops() {
        let msg = crop_message(
            Lang::En,
            1.0,
            AreaUnit::Acre,
            SoilType::Loamy,
            &["wheat", "rice"],
        );
        assert_eq!(
            msg,
            "Recommended crops for 1 acre with loamy soil: wheat, rice"
        );
    }

    #[test]
    fn test_message_localized() {
        let msg = crop_message(Lang::Mr, 2.0, AreaUnit::Acre, SoilType::Black, &["cotton"]);
        assert!(msg.contains("माती"));
        assert!(msg.contains("cotton"));
    }
}
