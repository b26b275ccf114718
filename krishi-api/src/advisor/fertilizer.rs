//! Fertilizer advice rules
//!
//! Threshold checks on a soil reading; each triggered rule contributes one
//! recommendation. Quantities follow the local package of practice.

/// One soil test report
#[derive(Debug, Clone, Copy)]
pub struct SoilReading {
    pub ph: f64,
    /// Volumetric moisture percentage
    pub moisture: f64,
    /// Available nitrogen, kg/ha
    pub nitrogen: f64,
    /// Available phosphorus, kg/ha
    pub phosphorus: f64,
    /// Available potassium, kg/ha
    pub potassium: f64,
}

/// Fertilizer recommendations for a soil reading.
///
/// Falls back to a balanced-NPK note when no rule triggers.
pub fn fertilizer_advice(reading: &SoilReading) -> Vec<&'static str> {
    let mut advice = Vec::new();

    if reading.ph < 6.0 {
        advice.push("apply lime 200 kg/acre");
    }
    if reading.ph > 7.5 {
        advice.push("apply gypsum 200 kg/acre");
    }
    if reading.nitrogen < 200.0 {
        advice.push("urea 25 kg/acre");
    }
    if reading.phosphorus < 20.0 {
        advice.push("DAP 15 kg/acre");
    }
    if reading.potassium < 150.0 {
        advice.push("MOP 15 kg/acre");
    }
    if reading.moisture < 25.0 {
        advice.push("use compost and mulch");
    }

    if advice.is_empty() {
        advice.push("balanced NPK as per package of practice");
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(ph: f64, moisture: f64, n: f64, p: f64, k: f64) -> SoilReading {
        SoilReading {
            ph,
            moisture,
            nitrogen: n,
            phosphorus: p,
            potassium: k,
        }
    }

    #[test]
    fn test_healthy_soil_gets_balanced_npk() {
        let advice = fertilizer_advice(&reading(7.0, 30.0, 250.0, 25.0, 200.0));
        assert_eq!(advice, vec!["balanced NPK as per package of practice"]);
    }

    #[test]
    fn test_acidic_soil_gets_lime() {
        let advice = fertilizer_advice(&reading(5.5, 30.0, 250.0, 25.0, 200.0));
        assert_eq!(advice, vec!["apply lime 200 kg/acre"]);
    }

    #[test]
    fn test_alkaline_soil_gets_gypsum() {
        let advice = fertilizer_advice(&reading(8.0, 30.0, 250.0, 25.0, 200.0));
        assert_eq!(advice, vec!["apply gypsum 200 kg/acre"]);
    }

    #[test]
    fn test_boundary_ph_triggers_nothing() {
        // pH 6.0 and 7.5 sit exactly on the thresholds
        let advice = fertilizer_advice(&reading(6.0, 30.0, 250.0, 25.0, 200.0));
        assert_eq!(advice, vec!["balanced NPK as per package of practice"]);
        let advice = fertilizer_advice(&reading(7.5, 30.0, 250.0, 25.0, 200.0));
        assert_eq!(advice, vec!["balanced NPK as per package of practice"]);
    }

    #[test]
    fn test_depleted_soil_accumulates_all_rules() {
        let advice = fertilizer_advice(&reading(5.0, 10.0, 100.0, 10.0, 100.0));
        assert_eq!(
            advice,
            vec![
                "apply lime 200 kg/acre",
                "urea 25 kg/acre",
                "DAP 15 kg/acre",
                "MOP 15 kg/acre",
                "use compost and mulch",
            ]
        );
    }

    #[test]
    fn test_dry_soil_gets_compost_and_mulch() {
        let advice = fertilizer_advice(&reading(7.0, 20.0, 250.0, 25.0, 200.0));
        assert_eq!(advice, vec!["use compost and mulch"]);
    }
}
