//! Fixed symptom checklists.
//!
//! These are informational reference vocabularies, never diagnoses. Matching
//! against logged symptoms lives in `service::insight_service`.

use serde::{Deserialize, Serialize};

const PCOS_INDICATORS: &[&str] = &[
    "Irregular periods",
    "Infrequent periods (few per year)",
    "Cycles > 35 days",
    "Periods lasting many days",
    "Trouble getting pregnant / ovulation issues",
    "Acne",
    "Excess facial/body hair (hirsutism)",
    "Hair thinning / male-pattern hair loss",
    "Weight changes / weight gain",
    "Increased appetite",
    "Insulin resistance signs (dark velvety skin patches)",
];

const ENDOMETRIOSIS_INDICATORS: &[&str] = &[
    "Pelvic pain",
    "Painful periods (dysmenorrhea)",
    "Pain that starts before period and lasts into it",
    "Lower back pain around periods",
    "Stomach/abdominal pain around periods",
    "Pain during or after sex",
    "Pain with bowel movements (esp. around period)",
    "Pain with urination (esp. around period)",
    "Heavy menstrual bleeding",
    "Bleeding between periods",
    "Bloating",
    "Diarrhea",
    "Constipation",
    "Nausea",
    "Fatigue",
    "Infertility / trouble conceiving",
];

/// Built-in indicator checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorChecklist {
    Pcos,
    Endometriosis,
}

impl IndicatorChecklist {
    /// All checklists in display order.
    pub const ALL: [IndicatorChecklist; 2] = [Self::Pcos, Self::Endometriosis];

    /// Reference phrases in display order.
    pub fn indicators(self) -> &'static [&'static str] {
        match self {
            Self::Pcos => PCOS_INDICATORS,
            Self::Endometriosis => ENDOMETRIOSIS_INDICATORS,
        }
    }

    /// Card title shown above the checklist.
    pub fn title(self) -> &'static str {
        match self {
            Self::Pcos => "PCOS Common Symptoms",
            Self::Endometriosis => "Endometriosis Common Symptoms",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IndicatorChecklist;

    #[test]
    fn checklists_have_expected_sizes() {
        assert_eq!(IndicatorChecklist::Pcos.indicators().len(), 11);
        assert_eq!(IndicatorChecklist::Endometriosis.indicators().len(), 16);
    }
}
