use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum ConfidenceLevel {
    #[strum(serialize = "90%")]
    Ninety,
    #[strum(serialize = "95%")]
    NinetyFive,
    #[strum(serialize = "99%")]
    NinetyNine,
}

impl ConfidenceLevel {
    /// Fixed z-score lookup, not the normal quantile function.
    pub fn z_score(&self) -> f64 {
        match self {
            ConfidenceLevel::Ninety => 1.28,
            ConfidenceLevel::NinetyFive => 1.645,
            ConfidenceLevel::NinetyNine => 2.33,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            ConfidenceLevel::Ninety => 90,
            ConfidenceLevel::NinetyFive => 95,
            ConfidenceLevel::NinetyNine => 99,
        }
    }
}
