use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The three Ayurvedic constitution categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub fn name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

/// How concentrated the score distribution is, bucketed by the gap between
/// the top two scores: `< 10` balanced, `10..=20` mixed, `> 20` dominant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BalanceStatus {
    Balanced,
    Mixed,
    Dominant,
}

impl BalanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BalanceStatus::Balanced => "Well Balanced",
            BalanceStatus::Mixed => "Moderately Mixed",
            BalanceStatus::Dominant => "Single Dosha Dominant",
        }
    }
}

/// Percentage scores for the three doshas. Always non-negative and summing
/// to 100 (within floating-point tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoshaScore {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl DoshaScore {
    /// The uniform prior returned when no question has been answered.
    /// Kapha carries the leftover hundredth so the three sum to exactly 100.
    pub const UNIFORM: DoshaScore = DoshaScore {
        vata: 33.33,
        pitta: 33.33,
        kapha: 33.34,
    };

    /// The dosha with the highest score. Exact ties resolve in declaration
    /// order: Vata beats Pitta beats Kapha.
    pub fn dominant(&self) -> Dosha {
        let mut best = (Dosha::Vata, self.vata);
        for (dosha, value) in [(Dosha::Pitta, self.pitta), (Dosha::Kapha, self.kapha)] {
            if value > best.1 {
                best = (dosha, value);
            }
        }
        best.0
    }

    /// The gap between the highest and second-highest score.
    pub fn dominance_gap(&self) -> f64 {
        let mut sorted = [self.vata, self.pitta, self.kapha];
        sorted.sort_by(|a, b| b.total_cmp(a));
        sorted[0] - sorted[1]
    }

    pub fn balance_status(&self) -> BalanceStatus {
        let gap = self.dominance_gap();
        if gap < 10.0 {
            BalanceStatus::Balanced
        } else if gap <= 20.0 {
            BalanceStatus::Mixed
        } else {
            BalanceStatus::Dominant
        }
    }

    /// One-decimal view for display and persistence. The full-precision
    /// values stay inside the scoring path so the sum-to-100 property holds
    /// exactly where it matters.
    pub fn rounded(&self) -> DoshaScore {
        fn round1(v: f64) -> f64 {
            (v * 10.0).round() / 10.0
        }
        DoshaScore {
            vata: round1(self.vata),
            pitta: round1(self.pitta),
            kapha: round1(self.kapha),
        }
    }

    pub fn total(&self) -> f64 {
        self.vata + self.pitta + self.kapha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_prior_sums_to_exactly_100() {
        assert_eq!(DoshaScore::UNIFORM.total(), 100.0);
    }

    #[test]
    fn dominant_picks_the_maximum() {
        let score = DoshaScore {
            vata: 10.0,
            pitta: 70.0,
            kapha: 20.0,
        };
        assert_eq!(score.dominant(), Dosha::Pitta);
    }

    #[test]
    fn exact_ties_resolve_vata_then_pitta_then_kapha() {
        let all_equal = DoshaScore {
            vata: 33.33,
            pitta: 33.33,
            kapha: 33.33,
        };
        assert_eq!(all_equal.dominant(), Dosha::Vata);

        let pitta_kapha = DoshaScore {
            vata: 20.0,
            pitta: 40.0,
            kapha: 40.0,
        };
        assert_eq!(pitta_kapha.dominant(), Dosha::Pitta);
    }

    #[test]
    fn balance_buckets_use_the_top_two_gap() {
        let balanced = DoshaScore {
            vata: 36.0,
            pitta: 34.0,
            kapha: 30.0,
        };
        assert_eq!(balanced.balance_status(), BalanceStatus::Balanced);

        let mixed = DoshaScore {
            vata: 50.0,
            pitta: 35.0,
            kapha: 15.0,
        };
        assert_eq!(mixed.balance_status(), BalanceStatus::Mixed);

        let dominant = DoshaScore {
            vata: 70.0,
            pitta: 20.0,
            kapha: 10.0,
        };
        assert_eq!(dominant.balance_status(), BalanceStatus::Dominant);
    }

    #[test]
    fn rounding_keeps_one_decimal() {
        let score = DoshaScore {
            vata: 33.333333,
            pitta: 33.333333,
            kapha: 33.333333,
        };
        let rounded = score.rounded();
        assert_eq!(rounded.vata, 33.3);
        assert_eq!(rounded.pitta, 33.3);
        assert_eq!(rounded.kapha, 33.3);
    }
}
