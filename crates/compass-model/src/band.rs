/// Qualitative maturity label derived from a numeric score. Thresholds are
/// lower bounds checked with `score >= threshold`, so band boundaries
/// belong to the higher band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
pub enum MaturityBand {
    #[strum(serialize = "Ad-hoc")]
    AdHoc,
    Basic,
    Developing,
    Mature,
    Optimized,
}

impl MaturityBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            Self::Optimized
        } else if score >= 3.5 {
            Self::Mature
        } else if score >= 2.5 {
            Self::Developing
        } else if score >= 1.5 {
            Self::Basic
        } else {
            Self::AdHoc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(MaturityBand::from_score(1.0), MaturityBand::AdHoc);
        assert_eq!(MaturityBand::from_score(1.49), MaturityBand::AdHoc);
        assert_eq!(MaturityBand::from_score(1.5), MaturityBand::Basic);
        assert_eq!(MaturityBand::from_score(2.49), MaturityBand::Basic);
        assert_eq!(MaturityBand::from_score(2.5), MaturityBand::Developing);
        assert_eq!(MaturityBand::from_score(3.49), MaturityBand::Developing);
        assert_eq!(MaturityBand::from_score(3.5), MaturityBand::Mature);
        assert_eq!(MaturityBand::from_score(4.49), MaturityBand::Mature);
        assert_eq!(MaturityBand::from_score(4.5), MaturityBand::Optimized);
        assert_eq!(MaturityBand::from_score(5.0), MaturityBand::Optimized);
    }

    #[test]
    fn test_band_sweep() {
        // Walk the whole 1.00..=5.00 domain in 0.01 steps and check each
        // score lands in the band its lower bound admits.
        for hundredths in 100..=500u32 {
            let score = f64::from(hundredths) / 100.0;
            let expected = match hundredths {
                100..150 => MaturityBand::AdHoc,
                150..250 => MaturityBand::Basic,
                250..350 => MaturityBand::Developing,
                350..450 => MaturityBand::Mature,
                _ => MaturityBand::Optimized,
            };
            assert_eq!(MaturityBand::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(MaturityBand::AdHoc.to_string(), "Ad-hoc");
        assert_eq!(MaturityBand::Optimized.to_string(), "Optimized");
    }
}
