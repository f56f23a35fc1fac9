//! Most-visible section selection for the home page tracker

/// One intersection record for a watched section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSample {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl SectionSample {
    pub fn new(id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
            ratio,
        }
    }
}

/// Pick the intersecting section with the greatest ratio. Ties keep the
/// first one seen. Returns `None` unless the winner is strictly above
/// `min_ratio`.
pub fn most_visible(samples: &[SectionSample], min_ratio: f64) -> Option<&str> {
    let mut best: Option<&SectionSample> = None;
    let mut max_ratio = 0.0;

    for sample in samples {
        if sample.is_intersecting && sample.ratio > max_ratio {
            max_ratio = sample.ratio;
            best = Some(sample);
        }
    }

    best.filter(|_| max_ratio > min_ratio).map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_ratio_wins() {
        let samples = [
            SectionSample::new("features", true, 0.3),
            SectionSample::new("staff", true, 0.5),
        ];
        assert_eq!(most_visible(&samples, 0.1), Some("staff"));
    }

    #[test]
    fn tie_keeps_first_seen() {
        let samples = [
            SectionSample::new("features", true, 0.3),
            SectionSample::new("staff", true, 0.3),
        ];
        assert_eq!(most_visible(&samples, 0.1), Some("features"));
    }

    #[test]
    fn non_intersecting_ignored() {
        let samples = [
            SectionSample::new("features", false, 0.9),
            SectionSample::new("staff", true, 0.3),
        ];
        assert_eq!(most_visible(&samples, 0.1), Some("staff"));
    }

    #[test]
    fn ratio_must_exceed_minimum() {
        let samples = [SectionSample::new("features", true, 0.1)];
        assert_eq!(most_visible(&samples, 0.1), None);
    }

    #[test]
    fn empty_batch() {
        assert_eq!(most_visible(&[], 0.1), None);
    }
}
