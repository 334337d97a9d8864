/// Zone meter and the penalty lines currently stacked at the board's top
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneState {
    pub meter: f64,
    pub max: f64,
    /// Animated row heights of the penalty lines
    pub penalty_lines: Vec<f64>,
}

impl ZoneState {
    /// Rows removed from the playable area
    pub fn line_count(&self) -> u32 {
        self.penalty_lines.len().try_into().unwrap_or(u32::MAX)
    }

    /// True once the meter reaches `ratio` of its maximum
    pub fn is_charged(&self, ratio: f64) -> bool {
        self.meter >= self.max * ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ZONE_ACTIVATION_RATIO;

    #[test]
    fn charged_at_forty_percent() {
        let mut zone = ZoneState {
            meter: 7.9,
            max: 20.0,
            penalty_lines: Vec::new(),
        };
        assert!(!zone.is_charged(ZONE_ACTIVATION_RATIO));
        zone.meter = 8.0;
        assert!(zone.is_charged(ZONE_ACTIVATION_RATIO));
    }

    #[test]
    fn line_count_tracks_penalty_lines() {
        let zone = ZoneState {
            meter: 0.0,
            max: 20.0,
            penalty_lines: vec![19.0, 18.0, 17.5],
        };
        assert_eq!(zone.line_count(), 3);
    }
}
