//! Server-tick driven trigger for the analysis pass

use crate::core::types::Tick;

#[derive(Debug, Clone)]
pub struct AnalysisSchedule {
    interval: Tick,
    current_tick: Tick,
}

impl AnalysisSchedule {
    /// Fire every `interval` ticks (an interval of 0 is treated as 1)
    pub fn new(interval: Tick) -> Self {
        Self {
            interval: interval.max(1),
            current_tick: 0,
        }
    }

    pub fn interval(&self) -> Tick {
        self.interval
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Advance one server tick; true when an analysis pass is due
    pub fn advance(&mut self) -> bool {
        self.current_tick += 1;
        self.current_tick % self.interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_interval() {
        let mut schedule = AnalysisSchedule::new(3);
        let fired: Vec<bool> = (0..7).map(|_| schedule.advance()).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true, false]);
        assert_eq!(schedule.current_tick(), 7);
    }

    #[test]
    fn test_zero_interval_fires_every_tick() {
        let mut schedule = AnalysisSchedule::new(0);
        assert_eq!(schedule.interval(), 1);
        assert!(schedule.advance());
        assert!(schedule.advance());
    }
}
