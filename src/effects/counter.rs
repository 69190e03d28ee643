use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// One frame of a counter ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Running(u32),
    Done(u32),
}

impl Frame {
    pub fn value(self) -> u32 {
        match self {
            Frame::Running(v) | Frame::Done(v) => v,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Frame::Done(_))
    }
}

/// Linear ramp from 0 to `target`, sized so it finishes in about
/// `COUNTER_DURATION_MS` at one step per animation frame.
#[derive(Clone, Debug)]
pub struct CounterRamp {
    target: u32,
    current: f64,
    increment: f64,
}

impl CounterRamp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            current: 0.0,
            increment: f64::from(target) / (COUNTER_DURATION_MS / COUNTER_FRAME_MS),
        }
    }

    pub fn tick(&mut self) -> Frame {
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            Frame::Running(self.current.floor() as u32)
        } else {
            Frame::Done(self.target)
        }
    }
}

/// A stat number that counts up once, the first time it is triggered.
#[derive(Clone, Debug)]
pub struct StatCounter {
    target: u32,
    animated: bool,
}

impl StatCounter {
    pub fn new(target: u32) -> Self {
        Self { target, animated: false }
    }

    pub fn has_animated(&self) -> bool {
        self.animated
    }

    pub fn start(&mut self) -> Option<CounterRamp> {
        if self.animated {
            return None;
        }
        self.animated = true;
        Some(CounterRamp::new(self.target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut ramp: CounterRamp) -> Vec<u32> {
        let mut values = Vec::new();
        loop {
            let frame = ramp.tick();
            values.push(frame.value());
            if frame.is_done() {
                return values;
            }
        }
    }

    #[test]
    fn ramps_monotonically_to_target() {
        let values = run(CounterRamp::new(250));

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 250));
        assert_eq!(values.last(), Some(&250));
        // 2000ms at 16ms per frame.
        assert_eq!(values.len(), 125);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(run(CounterRamp::new(0)), vec![0]);
    }

    #[test]
    fn small_targets_still_end_exactly() {
        let values = run(CounterRamp::new(7));
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&7));
    }

    #[test]
    fn animates_only_once() {
        let mut counter = StatCounter::new(250);
        assert!(!counter.has_animated());
        assert!(counter.start().is_some());
        assert!(counter.has_animated());
        assert!(counter.start().is_none());
    }
}
