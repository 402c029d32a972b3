//! Laps recorded within a timer run

use std::fmt;

/// One measured sub-interval of a timer run.
/// `index` is zero-based within the run, `duration` is in seconds.
#[derive(Clone, Copy, PartialEq)]
pub struct Lap {
    index: usize,
    duration: f64,
}

impl Lap {
    #[inline]
    pub fn new(index: usize, duration: f64) -> Self {
        Lap { index, duration }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl fmt::Display for Lap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lap {}: {:?} s", self.index, self.duration)
    }
}

impl fmt::Debug for Lap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lap_fields() {
        let lap = Lap::new(0, 1.0);
        assert_eq!(lap.index(), 0);
        assert_eq!(lap.duration(), 1.0);
    }

    #[test]
    fn test_lap_rendering() {
        let lap = Lap::new(0, 1.0);
        assert_eq!(lap.to_string(), "Lap 0: 1.0 s");
        assert_eq!(format!("{:?}", lap), "<Lap 0: 1.0 s>");
        assert_eq!(Lap::new(3, 0.25).to_string(), "Lap 3: 0.25 s");
    }

    proptest! {
        #[test]
        fn prop_lap_keeps_what_it_was_given(index in 0usize..100_000, duration in 0.0f64..1.0e6) {
            let lap = Lap::new(index, duration);
            prop_assert_eq!(lap.index(), index);
            prop_assert_eq!(lap.duration(), duration);
            prop_assert_eq!(lap.to_string(), format!("Lap {}: {:?} s", index, duration));
        }
    }
}
