use std::marker::PhantomData;

#[cfg(test)]
use mock_instant::global::Instant;
#[cfg(not(test))]
use std::time::Instant;

use crate::TimeUnit;

/// Output representation for elapsed readings.
///
/// A reading is always a whole number of units (truncating division).
/// Bounded integer implementations saturate at their maximum value when a
/// timer outlives their range; floating point converts the count directly.
pub trait ElapsedValue {
    /// Convert a whole-unit count into the output type.
    fn from_unit_count(count: u128) -> Self;
}

impl ElapsedValue for f64 {
    fn from_unit_count(count: u128) -> Self {
        count as f64
    }
}

impl ElapsedValue for f32 {
    fn from_unit_count(count: u128) -> Self {
        count as f32
    }
}

impl ElapsedValue for u32 {
    fn from_unit_count(count: u128) -> Self {
        count.try_into().unwrap_or(u32::MAX)
    }
}

impl ElapsedValue for u64 {
    fn from_unit_count(count: u128) -> Self {
        count.try_into().unwrap_or(u64::MAX)
    }
}

impl ElapsedValue for u128 {
    fn from_unit_count(count: u128) -> Self {
        count
    }
}

/// Measures elapsed time against a monotonic clock.
///
/// The start instant is captured on construction and replaced by [`reset`].
/// `V` selects the numeric type readings are reported in, `f64` by default.
/// A timer belongs to a single owner: [`reset`] takes `&mut self`, so
/// sharing one instance across threads requires external synchronization.
///
/// [`reset`]: ElapsedTimer::reset
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer<V = f64> {
    epoch: Instant,
    _value: PhantomData<V>,
}

impl<V: ElapsedValue> ElapsedTimer<V> {
    /// Create a timer and start timing.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            _value: PhantomData,
        }
    }

    /// Restart timing from the current instant.
    pub fn reset(&mut self) {
        self.epoch = Instant::now();
    }

    /// Elapsed time in `unit`, truncated to whole units.
    ///
    /// Samples the clock at the moment of the call; readings are never
    /// cached or derived from one another.
    fn read(&self, unit: TimeUnit) -> V {
        V::from_unit_count(unit.count_in(self.epoch.elapsed()))
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed(&self) -> V {
        self.read(TimeUnit::Milliseconds)
    }

    /// Elapsed time in nanoseconds.
    pub fn elapsed_nanoseconds(&self) -> V {
        self.read(TimeUnit::Nanoseconds)
    }

    /// Elapsed time in microseconds.
    pub fn elapsed_microseconds(&self) -> V {
        self.read(TimeUnit::Microseconds)
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_milliseconds(&self) -> V {
        self.read(TimeUnit::Milliseconds)
    }

    /// Elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> V {
        self.read(TimeUnit::Seconds)
    }

    /// Elapsed time in minutes.
    pub fn elapsed_minutes(&self) -> V {
        self.read(TimeUnit::Minutes)
    }

    /// Elapsed time in hours.
    pub fn elapsed_hours(&self) -> V {
        self.read(TimeUnit::Hours)
    }
}

impl<V: ElapsedValue> Default for ElapsedTimer<V> {
    fn default() -> Self {
        Self::new()
    }
}
