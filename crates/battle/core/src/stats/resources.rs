//! Resource pools (HP, MP).
//!
//! Both current and maximum values are persisted: maxima grow through
//! progression and are not derived from attributes.

/// A bounded resource pool. Invariant: `current <= maximum`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` into range.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a full meter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Removes up to `amount`, returning how much was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Restores up to `amount` without exceeding the maximum.
    ///
    /// Returns how much was actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.missing());
        self.current += restored;
        restored
    }

    /// Spends exactly `amount` or nothing at all.
    pub fn try_spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }

    pub const fn missing(&self) -> u32 {
        self.maximum - self.current
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Current value as a fraction of the maximum (0.0 when the pool is zero-sized).
    pub fn ratio(&self) -> f64 {
        if self.maximum == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.maximum)
    }

    /// Raises the maximum and refills the pool.
    pub fn grow_and_refill(&mut self, amount: u32) {
        self.maximum = self.maximum.saturating_add(amount);
        self.current = self.maximum;
    }

    pub const fn is_valid(&self) -> bool {
        self.current <= self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_clamps_at_zero() {
        let mut hp = ResourceMeter::full(30);
        assert_eq!(hp.drain(12), 12);
        assert_eq!(hp.drain(100), 18);
        assert_eq!(hp.current, 0);
    }

    #[test]
    fn restore_clamps_at_maximum() {
        let mut hp = ResourceMeter::new(10, 30);
        assert_eq!(hp.restore(15), 15);
        assert_eq!(hp.restore(15), 5);
        assert_eq!(hp.current, 30);
    }

    #[test]
    fn try_spend_is_all_or_nothing() {
        let mut mp = ResourceMeter::new(3, 10);
        assert!(!mp.try_spend(4));
        assert_eq!(mp.current, 3);
        assert!(mp.try_spend(3));
        assert_eq!(mp.current, 0);
    }

    #[test]
    fn new_clamps_current() {
        let meter = ResourceMeter::new(50, 20);
        assert_eq!(meter.current, 20);
        assert!(meter.is_valid());
    }
}
