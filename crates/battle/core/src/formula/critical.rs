//! Critical hit chances.

/// Damage multiplier applied on a critical hit.
pub const CRITICAL_MULTIPLIER: f64 = 1.5;

/// Physical critical chance in percent.
///
/// ```text
/// min(luck / 2, 25)
/// ```
pub fn physical_critical_percent(luck: u32) -> f64 {
    (f64::from(luck) / 2.0).min(25.0)
}

/// Magic critical chance in percent.
///
/// ```text
/// min(luck / 4, 15)
/// ```
pub fn magic_critical_percent(luck: u32) -> f64 {
    (f64::from(luck) / 4.0).min(15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chances_are_capped() {
        assert_eq!(physical_critical_percent(15), 7.5);
        assert_eq!(physical_critical_percent(80), 25.0);
        assert_eq!(magic_critical_percent(20), 5.0);
        assert_eq!(magic_critical_percent(200), 15.0);
    }
}
