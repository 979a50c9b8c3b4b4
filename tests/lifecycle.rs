mod tests {
    use embassy_time::{Duration, Instant};
    use shakelight_core::lifecycle::PowerLifecycle;

    #[test]
    fn test_idle_window_boundaries() {
        let lifecycle =
            PowerLifecycle::new(Duration::from_millis(1000), Instant::from_millis(0));

        assert!(!lifecycle.is_expired(Instant::from_millis(999)));
        assert!(!lifecycle.is_expired(Instant::from_millis(1000)));
        assert!(lifecycle.is_expired(Instant::from_millis(1001)));
    }

    #[test]
    fn test_activity_resets_the_window() {
        let mut lifecycle =
            PowerLifecycle::new(Duration::from_millis(1000), Instant::from_millis(0));

        lifecycle.record_activity(Instant::from_millis(500));
        assert_eq!(lifecycle.last_interaction(), Instant::from_millis(500));
        assert!(!lifecycle.is_expired(Instant::from_millis(1500)));
        assert!(lifecycle.is_expired(Instant::from_millis(1501)));
    }

    #[test]
    fn test_zero_timeout_disables_the_check() {
        let lifecycle = PowerLifecycle::new(Duration::from_millis(0), Instant::from_millis(0));
        assert!(!lifecycle.is_expired(Instant::from_millis(10_000_000)));
    }

    #[test]
    fn test_sleep_is_one_way() {
        let mut lifecycle =
            PowerLifecycle::new(Duration::from_millis(1000), Instant::from_millis(0));

        assert!(!lifecycle.is_asleep());
        lifecycle.mark_asleep();
        assert!(lifecycle.is_asleep());

        // Once asleep the expiry check stays quiet; there is no wake path
        assert!(!lifecycle.is_expired(Instant::from_millis(10_000)));
        lifecycle.record_activity(Instant::from_millis(10_000));
        assert!(lifecycle.is_asleep());
    }
}
