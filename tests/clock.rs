mod tests {
    use myrtio_light_runtime::{ClockMs, Instant};

    #[test]
    fn test_elapsed_since_across_overflow() {
        let before = ClockMs(u32::MAX - 9);
        let after = ClockMs(10);
        assert_eq!(after.elapsed_since(before), 20);
    }

    #[test]
    fn test_has_elapsed() {
        let start = ClockMs(u32::MAX - 4);
        assert!(!start.offset(4).has_elapsed(start, 5));
        assert!(start.offset(5).has_elapsed(start, 5));
        assert_eq!(start.offset(5), ClockMs(0));
    }

    #[test]
    fn test_is_within() {
        let mark = ClockMs(u32::MAX - 20);
        assert!(mark.is_within(mark, 50));
        assert!(ClockMs(29).is_within(mark, 50));
        assert!(!ClockMs(30).is_within(mark, 50));
        // Before the mark counts as far away
        assert!(!ClockMs(u32::MAX - 21).is_within(mark, 50));
    }

    #[test]
    fn test_from_instant_truncates() {
        let instant = Instant::from_millis(u64::from(u32::MAX) + 5);
        assert_eq!(ClockMs::from(instant), ClockMs(4));
    }
}
