mod tests {
    use myrtio_light_runtime::ClockMs;
    use myrtio_light_runtime::math8::{
        Random16, beat16, beatsin8, beatsin16, blend8, qadd8, scale8, scale16, sin8, sin16,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale16() {
        assert_eq!(scale16(65535, 10), 10);
        assert_eq!(scale16(0, 10), 0);
        assert_eq!(scale16(32768, 100), 50);
        assert_eq!(scale16(65535, 65535), 65535);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_qadd8() {
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(20, 30), 50);
    }

    #[test]
    fn test_sin8() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert!(sin8(192) <= 1);
    }

    #[test]
    fn test_sin16() {
        assert_eq!(sin16(0), 0);
        assert!(sin16(16384) >= 32766);
        assert!(sin16(49152) <= -32766);
    }

    #[test]
    fn test_beat16_starts_at_zero() {
        assert_eq!(beat16(60, ClockMs(0)), 0);
        // One beat per second at 60 bpm: half a second is half a turn
        let half = beat16(60, ClockMs(500));
        assert!((32_000..=33_500).contains(&half), "{half}");
    }

    #[test]
    fn test_beatsin16_sweeps_whole_range() {
        for len in [2u16, 10, 60] {
            let last = len - 1;
            let mut seen = vec![false; usize::from(len)];
            for ms in 0..60_000u32 {
                let value = beatsin16(13, 0, last, ClockMs(ms));
                assert!(value <= last, "{value} at {ms}");
                seen[usize::from(value)] = true;
            }
            assert!(seen.iter().all(|hit| *hit), "len {len}: {seen:?}");
        }
    }

    #[test]
    fn test_beatsin16_respects_low() {
        for ms in (0..60_000u32).step_by(7) {
            let value = beatsin16(7, 10, 20, ClockMs(ms));
            assert!((10..=20).contains(&value), "{value} at {ms}");
        }
    }

    #[test]
    fn test_beatsin8_stays_in_range() {
        for ms in (0..60_000u32).step_by(3) {
            let value = beatsin8(62, 64, 255, ClockMs(ms));
            assert!(value >= 64);
        }
    }

    #[test]
    fn test_random16_is_deterministic() {
        let mut a = Random16::new(42);
        let mut b = Random16::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u16(), b.next_u16());
        }
    }

    #[test]
    fn test_random16_below_respects_limit() {
        let mut rng = Random16::default();
        for _ in 0..1000 {
            assert!(rng.below_u16(60) < 60);
            assert!(rng.below_u8(64) < 64);
        }
        assert_eq!(rng.below_u16(0), 0);
    }
}
