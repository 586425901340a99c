mod tests {
    use myrtio_light_runtime::PaletteBank;
    use myrtio_light_runtime::color::{BLACK, Rgb, blend_colors, rgb_from_u32};
    use myrtio_light_runtime::palette::PARTY_PALETTE;

    #[test]
    fn test_builtin_palettes_span_full_axis() {
        let bank = PaletteBank::builtin();
        assert_eq!(bank.len(), 7);
        for palette in bank.iter().chain(core::iter::once(&PARTY_PALETTE)) {
            let stops = palette.stops();
            assert_eq!(stops.first().map(|s| s.position), Some(0), "{}", palette.name());
            assert_eq!(stops.last().map(|s| s.position), Some(255), "{}", palette.name());
            assert!(
                stops.windows(2).all(|pair| pair[0].position <= pair[1].position),
                "{}",
                palette.name()
            );
        }
    }

    #[test]
    fn test_sample_hits_stops() {
        let bank = PaletteBank::builtin();
        let sunset = bank.get(0).unwrap();
        assert_eq!(sunset.sample(0), rgb_from_u32(0x780000));
        assert_eq!(sunset.sample(51), rgb_from_u32(0xFF6800));
        assert_eq!(sunset.sample(255), rgb_from_u32(0x0000A0));
    }

    #[test]
    fn test_sample_blends_between_stops() {
        let bank = PaletteBank::builtin();
        let retro = bank.get(5).unwrap();
        assert_eq!(retro.name(), "retro");
        let expected = blend_colors(rgb_from_u32(0xBC8701), rgb_from_u32(0x2E0701), 128);
        assert_eq!(retro.sample(128), expected);
    }

    #[test]
    fn test_unknown_index_is_black() {
        let bank = PaletteBank::builtin();
        assert_eq!(bank.sample(200, 10), BLACK);
    }

    #[test]
    fn test_next_index_wraps() {
        let bank = PaletteBank::builtin();
        assert_eq!(bank.next_index(0), 1);
        assert_eq!(bank.next_index(6), 0);
    }

    #[test]
    fn test_rotate_samples_phase_plus_index() {
        let bank = PaletteBank::builtin();
        let mut leds = [BLACK; 10];
        bank.rotate(&mut leds, 2, 250);
        for (i, led) in leds.iter().enumerate() {
            let position = 250u8.wrapping_add(i as u8);
            assert_eq!(*led, bank.sample(2, position));
        }
    }

    #[test]
    fn test_party_palette_wraps_to_first_color() {
        assert_eq!(PARTY_PALETTE.sample(255), PARTY_PALETTE.sample(0));
        assert_eq!(PARTY_PALETTE.sample(16), Rgb::new(0x84, 0x00, 0x7C));
    }
}
