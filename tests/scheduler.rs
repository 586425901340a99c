mod tests {
    use myrtio_light_runtime::{
        ClockMs, Command, CommandInterpreter, ConnectionId, ControllerConfig, EffectId,
        FrameScheduler, MessageSink, OutputDriver, PaletteBank, Renderer, Rgb, RuntimeState,
    };

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<Rgb>>,
        brightness: Vec<u8>,
    }

    impl OutputDriver for Recorder {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }

        fn set_brightness(&mut self, brightness: u8) {
            self.brightness.push(brightness);
        }
    }

    struct Discard;

    impl MessageSink for Discard {
        fn send(&mut self, _connection: ConnectionId, _message: &str) {}
    }

    fn scheduler() -> FrameScheduler<Recorder, 8> {
        let renderer = Renderer::new(PaletteBank::builtin(), EffectId::Solid);
        FrameScheduler::new(renderer, Recorder::default())
    }

    fn apply(state: &mut RuntimeState, command: Command, now: u32) {
        CommandInterpreter::new(PaletteBank::builtin()).apply(
            state,
            command,
            ConnectionId(0),
            ClockMs(now),
            &mut Discard,
        );
    }

    fn rotating_state(speed_ms: u16) -> RuntimeState {
        RuntimeState::from_config(&ControllerConfig {
            speed_ms,
            hue_rotation: true,
            ..ControllerConfig::default()
        })
    }

    #[test]
    fn test_frame_gate() {
        let mut scheduler = scheduler();
        let mut state = RuntimeState::new();

        let rendered: Vec<bool> = [0, 19, 20, 39, 40, 45, 60]
            .into_iter()
            .map(|now| scheduler.tick(&mut state, ClockMs(now)).rendered)
            .collect();
        assert_eq!(rendered, [false, false, true, false, true, false, true]);
        assert_eq!(scheduler.output().frames.len(), 3);
        assert_eq!(scheduler.output().frames[0].len(), 8);
        assert_eq!(state.palette_phase(), 3);
        assert_eq!(state.last_render(), ClockMs(60));
    }

    #[test]
    fn test_frame_gate_follows_speed() {
        let mut scheduler = scheduler();
        let mut state = RuntimeState::new();
        apply(&mut state, Command::SetSpeed(100), 0);

        assert!(scheduler.tick(&mut state, ClockMs(100)).rendered);
        assert!(!scheduler.tick(&mut state, ClockMs(150)).rendered);
        assert!(!scheduler.tick(&mut state, ClockMs(199)).rendered);
        assert!(scheduler.tick(&mut state, ClockMs(200)).rendered);
    }

    #[test]
    fn test_frame_gate_across_overflow() {
        let mut scheduler = scheduler();
        let mut state = RuntimeState::new();
        let base = u32::MAX - 30;

        assert!(scheduler.tick(&mut state, ClockMs(base)).rendered);
        assert!(!scheduler.tick(&mut state, ClockMs(base + 10)).rendered);
        assert!(scheduler.tick(&mut state, ClockMs(base + 20)).rendered);
        assert!(!scheduler.tick(&mut state, ClockMs(0)).rendered);
        assert!(scheduler.tick(&mut state, ClockMs(9)).rendered);
    }

    #[test]
    fn test_sleep_fires_once() {
        let mut scheduler = scheduler();
        let mut state = RuntimeState::new();
        apply(&mut state, Command::Sleep(100), 1000);

        assert!(!scheduler.tick(&mut state, ClockMs(1099)).slept);
        assert_eq!(state.brightness(), 100);

        assert!(scheduler.tick(&mut state, ClockMs(1100)).slept);
        assert_eq!(state.brightness(), 0);
        assert_eq!(state.sleep_deadline(), None);
        assert_eq!(scheduler.output().brightness, [0]);

        // Brightness raised after the blackout is left alone
        apply(&mut state, Command::SetBrightness(0x40), 1110);
        assert!(!scheduler.tick(&mut state, ClockMs(1120)).slept);
        assert_eq!(state.brightness(), 0x40);
    }

    #[test]
    fn test_sleep_tolerance_window() {
        let mut late = RuntimeState::new();
        let mut on_edge = RuntimeState::new();
        apply(&mut late, Command::Sleep(100), 1000);
        apply(&mut on_edge, Command::Sleep(100), 1000);

        assert!(scheduler().tick(&mut on_edge, ClockMs(1150)).slept);

        // A poll past the window misses the deadline and the sleep stays armed
        assert!(!scheduler().tick(&mut late, ClockMs(1151)).slept);
        assert_eq!(late.sleep_deadline(), Some(ClockMs(1100)));
        assert_eq!(late.brightness(), 100);

        // The armed deadline now lies a full clock period ahead
        assert_eq!(late.sleep_remaining(ClockMs(1151)), u32::MAX - 50);
        assert_eq!(
            late.status(ClockMs(1151)).to_string(),
            "!4294967245,20,0,0,100"
        );
    }

    #[test]
    fn test_sleep_across_overflow() {
        let mut scheduler = scheduler();
        let mut state = RuntimeState::new();
        apply(&mut state, Command::Sleep(40), u32::MAX - 20);
        assert_eq!(state.sleep_deadline(), Some(ClockMs(19)));

        assert!(!scheduler.tick(&mut state, ClockMs(u32::MAX)).slept);
        assert!(!scheduler.tick(&mut state, ClockMs(18)).slept);
        assert!(scheduler.tick(&mut state, ClockMs(19)).slept);
        assert_eq!(state.brightness(), 0);
    }

    #[test]
    fn test_hue_rotation_is_independent_of_frame_rate() {
        let mut scheduler = scheduler();
        let mut state = rotating_state(1000);

        for now in (1000..=1500).step_by(10) {
            scheduler.tick(&mut state, ClockMs(now));
        }
        assert_eq!(state.hue(), 10);
        assert_eq!(scheduler.output().frames.len(), 1);
    }

    #[test]
    fn test_hue_rotation_catches_up() {
        let mut scheduler = scheduler();
        let mut state = rotating_state(20);

        let steps: Vec<u32> = [1000, 1075, 1130, 1200]
            .into_iter()
            .map(|now| scheduler.tick(&mut state, ClockMs(now)).hue_steps)
            .collect();
        assert_eq!(steps, [0, 1, 1, 2]);
        assert_eq!(state.hue(), 4);
    }

    #[test]
    fn test_hue_rotation_restarts_after_toggle() {
        let mut scheduler = scheduler();
        let mut state = rotating_state(20);

        scheduler.tick(&mut state, ClockMs(0));
        assert_eq!(scheduler.tick(&mut state, ClockMs(120)).hue_steps, 2);

        apply(&mut state, Command::ToggleHueRotation, 150);
        assert_eq!(scheduler.tick(&mut state, ClockMs(200)).hue_steps, 0);
        assert_eq!(state.hue(), 2);

        apply(&mut state, Command::ToggleHueRotation, 250);
        assert_eq!(scheduler.tick(&mut state, ClockMs(300)).hue_steps, 0);
        assert_eq!(scheduler.tick(&mut state, ClockMs(349)).hue_steps, 0);
        assert_eq!(scheduler.tick(&mut state, ClockMs(350)).hue_steps, 1);
        assert_eq!(state.hue(), 3);
    }

    #[test]
    fn test_hue_rotation_across_overflow() {
        let mut scheduler = scheduler();
        let mut state = rotating_state(20);

        scheduler.tick(&mut state, ClockMs(u32::MAX - 49));
        assert_eq!(scheduler.tick(&mut state, ClockMs(0)).hue_steps, 1);
        assert_eq!(scheduler.tick(&mut state, ClockMs(50)).hue_steps, 1);
        assert_eq!(state.hue(), 2);
    }

    #[test]
    fn test_hue_wraps() {
        let mut scheduler = scheduler();
        let mut state = RuntimeState::from_config(&ControllerConfig {
            hue: 250,
            hue_rotation: true,
            ..ControllerConfig::default()
        });

        scheduler.tick(&mut state, ClockMs(0));
        scheduler.tick(&mut state, ClockMs(500));
        assert_eq!(state.hue(), 4);
    }
}
