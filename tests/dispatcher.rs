mod tests {
    use embassy_time::Instant;
    use shakelight_core::color::Rgb;
    use shakelight_core::dispatcher::ModeDispatcher;
    use shakelight_core::pattern::PatternId;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };

    fn is_dark(frame: &[Rgb]) -> bool {
        frame.iter().all(|led| *led == BLACK)
    }

    #[test]
    fn test_set_mode_is_idempotent() {
        let now = Instant::from_millis(0);
        let mut once = ModeDispatcher::new(PatternId::Rainbow, CYAN, now);
        let mut twice = ModeDispatcher::new(PatternId::Rainbow, CYAN, now);

        once.set_mode(PatternId::Chase, CYAN, now);
        twice.set_mode(PatternId::Chase, CYAN, now);
        twice.set_mode(PatternId::Chase, CYAN, now);

        let render_at = Instant::from_millis(150);
        let mut frame_once = [BLACK; 8];
        let mut frame_twice = [BLACK; 8];
        once.render_into(render_at, &mut frame_once);
        twice.render_into(render_at, &mut frame_twice);

        assert_eq!(once.mode(), twice.mode());
        assert_eq!(frame_once, frame_twice);
    }

    #[test]
    fn test_advance_mode_closes_the_cycle() {
        let now = Instant::from_millis(0);
        let mut dispatcher = ModeDispatcher::new(PatternId::Rainbow, CYAN, now);

        for _ in 0..PatternId::COUNT {
            dispatcher.advance_mode(CYAN, now);
        }
        assert_eq!(dispatcher.mode(), PatternId::Rainbow);
    }

    #[test]
    fn test_advance_mode_steps_by_one() {
        let now = Instant::from_millis(0);
        let mut dispatcher = ModeDispatcher::new(PatternId::Rainbow, CYAN, now);

        assert_eq!(dispatcher.advance_mode(CYAN, now), PatternId::Flash);
        assert_eq!(dispatcher.mode(), PatternId::Flash);
    }

    #[test]
    fn test_clear_suppresses_rendering_until_set_mode() {
        let mut dispatcher =
            ModeDispatcher::new(PatternId::Rainbow, CYAN, Instant::from_millis(0));
        let mut frame = [BLACK; 8];

        dispatcher.render_into(Instant::from_millis(30), &mut frame);
        assert!(!is_dark(&frame));

        dispatcher.clear();
        assert!(dispatcher.is_cleared());
        for tick in 2..6u64 {
            dispatcher.render_into(Instant::from_millis(tick * 30), &mut frame);
            assert!(is_dark(&frame));
        }

        dispatcher.set_mode(PatternId::Rainbow, CYAN, Instant::from_millis(180));
        assert!(!dispatcher.is_cleared());
        dispatcher.render_into(Instant::from_millis(210), &mut frame);
        assert!(!is_dark(&frame));
    }

    #[test]
    fn test_rearm_leaves_pattern_state_alone() {
        let mut dispatcher =
            ModeDispatcher::new(PatternId::Rainbow, CYAN, Instant::from_millis(0));

        dispatcher.clear();
        dispatcher.rearm();
        assert!(!dispatcher.is_cleared());
        assert_eq!(dispatcher.mode(), PatternId::Rainbow);
    }

    #[test]
    fn test_set_mode_records_entry_timestamp() {
        let mut dispatcher =
            ModeDispatcher::new(PatternId::Rainbow, CYAN, Instant::from_millis(0));

        dispatcher.set_mode(PatternId::Beat, CYAN, Instant::from_millis(500));
        assert_eq!(dispatcher.entered_at(), Instant::from_millis(500));
    }

    #[test]
    fn test_switching_back_resets_mode_state() {
        // A revisited mode starts from defaults: its first frame matches
        // a freshly constructed dispatcher's first frame.
        let now = Instant::from_millis(0);
        let mut revisited = ModeDispatcher::new(PatternId::Breathing, CYAN, now);
        let mut frame = [BLACK; 8];
        for tick in 1..40u64 {
            revisited.render_into(Instant::from_millis(tick * 30), &mut frame);
        }
        revisited.set_mode(PatternId::Rainbow, CYAN, Instant::from_millis(1200));
        revisited.set_mode(PatternId::Breathing, CYAN, Instant::from_millis(1230));

        let mut fresh = ModeDispatcher::new(PatternId::Breathing, CYAN, now);
        let mut frame_fresh = [BLACK; 8];
        let mut frame_revisited = [BLACK; 8];

        // Both breathing instances are at phase zero; with no sub-update
        // elapsed they render the same dark-end frame.
        fresh.render_into(Instant::from_millis(10), &mut frame_fresh);
        revisited.render_into(Instant::from_millis(10), &mut frame_revisited);
        assert_eq!(frame_fresh, frame_revisited);
    }
}
