mod tests {
    use embassy_time::{Duration, Instant};
    use shakelight_core::color::Rgb;
    use shakelight_core::trigger::TriggerController;

    const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };

    fn controller() -> TriggerController {
        TriggerController::new(Duration::from_millis(600), 255, CYAN)
    }

    #[test]
    fn test_debounce_window() {
        let mut trigger = controller();

        // First edge well past boot is accepted
        assert!(trigger.poll_sensor(true, Instant::from_millis(1000)));
        // A second edge inside the window is chatter
        assert!(!trigger.poll_sensor(true, Instant::from_millis(1300)));
        // Past the window it counts again
        assert!(trigger.poll_sensor(true, Instant::from_millis(1700)));
    }

    #[test]
    fn test_inactive_level_never_triggers() {
        let mut trigger = controller();
        assert!(!trigger.poll_sensor(false, Instant::from_millis(5000)));
    }

    #[test]
    fn test_auto_mode_gates_the_sensor() {
        let mut trigger = controller();
        trigger.set_auto_mode(false);
        assert!(!trigger.poll_sensor(true, Instant::from_millis(5000)));

        trigger.set_auto_mode(true);
        assert!(trigger.poll_sensor(true, Instant::from_millis(5000)));
    }

    #[test]
    fn test_toggles() {
        let mut trigger = controller();
        assert!(trigger.auto_mode());
        assert!(!trigger.toggle_auto());
        assert!(trigger.toggle_auto());

        assert!(!trigger.manual_mode());
        assert!(trigger.toggle_manual());
        assert!(!trigger.toggle_manual());
    }

    #[test]
    fn test_brightness_clamping() {
        let mut trigger = controller();
        assert_eq!(trigger.set_brightness(-5), 0);
        assert_eq!(trigger.set_brightness(300), 255);
        assert_eq!(trigger.set_brightness(128), 128);
        assert_eq!(trigger.brightness(), 128);
    }

    #[test]
    fn test_color_clamping() {
        let mut trigger = controller();
        let applied = trigger.set_color(-5, 300, 128);
        assert_eq!(
            applied,
            Rgb {
                r: 0,
                g: 255,
                b: 128
            }
        );
        assert_eq!(trigger.color(), applied);
    }
}
