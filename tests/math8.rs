mod tests {
    use shakelight_core::math8::{blend8, scale8, sin8, triangle8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_sin8_endpoints() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(192), 0);
    }

    #[test]
    fn test_sin8_stays_in_range() {
        for theta in 0..=255u8 {
            // u8 output is total by construction; check the wave shape
            // rises in the first quarter and falls in the third.
            let value = sin8(theta);
            if theta < 64 {
                assert!(value >= 128, "theta={theta} value={value}");
            }
            if (128..192).contains(&theta) {
                assert!(value <= 128, "theta={theta} value={value}");
            }
        }
    }

    #[test]
    fn test_triangle8() {
        assert_eq!(triangle8(0), 0);
        assert_eq!(triangle8(64), 128);
        assert_eq!(triangle8(127), 254);
        assert_eq!(triangle8(128), 254);
        assert_eq!(triangle8(255), 0);
    }
}
