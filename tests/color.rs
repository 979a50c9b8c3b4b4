mod tests {
    use shakelight_core::color::{Rgb, blend_colors, lerp_color, rgb_from_u32};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_lerp_color_endpoints() {
        assert_eq!(lerp_color(RED, BLUE, 0, 20), RED);
        assert_eq!(lerp_color(RED, BLUE, 20, 20), BLUE);
        // Clamped, never extrapolated
        assert_eq!(lerp_color(RED, BLUE, 25, 20), BLUE);
    }

    #[test]
    fn test_lerp_color_midpoint() {
        assert_eq!(
            lerp_color(RED, BLUE, 10, 20),
            Rgb {
                r: 127,
                g: 0,
                b: 127
            }
        );
    }

    #[test]
    fn test_lerp_color_monotonic() {
        let max_t = 40;
        let mut previous = lerp_color(RED, BLUE, 0, max_t);
        for t in 1..=max_t {
            let current = lerp_color(RED, BLUE, t, max_t);
            assert!(current.r <= previous.r, "t={t}");
            assert!(current.b >= previous.b, "t={t}");
            assert_eq!(current.g, 0);
            previous = current;
        }

        let mut previous = lerp_color(BLACK, WHITE, 0, max_t);
        for t in 1..=max_t {
            let current = lerp_color(BLACK, WHITE, t, max_t);
            assert!(current.r >= previous.r, "t={t}");
            assert!(current.g >= previous.g, "t={t}");
            assert!(current.b >= previous.b, "t={t}");
            previous = current;
        }
    }

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF0000), RED);
        assert_eq!(rgb_from_u32(0x0000FF), BLUE);
        assert_eq!(
            rgb_from_u32(0x123456),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }
}
