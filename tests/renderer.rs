mod support;

mod tests {
    use myrtio_button_fsm::{
        Delay, Duration, Flash, IndicatorDriver, LampColors, Lamps, LightPattern, Renderer,
        SmartLedIndicators,
    };
    use smart_leds::{RGB8, SmartLedsWrite};

    use crate::support::{RecordingDriver, ms};

    #[derive(Default)]
    struct RecordingDelay {
        sleeps: Vec<Duration>,
    }

    impl Delay for RecordingDelay {
        fn delay(&mut self, duration: Duration) {
            self.sleeps.push(duration);
        }
    }

    #[test]
    fn test_new_switches_everything_off() {
        let renderer = Renderer::new(RecordingDriver::default());
        assert_eq!(renderer.driver().history, vec![Lamps::OFF]);
        assert_eq!(renderer.current(), Lamps::OFF);
    }

    #[test]
    fn test_set_pattern_does_not_block() {
        let mut renderer = Renderer::new(RecordingDriver::default());
        renderer.set_pattern(Lamps::RED);
        assert_eq!(renderer.current(), Lamps::RED);
        assert_eq!(renderer.driver().history, vec![Lamps::OFF, Lamps::RED]);
    }

    #[test]
    fn test_flash() {
        let mut renderer = Renderer::new(RecordingDriver::default());
        let mut delay = RecordingDelay::default();

        renderer.flash(Lamps::RED_BLUE, ms(150), ms(100), &mut delay);

        assert_eq!(
            renderer.driver().history,
            vec![Lamps::OFF, Lamps::RED_BLUE, Lamps::OFF]
        );
        assert_eq!(delay.sleeps, vec![ms(150), ms(100)]);
        assert_eq!(renderer.current(), Lamps::OFF);
    }

    #[test]
    fn test_flash_skips_zero_pause() {
        let mut renderer = Renderer::new(RecordingDriver::default());
        let mut delay = RecordingDelay::default();

        renderer.flash(Lamps::YELLOW, ms(200), ms(0), &mut delay);

        assert_eq!(delay.sleeps, vec![ms(200)]);
        assert_eq!(renderer.current(), Lamps::OFF);
    }

    #[test]
    fn test_render_flashing_pattern() {
        let mut renderer = Renderer::new(RecordingDriver::default());
        let mut delay = RecordingDelay::default();
        let flash = Flash::new(ms(350), ms(150), 6);

        renderer.render(LightPattern::flashing(Lamps::RED_YELLOW, flash), &mut delay);

        let lit = renderer
            .driver()
            .history
            .iter()
            .filter(|lamps| **lamps == Lamps::RED_YELLOW)
            .count();
        assert_eq!(lit, 6);
        assert_eq!(delay.sleeps.len(), 12);
        assert_eq!(delay.sleeps.iter().filter(|sleep| **sleep == ms(350)).count(), 6);
    }

    #[test]
    fn test_render_steady_pattern() {
        let mut renderer = Renderer::new(RecordingDriver::default());
        let mut delay = RecordingDelay::default();

        renderer.render(LightPattern::steady(Lamps::RED), &mut delay);

        assert!(delay.sleeps.is_empty());
        assert_eq!(renderer.current(), Lamps::RED);
    }

    #[test]
    fn test_lamps_display() {
        assert_eq!(Lamps::OFF.to_string(), "ryb");
        assert_eq!(Lamps::RED_YELLOW.to_string(), "RYb");
        assert_eq!(Lamps::BLUE.to_string(), "ryB");
        assert!(Lamps::OFF.is_off());
        assert!(!Lamps::RED.is_off());
    }

    #[derive(Default)]
    struct StripWriter {
        frames: Vec<Vec<RGB8>>,
        fail: bool,
    }

    impl SmartLedsWrite for StripWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_smart_led_pixels() {
        let mut indicators = SmartLedIndicators::new(StripWriter::default());
        indicators.set(Lamps::RED_BLUE);
        indicators.set(Lamps::OFF);

        let dark = RGB8::new(0, 0, 0);
        let colors = LampColors::DEFAULT;
        let writer = indicators.into_inner();
        assert_eq!(
            writer.frames,
            vec![vec![colors.red, dark, colors.blue], vec![dark, dark, dark]]
        );
    }

    #[test]
    fn test_smart_led_custom_colors() {
        let colors = LampColors {
            red: RGB8::new(10, 0, 0),
            yellow: RGB8::new(10, 10, 0),
            blue: RGB8::new(0, 0, 10),
        };
        let indicators = SmartLedIndicators::with_colors(StripWriter::default(), colors);
        assert_eq!(
            indicators.pixels(Lamps::YELLOW),
            [RGB8::new(0, 0, 0), colors.yellow, RGB8::new(0, 0, 0)]
        );
    }

    #[test]
    fn test_smart_led_write_failure_is_not_fatal() {
        let writer = StripWriter {
            fail: true,
            ..Default::default()
        };
        let mut renderer = Renderer::new(SmartLedIndicators::new(writer));
        renderer.set_pattern(Lamps::RED);
        assert_eq!(renderer.current(), Lamps::RED);
    }
}
