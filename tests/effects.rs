mod tests {
    use core::convert::Infallible;

    use myrtio_light_sequence::{
        Animation, ByteOrder, Canvas, Duration, FrameBuffer, Instant, Pin, PixelBuf,
        PixelBufConfig, RawTransmitter, Rgb, Rgbw, board,
        animation::{
            ChaseEffect, CometEffect, CometMotion, Effect, RainbowEffect, RainbowSparkleEffect,
            SolidEffect, SparkleEffect,
        },
        color::colorwheel,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<u8>>,
    }

    impl RawTransmitter for Recorder {
        type Error = Infallible;

        fn transmit(&mut self, _pin: Pin, buf: &[u8]) -> Result<(), Self::Error> {
            self.frames.push(buf.to_vec());
            Ok(())
        }
    }

    fn frame(len: usize) -> FrameBuffer<64> {
        FrameBuffer::new(ByteOrder::GRB, len, 1.0).unwrap()
    }

    fn strip(len: usize) -> PixelBuf<Recorder, 64> {
        let config = PixelBufConfig {
            byte_order: ByteOrder::GRB,
            ..PixelBufConfig::default()
        };
        PixelBuf::new(Recorder::default(), board::D13, len, config).unwrap()
    }

    fn rgb(color: Rgb) -> Option<Rgbw> {
        Some(Rgbw::new(color.r, color.g, color.b, 0))
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    /// Pixel colors of a GRB frame as (r, g, b)
    fn decode(bytes: &[u8]) -> Vec<(u8, u8, u8)> {
        bytes
            .chunks_exact(3)
            .map(|pixel| (pixel[1], pixel[0], pixel[2]))
            .collect()
    }

    #[test]
    fn test_rainbow_spreads_wheel_along_strip() {
        let mut canvas = frame(4);
        let mut rainbow = RainbowEffect::new(Duration::from_millis(256));

        assert!(!rainbow.draw(at(1000), &mut canvas));
        assert_eq!(canvas.get(0), rgb(colorwheel(0)));
        assert_eq!(canvas.get(1), rgb(colorwheel(1)));
        assert_eq!(canvas.get(3), rgb(colorwheel(3)));
    }

    #[test]
    fn test_rainbow_scrolls_with_time_and_wraps() {
        let mut canvas = frame(4);
        let mut rainbow = RainbowEffect::new(Duration::from_millis(256));

        rainbow.draw(at(1000), &mut canvas);
        assert!(!rainbow.draw(at(1128), &mut canvas));
        assert_eq!(canvas.get(0), rgb(colorwheel(128)));
        assert_eq!(canvas.get(1), rgb(colorwheel(129)));

        // 300 ms past the start is 44 ms into the second turn
        assert!(rainbow.draw(at(1300), &mut canvas));
        assert_eq!(canvas.get(0), rgb(colorwheel(44)));
    }

    #[test]
    fn test_rainbow_reset_restarts_the_wheel() {
        let mut canvas = frame(4);
        let mut rainbow = RainbowEffect::new(Duration::from_millis(256));
        rainbow.draw(at(0), &mut canvas);
        rainbow.draw(at(100), &mut canvas);

        rainbow.reset();
        rainbow.draw(at(5000), &mut canvas);
        assert_eq!(canvas.get(0), rgb(colorwheel(0)));
    }

    #[test]
    fn test_chase_moves_one_pixel_per_frame() {
        let mut canvas = frame(6);
        let mut chase = ChaseEffect::new(RED, 2, 1).unwrap();
        let lit = |canvas: &FrameBuffer<64>| -> Vec<bool> {
            (0..canvas.len())
                .map(|index| canvas.get(index) == rgb(RED))
                .collect()
        };

        chase.draw(at(0), &mut canvas);
        assert_eq!(lit(&canvas), [true, true, false, true, true, false]);
        chase.draw(at(0), &mut canvas);
        assert_eq!(lit(&canvas), [false, true, true, false, true, true]);
        chase.draw(at(0), &mut canvas);
        assert_eq!(lit(&canvas), [true, false, true, true, false, true]);
    }

    #[test]
    fn test_chase_reverse_moves_backwards() {
        let mut canvas = frame(6);
        let mut chase = ChaseEffect::new(RED, 2, 1).unwrap().with_reverse(true);
        chase.draw(at(0), &mut canvas);
        chase.draw(at(0), &mut canvas);
        assert_eq!(canvas.get(0), rgb(RED));
        assert_eq!(canvas.get(1), Some(Rgbw::default()));
        assert_eq!(canvas.get(2), rgb(RED));
    }

    #[test]
    fn test_chase_cycle_completes_every_strip_length() {
        let mut canvas = frame(6);
        let mut chase = ChaseEffect::new(RED, 2, 1).unwrap();
        let completed: Vec<bool> = (0..12).map(|_| chase.draw(at(0), &mut canvas)).collect();
        let cycles: Vec<usize> = completed
            .iter()
            .enumerate()
            .filter_map(|(draw, done)| done.then_some(draw + 1))
            .collect();
        assert_eq!(cycles, [6, 12]);
    }

    #[test]
    fn test_chase_reset_restarts_cycle_and_colors() {
        let mut canvas = frame(6);
        let mut chase = ChaseEffect::rainbow(2, 1).unwrap();
        for _ in 0..9 {
            chase.draw(at(0), &mut canvas);
        }

        chase.reset();
        assert!(!chase.draw(at(0), &mut canvas));
        assert_eq!(canvas.get(0), rgb(colorwheel(0)));
        let completed: Vec<bool> = (0..5).map(|_| chase.draw(at(0), &mut canvas)).collect();
        assert_eq!(completed, [false, false, false, false, true]);
    }

    #[test]
    fn test_chase_rejects_empty_pattern() {
        assert!(ChaseEffect::new(RED, 0, 0).is_err());
        assert!(ChaseEffect::rainbow(5, 3).unwrap().with_step(0).is_err());
    }

    #[test]
    fn test_rainbow_chase_colors_each_bar() {
        let mut canvas = frame(6);
        let mut chase = ChaseEffect::rainbow(2, 1).unwrap();
        chase.draw(at(0), &mut canvas);

        assert_eq!(canvas.get(0), rgb(colorwheel(0)));
        assert_eq!(canvas.get(1), rgb(colorwheel(0)));
        assert_eq!(canvas.get(2), Some(Rgbw::default()));
        // Bar 1 sits one step behind on the wheel
        assert_eq!(canvas.get(3), rgb(colorwheel(248)));
    }

    #[test]
    fn test_comet_tail_fades_toward_the_back() {
        let mut canvas = frame(10);
        let mut comet = CometEffect::new(RED, 3);
        // Enters from off the strip; fifth frame starts at pixel 0
        for _ in 0..5 {
            comet.draw(at(0), &mut canvas);
        }

        assert_eq!(canvas.get(0), Some(Rgbw::default()));
        let reds: Vec<u8> = (1..=3).map(|index| canvas.get(index).unwrap().r).collect();
        assert_eq!(reds[0], 12);
        assert!(reds[0] < reds[1] && reds[1] < reds[2]);
        assert_eq!(canvas.get(4), Some(Rgbw::default()));
    }

    #[test]
    fn test_comet_restart_completes_when_leaving_the_strip() {
        let mut canvas = frame(10);
        let mut comet = CometEffect::new(RED, 3);
        let first = (1..=40).find(|_| comet.draw(at(0), &mut canvas));
        assert_eq!(first, Some(14));
    }

    #[test]
    fn test_comet_bounce_completes_after_round_trip() {
        let mut canvas = frame(10);
        let mut comet = CometEffect::new(RED, 3).with_motion(CometMotion::Bounce);
        let first = (1..=60).find(|_| comet.draw(at(0), &mut canvas));
        assert_eq!(first, Some(28));
    }

    #[test]
    fn test_comet_ring_wraps_around() {
        let mut canvas = frame(10);
        let mut comet = CometEffect::new(RED, 3).with_motion(CometMotion::Ring);
        for _ in 0..3 {
            comet.draw(at(0), &mut canvas);
        }
        // Third frame starts at pixel 8, the head wraps around to pixel 1
        assert_ne!(canvas.get(1), Some(Rgbw::default()));
        assert_ne!(canvas.get(9), Some(Rgbw::default()));
    }

    #[test]
    fn test_rainbow_comet_head_uses_offset() {
        let mut canvas = frame(10);
        let mut comet = CometEffect::rainbow(4).with_colorwheel_offset(85);
        for _ in 0..6 {
            comet.draw(at(0), &mut canvas);
        }
        // Sixth frame starts at pixel 0, the head is at pixel 4 with the
        // wheel position equal to the offset
        let head = canvas.get(4).unwrap();
        assert_eq!(head.r, 0);
        assert!(head.g > 0);
        assert_eq!(head.b, 0);
    }

    #[test]
    fn test_sparkle_rejects_bad_count() {
        assert!(SparkleEffect::new(RED, 0).is_err());
        assert!(SparkleEffect::new(RED, 65).is_err());
        assert!(SparkleEffect::new(RED, 64).is_ok());
    }

    #[test]
    fn test_sparkle_transmits_flash_then_spark() {
        let mut pixels = strip(10);
        let mut animation = Animation::new(
            SparkleEffect::new(RED, 1).unwrap().with_seed(7),
            Duration::from_millis(20),
        );
        assert!(animation.animate(at(0), &mut pixels).unwrap());

        let frames = &pixels.transmitter().frames;
        assert_eq!(frames.len(), 2);
        let flash = decode(&frames[0]);
        let spark = decode(&frames[1]);

        let index = flash.iter().position(|color| *color == (255, 0, 0)).unwrap();
        assert_eq!(flash.iter().filter(|color| **color != (0, 0, 0)).count(), 1);
        assert_eq!(spark[index], (63, 0, 0));
        if index + 1 < spark.len() {
            assert_eq!(spark[index + 1], (25, 0, 0));
        }
    }

    #[test]
    fn test_sparkle_spark_wraps_to_first_pixel() {
        let mut pixels = strip(2);
        let mut animation = Animation::new(
            SparkleEffect::new(RED, 1).unwrap(),
            Duration::from_millis(20),
        );
        animation.animate(at(0), &mut pixels).unwrap();

        // Either pixel sparkles, the other one always gets the dim spark
        let mut spark = decode(&pixels.transmitter().frames[1]);
        spark.sort_unstable();
        assert_eq!(spark, [(25, 0, 0), (63, 0, 0)]);
    }

    #[test]
    fn test_rainbow_sparkle_dims_background() {
        let mut pixels = strip(4);
        let mut animation = Animation::new(
            RainbowSparkleEffect::new(Duration::from_millis(256)).with_num_sparkles(1),
            Duration::from_millis(20),
        );
        animation.animate(at(0), &mut pixels).unwrap();

        let frames = &pixels.transmitter().frames;
        assert_eq!(frames.len(), 2);
        let background = decode(&frames[0]);
        let sparkled = decode(&frames[1]);
        assert_eq!(background[0], (51, 0, 0));

        let changed: Vec<usize> = (0..4)
            .filter(|index| background[*index] != sparkled[*index])
            .collect();
        assert_eq!(changed.len(), 1);
        let full = colorwheel(u8::try_from(changed[0]).unwrap());
        assert_eq!(sparkled[changed[0]], (full.r, full.g, full.b));
    }

    #[test]
    fn test_animation_waits_for_speed() {
        let mut pixels = strip(4);
        let mut animation = Animation::new(SolidEffect::new(RED), Duration::from_millis(20));

        assert!(animation.animate(at(100), &mut pixels).unwrap());
        assert!(!animation.animate(at(110), &mut pixels).unwrap());
        assert!(animation.animate(at(120), &mut pixels).unwrap());
        assert_eq!(animation.draw_count(), 2);
        assert_eq!(animation.cycle_count(), 2);
        assert_eq!(pixels.transmitter().frames.len(), 2);
    }

    #[test]
    fn test_animation_pause_and_reset() {
        let mut pixels = strip(4);
        let mut animation = Animation::new(SolidEffect::new(RED), Duration::from_millis(20));
        animation.animate(at(0), &mut pixels).unwrap();

        animation.pause();
        assert!(!animation.animate(at(100), &mut pixels).unwrap());
        animation.resume();
        assert!(animation.animate(at(100), &mut pixels).unwrap());

        animation.reset();
        assert!(animation.animate(at(101), &mut pixels).unwrap());
        assert_eq!(pixels.transmitter().frames.len(), 3);
    }
}
