mod tests {
    use core::convert::Infallible;

    use myrtio_light_sequence::{
        Animation, AnimationSequence, ByteOrder, Duration, Error, Instant, Pin, PixelBuf,
        PixelBufConfig, RawTransmitter, Session, StopReason, StopSignal, board, run,
        animation::RainbowEffect,
    };

    const NUM_PIXELS: usize = 120;
    const MAX_BYTES: usize = NUM_PIXELS * 4;
    const SPEED: Duration = Duration::from_millis(20);

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

    /// Fails on call `fail_from` and, unless `once`, every call after it.
    /// The error carries the call number.
    struct Flaky {
        calls: usize,
        fail_from: usize,
        once: bool,
        frames: Vec<Vec<u8>>,
    }

    impl Flaky {
        fn new(fail_from: usize, once: bool) -> Self {
            Self {
                calls: 0,
                fail_from,
                once,
                frames: Vec::new(),
            }
        }
    }

    impl RawTransmitter for Flaky {
        type Error = usize;

        fn transmit(&mut self, _pin: Pin, buf: &[u8]) -> Result<(), Self::Error> {
            self.calls += 1;
            let failing = if self.once {
                self.calls == self.fail_from
            } else {
                self.calls >= self.fail_from
            };
            if failing {
                return Err(self.calls);
            }
            self.frames.push(buf.to_vec());
            Ok(())
        }
    }

    fn strip<T: RawTransmitter>(transmitter: T) -> PixelBuf<T, MAX_BYTES> {
        let config = PixelBufConfig {
            byte_order: ByteOrder::WBGR,
            auto_write: true,
            ..PixelBufConfig::default()
        };
        PixelBuf::new(transmitter, board::D13, NUM_PIXELS, config).unwrap()
    }

    fn rainbow() -> AnimationSequence<1> {
        AnimationSequence::new([Animation::new(
            RainbowEffect::new(Duration::from_secs(2)),
            SPEED,
        )])
        .unwrap()
    }

    fn is_blank(frame: &[u8]) -> bool {
        frame.iter().all(|byte| *byte == 0)
    }

    #[test]
    fn test_interrupt_blanks_strip_once() {
        let mut pixels = strip(Recorder::default());
        let mut sequence = rainbow();
        let stop = StopSignal::new();
        let mut calls = 0_u64;

        let result = run(&mut sequence, &mut pixels, &stop, || {
            calls += 1;
            if calls == 10 {
                stop.raise(StopReason::Interrupted);
            }
            Instant::from_millis(calls * 20)
        });

        assert_eq!(result, Ok(StopReason::Interrupted));
        let frames = &pixels.transmitter().frames;
        assert_eq!(frames.len(), 11);
        assert!(frames[..10].iter().all(|frame| !is_blank(frame)));
        let last = frames.last().unwrap();
        assert_eq!(last.len(), NUM_PIXELS * 4);
        assert!(is_blank(last));
        assert_eq!(stop.peek(), None);
    }

    #[test]
    fn test_stop_before_first_frame() {
        let mut pixels = strip(Recorder::default());
        let mut sequence = rainbow();
        let stop = StopSignal::new();
        stop.raise(StopReason::Requested);

        let result = run(&mut sequence, &mut pixels, &stop, || Instant::from_millis(0));
        assert_eq!(result, Ok(StopReason::Requested));
        let frames = &pixels.transmitter().frames;
        assert_eq!(frames.len(), 1);
        assert!(is_blank(&frames[0]));
    }

    #[test]
    fn test_animation_error_blanks_strip_once() {
        let mut pixels = strip(Flaky::new(3, true));
        let mut sequence = rainbow();
        let stop = StopSignal::new();
        let mut ms = 0;

        let result = run(&mut sequence, &mut pixels, &stop, || {
            ms += 20;
            Instant::from_millis(ms)
        });

        assert_eq!(result, Err(Error::Transmit(3)));
        let frames = &pixels.transmitter().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames.iter().filter(|frame| is_blank(frame)).count(), 1);
        assert!(is_blank(frames.last().unwrap()));
    }

    #[test]
    fn test_cleanup_error_takes_precedence() {
        let mut pixels = strip(Flaky::new(3, false));
        let mut sequence = rainbow();
        let stop = StopSignal::new();
        let mut ms = 0;

        let result = run(&mut sequence, &mut pixels, &stop, || {
            ms += 20;
            Instant::from_millis(ms)
        });

        assert_eq!(result, Err(Error::Transmit(4)));
        assert_eq!(pixels.transmitter().frames.len(), 2);
    }

    #[test]
    fn test_session_close_blanks_once() {
        let mut pixels = strip(Recorder::default());
        pixels.fill((1, 2, 3)).unwrap();

        let session = Session::open(&mut pixels);
        assert_eq!(session.close(), Ok(()));

        let frames = &pixels.transmitter().frames;
        assert_eq!(frames.len(), 2);
        assert!(is_blank(&frames[1]));
    }

    #[test]
    fn test_session_drop_blanks_strip() {
        let mut pixels = strip(Recorder::default());
        pixels.fill((9, 8, 7)).unwrap();
        {
            let mut session = Session::open(&mut pixels);
            session.pixels().set(3, (1, 1, 1)).unwrap();
        }

        let frames = &pixels.transmitter().frames;
        assert_eq!(frames.len(), 3);
        assert!(is_blank(&frames[2]));
    }

    #[test]
    fn test_session_drop_ignores_failure() {
        let mut pixels = strip(Flaky::new(1, false));
        drop(Session::open(&mut pixels));
        assert!(pixels.transmitter().frames.is_empty());
        assert_eq!(pixels.transmitter().calls, 1);
    }

    #[test]
    fn test_stop_signal_first_reason_wins() {
        let stop = StopSignal::new();
        assert_eq!(stop.peek(), None);
        assert!(stop.raise(StopReason::Interrupted));
        assert!(!stop.raise(StopReason::Requested));
        assert_eq!(stop.peek(), Some(StopReason::Interrupted));
        assert_eq!(stop.take(), Some(StopReason::Interrupted));
        assert_eq!(stop.take(), None);
    }
}
