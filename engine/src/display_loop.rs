//! The clear-and-present loop, independent of any real window.
//!
//! Each iteration drains the pending events, stops on the first quit intent,
//! and otherwise clears the whole canvas to black and presents it.

use log::info;

use crate::error::DisplayError;
use crate::input::{InputEvent, QuitReason};
use crate::render::{Canvas, Presented, Rgb};

/// Result of a single iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit(QuitReason),
}

/// Terminal status handed back to whoever runs the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit(QuitReason),
}

/// Yields the events that arrived since the previous call. Never blocks.
pub trait EventSource {
    fn drain(&mut self) -> Vec<InputEvent>;
}

#[derive(Debug, Default)]
pub struct DisplayLoop {
    frames_presented: u64,
}

impl DisplayLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn step<C, I>(&mut self, events: I, canvas: &mut C) -> Result<Step, DisplayError>
    where
        C: Canvas,
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if let Some(reason) = event.quit_reason() {
                info!(
                    "Quit requested ({:?}) after {} frames",
                    reason, self.frames_presented
                );
                return Ok(Step::Quit(reason));
            }
            if let InputEvent::Resized { width, height } = event {
                canvas.resize(width, height);
            }
        }

        canvas.clear(Rgb::BLACK);
        if canvas.present()? == Presented::Shown {
            self.frames_presented += 1;
        }
        Ok(Step::Continue)
    }

    /// Iterates until quit intent is observed.
    pub fn run<S, C>(&mut self, source: &mut S, canvas: &mut C) -> Result<Exit, DisplayError>
    where
        S: EventSource,
        C: Canvas,
    {
        loop {
            if let Step::Quit(reason) = self.step(source.drain(), canvas)? {
                return Ok(Exit::Quit(reason));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use winit::keyboard::KeyCode;

    #[derive(Default)]
    struct RecordingCanvas {
        pending: Option<Rgb>,
        presented: Vec<Option<Rgb>>,
        resizes: Vec<(u32, u32)>,
        skip_next: bool,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Rgb) {
            self.pending = Some(color);
        }

        fn present(&mut self) -> Result<Presented, DisplayError> {
            if std::mem::take(&mut self.skip_next) {
                self.pending = None;
                return Ok(Presented::Skipped);
            }
            // a frame only shows what was cleared for it
            self.presented.push(self.pending.take());
            Ok(Presented::Shown)
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.resizes.push((width, height));
        }
    }

    struct Scripted(VecDeque<Vec<InputEvent>>);

    impl EventSource for Scripted {
        fn drain(&mut self) -> Vec<InputEvent> {
            self.0.pop_front().unwrap_or_default()
        }
    }

    #[test]
    fn close_stops_without_presenting() {
        let mut canvas = RecordingCanvas::default();
        let mut display = DisplayLoop::new();

        let step = display
            .step([InputEvent::CloseRequested], &mut canvas)
            .unwrap();

        assert_eq!(step, Step::Quit(QuitReason::WindowClosed));
        assert!(canvas.presented.is_empty());
        assert_eq!(display.frames_presented(), 0);
    }

    #[test]
    fn escape_stops_like_close() {
        let mut canvas = RecordingCanvas::default();
        let mut source = Scripted(VecDeque::from([
            vec![],
            vec![InputEvent::KeyPressed(KeyCode::KeyA)],
            vec![InputEvent::KeyPressed(KeyCode::Escape)],
            vec![],
        ]));

        let exit = DisplayLoop::new().run(&mut source, &mut canvas).unwrap();

        assert_eq!(exit, Exit::Quit(QuitReason::EscapePressed));
        assert_eq!(canvas.presented.len(), 2);
        assert_eq!(source.0.len(), 1);
    }

    #[test]
    fn quit_wins_over_later_events_in_same_batch() {
        let mut canvas = RecordingCanvas::default();
        let step = DisplayLoop::new()
            .step(
                [
                    InputEvent::KeyReleased(KeyCode::Escape),
                    InputEvent::CloseRequested,
                    InputEvent::Resized { width: 10, height: 10 },
                ],
                &mut canvas,
            )
            .unwrap();

        assert_eq!(step, Step::Quit(QuitReason::WindowClosed));
        assert!(canvas.resizes.is_empty());
        assert!(canvas.presented.is_empty());
    }

    #[test]
    fn every_frame_is_fully_black() {
        for n in [0usize, 1, 5, 60] {
            let mut canvas = RecordingCanvas::default();
            let mut batches: VecDeque<Vec<InputEvent>> = (0..n).map(|_| Vec::new()).collect();
            batches.push_back(vec![InputEvent::CloseRequested]);

            let mut display = DisplayLoop::new();
            display.run(&mut Scripted(batches), &mut canvas).unwrap();

            assert_eq!(canvas.presented.len(), n);
            assert!(canvas.presented.iter().all(|f| *f == Some(Rgb::BLACK)));
            assert_eq!(display.frames_presented(), n as u64);
        }
    }

    #[test]
    fn resize_is_forwarded_before_clear() {
        let mut canvas = RecordingCanvas::default();
        let step = DisplayLoop::new()
            .step([InputEvent::Resized { width: 1280, height: 720 }], &mut canvas)
            .unwrap();

        assert_eq!(step, Step::Continue);
        assert_eq!(canvas.resizes, vec![(1280, 720)]);
        assert_eq!(canvas.presented, vec![Some(Rgb::BLACK)]);
    }

    #[test]
    fn skipped_frame_is_not_counted() {
        let mut canvas = RecordingCanvas::default();
        let mut display = DisplayLoop::new();

        let idle = Vec::<InputEvent>::new;
        display.step(idle(), &mut canvas).unwrap();
        canvas.skip_next = true;
        assert_eq!(display.step(idle(), &mut canvas).unwrap(), Step::Continue);
        display.step(idle(), &mut canvas).unwrap();

        assert_eq!(canvas.presented.len(), 2);
        assert_eq!(display.frames_presented(), 2);
    }

    #[test]
    fn present_failure_is_fatal() {
        struct Broken;
        impl Canvas for Broken {
            fn clear(&mut self, _: Rgb) {}
            fn present(&mut self) -> Result<Presented, DisplayError> {
                Err(DisplayError::Surface(wgpu::SurfaceError::OutOfMemory))
            }
            fn resize(&mut self, _: u32, _: u32) {}
        }

        let mut source = Scripted(VecDeque::new());
        let err = DisplayLoop::new().run(&mut source, &mut Broken).unwrap_err();
        assert!(matches!(err, DisplayError::Surface(_)));
    }
}
