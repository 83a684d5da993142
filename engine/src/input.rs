use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Key that ends the display loop.
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

/// The slice of window events the display loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CloseRequested,
    KeyPressed(KeyCode),
    KeyReleased(KeyCode),
    Resized { width: u32, height: u32 },
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    WindowClosed,
    EscapePressed,
}

impl InputEvent {
    /// Translates a winit event, dropping anything without a counterpart.
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::KeyPressed(*code),
                ElementState::Released => InputEvent::KeyReleased(*code),
            }),
            _ => None,
        }
    }

    pub fn quit_reason(&self) -> Option<QuitReason> {
        match self {
            InputEvent::CloseRequested => Some(QuitReason::WindowClosed),
            InputEvent::KeyPressed(code) if *code == QUIT_KEY => Some(QuitReason::EscapePressed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn close_and_escape_are_quit_intent() {
        assert_eq!(
            InputEvent::CloseRequested.quit_reason(),
            Some(QuitReason::WindowClosed)
        );
        assert_eq!(
            InputEvent::KeyPressed(KeyCode::Escape).quit_reason(),
            Some(QuitReason::EscapePressed)
        );
    }

    #[test]
    fn other_events_are_not_quit_intent() {
        let events = [
            InputEvent::KeyReleased(KeyCode::Escape),
            InputEvent::KeyPressed(KeyCode::KeyQ),
            InputEvent::KeyPressed(KeyCode::Space),
            InputEvent::Resized { width: 640, height: 480 },
        ];
        for event in events {
            assert_eq!(event.quit_reason(), None, "{event:?}");
        }
    }

    #[test]
    fn translates_window_events() {
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::CloseRequested),
            Some(InputEvent::CloseRequested)
        );
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::Resized(PhysicalSize::new(320, 200))),
            Some(InputEvent::Resized { width: 320, height: 200 })
        );
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::RedrawRequested),
            None
        );
        assert_eq!(InputEvent::from_window_event(&WindowEvent::Focused(true)), None);
    }
}
