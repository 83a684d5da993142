use std::sync::Arc;

use log::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use crate::config::DisplayConfig;
use crate::display_loop::{DisplayLoop, Exit, Step};
use crate::error::{DisplayError, Result};
use crate::input::InputEvent;
use crate::render::graphics::{create_graphics, Graphics};
use crate::surface::SurfaceRequest;

enum State {
    Init,
    Ready(Graphics),
    Released,
}

/// Owns the event loop and the single window for the life of the process.
pub struct EngineContext {
    event_loop: EventLoop<()>,
    app: App,
}

pub(crate) struct App {
    request: SurfaceRequest,
    state: State,
    display: DisplayLoop,
    pending: Vec<InputEvent>,
    exit: Option<Exit>,
    failure: Option<DisplayError>,
}

impl App {
    pub(crate) fn new(config: &DisplayConfig) -> Self {
        Self {
            request: SurfaceRequest::from(config),
            state: State::Init,
            display: DisplayLoop::new(),
            pending: Vec::new(),
            exit: None,
            failure: None,
        }
    }

    fn open(&self, event_loop: &ActiveEventLoop) -> std::result::Result<Graphics, DisplayError> {
        let attrs = self.request.window_attributes(event_loop)?;
        let window = Arc::new(event_loop.create_window(attrs)?);
        info!("Opened {:?} window", self.request);

        pollster::block_on(create_graphics(window))
    }

    /// Drops the graphics handle. True if one was held.
    fn release(&mut self) -> bool {
        self.pending.clear();
        let held = matches!(
            std::mem::replace(&mut self.state, State::Released),
            State::Ready(_)
        );
        if held {
            debug!("Released window and graphics");
        }
        held
    }

    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.release();
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: DisplayError) {
        error!("Display failure: {err}");
        self.failure = Some(err);
        self.shut_down(event_loop);
    }

    fn finish(mut self) -> Result<Exit> {
        if let Some(err) = self.failure.take() {
            return Err(err.into());
        }
        self.exit
            .ok_or_else(|| DisplayError::LoopEndedWithoutQuit.into())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !matches!(self.state, State::Init) {
            return;
        }
        match self.open(event_loop) {
            Ok(gfx) => self.state = State::Ready(gfx),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = InputEvent::from_window_event(&event) {
            self.pending.push(input);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let State::Ready(gfx) = &mut self.state else {
            return;
        };

        match self.display.step(self.pending.drain(..), gfx) {
            Ok(Step::Continue) => {}
            Ok(Step::Quit(reason)) => {
                self.exit = Some(Exit::Quit(reason));
                self.shut_down(event_loop);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl EngineContext {
    pub fn new(config: &DisplayConfig) -> Result<Self> {
        let event_loop = EventLoop::new().map_err(DisplayError::from)?;
        // no frame limiting, iterate as fast as events are drained
        event_loop.set_control_flow(ControlFlow::Poll);
        Ok(Self {
            event_loop,
            app: App::new(config),
        })
    }

    /// Runs until quit intent or a fatal display error.
    pub fn run(self) -> Result<Exit> {
        let Self { event_loop, mut app } = self;
        event_loop
            .run_app(&mut app)
            .map_err(DisplayError::from)?;
        app.finish()
    }
}
