//! The tick/render loop.
//!
//! An [`Engine`] owns a [`Platform`], a camera and an ordered list of layers
//! (game objects). Every iteration of the loop:
//!
//! 1. snapshots the held keys
//! 2. ticks every object, in layer order
//! 3. renders the frame
//! 4. returns [`LoopExit::QuitRequested`] if the window asked to close
//! 5. returns [`LoopExit::Stopped`] if an [`EngineHandle`] asked to stop
//! 6. runs the tick hook and advances the tick counter
//!
//! [`Engine::run`] blocks the calling thread and paces iterations with a
//! [`TickClock`]. [`Engine::spawn`] does the same on a dedicated thread.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded};
use log::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::gameobject::GameObject;
use crate::geometry::Position2d;
use crate::platform::Platform;
use crate::resources::camera2d::Camera2d;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::tickclock::{TickClock, TickRate};
use crate::systems::render::Renderer;

const LOOP_THREAD_NAME: &str = "tickbox2d-loop";

/// Why the loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// The platform reported a quit request (e.g. the window was closed).
    QuitRequested,
    /// An [`EngineHandle`] asked the loop to stop.
    Stopped,
}

type TickHook<P> = Box<dyn FnMut(&mut Engine<P>)>;

pub struct Engine<P: Platform> {
    platform: P,
    renderer: Renderer,
    camera: Camera2d,
    objects: Vec<GameObject>,
    tick_rate: TickRate,
    tick: u64,
    tick_hook: Option<TickHook<P>>,
    // set whenever the hook is replaced or cleared
    hook_changed: bool,
    shutdown: Option<Receiver<()>>,
}

impl<P: Platform> Engine<P> {
    /// Engine with camera, background and rate taken from `config`. The
    /// camera starts at the origin.
    pub fn new(platform: P, config: &EngineConfig) -> Self {
        Self::with_parts(
            platform,
            Renderer::new(config.background),
            Camera2d::new(config.viewport, Position2d::at(0.0, 0.0)),
            config.tick_rate,
        )
    }

    pub fn with_parts(platform: P, renderer: Renderer, camera: Camera2d, tick_rate: TickRate) -> Self {
        Engine {
            platform,
            renderer,
            camera,
            objects: Vec::new(),
            tick_rate,
            tick: 0,
            tick_hook: None,
            hook_changed: false,
            shutdown: None,
        }
    }

    /// Insert `object` at `layer`. Layers past the end append. Lower layers
    /// are drawn first; inserting at an occupied layer pushes the existing
    /// object up.
    pub fn add_object(&mut self, object: GameObject, layer: usize) {
        let layer = layer.min(self.objects.len());
        debug!("Adding {} at layer {}", object, layer);
        self.objects.insert(layer, object);
    }

    /// Called once per completed iteration, after rendering.
    pub fn set_tick_hook(&mut self, hook: impl FnMut(&mut Engine<P>) + 'static) {
        self.tick_hook = Some(Box::new(hook));
        self.hook_changed = true;
    }

    pub fn clear_tick_hook(&mut self) {
        self.tick_hook = None;
        self.hook_changed = true;
    }

    pub fn camera(&self) -> &Camera2d {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera2d {
        &mut self.camera
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    /// Number of completed iterations.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    /// Effective ticks per second on the current platform.
    pub fn tick_hz(&self) -> f32 {
        self.tick_rate.hz(self.platform.refresh_rate())
    }

    /// One loop iteration, without pacing. `Some` when the loop should end.
    pub fn step(&mut self) -> Option<LoopExit> {
        let keys = self.platform.active_keys();
        for object in self.objects.iter_mut() {
            object.on_tick(&keys);
        }

        self.renderer
            .render_pass(&mut self.platform, &self.objects, &self.camera);

        if self.platform.poll_quit() {
            self.cleanup();
            return Some(LoopExit::QuitRequested);
        }
        if self.stop_requested() {
            info!("Stop requested after {} ticks", self.tick);
            return Some(LoopExit::Stopped);
        }

        if let Some(mut hook) = self.tick_hook.take() {
            self.hook_changed = false;
            hook(self);
            // a hook that replaced or cleared itself stays that way
            if !self.hook_changed {
                self.tick_hook = Some(hook);
            }
        }
        self.tick += 1;
        None
    }

    /// Run until the platform quits or a handle stops the loop.
    pub fn run(&mut self) -> EngineResult<LoopExit> {
        let hz = self.tick_hz();
        info!(
            "Starting loop at {} Hz with {} objects",
            hz,
            self.objects.len()
        );
        let mut clock = TickClock::new(hz);
        loop {
            if let Some(exit) = self.step() {
                info!("Loop exited: {:?}", exit);
                return Ok(exit);
            }
            clock.wait();
        }
    }

    fn stop_requested(&self) -> bool {
        self.shutdown
            .as_ref()
            .is_some_and(|rx| rx.try_recv().is_ok())
    }

    fn cleanup(&mut self) {
        info!("Cleaning up");
        self.tick_hook = None;
    }
}

impl<P: Platform + 'static> Engine<P> {
    /// Build an engine on a new thread and run it there. The engine is
    /// constructed by `build` on that thread, so the platform need not be
    /// `Send`.
    pub fn spawn<F>(build: F) -> EngineResult<EngineHandle>
    where
        F: FnOnce() -> EngineResult<Engine<P>> + Send + 'static,
    {
        let (tx, rx) = bounded(1);
        let thread = thread::Builder::new()
            .name(LOOP_THREAD_NAME.to_string())
            .spawn(move || {
                let mut engine = build()?;
                engine.shutdown = Some(rx);
                engine.run()
            })?;
        debug!("Spawned {}", LOOP_THREAD_NAME);
        Ok(EngineHandle {
            shutdown: tx,
            thread,
        })
    }
}

/// Control over an engine running on its own thread.
///
/// Dropping the handle detaches the thread; it keeps running until the
/// platform quits.
pub struct EngineHandle {
    shutdown: Sender<()>,
    thread: JoinHandle<EngineResult<LoopExit>>,
}

impl EngineHandle {
    /// Ask the loop to stop after its current iteration.
    pub fn stop(&self) {
        // a full channel means a stop is already pending
        let _ = self.shutdown.try_send(());
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the loop thread and return how it ended.
    pub fn join(self) -> EngineResult<LoopExit> {
        self.thread
            .join()
            .map_err(|_| EngineError::ThreadPanicked)?
    }
}
