//! # TestApp: headless harness for the customizer
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `CustomizerPlugin` so the
//! event flow can be driven without a window, renderer or egui.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;

use crate::CustomizerPlugin;

/// Events of type `E` seen so far, in order.
#[derive(Resource)]
pub struct Recorded<E: Event + Clone>(pub Vec<E>);

impl<E: Event + Clone> Default for Recorded<E> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn record_events<E: Event + Clone>(mut events: EventReader<E>, mut recorded: ResMut<Recorded<E>>) {
    recorded.0.extend(events.read().cloned());
}

pub struct TestApp {
    app: App,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // No InputPlugin: key state is driven by hand and never auto-cleared.
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_plugins(CustomizerPlugin);
        app.update();
        Self { app }
    }

    /// Start recording events of type `E` (see [`TestApp::recorded`]).
    pub fn record<E: Event + Clone>(&mut self) -> &mut Self {
        self.app.init_resource::<Recorded<E>>();
        self.app.add_systems(Last, record_events::<E>);
        self
    }

    pub fn recorded<E: Event + Clone>(&self) -> &[E] {
        &self.app.world().resource::<Recorded<E>>().0
    }

    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
            std::thread::yield_now();
        }
    }

    /// Run frames until `done` holds or `max_frames` have passed. Returns
    /// whether the condition was met.
    pub fn tick_until(&mut self, max_frames: u32, done: impl Fn(&World) -> bool) -> bool {
        for _ in 0..max_frames {
            self.app.update();
            if done(self.app.world()) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        false
    }

    pub fn send<E: Event>(&mut self, event: E) -> &mut Self {
        let _ = self.app.world_mut().send_event(event);
        self
    }

    /// Press `keys` together for one frame, then release them.
    pub fn press_chord(&mut self, keys: &[KeyCode]) {
        {
            let mut input = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            for key in keys {
                input.press(*key);
            }
        }
        self.app.update();
        let mut input = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release_all();
        input.clear();
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn resource_mut<R: Resource>(&mut self) -> Mut<'_, R> {
        self.app.world_mut().resource_mut::<R>()
    }
}
