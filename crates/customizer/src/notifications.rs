//! Transient toast notifications.
//!
//! Other systems emit `ToastEvent`s which are collected into `ToastLog`.
//! Toasts auto-dismiss after `TOAST_LIFETIME_SECS` and can be closed early.
//! Rendering lives in the `ui` crate.

use bevy::prelude::*;

use crate::config::{MAX_VISIBLE_TOASTS, TOAST_LIFETIME_SECS};
use crate::CustomizerSet;

// =============================================================================
// Toast kinds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Error,
    Success,
}

// =============================================================================
// Event + log
// =============================================================================

/// Event emitted by other systems to show a toast.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ToastEvent {
    pub text: String,
    pub kind: ToastKind,
}

impl ToastEvent {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ToastKind::Success,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
    /// `Time::elapsed_secs` when the toast was pushed.
    pub created_at: f32,
}

/// Currently visible toasts, oldest first.
#[derive(Resource)]
pub struct ToastLog {
    pub active: Vec<Toast>,
    pub lifetime_secs: f32,
    next_id: u64,
}

impl Default for ToastLog {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            lifetime_secs: TOAST_LIFETIME_SECS,
            next_id: 1,
        }
    }
}

impl ToastLog {
    pub fn push(&mut self, event: &ToastEvent, now: f32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Toast {
            id,
            text: event.text.clone(),
            kind: event.kind,
            created_at: now,
        });

        if self.active.len() > MAX_VISIBLE_TOASTS {
            let excess = self.active.len() - MAX_VISIBLE_TOASTS;
            self.active.drain(0..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|t| t.id != id);
    }

    /// Drop every toast older than the configured lifetime.
    pub fn sweep(&mut self, now: f32) {
        let lifetime = self.lifetime_secs;
        self.active.retain(|t| now - t.created_at < lifetime);
    }

    /// Fraction of lifetime left in `[0, 1]`, used for fade-out.
    pub fn remaining_fraction(&self, toast: &Toast, now: f32) -> f32 {
        if self.lifetime_secs <= 0.0 {
            return 0.0;
        }
        (1.0 - (now - toast.created_at) / self.lifetime_secs).clamp(0.0, 1.0)
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.active.last()
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn collect_toasts(
    mut events: EventReader<ToastEvent>,
    mut log: ResMut<ToastLog>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs();
    for event in events.read() {
        log.push(event, now);
    }
}

pub fn expire_toasts(mut log: ResMut<ToastLog>, time: Res<Time>) {
    if log.active.is_empty() {
        return;
    }
    log.sweep(time.elapsed_secs());
}

pub struct NotificationsPlugin;

impl Plugin for NotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ToastEvent>()
            .init_resource::<ToastLog>()
            .add_systems(
                PostUpdate,
                (collect_toasts, expire_toasts)
                    .chain()
                    .in_set(CustomizerSet::Notify),
            );
    }
}
