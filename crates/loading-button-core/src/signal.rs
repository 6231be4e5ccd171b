//! Signal/slot system.
//!
//! A type-safe, Qt-inspired signal/slot mechanism. Signals are emitted
//! when state changes and connected slots (callbacks) are invoked in
//! response. The widget uses signals for redraw requests, state change
//! notification, and animation ticks.
//!
//! All invocation is direct: the slot runs on the emitting thread, which
//! in this widget's model is always the host's render/UI thread. Slots
//! are still stored behind a mutex so signals remain `Send + Sync` and
//! can be shared with test harnesses.
//!
//! # Example
//!
//! ```
//! use loading_button_core::Signal;
//!
//! let progress_changed = Signal::<f32>::new();
//!
//! let conn = progress_changed.connect(|&p| {
//!     println!("progress is now {p}");
//! });
//!
//! progress_changed.emit(0.5);
//! progress_changed.disconnect(conn).unwrap();
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`].
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// Cloning a signal produces another handle to the same connection list,
/// so a component can hand out a signal handle while retaining the
/// ability to emit.
pub struct Signal<Args> {
    connections: Arc<Mutex<SlotMap<ConnectionId, Connection<Args>>>>,
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// The slot is invoked with a reference to the emitted arguments each
    /// time [`emit`](Self::emit) is called. Returns an ID that can be
    /// used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        connections.insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a previously connected slot.
    pub fn disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        let mut connections = self.connections.lock();
        connections
            .remove(id)
            .map(|_| ())
            .ok_or(SignalError::InvalidConnection)
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking every connected slot.
    ///
    /// Slots are cloned out of the connection list before invocation, so
    /// a slot may connect or disconnect other slots without deadlocking.
    pub fn emit(&self, args: Args) {
        let slots: Vec<Arc<dyn Fn(&Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            connections.values().map(|c| Arc::clone(&c.slot)).collect()
        };

        tracing::trace!(
            target: "loading_button_core::signal",
            slot_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> Clone for Signal<Args> {
    fn clone(&self) -> Self {
        Self {
            connections: Arc::clone(&self.connections),
        }
    }
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<f32>: Send, Sync);
