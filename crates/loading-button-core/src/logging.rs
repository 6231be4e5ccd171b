//! Logging facilities.
//!
//! The crate is instrumented with the `tracing` crate. Install a
//! subscriber in the host application to see logs:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "loading_button_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "loading_button_core::signal";
    /// Animation timeline target.
    pub const TIMELINE: &str = "loading_button_core::timeline";
}
