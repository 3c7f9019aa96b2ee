//! Logging abstraction layer.
//!
//! Application code depends on the [`Log`] trait rather than on a concrete
//! logger or a global, and receives its logger from whoever constructs it.
//!
//! # Architecture
//!
//! - `Log` trait: the interface components use for logging
//! - [`Logger`](crate::Logger): writes formatted lines to a [`Sink`](crate::Sink)
//! - `NoOpLogger`: silent logger for benchmarks and unconfigured callers
//!
//! # Usage
//!
//! ```
//! use lvlog::{log_debug, log_info, Log, NoOpLogger};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Log>,
//! }
//!
//! impl MyComponent {
//!     fn new(logger: Arc<dyn Log>) -> Self {
//!         Self { logger }
//!     }
//!
//!     fn do_work(&self) {
//!         log_info!(self.logger, "Starting work");
//!         log_debug!(self.logger, "Work completed in {} steps", 3);
//!     }
//! }
//!
//! MyComponent::new(Arc::new(NoOpLogger)).do_work();
//! ```

mod noop;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::Log;
