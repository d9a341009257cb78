//! Monkey interpreter driver.
//!
//! # Architecture
//!
//! ```text
//! source
//!     │
//!     ▼
//! parse_source() ──► ParseOutput (errors stop here)
//!     │
//!     ▼
//! define_macros() / expand_macros() ──► Program
//!     │
//!     ▼
//! eval_program() ──► Value
//! ```
//!
//! [`Session`] runs that pipeline against persistent environments;
//! [`repl`] and [`commands`] are thin front ends over it.

pub mod commands;
pub mod pipeline;
pub mod report;
pub mod repl;

pub use pipeline::{ends_with_let, parse_source, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enabled only when `MONKEY_LOG` is set, e.g.
/// `MONKEY_LOG=monkey_eval=debug` or `MONKEY_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("MONKEY_LOG").is_ok() {
            let filter = EnvFilter::from_env("MONKEY_LOG");
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
