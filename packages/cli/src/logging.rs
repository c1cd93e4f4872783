//! CLI Tracing
//!
//! Logs go to stderr so the report written to stdout stays machine readable. The default filter
//! follows the verbosity flags, and `DX_SLOTS_LOG` replaces it entirely when set.

use crate::Verbosity;
use std::env;
use tracing_subscriber::{prelude::*, EnvFilter};

const LOG_ENV: &str = "DX_SLOTS_LOG";

pub(crate) struct TraceController;

impl TraceController {
    /// Build tracing infrastructure.
    pub(crate) fn initialize(verbosity: &Verbosity) {
        let mut filter = EnvFilter::new(default_filter(verbosity));

        if env::var(LOG_ENV).is_ok() {
            filter = EnvFilter::from_env(LOG_ENV);
        }

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(verbosity.verbose || verbosity.trace)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn default_filter(verbosity: &Verbosity) -> &'static str {
    if verbosity.trace {
        "error,dx_slots=trace,dioxus_slots=trace,dioxus_slots_html=trace"
    } else if verbosity.verbose {
        "error,dx_slots=debug,dioxus_slots=debug,dioxus_slots_html=debug"
    } else if verbosity.quiet {
        "error"
    } else {
        "error,dx_slots=warn,dioxus_slots_html=warn"
    }
}
