// Copyright 2025 Cowboy AI, LLC.

//! Prints both sides of the `length` naturality square and the Yoneda round trip.

use anyhow::Context;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = match yoneda_lemma::verify() {
        Ok(report) => report,
        Err(violation) => {
            error!(law = violation.law(), functor_law = violation.is_functor_law(), "{violation}");
            let context = violation.failure_context();
            return Err(violation).context(context);
        }
    };
    debug!(report = %report.to_json()?, "verification report");

    for line in report.lines() {
        println!("{line}");
    }

    Ok(())
}
