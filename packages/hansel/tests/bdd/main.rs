//! Cucumber runner for Hansel
//!
//! Plays the scenarios in the workspace `features/` directory against the
//! in-memory document. Set `RUST_LOG=hansel=debug` to see dispatch events.
//!
//! ```bash
//! cargo test --test bdd -- --nocapture
//! ```

#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod world;

use cucumber::World;
use std::path::PathBuf;

/// `features/` next to the workspace manifest.
fn features_dir() -> PathBuf {
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..");
    let features = workspace.join("features");
    assert!(
        features.is_dir(),
        "No features directory at {}",
        features.display()
    );
    features
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();

    world::HanselWorld::cucumber()
        .max_concurrent_scenarios(1)
        .with_default_cli()
        .run(features_dir())
        .await;
}
