/*! Integration tests for Arbor.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - value: Tests for the document value model
 * - path: Tests for path parsing and normalization
 * - tree: Tests for building, resolving, mutating, sizing and the Tree API
 * - configuration: Tests for the stream-backed Configuration adapter
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("arbor=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod configuration;
mod path;
mod tree;
mod value;
