//! Lists every product of the configured merchant.

use std::process::ExitCode;

use shopping_samples::samples::{products::ProductsList, run_main};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run_main::<ProductsList>().await
}
