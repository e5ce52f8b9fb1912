//! Lists every datafeed of the configured merchant.

use std::process::ExitCode;

use shopping_samples::samples::{datafeeds::DatafeedsList, run_main};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run_main::<DatafeedsList>().await
}
