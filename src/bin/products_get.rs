//! Prints a single product by REST ID.

use std::process::ExitCode;

use shopping_samples::samples::{products::ProductsGet, run_main};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run_main::<ProductsGet>().await
}
