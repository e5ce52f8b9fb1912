//! Lists the sub-accounts of a multi-client account.

use std::process::ExitCode;

use shopping_samples::samples::{accounts::AccountsList, run_main};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    run_main::<AccountsList>().await
}
