use anyhow::Result;
use likes_client::{cli, instrumentation};

#[tokio::main]
async fn main() -> Result<()> {
    // The guard flushes the non-blocking log writer when it drops at the
    // end of main.
    let _guard = instrumentation::tracing::init_tracing();
    instrumentation::tracing::init_panic_handler();

    // Main entrypoint simply delegates control to the CLI layer.
    cli::cli::run().await
}
