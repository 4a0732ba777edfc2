mod config;
mod http_client;

use anyhow::Context;
use clap::Parser;
use soapling_client_core::{EndpointConfig, InteropClient};
use tracing::{error, info};

use config::{Args, init_logging};
use http_client::UreqHttpClient;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging. If it fails, we can't log, so just print and exit.
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    // Run the actual application logic and handle any errors
    if let Err(e) = run_app(&args) {
        // Log the error before exiting; the process then exits non-zero.
        error!("Interop check failed: {:?}", e);
        return Err(e);
    }

    Ok(())
}

/// Performs the two interop calls and prints each echoed result on its own
/// line. No assertions are made here: pass/fail judgment is left to the
/// harness reading stdout.
fn run_app(args: &Args) -> anyhow::Result<()> {
    info!(url = %args.url, namespace = %args.namespace, "starting SOAP interop echo client");

    let config = EndpointConfig::new(&args.url, &args.namespace)
        .context("Failed to build endpoint configuration")?;
    let client = InteropClient::new(config, UreqHttpClient::new());

    let echoed = client
        .echo_string("OK")
        .context("echo_string call failed")?;
    println!("{echoed}");

    let echoed = client.echo_integer(0).context("echo_integer call failed")?;
    println!("{echoed}");

    info!("interop check finished");
    Ok(())
}
