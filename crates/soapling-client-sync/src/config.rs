use clap::Parser;
use soapling_client_core::config::{DEFAULT_ENDPOINT_URL, DEFAULT_SERVICE_NAMESPACE};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry::Registry};

/// SOAP interop echo client (synchronous)
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoint URL of the echo server
    #[arg(
        short,
        long,
        default_value = DEFAULT_ENDPOINT_URL,
        help = "Endpoint URL of the echo server"
    )]
    pub url: String,

    /// Service namespace the echo operations live in
    #[arg(
        short,
        long,
        default_value = DEFAULT_SERVICE_NAMESPACE,
        help = "Service namespace of the remote interop service"
    )]
    pub namespace: String,

    /// Verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase logging verbosity")]
    pub verbose: u8,
}

/// Initialize logging on stderr; stdout is reserved for the echoed results.
pub fn init_logging(verbose_level: u8) -> anyhow::Result<()> {
    // Bridge logs from the `log` crate (ureq) to `tracing`
    LogTracer::init().ok();

    // Determine log level based on verbosity using global filters
    let filter_str = match verbose_level {
        0 => "warn,ureq=error",
        1 => "info,ureq=warn",
        2 => "debug,ureq=info",
        _ => "trace",
    };

    let env_filter = EnvFilter::new(filter_str);

    let subscriber = Registry::default().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
