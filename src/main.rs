use clap::Parser;
use marrow::config::ShellConfig;
use marrow::flags::Flags;
use marrow::input::RustylineSource;
use marrow::path::Resolver;
use marrow::process::{signal, OsLauncher};
use marrow::{Shell, ShellResult};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let flags = Flags::parse();
    init_tracing(&flags);

    let code = match run(&flags).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("marrow: {}", e);
            1
        }
    };
    std::process::exit(code);
}

async fn run(flags: &Flags) -> ShellResult<i32> {
    let config = ShellConfig::from_flags(flags);
    signal::setup_signal_handlers()?;

    let resolver = Resolver::new();
    let source = RustylineSource::spawn(&config, resolver.clone())?;
    let mut shell = Shell::new(source, OsLauncher::new(), std::io::stdout(), resolver, config);
    shell.run().await
}

fn init_tracing(flags: &Flags) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env("MARROW_LOG")
                .unwrap_or_else(|_| EnvFilter::new(flags.log_filter())),
        )
        .init();
}
