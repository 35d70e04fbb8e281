use payr::commands::Cli;
use payr::msg_error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Structured logging only when explicitly requested; plain console
    // output otherwise (the msg_* macros route accordingly).
    if std::env::var("PAYR_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Err(err) = Cli::menu() {
        msg_error!(format!("{:#}", err));
        std::process::exit(1);
    }
}
