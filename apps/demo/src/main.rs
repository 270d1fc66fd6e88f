use platform::Platform;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only rendered buttons.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    for platform in Platform::ALL {
        let dialog = ui::create_dialog(platform);
        if let Err(e) = ui::client_logic(dialog.as_ref()) {
            tracing::error!("Failed to render {} button: {}", platform, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
