use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    ExitCode::from(warcraft_notify::app::startup::run().await)
}
