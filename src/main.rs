use clap::Parser as _;
use codepen_adapter::app::App;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    // stdout carries the JSON payload, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let app = App::parse();
    app.exec()
}
