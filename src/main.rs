use personnel::ui::{make_config, App};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting personnel client");

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config())
        .launch(App);
}
