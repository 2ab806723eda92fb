mod config;
mod platform;

fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env()?;
    platform::run_app(config)
}
