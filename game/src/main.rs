use anyhow::Context;
use life_engine::{installed_config_path, DisplayConfig, EngineContext, Exit};
use log::info;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default filter, wgpu logs included.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,life_engine=info,digital_life=info"),
    )
    .init();

    // ---- Config lives under the install root: <root>/bin/digital-life ----
    let path = installed_config_path().context("cannot locate the display config")?;
    let config = DisplayConfig::load(&path).context("cannot start without a display config")?;

    // ---- Engine owns the window until quit ----
    let ctx = EngineContext::new(&config).context("failed to initialize display")?;
    let Exit::Quit(reason) = ctx.run().context("display loop failed")?;
    info!("Exiting cleanly: {reason:?}");

    Ok(())
}
