fn main() -> anyhow::Result<()> {
    flexorder_observability::init();

    let config = flexorder_app::AppConfig::from_env()?;
    let report = flexorder_app::run(&config)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
