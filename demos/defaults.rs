//! Example demonstrating default values, including list defaults

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Settings {
    #[env("log_level,info")]
    log_level: String,

    #[env("workers,4")]
    workers: usize,

    // List defaults use ; between elements so they stay valid whatever the
    // configured list separator is
    #[env("listen_on,127.0.0.1;::1")]
    listen_on: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Nothing is set in the environment: every field falls back to its default
    std::env::remove_var("LOG_LEVEL");
    std::env::remove_var("WORKERS");
    std::env::remove_var("LISTEN_ON");

    let mut settings = Settings::default();
    envbind::bind(&mut settings)?;

    println!("Defaults applied:");
    println!("  Log level: {}", settings.log_level);
    println!("  Workers: {}", settings.workers);
    println!("  Listen on: {:?}", settings.listen_on);

    Ok(())
}
