//! Example demonstrating a variable-name prefix

use envbind::{Config, EnvBind};

#[derive(Debug, Default, EnvBind)]
struct Settings {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_API_KEY, etc.
    #[env("database_url")]
    database_url: String,

    #[env("api_key")]
    api_key: String,

    #[env("port,8080")]
    port: u16,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables with prefix
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("MYAPP_PORT", "3000");

    let mut settings = Settings::default();
    Config::new("myapp").bind(&mut settings)?;

    println!("Configuration with prefix 'myapp':");
    println!("  Database URL: {}", settings.database_url);
    println!("  API Key: {}", settings.api_key);
    println!("  Port: {}", settings.port);

    Ok(())
}
