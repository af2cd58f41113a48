//! Example demonstrating list fields and a custom list separator

use envbind::{Config, EnvBind};

#[derive(Debug, Default, EnvBind)]
struct Settings {
    #[env("peers")]
    peers: Vec<String>,

    #[env("weights")]
    weights: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("PEERS", "alpha:7000|beta:7000");
    std::env::set_var("WEIGHTS", "0.5|0.25|0.25");

    // Peer addresses contain colons, so split on | instead of the default ,
    let mut binder = Config::new("");
    binder.set_list_separator("|");

    let mut settings = Settings::default();
    binder.bind(&mut settings)?;

    println!("Peers:");
    for (peer, weight) in settings.peers.iter().zip(&settings.weights) {
        println!("  {} (weight {})", peer, weight);
    }

    Ok(())
}
