//! Command-line interface for fleetsim.
//!
//! This binary provides a CLI for inspecting the simulated fleet via
//! the HTTP API.

use std::env;

use anyhow::Result;

use fleetsim::api_client;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: fleetsim-cli <command>");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  status            Show the fleet summary");
        eprintln!("  fleet             List per-machine telemetry");
        eprintln!("  miner <address>   Show one machine's details");
        eprintln!("  alerts            Show the alert feed");
        eprintln!();
        eprintln!("Environment:");
        eprintln!("  FLEETSIM_API_URL    API base URL (default: {})", api_client::DEFAULT_BASE_URL);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "status" => cmd_status().await?,
        "fleet" => cmd_fleet().await?,
        "miner" => {
            let Some(address) = args.get(2) else {
                eprintln!("Usage: fleetsim-cli miner <address>");
                std::process::exit(1);
            };
            cmd_miner(address).await?;
        }
        "alerts" => cmd_alerts().await?,
        _ => {
            eprintln!("Unknown command: {}", command);
            eprintln!("Run without arguments to see usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Build an API client, honoring FLEETSIM_API_URL if set.
fn make_client() -> api_client::Client {
    match env::var("FLEETSIM_API_URL") {
        Ok(url) => api_client::Client::with_base_url(url),
        Err(_) => api_client::Client::new(),
    }
}

/// Print the fleet summary.
async fn cmd_status() -> Result<()> {
    let client = make_client();
    let summary = client.get_summary().await?;

    println!("Miners:     {}/{} online", summary.online_miners, summary.total_miners);
    println!("Hashrate:   {:.1} TH/s", summary.total_hashrate);
    println!("Power:      {:.0} W", summary.total_power_w);
    println!("Avg temp:   {:.1} C", summary.average_temperature_c);
    println!("Efficiency: {:.2} W/TH", summary.average_efficiency_w_per_th);
    println!("Earnings:   {:.2} USD/day", summary.estimated_daily_earnings_usd);
    println!("Uptime:     {:.1}%", summary.uptime_pct);

    Ok(())
}

/// Print one line per machine.
async fn cmd_fleet() -> Result<()> {
    let client = make_client();
    let fleet = client.get_fleet().await?;

    for miner in &fleet {
        println!(
            "{:<15} {:<12} {:>7.1} TH/s {:>7.0} W {:>5.1} C",
            miner.address,
            miner.status,
            miner.hashrate,
            miner.power_w,
            miner.temperatures.chip_c,
        );
    }

    Ok(())
}

/// Print one machine's detail view.
async fn cmd_miner(address: &str) -> Result<()> {
    let client = make_client();
    let details = client.get_miner(address).await?;

    println!("{} ({})", details.name, details.telemetry.address);
    println!("Model:    {} fw {}", details.model, details.firmware_version);
    println!("Status:   {}", details.telemetry.status);
    println!("Hashrate: {:.1} TH/s", details.telemetry.hashrate);
    println!("Pool:     {} as {}", details.pool.url, details.pool.username);
    println!("Chains:");
    for chain in &details.chains {
        println!(
            "  #{} {:<8} {:>6.1} TH/s {:>5.1} C ({} chips)",
            chain.id, chain.status, chain.hashrate, chain.temperature_c, chain.chips,
        );
    }
    let down = details
        .chips
        .iter()
        .filter(|c| c.status != fleetsim::telemetry::details::ChipStatus::Active)
        .count();
    println!("Chips:    {} total, {} not active", details.chips.len(), down);

    Ok(())
}

/// Print the alert feed, newest first.
async fn cmd_alerts() -> Result<()> {
    let client = make_client();
    let alerts = client.get_alerts().await?;

    if alerts.is_empty() {
        println!("No alerts.");
        return Ok(());
    }
    for alert in &alerts {
        let ack = if alert.acknowledged { "ack" } else { "   " };
        println!("[{:<8}] {} {}", alert.severity, ack, alert.message);
    }

    Ok(())
}
