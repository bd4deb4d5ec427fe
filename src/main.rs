use anyhow::Result;
use clap::Parser;
use wrapsnake::game::GameConfig;
use wrapsnake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(version, about = "Classic snake on a toroidal grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "32", value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Game speed in ticks per second
    #[arg(long, default_value = "7.5", value_parser = parse_tick_rate)]
    tick_rate: f64,
}

/// The tick rate feeds `Duration::from_secs_f64(1.0 / rate)`, which
/// panics on zero, negative, or non-finite input.
fn parse_tick_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(String::from("tick rate must be a positive number"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_rate: cli.tick_rate,
    };

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
