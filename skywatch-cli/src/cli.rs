use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use skywatch_core::{
    Config, Coordinate, FixedLocation, Theme, WeatherSession, WeatherSnapshot,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skywatch", version, about = "Current weather with search history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and history settings.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris" or "Kyiv,UA".
        city: String,
    },

    /// Show current weather for a coordinate pair.
    Here {
        /// Latitude in degrees, -90 to 90.
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees, -180 to 180.
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Interactive search loop; history accumulates for the session.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
            Command::Here { lat, lon } => here(lat, lon).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let capacity = inquire::CustomType::<usize>::new("Search history size:")
        .with_default(config.history_capacity)
        .with_error_message("Enter a whole number")
        .prompt()
        .context("Failed to read history size")?;

    config.api_key = Some(api_key.trim().to_string());
    config.history_capacity = capacity;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let city = city.trim();
    if city.is_empty() {
        bail!("City name must not be empty");
    }

    let session = session()?;
    let snapshot = session.fetch_by_city(city).await?;
    print_snapshot(&snapshot);

    Ok(())
}

async fn here(lat: f64, lon: f64) -> anyhow::Result<()> {
    let coord = Coordinate::new(lat, lon)?;

    let session = session()?;
    let snapshot = session.fetch_by_location(&FixedLocation(coord)).await?;
    print_snapshot(&snapshot);

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let session = session()?;

    println!("Type a city name, or :history, :clear, :quit.");

    loop {
        let line = match inquire::Text::new("city:").prompt() {
            Ok(line) => line,
            // Esc / Ctrl-C end the session.
            Err(inquire::InquireError::OperationCanceled)
            | Err(inquire::InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read input"),
        };

        let input = line.trim();
        match input {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" => {
                let entries = session.history();
                if entries.is_empty() {
                    println!("No searches yet.");
                } else {
                    for (i, name) in entries.iter().enumerate() {
                        println!("{:>2}. {name}", i + 1);
                    }
                }
            }
            ":clear" => {
                session.clear_history();
                println!("History cleared.");
            }
            city => match session.fetch_by_city(city).await {
                Ok(snapshot) => print_snapshot(&snapshot),
                Err(err) => println!("error: {err}"),
            },
        }
    }

    Ok(())
}

fn session() -> anyhow::Result<WeatherSession> {
    let config = Config::load()?;
    WeatherSession::from_config(&config)
}

fn print_snapshot(snapshot: &WeatherSnapshot) {
    let theme = Theme::for_description(&snapshot.description);

    println!("{} {}: {}", theme.glyph(), snapshot.city, snapshot.description);
    println!(
        "  temperature  {:.1} C (feels like {:.1} C)",
        snapshot.temperature_c, snapshot.feels_like_c
    );
    println!("  humidity     {} %", snapshot.humidity_pct);
    println!("  wind         {:.1} m/s", snapshot.wind_speed_mps);
    println!("  pressure     {} hPa", snapshot.pressure_hpa);

    if let (Some(sunrise), Some(sunset)) = (snapshot.sunrise_utc(), snapshot.sunset_utc()) {
        println!(
            "  sun          {} - {} UTC",
            sunrise.format("%H:%M"),
            sunset.format("%H:%M")
        );
    }
}
