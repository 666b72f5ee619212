use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use cityboard_core::{Config, Dashboard, Theme, default_cities, filter_cities, provider_from_config};
use clap::{Parser, Subcommand, ValueEnum};
use console::Term;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use tracing::debug;

use crate::render::{render_city_list, render_clock_table, render_dashboard};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "cityboard",
    version,
    about = "Weather dashboard for a list of cities"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Alternative OpenWeather host.
    #[arg(long, global = true, hide = true)]
    pub base_url: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred theme.
    Configure,

    /// Fetch and show weather for every city matching the query.
    Show {
        /// Case-insensitive city or country filter; omit to show all.
        query: Option<String>,

        /// Print the entries as JSON instead of cards.
        #[arg(long, conflicts_with = "live")]
        json: bool,

        /// Keep a live local clock per city on screen until Ctrl-C.
        #[arg(long)]
        live: bool,
    },

    /// Fetch once, then search the dashboard interactively.
    Search,

    /// Print or change the saved theme.
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// List the built-in cities without touching the network.
    Cities {
        query: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl ThemeAction {
    fn apply(self, current: Theme) -> Theme {
        match self {
            ThemeAction::Light => Theme::Light,
            ThemeAction::Dark => Theme::Dark,
            ThemeAction::Toggle => current.toggled(),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        let base_url = self.base_url.as_deref();

        match self.command {
            Command::Configure => configure(&mut config)?,
            Command::Show { query, json, live } => {
                let query = query.unwrap_or_default();
                let dashboard = fetch_dashboard(&config, base_url).await?;
                let theme = config.theme();

                if json {
                    let out = serde_json::json!({
                        "entries": dashboard.filtered(&query),
                        "failures": dashboard.failures,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                } else if live {
                    live_clock(&dashboard, &query, theme).await?;
                } else {
                    let banner = dashboard.failure_banner();
                    print!(
                        "{}",
                        render_dashboard(
                            &dashboard.filtered(&query),
                            banner.as_deref(),
                            Utc::now(),
                            theme
                        )
                    );
                }
            }
            Command::Search => {
                let dashboard = fetch_dashboard(&config, base_url).await?;
                search(&dashboard, &mut config)?;
            }
            Command::Theme { action } => {
                let current = config.theme();
                match action {
                    None => println!("{current}"),
                    Some(action) => {
                        let next = action.apply(current);
                        config.set_theme(next);
                        config.save()?;
                        println!("Theme set to {next}");
                    }
                }
            }
            Command::Cities { query } => {
                let query = query.unwrap_or_default();
                let cities = default_cities();
                let view = render_city_list(&filter_cities(&cities, &query), config.theme());
                print!("{view}");
            }
        }

        Ok(())
    }
}

async fn fetch_dashboard(config: &Config, base_url: Option<&str>) -> anyhow::Result<Dashboard> {
    let provider = provider_from_config(config, base_url)?;
    let cities = default_cities();
    debug!(cities = cities.len(), "fetching dashboard");
    Ok(Dashboard::fetch(provider.as_ref(), cities).await)
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    let current = config.theme();
    let themes = vec![Theme::Light, Theme::Dark];
    let cursor = themes.iter().position(|t| *t == current).unwrap_or(0);
    let theme = Select::new("Theme:", themes)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read theme")?;

    config.set_api_key(api_key.trim().to_string());
    config.set_theme(theme);
    config.save()?;

    let path = Config::config_file_path()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn search(dashboard: &Dashboard, config: &mut Config) -> anyhow::Result<()> {
    let mut theme = config.theme();

    loop {
        let input = match Text::new("Search cities:")
            .with_help_message("empty shows all, :theme toggles the theme, :q quits")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read search query"),
        };

        match input.trim() {
            ":q" => break,
            ":theme" => {
                theme = theme.toggled();
                config.set_theme(theme);
                config.save()?;
                println!("Theme set to {theme}");
            }
            query => {
                let banner = dashboard.failure_banner();
                print!(
                    "{}",
                    render_dashboard(
                        &dashboard.filtered(query),
                        banner.as_deref(),
                        Utc::now(),
                        theme
                    )
                );
            }
        }
    }

    Ok(())
}

async fn live_clock(dashboard: &Dashboard, query: &str, theme: Theme) -> anyhow::Result<()> {
    let term = Term::stdout();
    let entries = dashboard.filtered(query);
    let banner = dashboard.failure_banner();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                term.clear_screen()?;
                let mut frame = render_clock_table(&entries, Utc::now(), theme);
                if let Some(banner) = &banner {
                    frame.push_str(banner);
                    frame.push('\n');
                }
                term.write_str(&frame)?;
            }
            res = &mut ctrl_c => {
                res.context("Failed to listen for Ctrl-C")?;
                break;
            }
        }
    }

    Ok(())
}
