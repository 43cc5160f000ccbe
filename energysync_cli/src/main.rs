use chrono::{Local, Timelike};
use clap::{Args, Parser, Subcommand};
use energysync_core::input;
use energysync_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "energysync")]
#[command(about = "Estimate your productivity from sleep and caffeine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    score: ScoreArgs,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the productivity score (default)
    Score(ScoreArgs),

    /// List the caffeine reference values per drink
    Drinks,

    /// Show the effective configuration
    Config {
        /// Write the default configuration if no file exists yet
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Clone, Debug, Default)]
struct ScoreArgs {
    /// Hours you slept last night
    #[arg(long, value_parser = input::parse_sleep_hours)]
    sleep_hours: Option<f64>,

    /// Sleep quality (1-10)
    #[arg(long, value_parser = input::parse_sleep_quality)]
    sleep_quality: Option<i32>,

    /// Drinks consumed as NAME=SERVINGS, e.g. coffee=2 (repeatable)
    #[arg(long = "drink", value_name = "NAME=SERVINGS", value_parser = input::parse_drink_spec)]
    drinks: Vec<(String, u32)>,

    /// Caffeine in mg on top of the listed drinks
    #[arg(long, value_parser = input::parse_extra_mg)]
    caffeine_mg: Option<f64>,

    /// Hours since you had caffeine
    #[arg(long, value_parser = input::parse_hours_elapsed)]
    hours_since_caffeine: Option<f64>,

    /// Current hour (0-23, defaults to the local clock)
    #[arg(long, value_parser = input::parse_hour)]
    hour: Option<u8>,

    /// Hour to project remaining caffeine to (defaults to config, 22)
    #[arg(long, value_parser = input::parse_hour)]
    target_hour: Option<u8>,

    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,

    /// Fail instead of prompting for missing values
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        energysync_core::logging::init_with_level("debug");
    } else {
        energysync_core::logging::init();
    }

    // The file may not exist yet, so don't try to load it
    if let Some(Commands::Config { init: true }) = cli.command {
        return cmd_config_init(cli.config);
    }

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Score(args)) => cmd_score(args, &config),
        Some(Commands::Drinks) => cmd_drinks(&config),
        Some(Commands::Config { .. }) => cmd_config(cli.config, &config),
        None => cmd_score(cli.score, &config),
    }
}

fn cmd_score(args: ScoreArgs, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter {
        input: stdin.lock(),
        enabled: !args.no_prompt,
    };

    let sleep_hours = match args.sleep_hours {
        Some(hours) => hours,
        None => prompter.ask("Hours of sleep last night", input::parse_sleep_hours)?,
    };

    let sleep_quality = match args.sleep_quality {
        Some(quality) => quality,
        None => prompter.ask("Sleep quality (1-10)", input::parse_sleep_quality)?,
    };

    let amount_mg = collect_caffeine(&args, &config.drinks, &mut prompter)?;

    let hours_elapsed = match args.hours_since_caffeine {
        Some(hours) => hours,
        // Nothing to decay
        None if amount_mg <= 0.0 => 0.0,
        None => prompter.ask("Hours since your caffeine", input::parse_hours_elapsed)?,
    };

    let hour_of_day = match args.hour {
        Some(hour) => hour,
        None if prompter.enabled => prompter
            .ask(
                "Current hour (0-23, blank for now)",
                input::parse_optional_hour,
            )?
            .unwrap_or_else(current_hour),
        None => current_hour(),
    };

    let target_hour = args.target_hour.unwrap_or(config.projection.target_hour);

    let inputs = ScoreInputs {
        sleep_hours,
        sleep_quality,
        dose: Dose::new(amount_mg, hours_elapsed),
        hour_of_day,
    };
    tracing::debug!("Collected inputs: {:?}", inputs);

    let assessment = assess(&inputs, target_hour);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        display_assessment(&assessment);
    }

    Ok(())
}

/// Total caffeine from flags, or by asking about each drink in the table
fn collect_caffeine<R: BufRead>(
    args: &ScoreArgs,
    drinks: &DrinkTable,
    prompter: &mut Prompter<R>,
) -> Result<f64> {
    if !args.drinks.is_empty() || args.caffeine_mg.is_some() {
        return drinks.total_mg(&args.drinks, args.caffeine_mg.unwrap_or(0.0));
    }

    if !prompter.enabled {
        return Err(Error::InvalidInput(
            "missing caffeine: pass --drink or --caffeine-mg (0 for none) or allow prompting"
                .into(),
        ));
    }

    let mut servings = Vec::with_capacity(drinks.len());
    for (name, mg) in drinks.iter() {
        let label = format!("Servings of {} ({} mg each) [0]", name.replace('_', " "), mg);
        let units = prompter.ask(&label, input::parse_units)?;
        if units > 0 {
            servings.push((name.to_string(), units));
        }
    }
    let extra_mg = prompter.ask("Any other caffeine in mg [0]", input::parse_extra_mg)?;

    drinks.total_mg(&servings, extra_mg)
}

fn current_hour() -> u8 {
    // hour() is always 0-23
    Local::now().hour() as u8
}

/// Line-based prompting that re-asks until the answer parses
struct Prompter<R> {
    input: R,
    enabled: bool,
}

impl<R: BufRead> Prompter<R> {
    fn ask<T>(&mut self, label: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        if !self.enabled {
            return Err(Error::InvalidInput(format!(
                "missing value for '{}' and prompting is disabled",
                label
            )));
        }

        loop {
            eprint!("{}: ", label);
            io::stderr().flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InvalidInput(format!(
                    "input ended before '{}' was answered",
                    label
                )));
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => eprintln!("  {}. Please try again.", e),
            }
        }
    }
}

fn cmd_drinks(config: &Config) -> Result<()> {
    if config.drinks.is_empty() {
        println!("No drinks configured.");
        return Ok(());
    }

    println!("Caffeine per serving:");
    for (name, mg) in config.drinks.iter() {
        println!("  {:<16} {:>6.1} mg", name, mg);
    }
    Ok(())
}

fn config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Config::default_config_path(),
    }
}

fn cmd_config_init(path: Option<PathBuf>) -> Result<()> {
    let path = config_path(path)?;
    if path.exists() {
        return Err(Error::Config(format!(
            "{} already exists, not overwriting",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn cmd_config(path: Option<PathBuf>, config: &Config) -> Result<()> {
    let path = config_path(path)?;
    println!("# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

fn display_assessment(assessment: &Assessment) {
    let projection = &assessment.projection;

    println!();
    println!(
        "Estimated Productivity Score: {:.1}/100",
        assessment.result.score
    );
    println!("{}", assessment.result.mood.advice());
    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│  CAFFEINE OUTLOOK");
    println!("╰─────────────────────────────────────────╯");
    println!("  Active now:         {:.1} mg", assessment.caffeine_now_mg);
    println!(
        "  At {:02}:00:           {:.1} mg ({} effect)",
        assessment.target_hour, projection.caffeine_at_target, projection.effect_level
    );

    if projection.hours_until_light_effect > 0.0 {
        println!(
            "  Light effect in:    {:.1} h",
            projection.hours_until_light_effect
        );
    }

    if projection.hours_until_wearoff > 0.0 {
        match clock_after(Local::now(), projection.hours_until_wearoff) {
            Some(at) => println!(
                "  Worn off in:        {:.1} h (around {})",
                projection.hours_until_wearoff,
                at.format("%H:%M")
            ),
            None => println!(
                "  Worn off in:        {:.1} h",
                projection.hours_until_wearoff
            ),
        }
    } else {
        println!("  Worn off:           yes");
    }
    println!();
}
