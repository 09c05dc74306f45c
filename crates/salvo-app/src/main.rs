use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use salvo_app::display::{Display, Units};
use salvo_app::input::spawn_stdin_reader;
use salvo_core::config::ScenarioBounds;
use salvo_core::constants::IMPACT_RADIUS;
use salvo_core::enums::ShotMode;
use salvo_core::events::SessionEvent;
use salvo_sim::scenario::{sample_scenario, seeded_rng, DuelOptions};
use salvo_sim::trajectory::shot_profile;
use salvo_sim::{spawn_session, SessionError};

#[derive(Parser, Debug)]
#[command(name = "salvo")]
#[command(about = "Artillery duel against an approaching tank", long_about = None)]
struct Cli {
    /// Fire automatically, correcting each shot from the last miss
    #[arg(short = 'a', long)]
    auto: bool,

    /// Keep the target moving while you choose an angle
    #[arg(short = 'm', long)]
    realtime: bool,

    /// Show distances in feet and miles
    #[arg(short = 'e', long)]
    english: bool,

    /// Print the shot profile table before the first shot
    #[arg(short = 'p', long)]
    profile: bool,

    /// Detonation radius (meters)
    #[arg(short = 'd', long, default_value_t = IMPACT_RADIUS)]
    radius: f64,

    /// Scenario seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds per real second for target motion
    #[arg(long)]
    time_scale: Option<f64>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("salvo: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SessionError> {
    let shot_mode = if cli.auto {
        ShotMode::Auto
    } else {
        ShotMode::Manual
    };
    let options = DuelOptions {
        shot_mode,
        realtime: cli.realtime,
        tolerance: cli.radius,
        speed_multiplier: cli.time_scale,
        ..DuelOptions::default()
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("scenario seed {}", seed);
    let mut rng = seeded_rng(seed);
    let scenario = sample_scenario(&ScenarioBounds::default(), &options.angle_bounds, &mut rng);
    let config = options.build_config(&scenario);

    let display = Display::new(Units::from_english_flag(cli.english), config.max_range);
    if !cli.json {
        for line in display.intro(config.shot_mode, config.target_motion, config.tolerance) {
            println!("{}", line);
        }
        if cli.profile {
            let rows = shot_profile(&config.angle_bounds, config.muzzle_speed);
            println!("{}", display.shot_profile(&rows));
        }
    }

    let bounds = config.angle_bounds;
    let session = spawn_session(config, scenario.start_range)?;

    if shot_mode == ShotMode::Manual {
        spawn_stdin_reader(session.input(), bounds, display.prompt(&bounds)).map_err(
            |source| SessionError::Spawn {
                name: "stdin",
                source,
            },
        )?;
    }

    for event in session.events().iter() {
        print_event(&display, &event, cli.json);
    }

    let end = session.join()?;
    info!("finished after {} shots", end.shots());
    Ok(())
}

fn print_event(display: &Display, event: &SessionEvent, json: bool) {
    let mut stdout = io::stdout().lock();
    if json {
        match serde_json::to_string(event) {
            Ok(line) => {
                let _ = writeln!(stdout, "{}", line);
            }
            Err(err) => error!("failed to encode event: {}", err),
        }
        return;
    }
    if let Some(text) = display.render(event) {
        let _ = write!(stdout, "{}", text);
        let _ = stdout.flush();
    }
}
