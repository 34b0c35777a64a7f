//! Terminal battle driver entry point.
mod config;
mod input;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use battle_content::ContentFactory;
use battle_core::{BattleEnv, CatalogBundle, Combatant, EncounterState};
use config::CliConfig;
use input::{Command, HELP, parse_command};
use session::Session;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();
    let config = CliConfig::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), seed = config.seed, "starting");

    let bundle = ContentFactory::new(&config.data_dir).load_bundle()?;
    let mut lines = io::stdin().lock().lines();

    let class_id = match config.class {
        Some(class_id) => class_id,
        None => match prompt_class(&bundle, &mut lines)? {
            Some(class_id) => class_id,
            None => return Ok(()),
        },
    };
    let player = BattleEnv::from_bundle(&bundle).spawn_player(&class_id)?;

    let mut session = Session::new(bundle, config.seed);
    print_lines(&session.begin(player)?);
    print_status(&session.state()?);
    println!("{HELP}");

    loop {
        prompt("> ")?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Status => print_status(&session.state()?),
            Command::List => print_lines(&session.action_menu()?),
            Command::Next => match session.survivor()? {
                Some(player) => {
                    print_lines(&session.begin(player)?);
                    print_status(&session.state()?);
                }
                None if session.state()?.is_active() => println!("The battle is still on."),
                None => {
                    println!("Your journey is over.");
                    break;
                }
            },
            Command::Act(request) => match session.decide(&request) {
                Ok(fresh) => {
                    print_lines(&fresh);
                    let state = session.state()?;
                    match state.outcome() {
                        Some(outcome) => println!("-- {outcome} -- (type `next` or `quit`)"),
                        None => print_status(&state),
                    }
                }
                Err(err) => println!("{err}"),
            },
        }
    }
    Ok(())
}

/// Asks for a class id until a known one is entered. `None` on end of input.
fn prompt_class(
    bundle: &CatalogBundle,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<String>> {
    println!("Choose your class:");
    for class in &bundle.classes {
        println!("  {:<8} {} - {}", class.id, class.name, class.description);
    }
    loop {
        prompt("class> ")?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        let choice = line.trim();
        if bundle.classes.iter().any(|class| class.id == choice) {
            return Ok(Some(choice.to_string()));
        }
        println!("Unknown class '{choice}'.");
    }
}

fn prompt(text: &str) -> Result<()> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn print_status(state: &EncounterState) {
    println!("{}", status_line(&state.player));
    if let Some(opponent) = &state.opponent {
        println!("{}", status_line(opponent));
    }
}

fn status_line(combatant: &Combatant) -> String {
    let effects: Vec<String> = combatant.status.iter().map(|e| e.kind.to_string()).collect();
    let mut line = format!(
        "{} Lv{}  HP {}/{}  MP {}/{}",
        combatant.name,
        combatant.level,
        combatant.hp.current,
        combatant.hp.maximum,
        combatant.mp.current,
        combatant.mp.maximum
    );
    if !effects.is_empty() {
        line.push_str(&format!("  [{}]", effects.join(", ")));
    }
    line
}

/// Logs go to stderr so they never interleave with the battle transcript on stdout.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
