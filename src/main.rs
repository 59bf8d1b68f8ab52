extern crate time;
extern crate turfwar;

use time::OffsetDateTime;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use turfwar::config::ReplayConfig;
use turfwar::engine::team::Team;
use turfwar::input;
use turfwar::session::Session;
use turfwar::sync::{JsonLinesOutbox, Unhandled};

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::process;

fn replay(config: &ReplayConfig) -> Result<Session<JsonLinesOutbox<BufWriter<File>>, Unhandled>, Box<dyn Error>> {
    let snapshot = input::json::read_snapshot_from_file(&config.state_path)?;
    let events = input::json::read_events_from_file(&config.events_path)?;
    let outbox = JsonLinesOutbox::new(BufWriter::new(File::create(&config.commands_path)?));

    let mut session = Session::new(&config.email, &snapshot, outbox, Unhandled)?;
    for event in events {
        session.handle(event)?;
    }
    Ok(session)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let start_time = OffsetDateTime::now_utc();
    let config = ReplayConfig::from_env();
    info!(?config, "replaying recorded session");

    let mut session = match replay(&config) {
        Ok(session) => session,
        Err(err) => {
            error!("Error while replaying session: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = session.outbox_mut().flush() {
        error!("Error while writing command file: {}", err);
        process::exit(1);
    }

    for team in Team::playing().iter() {
        println!("{}: {}", team, session.team_score(*team));
    }
    println!("Winning team: {}", session.winning_team());
    println!("Stats: {:?}", session.stats());
    println!("Elapsed time: {}ms", (OffsetDateTime::now_utc() - start_time).whole_milliseconds());
}
