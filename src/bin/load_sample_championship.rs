use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use dotenvy::dotenv;
use log::{error, info};

use campionato_kart_standings::modules::helpers::logging::setup_logging;
use campionato_kart_standings::modules::models::championship::{
    Championship, Event, RaceResult, SessionResults,
};
use campionato_kart_standings::modules::redis::Redis;
use campionato_kart_standings::modules::repository::ChampionshipRepository;

/// Load a two-event sample championship into the store. Handy for
/// pointing the UI at something real during development.
fn main() {
    dotenv().ok();
    setup_logging().expect("failed to setup logging");

    let championship = sample_championship();

    let r_conn = &mut match Redis::connect() {
        Ok(conn) => conn,
        Err(err) => {
            error!(target:"load_sample_championship", "could not connect to the store: {}", err);
            return;
        }
    };

    match ChampionshipRepository::save(r_conn, &championship) {
        Ok(()) => {
            info!(target:"load_sample_championship", "sample championship {} loaded", championship.id);
        }
        Err(err) => {
            error!(target:"load_sample_championship", "could not save sample championship: {}", err);
        }
    };
}

fn result(driver_id: &str, name: &str, position: i32) -> RaceResult {
    RaceResult {
        id: driver_id.to_string(),
        name: name.to_string(),
        position,
        pole_position: false,
        fastest_lap: false,
        most_consistent: false,
        participated: true,
        is_dropped: false,
    }
}

fn with_pole(mut result: RaceResult) -> RaceResult {
    result.pole_position = true;
    result
}

fn with_fastest_lap(mut result: RaceResult) -> RaceResult {
    result.fastest_lap = true;
    result
}

fn with_most_consistent(mut result: RaceResult) -> RaceResult {
    result.most_consistent = true;
    result
}

fn session(results: Vec<RaceResult>) -> SessionResults {
    results
        .into_iter()
        .map(|result| (result.id.clone(), result))
        .collect()
}

fn sample_championship() -> Championship {
    let gp_monza = Event {
        id: "gp-monza-2025".to_string(),
        name: "GP Monza".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        races: HashMap::new(),
        race1_results: Some(session(vec![
            with_pole(result("marco-rossi", "Marco Rossi", 1)),
            with_fastest_lap(result("luca-ferrari", "Luca Ferrari", 2)),
            result("alessandro-bianchi", "Alessandro Bianchi", 3),
            with_most_consistent(result("max-verstappen", "Max Verstappen", 4)),
            result("giulia-conti", "Giulia Conti", 5),
            result("matteo-romano", "Matteo Romano", 6),
            result("andrea-lombardi", "Andrea Lombardi", 7),
            result("sara-moretti", "Sara Moretti", 8),
        ])),
        race2_results: Some(session(vec![
            with_pole(with_fastest_lap(result("luca-ferrari", "Luca Ferrari", 1))),
            result("alessandro-bianchi", "Alessandro Bianchi", 2),
            with_most_consistent(result("marco-rossi", "Marco Rossi", 3)),
            result("giulia-conti", "Giulia Conti", 4),
            result("max-verstappen", "Max Verstappen", 5),
            result("sara-moretti", "Sara Moretti", 6),
            result("matteo-romano", "Matteo Romano", 7),
            result("andrea-lombardi", "Andrea Lombardi", 8),
        ])),
    };

    let gp_imola = Event {
        id: "gp-imola-2025".to_string(),
        name: "GP Imola".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
        races: HashMap::new(),
        race1_results: Some(session(vec![
            with_pole(with_most_consistent(result(
                "alessandro-bianchi",
                "Alessandro Bianchi",
                1,
            ))),
            result("marco-rossi", "Marco Rossi", 2),
            with_fastest_lap(result("max-verstappen", "Max Verstappen", 3)),
            result("luca-ferrari", "Luca Ferrari", 4),
            result("sara-moretti", "Sara Moretti", 5),
            result("giulia-conti", "Giulia Conti", 6),
            result("matteo-romano", "Matteo Romano", 7),
            result("andrea-lombardi", "Andrea Lombardi", 8),
        ])),
        race2_results: Some(session(vec![
            with_fastest_lap(result("marco-rossi", "Marco Rossi", 1)),
            with_pole(result("luca-ferrari", "Luca Ferrari", 2)),
            with_most_consistent(result("max-verstappen", "Max Verstappen", 3)),
            result("alessandro-bianchi", "Alessandro Bianchi", 4),
            result("giulia-conti", "Giulia Conti", 5),
            result("matteo-romano", "Matteo Romano", 6),
            result("sara-moretti", "Sara Moretti", 7),
            result("andrea-lombardi", "Andrea Lombardi", 8),
        ])),
    };

    let now = Utc::now();
    Championship {
        id: "championship-2025".to_string(),
        name: "Campionato Kart 2025".to_string(),
        season: "2025".to_string(),
        drivers: Vec::new(),
        events: vec![gp_monza, gp_imola],
        leaders: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}
