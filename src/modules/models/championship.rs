use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use rocket::http::ContentType;
use rocket::response;
use rocket::response::Responder;
use rocket::response::Response;
use rocket::Request;

use json_response_derive::JsonResponse;

use crate::modules::models::driver::Driver;

/// Results of a single session, keyed by driver id.
pub type SessionResults = HashMap<String, RaceResult>;

/// A single driver's outcome in one session of an event.
#[derive(Serialize, PartialEq, Debug, Clone, Deserialize)]
pub struct RaceResult {
    pub id: String,
    pub name: String,
    pub position: i32,
    #[serde(rename = "polePosition")]
    pub pole_position: bool,
    #[serde(rename = "fastestLap")]
    pub fastest_lap: bool,
    #[serde(rename = "mostConsistent")]
    pub most_consistent: bool,
    pub participated: bool,
    #[serde(rename = "isDropped", default)]
    pub is_dropped: bool,
}

/// # Event
/// one race weekend, holding one or more sessions.
///
/// sessions live in the `races` map. championships saved by older
/// versions of the app instead carry exactly two fixed sessions in
/// `race1Results`/`race2Results`; an event may hold both layouts at once.
#[derive(Serialize, PartialEq, Debug, Clone, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub races: HashMap<String, SessionResults>,
    #[serde(
        rename = "race1Results",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub race1_results: Option<SessionResults>,
    #[serde(
        rename = "race2Results",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub race2_results: Option<SessionResults>,
}

impl Event {
    /// # collect sessions
    /// normalize the two storage layouts into one uniform view of the
    /// event. legacy fields are folded in under the fixed session ids
    /// `race1`/`race2`, overriding same-named entries in `races`.
    ///
    /// the returned map is ordered by session id, and every place that
    /// iterates sessions goes through it, so tie-breaks and first-seen
    /// choices are deterministic.
    ///
    /// ## Returns
    /// * `BTreeMap<String, &SessionResults>` - all sessions of the event
    pub fn collect_sessions(&self) -> BTreeMap<String, &SessionResults> {
        let mut sessions: BTreeMap<String, &SessionResults> = BTreeMap::new();

        for (race_id, results) in &self.races {
            sessions.insert(race_id.to_owned(), results);
        }

        if let Some(results) = &self.race1_results {
            sessions.insert("race1".to_string(), results);
        }
        if let Some(results) = &self.race2_results {
            sessions.insert("race2".to_string(), results);
        }

        sessions
    }
}

#[derive(Serialize, PartialEq, Debug, Clone, Deserialize)]
pub struct ChampionshipLeader {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
    #[serde(rename = "isCreator")]
    pub is_creator: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// # Championship
/// the full snapshot the engine computes over. `drivers` and `leaders`
/// are carried as stored; standings never read them (drivers are
/// discovered from race results instead).
#[derive(Serialize, PartialEq, Debug, Clone, Deserialize, JsonResponse)]
pub struct Championship {
    pub id: String,
    pub name: String,
    pub season: String,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    pub events: Vec<Event>,
    #[serde(default)]
    pub leaders: Vec<ChampionshipLeader>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Championship {
    /// # empty championship
    /// a fresh championship for the current season. served on reads when
    /// nothing is stored yet, so the read path always has something to
    /// render.
    pub fn empty() -> Championship {
        let now = Utc::now();

        Championship {
            id: format!("championship-{}", now.year()),
            name: format!("Campionato Kart {}", now.year()),
            season: now.year().to_string(),
            drivers: Vec::new(),
            events: Vec::new(),
            leaders: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// # toggle worst result
    /// flip the manual-discard flag on one driver's result in one session
    /// of one event, and return the updated championship. the input is
    /// left untouched.
    ///
    /// the `races` map is checked first; the legacy fields only answer
    /// for the fixed ids `race1`/`race2`. when the event, session or
    /// result does not exist the championship is returned unchanged.
    ///
    /// ## Arguments
    /// * `driver_id` - id of the driver whose result is toggled
    /// * `event_id` - id of the event holding the session
    /// * `race_id` - id of the session within the event
    ///
    /// ## Returns
    /// * `Championship` - the updated championship
    pub fn toggle_worst_result(
        &self,
        driver_id: &str,
        event_id: &str,
        race_id: &str,
    ) -> Championship {
        let mut updated = self.clone();

        let event = match updated.events.iter_mut().find(|e| e.id == event_id) {
            Some(event) => event,
            None => {
                warn!(target:"models/championship:toggle_worst_result", "event not found: {}", event_id);
                return self.clone();
            }
        };

        let result = match Championship::find_result_mut(event, driver_id, race_id) {
            Some(result) => result,
            None => {
                warn!(target:"models/championship:toggle_worst_result",
                    "result not found for driver {} in event {}, race {}", driver_id, event_id, race_id);
                return self.clone();
            }
        };

        result.is_dropped = !result.is_dropped;
        updated
    }

    fn find_result_mut<'a>(
        event: &'a mut Event,
        driver_id: &str,
        race_id: &str,
    ) -> Option<&'a mut RaceResult> {
        if let Some(results) = event.races.get_mut(race_id) {
            if results.contains_key(driver_id) {
                return results.get_mut(driver_id);
            }
        }

        match race_id {
            "race1" => event
                .race1_results
                .as_mut()
                .and_then(|results| results.get_mut(driver_id)),
            "race2" => event
                .race2_results
                .as_mut()
                .and_then(|results| results.get_mut(driver_id)),
            _ => None,
        }
    }
}
