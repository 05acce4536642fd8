use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rocket::http::ContentType;
use rocket::response;
use rocket::response::Responder;
use rocket::response::Response;
use rocket::Request;

use json_response_derive::JsonResponse;

use crate::modules::models::championship::Championship;
use crate::modules::models::standings::DriverStanding;

/// name/count pair for the "best at X" slots.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TopPerformer {
    pub name: String,
    pub count: i32,
}

impl TopPerformer {
    fn none() -> TopPerformer {
        TopPerformer {
            name: "N/A".to_string(),
            count: 0,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ChampionshipProgress {
    pub leader: String,
    pub points: i32,
    pub margin: i32,
}

/// # Championship statistics
/// aggregate numbers over the whole snapshot: how much racing happened,
/// who shows up the most, and who leads by how much.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, JsonResponse)]
pub struct ChampionshipStatistics {
    #[serde(rename = "totalEvents")]
    pub total_events: i32,
    #[serde(rename = "totalRaces")]
    pub total_races: i32,
    #[serde(rename = "totalResults")]
    pub total_results: i32,
    #[serde(rename = "uniqueDrivers")]
    pub unique_drivers: i32,
    #[serde(rename = "averageDriversPerRace")]
    pub average_drivers_per_race: f64,
    #[serde(rename = "mostActiveDriver")]
    pub most_active_driver: TopPerformer,
    #[serde(rename = "mostWins")]
    pub most_wins: TopPerformer,
    #[serde(rename = "mostPoles")]
    pub most_poles: TopPerformer,
    #[serde(rename = "mostFastestLaps")]
    pub most_fastest_laps: TopPerformer,
    #[serde(rename = "mostConsistent")]
    pub most_consistent: TopPerformer,
    #[serde(rename = "championshipProgress")]
    pub championship_progress: ChampionshipProgress,
}

#[derive(Default)]
struct DriverTally {
    name: String,
    races_participated: i32,
    wins: i32,
    poles: i32,
    fastest_laps: i32,
    consistent_races: i32,
}

impl ChampionshipStatistics {
    /// # calculate statistics
    /// single pass over every session of every event (both storage
    /// layouts), tallying per driver. bonus counters only count results
    /// the driver actually started.
    ///
    /// ## Arguments
    /// * `championship` - the snapshot to summarize
    ///
    /// ## Returns
    /// * `ChampionshipStatistics` - the aggregate numbers
    pub fn calculate(championship: &Championship) -> ChampionshipStatistics {
        let mut tallies: BTreeMap<String, DriverTally> = BTreeMap::new();
        let mut total_races = 0;
        let mut total_results = 0;

        for event in &championship.events {
            for (_race_id, results) in event.collect_sessions() {
                total_races += 1;

                for result in results.values() {
                    if result.id.is_empty() || result.name.is_empty() {
                        continue;
                    }
                    total_results += 1;

                    let tally = tallies.entry(result.id.clone()).or_insert_with(|| {
                        DriverTally {
                            name: result.name.clone(),
                            ..DriverTally::default()
                        }
                    });

                    if result.participated {
                        tally.races_participated += 1;

                        if result.position == 1 {
                            tally.wins += 1;
                        }
                        if result.pole_position {
                            tally.poles += 1;
                        }
                        if result.fastest_lap {
                            tally.fastest_laps += 1;
                        }
                        if result.most_consistent {
                            tally.consistent_races += 1;
                        }
                    }
                }
            }
        }

        let average_drivers_per_race = if total_races > 0 {
            let average = f64::from(total_results) / f64::from(total_races);
            (average * 100.0).round() / 100.0
        } else {
            0.0
        };

        let standings = DriverStanding::calculate_all(championship);
        let championship_progress = match standings.first() {
            Some(leader) => ChampionshipProgress {
                leader: leader.driver.name.clone(),
                points: leader.total_points,
                margin: leader.total_points
                    - standings.get(1).map(|second| second.total_points).unwrap_or(0),
            },
            None => ChampionshipProgress {
                leader: "N/A".to_string(),
                points: 0,
                margin: 0,
            },
        };

        ChampionshipStatistics {
            total_events: championship.events.len() as i32,
            total_races,
            total_results,
            unique_drivers: tallies.len() as i32,
            average_drivers_per_race,
            most_active_driver: ChampionshipStatistics::best(&tallies, |t| t.races_participated),
            most_wins: ChampionshipStatistics::best(&tallies, |t| t.wins),
            most_poles: ChampionshipStatistics::best(&tallies, |t| t.poles),
            most_fastest_laps: ChampionshipStatistics::best(&tallies, |t| t.fastest_laps),
            most_consistent: ChampionshipStatistics::best(&tallies, |t| t.consistent_races),
            championship_progress,
        }
    }

    /// driver with the strictly highest count; `N/A` when nobody scored.
    fn best(tallies: &BTreeMap<String, DriverTally>, count: fn(&DriverTally) -> i32) -> TopPerformer {
        let mut best = TopPerformer::none();

        for tally in tallies.values() {
            if count(tally) > best.count {
                best = TopPerformer {
                    name: tally.name.clone(),
                    count: count(tally),
                };
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::HashMap;

    use super::*;
    use crate::modules::models::championship::{Event, RaceResult, SessionResults};

    fn result(driver_id: &str, name: &str, position: i32, participated: bool) -> RaceResult {
        RaceResult {
            id: driver_id.to_string(),
            name: name.to_string(),
            position,
            pole_position: false,
            fastest_lap: false,
            most_consistent: false,
            participated,
            is_dropped: false,
        }
    }

    fn session(entries: Vec<RaceResult>) -> SessionResults {
        entries
            .into_iter()
            .map(|result| (result.id.clone(), result))
            .collect()
    }

    #[test]
    fn empty_championship_yields_placeholder_statistics() {
        let stats = ChampionshipStatistics::calculate(&Championship::empty());

        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.total_races, 0);
        assert_eq!(stats.average_drivers_per_race, 0.0);
        assert_eq!(stats.most_wins.name, "N/A");
        assert_eq!(stats.championship_progress.leader, "N/A");
    }

    #[test]
    fn tallies_span_sessions_and_ignore_non_starters_for_bonus_counts() {
        let mut winner = result("rossi", "Marco Rossi", 1, true);
        winner.pole_position = true;
        let mut absent_pole = result("ferrari", "Luca Ferrari", 2, false);
        absent_pole.pole_position = true;

        let event = Event {
            id: "gp-monza".to_string(),
            name: "GP Monza".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            races: HashMap::from([(
                "sprint".to_string(),
                session(vec![winner, absent_pole]),
            )]),
            race1_results: Some(session(vec![result("rossi", "Marco Rossi", 1, true)])),
            race2_results: None,
        };

        let championship = Championship {
            events: vec![event],
            ..Championship::empty()
        };

        let stats = ChampionshipStatistics::calculate(&championship);
        assert_eq!(stats.total_events, 1);
        assert_eq!(stats.total_races, 2);
        assert_eq!(stats.total_results, 3);
        assert_eq!(stats.unique_drivers, 2);
        assert_eq!(stats.average_drivers_per_race, 1.5);
        assert_eq!(stats.most_wins.name, "Marco Rossi");
        assert_eq!(stats.most_wins.count, 2);
        // ferrari's pole does not count: they never started
        assert_eq!(stats.most_poles.name, "Marco Rossi");
        assert_eq!(stats.most_active_driver.count, 2);
        assert_eq!(stats.championship_progress.leader, "Marco Rossi");
        assert!(stats.championship_progress.margin > 0);
    }
}
