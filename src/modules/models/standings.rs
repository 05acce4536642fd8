use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::modules::helpers::points::Points;
use crate::modules::models::championship::{Championship, Event, RaceResult};
use crate::modules::models::driver::Driver;

/// # Event score
/// one driver's points breakdown for one event: the points taken from
/// every session, the amount removed by the drop rule, and what is left.
///
/// `race_points` holds an entry for every session of the event, 0 for
/// sessions the driver never entered, so `final_points` is always
/// `max(0, sum(race_points) - discarded_points)`.
#[derive(Serialize, PartialEq, Debug, Clone, Deserialize)]
pub struct EventScore {
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "racePoints")]
    pub race_points: HashMap<String, i32>,
    #[serde(rename = "discardedPoints")]
    pub discarded_points: i32,
    #[serde(rename = "finalPoints")]
    pub final_points: i32,
}

impl EventScore {
    /// # score one event for one driver
    /// gathers the driver's results across all sessions of the event,
    /// scores each one, and applies the drop rule:
    ///
    /// * a result flagged `isDropped` is the discard, whatever its value
    ///   (first flagged session in session-id order when several are set)
    /// * otherwise, with more than one session in the event, the lowest
    ///   session value is discarded (a session the driver skipped counts
    ///   as 0)
    /// * a single-session event discards nothing
    ///
    /// a driver with no result in any session gets the empty breakdown.
    ///
    /// ## Arguments
    /// * `event` - the event to score
    /// * `driver_id` - id of the driver to score it for
    ///
    /// ## Returns
    /// * `EventScore` - the driver's breakdown for the event
    pub fn calculate(event: &Event, driver_id: &str) -> EventScore {
        let sessions = event.collect_sessions();

        let mut race_points: HashMap<String, i32> = HashMap::new();
        let mut driver_results: Vec<(String, &RaceResult)> = Vec::new();
        let mut driver: Option<Driver> = None;

        for (race_id, results) in &sessions {
            match results.get(driver_id) {
                Some(result) => {
                    let scored_for = driver.get_or_insert_with(|| Driver::from_result(result));
                    race_points.insert(race_id.to_owned(), Points::for_race(result, scored_for));
                    driver_results.push((race_id.to_owned(), result));
                }
                None => {
                    // keep a zero entry: the drop rule counts sessions of
                    // the event, not sessions the driver entered
                    race_points.insert(race_id.to_owned(), 0);
                }
            }
        }

        let driver = match driver {
            Some(driver) => driver,
            None => return EventScore::none(&event.id),
        };

        let discarded_points = EventScore::discarded_points(&driver, &race_points, &driver_results);

        let total: i32 = race_points.values().sum();
        let final_points = (total - discarded_points).max(0);

        EventScore {
            event_id: event.id.to_owned(),
            race_points,
            discarded_points,
            final_points,
        }
    }

    /// the empty breakdown, used when the driver never entered the event.
    pub fn none(event_id: &str) -> EventScore {
        EventScore {
            event_id: event_id.to_string(),
            race_points: HashMap::new(),
            discarded_points: 0,
            final_points: 0,
        }
    }

    fn discarded_points(
        driver: &Driver,
        race_points: &HashMap<String, i32>,
        driver_results: &[(String, &RaceResult)],
    ) -> i32 {
        // manual override first: a flagged result is the discard even when
        // it is not the minimum
        let manually_dropped = driver_results
            .iter()
            .find(|(_, result)| result.is_dropped);

        if let Some((race_id, _)) = manually_dropped {
            let dropped = *race_points.get(race_id).unwrap_or(&0);
            debug!(target:"models/standings:discarded_points",
                "{}: manual drop of {} points (session {})", driver.name, dropped, race_id);
            return dropped;
        }

        if race_points.len() > 1 {
            let dropped = *race_points.values().min().unwrap_or(&0);
            debug!(target:"models/standings:discarded_points",
                "{}: auto drop of worst result, {} points", driver.name, dropped);
            return dropped;
        }

        0
    }
}

/// # Driver standing
/// a driver's place in the championship: total points and one event
/// breakdown per event, in championship order.
#[derive(Serialize, PartialEq, Debug, Clone, Deserialize)]
pub struct DriverStanding {
    pub driver: Driver,
    #[serde(rename = "totalPoints")]
    pub total_points: i32,
    #[serde(rename = "raceResults")]
    pub race_results: Vec<EventScore>,
}

impl DriverStanding {
    /// # championship standings
    /// discover every driver that appears in any session of any event,
    /// score every (driver, event) pair, and rank by total points
    /// descending with ties broken by driver name ascending.
    ///
    /// a championship without events or results gives an empty list.
    ///
    /// ## Arguments
    /// * `championship` - the snapshot to rank
    ///
    /// ## Returns
    /// * `Vec<DriverStanding>` - the sorted standings
    pub fn calculate_all(championship: &Championship) -> Vec<DriverStanding> {
        let mut standings: Vec<DriverStanding> = Driver::discover_all(championship)
            .into_iter()
            .map(|(driver_id, driver)| {
                let race_results: Vec<EventScore> = championship
                    .events
                    .iter()
                    .map(|event| EventScore::calculate(event, &driver_id))
                    .collect();

                let total_points = race_results.iter().map(|score| score.final_points).sum();

                DriverStanding {
                    driver,
                    total_points,
                    race_results,
                }
            })
            .collect();

        standings.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.driver.name.cmp(&b.driver.name))
        });

        standings
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::HashMap;

    use super::*;
    use crate::modules::models::championship::SessionResults;

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

    fn session(entries: Vec<RaceResult>) -> SessionResults {
        entries
            .into_iter()
            .map(|result| (result.id.clone(), result))
            .collect()
    }

    fn event(id: &str, races: Vec<(&str, SessionResults)>) -> Event {
        Event {
            id: id.to_string(),
            name: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
            races: races
                .into_iter()
                .map(|(race_id, results)| (race_id.to_string(), results))
                .collect(),
            race1_results: None,
            race2_results: None,
        }
    }

    #[test]
    fn two_sessions_keep_the_better_result() {
        // p3 = 15 + 5 participation = 20, p6 = 9 + 5 = 14
        let event = event(
            "gp-monza",
            vec![
                ("race1", session(vec![result("rossi", "Marco Rossi", 3)])),
                ("race2", session(vec![result("rossi", "Marco Rossi", 6)])),
            ],
        );

        let score = EventScore::calculate(&event, "rossi");
        assert_eq!(score.race_points["race1"], 20);
        assert_eq!(score.race_points["race2"], 14);
        assert_eq!(score.discarded_points, 14);
        assert_eq!(score.final_points, 20);
    }

    #[test]
    fn single_session_event_discards_nothing() {
        let event = event(
            "gp-monza",
            vec![("race1", session(vec![result("rossi", "Marco Rossi", 1)]))],
        );

        let score = EventScore::calculate(&event, "rossi");
        assert_eq!(score.discarded_points, 0);
        assert_eq!(score.final_points, 25);
    }

    #[test]
    fn skipped_session_counts_as_the_worst_result() {
        let event = event(
            "gp-monza",
            vec![
                ("race1", session(vec![result("rossi", "Marco Rossi", 1)])),
                ("race2", session(vec![])),
            ],
        );

        let score = EventScore::calculate(&event, "rossi");
        assert_eq!(score.race_points.len(), 2);
        assert_eq!(score.race_points["race2"], 0);
        assert_eq!(score.discarded_points, 0);
        assert_eq!(score.final_points, 25);
    }

    #[test]
    fn manual_drop_overrides_the_automatic_minimum() {
        // race1: p9 + pole = 3 + 5 + 2 = 10, race2: p3 = 15 + 5 = 20
        let mut better = result("rossi", "Marco Rossi", 3);
        better.is_dropped = true;
        let mut worse = result("rossi", "Marco Rossi", 9);
        worse.pole_position = true;

        let event = event(
            "gp-monza",
            vec![
                ("race1", session(vec![worse])),
                ("race2", session(vec![better])),
            ],
        );

        let score = EventScore::calculate(&event, "rossi");
        assert_eq!(score.race_points["race1"], 10);
        assert_eq!(score.race_points["race2"], 20);
        assert_eq!(score.discarded_points, 20);
        assert_eq!(score.final_points, 10);
    }

    #[test]
    fn absent_driver_gets_the_empty_breakdown() {
        let event = event(
            "gp-monza",
            vec![("race1", session(vec![result("rossi", "Marco Rossi", 1)]))],
        );

        let score = EventScore::calculate(&event, "ferrari");
        assert!(score.race_points.is_empty());
        assert_eq!(score.discarded_points, 0);
        assert_eq!(score.final_points, 0);
    }

    #[test]
    fn standings_rank_by_points_then_name() {
        // rossi wins (p1), ferrari and bianchi tie on p2/p3 + bonus setups
        let championship = Championship {
            events: vec![event(
                "gp-monza",
                vec![(
                    "race1",
                    session(vec![
                        result("rossi", "Marco Rossi", 1),
                        result("ferrari", "Luca Ferrari", 4),
                        result("bianchi", "Alessandro Bianchi", 4),
                    ]),
                )],
            )],
            ..Championship::empty()
        };

        let standings = DriverStanding::calculate_all(&championship);
        assert_eq!(standings.len(), 3);
        assert_eq!(standings[0].driver.name, "Marco Rossi");
        // equal points: ascending name order
        assert_eq!(standings[1].driver.name, "Alessandro Bianchi");
        assert_eq!(standings[2].driver.name, "Luca Ferrari");
    }

    #[test]
    fn standings_cover_events_the_driver_skipped() {
        let championship = Championship {
            events: vec![
                event(
                    "gp-monza",
                    vec![("race1", session(vec![result("rossi", "Marco Rossi", 1)]))],
                ),
                event(
                    "gp-imola",
                    vec![("race1", session(vec![result("ferrari", "Luca Ferrari", 1)]))],
                ),
            ],
            ..Championship::empty()
        };

        let standings = DriverStanding::calculate_all(&championship);
        let rossi = standings
            .iter()
            .find(|standing| standing.driver.id == "rossi")
            .unwrap();

        assert_eq!(rossi.race_results.len(), 2);
        assert_eq!(rossi.race_results[0].event_id, "gp-monza");
        assert_eq!(rossi.race_results[1].event_id, "gp-imola");
        assert_eq!(rossi.race_results[1].final_points, 0);
        assert_eq!(rossi.total_points, 25);
    }

    #[test]
    fn empty_championship_gives_empty_standings() {
        assert!(DriverStanding::calculate_all(&Championship::empty()).is_empty());
    }
}
