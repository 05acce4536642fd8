use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::modules::models::championship::{Championship, RaceResult};

/// The one driver the participation bonus is withheld from.
const EXCLUDED_DRIVER: &str = "max verstappen";

#[derive(Serialize, PartialEq, Debug, Clone, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    #[serde(rename = "isMaxVerstappen", default)]
    pub is_max_verstappen: bool,
}

impl Driver {
    /// # driver from a race result
    /// drivers are not stored as their own collection; their identity is
    /// rebuilt from the first result record found. the excluded-driver
    /// flag is derived from the name, never read from storage.
    pub fn from_result(result: &RaceResult) -> Driver {
        Driver {
            id: result.id.clone(),
            name: result.name.clone(),
            is_max_verstappen: is_excluded_driver(&result.name),
        }
    }

    /// # discover all drivers
    /// scan every session of every event (both storage layouts) and
    /// collect the distinct driver ids. the first result seen for an id
    /// decides the display name; results with an empty id or name are
    /// skipped.
    ///
    /// ## Arguments
    /// * `championship` - the snapshot to scan
    ///
    /// ## Returns
    /// * `BTreeMap<String, Driver>` - discovered drivers keyed by id
    pub fn discover_all(championship: &Championship) -> BTreeMap<String, Driver> {
        let mut drivers: BTreeMap<String, Driver> = BTreeMap::new();

        for event in &championship.events {
            for (_race_id, results) in event.collect_sessions() {
                for result in results.values() {
                    if result.id.is_empty() || result.name.is_empty() {
                        continue;
                    }
                    if !drivers.contains_key(&result.id) {
                        drivers.insert(result.id.clone(), Driver::from_result(result));
                    }
                }
            }
        }

        drivers
    }
}

/// case-insensitive check against the excluded driver's name.
pub fn is_excluded_driver(name: &str) -> bool {
    name.to_lowercase().contains(EXCLUDED_DRIVER)
}

/// strip everything that is not alphanumeric, space, dash or underscore.
/// ids arriving through route parameters go through this before use.
pub fn sanitize_name(name: &str) -> String {
    let re = Regex::new(r"[^a-zA-Z0-9 \-_]").unwrap();
    re.replace_all(name, "").to_string()
}
