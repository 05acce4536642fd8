use log::{error, warn};

use rocket::http::uri::Origin;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, post};

use rocket::http::ContentType;
use rocket::response;
use rocket::response::Responder;
use rocket::response::Response;
use rocket::Request;

use json_response_derive::JsonResponse;
use serde::{Deserialize, Serialize};

use crate::macros::redis::clear_api_cache;
use crate::macros::request_caching::{cache_response, read_cache_request};
use crate::modules::models::championship::Championship;
use crate::modules::models::driver::sanitize_name;
use crate::modules::models::standings::DriverStanding;
use crate::modules::redis::Redis;
use crate::modules::repository::ChampionshipRepository;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

/// # get the championship standings
/// standings computed from the stored snapshot; a missing snapshot ranks
/// an empty championship, which gives an empty list.
#[get("/standings")]
pub fn get_all(origin: &Origin) -> Result<ApiStandings, Status> {
    read_cache_request!(origin);

    let r_conn = &mut match Redis::connect() {
        Ok(conn) => conn,
        Err(error) => {
            error!(target:"routes/api/standings:get_all", "store unavailable: {}", error);
            return Err(Status::ServiceUnavailable);
        }
    };

    let championship = match ChampionshipRepository::load(r_conn) {
        Ok(Some(championship)) => championship,
        Ok(None) => Championship::empty(),
        Err(error) => {
            error!(target:"routes/api/standings:get_all", "could not load championship: {}", error);
            return Err(Status::InternalServerError);
        }
    };

    cache_response!(origin, ApiStandings::new(&championship));
}

/// # toggle a manual discard
/// flips the discard override on one result and persists the outcome. a
/// toggle that names a missing event, session or result leaves the
/// snapshot as it was (and still answers with it).
#[post("/standings/toggle", data = "<toggle>")]
pub fn toggle_drop(toggle: Json<ToggleRequest>) -> Result<Championship, Status> {
    let toggle = toggle.into_inner();
    if sanitize_name(&toggle.driver_id) != toggle.driver_id
        || sanitize_name(&toggle.event_id) != toggle.event_id
        || sanitize_name(&toggle.race_id) != toggle.race_id
    {
        return Err(Status::BadRequest);
    }

    let r_conn = &mut match Redis::connect() {
        Ok(conn) => conn,
        Err(error) => {
            error!(target:"routes/api/standings:toggle_drop", "store unavailable: {}", error);
            return Err(Status::ServiceUnavailable);
        }
    };

    let championship = match ChampionshipRepository::load(r_conn) {
        Ok(Some(championship)) => championship,
        Ok(None) => return Err(Status::NotFound),
        Err(error) => {
            error!(target:"routes/api/standings:toggle_drop", "could not load championship: {}", error);
            return Err(Status::InternalServerError);
        }
    };

    let updated =
        championship.toggle_worst_result(&toggle.driver_id, &toggle.event_id, &toggle.race_id);

    if let Err(error) = ChampionshipRepository::save(r_conn, &updated) {
        error!(target:"routes/api/standings:toggle_drop", "save failed: {}", error);
        return Err(Status::InternalServerError);
    }

    clear_api_cache!();

    Ok(updated)
}

/**************************************************************************************************/
/**************** HELPERS *************************************************************************/
/**************************************************************************************************/

#[derive(Deserialize)]
pub struct ToggleRequest {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "raceId")]
    pub race_id: String,
}

/// # Struct representing a json response for the standings
#[derive(Serialize, Deserialize, JsonResponse)]
pub struct ApiStandings {
    #[serde(rename = "championshipId")]
    pub championship_id: String,
    pub season: String,
    pub standings: Vec<DriverStanding>,
}

impl ApiStandings {
    pub fn new(championship: &Championship) -> ApiStandings {
        ApiStandings {
            championship_id: championship.id.clone(),
            season: championship.season.clone(),
            standings: DriverStanding::calculate_all(championship),
        }
    }
}
