use chrono::Utc;
use log::{error, info, warn};

use rocket::http::uri::Origin;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, put};

use crate::macros::redis::clear_api_cache;
use crate::macros::request_caching::{cache_response, read_cache_request};
use crate::modules::models::championship::Championship;
use crate::modules::redis::Redis;
use crate::modules::repository::ChampionshipRepository;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

/// # get the current championship
/// the read path never 404s: when nothing is stored yet a fresh empty
/// championship for the season is returned instead.
#[get("/championship")]
pub fn get_one(origin: &Origin) -> Result<Championship, Status> {
    read_cache_request!(origin);

    let r_conn = &mut match Redis::connect() {
        Ok(conn) => conn,
        Err(error) => {
            error!(target:"routes/api/championship:get_one", "store unavailable: {}", error);
            return Err(Status::ServiceUnavailable);
        }
    };

    let championship = match ChampionshipRepository::load(r_conn) {
        Ok(Some(championship)) => championship,
        Ok(None) => {
            info!(target:"routes/api/championship:get_one", "no championship stored, serving an empty one");
            Championship::empty()
        }
        Err(error) => {
            error!(target:"routes/api/championship:get_one", "could not load championship: {}", error);
            return Err(Status::InternalServerError);
        }
    };

    cache_response!(origin, championship);
}

/// # replace the stored championship
/// stamps `updatedAt`, writes a timestamped backup snapshot, then
/// replaces the main key and drops every cached api response.
#[put("/championship", data = "<championship>")]
pub fn save_one(championship: Json<Championship>) -> Result<Championship, Status> {
    let r_conn = &mut match Redis::connect() {
        Ok(conn) => conn,
        Err(error) => {
            error!(target:"routes/api/championship:save_one", "store unavailable: {}", error);
            return Err(Status::ServiceUnavailable);
        }
    };

    let mut updated = championship.into_inner();
    updated.updated_at = Utc::now();

    let backup_key = ChampionshipRepository::backup_key(updated.updated_at);
    if let Err(error) = ChampionshipRepository::backup(r_conn, &backup_key, &updated) {
        error!(target:"routes/api/championship:save_one", "backup failed: {}", error);
        return Err(Status::InternalServerError);
    }

    if let Err(error) = ChampionshipRepository::save(r_conn, &updated) {
        error!(target:"routes/api/championship:save_one", "save failed: {}", error);
        return Err(Status::InternalServerError);
    }

    clear_api_cache!();

    Ok(updated)
}
