use log::error;

use rocket::get;
use rocket::http::uri::Origin;
use rocket::http::Status;

use crate::macros::request_caching::{cache_response, read_cache_request};
use crate::modules::models::championship::Championship;
use crate::modules::models::statistics::ChampionshipStatistics;
use crate::modules::redis::Redis;
use crate::modules::repository::ChampionshipRepository;

/// statistics change with every write but are cheap to serve slightly
/// stale, so the cached response expires on its own.
const STATISTICS_CACHE_SECONDS: usize = 300;

/// # get championship statistics
#[get("/statistics")]
pub fn get_one(origin: &Origin) -> Result<ChampionshipStatistics, Status> {
    read_cache_request!(origin);

    let r_conn = &mut match Redis::connect() {
        Ok(conn) => conn,
        Err(error) => {
            error!(target:"routes/api/statistics:get_one", "store unavailable: {}", error);
            return Err(Status::ServiceUnavailable);
        }
    };

    let championship = match ChampionshipRepository::load(r_conn) {
        Ok(Some(championship)) => championship,
        Ok(None) => Championship::empty(),
        Err(error) => {
            error!(target:"routes/api/statistics:get_one", "could not load championship: {}", error);
            return Err(Status::InternalServerError);
        }
    };

    cache_response!(
        origin,
        ChampionshipStatistics::calculate(&championship),
        STATISTICS_CACHE_SECONDS
    );
}
