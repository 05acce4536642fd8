use chrono::{DateTime, Utc};
use log::info;
use redis::Connection;
use snafu::ResultExt;

use crate::errors::{CustomResult, RedisCommandSnafu, SerializationSnafu};
use crate::modules::models::championship::Championship;
use crate::modules::redis::Redis;

/// Key the current snapshot lives under.
pub const CHAMPIONSHIP_KEY: &str = "kart:championship:main";
/// Prefix for backup snapshots written before every save.
pub const BACKUP_KEY_PREFIX: &str = "kart:championship:backup";

/// # Championship repository
/// the one place the snapshot crosses into storage. the whole
/// championship is kept as a single JSON document; the engine never sees
/// this module, it only ever receives the loaded value.
pub struct ChampionshipRepository {}

impl ChampionshipRepository {
    /// # load the stored championship
    ///
    /// ## Returns
    /// * `Option<Championship>` - `None` when nothing has been stored yet
    pub fn load(conn: &mut Connection) -> CustomResult<Option<Championship>> {
        if !Redis::has_data::<&str>(conn, CHAMPIONSHIP_KEY).context(RedisCommandSnafu)? {
            return Ok(None);
        }

        let json =
            Redis::get_data::<&str, String>(conn, CHAMPIONSHIP_KEY).context(RedisCommandSnafu)?;
        let championship = serde_json::from_str(&json).context(SerializationSnafu)?;

        Ok(Some(championship))
    }

    /// # save the championship
    /// replaces the stored snapshot wholesale.
    pub fn save(conn: &mut Connection, championship: &Championship) -> CustomResult<()> {
        let json = serde_json::to_string(championship).context(SerializationSnafu)?;
        Redis::set_data::<&str, String>(conn, CHAMPIONSHIP_KEY, json)
            .context(RedisCommandSnafu)?;

        info!(target:"modules/repository:save", "championship {} saved", championship.id);
        Ok(())
    }

    /// # write a backup snapshot
    /// stores the championship under an extra key, leaving the main key
    /// alone. callers pick the key, normally via `backup_key`.
    pub fn backup(
        conn: &mut Connection,
        key: &str,
        championship: &Championship,
    ) -> CustomResult<()> {
        let json = serde_json::to_string(championship).context(SerializationSnafu)?;
        Redis::set_data::<&str, String>(conn, key, json).context(RedisCommandSnafu)?;

        info!(target:"modules/repository:backup", "championship {} backed up under {}", championship.id, key);
        Ok(())
    }

    /// backup key for a point in time.
    pub fn backup_key(at: DateTime<Utc>) -> String {
        format!("{}:{}", BACKUP_KEY_PREFIX, at.timestamp())
    }
}
