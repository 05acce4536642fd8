use dotenvy::dotenv;
use redis::{Client, Commands, Connection, FromRedisValue, RedisResult, ToRedisArgs};
use snafu::ResultExt;
use std::env;

use crate::errors::{CustomResult, RedisConnectionSnafu};

pub struct Redis {}

impl Redis {
    /// open a fresh connection to the store configured by `REDIS_URL`.
    pub fn connect() -> CustomResult<Connection> {
        dotenv().ok();

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());

        let client = Client::open(redis_url).context(RedisConnectionSnafu)?;
        client.get_connection().context(RedisConnectionSnafu)
    }

    pub fn set_data<K: ToRedisArgs, D: ToRedisArgs + FromRedisValue>(
        conn: &mut Connection,
        key: K,
        data: D,
    ) -> RedisResult<D> {
        conn.set::<K, D, D>(key, data)
    }

    /// set a value that expires on its own after `seconds`.
    pub fn set_data_ex<K: ToRedisArgs, D: ToRedisArgs + FromRedisValue>(
        conn: &mut Connection,
        key: K,
        data: D,
        seconds: usize,
    ) -> RedisResult<D> {
        conn.set_ex::<K, D, D>(key, data, seconds)
    }

    pub fn get_data<K: ToRedisArgs, D: FromRedisValue>(
        conn: &mut Connection,
        key: K,
    ) -> RedisResult<D> {
        conn.get::<K, D>(key)
    }

    pub fn invalidate<K: ToRedisArgs + FromRedisValue>(
        conn: &mut Connection,
        key: K,
    ) -> RedisResult<K> {
        conn.expire::<K, K>(key, 0)
    }

    pub fn has_data<K: ToRedisArgs>(conn: &mut Connection, key: K) -> RedisResult<bool> {
        conn.exists(key)
    }

    pub fn keys<K: ToRedisArgs>(conn: &mut Connection, partial: K) -> RedisResult<Vec<String>> {
        conn.keys(partial)
    }
}
