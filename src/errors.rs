use snafu::Snafu;

pub type CustomResult<T> = Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("could not connect to redis: {}", source))]
    RedisConnectionError { source: redis::RedisError },

    #[snafu(display("redis command failed: {}", source))]
    RedisCommandError { source: redis::RedisError },

    #[snafu(display("could not (de)serialize championship data: {}", source))]
    SerializationError { source: serde_json::Error },
}
