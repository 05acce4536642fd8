/// drop every cached api response after the snapshot changed. cache
/// trouble only costs a recompute on the next request, so failures are
/// logged and swallowed.
macro_rules! clear_api_cache {
    () => {
        match &mut Redis::connect() {
            Ok(r_conn) => {
                for key in ["/api/championship", "/api/standings", "/api/statistics"] {
                    if let Err(error) = Redis::invalidate::<String>(r_conn, key.to_string()) {
                        warn!(target:"macros/redis:clear_api_cache", "could not invalidate {}: {}", key, error);
                    }
                }
            }
            Err(error) => {
                warn!(target:"macros/redis:clear_api_cache", "could not connect to redis: {}", error);
            }
        }
    };
}

pub(crate) use clear_api_cache;
