pub mod errors;

pub mod modules;

pub mod macros {
    pub mod redis;
    pub mod request_caching;
}

pub mod routes {
    pub mod api {
        pub mod championship;
        pub mod standings;
        pub mod statistics;
    }
}
