pub mod redis;
pub mod repository;

pub mod models {
    pub mod championship;
    pub mod driver;
    pub mod standings;
    pub mod statistics;
}

pub mod helpers {
    pub mod logging;
    pub mod points;

    pub mod fairings {
        pub mod cors;
    }
}
