use rocket::{launch, routes, Build, Rocket};

use campionato_kart_standings::modules::helpers::fairings::cors::CORS;
use campionato_kart_standings::modules::helpers::logging::setup_logging;
use campionato_kart_standings::routes::api;

#[launch]
fn rocket() -> Rocket<Build> {
    setup_logging().expect("Failed to setup logging");

    // start the webserver
    rocket::build().attach(CORS).mount(
        "/api",
        routes![
            // championship
            api::championship::get_one,
            api::championship::save_one,
            // standings
            api::standings::get_all,
            api::standings::toggle_drop,
            // statistics
            api::statistics::get_one,
        ],
    )
}
