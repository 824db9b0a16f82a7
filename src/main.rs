use aion_frontend::{config, App};
use log::info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    #[cfg(debug_assertions)]
    if let Err((table, e)) = aion_frontend::motion::card::check_tables() {
        log::error!("card motion table {} is malformed: {}", table, e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
