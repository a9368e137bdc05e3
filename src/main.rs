use chapter_quiz::{app_state::AppState, config::Config, handlers::console};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    println!("Loading quiz data...");
    let state = match AppState::new(config).await {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Failed to initialise the quiz: {}", err);
            std::process::exit(1);
        }
    };

    println!("Prepare Software Engineer Final Quiz");
    if let Err(err) = console::run(state).await {
        log::error!("Console stopped: {}", err);
        std::process::exit(1);
    }
}
