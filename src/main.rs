use std::io::Write as _;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_booking::{
    config::Config,
    models::{Movie, Theater},
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting movie booking catalog");

    let state = AppState::new(config);
    seed_sample_data(&state).await;
    info!("Sample catalog loaded");

    run_menu(state).await
}

// Стартовые данные как в демо: 4 фильма, 7 залов
async fn seed_sample_data(state: &Arc<AppState>) {
    for id in 1..=4u32 {
        state
            .catalog
            .add_movie(Movie::new(id, format!("Movie{:02}", id)))
            .await;
    }

    let seat_capacity = state.config.catalog.seat_capacity;
    for id in 1..=7u32 {
        state
            .catalog
            .add_theater(Theater::new(id, format!("Theater{:02}", id), seat_capacity))
            .await;
    }
}

async fn run_menu(state: Arc<AppState>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut selected_movie: Option<u32> = None;
    let mut selected_theater: Option<u32> = None;

    loop {
        println!();
        println!("==== Movie Booking System ====");
        println!("1. View all movies");
        println!("2. Select a movie");
        println!("3. See theaters showing the selected movie");
        println!("4. Select a theater for the movie you have selected");
        println!("5. See available seats for the selected theater");
        println!("6. Book seats");
        println!("7. Dump catalog as JSON");
        println!("8. Exit");
        println!("=============================");

        let Some(choice) = prompt(&mut lines, "Enter your choice: ").await? else {
            break;
        };

        match choice.trim() {
            "1" => {
                println!("Available movies:");
                for movie_id in state.catalog.all_movies().await {
                    match state.catalog.movie_name(movie_id).await {
                        Ok(name) => println!("  {} - {}", movie_id, name),
                        Err(e) => println!("  {} - <{}>", movie_id, e),
                    }
                }
            }
            "2" => {
                let Some(input) = prompt(&mut lines, "Enter the movie ID: ").await? else {
                    break;
                };
                match input.trim().parse::<u32>() {
                    Ok(id) if state.catalog.is_valid_movie(id).await => {
                        selected_movie = Some(id);
                        selected_theater = None;
                        println!(
                            "Selected movie: {}",
                            state.catalog.movie_name(id).await?
                        );
                    }
                    _ => println!("Invalid movie ID."),
                }
            }
            "3" => match selected_movie {
                Some(movie_id) => {
                    let theaters = state.catalog.theaters_for_movie(movie_id).await?;
                    if theaters.is_empty() {
                        println!("No theaters are showing this movie yet.");
                    }
                    for theater_id in theaters {
                        println!(
                            "  {} - {}",
                            theater_id,
                            state.catalog.theater_name(theater_id).await?
                        );
                    }
                }
                None => println!("Select a movie first."),
            },
            "4" => {
                let Some(movie_id) = selected_movie else {
                    println!("Select a movie first.");
                    continue;
                };
                let Some(input) = prompt(&mut lines, "Enter the theater ID: ").await? else {
                    break;
                };
                match input.trim().parse::<u32>() {
                    Ok(id) if state.catalog.is_movie_shown_in_theater(id, movie_id).await => {
                        selected_theater = Some(id);
                        println!(
                            "Selected theater: {}",
                            state.catalog.theater_name(id).await?
                        );
                    }
                    _ => println!("This theater does not show the selected movie."),
                }
            }
            "5" => match selected_theater {
                Some(theater_id) => {
                    let seats = state.catalog.available_seats(theater_id).await;
                    println!("Available seats: {:?}", seats);
                }
                None => println!("Select a theater first."),
            },
            "6" => {
                let Some(theater_id) = selected_theater else {
                    println!("Select a theater first.");
                    continue;
                };
                let Some(input) =
                    prompt(&mut lines, "Enter seat IDs (space separated): ").await?
                else {
                    break;
                };
                let seat_ids: Vec<u32> = input
                    .split_whitespace()
                    .filter_map(|s| s.parse().ok())
                    .collect();
                if state.catalog.book_seats(theater_id, &seat_ids).await {
                    println!("Seats booked successfully.");
                } else {
                    println!("Booking failed: some seats are taken or do not exist.");
                }
            }
            "7" => {
                let snapshot = state.catalog.snapshot().await;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            "8" => break,
            other => println!("Unknown choice: {}", other),
        }
    }

    info!("Shutting down");
    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}
