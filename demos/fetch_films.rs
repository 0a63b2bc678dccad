// demos/fetch_films.rs
use filmhub::{FilmSource, SwapiClient, DEFAULT_FILMS_URL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SwapiClient::new(DEFAULT_FILMS_URL)?;
    let films = client.list_films().await?;
    println!("Found {} films", films.len());
    for film in films {
        println!("{} ({})", film.heading(), film.release_date);
    }
    Ok(())
}
