use book_queries::queries::Library;
use book_queries::report;
use book_queries::runtime::{setup_tracing, Config};
use tracing::{error, info, info_span};

fn main() -> Result<(), book_queries::catalog::CatalogError> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting book queries");

    let library = Library::load(&config.books_path).inspect_err(|e| {
        error!(error = %e, "Could not load the catalog");
    })?;

    let span = info_span!("listings");
    let _guard = span.enter();

    let summaries = library.basic_information(config.demo_count);
    print!("{}", report::render_books(&summaries));
    println!();

    print!(
        "{}",
        report::render_animals(library.green_animals_starting_with_vowel())
    );
    println!();

    print!("{}", report::render_color_groups(&library.animals_by_color()));

    info!(books = library.books().len(), "Done");
    Ok(())
}
