use clap::Parser;

use flight_search::cli::{self, Args};
use flight_search::db::FlightDb;
use flight_search::interactive;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let db_path = cli::resolve_db_path(args.db);
    let db = FlightDb::open(&db_path)?;

    match args.command {
        Some(command) => {
            let output = command.run(&db, args.format)?;
            println!("{output}");
        }
        None => interactive::run(&db)?,
    }

    Ok(())
}
