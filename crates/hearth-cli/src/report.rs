//! Text rendering of an enrichment run's terminal state.

use hearth_core::types::LocationQuery;
use hearth_enrich::RunState;

/// Parses one watch-mode input line of the form `city, postal code`.
pub fn parse_query_line(line: &str) -> Option<LocationQuery> {
    let (city, postal_code) = line.split_once(',')?;
    let query = LocationQuery::new(city.trim(), postal_code.trim());
    query.is_valid().then_some(query)
}

/// Prints a human-readable report for a terminal run state.
pub fn print_state(state: &RunState, radius_m: u32) {
    match state {
        RunState::Ready(result) => {
            println!("Area Information:");
            println!("  Neighborhood: {}", result.metadata.neighborhood);
            println!("  City:         {}", result.metadata.city);
            println!("  County:       {}", result.metadata.county);
            println!("  State:        {}", result.metadata.state);

            for entry in &result.results {
                println!();
                if entry.places.is_empty() {
                    println!(
                        "No {} found within {radius_m}m",
                        entry.category.label.to_lowercase()
                    );
                } else {
                    println!("Nearby {}:", entry.category.label);
                    for place in &entry.places {
                        match &place.address {
                            Some(address) => println!("  - {} ({address})", place.name),
                            None => println!("  - {}", place.name),
                        }
                    }
                }
            }
        }
        RunState::Error(message) => println!("Error: {message}"),
        RunState::Idle => println!("Nothing to enrich yet."),
        RunState::Loading => println!("Still loading..."),
    }
}
