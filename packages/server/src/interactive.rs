//! Interactive mode for the server.
//!
//! Prompts for the dataset location, bind address and port before starting
//! the server.

use dialoguer::{Confirm, Input};
use trace_report_source::location::DataLocation;

use crate::AppState;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Serves `state`'s dataset, offering its location as the default answer.
/// Sets `BIND_ADDR` and `PORT` from the answers and hands over to
/// [`super::serve`]. The caller is expected to have installed a logger.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run(mut state: AppState) -> std::io::Result<()> {
    println!("Detention Report Server");
    println!();

    let source: String = Input::new()
        .with_prompt("Dataset location (URL or path)")
        .default(state.location.to_string())
        .interact_text()
        .unwrap_or_else(|_| state.location.to_string());
    state.location = location_answer(&source, &state.location);

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default("127.0.0.1".to_string())
        .interact_text()
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port_str: String = Input::new()
        .with_prompt("Port")
        .default("8080".to_string())
        .interact_text()
        .unwrap_or_else(|_| "8080".to_string());

    // SAFETY: nothing else reads or writes these variables concurrently;
    // they are read once by `serve` after this point.
    unsafe {
        std::env::set_var("BIND_ADDR", &bind_addr);
        std::env::set_var("PORT", &port_str);
    }

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port_str}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::serve(state).await
}

/// The location typed at the prompt; a blank answer keeps `current`.
fn location_answer(answer: &str, current: &DataLocation) -> DataLocation {
    if answer.trim().is_empty() {
        current.clone()
    } else {
        DataLocation::from(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answer_keeps_current_location() {
        let current = DataLocation::from("custom.csv");
        assert_eq!(location_answer("  ", &current), current);
    }

    #[test]
    fn answer_replaces_location() {
        let current = DataLocation::from("custom.csv");
        assert_eq!(
            location_answer("https://example.org/d.csv", &current),
            DataLocation::Url("https://example.org/d.csv".to_string())
        );
    }
}
