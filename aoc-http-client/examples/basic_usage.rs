//! Download one puzzle input with a patient and an impatient client.
//!
//! Needs a session cookie in `AOC_SESSION`.

use aoc_http_client::{AocClient, AocError, RetryPolicy};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION")?;
    let (year, day) = (2022, 1);

    let impatient = AocClient::builder()
        .retry_policy(RetryPolicy::no_retry())
        .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(10)))
        .build()?;
    println!("{}", impatient.input_url(year, day)?);

    match impatient.fetch_input(year, day, &session) {
        Ok(input) => println!("got {} bytes on the first try", input.len()),
        Err(AocError::RetriesExhausted { last, .. }) => {
            println!("first try failed ({}), retrying with the default policy", last);
            let patient = AocClient::new()?;
            let policy = patient.retry_policy();
            println!("{} attempts, {:?} apart", policy.attempts, policy.backoff);
            let input = patient.fetch_input(year, day, &session)?;
            println!("got {} bytes", input.len());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
