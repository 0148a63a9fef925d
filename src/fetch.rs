use reqwest::blocking::Client;
use std::{thread, time::Duration};

use crate::error::{WanderError, WanderResult};

const INITIAL_DELAY: u64 = 300;
const REQUEST_TIMEOUT: u64 = 30;

pub fn client(user_agent: &str) -> WanderResult<Client> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT))
        .build()?;
    Ok(client)
}

fn retry<F, T>(mut operation: F, max_attempts: usize, initial_delay: u64) -> WanderResult<T>
where
    F: FnMut() -> WanderResult<T>,
{
    let mut delay = initial_delay;

    for attempt in 0..max_attempts {
        match operation() {
            Ok(result) => return Ok(result),
            Err(_) if attempt + 1 < max_attempts => {
                thread::sleep(Duration::from_millis(delay));
                delay *= 2;
            }
            Err(err) => return Err(err),
        }
    }

    Err(WanderError::Fetch("Max retry attempts exhausted".into()))
}

pub fn get_with_retry(client: &Client, url: &str, max_attempts: usize) -> WanderResult<String> {
    retry(
        || {
            let response = client.get(url).send()?;
            let status = response.status();

            if !status.is_success() {
                return Err(WanderError::Fetch(format!(
                    "HTTP {} while fetching {}",
                    status, url
                )));
            }

            Ok(response.text()?)
        },
        max_attempts,
        INITIAL_DELAY,
    )
}
