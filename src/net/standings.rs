// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Standings backend client.

use std::sync::mpsc::{channel, Receiver};

use crate::models::standings::{demo_standings, StandingsResponse, TeamStanding};

/// Fetch `GET {api_url}/standings/{league_id}` on a background thread.
/// The channel always yields a table; backend failures and empty
/// payloads fall back to the demo standings.
pub fn fetch_standings(api_url: String, league_id: String) -> Receiver<Vec<TeamStanding>> {
    let (sender, receiver) = channel();

    std::thread::spawn(move || {
        let standings = match request_standings(&api_url, &league_id) {
            Ok(standings) if !standings.is_empty() => standings,
            Ok(_) => {
                log::warn!("Empty standings for {}, using demo data", league_id);
                demo_standings()
            }
            Err(e) => {
                log::warn!("Standings backend unavailable, using demo data: {}", e);
                demo_standings()
            }
        };
        let _ = sender.send(standings);
    });

    receiver
}

fn request_standings(
    api_url: &str,
    league_id: &str,
) -> Result<Vec<TeamStanding>, reqwest::Error> {
    let response = reqwest::blocking::get(format!("{api_url}/standings/{league_id}"))?
        .error_for_status()?;
    let parsed: StandingsResponse = response.json()?;

    Ok(parsed
        .standings
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_standing(i as u32 + 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_backend_yields_demo_table() {
        let receiver = fetch_standings(
            "http://127.0.0.1:9".to_string(),
            "super_lig".to_string(),
        );
        let standings = receiver
            .recv_timeout(std::time::Duration::from_secs(30))
            .expect("fallback standings");
        assert_eq!(standings.len(), 8);
        assert_eq!(standings[0].team, "Galatasaray");
    }
}
