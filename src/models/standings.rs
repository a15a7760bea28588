// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! League standings data structures.
//!
//! The backend serves two differently-cased schemas for the same
//! logical fields (scraped vs. normalized), so every numeric field
//! carries an alias. A baked-in demo table stands in whenever the
//! backend is unreachable.

use serde::Deserialize;

/// A selectable league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    pub id: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub static LEAGUES: [League; 5] = [
    League { id: "super_lig", name: "Süper Lig", flag: "🇹🇷" },
    League { id: "champions_league", name: "Şampiyonlar Ligi", flag: "🏆" },
    League { id: "europa_league", name: "Avrupa Ligi", flag: "🏆" },
    League { id: "premier_league", name: "Premier League", flag: "🏴" },
    League { id: "la_liga", name: "La Liga", flag: "🇪🇸" },
];

/// Match outcome in a team's recent-form strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResult {
    Win,
    Draw,
    Loss,
}

/// One row of a league table.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStanding {
    pub position: u32,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub form: Vec<FormResult>,
}

/// Wire envelope of `GET /standings/{leagueId}`.
#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<RawStanding>,
}

/// One row as served by the backend, accepting both schemas.
#[derive(Debug, Deserialize)]
pub struct RawStanding {
    #[serde(default, alias = "Squad")]
    pub team: Option<String>,
    #[serde(default, alias = "MP")]
    pub played: Option<u32>,
    #[serde(default, alias = "W")]
    pub won: Option<u32>,
    #[serde(default, alias = "D")]
    pub drawn: Option<u32>,
    #[serde(default, alias = "L")]
    pub lost: Option<u32>,
    #[serde(default, alias = "GF", alias = "goalsFor")]
    pub goals_for: Option<u32>,
    #[serde(default, alias = "GA", alias = "goalsAgainst")]
    pub goals_against: Option<u32>,
    #[serde(default, alias = "GD", alias = "goalDifference")]
    pub goal_difference: Option<i32>,
    #[serde(default, alias = "Pts")]
    pub points: Option<u32>,
}

impl RawStanding {
    /// Normalize a wire row; positions are assigned from response order.
    pub fn into_standing(self, position: u32) -> TeamStanding {
        TeamStanding {
            position,
            team: self.team.unwrap_or_else(|| "Bilinmiyor".to_string()),
            played: self.played.unwrap_or(0),
            won: self.won.unwrap_or(0),
            drawn: self.drawn.unwrap_or(0),
            lost: self.lost.unwrap_or(0),
            goals_for: self.goals_for.unwrap_or(0),
            goals_against: self.goals_against.unwrap_or(0),
            goal_difference: self.goal_difference.unwrap_or(0),
            points: self.points.unwrap_or(0),
            form: Vec::new(),
        }
    }
}

/// Demo table shown when the backend is absent.
pub fn demo_standings() -> Vec<TeamStanding> {
    use FormResult::{Draw as D, Loss as L, Win as W};

    let row = |position: u32,
               team: &str,
               won: u32,
               drawn: u32,
               lost: u32,
               goals_for: u32,
               goals_against: u32,
               points: u32,
               form: [FormResult; 5]| TeamStanding {
        position,
        team: team.to_string(),
        played: 20,
        won,
        drawn,
        lost,
        goals_for,
        goals_against,
        goal_difference: goals_for as i32 - goals_against as i32,
        points,
        form: form.to_vec(),
    };

    vec![
        row(1, "Galatasaray", 15, 3, 2, 45, 15, 48, [W, W, D, W, W]),
        row(2, "Fenerbahçe", 14, 4, 2, 42, 14, 46, [W, D, W, W, D]),
        row(3, "Beşiktaş", 11, 5, 4, 35, 20, 38, [L, W, W, D, W]),
        row(4, "Trabzonspor", 10, 5, 5, 30, 22, 35, [W, L, D, W, L]),
        row(5, "Başakşehir", 9, 6, 5, 28, 20, 33, [D, W, W, L, D]),
        row(6, "Antalyaspor", 8, 7, 5, 25, 22, 31, [W, D, D, L, W]),
        row(7, "Konyaspor", 8, 5, 7, 24, 25, 29, [L, W, D, W, L]),
        row(8, "Alanyaspor", 7, 7, 6, 26, 24, 28, [D, D, W, L, W]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_normalized_schema() {
        let json = r#"{"standings": [
            {"team": "Galatasaray", "played": 20, "won": 15, "drawn": 3,
             "lost": 2, "goalsFor": 45, "goalsAgainst": 15,
             "goalDifference": 30, "points": 48}
        ]}"#;
        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        let standing = response.standings.into_iter().next().unwrap().into_standing(1);

        assert_eq!(standing.team, "Galatasaray");
        assert_eq!(standing.played, 20);
        assert_eq!(standing.goal_difference, 30);
        assert_eq!(standing.points, 48);
    }

    #[test]
    fn test_parses_scraped_schema() {
        let json = r#"{"standings": [
            {"Squad": "Fenerbahçe", "MP": 20, "W": 14, "D": 4, "L": 2,
             "GF": 42, "GA": 14, "GD": 28, "Pts": 46}
        ]}"#;
        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        let standing = response.standings.into_iter().next().unwrap().into_standing(2);

        assert_eq!(standing.team, "Fenerbahçe");
        assert_eq!(standing.position, 2);
        assert_eq!(standing.won, 14);
        assert_eq!(standing.goals_against, 14);
        assert_eq!(standing.points, 46);
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"standings": [{}]}"#;
        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        let standing = response.standings.into_iter().next().unwrap().into_standing(1);

        assert_eq!(standing.team, "Bilinmiyor");
        assert_eq!(standing.points, 0);
        assert!(standing.form.is_empty());
    }

    #[test]
    fn test_empty_envelope() {
        let response: StandingsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.standings.is_empty());
    }

    #[test]
    fn test_demo_standings_shape() {
        let demo = demo_standings();
        assert_eq!(demo.len(), 8);
        assert_eq!(demo[0].team, "Galatasaray");
        assert_eq!(demo[0].goal_difference, 30);
        for (i, row) in demo.iter().enumerate() {
            assert_eq!(row.position, i as u32 + 1);
            assert_eq!(row.played, row.won + row.drawn + row.lost);
            assert_eq!(row.form.len(), 5);
        }
    }
}
