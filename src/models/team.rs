// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static Süper Lig team reference data.
//!
//! Read-only table consulted by the editor (team badges, quick color
//! swatches) and the standings view (row tinting).

use crate::util::color::Color;

/// Primary/secondary brand colors of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamColors {
    pub primary: Color,
    pub secondary: Color,
}

/// A Süper Lig team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub colors: TeamColors,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color([r, g, b])
}

const fn team(
    id: &'static str,
    name: &'static str,
    short_name: &'static str,
    primary: Color,
    secondary: Color,
) -> Team {
    Team {
        id,
        name,
        short_name,
        colors: TeamColors { primary, secondary },
    }
}

pub static SUPER_LIG_TEAMS: [Team; 19] = [
    team("fenerbahce", "Fenerbahçe", "FB", rgb(0x00, 0x23, 0x5D), rgb(0xFF, 0xED, 0x00)),
    team("galatasaray", "Galatasaray", "GS", rgb(0xC8, 0x10, 0x2E), rgb(0xFD, 0xB9, 0x13)),
    team("besiktas", "Beşiktaş", "BJK", rgb(0x00, 0x00, 0x00), rgb(0xFF, 0xFF, 0xFF)),
    team("trabzonspor", "Trabzonspor", "TS", rgb(0x6B, 0x1D, 0x36), rgb(0x00, 0xAE, 0xEF)),
    team("basaksehir", "Başakşehir", "IBB", rgb(0xF3, 0x70, 0x21), rgb(0x1E, 0x3A, 0x5F)),
    team("antalyaspor", "Antalyaspor", "ANT", rgb(0xD0, 0x02, 0x1B), rgb(0xFF, 0xFF, 0xFF)),
    team("alanyaspor", "Alanyaspor", "ALN", rgb(0xF2, 0x65, 0x22), rgb(0x00, 0x68, 0x38)),
    team("konyaspor", "Konyaspor", "KON", rgb(0x00, 0x6B, 0x3F), rgb(0xFF, 0xFF, 0xFF)),
    team("sivasspor", "Sivasspor", "SVS", rgb(0xD9, 0x1A, 0x2A), rgb(0xFF, 0xFF, 0xFF)),
    team("kasimpasa", "Kasımpaşa", "KAS", rgb(0x1E, 0x3A, 0x8A), rgb(0xFF, 0xFF, 0xFF)),
    team("kayserispor", "Kayserispor", "KYS", rgb(0xFF, 0xD7, 0x00), rgb(0xD3, 0x2F, 0x2F)),
    team("ankaragucu", "Ankaragücü", "AG", rgb(0x1E, 0x3A, 0x5F), rgb(0xFF, 0xD7, 0x00)),
    team("samsunspor", "Samsunspor", "SAM", rgb(0xE0, 0x3A, 0x3E), rgb(0xFF, 0xFF, 0xFF)),
    team("rizespor", "Rizespor", "RZS", rgb(0x00, 0x68, 0xB3), rgb(0x5E, 0xAC, 0x24)),
    team("hatayspor", "Hatayspor", "HTY", rgb(0x8B, 0x00, 0x00), rgb(0xFF, 0xFF, 0xFF)),
    team("gaziantep", "Gaziantep FK", "GFK", rgb(0xD3, 0x2F, 0x2F), rgb(0x00, 0x00, 0x00)),
    team("adanademirspor", "Adana Demirspor", "ADS", rgb(0x15, 0x65, 0xC0), rgb(0xFF, 0x6F, 0x00)),
    team("pendikspor", "Pendikspor", "PEN", rgb(0x9C, 0x27, 0xB0), rgb(0xFF, 0xFF, 0xFF)),
    team("istanbulspor", "İstanbulspor", "IST", rgb(0xFF, 0xD7, 0x00), rgb(0x00, 0x00, 0x00)),
];

/// Look up a team by its identifier.
pub fn team_by_id(id: &str) -> Option<&'static Team> {
    SUPER_LIG_TEAMS.iter().find(|t| t.id == id)
}

/// Fuzzy lookup by display name (case-insensitive containment in either
/// direction), used to tint standings rows from API team names.
pub fn colors_for_name(name: &str) -> TeamColors {
    let needle = name.to_lowercase();
    SUPER_LIG_TEAMS
        .iter()
        .find(|t| {
            let team_name = t.name.to_lowercase();
            needle.contains(&team_name) || team_name.contains(&needle)
        })
        .map(|t| t.colors)
        .unwrap_or(TeamColors {
            primary: Color::INDIGO,
            secondary: Color::WHITE,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_ids_are_unique() {
        for (i, a) in SUPER_LIG_TEAMS.iter().enumerate() {
            for b in &SUPER_LIG_TEAMS[i + 1..] {
                assert!(a.id != b.id, "duplicate team id {}", a.id);
            }
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let team = team_by_id("fenerbahce").unwrap();
        assert_eq!(team.short_name, "FB");
        assert_eq!(team.colors.primary.to_hex(), "#00235D");
        assert!(team_by_id("real_madrid").is_none());
    }

    #[test]
    fn test_fuzzy_name_lookup() {
        // API names may carry extra qualifiers around the known name.
        let colors = colors_for_name("Galatasaray SK");
        assert_eq!(colors.primary.to_hex(), "#C8102E");

        // Miss falls back to the neutral accent pair.
        let fallback = colors_for_name("Arsenal");
        assert_eq!(fallback.primary, Color::INDIGO);
        assert_eq!(fallback.secondary, Color::WHITE);
    }
}
