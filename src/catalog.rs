//! Static milestone catalog
//!
//! The fixed, ordered list of franchise milestones shown in the timeline.
//! Loaded once as compiled-in constant data and never mutated.

/// One dated entry in the franchise history timeline.
///
/// The year doubles as the stable identity: no two catalog entries share a
/// year, so selection and cache lookups key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub generation: Option<&'static str>,
    /// Always-available local text shown while an insight is still loading.
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

impl Milestone {
    /// Stable cache key: `"{year}-{title}"`.
    pub fn cache_key(&self) -> String {
        format!("{}-{}", self.year, self.title)
    }

    /// Free-text topic handed to the insight provider.
    pub fn topic(&self) -> String {
        match self.generation {
            Some(generation) => format!("{} {}", self.title, generation),
            None => self.title.to_string(),
        }
    }
}

/// Extract the year component from a cache key.
///
/// Year is the primary key, so comparing years is how the stale-response
/// guard decides whether a fetch result still belongs to the selection.
pub fn key_year(key: &str) -> &str {
    key.split_once('-').map_or(key, |(year, _)| year)
}

/// The full milestone catalog, in timeline order.
pub fn catalog() -> &'static [Milestone] {
    POKEMON_MILESTONES
}

pub static POKEMON_MILESTONES: &[Milestone] = &[
    Milestone {
        year: "1996",
        title: "The Beginning",
        generation: Some("Gen I"),
        description: "Pokémon Red and Green are released in Japan for the Game Boy, introducing 151 original creatures.",
        tags: &["Kanto", "Game Boy", "151"],
    },
    Milestone {
        year: "1998",
        title: "Global Phenomenon",
        generation: Some("Gen I"),
        description: "Pokémon arrives in North America as Red and Blue, triggering 'Pokémania'. The animated series debuts.",
        tags: &["North America", "Anime", "Trading Card Game"],
    },
    Milestone {
        year: "1999",
        title: "Gold and Silver Era",
        generation: Some("Gen II"),
        description: "Introduction of 100 new Pokémon, Day/Night cycles, and the Johto region.",
        tags: &["Johto", "Game Boy Color", "Breeding"],
    },
    Milestone {
        year: "2002",
        title: "Advance Generation",
        generation: Some("Gen III"),
        description: "Ruby and Sapphire launch on Game Boy Advance. Abilities and Double Battles are introduced.",
        tags: &["Hoenn", "GBA", "Abilities"],
    },
    Milestone {
        year: "2006",
        title: "Diamond and Pearl",
        generation: Some("Gen IV"),
        description: "The Sinnoh region debuts on Nintendo DS, bringing online play through the Nintendo Wi-Fi Connection.",
        tags: &["Sinnoh", "DS", "Global Trade System"],
    },
    Milestone {
        year: "2010",
        title: "Black and White",
        generation: Some("Gen V"),
        description: "A soft reboot focusing entirely on new Pokémon in the Unova region until the post-game.",
        tags: &["Unova", "DS", "Seasons"],
    },
    Milestone {
        year: "2013",
        title: "X and Y",
        generation: Some("Gen VI"),
        description: "Transition to full 3D graphics on the 3DS. Mega Evolution changes competitive play forever.",
        tags: &["Kalos", "3DS", "Mega Evolution"],
    },
    Milestone {
        year: "2016",
        title: "Sun and Moon / GO",
        generation: Some("Gen VII"),
        description: "Pokémon GO takes the world by storm. Alola introduces Regional Forms and Z-Moves.",
        tags: &["Alola", "3DS", "Pokémon GO"],
    },
    Milestone {
        year: "2019",
        title: "Sword and Shield",
        generation: Some("Gen VIII"),
        description: "The first main-line games on home console (Switch). Introduction of the Wild Area and Dynamaxing.",
        tags: &["Galar", "Switch", "Wild Area"],
    },
    Milestone {
        year: "2022",
        title: "Scarlet and Violet",
        generation: Some("Gen IX"),
        description: "The first truly open-world Pokémon games. Terastal Phenomenon and Paradox Pokémon are introduced.",
        tags: &["Paldea", "Switch", "Open World"],
    },
];
