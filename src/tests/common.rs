use crate::sets::PokemonSet;
use crate::team::Team;
use schema::{Gender, StatsTable};

/// Six gen 6 sets exercising every optional text line.
pub const TEAM: &str = include_str!("fixtures/team.txt");

/// A bare-tier text block followed by a `gen1ou` block in a folder.
pub const TEAMS: &str = include_str!("fixtures/teams.txt");

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixture_team() -> Team {
    Team::from_text(TEAM).expect("fixture team parses")
}

/// A builder for sets with the common defaults filled in.
pub struct SetBuilder {
    set: PokemonSet,
}

impl SetBuilder {
    pub fn new(species: &str) -> Self {
        Self {
            set: PokemonSet::new(species),
        }
    }

    pub fn nickname(mut self, name: &str) -> Self {
        self.set.name = Some(name.to_string());
        self
    }

    pub fn item(mut self, item: &str) -> Self {
        self.set.item = Some(item.to_string());
        self
    }

    pub fn ability(mut self, ability: &str) -> Self {
        self.set.ability = Some(ability.to_string());
        self
    }

    pub fn moves(mut self, moves: &[&str]) -> Self {
        self.set.moves = moves.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.set.gender = Some(gender);
        self
    }

    pub fn evs(mut self, evs: StatsTable) -> Self {
        self.set.evs = evs;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.set.level = level;
        self
    }

    pub fn build(self) -> PokemonSet {
        self.set
    }
}
