use std::fmt;

use super::constants::TEAM_COUNT;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    Observer = 0,
    Red = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
}

impl Team {
    /// The four playing teams, in tie-break order.
    pub fn playing() -> [Team; TEAM_COUNT] {
        use self::Team::*;
        [Red, Yellow, Green, Blue]
    }

    pub fn from_code(code: i32) -> Option<Team> {
        match code {
            0 => Some(Team::Observer),
            1 => Some(Team::Red),
            2 => Some(Team::Yellow),
            3 => Some(Team::Green),
            4 => Some(Team::Blue),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn plays(&self) -> bool {
        *self != Team::Observer
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Team::Observer => "Observer",
            Team::Red => "Red",
            Team::Yellow => "Yellow",
            Team::Green => "Green",
            Team::Blue => "Blue",
        }
    }

    fn slot(&self) -> Option<usize> {
        match *self {
            Team::Observer => None,
            team => Some(team as usize - 1),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Cell counts per playing team. Observer always reads as zero and cannot be credited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    counts: [u32; TEAM_COUNT],
}

impl Scoreboard {
    pub fn new() -> Scoreboard {
        Scoreboard::default()
    }

    pub fn get(&self, team: Team) -> u32 {
        team.slot().map_or(0, |slot| self.counts[slot])
    }

    pub fn increment(&mut self, team: Team) -> bool {
        match team.slot() {
            Some(slot) => {
                self.counts[slot] += 1;
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Highest-scoring team; ties go to the earliest of Red, Yellow, Green, Blue.
    /// `Observer` when nobody has scored.
    pub fn leader(&self) -> Team {
        let mut leader = Team::Observer;
        let mut best = 0;
        for team in Team::playing().iter() {
            let score = self.get(*team);
            if score > best {
                best = score;
                leader = *team;
            }
        }
        leader
    }
}
