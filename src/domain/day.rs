//! Trip days

use std::fmt;
use std::str::FromStr;

/// A day of the trip. Ordering follows the trip, Day 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Day {
    #[default]
    Day1,
    Day2,
    Day3,
    Day4,
    Day5,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Day1, Day::Day2, Day::Day3, Day::Day4, Day::Day5];

    /// 1-based day number
    pub fn number(&self) -> u8 {
        match self {
            Day::Day1 => 1,
            Day::Day2 => 2,
            Day::Day3 => 3,
            Day::Day4 => 4,
            Day::Day5 => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Day> {
        Day::ALL.iter().copied().find(|day| day.number() == number)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Day::Day1 => "Day 1",
            Day::Day2 => "Day 2",
            Day::Day3 => "Day 3",
            Day::Day4 => "Day 4",
            Day::Day5 => "Day 5",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let digits = lower.strip_prefix("day").unwrap_or(&lower).trim();

        digits
            .parse::<u8>()
            .ok()
            .and_then(Day::from_number)
            .ok_or_else(|| {
                format!(
                    "Invalid day: '{}'. Valid days are: Day 1, Day 2, Day 3, Day 4, Day 5",
                    s
                )
            })
    }
}
