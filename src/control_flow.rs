//! Chapter 2: branching and looping.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Adult,
    Minor,
}

impl AgeGroup {
    pub fn of(age: u32) -> Self {
        if age >= 18 {
            AgeGroup::Adult
        } else {
            AgeGroup::Minor
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            AgeGroup::Adult => "You are an adult",
            AgeGroup::Minor => "You are a minor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    CorLower,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::CorLower => write!(f, "C or lower"),
        }
    }
}

/// `if` / `else if` / `else` chain.
pub fn letter_grade(score: u32) -> Grade {
    if score >= 90 {
        Grade::A
    } else if score >= 80 {
        Grade::B
    } else {
        Grade::CorLower
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Evaluation::Excellent => "Excellent",
            Evaluation::Good => "Good",
            Evaluation::Fair => "Fair",
            Evaluation::NeedsImprovement => "Needs improvement",
        };
        f.write_str(text)
    }
}

/// The condition-less switch: a `match` over range patterns.
pub fn evaluate(score: u32) -> Evaluation {
    match score {
        90.. => Evaluation::Excellent,
        80..=89 => Evaluation::Good,
        70..=79 => Evaluation::Fair,
        _ => Evaluation::NeedsImprovement,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown day: {0:?}")]
pub struct UnknownDay(pub String);

impl FromStr for Weekday {
    type Err = UnknownDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_ascii_lowercase().as_str() {
            "monday" => Weekday::Monday,
            "tuesday" => Weekday::Tuesday,
            "wednesday" => Weekday::Wednesday,
            "thursday" => Weekday::Thursday,
            "friday" => Weekday::Friday,
            "saturday" => Weekday::Saturday,
            "sunday" => Weekday::Sunday,
            _ => return Err(UnknownDay(s.to_string())),
        };
        Ok(day)
    }
}

impl Weekday {
    pub fn describe(self) -> &'static str {
        match self {
            Weekday::Monday => "Start of work week",
            Weekday::Friday => "TGIF!",
            Weekday::Saturday | Weekday::Sunday => "Weekend!",
            _ => "Midweek",
        }
    }
}

/// Classic counting loop.
pub fn count_up(n: u32) -> Vec<u32> {
    let mut out = Vec::new();
    for i in 1..=n {
        out.push(i);
    }
    out
}

/// The same idea written as a `while` loop.
pub fn count_while(limit: u32) -> Vec<u32> {
    let mut out = Vec::new();
    let mut count = 0;
    while count < limit {
        out.push(count);
        count += 1;
    }
    out
}

pub fn enumerate_items<'a>(items: &[&'a str]) -> Vec<(usize, &'a str)> {
    items.iter().copied().enumerate().collect()
}
