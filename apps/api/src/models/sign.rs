#![allow(dead_code)]

//! The 12 canonical zodiac signs accepted by the reading endpoint.

use std::fmt;
use std::str::FromStr;

/// A validated zodiac sign. Input is case-insensitive and trimmed;
/// the canonical form is lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Returned when input is not one of the 12 signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSignError;

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Canonical lower-case token, as interpolated into prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    /// Capitalized form for page headings.
    pub fn title(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl FromStr for Sign {
    type Err = InvalidSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aries" => Ok(Sign::Aries),
            "taurus" => Ok(Sign::Taurus),
            "gemini" => Ok(Sign::Gemini),
            "cancer" => Ok(Sign::Cancer),
            "leo" => Ok(Sign::Leo),
            "virgo" => Ok(Sign::Virgo),
            "libra" => Ok(Sign::Libra),
            "scorpio" => Ok(Sign::Scorpio),
            "sagittarius" => Ok(Sign::Sagittarius),
            "capricorn" => Ok(Sign::Capricorn),
            "aquarius" => Ok(Sign::Aquarius),
            "pisces" => Ok(Sign::Pisces),
            _ => Err(InvalidSignError),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
