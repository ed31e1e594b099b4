//! City - Where a pickup point may be opened

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Cities with pickup points. Canonical literals are the Russian names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum City {
    #[serde(rename = "Москва", alias = "Moscow")]
    Moscow,
    #[serde(rename = "Санкт-Петербург", alias = "Saint Petersburg")]
    SaintPetersburg,
    #[serde(rename = "Казань", alias = "Kazan")]
    Kazan,
}

impl City {
    pub const ALL: [City; 3] = [City::Moscow, City::SaintPetersburg, City::Kazan];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Moscow => "Москва",
            City::SaintPetersburg => "Санкт-Петербург",
            City::Kazan => "Казань",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for City {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Москва" | "Moscow" => Ok(City::Moscow),
            "Санкт-Петербург" | "Saint Petersburg" => Ok(City::SaintPetersburg),
            "Казань" | "Kazan" => Ok(City::Kazan),
            _ => Err(DomainError::InvalidCity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for city in City::ALL {
            assert_eq!(city.as_str().parse::<City>().unwrap(), city);
        }
    }

    #[test]
    fn test_english_aliases() {
        assert_eq!("Moscow".parse::<City>().unwrap(), City::Moscow);
        assert_eq!(
            "Saint Petersburg".parse::<City>().unwrap(),
            City::SaintPetersburg
        );
        assert_eq!("Kazan".parse::<City>().unwrap(), City::Kazan);
    }

    #[test]
    fn test_rejects_other_cities() {
        for raw in ["", "Новосибирск", "москва", "Moscow ", "London", "Санкт Петербург"] {
            let err = raw.parse::<City>().unwrap_err();
            assert!(matches!(err, DomainError::InvalidCity(ref c) if c == raw));
        }
    }

    #[test]
    fn test_serializes_canonical_literal() {
        let json = serde_json::to_string(&City::SaintPetersburg).unwrap();
        assert_eq!(json, "\"Санкт-Петербург\"");
        let parsed: City = serde_json::from_str("\"Kazan\"").unwrap();
        assert_eq!(parsed, City::Kazan);
    }
}
