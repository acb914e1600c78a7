mod strings;

pub use strings::Messages;

use serde::{Deserialize, Serialize};

/// UI locale of a wizard session. Fixed for the lifetime of the wizard;
/// switching language means starting a new session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    En,
    Vi,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "en" => Locale::En,
            "vi" => Locale::Vi,
            _ => Locale::Ko,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Ko => &strings::KO,
            Locale::En => &strings::EN,
            Locale::Vi => &strings::VI,
        }
    }
}
