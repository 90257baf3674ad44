//! Three-tier tagging on top of the exclude list
//!
//! A [`QuickTags`] owns one production tag and two derived debug tags
//! ("lite" and "full"). Selecting a tier adds or removes the derived tags
//! from an exclude list, so flipping one switch hides or reveals a whole
//! family of debug output.
//!
//! # Example
//!
//! ```
//! use rust_console_filter::prelude::*;
//!
//! let mut console = Console::builder()
//!     .announce_changes(false)
//!     .sink(MemorySink::new())
//!     .build();
//! let mut tags = QuickTags::new("Net");
//!
//! tags.set_tier(&mut console, Tier::Production);
//! assert!(!console.log(LogCall::new("packet dump").tag(tags.full_tag())));
//! assert!(console.log(LogCall::new("connected").tag(tags.production_tag())));
//! ```

use super::error::ConsoleError;
use super::tag_filter::ExclusionControl;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const LITE_MARKER: &str = "_";
const FULL_MARKER: &str = "__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tier {
    /// Hide both debug tiers
    Production,
    /// Show lite debug output, hide full
    DebugLite,
    /// Show everything
    #[default]
    DebugFull,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Production => "production",
            Tier::DebugLite => "lite",
            Tier::DebugFull => "full",
        };
        f.write_str(name)
    }
}

impl FromStr for Tier {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Tier::Production),
            "lite" | "debuglite" | "debug-lite" => Ok(Tier::DebugLite),
            "full" | "debugfull" | "debug-full" => Ok(Tier::DebugFull),
            _ => Err(ConsoleError::InvalidTier(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickTags {
    production_tag: String,
    lite_tag: String,
    full_tag: String,
    tier: Tier,
}

impl QuickTags {
    /// Derive `_{tag}` and `__{tag}` as the lite and full tags
    pub fn new(production_tag: impl Into<String>) -> Self {
        Self::with_tags(production_tag, None, None)
    }

    pub fn with_tags(
        production_tag: impl Into<String>,
        lite_tag: Option<String>,
        full_tag: Option<String>,
    ) -> Self {
        let production_tag = production_tag.into();
        let lite_tag = lite_tag.unwrap_or_else(|| format!("{}{}", LITE_MARKER, production_tag));
        let full_tag = full_tag.unwrap_or_else(|| format!("{}{}", FULL_MARKER, production_tag));
        Self {
            production_tag,
            lite_tag,
            full_tag,
            tier: Tier::default(),
        }
    }

    pub fn production_tag(&self) -> &str {
        &self.production_tag
    }

    pub fn lite_tag(&self) -> &str {
        &self.lite_tag
    }

    pub fn full_tag(&self) -> &str {
        &self.full_tag
    }

    /// Last tier applied; `DebugFull` until [`QuickTags::set_tier`] is called
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn set_tier<E: ExclusionControl + ?Sized>(&mut self, target: &mut E, tier: Tier) {
        match tier {
            Tier::Production => {
                target.exclude_tag(&self.lite_tag);
                target.exclude_tag(&self.full_tag);
            }
            Tier::DebugLite => {
                target.unexclude_tag(&self.lite_tag);
                target.exclude_tag(&self.full_tag);
            }
            Tier::DebugFull => {
                target.unexclude_tag(&self.lite_tag);
                target.unexclude_tag(&self.full_tag);
            }
        }
        self.tier = tier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tag_filter::TagFilter;

    #[test]
    fn test_default_derived_tags() {
        let tags = QuickTags::new("Db");
        assert_eq!(tags.lite_tag(), "_Db");
        assert_eq!(tags.full_tag(), "__Db");
        assert_eq!(tags.tier(), Tier::DebugFull);
    }

    #[test]
    fn test_custom_derived_tags() {
        let tags = QuickTags::with_tags("Db", Some("db-lite".to_string()), None);
        assert_eq!(tags.lite_tag(), "db-lite");
        assert_eq!(tags.full_tag(), "__Db");
    }

    #[test]
    fn test_tiers_drive_exclude_list() {
        let mut filter = TagFilter::new();
        let mut tags = QuickTags::new("Db");

        tags.set_tier(&mut filter, Tier::Production);
        assert_eq!(filter.list_exclude(), vec!["_Db", "__Db"]);
        assert!(filter.admit("Db"));

        tags.set_tier(&mut filter, Tier::DebugLite);
        assert_eq!(filter.list_exclude(), vec!["__Db"]);
        assert!(filter.admit("_Db"));
        assert!(!filter.admit("__Db"));

        tags.set_tier(&mut filter, Tier::DebugFull);
        assert!(filter.list_exclude().is_empty());
        assert_eq!(tags.tier(), Tier::DebugFull);
    }

    #[test]
    fn test_repeated_tier_is_idempotent() {
        let mut filter = TagFilter::new();
        let mut tags = QuickTags::new("Db");
        tags.set_tier(&mut filter, Tier::Production);
        tags.set_tier(&mut filter, Tier::Production);
        assert_eq!(filter.list_exclude().len(), 2);
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("Production".parse::<Tier>().unwrap(), Tier::Production);
        assert_eq!("lite".parse::<Tier>().unwrap(), Tier::DebugLite);
        assert_eq!(" full ".parse::<Tier>().unwrap(), Tier::DebugFull);
        assert!("verbose".parse::<Tier>().is_err());
    }
}
