//! Protocol revisions

use std::fmt;
use std::str::FromStr;

/// Protocol revisions in chronological order.
///
/// An opcode is only valid when the requested revision is at or after the
/// revision that introduced it (see [`crate::Opcode::since`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Revision {
    /// Initial release
    #[default]
    Frontier = 0,
    /// Homestead
    Homestead = 1,
    /// Tangerine Whistle (EIP-150)
    TangerineWhistle = 2,
    /// Spurious Dragon (EIP-158)
    SpuriousDragon = 3,
    /// Byzantium, introduces REVERT
    Byzantium = 4,
    /// Constantinople
    Constantinople = 5,
    /// Petersburg
    Petersburg = 6,
    /// Istanbul
    Istanbul = 7,
    /// Berlin
    Berlin = 8,
    /// London
    London = 9,
    /// Paris (The Merge)
    Paris = 10,
    /// Shanghai
    Shanghai = 11,
    /// Cancun
    Cancun = 12,
    /// Prague
    Prague = 13,
}

impl Revision {
    /// Newest revision considered stable
    pub const LATEST_STABLE: Revision = Revision::Cancun;

    /// Newest known revision
    pub const MAX: Revision = Revision::Prague;

    /// Every revision, oldest first
    pub const ALL: [Revision; 14] = [
        Revision::Frontier,
        Revision::Homestead,
        Revision::TangerineWhistle,
        Revision::SpuriousDragon,
        Revision::Byzantium,
        Revision::Constantinople,
        Revision::Petersburg,
        Revision::Istanbul,
        Revision::Berlin,
        Revision::London,
        Revision::Paris,
        Revision::Shanghai,
        Revision::Cancun,
        Revision::Prague,
    ];

    /// Returns true if `self` is at or after `since`.
    #[inline]
    pub const fn is_active(self, since: Revision) -> bool {
        self as u8 >= since as u8
    }

    /// Name of the revision
    pub const fn name(self) -> &'static str {
        match self {
            Revision::Frontier => "Frontier",
            Revision::Homestead => "Homestead",
            Revision::TangerineWhistle => "TangerineWhistle",
            Revision::SpuriousDragon => "SpuriousDragon",
            Revision::Byzantium => "Byzantium",
            Revision::Constantinople => "Constantinople",
            Revision::Petersburg => "Petersburg",
            Revision::Istanbul => "Istanbul",
            Revision::Berlin => "Berlin",
            Revision::London => "London",
            Revision::Paris => "Paris",
            Revision::Shanghai => "Shanghai",
            Revision::Cancun => "Cancun",
            Revision::Prague => "Prague",
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Revision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Revision::ALL
            .into_iter()
            .find(|rev| rev.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown revision: {}", s))
    }
}
