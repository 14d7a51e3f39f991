use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ZbxError;

/// Remote API version as reported by `APIInfo.version`.
///
/// The zero value means "not discovered yet".
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub release: u32,
}

impl Version {
    #[must_use]
    pub const fn new(major: u32, minor: u32, release: u32) -> Self {
        Self {
            major,
            minor,
            release,
        }
    }

    #[must_use]
    pub const fn is_unknown(self) -> bool {
        self.major == 0 && self.minor == 0 && self.release == 0
    }

    /// `true` when this version is `major.minor.release` or newer.
    #[must_use]
    pub const fn is_at_least(self, major: u32, minor: u32, release: u32) -> bool {
        if self.major != major {
            return self.major > major;
        }
        if self.minor != minor {
            return self.minor > minor;
        }
        self.release >= release
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.release)
    }
}

impl FromStr for Version {
    type Err = ZbxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ZbxError::Version {
            message: format!("expected major.minor.release, got {s:?}"),
        };
        let parts: Vec<&str> = s.trim().split('.').collect();
        let [major, minor, release] = parts[..] else {
            return Err(invalid());
        };
        let parse = |part: &str| part.parse::<u32>().map_err(|_| invalid());
        Ok(Self::new(parse(major)?, parse(minor)?, parse(release)?))
    }
}
