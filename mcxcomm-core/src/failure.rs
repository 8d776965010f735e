//! Validation failure reasons
//!
//! A received frame can be wrong in several ways at once (a noisy link
//! typically breaks both the checksum and a marker), so validation
//! collects every violated condition into a [`Failures`] set.

use std::fmt;

bitflags::bitflags! {
    /// Set of conditions a frame failed
    ///
    /// The empty set means the frame is well-formed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Failures: u8 {
        /// First byte is not STX
        const BAD_START = 1;

        /// Response code is not in the accepted set
        const BAD_RESPONSE_CODE = 1 << 1;

        /// End-marker byte is not ETX
        const BAD_END = 1 << 2;

        /// Stored checksum differs from the computed one
        const BAD_CHECKSUM = 1 << 3;
    }
}

/// A single failed condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    BadStart,
    BadResponseCode,
    BadEnd,
    BadChecksum,
}

impl Failure {
    /// All reasons, in wire order
    pub const ALL: [Failure; 4] = [
        Self::BadStart,
        Self::BadResponseCode,
        Self::BadEnd,
        Self::BadChecksum,
    ];

    /// Flag for this reason
    pub fn flag(self) -> Failures {
        match self {
            Self::BadStart => Failures::BAD_START,
            Self::BadResponseCode => Failures::BAD_RESPONSE_CODE,
            Self::BadEnd => Failures::BAD_END,
            Self::BadChecksum => Failures::BAD_CHECKSUM,
        }
    }

    /// Short machine-friendly name, used as a log field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadStart => "bad_start",
            Self::BadResponseCode => "bad_response_code",
            Self::BadEnd => "bad_end",
            Self::BadChecksum => "bad_checksum",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Failure> for Failures {
    fn from(failure: Failure) -> Self {
        failure.flag()
    }
}

impl Failures {
    /// Iterate over the individual reasons in wire order
    pub fn reasons(self) -> impl Iterator<Item = Failure> {
        Failure::ALL
            .into_iter()
            .filter(move |reason| self.contains(reason.flag()))
    }
}

impl fmt::Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("ok");
        }

        let mut first = true;
        for reason in self.reasons() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{reason}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reasons_in_wire_order() {
        let failures = Failures::BAD_CHECKSUM | Failures::BAD_START;
        let reasons: Vec<Failure> = failures.reasons().collect();

        assert_eq!(reasons, vec![Failure::BadStart, Failure::BadChecksum]);
    }

    #[test]
    fn test_empty_means_ok() {
        assert!(Failures::default().is_empty());
        assert_eq!(Failures::empty().reasons().count(), 0);
        assert_eq!(Failures::empty().to_string(), "ok");
    }

    #[test]
    fn test_display_lists_all() {
        assert_eq!(
            Failures::all().to_string(),
            "bad_start,bad_response_code,bad_end,bad_checksum"
        );
    }

    #[test]
    fn test_flag_roundtrip() {
        for reason in Failure::ALL {
            assert_eq!(Failures::from(reason).reasons().collect::<Vec<_>>(), vec![reason]);
        }
    }
}
