//! Process creation timestamps

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// 100ns intervals between 1601-01-01 and 1970-01-01
const EPOCH_DIFFERENCE_TICKS: u64 = 116_444_736_000_000_000;

const TICKS_PER_SECOND: u64 = 10_000_000;

/// A Windows FILETIME: 100-nanosecond ticks since 1601-01-01 UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FileTime(u64);

impl FileTime {
    pub const fn new(ticks: u64) -> Self {
        FileTime(ticks)
    }

    /// Build from the low/high halves of a FILETIME struct
    pub const fn from_parts(low: u32, high: u32) -> Self {
        FileTime(((high as u64) << 32) | low as u64)
    }

    pub const fn ticks(self) -> u64 {
        self.0
    }

    pub const fn low(self) -> u32 {
        self.0 as u32
    }

    pub const fn high(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Convert to `SystemTime`, or `None` for timestamps before the Unix epoch
    pub fn to_system_time(self) -> Option<SystemTime> {
        let since_unix = self.0.checked_sub(EPOCH_DIFFERENCE_TICKS)?;
        let secs = since_unix / TICKS_PER_SECOND;
        let nanos = (since_unix % TICKS_PER_SECOND) * 100;
        UNIX_EPOCH.checked_add(Duration::new(secs, nanos as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_parts() {
        let ft = FileTime::from_parts(0xDEAD_BEEF, 0x0000_0001);
        assert_eq!(ft.ticks(), 0x1_DEAD_BEEF);
        assert_eq!(ft.low(), 0xDEAD_BEEF);
        assert_eq!(ft.high(), 1);
    }

    #[test]
    fn test_unix_epoch() {
        let ft = FileTime::new(EPOCH_DIFFERENCE_TICKS);
        assert_eq!(ft.to_system_time(), Some(UNIX_EPOCH));
        assert_eq!(FileTime::new(0).to_system_time(), None);
    }

    #[test]
    fn test_sub_second_precision() {
        let ft = FileTime::new(EPOCH_DIFFERENCE_TICKS + TICKS_PER_SECOND + 5);
        let expected = UNIX_EPOCH + Duration::new(1, 500);
        assert_eq!(ft.to_system_time(), Some(expected));
    }

    proptest! {
        #[test]
        fn prop_parts_preserve_value(low in any::<u32>(), high in any::<u32>()) {
            let ft = FileTime::from_parts(low, high);
            prop_assert_eq!(ft.low(), low);
            prop_assert_eq!(ft.high(), high);
        }

        #[test]
        fn prop_equal_only_when_both_halves_match(
            a in any::<(u32, u32)>(),
            b in any::<(u32, u32)>(),
        ) {
            let fa = FileTime::from_parts(a.0, a.1);
            let fb = FileTime::from_parts(b.0, b.1);
            prop_assert_eq!(fa == fb, a == b);
        }
    }
}
