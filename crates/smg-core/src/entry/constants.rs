//! Conventional values for `<changefreq>` and `<priority>`.
//!
//! Neither field is validated on output; these exist so callers don't have to
//! spell the protocol values by hand.

pub mod changefreq {
    pub const ALWAYS: &str = "always";
    pub const HOURLY: &str = "hourly";
    pub const DAILY: &str = "daily";
    pub const WEEKLY: &str = "weekly";
    pub const MONTHLY: &str = "monthly";
    pub const YEARLY: &str = "yearly";
    pub const NEVER: &str = "never";
}

pub mod priority {
    pub const PRIORITY_0: &str = "0.0";
    pub const PRIORITY_1: &str = "0.1";
    pub const PRIORITY_2: &str = "0.2";
    pub const PRIORITY_3: &str = "0.3";
    pub const PRIORITY_4: &str = "0.4";
    pub const PRIORITY_5: &str = "0.5";
    pub const PRIORITY_6: &str = "0.6";
    pub const PRIORITY_7: &str = "0.7";
    pub const PRIORITY_8: &str = "0.8";
    pub const PRIORITY_9: &str = "0.9";
    pub const PRIORITY_10: &str = "1.0";

    /// Protocol default. Not applied automatically.
    pub const DEFAULT: &str = PRIORITY_5;
}
