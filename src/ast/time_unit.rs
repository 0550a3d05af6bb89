use std::fmt;
use std::time::Duration;

/// Units accepted after `INTERVAL <value>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Microsecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    SecondMicrosecond,
    MinuteMicrosecond,
    MinuteSecond,
    HourMicrosecond,
    HourSecond,
    HourMinute,
    DayMicrosecond,
    DaySecond,
    DayMinute,
    DayHour,
    YearMonth,
}

impl TimeUnit {
    pub fn keyword(&self) -> &'static str {
        match self {
            TimeUnit::Microsecond => "MICROSECOND",
            TimeUnit::Second => "SECOND",
            TimeUnit::Minute => "MINUTE",
            TimeUnit::Hour => "HOUR",
            TimeUnit::Day => "DAY",
            TimeUnit::Week => "WEEK",
            TimeUnit::Month => "MONTH",
            TimeUnit::Quarter => "QUARTER",
            TimeUnit::Year => "YEAR",
            TimeUnit::SecondMicrosecond => "SECOND_MICROSECOND",
            TimeUnit::MinuteMicrosecond => "MINUTE_MICROSECOND",
            TimeUnit::MinuteSecond => "MINUTE_SECOND",
            TimeUnit::HourMicrosecond => "HOUR_MICROSECOND",
            TimeUnit::HourSecond => "HOUR_SECOND",
            TimeUnit::HourMinute => "HOUR_MINUTE",
            TimeUnit::DayMicrosecond => "DAY_MICROSECOND",
            TimeUnit::DaySecond => "DAY_SECOND",
            TimeUnit::DayMinute => "DAY_MINUTE",
            TimeUnit::DayHour => "DAY_HOUR",
            TimeUnit::YearMonth => "YEAR_MONTH",
        }
    }

    pub fn parse(keyword: &str) -> Option<TimeUnit> {
        const ALL: [TimeUnit; 20] = [
            TimeUnit::Microsecond, TimeUnit::Second, TimeUnit::Minute, TimeUnit::Hour, TimeUnit::Day,
            TimeUnit::Week, TimeUnit::Month, TimeUnit::Quarter, TimeUnit::Year,
            TimeUnit::SecondMicrosecond, TimeUnit::MinuteMicrosecond, TimeUnit::MinuteSecond,
            TimeUnit::HourMicrosecond, TimeUnit::HourSecond, TimeUnit::HourMinute,
            TimeUnit::DayMicrosecond, TimeUnit::DaySecond, TimeUnit::DayMinute, TimeUnit::DayHour,
            TimeUnit::YearMonth,
        ];
        ALL.into_iter().find(|unit| unit.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Length of one unit, for the units whose length never varies.
    ///
    /// Calendar units (month, year, ...) and compound units have none.
    pub fn fixed_duration(&self) -> Option<Duration> {
        match self {
            TimeUnit::Microsecond => Some(Duration::from_micros(1)),
            TimeUnit::Second => Some(Duration::from_secs(1)),
            TimeUnit::Minute => Some(Duration::from_secs(60)),
            TimeUnit::Hour => Some(Duration::from_secs(60 * 60)),
            TimeUnit::Day => Some(Duration::from_secs(24 * 60 * 60)),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Debug for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeUnit({})", self)
    }
}
