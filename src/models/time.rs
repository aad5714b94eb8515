use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

/// Время задачи в пределах суток - канонический ключ расписания.
/// Принимает час без ведущего нуля ("9:30"), печатается всегда как "09:30".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTime;

impl fmt::Display for InvalidTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("time must be HH:MM with hours 0-23 and minutes 00-59")
    }
}

impl std::error::Error for InvalidTime {}

impl FromStr for TimeOfDay {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s.split_once(':').ok_or(InvalidTime)?;
        // Час - одна или две цифры, минуты - строго две
        if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTime);
        }
        if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTime);
        }
        let hour: u32 = hours.parse().map_err(|_| InvalidTime)?;
        let minute: u32 = minutes.parse().map_err(|_| InvalidTime)?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TimeOfDay)
            .ok_or(InvalidTime)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Проверка формата ЧЧ:ММ (часы 0-23, минуты 00-59)
pub fn is_valid_time(s: &str) -> bool {
    s.parse::<TimeOfDay>().is_ok()
}
