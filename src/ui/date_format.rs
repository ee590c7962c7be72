use chrono::{DateTime, Local, Utc};

/// Placeholder for a match without a kickoff time
pub const NO_KICKOFF: &str = "—";

/// Formats a UTC kickoff as local `DD.MM.YYYY HH:MM`.
pub fn format_kickoff(kickoff: Option<DateTime<Utc>>) -> String {
    match kickoff {
        Some(utc) => format_in_timezone(utc, &Local),
        None => NO_KICKOFF.to_string(),
    }
}

fn format_in_timezone<Tz>(utc: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    utc.with_timezone(tz).format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_missing_kickoff() {
        assert_eq!(format_kickoff(None), "—");
    }

    #[test]
    fn test_formats_in_given_timezone() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 20, 15, 0, 0).unwrap();
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_in_timezone(utc, &moscow), "20.01.2024 18:00");
        assert_eq!(format_in_timezone(utc, &Utc), "20.01.2024 15:00");
    }

    #[test]
    fn test_local_format_shape() {
        let utc = Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        let text = format_kickoff(Some(utc));
        assert_eq!(text.len(), "31.12.2024 23:30".len());
        assert_eq!(&text[2..3], ".");
    }
}
