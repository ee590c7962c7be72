use crate::data_fetcher::models::MatchStatus;

/// Display label of a match status.
///
/// Statuses without a label, `TIMED` among them, show their raw API value.
pub fn status_label(status: &MatchStatus) -> &str {
    match status {
        MatchStatus::Scheduled => "Запланирован",
        MatchStatus::Live => "В прямом эфире",
        MatchStatus::InPlay => "В игре",
        MatchStatus::Paused => "Пауза",
        MatchStatus::Finished => "Завершен",
        MatchStatus::Postponed => "Отложен",
        MatchStatus::Suspended => "Приостановлен",
        MatchStatus::Canceled => "Отменен",
        other => other.as_api_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(status_label(&MatchStatus::InPlay), "В игре");
        assert_eq!(status_label(&MatchStatus::Finished), "Завершен");
        assert_eq!(status_label(&MatchStatus::Canceled), "Отменен");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(status_label(&MatchStatus::Timed), "TIMED");
        assert_eq!(
            status_label(&MatchStatus::Other("AWARDED".to_string())),
            "AWARDED"
        );
        assert_eq!(status_label(&MatchStatus::default()), "");
    }
}
