//! Italian-locale date formatting.

/// date_it_to_iso8601 - Formats an Italian `DD/MM/YYYY` date, with an
/// optional `HH:MM` or `HH:MM:SS` time, as an ISO-8601 timestamp string.
///
/// A missing time defaults to start of day, or end of day when `full_day` is
/// set; a time given as `HH:MM` gains `:00` or `:59` seconds on the same
/// flag. An empty or `"0"` time counts as missing, as the original's
/// `empty()` check would have it. The `Z` suffix is appended literally with no timezone conversion;
/// the original helper labels local times as UTC and that quirk is kept.
///
/// Returns `None` when the date is empty or does not split into three
/// slash-separated parts.
pub fn date_it_to_iso8601(date: &str, time: Option<&str>, full_day: bool) -> Option<String> {
    if date.is_empty() {
        return None;
    }
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let mut ret = format!("{}-{}-{}T", parts[2], parts[1], parts[0]);
    match time {
        Some(time) if !time.is_empty() && time != "0" => {
            ret.push_str(time);
            if time.len() == 5 {
                ret.push_str(if full_day { ":59" } else { ":00" });
            }
        }
        _ => ret.push_str(if full_day { "23:59:59" } else { "00:00:00" }),
    }
    ret.push('Z');
    Some(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_with_minutes() {
        assert_eq!(
            date_it_to_iso8601("25/12/2023", Some("14:30"), false),
            Some("2023-12-25T14:30:00Z".to_string())
        );
        assert_eq!(
            date_it_to_iso8601("25/12/2023", Some("14:30"), true),
            Some("2023-12-25T14:30:59Z".to_string())
        );
    }

    #[test]
    fn test_date_with_full_time() {
        // A six-or-more character time is taken as-is, the flag is ignored.
        assert_eq!(
            date_it_to_iso8601("01/02/2003", Some("04:05:06"), true),
            Some("2003-02-01T04:05:06Z".to_string())
        );
    }

    #[test]
    fn test_date_without_time() {
        assert_eq!(
            date_it_to_iso8601("25/12/2023", None, false),
            Some("2023-12-25T00:00:00Z".to_string())
        );
        assert_eq!(
            date_it_to_iso8601("25/12/2023", None, true),
            Some("2023-12-25T23:59:59Z".to_string())
        );
        // Empty time behaves like a missing one, and so does "0", which the
        // original's loose emptiness check also discards.
        assert_eq!(
            date_it_to_iso8601("25/12/2023", Some(""), true),
            Some("2023-12-25T23:59:59Z".to_string())
        );
        assert_eq!(
            date_it_to_iso8601("25/12/2023", Some("0"), true),
            Some("2023-12-25T23:59:59Z".to_string())
        );
    }

    #[test]
    fn test_malformed_date() {
        assert_eq!(date_it_to_iso8601("", None, false), None);
        assert_eq!(date_it_to_iso8601("25/12", None, false), None);
    }
}
