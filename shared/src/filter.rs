use crate::date_utils::parse_full_date;
use crate::models::Event;

/// Events whose date is exactly `date` (`DD-MM-YYYY`)
pub fn events_on_date<'a>(events: &'a [Event], date: &str) -> Vec<&'a Event> {
    events.iter().filter(|event| event.date == date).collect()
}

/// Events falling in the given month; malformed dates never match
pub fn events_in_month(events: &[Event], year: i32, month0: u32) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| {
            matches!(parse_full_date(&event.date), Some((y, m, _)) if y == year && m == month0)
        })
        .collect()
}

/// Case-insensitive substring match on the event name
pub fn events_matching_keyword<'a>(events: &'a [Event], keyword: &str) -> Vec<&'a Event> {
    let needle = keyword.to_lowercase();
    events
        .iter()
        .filter(|event| event.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn create_test_event(id: &str, date: &str, name: &str) -> Event {
        Event {
            id: id.to_string(),
            date: date.to_string(),
            name: name.to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            description: String::new(),
            category: Category::Personal,
        }
    }

    #[test]
    fn test_events_in_month_keeps_original_order() {
        let events = vec![
            create_test_event("a", "15-03-2024", "Later in March"),
            create_test_event("b", "28-02-2024", "February"),
            create_test_event("c", "01-03-2024", "Early March"),
            create_test_event("d", "01-03-2023", "Last year"),
        ];

        let march: Vec<&str> = events_in_month(&events, 2024, 2).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(march, vec!["a", "c"]);
    }

    #[test]
    fn test_events_in_month_skips_malformed_dates() {
        let events = vec![
            create_test_event("a", "2024-03-01", "Wrong format"),
            create_test_event("b", "", "Empty"),
            create_test_event("c", "xx-03-2024", "Bad day"),
            create_test_event("d", "10-03-2024", "Fine"),
        ];

        let march: Vec<&str> = events_in_month(&events, 2024, 2).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(march, vec!["d"]);
    }

    #[test]
    fn test_events_on_date_exact_match() {
        let events = vec![
            create_test_event("a", "01-03-2024", "One"),
            create_test_event("b", "1-03-2024", "Unpadded"),
            create_test_event("c", "01-03-2024", "Two"),
        ];

        let found: Vec<&str> = events_on_date(&events, "01-03-2024").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(found, vec!["a", "c"]);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let events = vec![
            create_test_event("a", "01-03-2024", "Team Meeting"),
            create_test_event("b", "02-03-2024", "Gym"),
            create_test_event("c", "03-03-2024", "meeting notes"),
        ];

        let found: Vec<&str> = events_matching_keyword(&events, "MEET").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(found, vec!["a", "c"]);
        assert_eq!(events_matching_keyword(&events, "").len(), 3);
        assert!(events_matching_keyword(&events, "yoga").is_empty());
    }
}
