use crate::model::{IngredientRecord, IngredientStatus};

/// Indicator colour of an ingredient row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Success,
    Warning,
    Error,
}

/// How an ingredient row should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub status_color: StatusColor,
    /// Render grams/kcal chips and the USDA match
    pub show_details: bool,
    pub note: Option<&'a str>,
    pub usda_match: Option<&'a str>,
}

impl StatusColor {
    /// Colour for a status. Unrecognised statuses get the `ok` colour.
    pub fn for_status(status: &IngredientStatus) -> Self {
        match status {
            IngredientStatus::Skipped => StatusColor::Warning,
            IngredientStatus::NotFound => StatusColor::Error,
            IngredientStatus::Ok | IngredientStatus::Other(_) => StatusColor::Success,
        }
    }
}

pub fn classify(record: &IngredientRecord) -> Classification<'_> {
    let status_color = StatusColor::for_status(&record.status);

    if record.status == IngredientStatus::Ok {
        Classification {
            status_color,
            show_details: true,
            note: None,
            usda_match: record.usda_match.as_deref(),
        }
    } else {
        Classification {
            status_color,
            show_details: false,
            note: record.note(),
            usda_match: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: IngredientStatus, note: Option<&str>) -> IngredientRecord {
        IngredientRecord {
            raw: "1 cup rice".to_string(),
            grams: Some(185.0),
            usda_match: Some("Rice, white, long-grain".to_string()),
            status,
            note: note.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_ok_shows_details_and_hides_note() {
        let rec = record(IngredientStatus::Ok, Some("approximated from cups"));
        let c = classify(&rec);
        assert_eq!(c.status_color, StatusColor::Success);
        assert!(c.show_details);
        assert_eq!(c.note, None);
        assert_eq!(c.usda_match, Some("Rice, white, long-grain"));
    }

    #[test]
    fn test_skipped_and_not_found_show_note() {
        let rec = record(IngredientStatus::Skipped, Some("no quantity found"));
        let c = classify(&rec);
        assert_eq!(c.status_color, StatusColor::Warning);
        assert!(!c.show_details);
        assert_eq!(c.note, Some("no quantity found"));
        assert_eq!(c.usda_match, None);

        let rec = record(IngredientStatus::NotFound, None);
        let c = classify(&rec);
        assert_eq!(c.status_color, StatusColor::Error);
        assert!(!c.show_details);
        assert_eq!(c.note, None);
    }

    #[test]
    fn test_unknown_status_falls_back_to_ok_colour() {
        let rec = record(IngredientStatus::Other("pending".to_string()), Some("queued"));
        let c = classify(&rec);
        assert_eq!(c.status_color, StatusColor::Success);
        assert!(!c.show_details);
        assert_eq!(c.note, Some("queued"));
    }
}
