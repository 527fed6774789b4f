use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::{
    api::response_errors::AddExerciseError,
    model::ExerciseDetails,
    types::{coerce_number, serialize_number, CalendarDate, Id},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

impl TryFrom<AddExerciseRequest> for ExerciseDetails {
    type Error = AddExerciseError;

    fn try_from(req: AddExerciseRequest) -> Result<Self, Self::Error> {
        let (Some(description), Some(duration)) = (non_empty(req.description), non_empty(req.duration))
        else {
            return Err(AddExerciseError::DescriptionAndDurationRequired);
        };

        Ok(ExerciseDetails {
            description,
            duration: parse_duration(&duration).ok_or(AddExerciseError::DurationNotANumber)?,
            // An unusable date quietly becomes today
            date: CalendarDate::parse_or_today(req.date.as_deref()),
        })
    }
}

/// Any finite number, fractions included
fn parse_duration(text: &str) -> Option<f64> {
    coerce_number(text).filter(|v| v.is_finite())
}

/// Echo of a stored exercise.
///
/// `_id` is the id of the *user* the exercise was added to, not of the
/// exercise. Clients depend on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_number")]
    pub duration: f64,
    pub date: CalendarDate,
    #[serde(rename = "_id")]
    pub id: Id,
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    fn request(description: Option<&str>, duration: Option<&str>, date: Option<&str>) -> AddExerciseRequest {
        AddExerciseRequest {
            description: description.map(str::to_owned),
            duration: duration.map(str::to_owned),
            date: date.map(str::to_owned),
        }
    }

    #[test]
    fn test_description_and_duration_required() {
        for req in [
            request(None, Some("30"), None),
            request(Some("run"), None, None),
            request(Some(""), Some("30"), None),
            request(Some("run"), Some(""), Some("2023-01-15")),
        ] {
            assert_eq!(
                ExerciseDetails::try_from(req),
                Err(AddExerciseError::DescriptionAndDurationRequired)
            );
        }
    }

    #[test]
    fn test_duration_is_coerced() {
        let details = ExerciseDetails::try_from(request(Some("run"), Some(" 30 "), Some("2023-01-15"))).unwrap();
        assert_eq!(details.duration, 30.0);
        assert_eq!(details.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().into());

        assert_eq!(parse_duration("45.0"), Some(45.0));
        assert_eq!(parse_duration("0"), Some(0.0));
        assert_eq!(parse_duration("12.5"), Some(12.5));
        assert_eq!(parse_duration("0x1e"), Some(30.0));
        assert_eq!(parse_duration("Infinity"), None);
        assert_eq!(
            ExerciseDetails::try_from(request(Some("run"), Some("half an hour"), None)),
            Err(AddExerciseError::DurationNotANumber)
        );
    }

    #[test]
    fn test_bad_date_becomes_today() {
        let before = CalendarDate::today();
        let details = ExerciseDetails::try_from(request(Some("run"), Some("30"), Some("someday"))).unwrap();
        let after = CalendarDate::today();
        assert!(details.date == before || details.date == after);
    }

    #[test]
    fn test_response_shape() {
        let id = Id::generate();
        let json = serde_json::to_value(ExerciseResponse {
            username: "alice".to_owned(),
            description: "run".to_owned(),
            duration: 30.0,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().into(),
            id,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "alice",
                "description": "run",
                "duration": 30,
                "date": "Sun Jan 15 2023",
                "_id": id.to_string(),
            })
        );
    }

    #[test]
    fn test_fractional_duration_is_echoed() {
        let json = serde_json::to_value(ExerciseResponse {
            username: "alice".to_owned(),
            description: "walk".to_owned(),
            duration: 12.5,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().into(),
            id: Id::generate(),
        })
        .unwrap();
        assert_eq!(json["duration"], serde_json::json!(12.5));
    }
}
