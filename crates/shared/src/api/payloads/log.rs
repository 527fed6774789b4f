use serde::{Deserialize, Serialize};

use crate::{
    model::Exercise,
    types::{serialize_number, CalendarDate, Id},
};

/// Raw query string of a log request, normalized later by `LogFilter`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_number")]
    pub duration: f64,
    pub date: CalendarDate,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: Id,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    /// `count` always matches the entries actually returned
    pub fn new<I: IntoIterator<Item = Exercise>>(username: String, id: Id, exercises: I) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            username,
            count: log.len(),
            id,
            log,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_count_matches_log() {
        let user_id = Id::generate();
        let exercise = Exercise {
            id: Id::generate(),
            user_id,
            description: "run".to_owned(),
            duration: 30.0,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().into(),
        };

        let res = LogResponse::new("alice".to_owned(), user_id, vec![exercise.clone(), exercise]);
        assert_eq!(res.count, 2);
        assert_eq!(res.log.len(), 2);

        let empty = LogResponse::new("alice".to_owned(), user_id, Vec::new());
        assert_eq!(empty.count, 0);
    }

    #[test]
    fn test_response_shape() {
        let user_id = Id::generate();
        let res = LogResponse::new(
            "alice".to_owned(),
            user_id,
            vec![Exercise {
                id: Id::generate(),
                user_id,
                description: "run".to_owned(),
                duration: 30.0,
                date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap().into(),
            }],
        );
        assert_eq!(
            serde_json::to_value(res).unwrap(),
            serde_json::json!({
                "username": "alice",
                "count": 1,
                "_id": user_id.to_string(),
                "log": [{ "description": "run", "duration": 30, "date": "Sun Jan 15 2023" }],
            })
        );
    }
}
