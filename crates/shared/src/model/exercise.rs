use crate::types::{CalendarDate, Id};

#[cfg(feature = "backend")]
use {
    super::LogFilter,
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: Id,
    pub user_id: Id,
    pub description: String,
    pub duration: f64,
    pub date: CalendarDate,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
pub struct NewExercise {
    pub id: Id,
    pub user_id: Id,
    pub description: String,
    pub duration: f64,
    pub date: CalendarDate,
}

/// The validated, user independent part of an exercise
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDetails {
    pub description: String,
    pub duration: f64,
    pub date: CalendarDate,
}

impl NewExercise {
    pub fn new(user_id: Id, details: ExerciseDetails) -> Self {
        let ExerciseDetails {
            description,
            duration,
            date,
        } = details;
        Self {
            id: Id::generate(),
            user_id,
            description,
            duration,
            date,
        }
    }
}

#[cfg(feature = "backend")]
impl Exercise {
    pub(crate) const COLUMNS: [ExerciseIden; 5] = [
        ExerciseIden::Id,
        ExerciseIden::UserId,
        ExerciseIden::Description,
        ExerciseIden::Duration,
        ExerciseIden::Date,
    ];

    pub fn fetch_by_id(conn: &Connection, id: &Id) -> Result<Option<Exercise>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::COLUMNS)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_row(&*values.as_params(), Exercise::from_row)
            .optional()?;
        Ok(res)
    }

    /// The caller is responsible for checking the user exists first, the
    /// table itself accepts any user id.
    pub fn create(conn: &mut Connection, new_exercise: NewExercise) -> Result<Exercise, rusqlite::Error> {
        let tx = conn.transaction()?;
        let exercise = {
            new_exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, &new_exercise.id)?
                .ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(exercise)
    }

    pub fn fetch_log(conn: &Connection, filter: &LogFilter) -> Result<Vec<Exercise>, rusqlite::Error> {
        let (sql, values) = filter.select().build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }
}
