use crate::{
    api::payloads::LogQuery,
    types::{CalendarDate, Id, Limit},
};

#[cfg(feature = "backend")]
use {
    super::{Exercise, ExerciseIden},
    sea_query::{Alias, Expr, Order, Query, SelectStatement},
};

/// Which of a user's exercises to return. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct LogFilter {
    pub user_id: Id,
    pub from: Option<CalendarDate>,
    pub to: Option<CalendarDate>,
    pub limit: Limit,
}

impl LogFilter {
    /// Bounds that don't parse are dropped rather than rejected
    pub fn new(user_id: Id, query: &LogQuery) -> Self {
        Self {
            user_id,
            from: query.from.as_deref().and_then(CalendarDate::parse),
            to: query.to.as_deref().and_then(CalendarDate::parse),
            limit: Limit::parse(query.limit.as_deref()),
        }
    }

    #[cfg(feature = "backend")]
    pub fn select(&self) -> SelectStatement {
        let mut query = Query::select();
        query
            .columns(Exercise::COLUMNS)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::UserId).eq(self.user_id))
            .and_where_option(self.from.map(|from| Expr::col(ExerciseIden::Date).gte(from)))
            .and_where_option(self.to.map(|to| Expr::col(ExerciseIden::Date).lte(to)))
            // Insertion order
            .order_by(Alias::new("rowid"), Order::Asc);

        if let Some(limit) = self.limit.as_option() {
            query.limit(limit);
        }

        query
    }
}
