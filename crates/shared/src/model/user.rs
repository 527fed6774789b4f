use crate::types::Id;

#[cfg(feature = "backend")]
use {
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct User {
    pub id: Id,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
pub struct NewUser {
    pub id: Id,
    pub username: String,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            id: Id::generate(),
            username: username.into(),
        }
    }
}

#[cfg(feature = "backend")]
impl User {
    const COLUMNS: [UserIden; 2] = [UserIden::Id, UserIden::Username];

    pub fn fetch_by_id(conn: &Connection, id: &Id) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::COLUMNS)
            .from(UserIden::Table)
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_row(&*values.as_params(), User::from_row)
            .optional()?;
        Ok(res)
    }

    /// Every user in whatever order the table hands them back
    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .columns(Self::COLUMNS)
            .from(UserIden::Table)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, rusqlite::Error> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &new_user.id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(user)
    }
}

#[cfg(all(test, feature = "backend"))]
mod test {
    use super::*;
    use crate::model::test_support::memory_connection;

    #[test]
    fn test_create_then_fetch() {
        let mut conn = memory_connection();
        let user = User::create(&mut conn, NewUser::new("alice")).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(User::fetch_by_id(&conn, &user.id).unwrap(), Some(user));
    }

    #[test]
    fn test_fetch_missing_is_none() {
        let conn = memory_connection();
        assert_eq!(User::fetch_by_id(&conn, &Id::generate()).unwrap(), None);
    }

    #[test]
    fn test_usernames_are_not_unique() {
        let mut conn = memory_connection();
        let a = User::create(&mut conn, NewUser::new("sam")).unwrap();
        let b = User::create(&mut conn, NewUser::new("sam")).unwrap();
        assert_ne!(a.id, b.id);

        let all = User::fetch_all(&conn).unwrap();
        assert_eq!(all, vec![a, b]);
    }
}
