use const_format::concatcp;
pub mod error;
pub mod payloads;
pub mod response_errors;

pub const API_BASE_PATH: &str = "/api/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:_id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:_id/logs"),
        }
    }

    /// Path with the `:_id` segment filled in
    pub fn path_for(&self, id: &str) -> String {
        self.path().replace(":_id", id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Object::Users.path(), "/api/users");
        assert_eq!(Object::UserExercises.path(), "/api/users/:_id/exercises");
        assert_eq!(Object::UserLogs.path_for("abc"), "/api/users/abc/logs");
    }
}
