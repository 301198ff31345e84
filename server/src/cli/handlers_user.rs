// server/src/cli/handlers_user.rs
use lib::AuthService;
use models::User;
use crate::cli::handlers_utils::render_error;

pub fn login_message(user: &User) -> String {
    format!("Login successful. Welcome, {} ({}).", user.username, user.role)
}

pub fn handle_register(auth: &AuthService, username: &str, password: &str, role: &str) -> String {
    match auth.register(username, password, role) {
        Ok(user) => format!("User {} registered with role {}.", user.username, user.role),
        Err(e) => render_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::{AppConfig, Database};
    use tempfile::tempdir;

    fn open_db(dir: &std::path::Path) -> Database {
        let mut config = AppConfig::with_data_directory(dir);
        config.bcrypt_cost = 4;
        Database::open(config).unwrap()
    }

    #[test]
    fn register_then_login() {
        let dir = tempdir().unwrap();
        let db = open_db(dir.path());
        let auth = db.auth_service();

        assert_eq!(handle_register(&auth, "nurse2", "Pass@1", "Nurse"), "User nurse2 registered with role Nurse.");
        let user = auth.authenticate("nurse2", "Pass@1").unwrap().unwrap();
        assert_eq!(login_message(&user), "Login successful. Welcome, nurse2 (Nurse).");
    }

    #[test]
    fn register_failures_render_as_errors() {
        let dir = tempdir().unwrap();
        let auth = open_db(dir.path()).auth_service();

        assert!(handle_register(&auth, "x", "y", "nurse").starts_with("ERROR: Invalid role"));
        assert!(handle_register(&auth, "admin1", "y", "Admin").starts_with("ERROR: Username already exists"));
        assert!(handle_register(&auth, " ", "y", "Admin").starts_with("ERROR: Validation error"));
    }
}
