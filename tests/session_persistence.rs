mod common;

use common::user;
use tempfile::TempDir;
use userdeck::session::{FileTokenStorage, SessionStore};

#[test]
fn token_survives_reopening_the_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("userdeck").join("token");

    let mut session = SessionStore::open(Box::new(FileTokenStorage::new(path.clone()))).unwrap();
    assert!(!session.is_authenticated());
    session.set_token("QpwL5tke4Pnpja7X4".to_string()).unwrap();
    drop(session);

    let reopened = SessionStore::open(Box::new(FileTokenStorage::new(path))).unwrap();
    assert_eq!(reopened.token(), Some("QpwL5tke4Pnpja7X4"));
    assert!(reopened.users().is_empty());
}

#[test]
fn logout_removes_token_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "QpwL5tke4Pnpja7X4\n").unwrap();

    let mut session = SessionStore::open(Box::new(FileTokenStorage::new(path.clone()))).unwrap();
    assert_eq!(session.token(), Some("QpwL5tke4Pnpja7X4"));
    session.set_users(vec![user(1, "George", "Bluth")]);

    session.logout().unwrap();

    assert!(!path.exists());
    assert!(!session.is_authenticated());
    assert!(session.users().is_empty());
}

#[test]
fn unwritable_location_is_reported_and_token_unchanged() {
    let dir = TempDir::new().unwrap();
    let parent = dir.path().join("sub");
    let path = parent.join("token");

    let mut session = SessionStore::open(Box::new(FileTokenStorage::new(path))).unwrap();
    assert!(!session.is_authenticated());

    // A regular file now sits where the token directory has to go.
    std::fs::write(&parent, "").unwrap();
    let err = session.set_token("abc".to_string()).unwrap_err();

    assert!(err.to_string().contains("Token storage"));
    assert!(!session.is_authenticated());
}
