use tasks::storage::{TOKEN_KEY, USER_KEY};

use super::*;

fn temp_session() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("nested").join("session.json");
    (dir, path)
}

#[test]
fn missing_file_is_an_empty_session() {
    let (_dir, path) = temp_session();
    let storage = FileStorage::open(&path).expect("open");
    assert_eq!(storage.read(TOKEN_KEY), None);
    assert!(!path.exists());
}

#[test]
fn writes_survive_reopening() {
    let (_dir, path) = temp_session();
    let mut storage = FileStorage::open(&path).expect("open");
    storage.write(TOKEN_KEY, "tok").expect("write");
    storage.write(USER_KEY, r#"{"_id":"u1"}"#).expect("write");

    let reopened = FileStorage::open(&path).expect("reopen");
    assert_eq!(reopened.read(TOKEN_KEY).as_deref(), Some("tok"));
    assert_eq!(reopened.read(USER_KEY).as_deref(), Some(r#"{"_id":"u1"}"#));
}

#[test]
fn removing_last_key_deletes_the_file() {
    let (_dir, path) = temp_session();
    let mut storage = FileStorage::open(&path).expect("open");
    storage.write(TOKEN_KEY, "tok").expect("write");
    storage.write(USER_KEY, "{}").expect("write");

    storage.remove(TOKEN_KEY).expect("remove");
    assert!(path.exists());
    storage.remove(USER_KEY).expect("remove");
    assert!(!path.exists());
    storage.remove(USER_KEY).expect("absent key");
}

#[test]
fn corrupt_file_reads_as_empty() {
    let (dir, _) = temp_session();
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").expect("seed");
    let storage = FileStorage::open(&path).expect("open");
    assert_eq!(storage.read(TOKEN_KEY), None);
    assert_eq!(storage.path(), path.as_path());
}

#[test]
fn logout_leaves_no_session_on_disk() {
    let (_dir, path) = temp_session();
    let mut session = tasks::SessionProvider::new(
        tasks::SessionStore::restore(FileStorage::open(&path).expect("open")),
        tasks::ApiClient::new(tasks::DEFAULT_API_BASE, crate::transport::ReqwestTransport::new().expect("client")),
    );
    session.login(tasks::AuthResponse {
        token: "tok".to_owned(),
        user: tasks::User::default(),
    });
    assert!(path.exists());
    session.logout();
    assert!(!path.exists());
    assert_eq!(session.api().credential(), None);
}
