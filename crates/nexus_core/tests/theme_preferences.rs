use nexus_core::db::{open_db, open_db_in_memory};
use nexus_core::service::theme::THEME_PREFERENCE_KEY;
use nexus_core::{
    PreferenceRepository, RepoError, SqlitePreferenceRepository, Theme, ThemeService,
};

#[test]
fn missing_theme_reads_as_light() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));

    assert_eq!(service.load().unwrap(), Theme::Light);
}

#[test]
fn toggle_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nexus.db");

    {
        let conn = open_db(&path).unwrap();
        let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));
        assert_eq!(service.toggle().unwrap(), Theme::Dark);
    }

    let conn = open_db(&path).unwrap();
    let service = ThemeService::new(SqlitePreferenceRepository::new(&conn));
    assert_eq!(service.load().unwrap(), Theme::Dark);
    assert_eq!(service.toggle().unwrap(), Theme::Light);
    assert_eq!(service.load().unwrap(), Theme::Light);
}

#[test]
fn unrecognized_stored_value_falls_back_to_light() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);
    repo.set(THEME_PREFERENCE_KEY, "sepia").unwrap();

    let service = ThemeService::new(repo);
    assert_eq!(service.load().unwrap(), Theme::Light);
}

#[test]
fn set_overwrites_and_remove_reports_presence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);

    repo.set("sidebar", "collapsed").unwrap();
    repo.set("sidebar", "expanded").unwrap();
    assert_eq!(repo.get("sidebar").unwrap().as_deref(), Some("expanded"));

    assert!(repo.remove("sidebar").unwrap());
    assert!(!repo.remove("sidebar").unwrap());
    assert_eq!(repo.get("sidebar").unwrap(), None);
}

#[test]
fn blank_key_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::new(&conn);

    let err = repo.set("   ", "dark").unwrap_err();
    assert!(matches!(err, RepoError::InvalidKey(_)));
}
