//! Core state and domain rules for the Nexus campus portal.
//! This crate is the single source of truth for portal invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{MeetingDatePolicy, StoreConfig};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{
    Course, Enrollment, EnrollmentKind, EnrollmentRequest, Event, HostelAnnouncement, HostelWing,
};
pub use model::classroom::{
    AnonymousQuestion, ClassroomTopic, FeedbackStatus, QuestionPriority, StudentFeedback,
};
pub use model::meeting::{Meeting, MeetingKind, OfficeHourSlot, SlotStatus};
pub use model::navigation::{AnnouncementTab, Route};
pub use model::notification::{
    NotificationDraft, NotificationKind, PlatformNotification, Toast, ToastKind,
};
pub use model::preference::Theme;
pub use model::user::{AdminType, User, UserPatch, UserRole};
pub use model::{new_entity_id, EntityId};
pub use repo::preference_repo::{
    PreferenceRepository, RepoError, RepoResult, SqlitePreferenceRepository,
};
pub use seed::demo_store;
pub use service::calendar::{calendar_entries, CalendarEntry, CalendarEntryKind};
pub use service::search::{search_catalog, SearchHit, SearchHitKind};
pub use service::theme::ThemeService;
pub use session::auth::{AuthError, AuthFailure, AuthIdentity, AuthProvider, AuthResult};
pub use session::service::{log_out, SessionService, SignUpRequest};
pub use store::observer::{StoreChange, StoreObserver, SubscriptionId};
pub use store::provider::{StoreError, StoreProvider, StoreResult};
pub use store::{AppStore, StoreSnapshot};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
