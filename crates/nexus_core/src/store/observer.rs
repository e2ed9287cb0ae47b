//! Change notification for views subscribed to the store.

/// Collection or session field touched by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreChange {
    CurrentUser,
    Route,
    Calendar,
    AnnouncementTab,
    Courses,
    Events,
    Enrollments,
    HostelAnnouncements,
    Topics,
    Feedback,
    Questions,
    Meetings,
    OfficeHours,
    Notifications,
    Toasts,
}

/// Handle returned by `AppStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Receives the set of changes after each completed mutation.
///
/// Observers get no store reference; they re-read through the handle their
/// host holds once the mutating call returns.
pub trait StoreObserver: Send + Sync {
    fn on_change(&self, changes: &[StoreChange]);
}
