//! Central application state store.
//!
//! # Responsibility
//! - Own every entity collection and session field for one app session.
//! - Apply each mutation and its derived notifications, toasts and cascades
//!   as one unit.
//! - Tell subscribed observers what changed after each mutation.
//!
//! # Invariants
//! - Collections are mutated only through `AppStore` methods; readers get
//!   shared slices.
//! - Add operations prepend (newest first); topics and feedback are keyed
//!   last-write-wins books.
//! - Lookup misses are logged no-ops, never errors.
//! - Observers run after a mutation completes, so they never see a partial
//!   update.

pub mod collections;
pub mod observer;
pub mod provider;

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::model::catalog::{Course, Enrollment, EnrollmentRequest, Event, HostelAnnouncement};
use crate::model::classroom::{AnonymousQuestion, ClassroomTopic, StudentFeedback};
use crate::model::meeting::{Meeting, OfficeHourSlot};
use crate::model::navigation::{AnnouncementTab, Route};
use crate::model::notification::{NotificationDraft, PlatformNotification, Toast, ToastKind};
use crate::model::user::{User, UserPatch, UserRole};
use crate::model::{new_entity_id, EntityId};
use crate::service::notification_deriver::{derive_notifications, StoreEvent};
use crate::service::office_hours::mentorship_meeting;
use crate::service::toast_emitter::{derive_toasts, ToastDraft, ToastEmitter};
use chrono::{DateTime, Duration, Utc};
use collections::{FeedbackBook, TopicBook, TopicUpsert};
use log::{debug, info, warn};
use observer::{StoreChange, StoreObserver, SubscriptionId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Owned copy of every collection and session field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub current_user: Option<User>,
    pub current_route: Route,
    pub is_calendar_open: bool,
    pub announcement_tab: AnnouncementTab,
    pub courses: Vec<Course>,
    pub events: Vec<Event>,
    pub enrollments: Vec<Enrollment>,
    pub hostel_announcements: Vec<HostelAnnouncement>,
    pub topics: Vec<ClassroomTopic>,
    pub feedbacks: Vec<StudentFeedback>,
    pub questions: Vec<AnonymousQuestion>,
    pub meetings: Vec<Meeting>,
    pub office_hour_slots: Vec<OfficeHourSlot>,
    pub notifications: Vec<PlatformNotification>,
    pub toasts: Vec<Toast>,
}

/// Single authority over campus portal state.
pub struct AppStore {
    config: StoreConfig,
    clock: Arc<dyn Clock>,
    current_user: Option<User>,
    current_route: Route,
    calendar_open: bool,
    announcement_tab: AnnouncementTab,
    courses: Vec<Course>,
    events: Vec<Event>,
    enrollments: Vec<Enrollment>,
    hostel_announcements: Vec<HostelAnnouncement>,
    topics: TopicBook,
    feedbacks: FeedbackBook,
    questions: Vec<AnonymousQuestion>,
    meetings: Vec<Meeting>,
    office_hour_slots: Vec<OfficeHourSlot>,
    notifications: Vec<PlatformNotification>,
    toasts: ToastEmitter,
    observers: BTreeMap<SubscriptionId, Arc<dyn StoreObserver>>,
    next_subscription: u64,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl AppStore {
    /// Creates an empty store driven by the wall clock.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an empty store driven by `clock`.
    pub fn with_clock(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        let lifetime = i64::try_from(config.toast_lifetime_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX);
        info!(
            "event=store_init module=store status=ok toast_lifetime_ms={} meeting_date_policy={:?}",
            config.toast_lifetime_ms, config.meeting_date_policy
        );
        Self {
            config,
            clock,
            current_user: None,
            current_route: Route::default(),
            calendar_open: false,
            announcement_tab: AnnouncementTab::default(),
            courses: Vec::new(),
            events: Vec::new(),
            enrollments: Vec::new(),
            hostel_announcements: Vec::new(),
            topics: TopicBook::new(),
            feedbacks: FeedbackBook::new(),
            questions: Vec::new(),
            meetings: Vec::new(),
            office_hour_slots: Vec::new(),
            notifications: Vec::new(),
            toasts: ToastEmitter::new(lifetime),
            observers: BTreeMap::new(),
            next_subscription: 1,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Role of the signed-in user, used for visibility filtering.
    pub fn viewer_role(&self) -> Option<UserRole> {
        self.current_user.as_ref().map(|user| user.role)
    }

    /// Replaces the session user (`None` signs out).
    pub fn set_current_user(&mut self, user: Option<User>) {
        match &user {
            Some(user) => info!(
                "event=session_user_set module=store status=ok user_id={} role={}",
                user.id, user.role
            ),
            None => info!("event=session_user_clear module=store status=ok"),
        }
        self.current_user = user;
        self.publish(&[StoreChange::CurrentUser]);
    }

    /// Merges `patch` into the signed-in user.
    ///
    /// Returns `None` without changing anything when nobody is signed in.
    pub fn update_current_user(&mut self, patch: UserPatch) -> Option<&User> {
        let Some(user) = self.current_user.as_mut() else {
            debug!("event=session_user_update module=store status=skipped reason=no_user");
            return None;
        };
        user.apply(patch);
        info!(
            "event=session_user_update module=store status=ok user_id={}",
            user.id
        );
        self.publish(&[StoreChange::CurrentUser]);
        self.current_user.as_ref()
    }

    pub fn current_route(&self) -> Route {
        self.current_route
    }

    pub fn set_current_route(&mut self, route: Route) {
        self.current_route = route;
        self.publish(&[StoreChange::Route]);
    }

    pub fn is_calendar_open(&self) -> bool {
        self.calendar_open
    }

    pub fn set_calendar_open(&mut self, open: bool) {
        self.calendar_open = open;
        self.publish(&[StoreChange::Calendar]);
    }

    pub fn announcement_tab(&self) -> AnnouncementTab {
        self.announcement_tab
    }

    pub fn set_announcement_tab(&mut self, tab: AnnouncementTab) {
        self.announcement_tab = tab;
        self.publish(&[StoreChange::AnnouncementTab]);
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn hostel_announcements(&self) -> &[HostelAnnouncement] {
        &self.hostel_announcements
    }

    pub fn topics(&self) -> &[ClassroomTopic] {
        self.topics.as_slice()
    }

    pub fn topic_for(&self, subject: &str) -> Option<&ClassroomTopic> {
        self.topics.get(subject)
    }

    /// Feedback in submission order; a resubmission counts as the latest.
    pub fn feedbacks(&self) -> impl Iterator<Item = &StudentFeedback> + '_ {
        self.feedbacks.iter()
    }

    pub fn feedback_for(&self, student_id: &str, subject: &str) -> Option<&StudentFeedback> {
        self.feedbacks.get(student_id, subject)
    }

    pub fn questions(&self) -> &[AnonymousQuestion] {
        &self.questions
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn office_hour_slots(&self) -> &[OfficeHourSlot] {
        &self.office_hour_slots
    }

    /// All notifications, newest first, regardless of target role.
    pub fn notifications(&self) -> &[PlatformNotification] {
        &self.notifications
    }

    /// All live toasts in display order, regardless of target role.
    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    pub fn visible_notifications(&self, viewer: Option<UserRole>) -> Vec<&PlatformNotification> {
        self.notifications
            .iter()
            .filter(|notification| notification.is_visible_to(viewer))
            .collect()
    }

    pub fn unread_count(&self, viewer: Option<UserRole>) -> usize {
        self.notifications
            .iter()
            .filter(|notification| !notification.read && notification.is_visible_to(viewer))
            .count()
    }

    pub fn visible_toasts(&self, viewer: Option<UserRole>) -> Vec<&Toast> {
        self.toasts()
            .iter()
            .filter(|toast| toast.is_visible_to(viewer))
            .collect()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            current_user: self.current_user.clone(),
            current_route: self.current_route,
            is_calendar_open: self.calendar_open,
            announcement_tab: self.announcement_tab,
            courses: self.courses.clone(),
            events: self.events.clone(),
            enrollments: self.enrollments.clone(),
            hostel_announcements: self.hostel_announcements.clone(),
            topics: self.topics.as_slice().to_vec(),
            feedbacks: self.feedbacks.iter().cloned().collect(),
            questions: self.questions.clone(),
            meetings: self.meetings.clone(),
            office_hour_slots: self.office_hour_slots.clone(),
            notifications: self.notifications.clone(),
            toasts: self.toasts.toasts().to_vec(),
        }
    }

    pub fn add_course(&mut self, course: Course) {
        let drafts = derive_notifications(&StoreEvent::CourseAdded(&course));
        info!(
            "event=course_add module=store status=ok course_id={}",
            course.id
        );
        self.courses.insert(0, course);
        self.push_notifications(drafts);
        self.publish(&[StoreChange::Courses, StoreChange::Notifications]);
    }

    pub fn add_event(&mut self, event: Event) {
        let drafts = derive_notifications(&StoreEvent::EventAdded(&event));
        info!(
            "event=campus_event_add module=store status=ok event_id={}",
            event.id
        );
        self.events.insert(0, event);
        self.push_notifications(drafts);
        self.publish(&[StoreChange::Events, StoreChange::Notifications]);
    }

    /// Records a registration and alerts administrators.
    pub fn add_enrollment(&mut self, request: EnrollmentRequest) {
        let enrollment = request.into_enrollment(new_entity_id(), self.clock.now());
        let drafts = derive_notifications(&StoreEvent::EnrollmentAdded(&enrollment));
        info!(
            "event=enrollment_add module=store status=ok enrollment_id={} kind={}",
            enrollment.id, enrollment.kind
        );
        self.enrollments.insert(0, enrollment);
        self.push_notifications(drafts);
        self.publish(&[StoreChange::Enrollments, StoreChange::Notifications]);
    }

    pub fn add_hostel_announcement(&mut self, announcement: HostelAnnouncement) {
        let drafts = derive_notifications(&StoreEvent::HostelAnnouncementAdded(&announcement));
        info!(
            "event=hostel_announcement_add module=store status=ok announcement_id={} wing={:?}",
            announcement.id, announcement.wing
        );
        self.hostel_announcements.insert(0, announcement);
        let notified = self.push_notifications(drafts);
        if notified {
            self.publish(&[StoreChange::HostelAnnouncements, StoreChange::Notifications]);
        } else {
            self.publish(&[StoreChange::HostelAnnouncements]);
        }
    }

    /// Sets the current topic for a subject, replacing any previous one in
    /// place, and tells students.
    pub fn update_topic(&mut self, topic: ClassroomTopic) {
        let drafts = derive_notifications(&StoreEvent::TopicUpdated(&topic));
        let topic_id = topic.id.clone();
        let outcome = match self.topics.upsert(topic) {
            TopicUpsert::Replaced(_) => "replaced",
            TopicUpsert::Appended => "appended",
        };
        info!(
            "event=topic_update module=store status=ok topic_id={} outcome={}",
            topic_id, outcome
        );
        self.push_notifications(drafts);
        self.publish(&[StoreChange::Topics, StoreChange::Notifications]);
    }

    /// Stores a student's sentiment for a subject, superseding their previous
    /// submission, and warns educators.
    pub fn submit_feedback(&mut self, feedback: StudentFeedback) {
        let drafts = derive_notifications(&StoreEvent::FeedbackSubmitted(&feedback));
        let replaced = self.feedbacks.submit(feedback).is_some();
        info!(
            "event=feedback_submit module=store status=ok replaced={} total={}",
            replaced,
            self.feedbacks.len()
        );
        self.push_notifications(drafts);
        self.publish(&[StoreChange::Feedback, StoreChange::Notifications]);
    }

    pub fn add_question(&mut self, question: AnonymousQuestion) {
        let drafts = derive_notifications(&StoreEvent::QuestionAdded(&question));
        info!(
            "event=question_add module=store status=ok question_id={}",
            question.id
        );
        self.questions.insert(0, question);
        self.push_notifications(drafts);
        self.publish(&[StoreChange::Questions, StoreChange::Notifications]);
    }

    /// Flips a question between `high` and `normal` priority.
    pub fn toggle_question_priority(&mut self, id: &str) {
        let Some(question) = self.questions.iter_mut().find(|question| question.id == id) else {
            warn!(
                "event=question_priority_toggle module=store status=skipped reason=not_found question_id={}",
                id
            );
            return;
        };
        question.toggle_priority();
        info!(
            "event=question_priority_toggle module=store status=ok question_id={} priority={:?}",
            id,
            question.effective_priority()
        );
        self.publish(&[StoreChange::Questions]);
    }

    pub fn add_meeting(&mut self, meeting: Meeting) {
        let drafts = derive_notifications(&StoreEvent::MeetingAdded(&meeting));
        info!(
            "event=meeting_add module=store status=ok meeting_id={} kind={:?}",
            meeting.id, meeting.kind
        );
        self.meetings.insert(0, meeting);
        self.push_notifications(drafts);
        self.publish(&[StoreChange::Meetings, StoreChange::Notifications]);
    }

    /// Publishes a new open office-hour slot.
    pub fn add_office_hour_slot(&mut self, slot: OfficeHourSlot) {
        info!(
            "event=office_hour_add module=store status=ok slot_id={}",
            slot.id
        );
        self.office_hour_slots.push(slot);
        self.publish(&[StoreChange::OfficeHours]);
    }

    /// Binds a student to an available slot.
    ///
    /// Unknown ids and slots that are no longer available are left untouched.
    pub fn request_office_hour(&mut self, id: &str, student_name: &str, reason: Option<String>) {
        let Some(slot) = self.office_hour_slots.iter_mut().find(|slot| slot.id == id) else {
            warn!(
                "event=office_hour_request module=store status=skipped reason=not_found slot_id={}",
                id
            );
            return;
        };
        if !slot.request(student_name, reason) {
            warn!(
                "event=office_hour_request module=store status=skipped reason=not_available slot_id={} slot_status={:?}",
                id, slot.status
            );
            return;
        }
        info!(
            "event=office_hour_request module=store status=ok slot_id={}",
            id
        );
        self.publish(&[StoreChange::OfficeHours]);
    }

    /// Books a slot. A slot with a bound student also gets a mentorship
    /// meeting, a student notification and two toasts.
    ///
    /// Unknown ids are ignored. Re-approving a booked slot repeats nothing.
    pub fn approve_office_hour(&mut self, id: &str) {
        let Some(slot) = self.office_hour_slots.iter_mut().find(|slot| slot.id == id) else {
            warn!(
                "event=office_hour_approve module=store status=skipped reason=not_found slot_id={}",
                id
            );
            return;
        };
        if !slot.book() {
            info!(
                "event=office_hour_approve module=store status=skipped reason=already_booked slot_id={}",
                id
            );
            return;
        }
        let slot = slot.clone();

        let now = self.clock.now();
        let meeting = mentorship_meeting(&slot, &self.config, now.date_naive());
        let event = StoreEvent::OfficeHourApproved {
            slot: &slot,
            meeting: meeting.as_ref(),
        };
        let notification_drafts = derive_notifications(&event);
        let toast_drafts = derive_toasts(&event);

        let Some(meeting) = meeting else {
            info!(
                "event=office_hour_approve module=store status=ok slot_id={} cascade=false",
                id
            );
            self.publish(&[StoreChange::OfficeHours]);
            return;
        };

        info!(
            "event=office_hour_approve module=store status=ok slot_id={} cascade=true meeting_id={} meeting_date={}",
            id, meeting.id, meeting.date
        );
        // Inserted directly: the approval notification replaces the generic
        // "Meeting Scheduled" one.
        self.meetings.insert(0, meeting);
        self.push_notifications(notification_drafts);
        for draft in toast_drafts {
            self.toasts.emit(draft, now);
        }
        self.publish(&[
            StoreChange::OfficeHours,
            StoreChange::Meetings,
            StoreChange::Notifications,
            StoreChange::Toasts,
        ]);
    }

    /// Prepends a notification stamped with a fresh id and the current time.
    pub fn add_notification(&mut self, draft: NotificationDraft) {
        self.push_notifications(vec![draft]);
        self.publish(&[StoreChange::Notifications]);
    }

    /// Marks every notification read, whatever its target role.
    pub fn mark_notifications_read(&mut self) {
        let mut flipped = 0usize;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            flipped += 1;
        }
        info!(
            "event=notifications_mark_read module=store status=ok flipped={}",
            flipped
        );
        if flipped > 0 {
            self.publish(&[StoreChange::Notifications]);
        }
    }

    /// Shows a toast that expires after the configured lifetime.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        target_role: Option<UserRole>,
    ) -> EntityId {
        let now = self.clock.now();
        let id = self
            .toasts
            .emit(ToastDraft::new(message, kind, target_role), now);
        self.publish(&[StoreChange::Toasts]);
        id
    }

    /// Dismisses a toast. Unknown or already removed ids are a no-op.
    pub fn remove_toast(&mut self, id: &str) {
        if self.toasts.remove(id) {
            debug!("event=toast_remove module=store status=ok toast_id={}", id);
            self.publish(&[StoreChange::Toasts]);
        }
    }

    /// Removes toasts whose lifetime has elapsed. Hosts call this from their
    /// event loop, at the latest by `next_toast_expiry()`.
    pub fn expire_toasts(&mut self) -> Vec<EntityId> {
        let expired = self.toasts.expire_due(self.clock.now());
        if !expired.is_empty() {
            debug!(
                "event=toast_expire module=store status=ok count={}",
                expired.len()
            );
            self.publish(&[StoreChange::Toasts]);
        }
        expired
    }

    pub fn next_toast_expiry(&self) -> Option<DateTime<Utc>> {
        self.toasts.next_expiry()
    }

    /// Registers an observer that is told about every completed mutation.
    pub fn subscribe(&mut self, observer: Arc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    fn push_notifications(&mut self, drafts: Vec<NotificationDraft>) -> bool {
        if drafts.is_empty() {
            return false;
        }
        let now = self.clock.now();
        for draft in drafts {
            let target = draft.target_role;
            let notification = draft.into_notification(new_entity_id(), now);
            debug!(
                "event=notification_add module=store status=ok notification_id={} kind={:?} target_role={:?}",
                notification.id, notification.kind, target
            );
            self.notifications.insert(0, notification);
        }
        true
    }

    fn publish(&self, changes: &[StoreChange]) {
        for observer in self.observers.values() {
            observer.on_change(changes);
        }
    }
}

/// Populates `store` directly; used by seeding, bypasses derivations.
pub(crate) struct SeedWriter<'a> {
    store: &'a mut AppStore,
}

impl<'a> SeedWriter<'a> {
    pub(crate) fn new(store: &'a mut AppStore) -> Self {
        Self { store }
    }

    pub(crate) fn courses(&mut self, courses: Vec<Course>) {
        self.store.courses = courses;
    }

    pub(crate) fn events(&mut self, events: Vec<Event>) {
        self.store.events = events;
    }

    pub(crate) fn hostel_announcements(&mut self, announcements: Vec<HostelAnnouncement>) {
        self.store.hostel_announcements = announcements;
    }

    pub(crate) fn topics(&mut self, topics: Vec<ClassroomTopic>) {
        for topic in topics {
            self.store.topics.upsert(topic);
        }
    }

    pub(crate) fn meetings(&mut self, meetings: Vec<Meeting>) {
        self.store.meetings = meetings;
    }

    pub(crate) fn office_hour_slots(&mut self, slots: Vec<OfficeHourSlot>) {
        self.store.office_hour_slots = slots;
    }

    pub(crate) fn notification(&mut self, draft: NotificationDraft, timestamp: DateTime<Utc>, id: &str) {
        self.store
            .notifications
            .push(draft.into_notification(id.to_string(), timestamp));
    }
}
