//! Session-level navigation state.

use super::user::UserRole;
use serde::{Deserialize, Serialize};

/// Top-level portal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Home,
    Classroom,
    Announcements,
    Meetings,
    Dashboard,
    Profile,
}

const STUDENT_ROUTES: &[Route] = &[Route::Home, Route::Classroom, Route::Announcements];
const EDUCATOR_ROUTES: &[Route] = &[Route::Home, Route::Classroom, Route::Meetings];
const ADMIN_ROUTES: &[Route] = &[Route::Dashboard];

impl Route {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Classroom => "Classroom",
            Self::Announcements => "Announcements",
            Self::Meetings => "Meetings",
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile",
        }
    }

    /// Navigation entries shown to `role`. `Profile` is reachable by every
    /// role but is not a navigation entry.
    pub fn navigation_for(role: UserRole) -> &'static [Route] {
        match role {
            UserRole::Student => STUDENT_ROUTES,
            UserRole::Educator => EDUCATOR_ROUTES,
            UserRole::Admin => ADMIN_ROUTES,
        }
    }
}

/// Active tab of the student announcements page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnnouncementTab {
    #[default]
    Courses,
    Hostels,
    Events,
}
