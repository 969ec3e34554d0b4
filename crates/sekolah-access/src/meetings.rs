//! Meeting edit/delete authorisation.
//!
//! Rules, first match wins:
//!
//! 1. meeting or profile missing (or lookup failed) → deny
//! 2. superadmin → allow
//! 3. the caller created the meeting → allow, whatever their role
//! 4. admin whose scope covers the meeting's location → allow
//! 5. anyone else → deny; sharing a class with the creator is not enough

use crate::store::{MeetingStore, ProfileStore};
use sekolah_core::StoreError;
use sekolah_models::{MeetingId, MeetingOrgChain, Role, UserId, UserProfile};
use sekolah_observability::{track_access_decision, track_store_error};
use std::fmt::Display;
use tracing::{debug, instrument, warn};

/// Whether `user_id` may edit or delete `meeting_id`.
///
/// Both records are fetched concurrently. Lookup failures are logged and
/// count as "not found"; no error ever reaches the caller.
#[instrument(skip(meetings, profiles))]
pub async fn can_edit_or_delete_meeting<M, P>(
    meetings: &M,
    profiles: &P,
    meeting_id: MeetingId,
    user_id: UserId,
) -> bool
where
    M: MeetingStore,
    P: ProfileStore,
{
    let (meeting, profile) = tokio::join!(
        meetings.get_meeting_with_org_chain(meeting_id),
        profiles.get_profile_by_id(user_id),
    );

    let (Some(meeting), Some(profile)) = (
        found(meeting, "meeting", meeting_id),
        found(profile, "profile", user_id),
    ) else {
        track_access_decision("edit_meeting", false);
        return false;
    };

    let allowed = evaluate_meeting_edit(user_id, &profile, &meeting);
    debug!(role = %profile.role, allowed, "Meeting edit decision");
    track_access_decision("edit_meeting", allowed);
    allowed
}

/// The rule evaluation of [`can_edit_or_delete_meeting`] over loaded records.
pub fn evaluate_meeting_edit(
    user_id: UserId,
    profile: &UserProfile,
    meeting: &MeetingOrgChain,
) -> bool {
    match profile.role {
        Role::Superadmin => true,
        _ if meeting.teacher_id == user_id => true,
        Role::Admin => admin_covers_meeting(profile, meeting),
        Role::Teacher | Role::Student | Role::MaterialCoordinator => false,
    }
}

/// Admin scope check against the meeting's derived location.
///
/// The three tier checks are independent and any match allows. On a profile
/// with a consistent chain at most one of them can apply; a broken chain is
/// logged, and the checks still run as written.
pub fn admin_covers_meeting(admin: &UserProfile, meeting: &MeetingOrgChain) -> bool {
    if !admin.has_consistent_chain() {
        warn!(
            user_id = %admin.id,
            "Admin profile has an inconsistent daerah/desa/kelompok chain"
        );
    }

    let daerah_admin = admin.daerah_id.is_some()
        && admin.desa_id.is_none()
        && meeting.daerah_id == admin.daerah_id;
    let desa_admin = admin.desa_id.is_some()
        && admin.kelompok_id.is_none()
        && meeting.desa_id == admin.desa_id;
    let kelompok_admin = admin.kelompok_id.is_some() && meeting.kelompok_id == admin.kelompok_id;

    daerah_admin || desa_admin || kelompok_admin
}

fn found<T>(
    result: Result<Option<T>, StoreError>,
    what: &'static str,
    id: impl Display,
) -> Option<T> {
    match result {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            debug!(%id, "{what} not found");
            None
        }
        Err(e) => {
            warn!(%id, error = %e, "{what} lookup failed, treating as not found");
            track_store_error(what);
            None
        }
    }
}
