/// Tools for the activity feed: listing, read flags, and clearing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ActivityId, ActivityKind};
use crate::store::ActivityLog;

/// One feed entry as presented to the client
#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: ActivityId,
    pub kind: ActivityKind,
    pub habit_name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Response from listing the feed
#[derive(Debug, Serialize)]
pub struct ListActivitiesResponse {
    pub success: bool,
    pub activities: Vec<ActivityView>,
    pub unread_count: usize,
}

/// The whole feed, newest first, with the live unread counter
pub fn list_activities(log: &ActivityLog) -> ListActivitiesResponse {
    let activities = log
        .activities()
        .iter()
        .map(|a| ActivityView {
            id: a.id,
            kind: a.kind,
            habit_name: a.habit_name.clone(),
            message: a.message.clone(),
            timestamp: a.timestamp,
            read: a.read,
        })
        .collect();

    ListActivitiesResponse {
        success: true,
        activities,
        unread_count: log.unread_count(),
    }
}

/// Parameters for marking one entry read
#[derive(Debug, Deserialize)]
pub struct MarkReadParams {
    pub activity_id: u64,
}

/// Response shared by the feed mutations
#[derive(Debug, Serialize)]
pub struct ActivityMutationResponse {
    pub success: bool,
    pub message: String,
    pub unread_count: usize,
}

/// Mark one entry as read
pub fn mark_activity_read(log: &mut ActivityLog, params: MarkReadParams) -> ActivityMutationResponse {
    let found = log.mark_as_read(ActivityId(params.activity_id));
    ActivityMutationResponse {
        success: found,
        message: if found {
            "Marked as read".to_string()
        } else {
            format!("No activity with ID {}", params.activity_id)
        },
        unread_count: log.unread_count(),
    }
}

/// Mark every entry as read
pub fn mark_all_activities_read(log: &mut ActivityLog) -> ActivityMutationResponse {
    log.mark_all_as_read();
    ActivityMutationResponse {
        success: true,
        message: "All activities marked as read".to_string(),
        unread_count: log.unread_count(),
    }
}

/// Empty the feed
pub fn clear_activities(log: &mut ActivityLog) -> ActivityMutationResponse {
    log.clear();
    ActivityMutationResponse {
        success: true,
        message: "Activity history cleared".to_string(),
        unread_count: 0,
    }
}
