//! Action resource implementation.
//!
//! Actions track asynchronous operations (reboot, resize, transfer, ...)
//! to completion. They are listed account-wide, per droplet, and are the
//! response shape of every droplet/image action POST.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// An action: the status/progress record of an asynchronous operation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Action {
    /// The unique identifier of the action.
    pub id: Option<u64>,

    /// Current status: "in-progress", "completed", or "errored".
    pub status: Option<String>,

    /// The kind of action (e.g., "reboot", "transfer").
    #[serde(rename = "type")]
    pub action_type: Option<String>,

    /// When the action was started.
    pub started_at: Option<DateTime<Utc>>,

    /// When the action completed, if it has.
    pub completed_at: Option<DateTime<Utc>>,

    /// The id of the resource the action operates on.
    pub resource_id: Option<u64>,

    /// The type of the resource the action operates on (e.g., "droplet").
    pub resource_type: Option<String>,

    /// The slug of the region the action runs in.
    pub region_slug: Option<String>,
}

impl Action {
    /// Returns `true` once the action has finished, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_deref(), Some("completed" | "errored"))
    }
}

impl RestResource for Action {
    const NAME: &'static str = "Action";
    const KEY: &'static str = "action";
    const PLURAL: &'static str = "actions";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "actions/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "actions"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["droplet_id"],
            "droplets/{droplet_id}/actions",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["droplet_id"],
            "droplets/{droplet_id}/actions",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["image_id"],
            "images/{image_id}/actions",
        ),
    ];
}
