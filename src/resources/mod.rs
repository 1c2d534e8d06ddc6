//! Resource models for the DigitalOcean API.
//!
//! Plain data structures for each API resource, plus the input payloads the
//! create/update operations accept. Resources are immutable snapshots
//! returned by the server; fields are optional so decoding stays tolerant
//! of provider schema additions and omissions. Input payloads serialize
//! only writable fields, omitting anything unset.

mod action;
mod domain;
mod domain_record;
mod droplet;
mod image;
mod region;
mod size;
mod ssh_key;

pub use action::Action;
pub use domain::{Domain, DomainCreate};
pub use domain_record::{DomainRecord, DomainRecordCreate};
pub use droplet::{Droplet, DropletAction, DropletCreate, Kernel, Networks, NetworkV4, NetworkV6};
pub use image::{Image, ImageAction, ImageRef, ImageUpdate};
pub use region::Region;
pub use size::Size;
pub use ssh_key::{KeyRef, SshKey, SshKeyCreate, SshKeyUpdate};
