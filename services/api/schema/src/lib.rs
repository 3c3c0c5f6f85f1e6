//! sea-orm entities owned by the wellbeat API service.

pub mod self_assessments;
pub mod users;
pub mod wellness_events;
