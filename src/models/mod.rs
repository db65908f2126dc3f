//! Cachet API model types.

mod component;
mod component_group;
mod general;
mod incident;
mod incident_update;
mod metric;
mod schedule;
mod subscriber;
mod subscription;

pub use component::*;
pub use component_group::*;
pub use general::*;
pub use incident::*;
pub use incident_update::*;
pub use metric::*;
pub use schedule::*;
pub use subscriber::*;
pub use subscription::*;
