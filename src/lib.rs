//! # courseplan
//!
//! Orders courses so that every prerequisite is taken first. The ordering is
//! deterministic: ties go to whichever course became eligible first, and
//! courses with no prerequisites start in registration order. Cyclic
//! prerequisites produce [`Order::CycleDetected`] instead of a partial order.

pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod models;

pub use crate::config::{PlanSpec, Requisite};
pub use crate::core::CoursePlan;
pub use crate::error::{PlanError, Result};
pub use crate::models::Order;
