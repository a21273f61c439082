//! Core types for the ticket-synth framework.
//!
//! This crate provides the foundational types shared by the generator,
//! the CSV exporter and the validation pipeline:
//!
//! - [`Ticket`] - One fully populated synthetic support record
//! - [`Group`] / [`Classroom`] - A/B test arms and their disjoint classroom pools
//! - Categorical fields ([`Status`], [`Priority`], [`Category`], ...) as tagged enums
//! - [`WeightTable`] - A fixed-size label/weight table validated at construction
//! - [`TicketCatalog`] - The reference distributions and name pools
//!
//! # Architecture
//!
//! ```text
//! ticket-core (this crate)
//!    │
//!    ├─── ticket-generator   (draws Tickets from the TicketCatalog)
//!    ├─── ticket-export      (writes Tickets to CSV)
//!    └─── ticket-validation  (reads aggregated CSV, runs the A/B checks)
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use ticket_core::{Group, TicketCatalog};
//!
//! let catalog = TicketCatalog::standard().unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let category = catalog.sample_category(Group::A, &mut rng);
//! assert!(catalog.category_labels(Group::A).contains(&category));
//! ```

pub mod catalog;
pub mod ticket;
pub mod types;
pub mod weights;

// Re-exports for convenience
pub use catalog::{
    TicketCatalog, DEPARTMENTS, REPORTER_INITIALS, REPORTER_SURNAMES, RESOLUTION_LABEL,
    SUPPORT_STAFF,
};
pub use ticket::{round_hours, Environment, Ticket, TicketKey, Version};
pub use types::{
    Category, Classroom, Complexity, Component, CpuVendor, Group, Impact, Intervention, IssueType,
    Label, Priority, Source, Status, Watchers, CLASSROOMS_PER_GROUP,
};
pub use weights::{WeightTable, WeightTableError};
