//! Synthetic support-ticket generator for the classroom multimedia A/B test.
//!
//! This crate provides the [`TicketGenerator`] which produces a deterministic
//! sequence of [`Ticket`](ticket_core::Ticket) records for a requested total
//! and seed. The generator uses a seeded RNG scoped to one call, so the same
//! `(count, seed)` pair always yields the same tickets.
//!
//! # Architecture
//!
//! ```text
//! (count, seed)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   TicketGenerator    │
//! │                      │
//! │  - TicketCatalog     │
//! │  - CreationWindow    │
//! │  - rng (StdRng)      │
//! └──────────┬───────────┘
//!            │  60% group A, then 40% group B,
//!            │  ids from 1001, sorted by created_at
//!            ▼
//!      Vec<Ticket>
//! ```
//!
//! # Example
//!
//! ```rust
//! use ticket_core::Group;
//! use ticket_generator::generate;
//!
//! let tickets = generate(10, 42).unwrap();
//! assert_eq!(tickets.len(), 10);
//! assert_eq!(tickets.iter().filter(|t| t.group == Group::A).count(), 6);
//! ```
//!
//! # Draw order
//!
//! Randomness is consumed per ticket in a fixed order; see
//! [`TicketGenerator::next_ticket`]. Changing the order changes every
//! generated dataset for a given seed.

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{
    generate, CreationWindow, GeneratorError, GroupSplit, TicketGenerator, FIRST_TICKET_ID,
};
