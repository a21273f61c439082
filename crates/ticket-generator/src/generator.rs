//! Main ticket generator.

use crate::generators::attributes::{
    generate_environment, generate_linked_issue, generate_version,
};
use crate::generators::text::{generate_description, generate_summary, SUPPORT_COMMENTS};
use crate::generators::timestamp::{
    delta_hours, generate_created_at, generate_due_date, generate_resolution_delay,
    generate_update_delay,
};
use crate::generators::{gated, pick};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ticket_core::{
    round_hours, Group, Ticket, TicketCatalog, TicketKey, WeightTableError, DEPARTMENTS,
    SUPPORT_STAFF,
};
use tracing::{debug, info};

/// Numeric id of the first generated ticket.
pub const FIRST_TICKET_ID: u32 = 1001;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Requested ticket count is zero
    #[error("Ticket count must be positive, got {0}")]
    InvalidCount(u64),

    /// Requested ticket count does not fit the id space
    #[error("Ticket count {0} exceeds the id space")]
    CountTooLarge(u64),

    /// A weight table failed construction-time validation
    #[error("Catalog error: {0}")]
    Catalog(#[from] WeightTableError),

    /// Creation window dates are not valid calendar dates
    #[error("Invalid creation window")]
    InvalidWindow,
}

/// Date range tickets are created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationWindow {
    /// First day, midnight
    pub start: NaiveDate,
    /// Last day offset from `start`, inclusive
    pub days: i64,
}

impl CreationWindow {
    /// 2025-10-01 through 2025-10-30.
    pub fn reference() -> Result<Self, GeneratorError> {
        Self::between(2025, (10, 1), (10, 30))
    }

    fn between(year: i32, from: (u32, u32), to: (u32, u32)) -> Result<Self, GeneratorError> {
        let start =
            NaiveDate::from_ymd_opt(year, from.0, from.1).ok_or(GeneratorError::InvalidWindow)?;
        let end = NaiveDate::from_ymd_opt(year, to.0, to.1).ok_or(GeneratorError::InvalidWindow)?;
        let days = (end - start).num_days();
        if days < 0 {
            return Err(GeneratorError::InvalidWindow);
        }
        Ok(Self { start, days })
    }

    pub fn end(&self) -> NaiveDate {
        self.start + chrono::TimeDelta::days(self.days)
    }
}

/// Per-group ticket counts for a requested total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSplit {
    pub group_a: u64,
    pub group_b: u64,
}

impl GroupSplit {
    /// `floor(total * 0.6)` for A and `floor(total * 0.4)` for B, in exact
    /// integer arithmetic.
    pub fn for_total(total: u64) -> Self {
        Self {
            group_a: scale(total, 3, 5),
            group_b: scale(total, 2, 5),
        }
    }

    pub fn total(&self) -> u64 {
        self.group_a + self.group_b
    }

    pub fn count(&self, group: Group) -> u64 {
        match group {
            Group::A => self.group_a,
            Group::B => self.group_b,
        }
    }
}

/// `floor(value * num / den)` without overflowing.
fn scale(value: u64, num: u64, den: u64) -> u64 {
    value / den * num + value % den * num / den
}

/// Generator that produces deterministic synthetic tickets.
///
/// Holds only validated, read-only configuration. Each call to
/// [`generate`](Self::generate) seeds its own RNG, so one generator can serve
/// any number of independent calls.
#[derive(Debug, Clone)]
pub struct TicketGenerator {
    catalog: TicketCatalog,
    window: CreationWindow,
}

impl TicketGenerator {
    /// Create a generator with the reference catalog and creation window.
    pub fn new() -> Result<Self, GeneratorError> {
        Ok(Self::with_catalog(
            TicketCatalog::standard()?,
            CreationWindow::reference()?,
        ))
    }

    pub fn with_catalog(catalog: TicketCatalog, window: CreationWindow) -> Self {
        Self { catalog, window }
    }

    pub fn catalog(&self) -> &TicketCatalog {
        &self.catalog
    }

    pub fn window(&self) -> CreationWindow {
        self.window
    }

    /// Generate `count` tickets from a fresh `StdRng` seeded with `seed`.
    pub fn generate(&self, count: u64, seed: u64) -> Result<Vec<Ticket>, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(count, &mut rng)
    }

    /// Generate `count` tickets drawing from `rng`.
    ///
    /// Group A tickets are generated first, then group B, with sequential
    /// ids from [`FIRST_TICKET_ID`]. The result is stably sorted by
    /// `created_at`, so ties keep generation order.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        count: u64,
        rng: &mut R,
    ) -> Result<Vec<Ticket>, GeneratorError> {
        if count == 0 {
            return Err(GeneratorError::InvalidCount(count));
        }
        let split = GroupSplit::for_total(count);
        let capacity =
            usize::try_from(split.total()).map_err(|_| GeneratorError::CountTooLarge(count))?;
        if split.total() > u64::from(u32::MAX - FIRST_TICKET_ID) {
            return Err(GeneratorError::CountTooLarge(count));
        }

        info!(
            "Generating {} tickets ({} in group A, {} in group B)",
            split.total(),
            split.group_a,
            split.group_b
        );

        let mut tickets = Vec::with_capacity(capacity);
        let mut id = FIRST_TICKET_ID;

        for group in Group::ALL.iter().copied() {
            for _ in 0..split.count(group) {
                tickets.push(self.next_ticket(rng, TicketKey(id), group));
                id += 1;
            }
            debug!("Generated {} tickets for group {}", split.count(group), group);
        }

        tickets.sort_by_key(|ticket| ticket.created_at);

        Ok(tickets)
    }

    /// Generate one ticket.
    ///
    /// Draw order:
    /// 1. classroom
    /// 2. created day, hour, minute
    /// 3. status
    /// 4. resolution hours and minutes (resolved only)
    /// 5. update offset (unresolved only)
    /// 6. category
    /// 7. reporter
    /// 8. department
    /// 9. issue type
    /// 10. summary template
    /// 11. description (template, phone, report time, fillers)
    /// 12. priority
    /// 13. component
    /// 14. affects version
    /// 15. fix version (resolved only)
    /// 16. assignee gate, then name
    /// 17. votes
    /// 18. watchers
    /// 19. estimate gate, then hours
    /// 20. time spent (resolved only)
    /// 21. work ratio (resolved only)
    /// 22. impact
    /// 23. source
    /// 24. comment gate, then text
    /// 25. label
    /// 26. Windows version, then CPU vendor
    /// 27. linked-issue gate, then key
    /// 28. due-date gate, then offset
    /// 29. repeat count
    /// 30. complexity
    /// 31. intervention
    pub fn next_ticket<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        key: TicketKey,
        group: Group,
    ) -> Ticket {
        let catalog = &self.catalog;

        let pool = group.classroom_pool();
        let classroom = *pick(rng, &pool);

        let created_at = generate_created_at(rng, self.window.start, self.window.days);

        let status = catalog.status.sample(rng);
        let resolution_delay = status
            .is_resolved()
            .then(|| generate_resolution_delay(rng));
        let resolved_at = resolution_delay.map(|delay| created_at + delay);
        let resolution_hours = resolution_delay.map(|delay| round_hours(delta_hours(delay)));
        let updated_at = match resolved_at {
            Some(resolved) => resolved,
            None => created_at + generate_update_delay(rng),
        };
        let resolved = resolved_at.is_some();

        let category = catalog.sample_category(group, rng);
        let reporter = pick(rng, &catalog.reporters).clone();
        let department = *pick(rng, &DEPARTMENTS);

        let issue_type = catalog.issue_type.sample(rng);
        let summary = generate_summary(rng, category, classroom);
        let description = generate_description(rng, category, classroom, &reporter, department);
        let priority = catalog.priority.sample(rng);
        let component = catalog.component.sample(rng);
        let affects_version = generate_version(rng, 3);
        let fix_version = resolved.then(|| generate_version(rng, 4));
        let assignee = gated(rng, 0.4, |r| *pick(r, &SUPPORT_STAFF));
        let votes = rng.random_range(0..=3);
        let watchers = catalog.watchers.sample(rng);
        let original_estimate_hours = gated(rng, 0.7, |r| r.random_range(1..=4));
        let time_spent_hours = resolved.then(|| rng.random_range(1..=6));
        let work_ratio = resolved.then(|| rng.random_range(100..=500));
        let impact = catalog.impact.sample(rng);
        let source = catalog.source.sample(rng);
        let comment = gated(rng, 0.5, |r| *pick(r, &SUPPORT_COMMENTS));
        let label = catalog.label.sample(rng);
        let environment = generate_environment(rng, &catalog.cpu_vendor);
        let linked_issue = gated(rng, 0.8, generate_linked_issue);
        let due_date = gated(rng, 0.6, |r| generate_due_date(r, created_at));
        let repeat_count = rng.random_range(0..=3);
        let complexity = catalog.complexity.sample(rng);
        let intervention = catalog.intervention.sample(rng);

        Ticket {
            key,
            issue_type,
            summary,
            description,
            status,
            priority,
            created_at,
            updated_at,
            resolved_at,
            component,
            affects_version,
            fix_version,
            reporter,
            assignee,
            votes,
            watchers,
            original_estimate_hours,
            time_spent_hours,
            work_ratio,
            classroom,
            group,
            category,
            department,
            impact,
            source,
            resolution_hours,
            comment,
            label,
            environment,
            linked_issue,
            due_date,
            repeat_count,
            complexity,
            intervention,
        }
    }
}

/// Generate `count` tickets with the reference configuration and `seed`.
pub fn generate(count: u64, seed: u64) -> Result<Vec<Ticket>, GeneratorError> {
    TicketGenerator::new()?.generate(count, seed)
}
