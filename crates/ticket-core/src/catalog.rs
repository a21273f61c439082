//! Reference distributions and name pools.
//!
//! The weights below reproduce the reference JIRA dataset: group A uses the
//! old classroom instructions, group B the new ones, and the category table
//! is the experimental manipulation between them.

use crate::types::{
    Category, Complexity, Component, CpuVendor, Group, Impact, Intervention, IssueType, Label,
    Priority, Source, Status, Watchers,
};
use crate::weights::{WeightTable, WeightTableError};
use rand::Rng;

/// Resolution text for resolved and closed tickets.
pub const RESOLUTION_LABEL: &str = "Решено";

/// Reporter surnames. Each one is combined with the first three initials.
pub const REPORTER_SURNAMES: [&str; 10] = [
    "Иванов",
    "Петров",
    "Сидоров",
    "Кузнецов",
    "Васильев",
    "Смирнов",
    "Попов",
    "Федоров",
    "Морозов",
    "Волков",
];

pub const REPORTER_INITIALS: [&str; 10] = [
    "А.А.", "Б.Б.", "В.В.", "Г.Г.", "Д.Д.", "Е.Е.", "М.М.", "Н.Н.", "О.О.", "П.П.",
];

/// Initials used per surname.
const INITIALS_PER_SURNAME: usize = 3;

pub const DEPARTMENTS: [&str; 10] = [
    "Кафедра информатики и вычислительной техники",
    "Кафедра высшей математики",
    "Кафедра общей физики",
    "Кафедра органической химии",
    "Кафедра инженерной графики",
    "Кафедра иностранных языков",
    "Кафедра экономики и менеджмента",
    "Кафедра философии и социологии",
    "Кафедра истории России",
    "Кафедра безопасности информационных систем",
];

/// Technical support staff who may be assigned a ticket.
pub const SUPPORT_STAFF: [&str; 8] = [
    "Иванов А.С.",
    "Петрова М.В.",
    "Сидоров Д.К.",
    "Кузнецова Е.П.",
    "Васильев И.Н.",
    "Смирнова О.Л.",
    "Попов Р.М.",
    "Федорова Т.С.",
];

/// Every weight table and pool the generator draws from.
#[derive(Debug, Clone)]
pub struct TicketCatalog {
    pub status: WeightTable<Status, 5>,
    pub priority: WeightTable<Priority, 4>,
    pub category_a: WeightTable<Category, 7>,
    pub category_b: WeightTable<Category, 9>,
    pub issue_type: WeightTable<IssueType, 3>,
    pub component: WeightTable<Component, 6>,
    pub impact: WeightTable<Impact, 4>,
    pub source: WeightTable<Source, 4>,
    pub label: WeightTable<Label, 6>,
    pub watchers: WeightTable<Watchers, 3>,
    pub complexity: WeightTable<Complexity, 3>,
    pub intervention: WeightTable<Intervention, 3>,
    pub cpu_vendor: WeightTable<CpuVendor, 2>,
    /// Reporter names, `surname initials`
    pub reporters: Vec<String>,
}

impl TicketCatalog {
    /// Build and validate the reference catalog.
    pub fn standard() -> Result<Self, WeightTableError> {
        Ok(Self {
            status: WeightTable::new([
                (Status::Open, 0.10),
                (Status::InProgress, 0.15),
                (Status::Resolved, 0.50),
                (Status::Closed, 0.20),
                (Status::Rejected, 0.05),
            ])?,
            priority: WeightTable::new([
                (Priority::Highest, 0.05),
                (Priority::High, 0.15),
                (Priority::Medium, 0.60),
                (Priority::Low, 0.20),
            ])?,
            category_a: WeightTable::new([
                (Category::ProjectorWontStart, 0.25),
                (Category::NoPicture, 0.20),
                (Category::NoSound, 0.15),
                (Category::HdmiNotConnecting, 0.10),
                (Category::SoftwareWontStart, 0.10),
                (Category::NeedsInstructions, 0.10),
                (Category::Other, 0.10),
            ])?,
            category_b: WeightTable::new([
                (Category::ProjectorWontStart, 0.10),
                (Category::NoPicture, 0.15),
                (Category::NoSound, 0.10),
                (Category::HdmiNotConnecting, 0.08),
                (Category::SoftwareWontStart, 0.12),
                (Category::NeedsInstructions, 0.05),
                (Category::SourceSetupDifficulty, 0.20),
                (Category::ModeSwitchingProblem, 0.10),
                (Category::Other, 0.10),
            ])?,
            issue_type: WeightTable::uniform([
                IssueType::Incident,
                IssueType::ServiceRequest,
                IssueType::Problem,
            ])?,
            component: WeightTable::uniform([
                Component::Projector,
                Component::Acoustics,
                Component::Computer,
                Component::Network,
                Component::Software,
                Component::OtherEquipment,
            ])?,
            impact: WeightTable::uniform([
                Impact::Critical,
                Impact::High,
                Impact::Medium,
                Impact::Low,
            ])?,
            source: WeightTable::uniform([
                Source::Phone,
                Source::Email,
                Source::SelfServicePortal,
                Source::InPerson,
            ])?,
            label: WeightTable::uniform([
                Label::Multimedia,
                Label::Equipment,
                Label::Urgent,
                Label::TrainingNeeded,
                Label::Hardware,
                Label::Software,
            ])?,
            watchers: WeightTable::uniform([
                Watchers::Unassigned,
                Watchers::SupportTeam,
                Watchers::MultimediaDept,
            ])?,
            complexity: WeightTable::uniform([
                Complexity::Low,
                Complexity::Medium,
                Complexity::High,
            ])?,
            intervention: WeightTable::uniform([
                Intervention::Remote,
                Intervention::OnSite,
                Intervention::Consultation,
            ])?,
            cpu_vendor: WeightTable::uniform([CpuVendor::Intel, CpuVendor::Amd])?,
            reporters: reporter_names(),
        })
    }

    /// Draw a problem category from the group's own table.
    pub fn sample_category<R: Rng + ?Sized>(&self, group: Group, rng: &mut R) -> Category {
        match group {
            Group::A => self.category_a.sample(rng),
            Group::B => self.category_b.sample(rng),
        }
    }

    /// Category labels a group can produce.
    pub fn category_labels(&self, group: Group) -> &[Category] {
        match group {
            Group::A => &self.category_a.labels()[..],
            Group::B => &self.category_b.labels()[..],
        }
    }
}

fn reporter_names() -> Vec<String> {
    REPORTER_SURNAMES
        .iter()
        .flat_map(|surname| {
            REPORTER_INITIALS[..INITIALS_PER_SURNAME]
                .iter()
                .map(move |initials| format!("{surname} {initials}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_catalog_validates() {
        assert!(TicketCatalog::standard().is_ok());
    }

    #[test]
    fn test_reporter_pool() {
        let catalog = TicketCatalog::standard().unwrap();
        assert_eq!(catalog.reporters.len(), 30);
        assert_eq!(catalog.reporters[0], "Иванов А.А.");
        assert_eq!(catalog.reporters[2], "Иванов В.В.");
        assert_eq!(catalog.reporters[29], "Волков В.В.");
    }

    #[test]
    fn test_group_a_categories_exclude_b_only_labels() {
        let catalog = TicketCatalog::standard().unwrap();
        let a: HashSet<Category> = catalog.category_labels(Group::A).iter().copied().collect();

        assert_eq!(a.len(), 7);
        assert!(!a.contains(&Category::SourceSetupDifficulty));
        assert!(!a.contains(&Category::ModeSwitchingProblem));
        assert_eq!(catalog.category_labels(Group::B).len(), 9);
    }

    #[test]
    fn test_category_weights_differ_between_groups() {
        let catalog = TicketCatalog::standard().unwrap();

        assert_eq!(
            catalog.category_a.weight_of(Category::ProjectorWontStart),
            Some(0.25)
        );
        assert_eq!(
            catalog.category_b.weight_of(Category::ProjectorWontStart),
            Some(0.10)
        );
        assert_eq!(
            catalog.category_b.weight_of(Category::SourceSetupDifficulty),
            Some(0.20)
        );
    }

    #[test]
    fn test_status_table() {
        let catalog = TicketCatalog::standard().unwrap();
        assert_eq!(catalog.status.labels(), &Status::ALL[..]);
        assert_eq!(catalog.status.weight_of(Status::Resolved), Some(0.50));
    }
}
