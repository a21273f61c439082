//! Enumerated field types for synthetic tickets.
//!
//! Every categorical column of a ticket is a closed enum. The `label()` of a
//! variant is the exact text written to CSV, so downstream tooling sees the
//! same values as the reference JIRA export.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of classrooms owned by each test group.
pub const CLASSROOMS_PER_GROUP: usize = 15;

/// Declares a closed label set with its CSV text.
///
/// Generates the enum, an `ALL` slice in declaration order, `label()`,
/// `Display`, and a `Serialize` impl that writes the label.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Text written to CSV for this variant.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

label_enum! {
    /// A/B test arm. A is the control group (old instructions), B the
    /// treatment group (new instructions).
    Group {
        A => "A",
        B => "B",
    }
}

impl Group {
    /// First classroom number of this group's pool.
    fn first_classroom(self) -> u16 {
        match self {
            Group::A => 101,
            Group::B => 201,
        }
    }

    /// The classrooms owned by this group. Pools of different groups never
    /// overlap.
    pub fn classroom_pool(self) -> [Classroom; CLASSROOMS_PER_GROUP] {
        let first = self.first_classroom();
        std::array::from_fn(|i| Classroom::new(first + i as u16))
    }

    /// Whether `classroom` belongs to this group's pool.
    pub fn owns(self, classroom: Classroom) -> bool {
        let first = self.first_classroom();
        (first..first + CLASSROOMS_PER_GROUP as u16).contains(&classroom.number())
    }

    /// Parse a group from its CSV label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.label() == label.trim())
    }
}

label_enum! {
    /// Ticket workflow status.
    Status {
        Open => "Открыта",
        InProgress => "В работе",
        Resolved => "Решена",
        Closed => "Закрыта",
        Rejected => "Отклонена",
    }
}

impl Status {
    /// Resolved and closed tickets carry a resolution timestamp.
    pub fn is_resolved(self) -> bool {
        matches!(self, Status::Resolved | Status::Closed)
    }
}

label_enum! {
    Priority {
        Highest => "Highest",
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

label_enum! {
    IssueType {
        Incident => "Инцидент",
        ServiceRequest => "Запрос на обслуживание",
        Problem => "Проблема",
    }
}

label_enum! {
    /// Faulty equipment component.
    Component {
        Projector => "Проектор",
        Acoustics => "Акустика",
        Computer => "Компьютер",
        Network => "Сетевое оборудование",
        Software => "ПО",
        OtherEquipment => "Другое оборудование",
    }
}

label_enum! {
    /// Impact on the teaching process.
    Impact {
        Critical => "Критичное",
        High => "Высокое",
        Medium => "Среднее",
        Low => "Низкое",
    }
}

label_enum! {
    /// Channel the ticket arrived through.
    Source {
        Phone => "Телефон",
        Email => "Email",
        SelfServicePortal => "Портал самообслуживания",
        InPerson => "Личное обращение",
    }
}

label_enum! {
    /// Problem category. Group A draws from the first six variants plus
    /// `Other`; group B additionally sees the two source/mode variants.
    Category {
        ProjectorWontStart => "Не могу включить проектор",
        NoPicture => "Нет изображения на экране",
        NoSound => "Нет звука в аудиосистеме",
        HdmiNotConnecting => "Не подключается ноутбук через HDMI",
        SoftwareWontStart => "Не запускается мультимедийное ПО",
        NeedsInstructions => "Требуется инструкция по использованию",
        SourceSetupDifficulty => "Сложность с настройкой источников",
        ModeSwitchingProblem => "Проблема с переключением режимов",
        Other => "Другая проблема",
    }
}

label_enum! {
    Label {
        Multimedia => "multimedia",
        Equipment => "equipment",
        Urgent => "urgent",
        TrainingNeeded => "training_needed",
        Hardware => "hardware",
        Software => "software",
    }
}

label_enum! {
    /// Watcher list. `Unassigned` renders as an empty cell.
    Watchers {
        Unassigned => "",
        SupportTeam => "support_team",
        MultimediaDept => "multimedia_dept",
    }
}

label_enum! {
    /// Resolution difficulty.
    Complexity {
        Low => "Низкая",
        Medium => "Средняя",
        High => "Высокая",
    }
}

label_enum! {
    /// How support intervened.
    Intervention {
        Remote => "Удаленно",
        OnSite => "На месте",
        Consultation => "Консультация",
    }
}

label_enum! {
    CpuVendor {
        Intel => "Intel",
        Amd => "AMD",
    }
}

/// A classroom identifier such as `Гл-101`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Classroom(u16);

impl Classroom {
    pub fn new(number: u16) -> Self {
        Self(number)
    }

    pub fn number(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Гл-{:03}", self.0)
    }
}

impl Serialize for Classroom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
