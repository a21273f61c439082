//! Free-text generators: summaries, descriptions and support comments.
//!
//! Templates are plain functions over a typed field bundle, so every
//! placeholder is checked at compile time.

use super::pick;
use rand::Rng;
use std::fmt;
use ticket_core::{Category, Classroom};

/// What the reporter tried before filing the ticket.
pub const ACTIONS_TAKEN: [&str; 4] = [
    "Проверил подключение питания, перезагрузил оборудование",
    "Попытался использовать запасные кабели, проблема сохраняется",
    "Переключил источники сигнала, безрезультатно",
    "Проверил настройки ПО, проблема не решена",
];

pub const ADDITIONAL_INFO: [&str; 4] = [
    "Проблема возникает при каждом использовании",
    "Иногда работает нормально, иногда нет",
    "Проблема появилась после обновления ПО",
    "Ранее подобных проблем не наблюдалось",
];

pub const SYMPTOMS: [&str; 4] = [
    "Оборудование не реагирует на команды",
    "Изображение/звук появляются и пропадают",
    "Система зависает при определенных действиях",
    "Посторонние шумы в акустике",
];

/// Effect on the lesson in progress.
pub const LESSON_IMPACT: [&str; 4] = [
    "Занятие отменено",
    "Занятие проведено без мультимедийного оборудования",
    "Перенесено в другую аудиторию",
    "Проведено с ограничениями",
];

/// Support engineer comments.
pub const SUPPORT_COMMENTS: [&str; 10] = [
    "Проверил оборудование. Замена кабеля HDMI решает проблему.",
    "Требуется настройка проектора. Выполнена калибровка.",
    "Проблема в драйверах. Обновлено программное обеспечение.",
    "Оборудование исправно. Проведен инструктаж пользователя.",
    "Выявлена аппаратная неисправность. Запланирован ремонт.",
    "Временное решение применено. Заказана запасная часть.",
    "Проведена диагностика. Оборудование работает в штатном режиме.",
    "Проблема решена удаленно через систему управления.",
    "Требуется замена блока питания. Оборудование снято с эксплуатации.",
    "Настроены параметры отображения. Проблема устранена.",
];

/// Day range of the report time embedded in descriptions, inclusive.
const REPORT_DAYS: (u32, u32) = (1, 28);

/// Contact phone `+7 (9XX) XXX-XX-XX` built from nine random digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumber([u8; 9]);

impl PhoneNumber {
    /// Nine draws.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; 9];
        for digit in &mut digits {
            *digit = rng.random_range(0..=9);
        }
        Self(digits)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(
            f,
            "+7 (9{}{}) {}{}{}-{}{}-{}{}",
            d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7], d[8]
        )
    }
}

/// Summary line layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryTemplate {
    InClassroom,
    ProblemWithClassroom,
    ClassroomFirst,
    ProblemThenClassroom,
    EquipmentFault,
}

impl SummaryTemplate {
    pub const ALL: [SummaryTemplate; 5] = [
        SummaryTemplate::InClassroom,
        SummaryTemplate::ProblemWithClassroom,
        SummaryTemplate::ClassroomFirst,
        SummaryTemplate::ProblemThenClassroom,
        SummaryTemplate::EquipmentFault,
    ];

    pub fn render(self, category: Category, classroom: Classroom) -> String {
        match self {
            SummaryTemplate::InClassroom => format!("{category} в аудитории {classroom}"),
            SummaryTemplate::ProblemWithClassroom => {
                format!("Проблема: {category} (аудитория {classroom})")
            }
            SummaryTemplate::ClassroomFirst => format!("Аудитория {classroom}: {category}"),
            SummaryTemplate::ProblemThenClassroom => {
                format!("{category}. Аудитория: {classroom}")
            }
            SummaryTemplate::EquipmentFault => {
                format!("Неисправность оборудования в {classroom}: {category}")
            }
        }
    }
}

/// Generate a summary line. One draw.
pub fn generate_summary<R: Rng + ?Sized>(
    rng: &mut R,
    category: Category,
    classroom: Classroom,
) -> String {
    pick(rng, &SummaryTemplate::ALL).render(category, classroom)
}

/// Everything a description template can interpolate.
#[derive(Debug, Clone)]
pub struct DescriptionFields<'a> {
    pub category: Category,
    pub classroom: Classroom,
    pub reporter: &'a str,
    pub department: &'a str,
    /// Report time as `DD.MM.YYYY HH:MM`
    pub reported_at: String,
    pub action: &'static str,
    pub phone: PhoneNumber,
    pub additional_info: &'static str,
    pub symptom: &'static str,
    pub lesson_impact: &'static str,
}

/// Description layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionTemplate {
    PlainReport,
    IncidentNotice,
    SupportRequest,
}

impl DescriptionTemplate {
    pub const ALL: [DescriptionTemplate; 3] = [
        DescriptionTemplate::PlainReport,
        DescriptionTemplate::IncidentNotice,
        DescriptionTemplate::SupportRequest,
    ];

    pub fn render(self, fields: &DescriptionFields<'_>) -> String {
        match self {
            DescriptionTemplate::PlainReport => plain_report(fields),
            DescriptionTemplate::IncidentNotice => incident_notice(fields),
            DescriptionTemplate::SupportRequest => support_request(fields),
        }
    }
}

fn plain_report(f: &DescriptionFields<'_>) -> String {
    format!(
        "Преподаватель: {reporter}\n\
         Подразделение: {department}\n\
         Аудитория: {classroom}\n\
         Дата возникновения проблемы: {reported_at}\n\
         \n\
         Описание проблемы:\n\
         {category}\n\
         \n\
         Предпринятые действия:\n\
         {action}\n\
         \n\
         Контактный телефон: {phone}",
        reporter = f.reporter,
        department = f.department,
        classroom = f.classroom,
        reported_at = f.reported_at,
        category = f.category,
        action = f.action,
        phone = f.phone,
    )
}

fn incident_notice(f: &DescriptionFields<'_>) -> String {
    format!(
        "СООБЩЕНИЕ О ПРОБЛЕМЕ\n\
         ------------------\n\
         Аудитория: {classroom}\n\
         Оборудование: Мультимедийный комплекс\n\
         Преподаватель: {reporter}\n\
         Кафедра: {department}\n\
         \n\
         ПРОБЛЕМА:\n\
         {category}\n\
         \n\
         ВРЕМЯ ВОЗНИКНОВЕНИЯ:\n\
         {reported_at}\n\
         \n\
         ДОПОЛНИТЕЛЬНАЯ ИНФОРМАЦИЯ:\n\
         {additional_info}\n\
         \n\
         СТАТУС: Требуется вмешательство специалиста",
        classroom = f.classroom,
        reporter = f.reporter,
        department = f.department,
        category = f.category,
        reported_at = f.reported_at,
        additional_info = f.additional_info,
    )
}

fn support_request(f: &DescriptionFields<'_>) -> String {
    format!(
        "ЗАЯВКА В ТЕХПОДДЕРЖКУ\n\
         \n\
         1. Общие сведения:\n\
         \x20  - Аудитория: {classroom}\n\
         \x20  - Преподаватель: {reporter}\n\
         \x20  - Подразделение: {department}\n\
         \x20  - Дата/время: {reported_at}\n\
         \n\
         2. Суть проблемы:\n\
         \x20  {category}\n\
         \n\
         3. Симптомы:\n\
         \x20  {symptom}\n\
         \n\
         4. Влияние на учебный процесс:\n\
         \x20  {lesson_impact}\n\
         \n\
         Контакт для обратной связи: {reporter}",
        classroom = f.classroom,
        reporter = f.reporter,
        department = f.department,
        reported_at = f.reported_at,
        category = f.category,
        symptom = f.symptom,
        lesson_impact = f.lesson_impact,
    )
}

/// Generate a multi-line description.
///
/// Draw order: template, nine phone digits, report day, hour and minute,
/// action, additional info, symptom, lesson impact. All fillers are drawn
/// whichever template is chosen.
pub fn generate_description<R: Rng + ?Sized>(
    rng: &mut R,
    category: Category,
    classroom: Classroom,
    reporter: &str,
    department: &str,
) -> String {
    let template = *pick(rng, &DescriptionTemplate::ALL);
    let phone = PhoneNumber::generate(rng);

    let day = rng.random_range(REPORT_DAYS.0..=REPORT_DAYS.1);
    let hour = rng.random_range(8..=18);
    let minute = rng.random_range(0..=59);
    let reported_at = format!("{day:02}.03.2024 {hour:02}:{minute:02}");

    let fields = DescriptionFields {
        category,
        classroom,
        reporter,
        department,
        reported_at,
        action: *pick(rng, &ACTIONS_TAKEN),
        phone,
        additional_info: *pick(rng, &ADDITIONAL_INFO),
        symptom: *pick(rng, &SYMPTOMS),
        lesson_impact: *pick(rng, &LESSON_IMPACT),
    };

    template.render(&fields)
}
