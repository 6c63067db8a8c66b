/// Every piece of user-facing text the application can print.
///
/// Variants carry the dynamic parts of a message; the wording itself lives in
/// the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === SECTION MESSAGES ===
    SectionCreated(String),
    SectionAlreadyExists(String),
    SectionCreateFailed(String),
    SectionDeleted(String),
    SectionDeleteFailed(String),
    SectionNotFound(String),
    SectionsHeader,
    NoSectionsFound,
    ConfirmDeleteSection(String, usize), // name, task count
    SectionNameEmpty,

    // === TASK MESSAGES ===
    TaskCreated(String, String), // task, section
    TaskCreateFailed(String, String),
    TaskDeleted(String, String),
    TaskDeleteFailed(String, String),
    TaskNotFound(String, String),
    TaskNameEmpty,
    ConfirmDeleteTask(String, String),
    TasksHeader,
    TasksInSectionHeader(String),
    TasksSortedHeader,
    NoTasksFound,
    NoTasksInSection(String),
    InvalidPriority(String),
    InvalidDueDate(String),

    // === SEARCH MESSAGES ===
    SearchResultsHeader(String),
    SearchTermEmpty,
    SearchNoMatches(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportNothingToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),
    ConfigParseError(String),
    PromptDateFormat,
    PromptDatabasePath,

    // === DATABASE / MIGRATION MESSAGES ===
    DbVersion(u32),
    DbUpToDate,
    DbNeedsMigration(u32, u32), // current, latest
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    MigrationHistoryHeader,

    // === GENERIC ===
    OperationCancelled,
}
