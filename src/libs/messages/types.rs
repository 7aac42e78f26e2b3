#[derive(Debug, Clone)]
pub enum Message {
    // === ACTION OUTCOME MESSAGES ===
    ClockedIn(String), // timestamp
    AlreadyClockedIn(String), // user name
    MustClockInFirst,
    ClockedOut {
        at: String,
        total_work_time: String,
        break_count: u32,
        break_time: String,
        smoking_count: u32,
        smoking_time: String,
    },
    PauseStarted {
        activity: String, // capitalized label
        at: String,
        count: u32,
    },
    MustBeWorkingFirst(String), // activity label
    BackToWork {
        at: String,
        activity: String, // lower-case label
        elapsed: String,
        total: String,
        count: u32,
    },
    NotWorkingYet,
    NoOngoingActivity,
    WorkLimitReached {
        name: String,
        user_id: i64,
    },

    // === REPORT MESSAGES ===
    DailySummaryHeader(String),   // date
    MonthlySummaryHeader(String), // month/year
    ReportEmpty,
    ExportCompleted(String), // path
    DeliveryFailed(String),  // error

    // === SCHEDULER MESSAGES ===
    SchedulerStarted(String), // timezone
    StoreCleared(usize),      // records dropped

    // === SERVE MESSAGES ===
    ServeStarted,
    ServeHelp,
    UnknownCommand(String),
    InvalidUserId(String),
    UnknownAction(String),
    ServeReceivedSigterm,
    ServeReceivedSigint,
    ServeReceivedCtrlC,
    ServeCtrlCListenFailed(String), // error
    ServeSignalHandlingNotSupported,
    ServeShuttingDown,
    HostError(String),        // error
    HostTaskPanicked(String), // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    ConfigDeleted,
    InvalidTimezone(String),
    InvalidTriggerTime(String),
    InvalidDayOfMonth,

    // === PROMPTS ===
    PromptTimezone,
    PromptDailyReportTime,
    PromptDailyResetTime,
    PromptMonthlyReportTime,
    PromptMonthlyReportDay,
    PromptExportFormat,
}
