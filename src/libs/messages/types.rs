#[derive(Debug, Clone)]
pub enum Message {
    // === EMPLOYEE MESSAGES ===
    EmployeeRegistered(String, i64), // name, id
    EmployeeNotFound(i64),
    NoEmployees,
    EmployeesHeader,
    EmployeeDetailsHeader(String), // name

    // === ATTENDANCE ENTRY MESSAGES ===
    AttendanceRecorded(String, String),  // name, date
    BulkAttendanceRecorded(usize, String), // count, date
    AttendanceRecordFailed(String),
    AttendanceForDate(String), // date
    NoRecordsForDate(String),  // date
    SundayDetected,
    HolidayDetected(String), // holiday name
    NoEmployeesSelected,
    BulkSelection(usize, usize), // selected, visible
    BulkRowUnknown(i64),
    InvalidTimeOverride(String),

    // === VALIDATION MESSAGES ===
    ValidationFailed,

    // === SUMMARY MESSAGES ===
    SummaryHeader(String),   // month
    DashboardHeader(String), // month
    DepartmentsHeader(String), // date

    // === HOLIDAY MESSAGES ===
    HolidayAdded(String, String), // name, date
    HolidayRemoved(String),       // date
    HolidayNotFound(String),      // date
    NoHolidays,
    HolidaysHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleRules,
    PromptToleranceMinutes,
    PromptOvertimeDayHours,
    RuleOutOfRange(String, u64), // setting, value
    ConfigReadFailed(String),

    // === DATA SOURCE MESSAGES ===
    DataStillLoading,
    DataFetchFailed(String),

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),       // path
}
