//! Console messages for one-shot commands
//!
//! Shared by `configure`, `reset` and the headless catalog commands.

const TAG_INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const TAG_WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const TAG_ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const TAG_SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

fn tagged_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

/// Print an informational line, with optional details after a tab.
pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_INFO, title, details));
}

/// Print a warning line.
pub fn print_warn(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_WARN, title, details));
}

/// Print an error line to stderr, with details on a second line when present.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", TAG_ERROR, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", TAG_ERROR, details);
    }
}

/// Print a success line.
pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_SUCCESS, title, details));
}

/// `print_cmd_info!(title, fmt, args...)`
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// `print_cmd_warn!(title, fmt, args...)`
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// `print_cmd_error!(title)` or `print_cmd_error!(title, details)`
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

/// `print_cmd_success!(title, fmt, args...)`
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
