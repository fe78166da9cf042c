pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying updates from the controller to the UI.
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Library API settings
    pub mod api {
        use std::time::Duration;

        /// Base URL used when neither the command line nor the config file names one.
        pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

        /// Environment variable that overrides the API base URL.
        pub const BASE_URL_ENV: &str = "LIBRARY_API_URL";

        /// Connection timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up unless a key is pressed (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 1000;

        /// Key polling interval, which is also the redraw cadence (milliseconds)
        pub const TICK_RATE_MS: u64 = 100;

        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        pub const fn tick_rate() -> Duration {
            Duration::from_millis(TICK_RATE_MS)
        }
    }
}
