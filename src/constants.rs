pub const DATAFILE_URL: &str =
    "https://impfdashboard.de/static/data/germany_vaccinations_timeseries_v2.tsv";

pub const API_BASE_URL: &str = "https://botsin.space";

/// Visibility of posted statuses; "unlisted" stays off the public
/// timelines.
pub const VISIBILITY: &str = "unlisted";

pub const STATE_FILE: &str = "./vaxbot_state.json";
