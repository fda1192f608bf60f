/// World-viewable share link to the RSoXS simulation `.nxs` files.
pub const RSOXS_SIMULATION_DATA_URL: &str =
    "https://www.dropbox.com/sh/8z5jzb4iu7o3unj/AADQUqm2_oGgIxRBC8uuO6XWa?dl=1";

/// A zip archive published at a fixed URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    /// Default destination directory name.
    pub name: String,
    pub url: String,
    /// File name of the archive inside the cache directory.
    pub archive_name: String,
}

impl Dataset {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        archive_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            archive_name: archive_name.into(),
        }
    }

    pub fn rsoxs_simulation_data() -> Self {
        Self::new(
            "rsoxs_simulation_data",
            RSOXS_SIMULATION_DATA_URL,
            "rsoxs_simulation_data.zip",
        )
    }
}
