use std::path::PathBuf;

/// Name of the merged dataset written into the output directory.
pub const OUTPUT_FILE_NAME: &str = "meteorites_ufos_detection_bias.json";

const METEORITES_REL: &str = "datasets/witnessed-meteorite-falls/witnessed_meteorite_falls.json";
const UFO_BY_YEAR_REL: &str = "html/datavis/data_trove/data/quirky/ufo_by_year.json";
const UFO_BY_STATE_REL: &str = "html/datavis/data_trove/data/quirky/ufo_by_state.json";

/// Resolved file locations for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub meteorites: PathBuf,
    pub ufo_by_year: PathBuf,
    pub ufo_by_state: PathBuf,
    pub output_dir: PathBuf,
    /// When set, the timeline and state tables are also exported as CSV.
    pub csv_dir: Option<PathBuf>,
}

impl PipelineConfig {
    /// Full path of the JSON dataset this run writes.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}

impl Default for PipelineConfig {
    /// Inputs under `$HOME`, output next to the executable.
    fn default() -> Self {
        let home = home_dir();
        Self {
            meteorites: home.join(METEORITES_REL),
            ufo_by_year: home.join(UFO_BY_YEAR_REL),
            ufo_by_state: home.join(UFO_BY_STATE_REL),
            output_dir: program_dir(),
            csv_dir: None,
        }
    }
}

/// Directory holding the running executable.
///
/// Falls back to the crate root when the executable path is unavailable.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
