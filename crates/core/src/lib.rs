//! Generates log files whose lines are deliberately out of time order, for
//! feeding the LoCo log sorter.

pub mod clock;
pub mod config;
pub mod corpus;
pub mod err;
pub mod line;
pub mod write;

pub use config::{parse_iterations, Config, DEFAULT_ITERATIONS};
pub use corpus::{Corpus, STORIES};
pub use err::{Error, Result};
pub use line::{LineGenerator, OutputLine};
pub use write::LogWriter;

use rand::Rng;
use time::OffsetDateTime;

/// Writes `config.iterations` lines of [STORIES] to `config.output`, stamped
/// relative to `start`. `progress` is called with the running line count
/// every [write::PROGRESS_INTERVAL] lines and once more at the end.
///
/// Returns the number of lines written.
pub fn generate_log_file<R, P>(
    config: &Config,
    start: OffsetDateTime,
    rng: &mut R,
    mut progress: P,
) -> Result<u64>
where
    R: Rng,
    P: FnMut(u64) -> std::io::Result<()>,
{
    let generator = LineGenerator::new(STORIES, start)?;
    let mut writer = LogWriter::create(&config.output)?;
    tracing::debug!(
        path = %config.output.display(),
        iterations = config.iterations,
        %start,
        "writing log"
    );

    for i in 0..config.iterations {
        if i % write::PROGRESS_INTERVAL == 0 && i != 0 {
            progress(i)?;
        }
        writer.write_line(&rng.sample(&generator))?;
    }

    let lines = writer.lines();
    writer.finish()?;
    progress(lines)?;

    tracing::info!(path = %config.output.display(), lines, "log written");
    Ok(lines)
}
