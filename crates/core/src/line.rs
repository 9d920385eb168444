//! Random log line generation.
//!
//! Each line is stamped with the start instant pushed forward by a random
//! number of seconds, so the lines come out in no particular time order.

use crate::{corpus::Corpus, err::Error, Result};
use rand::{distr::Distribution, Rng};
use std::io::Write;
use time::{format_description::BorrowedFormatItem, macros::format_description, Duration, OffsetDateTime};

/// Lower bound, exclusive, of the offset added to the start instant.
pub const MIN_OFFSET_SECS: f64 = 1.0;
/// Upper bound, exclusive, of the offset added to the start instant.
pub const MAX_OFFSET_SECS: f64 = 10_000.0;

/// `YYYY-MM-DD HH:MM:SS`, 24-hour clock, fractional seconds dropped.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Uniform offset in seconds over the open interval
/// (`MIN_OFFSET_SECS`, `MAX_OFFSET_SECS`).
pub struct Offset;

impl Distribution<f64> for Offset {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let secs = rng.random_range(MIN_OFFSET_SECS..MAX_OFFSET_SECS);
            if secs > MIN_OFFSET_SECS {
                return secs;
            }
        }
    }
}

/// One generated record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub timestamp: OffsetDateTime,
    pub text: &'static str,
}

impl OutputLine {
    /// Writes `<timestamp>: <text>\n`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.timestamp.format_into(writer, TIMESTAMP_FORMAT)?;
        writeln!(writer, ": {}", self.text)?;
        Ok(())
    }
}

/// Draws [OutputLine]s relative to a fixed start instant.
#[derive(Clone, Copy, Debug)]
pub struct LineGenerator {
    corpus: Corpus,
    start: OffsetDateTime,
}

impl LineGenerator {
    /// Fails if some offset in range would push `start` past the last
    /// representable date.
    pub fn new(corpus: Corpus, start: OffsetDateTime) -> Result<Self> {
        start
            .checked_add(Duration::seconds_f64(MAX_OFFSET_SECS))
            .ok_or(Error::TimestampOverflow(start))?;
        Ok(Self { corpus, start })
    }

    pub fn start(&self) -> OffsetDateTime {
        self.start
    }
}

impl Distribution<OutputLine> for LineGenerator {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OutputLine {
        let offset = Offset.sample(rng);
        let text = self.corpus.sample(rng);
        OutputLine {
            timestamp: self.start + Duration::seconds_f64(offset),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::STORIES;
    use rand::{rngs::SmallRng, SeedableRng};
    use time::macros::datetime;

    fn render(line: &OutputLine) -> String {
        let mut buf = Vec::new();
        line.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn line_format() {
        let line = OutputLine {
            timestamp: datetime!(2024-03-07 04:05:06.999 UTC),
            text: "And then a hippo appeared.",
        };
        assert_eq!(render(&line), "2024-03-07 04:05:06: And then a hippo appeared.\n");

        let line = OutputLine {
            timestamp: datetime!(2024-12-31 23:59:59 UTC),
            text: "And they lived happily ever after.",
        };
        assert_eq!(render(&line), "2024-12-31 23:59:59: And they lived happily ever after.\n");
    }

    #[test]
    fn offsets_stay_in_open_interval() {
        let mut rng = SmallRng::seed_from_u64(1);
        for secs in (&mut rng).sample_iter(Offset).take(100_000) {
            assert!(secs > MIN_OFFSET_SECS && secs < MAX_OFFSET_SECS, "{secs}");
        }
    }

    #[test]
    fn timestamps_within_bounds() {
        let start = datetime!(2025-06-01 12:00:00 UTC);
        let generator = LineGenerator::new(STORIES, start).unwrap();
        let mut rng = SmallRng::seed_from_u64(2);

        for line in (&mut rng).sample_iter(generator).take(10_000) {
            assert!(line.timestamp > start + Duration::SECOND);
            assert!(line.timestamp < start + Duration::seconds(10_000));
            assert!(STORIES.position(line.text).is_some());
        }
    }

    #[test]
    fn lines_are_not_sorted() {
        let start = datetime!(2025-06-01 12:00:00 UTC);
        let generator = LineGenerator::new(STORIES, start).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);

        let stamps = (&mut rng)
            .sample_iter(generator)
            .take(1000)
            .map(|line| line.timestamp)
            .collect::<Vec<_>>();
        assert!(!stamps.is_sorted());

        // A random sequence descends about half the time.
        let descents = stamps.windows(2).filter(|w| w[0] > w[1]).count();
        assert!((400..600).contains(&descents), "{descents} descents");
    }

    #[test]
    fn same_seed_same_lines() {
        let start = datetime!(2025-06-01 12:00:00 UTC);
        let generator = LineGenerator::new(STORIES, start).unwrap();

        let draw = |seed| {
            SmallRng::seed_from_u64(seed)
                .sample_iter(generator)
                .take(50)
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(9), draw(9));
        assert_ne!(draw(9), draw(10));
    }

    #[test]
    fn rejects_start_near_end_of_range() {
        let start = datetime!(9999-12-31 23:00:00 UTC);
        assert!(matches!(
            LineGenerator::new(STORIES, start),
            Err(Error::TimestampOverflow(_))
        ));
    }
}
