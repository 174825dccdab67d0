//! Rendering of decoded responses.
//!
//! Human output prints fields as `key: value` lines, or a one-line summary
//! for commands that have one. JSON output prints one object per record per
//! line so it can be piped into line-oriented tools.

use std::io::Write;

use clap::ValueEnum;
use mpdc_core::Record;

use crate::AppError;

/// Output format selection for command responses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `key: value` lines and one-line summaries.
    #[default]
    Human,
    /// One JSON object per record.
    Json,
}

/// Writes command results in the selected format.
pub(crate) struct Printer<'a> {
    out: &'a mut dyn Write,
    format: OutputFormat,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(out: &'a mut dyn Write, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Prints every field of `record`.
    pub(crate) fn record(&mut self, record: &Record) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Human => record
                .iter()
                .try_for_each(|(key, value)| self.line(&format!("{key}: {value}"))),
            OutputFormat::Json => self.json(record),
        }
    }

    pub(crate) fn records(&mut self, records: &[Record]) -> Result<(), AppError> {
        records.iter().try_for_each(|record| self.record(record))
    }

    /// Prints field values only, one per line. JSON output keeps the
    /// records intact.
    pub(crate) fn values(
        &mut self,
        records: &[Record],
        keep: impl Fn(&str) -> bool,
    ) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Human => records
                .iter()
                .flat_map(Record::iter)
                .filter(|(key, _)| keep(key))
                .try_for_each(|(_, value)| self.line(value)),
            OutputFormat::Json => self.records(records),
        }
    }

    /// Prints a one-line summary in human mode and the record in JSON mode.
    pub(crate) fn summary(
        &mut self,
        record: &Record,
        render: impl FnOnce(&Record) -> String,
    ) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Human => self.line(&render(record)),
            OutputFormat::Json => self.json(record),
        }
    }

    fn json(&mut self, record: &Record) -> Result<(), AppError> {
        serde_json::to_writer(&mut *self.out, record).map_err(AppError::SerialiseOutput)?;
        self.line("")
    }

    fn line(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.out, "{text}").map_err(AppError::WriteOutput)
    }

    pub(crate) fn flush(&mut self) -> Result<(), AppError> {
        self.out.flush().map_err(AppError::WriteOutput)
    }
}

/// Formats seconds as `mm:ss`, or `hh:mm:ss` once an hour is reached.
pub(crate) fn format_duration(seconds: i64) -> String {
    let total = seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours == 0 {
        format!("{minutes:02}:{secs:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    }
}

/// `on` for the daemon flag `1`, `off` for anything else.
pub(crate) fn on_off(flag: &str) -> &'static str {
    if flag == "1" { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "00:00")]
    #[case(59, "00:59")]
    #[case(61, "01:01")]
    #[case(3599, "59:59")]
    #[case(3600, "01:00:00")]
    #[case(3725, "01:02:05")]
    #[case(-5, "00:00")]
    fn formats_durations(#[case] seconds: i64, #[case] expected: &str) {
        assert_eq!(format_duration(seconds), expected);
    }

    #[rstest]
    #[case("1", "on")]
    #[case("0", "off")]
    #[case("", "off")]
    fn renders_flags(#[case] flag: &str, #[case] expected: &str) {
        assert_eq!(on_off(flag), expected);
    }

    fn render(format: OutputFormat, print: impl FnOnce(&mut Printer<'_>)) -> String {
        let mut buffer = Vec::new();
        let mut printer = Printer::new(&mut buffer, format);
        print(&mut printer);
        String::from_utf8(buffer).expect("output utf8")
    }

    #[test]
    fn human_records_print_key_value_lines() {
        let record: Record = [("volume", "40"), ("state", "play")].into_iter().collect();
        let text = render(OutputFormat::Human, |printer| {
            printer.record(&record).expect("record prints");
        });
        assert_eq!(text, "volume: 40\nstate: play\n");
    }

    #[test]
    fn json_records_print_one_object_per_line() {
        let records: Vec<Record> = vec![
            [("outputid", "0")].into_iter().collect(),
            [("outputid", "1")].into_iter().collect(),
        ];
        let text = render(OutputFormat::Json, |printer| {
            printer.records(&records).expect("records print");
        });
        assert_eq!(text, "{\"outputid\":\"0\"}\n{\"outputid\":\"1\"}\n");
    }

    #[test]
    fn values_filter_by_key() {
        let records: Vec<Record> = vec![
            [("directory", "jazz"), ("Last-Modified", "2020")].into_iter().collect(),
            [("file", "jazz/so_what.flac"), ("Time", "545")].into_iter().collect(),
        ];
        let text = render(OutputFormat::Human, |printer| {
            printer
                .values(&records, |key| matches!(key, "directory" | "file"))
                .expect("values print");
        });
        assert_eq!(text, "jazz\njazz/so_what.flac\n");
    }
}
