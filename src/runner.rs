use tracing::{debug, error};

use crate::error::Result;
use crate::input::{Entry, MetricReader};
use crate::output::Output;
use crate::validator::valid;

// Reader  == stdin | file [, line separator]   ->  bytes
// Decoder == bytes                              ->  Entry(Metric | Malformed)
// Valid   == Metric                             ->  bool
// Encoder == Metric                             ->  put line
// Writer  == put line [, line separator]        ->  TCP connection
//
// One line is fully processed before the next one is read.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub sent: usize,
    pub invalid: usize,
    pub malformed: usize,
}

pub struct Runner {
    reader: MetricReader,
    output: Output,
}

impl Runner {
    pub fn new(reader: MetricReader, output: Output) -> Self {
        Self { reader, output }
    }

    pub fn run(&mut self) -> Result<Stats> {
        let mut stats = Stats::default();

        loop {
            let entry = match self.reader.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => return Err(e),
                None => break,
            };
            stats.lines += 1;

            match entry {
                Entry::Metric(_, metric) if valid(&metric) => {
                    self.output.write(&metric)?;
                    stats.sent += 1;
                }
                Entry::Metric(line_no, metric) => {
                    debug!(
                        line_no,
                        name = %metric.name,
                        timestamp = metric.timestamp,
                        "skipping metric without name or timestamp"
                    );
                    stats.invalid += 1;
                }
                Entry::Malformed(m) => {
                    error!(
                        line_no = m.line_no,
                        reason = %m.reason,
                        line = %m.line,
                        "unable to decode line"
                    );
                    stats.malformed += 1;
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::{self, Cursor};
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::input::{Decoder, DelimReader, JsonDecoder};
    use crate::output::{LineWriter, PutEncoder, Writer};

    struct SharedWriter(Rc<RefCell<LineWriter<Vec<u8>>>>);

    impl Writer for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<()> {
            self.0.borrow_mut().write(buf)
        }
    }

    fn run(input: &'static str) -> std::result::Result<(Stats, String), String> {
        let sink = Rc::new(RefCell::new(LineWriter::new(Vec::new())));

        let reader = MetricReader::new(
            Box::new(DelimReader::new(Cursor::new(input))),
            Box::new(JsonDecoder::new()),
        );
        let output = Output::new(
            Box::new(SharedWriter(Rc::clone(&sink))),
            Box::new(PutEncoder::new()),
        );

        let stats = Runner::new(reader, output).run()?;
        let buf = sink.replace(LineWriter::new(Vec::new())).into_inner();
        Ok((stats, String::from_utf8_lossy(&buf).into_owned()))
    }

    #[test]
    fn test_empty_tag_value_gets_dropped() -> std::result::Result<(), String> {
        let (stats, output) = run(
            r#"{"timestamp":1429001359824,"name":"test1","value":1.0,"tags":{"tag1":"bar","tag2":""}}"#,
        )?;

        assert_eq!(output, "put test1 1429001359824 1.000000 tag1=bar\n");
        assert_eq!(stats.sent, 1);
        Ok(())
    }

    #[test]
    fn test_missing_timestamp_produces_nothing() -> std::result::Result<(), String> {
        let (stats, output) = run(r#"{"name":"test2","value":1.0,"tags":{"tag1":"bar"}}"#)?;

        assert_eq!(output, "");
        assert_eq!(
            stats,
            Stats {
                lines: 1,
                sent: 0,
                invalid: 1,
                malformed: 0,
            }
        );
        Ok(())
    }

    #[test]
    fn test_broken_line_does_not_stop_processing() -> std::result::Result<(), String> {
        let (stats, output) = run(concat!(
            r#"{"timestamp":1429001359824,"name":"test1","value":1.0,"tags":{"tag1":"bar"}"#,
            "\n",
            r#"{"timestamp":1429001359824,"name":"test2","value":2.0,"tags":{"tag1":"bar"}}"#,
            "\n",
        ))?;

        assert_eq!(output, "put test2 1429001359824 2.000000 tag1=bar\n");
        assert_eq!(
            stats,
            Stats {
                lines: 2,
                sent: 1,
                invalid: 0,
                malformed: 1,
            }
        );
        Ok(())
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut inner = self
                .0
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "log buffer poisoned"))?;
            inner.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_line_logged_once() -> std::result::Result<(), String> {
        let broken = r#"{"timestamp":1429001359824,"name":"test1","value":1.0,"tags":{"tag1":"bar"}"#;
        let reason = match JsonDecoder::new().decode(broken.as_bytes()) {
            Err(e) => e.reason().to_string(),
            Ok(m) => return Err(format!("line should be malformed, got {:?}", m)),
        };

        let logs = LogBuffer::default();
        let make_writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || make_writer.clone())
            .with_ansi(false)
            .finish();

        let (stats, output) = tracing::subscriber::with_default(subscriber, || {
            run(concat!(
                r#"{"timestamp":1429001359824,"name":"test1","value":1.0,"tags":{"tag1":"bar"}"#,
                "\n",
                r#"{"timestamp":1429001359824,"name":"test2","value":2.0,"tags":{"tag1":"bar"}}"#,
                "\n",
            ))
        })?;

        assert_eq!(output, "put test2 1429001359824 2.000000 tag1=bar\n");
        assert_eq!(stats.malformed, 1);

        let logs = logs.0.lock().map_err(|_| "log buffer poisoned".to_string())?;
        let logs = String::from_utf8_lossy(&logs);
        let errors: Vec<&str> = logs.lines().filter(|l| l.contains("ERROR")).collect();

        assert_eq!(errors.len(), 1, "expected one error event, got:\n{}", logs);
        assert!(errors[0].contains(broken), "raw line missing in {}", errors[0]);
        assert!(errors[0].contains(&reason), "reason missing in {}", errors[0]);
        assert!(errors[0].contains("line_no=1"), "line number missing in {}", errors[0]);
        Ok(())
    }

    #[test]
    fn test_valid_and_malformed_lines_counted() -> std::result::Result<(), String> {
        let (stats, output) = run(r#"{"timestamp":1,"name":"a","value":1}
not json at all
{"timestamp":2,"name":"b","value":2}
{"timestamp":3,"name":"c","value":3
{"name":"d","value":4}

{"timestamp":5,"name":"e","value":5}"#)?;

        assert_eq!(output.lines().count(), 3);
        assert_eq!(
            stats,
            Stats {
                lines: 7,
                sent: 3,
                invalid: 1,
                malformed: 3,
            }
        );
        Ok(())
    }

    struct BrokenWriter;

    impl Writer for BrokenWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection reset"))
        }
    }

    #[test]
    fn test_write_error_is_fatal() {
        let reader = MetricReader::new(
            Box::new(DelimReader::new(Cursor::new(
                "{\"timestamp\":1,\"name\":\"a\",\"value\":1}\n{\"timestamp\":2,\"name\":\"b\",\"value\":2}\n",
            ))),
            Box::new(JsonDecoder::new()),
        );
        let output = Output::new(Box::new(BrokenWriter), Box::new(PutEncoder::new()));

        match Runner::new(reader, output).run() {
            Err(e) => assert_eq!(e.message(), "writer failed"),
            Ok(stats) => panic!("run should have failed, got {:?}", stats),
        }
    }
}
