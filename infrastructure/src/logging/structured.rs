//! Structured, leveled backend writing to stdout or an append-only file.
//!
//! Each record carries the caller's fields plus `pkg` and `src`, folded into a
//! sorted map (later names win) and rendered by the configured
//! [`Formatter`]. Writes are serialized by a `Mutex` and flushed per record.
//!
//! Reconfiguration is all-or-nothing: the new level, formatter and destination
//! are fully built before they replace the current ones, so a failed
//! [`configure`](Logger::configure) leaves the logger exactly as it was.

use super::destination::Destination;
use super::format::{Formatter, Record, formatter_for};
use chrono::Local;
use logswitch_application::{FileSystem, Logger};
use logswitch_domain::{
    BackendKind, CallSite, ConfigError, Field, Level, LogConfig, LogError, LogLevel, OutFormat,
    mapify,
};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Process exit code used after a fatal record.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Called with [`FATAL_EXIT_CODE`] after a fatal record has been written.
pub type ExitHandler = Box<dyn Fn(i32) + Send + Sync>;

struct State {
    level: LogLevel,
    format: OutFormat,
    formatter: Box<dyn Formatter>,
    destination: Destination,
    path: Option<PathBuf>,
}

/// Backend producing JSON or text lines.
pub struct StructuredLogger {
    state: Mutex<State>,
    fs: Arc<dyn FileSystem>,
    exit: ExitHandler,
}

impl std::fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("StructuredLogger")
            .field("level", &state.level)
            .field("format", &state.format)
            .field("path", &state.path)
            .finish()
    }
}

impl StructuredLogger {
    /// Build a logger from `config` merged onto
    /// [`LogConfig::structured_defaults`].
    ///
    /// `None` or an all-empty config gives `info` / `text` on stdout.
    pub fn new(config: Option<&LogConfig>, fs: Arc<dyn FileSystem>) -> Result<Self, LogError> {
        let defaults = LogConfig::structured_defaults();
        let merged = match config {
            Some(config) => defaults.update(config),
            None => defaults,
        };

        let state = build_state(&merged, fs.as_ref())?;
        Ok(Self {
            state: Mutex::new(state),
            fs,
            exit: Box::new(exit_process),
        })
    }

    /// Replace what happens after a fatal record (process exit by default).
    pub fn with_exit_handler(mut self, handler: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.exit = Box::new(handler);
        self
    }

    pub fn level(&self) -> LogLevel {
        self.lock_state().level
    }

    pub fn format(&self) -> OutFormat {
        self.lock_state().format
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn exit_process(code: i32) {
    std::process::exit(code)
}

fn build_state(config: &LogConfig, fs: &dyn FileSystem) -> Result<State, LogError> {
    let level = config.parse_level()?;
    let format = config.parse_format()?;

    let (destination, path) = match config.outfile_path() {
        Some(path) => {
            check_parent_dir(&path, fs)?;
            let file = fs.open_append(&path).map_err(|source| LogError::Io {
                path: path.clone(),
                source,
            })?;
            (Destination::file(file), Some(path))
        }
        None => (Destination::Stdout, None),
    };

    Ok(State {
        level,
        format,
        formatter: formatter_for(format),
        destination,
        path,
    })
}

/// The log file's parent directory must already exist; it is never created.
fn check_parent_dir(path: &Path, fs: &dyn FileSystem) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    match fs.dir_exists(&dir) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ConfigError::MissingDirectory(dir)),
        Err(source) => Err(ConfigError::DirectoryCheck { dir, source }),
    }
}

impl Logger for StructuredLogger {
    fn name(&self) -> &'static str {
        BackendKind::Structured.name()
    }

    fn path(&self) -> Option<PathBuf> {
        self.lock_state().path.clone()
    }

    fn configure(&self, config: &LogConfig) -> Result<(), LogError> {
        let next = build_state(config, self.fs.as_ref())?;
        debug!(
            level = next.level.as_str(),
            format = next.format.as_str(),
            path = ?next.path,
            "Configured structured logger"
        );
        *self.lock_state() = next;
        Ok(())
    }

    fn log(&self, level: Level, message: &str, fields: &[Field], site: &CallSite) {
        {
            let mut state = self.lock_state();
            if !state.level.allows(level) {
                return;
            }

            let mut entries = mapify(fields);
            entries.insert("pkg".to_string(), Value::String(site.pkg().to_string()));
            entries.insert("src".to_string(), Value::String(site.src().to_string()));

            let record = Record {
                time: Local::now(),
                level,
                message,
                fields: &entries,
            };

            let mut line = Vec::with_capacity(256);
            let State {
                formatter,
                destination,
                ..
            } = &mut *state;
            let written = formatter
                .format(&mut line, &record)
                .and_then(|()| destination.write_all(&line))
                .and_then(|()| destination.flush());
            if let Err(e) = written {
                warn!("Could not write log record: {}", e);
            }
        }

        if level == Level::Fatal {
            (self.exit)(FATAL_EXIT_CODE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::LocalFileSystem;
    use logswitch_domain::f;
    use std::fs::File;
    use std::io;
    use std::sync::atomic::{AtomicI32, Ordering};

    fn local() -> Arc<dyn FileSystem> {
        Arc::new(LocalFileSystem)
    }

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn json_lines(path: &Path) -> Vec<Value> {
        read_lines(path)
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    /// Directory check always errors.
    struct BrokenFs;

    impl FileSystem for BrokenFs {
        fn dir_exists(&self, _dir: &Path) -> io::Result<bool> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }

        fn open_append(&self, _path: &Path) -> io::Result<File> {
            unreachable!("directory check fails first")
        }
    }

    /// Every directory exists, but no file can be opened.
    struct ReadOnlyFs;

    impl FileSystem for ReadOnlyFs {
        fn dir_exists(&self, _dir: &Path) -> io::Result<bool> {
            Ok(true)
        }

        fn open_append(&self, _path: &Path) -> io::Result<File> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let logger = StructuredLogger::new(None, local()).unwrap();

        assert_eq!(logger.name(), "structured");
        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.format(), OutFormat::Text);
        assert!(logger.path().is_none());
    }

    #[test]
    fn test_empty_config_means_defaults() {
        let logger = StructuredLogger::new(Some(&LogConfig::default()), local()).unwrap();
        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(logger.format(), OutFormat::Text);
    }

    #[test]
    fn test_partial_config_is_merged_onto_defaults() {
        let config = LogConfig::new("debug", "", "");
        let logger = StructuredLogger::new(Some(&config), local()).unwrap();

        assert_eq!(logger.level(), LogLevel::Debug);
        assert_eq!(logger.format(), OutFormat::Text);
    }

    #[test]
    fn test_unknown_and_empty_level_errors_are_distinct() {
        let logger = StructuredLogger::new(None, local()).unwrap();

        let unknown = logger
            .configure(&LogConfig::new("verbose", "text", ""))
            .unwrap_err();
        let empty = logger.configure(&LogConfig::new("", "text", "")).unwrap_err();

        assert!(matches!(unknown, LogError::Config(ConfigError::UnknownLevel(_))));
        assert!(matches!(empty, LogError::Config(ConfigError::MissingLevel)));
        assert!(unknown.to_string().contains("unknown log level: verbose"));
        assert!(empty.to_string().contains("please provide a log level"));
    }

    #[test]
    fn test_unknown_format_is_config_error() {
        let err = StructuredLogger::new(Some(&LogConfig::new("", "xml", "")), local()).unwrap_err();
        assert!(matches!(err, LogError::Config(ConfigError::UnknownFormat(ref f)) if f == "xml"));
    }

    #[test]
    fn test_missing_parent_directory_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("sub").join("out.log");
        let config = LogConfig::new("info", "json", outfile.to_string_lossy());

        let err = StructuredLogger::new(Some(&config), local()).unwrap_err();
        match err {
            LogError::Config(ConfigError::MissingDirectory(missing)) => {
                assert_eq!(missing, dir.path().join("sub"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!outfile.exists());
    }

    #[test]
    fn test_file_routing_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let outfile = dir.path().join("sub").join("out.log");
        std::fs::write(&outfile, "existing\n").unwrap();

        let padded = format!("  {}  ", outfile.display());
        let config = LogConfig::new("info", "text", padded);
        let logger = StructuredLogger::new(Some(&config), local()).unwrap();
        assert_eq!(logger.path(), Some(outfile.clone()));

        logger.info("first", &[]);
        logger.error("second", &[f("code", 7)]);

        let lines = read_lines(&outfile);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "existing");
        assert!(lines[1].contains("msg=first"));
        assert!(lines[2].contains("level=error msg=second code=7"));
    }

    #[test]
    fn test_error_level_filters_debug_and_info() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("filtered.log");
        let exits = Arc::new(AtomicI32::new(0));
        let seen = exits.clone();

        let config = LogConfig::new("error", "json", outfile.to_string_lossy());
        let logger = StructuredLogger::new(Some(&config), local())
            .unwrap()
            .with_exit_handler(move |code| seen.store(code, Ordering::SeqCst));

        logger.debug("hidden", &[]);
        logger.info("hidden", &[]);
        logger.error("shown", &[]);
        logger.fatal("last words", &[]);

        let records = json_lines(&outfile);
        let levels: Vec<_> = records.iter().map(|r| r["level"].clone()).collect();
        assert_eq!(levels, vec!["error", "fatal"]);
        assert_eq!(records[1]["msg"], "last words");
        assert_eq!(exits.load(Ordering::SeqCst), FATAL_EXIT_CODE);
    }

    #[test]
    fn test_records_carry_fields_and_call_site() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("fields.log");
        let config = LogConfig::new("debug", "json", outfile.to_string_lossy());
        let logger = StructuredLogger::new(Some(&config), local()).unwrap();

        let line = line!() + 1;
        logger.debug("login", &[f("user", "bob"), f("attempt", 1), f("user", "alice")]);

        let records = json_lines(&outfile);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record["msg"], "login");
        assert_eq!(record["user"], "alice");
        assert_eq!(record["attempt"], 1);
        assert_eq!(record["src"], format!("structured.rs:{}", line));
        assert!(record["pkg"].as_str().unwrap().ends_with("logging/structured"));
    }

    #[test]
    fn test_call_site_overrides_user_supplied_pkg() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("site.log");
        let config = LogConfig::new("info", "json", outfile.to_string_lossy());
        let logger = StructuredLogger::new(Some(&config), local()).unwrap();

        let site = CallSite::new("billing/invoice", "invoice.rs:88");
        logger.log(Level::Info, "explicit", &[f("pkg", "spoofed")], &site);

        let record = &json_lines(&outfile)[0];
        assert_eq!(record["pkg"], "billing/invoice");
        assert_eq!(record["src"], "invoice.rs:88");
    }

    #[test]
    fn test_lines_write_one_record_each_with_shared_site() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("lines.log");
        let config = LogConfig::new("info", "json", outfile.to_string_lossy());
        let logger = StructuredLogger::new(Some(&config), local()).unwrap();

        let line = line!() + 1;
        logger.info_lines(&["alpha", "beta", "gamma"], &[f("batch", 3)]);

        let records = json_lines(&outfile);
        assert_eq!(records.len(), 3);
        for (record, msg) in records.iter().zip(["alpha", "beta", "gamma"]) {
            assert_eq!(record["msg"], msg);
            assert_eq!(record["batch"], 3);
            assert_eq!(record["src"], format!("structured.rs:{}", line));
        }
    }

    #[test]
    fn test_failed_configure_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("keep.log");
        let config = LogConfig::new("debug", "json", outfile.to_string_lossy());
        let logger = StructuredLogger::new(Some(&config), local()).unwrap();

        let missing = dir.path().join("nope").join("other.log");
        let err = logger
            .configure(&LogConfig::new("error", "text", missing.to_string_lossy()))
            .unwrap_err();
        assert!(err.is_config());

        assert_eq!(logger.path(), Some(outfile.clone()));
        assert_eq!(logger.level(), LogLevel::Debug);
        assert_eq!(logger.format(), OutFormat::Json);

        logger.debug("still here", &[]);
        assert_eq!(json_lines(&outfile)[0]["msg"], "still here");
    }

    #[test]
    fn test_reconfigure_to_stdout_clears_path() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("switch.log");
        let config = LogConfig::new("info", "text", outfile.to_string_lossy());
        let logger = StructuredLogger::new(Some(&config), local()).unwrap();

        logger.configure(&LogConfig::new("error", "json", "")).unwrap();
        assert!(logger.path().is_none());
        assert_eq!(logger.level(), LogLevel::Error);
        assert_eq!(logger.format(), OutFormat::Json);
    }

    #[test]
    fn test_directory_check_failure_is_config_error() {
        let config = LogConfig::new("info", "text", "/var/log/app.log");
        let err = StructuredLogger::new(Some(&config), Arc::new(BrokenFs)).unwrap_err();

        assert!(matches!(
            err,
            LogError::Config(ConfigError::DirectoryCheck { ref dir, .. })
                if dir.as_path() == Path::new("/var/log")
        ));
        assert!(err.to_string().starts_with("unable to check if logfile parent directory /var/log exists"));
    }

    #[test]
    fn test_open_failure_is_io_error() {
        let config = LogConfig::new("info", "text", "/var/log/app.log");
        let err = StructuredLogger::new(Some(&config), Arc::new(ReadOnlyFs)).unwrap_err();

        assert!(!err.is_config());
        assert!(matches!(
            err,
            LogError::Io { ref path, .. } if path.as_path() == Path::new("/var/log/app.log")
        ));
    }

    #[test]
    fn test_bare_file_name_checks_current_directory() {
        struct RecordingFs(Mutex<Vec<PathBuf>>);

        impl FileSystem for RecordingFs {
            fn dir_exists(&self, dir: &Path) -> io::Result<bool> {
                self.0.lock().unwrap().push(dir.to_path_buf());
                Ok(false)
            }

            fn open_append(&self, _path: &Path) -> io::Result<File> {
                unreachable!()
            }
        }

        let fs = Arc::new(RecordingFs(Mutex::new(Vec::new())));
        let config = LogConfig::new("info", "text", "app.log");
        let err = StructuredLogger::new(Some(&config), fs.clone()).unwrap_err();

        assert!(matches!(err, LogError::Config(ConfigError::MissingDirectory(_))));
        assert_eq!(*fs.0.lock().unwrap(), vec![PathBuf::from(".")]);
    }

    #[test]
    fn test_concurrent_logging_writes_whole_lines() {
        let dir = tempfile::tempdir().unwrap();
        let outfile = dir.path().join("threads.log");
        let config = LogConfig::new("debug", "json", outfile.to_string_lossy());
        let logger = Arc::new(StructuredLogger::new(Some(&config), local()).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let logger = logger.clone();
                std::thread::spawn(move || {
                    for seq in 0..100 {
                        let payload = "x".repeat(64 + seq);
                        logger.info("tick", &[f("worker", worker), f("seq", seq), f("payload", payload)]);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let records = json_lines(&outfile);
        assert_eq!(records.len(), 800);

        let mut per_worker = [0usize; 8];
        for record in &records {
            assert_eq!(record["msg"], "tick");
            let worker = record["worker"].as_u64().unwrap() as usize;
            let seq = record["seq"].as_u64().unwrap() as usize;
            assert_eq!(record["payload"].as_str().unwrap().len(), 64 + seq);
            per_worker[worker] += 1;
        }
        assert!(per_worker.iter().all(|&count| count == 100));
    }
}
