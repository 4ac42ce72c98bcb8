use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::config::SystemConfig;
use crate::error::Result;

/// `log` 後端：帶時間戳寫到 stderr，必要時同時寫入 logs/ 下的檔案
#[derive(Debug)]
pub struct FileLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl FileLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level, file: None }
    }

    /// 在 `log_dir` 建立 `game_<時間戳>.log` 並附加寫入
    pub fn with_file_in<P: AsRef<Path>>(level: LevelFilter, log_dir: P) -> io::Result<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = log_dir.join(format!("game_{}.log", timestamp));
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            level,
            file: Some(Mutex::new(file)),
        })
    }

    /// 依系統配置安裝為全域 logger
    pub fn init(config: &SystemConfig) -> Result<()> {
        let level = LevelFilter::from(config.log_level);
        let logger = if config.log_to_file {
            Self::with_file_in(level, &config.log_dir)?
        } else {
            Self::new(level)
        };

        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format_line(record: &Record) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_line(record);
        eprintln!("{}", line);

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                writeln!(file, "{}", line).ok();
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                file.flush().ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filtering() {
        let logger = FileLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn test_writes_to_log_file() {
        let dir = std::env::temp_dir().join(format!("pixel_game_logs_{}", std::process::id()));
        let logger = FileLogger::with_file_in(LevelFilter::Info, &dir).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("sheet")
                .args(format_args!("loaded {} pixels", 64))
                .build(),
        );
        logger.flush();

        let entry = fs::read_dir(&dir).unwrap().next().unwrap().unwrap();
        let text = fs::read_to_string(entry.path()).unwrap();
        let _ = fs::remove_dir_all(&dir);
        assert!(text.contains("[INFO] [sheet] loaded 64 pixels"));
    }
}
