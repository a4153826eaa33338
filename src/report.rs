use log::Level;

pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.report(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}

pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        if level <= Level::Warn {
            println!("{}", message);
        }
        log::log!(level, "{}", message);
    }
}

#[cfg(test)]
pub use recording::RecordingReporter;
