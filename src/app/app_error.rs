use crate::app::prefs::ConfigError;
use ggez::GameError;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    ConfigError(ConfigError),
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl AppErrorType {
    /// Process exit status for an error that stopped the game from starting
    pub fn exit_code(&self) -> i32 {
        match self {
            AppErrorType::GameError(_) => 1,
            AppErrorType::ConfigError(_) => 2,
        }
    }
}

impl Display for AppErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorType::GameError(e) => write!(f, "ggez: {}", e),
            AppErrorType::ConfigError(e) => write!(f, "invalid preferences: {}", e),
        }
    }
}

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self(AppErrorType::ConfigError(e), vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn error_type(&self) -> &AppErrorType {
        &self.0
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        for t in (self.1).iter().rev() {
            write!(f, "\n in {}", t)?;
        }
        Ok(())
    }
}

impl Error for AppError {}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_in_reverse_order() {
        let result: AppResult = Err(AppError::from(ConfigError::ZeroFps));
        let err = result
            .with_trace_step("validate")
            .with_trace_step("main")
            .unwrap_err();

        let text = format!("{}", err);
        let main = text.find(" in main").unwrap();
        let validate = text.find(" in validate").unwrap();
        assert!(main < validate);
        assert!(matches!(err.error_type(), AppErrorType::ConfigError(ConfigError::ZeroFps)));
    }

    #[test]
    fn test_display_shows_config_message() {
        let err = AppError::from(ConfigError::Speed(-1.)).with_trace_step("reading preferences");
        let text = err.to_string();
        assert!(text.starts_with("invalid preferences: starting speed must be positive, got -1"));
        assert!(text.ends_with(" in reading preferences"));
        assert!(!text.contains("Speed("));
        assert_eq!(err.error_type().exit_code(), 2);
    }
}
