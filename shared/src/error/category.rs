//! Error category by code range

use super::codes::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 0xxx: the caller sent something unusable
    Request,
    /// 1xxx
    Card,
    /// 2xxx
    Provider,
    /// 9xxx and anything unassigned; logged when rendered
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::Request,
            1000..2000 => Self::Card,
            2000..3000 => Self::Provider,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
