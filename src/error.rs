#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("rectangle size should be positive, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),
    #[error("no free position found after {steps} spiral steps")]
    SearchExhausted { steps: usize },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
