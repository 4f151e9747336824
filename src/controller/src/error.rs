#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("grid dimensions must be positive, got {width}x{height}")]
	InvalidDimensions { width: usize, height: usize },
	#[error("display scale {0} out of range")]
	InvalidScale(f64),
	#[error("node radius {0} out of range")]
	InvalidNodeRadius(f64),
	#[error("no node at column {column}, row {row}")]
	NodeOutOfBounds { column: i32, row: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;
