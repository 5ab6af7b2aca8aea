//! Course-proposal workbook adapter. Implements CourseSource.

pub mod extractor;
pub mod layout;
pub mod sheet;

pub use extractor::CsvWorkbookSource;
pub use sheet::Sheet;
