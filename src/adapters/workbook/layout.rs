//! Fixed cell layout of the course-proposal workbook.
//!
//! One CSV file per sheet, named after the sheet (e.g. `3 - Summary.csv`).

// Sheet names
pub const SHEET_PARTICULARS: &str = "1 - Course Particulars";
pub const SHEET_BACKGROUND: &str = "2 - Background";
pub const SHEET_INSTRUCTIONAL_DESIGN: &str = "3 - Instructional Design";
pub const SHEET_METHODOLOGIES: &str = "3 - Methodologies";
pub const SHEET_SUMMARY: &str = "3 - Summary";

pub const ALL_SHEETS: [&str; 5] = [
    SHEET_PARTICULARS,
    SHEET_BACKGROUND,
    SHEET_INSTRUCTIONAL_DESIGN,
    SHEET_METHODOLOGIES,
    SHEET_SUMMARY,
];

// Course Particulars
pub const CELL_TRAINING_PROVIDER: &str = "C2";
pub const CELL_COURSE_TITLE: &str = "C3";
pub const CELL_COURSE_TYPE: &str = "C4";
pub const CELL_ABOUT_COURSE: &str = "C6";
pub const CELL_WHAT_YOULL_LEARN: &str = "C7";
/// Unique skill names run down column C until the first blank.
pub const UNIQUE_SKILL_COL: &str = "C";
pub const UNIQUE_SKILL_START_ROW: usize = 10;
pub const UNIQUE_SKILL_MAX_ROW: usize = 79;

// Background (merged ranges B4:H6 and B8:H10; value sits in the top-left cell)
pub const CELL_TARGETED_SECTORS: &str = "B4";
pub const CELL_PERFORMANCE_GAPS: &str = "B8";

// Instructional Design: one learning outcome per row until the LO number is blank
pub const ID_DATA_START_ROW: usize = 15;
pub const ID_COL_DAY: &str = "B";
pub const ID_COL_DURATION: &str = "C";
pub const ID_COL_LO_NUM: &str = "D";
pub const ID_COL_LO_TEXT: &str = "E";
pub const ID_COL_TOPIC: &str = "F";

// Methodologies: instruction methods (B..E) and assessment modes (J..N) side by side
pub const METH_DATA_START_ROW: usize = 7;
pub const METH_COL_DAY: &str = "B";
pub const METH_COL_METHOD: &str = "C";
pub const METH_COL_DURATION: &str = "D";
pub const METH_COL_TRAINING_MODE: &str = "E";

pub const ASSESS_COL_DAY: &str = "J";
pub const ASSESS_COL_MODE: &str = "K";
pub const ASSESS_COL_DURATION: &str = "L";
pub const ASSESS_COL_ASSESSORS: &str = "M";
pub const ASSESS_COL_CANDIDATES: &str = "N";

// Summary
pub const SUMM_TOTAL_COURSE_DURATION: &str = "G3";
pub const SUMM_TOTAL_INSTRUCTIONAL: &str = "G4";
pub const SUMM_TOTAL_ASSESSMENT: &str = "I4";
pub const SUMM_MODE_OF_TRAINING: &str = "K4";
