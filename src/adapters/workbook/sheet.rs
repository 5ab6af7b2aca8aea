//! One workbook sheet as a CSV grid, addressed with A1-style cell references.

use crate::domain::DomainError;

/// Parse `C3` into 1-based `(row, col)`. Column letters are case-insensitive.
pub fn parse_address(addr: &str) -> Option<(usize, usize)> {
    let addr = addr.trim();
    let split = addr.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = addr.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let col = letters
        .chars()
        .fold(0usize, |acc, c| acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1));
    let row: usize = digits.parse().ok()?;
    (row > 0).then_some((row, col))
}

/// A sheet loaded from CSV. Rows and columns may be ragged.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Read a headerless, possibly ragged CSV grid.
    pub fn from_reader<R: std::io::Read>(name: &str, reader: R) -> Result<Self, DomainError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record =
                record.map_err(|e| DomainError::Extract(format!("sheet '{}': {}", name, e)))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self {
            name: name.to_string(),
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed value at 1-based `(row, col)`; blank cells read as `None`.
    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row.checked_sub(1)?)?
            .get(col.checked_sub(1)?)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn cell(&self, addr: &str) -> Result<Option<&str>, DomainError> {
        let (row, col) = parse_address(addr).ok_or_else(|| {
            DomainError::Extract(format!("sheet '{}': bad cell address '{}'", self.name, addr))
        })?;
        Ok(self.value(row, col))
    }

    /// Cell text, empty when blank.
    pub fn text(&self, addr: &str) -> Result<String, DomainError> {
        Ok(self.cell(addr)?.unwrap_or_default().to_string())
    }

    /// Cell as an integer. Blank or unparseable cells read as 0; `3.0` reads as 3.
    pub fn int(&self, addr: &str) -> Result<i64, DomainError> {
        Ok(self
            .cell(addr)?
            .and_then(|v| {
                v.parse::<i64>()
                    .ok()
                    .or_else(|| v.parse::<f64>().ok().map(|f| f as i64))
            })
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("A1"), Some((1, 1)));
        assert_eq!(parse_address("c3"), Some((3, 3)));
        assert_eq!(parse_address("AA10"), Some((10, 27)));
        assert_eq!(parse_address("K4"), Some((4, 11)));
        assert_eq!(parse_address("3C"), None);
        assert_eq!(parse_address("C0"), None);
        assert_eq!(parse_address("C"), None);
    }

    #[test]
    fn test_ragged_grid_lookup() {
        let csv = "a,b,c\n,, Provider \nx\n";
        let sheet = Sheet::from_reader("s", csv.as_bytes()).unwrap();
        assert_eq!(sheet.cell("C2").unwrap(), Some("Provider"));
        assert_eq!(sheet.cell("B3").unwrap(), None);
        assert_eq!(sheet.cell("Z99").unwrap(), None);
        assert_eq!(sheet.text("A2").unwrap(), "");
    }

    #[test]
    fn test_int_cells() {
        let sheet = Sheet::from_reader("s", "3,3.0,abc,".as_bytes()).unwrap();
        assert_eq!(sheet.int("A1").unwrap(), 3);
        assert_eq!(sheet.int("B1").unwrap(), 3);
        assert_eq!(sheet.int("C1").unwrap(), 0);
        assert_eq!(sheet.int("D1").unwrap(), 0);
    }

    #[test]
    fn test_bad_address_is_error() {
        let sheet = Sheet::from_reader("s", "a".as_bytes()).unwrap();
        assert!(matches!(sheet.cell("??"), Err(DomainError::Extract(_))));
    }
}
