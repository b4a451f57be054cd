use super::GridError;
use std::io::Read;
use std::path::Path;

/// An ordered set of wavevector magnitudes.
///
/// Every value is finite and non-negative; the order is whatever the caller supplied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KGrid {
    values: Vec<f64>,
}

impl KGrid {
    /// Evenly spaced grid from `k_min` to `k_max`, both inclusive.
    ///
    /// A single point yields `[k_min]`.
    pub fn uniform(k_min: f64, k_max: f64, num_points: usize) -> Result<Self, GridError> {
        if num_points == 0 {
            return Err(GridError::InvalidSpec(
                "a grid needs at least one point".to_string(),
            ));
        }
        if !k_min.is_finite() || !k_max.is_finite() {
            return Err(GridError::InvalidSpec(format!(
                "grid bounds must be finite (k-min = {}, k-max = {})",
                k_min, k_max
            )));
        }
        if k_min < 0.0 {
            return Err(GridError::InvalidSpec(format!(
                "k-min must be non-negative, got {}",
                k_min
            )));
        }
        if k_max < k_min {
            return Err(GridError::InvalidSpec(format!(
                "k-max ({}) is smaller than k-min ({})",
                k_max, k_min
            )));
        }

        if num_points == 1 {
            return Ok(Self {
                values: vec![k_min],
            });
        }

        let spacing = (k_max - k_min) / (num_points - 1) as f64;
        let mut values: Vec<f64> = (0..num_points)
            .map(|i| k_min + i as f64 * spacing)
            .collect();
        if let Some(last) = values.last_mut() {
            *last = k_max;
        }
        Ok(Self { values })
    }

    /// Wraps explicit values after validating them.
    pub fn from_values(values: Vec<f64>) -> Result<Self, GridError> {
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(GridError::InvalidSpec(format!(
                "wavevector #{} must be finite and non-negative, got {}",
                index, value
            )));
        }
        Ok(Self { values })
    }

    /// Reads one wavevector per row from a CSV file.
    ///
    /// Only the first column is used. Lines starting with `#` are ignored, and a first row that
    /// does not parse as a number is treated as a header.
    pub fn read_from_path(path: &Path) -> Result<Self, GridError> {
        let label = path.to_string_lossy().to_string();
        let file = std::fs::File::open(path).map_err(|e| GridError::Io {
            path: label.clone(),
            source: e,
        })?;
        Self::read_from(file, &label)
    }

    /// Same as [`KGrid::read_from_path`] for any reader; `label` is used in error messages.
    pub fn read_from<R: Read>(reader: R, label: &str) -> Result<Self, GridError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut values = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| GridError::Csv {
                path: label.to_string(),
                source: e,
            })?;
            let line = record.position().map_or(row as u64 + 1, |p| p.line());

            let Some(field) = record.get(0).filter(|f| !f.is_empty()) else {
                continue;
            };

            let value: f64 = match field.parse() {
                Ok(value) => value,
                Err(_) if row == 0 => continue,
                Err(_) => {
                    return Err(GridError::InvalidValue {
                        path: label.to_string(),
                        line,
                        message: format!("'{}' is not a number", field),
                    });
                }
            };

            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidValue {
                    path: label.to_string(),
                    line,
                    message: format!("{} is not a finite, non-negative wavevector", value),
                });
            }
            values.push(value);
        }

        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Reads a wavevector grid from a CSV file. See [`KGrid::read_from_path`].
pub fn read_grid(path: &Path) -> Result<KGrid, GridError> {
    KGrid::read_from_path(path)
}

impl AsRef<[f64]> for KGrid {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn uniform_grid_includes_both_endpoints() {
        let grid = KGrid::uniform(0.0, 2.0, 5).unwrap();
        assert_eq!(grid.values(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn uniform_grid_with_one_point_is_k_min() {
        let grid = KGrid::uniform(0.25, 10.0, 1).unwrap();
        assert_eq!(grid.values(), &[0.25]);
    }

    #[test]
    fn uniform_grid_last_point_is_exactly_k_max() {
        let grid = KGrid::uniform(0.0, 0.3, 7).unwrap();
        assert_eq!(grid.len(), 7);
        assert_eq!(*grid.values().last().unwrap(), 0.3);
    }

    #[test]
    fn uniform_grid_rejects_bad_specifications() {
        assert!(matches!(
            KGrid::uniform(0.0, 1.0, 0),
            Err(GridError::InvalidSpec(_))
        ));
        assert!(matches!(
            KGrid::uniform(2.0, 1.0, 10),
            Err(GridError::InvalidSpec(_))
        ));
        assert!(matches!(
            KGrid::uniform(-1.0, 1.0, 10),
            Err(GridError::InvalidSpec(_))
        ));
        assert!(matches!(
            KGrid::uniform(0.0, f64::INFINITY, 10),
            Err(GridError::InvalidSpec(_))
        ));
    }

    #[test]
    fn from_values_rejects_negative_and_non_finite_entries() {
        assert!(KGrid::from_values(vec![0.0, 1.0]).is_ok());
        assert!(KGrid::from_values(vec![0.0, -1.0]).is_err());
        assert!(KGrid::from_values(vec![f64::NAN]).is_err());
    }

    #[test]
    fn read_from_skips_header_comments_and_extra_columns() {
        let data = "k,weight\n# a comment\n0.0,1\n 0.5 ,2\n1.5\n";
        let grid = KGrid::read_from(data.as_bytes(), "inline").unwrap();
        assert_eq!(grid.values(), &[0.0, 0.5, 1.5]);
    }

    #[test]
    fn read_from_without_header_keeps_first_row() {
        let grid = KGrid::read_from("0.1\n0.2\n".as_bytes(), "inline").unwrap();
        assert_eq!(grid.values(), &[0.1, 0.2]);
    }

    #[test]
    fn read_from_reports_line_of_invalid_value() {
        let err = KGrid::read_from("0.1\n0.2\nabc\n".as_bytes(), "inline").unwrap_err();
        match err {
            GridError::InvalidValue { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn read_from_rejects_negative_wavevectors() {
        let err = KGrid::read_from("0.1\n-0.2\n".as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, GridError::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn read_from_path_round_trips_through_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "k").unwrap();
        writeln!(file, "0.0").unwrap();
        writeln!(file, "3.5").unwrap();
        file.flush().unwrap();

        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid.values(), &[0.0, 3.5]);
    }

    #[test]
    fn read_from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KGrid::read_from_path(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, GridError::Io { .. }));
    }
}
