use super::GridError;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct OmegaRow {
    k: f64,
    omega: f64,
}

/// Writes `k` and `omega` side by side as CSV with a `k,omega` header.
pub fn write_table<W: Write>(writer: W, k: &[f64], omega: &[f64]) -> Result<(), GridError> {
    if k.len() != omega.len() {
        return Err(GridError::LengthMismatch {
            k: k.len(),
            omega: omega.len(),
        });
    }

    let mut writer = csv::Writer::from_writer(writer);
    if k.is_empty() {
        writer.write_record(["k", "omega"])?;
    }
    for (&k, &omega) in k.iter().zip(omega) {
        writer.serialize(OmegaRow { k, omega })?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
