use crate::process::utils::is_number;
use anyhow::{Context, Result};
use rusqlite::types::Value;

/// Convert one row's fields into bind values.
///
/// Each field is checked on its own: numeric-looking fields bind as `REAL`,
/// everything else as text, whatever the column was declared as.
pub fn convert_fields(fields: &[String]) -> Result<Vec<Value>> {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| convert_field(field).with_context(|| format!("field {}", idx)))
        .collect()
}

fn convert_field(field: &str) -> Result<Value> {
    if is_number(field) {
        let v: f64 = field
            .parse()
            .with_context(|| format!("cannot parse {:?} as a float", field))?;
        Ok(Value::Real(v))
    } else {
        Ok(Value::Text(field.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_become_real_everything_else_text() -> Result<()> {
        let fields: Vec<String> = ["1", "Alice", "9.5", "", "-2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let values = convert_fields(&fields)?;
        assert_eq!(
            values,
            vec![
                Value::Real(1.0),
                Value::Text("Alice".into()),
                Value::Real(9.5),
                Value::Text(String::new()),
                Value::Text("-2".into()),
            ]
        );
        Ok(())
    }

    #[test]
    fn huge_integers_still_convert() -> Result<()> {
        let values = convert_fields(&["123456789012345678901234567890".to_string()])?;
        assert!(matches!(values[0], Value::Real(v) if v > 1e29));
        Ok(())
    }
}
