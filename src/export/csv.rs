//! CSV Export functionality
//!
//! One row per movement, amounts as plain decimals with expenses negative.

use serde::Serialize;
use std::io::Write;

use crate::error::FinanzasResult;
use crate::models::Movement;

#[derive(Serialize)]
struct MovementRecord<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Recurring")]
    recurring: bool,
}

impl<'a> From<&'a Movement> for MovementRecord<'a> {
    fn from(movement: &'a Movement) -> Self {
        let signed = movement.signed_amount();
        Self {
            id: movement.id.as_uuid().to_string(),
            date: movement.date.to_rfc3339(),
            kind: movement.movement_type.key(),
            category: movement.category.key(),
            title: &movement.title,
            amount: format!(
                "{}{}.{:02}",
                if signed.is_negative() { "-" } else { "" },
                signed.units().abs(),
                signed.cents_part()
            ),
            recurring: movement.is_recurring,
        }
    }
}

/// Write `movements` as CSV with a header row
pub fn export_movements_csv<W: Write>(movements: &[Movement], writer: W) -> FinanzasResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for movement in movements {
        csv_writer.serialize(MovementRecord::from(movement))?;
    }

    // An empty export still gets its header
    if movements.is_empty() {
        csv_writer.write_record(["ID", "Date", "Type", "Category", "Title", "Amount", "Recurring"])?;
    }

    csv_writer
        .flush()
        .map_err(|e| crate::error::FinanzasError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_csv_export() {
        let date = Utc.with_ymd_and_hms(2026, 10, 5, 14, 0, 0).unwrap();
        let movements = vec![
            Movement::expense(Category::Transport, Money::from_cents(2550))
                .title("Uber, centro")
                .date(date)
                .build()
                .unwrap(),
            Movement::income(Category::Salary, Money::from_units(1000))
                .date(date)
                .recurring(true)
                .build()
                .unwrap(),
        ];

        let mut buffer = Vec::new();
        export_movements_csv(&movements, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Date,Type,Category,Title,Amount,Recurring");
        assert!(lines[1].contains("expense,transporte,\"Uber, centro\",-25.50,false"));
        assert!(lines[2].contains("income,sueldo,,1000.00,true"));
        assert!(lines[1].contains("2026-10-05T14:00:00+00:00"));
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut buffer = Vec::new();
        export_movements_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "ID,Date,Type,Category,Title,Amount,Recurring\n"
        );
    }
}
