use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::BeverageLine;
use crate::pricing::calculate_total_cost;

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

/// Write a beverage list to a CSV spreadsheet, followed by a totals row.
pub fn write_csv(lines: &[BeverageLine], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "category",
        "item",
        "quantity",
        "unit",
        "unit_cost",
        "estimated_cost",
    ])?;

    for line in lines {
        wtr.write_record([
            line.category.clone(),
            line.item.clone(),
            line.quantity.to_string(),
            line.unit.clone(),
            money(line.unit_cost),
            money(line.estimated_cost),
        ])?;
    }

    let total_units: u64 = lines.iter().map(|l| u64::from(l.quantity)).sum();
    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        total_units.to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", calculate_total_cost(lines)),
    ])?;

    wtr.flush()?;
    info!(path = %path.display(), lines = lines.len(), "exported beverage list to CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv_includes_totals_row() {
        let lines = vec![
            BeverageLine::new("Vinos", "Rioja Crianza", 10, "botellas").with_unit_cost(8.9),
            BeverageLine::new("Agua", "Agua, sin gas", 5, "botellas"),
        ];
        let file = NamedTempFile::new().unwrap();
        write_csv(&lines, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][4], "8.90");
        assert_eq!(&rows[0][5], "89.00");
        // Quoted field survives the comma.
        assert_eq!(&rows[1][1], "Agua, sin gas");
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[2][0], "TOTAL");
        assert_eq!(&rows[2][2], "15");
        assert_eq!(&rows[2][5], "89.00");
    }
}
