use crate::libs::report::FormattedRow;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn attendance(rows: &[FormattedRow]) {
        let mut table = Table::new();

        table.add_row(row!["NAME", "USER ID", "WORK TIME", "BREAKS", "BREAK TIME", "SMOKING", "SMOKING TIME"]);
        for r in rows {
            table.add_row(row![
                r.name,
                r.user_id,
                r.work_time,
                r.break_count,
                r.break_time,
                r.smoking_count,
                r.smoking_time
            ]);
        }
        table.printstd();
    }
}
