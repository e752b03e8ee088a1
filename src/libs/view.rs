use super::report::ReportRow;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn report(rows: &[ReportRow]) {
        let mut table = Table::new();

        table.add_row(row!["EMAIL", "USER TYPE", "COMMENTED AT", "WEEKENDS", "RESPONSE TIME"]);
        for report_row in rows {
            table.add_row(row![
                report_row.email,
                report_row.user_type,
                report_row.commented_at,
                report_row.weekends,
                report_row.response_time
            ]);
        }
        table.printstd();
    }
}
