#[cfg(test)]
mod tests {
    use response_times::libs::comment::CommentRecord;
    use response_times::libs::evaluator::Evaluator;
    use response_times::libs::export::{write_rows, ReportWriter};
    use response_times::libs::ticket::Ticket;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        ticket: Ticket,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                ticket: Ticket { id: 123 },
            }
        }
    }

    fn sample_rows() -> Vec<response_times::libs::report::ReportRow> {
        let records = vec![
            CommentRecord::new("jane@customer.com", "end-user", "2024-01-05T10:00:00Z"),
            CommentRecord::new("bob@support.com", "agent", "2024-01-08T10:00:00Z"),
        ];
        Evaluator::default().evaluate_records(&records).unwrap()
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("report.csv");
        let writer = ReportWriter::new(&ctx.ticket, Some(output_path.clone())).unwrap();
        writer.write(&sample_rows()).unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "email,user type,commented at,formula,weekends,response time",
                "jane@customer.com,customer,2024-01-05T10:00:00Z,,,",
                "bob@support.com,agent,2024-01-08T10:00:00Z,2024-01-08T10:00:00Z - 2024-01-05T10:00:00Z - 2 days,\"2024-01-06,2024-01-07\",\"1 day, 0:00:00\"",
            ]
        );
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_report_keeps_header(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("empty.csv");
        ReportWriter::new(&ctx.ticket, Some(output_path.clone())).unwrap().write(&[]).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, "email,user type,commented at,formula,weekends,response time\n");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_overwrites_existing_file(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("again.csv");
        std::fs::write(&output_path, "stale data that is much longer than the new report\n".repeat(20)).unwrap();

        ReportWriter::new(&ctx.ticket, Some(output_path.clone())).unwrap().write(&[]).unwrap();
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_output_path(ctx: &mut ExportTestContext) {
        let writer = ReportWriter::new(&ctx.ticket, None).unwrap();
        assert_eq!(writer.output_path(), std::path::Path::new("123.csv"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_rejects_non_csv_output(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("report.xlsx");
        let err = ReportWriter::new(&ctx.ticket, Some(output_path.clone())).unwrap_err();
        assert!(err.to_string().contains(".csv"));
        assert!(!output_path.exists());

        assert!(ReportWriter::new(&ctx.ticket, Some(ctx.temp_dir.path().join("report"))).is_err());
    }

    #[test]
    fn test_write_rows_to_buffer() {
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &sample_rows()).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 6);
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][4], "2024-01-06,2024-01-07");
        assert_eq!(&records[1][5], "1 day, 0:00:00");
    }
}
