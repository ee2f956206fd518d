use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::status::ReportedStatus;

/// One observation of a payment's status, as exported from the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    pub status: ReportedStatus,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct StatusSummaryRow {
    pub status: ReportedStatus,
    pub group: &'static str,
    pub error: bool,
    pub count: u64,
    pub total: Decimal,
}

pub(crate) const UNKNOWN_GROUP: &str = "unknown";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::PaymentStatus;
    use rust_decimal_macros::dec;

    fn parse_csv_row(row: &str) -> Result<PaymentRecord, csv::Error> {
        let data_with_header = format!("id,status,amount\n{}", row);
        let mut reader = csv::Reader::from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    #[test]
    fn test_parse_known_status() {
        assert_eq!(
            parse_csv_row("P0000001,PROCESSED,12.50").unwrap(),
            PaymentRecord {
                id: "P0000001".to_owned(),
                status: ReportedStatus::Known(PaymentStatus::Processed),
                amount: Some(dec!(12.50)),
            }
        );
    }

    #[test]
    fn test_parse_error_status_without_amount() {
        assert_eq!(
            parse_csv_row("P0000002,ER_EXTCONN,").unwrap(),
            PaymentRecord {
                id: "P0000002".to_owned(),
                status: ReportedStatus::Known(PaymentStatus::ErExtconn),
                amount: None,
            }
        );
    }

    #[test]
    fn test_parse_unknown_status_is_kept() {
        assert_eq!(
            parse_csv_row("P0000003,PENDING_APPROVAL,1").unwrap(),
            PaymentRecord {
                id: "P0000003".to_owned(),
                status: ReportedStatus::Unknown("PENDING_APPROVAL".to_owned()),
                amount: Some(dec!(1)),
            }
        );
    }

    #[test]
    fn test_numeric_status_token_is_unknown() {
        let record = parse_csv_row("P0000004,404,1").unwrap();
        assert_eq!(record.status, ReportedStatus::Unknown("404".to_owned()));
    }

    #[test]
    fn test_lowercase_status_is_not_aliased() {
        let record = parse_csv_row("P0000005,processed,1").unwrap();
        assert_eq!(record.status, ReportedStatus::Unknown("processed".to_owned()));
    }

    #[test]
    fn test_parse_invalid_amount_format() {
        let result = parse_csv_row("P0000006,PROCESSED,abc");
        assert!(result.is_err());
    }

    #[test]
    fn test_write_summary_row() {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.serialize(StatusSummaryRow {
            status: ReportedStatus::Known(PaymentStatus::Cancelled),
            group: PaymentStatus::Cancelled.group().into(),
            error: false,
            count: 2,
            total: dec!(30.5),
        })
        .unwrap();
        let output = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "status,group,error,count,total\nCANCELLED,terminal_non_error,false,2,30.5\n"
        );
    }
}
