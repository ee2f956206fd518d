//! This demo generates a CSV file of payment status observations for a number
//! of payments supplied as a command-line argument.
//!
//! The CSV file can then be used to exercise the `payment-status` crate.
//!
//! Example (1000 payments):
//! ```bash
//! cargo run --example generator 1000 > data/1K_payments.csv
//! ```
//! ### Shape
//! Every payment `i` (1-based) is observed once per lifecycle step, in rounds:
//! SUBMITTED, VALIDATED, PENDING_FOR_FUNDS, EXT_PROC, then a final status
//! picked from `FINAL_STATUSES[i % FINAL_STATUSES.len()]`. The amount is
//! `BASE_AMOUNT * i` for every observation.
//!
//! Because the latest observation wins, the summary for N payments has one row
//! per final status, each with a count of roughly N / 8. Every eighth payment
//! ends in an error status and every eighth in an unknown one.

use payment_status::{PaymentRecord, PaymentStatus, ReportedStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::{env, error::Error};

const LIFECYCLE: [PaymentStatus; 4] = [
    PaymentStatus::Submitted,
    PaymentStatus::Validated,
    PaymentStatus::PendingForFunds,
    PaymentStatus::ExtProc,
];

const FINAL_STATUSES: [&str; 8] = [
    "PROCESSED",
    "RECONCILED",
    "ER_EXTSYS",
    "RETURNED",
    "CANCELLED",
    "VOID",
    "HELD",
    "AWAITING_RELEASE",
];

const BASE_AMOUNT: Decimal = dec!(12.5);

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_payments>");
        std::process::exit(1);
    }

    let num_payments: u32 = match args[1].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Error: <num_payments> must be a positive integer.");
            std::process::exit(1);
        }
    };

    let mut wtr = csv::Writer::from_writer(std::io::stdout());

    for round in 0..=LIFECYCLE.len() {
        for payment in 1..=num_payments {
            let status = match LIFECYCLE.get(round) {
                Some(step) => ReportedStatus::from(*step),
                None => ReportedStatus::parse(
                    FINAL_STATUSES[payment as usize % FINAL_STATUSES.len()],
                ),
            };
            wtr.serialize(PaymentRecord {
                id: format!("P{:07}", payment),
                status,
                amount: Some(BASE_AMOUNT * Decimal::from(payment)),
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}
