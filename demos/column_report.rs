//! Type inference showcase.
//!
//! Builds one table with a column of each flavor and prints the full
//! per-column report, so the inference cascade and per-type statistics are
//! visible in one place.

use std::error::Error;
use tabprep::report::column_report;
use tabprep::table::{Column, Table};
use tabprep::value::Value;
use tabprep::{InferOptions, ProfileOptions};

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let table = Table::new(vec![
        Column::new(
            "active",
            vec![text("Yes"), text("no"), text("yes"), Value::Missing, text("no")],
        ),
        Column::new(
            "joined",
            vec![
                text("2021-03-01"),
                text("2022-11-15"),
                text("2021-03-01"),
                text("2023-06-30"),
                text("2020-01-05"),
            ],
        ),
        Column::new(
            "score",
            vec![
                Value::Number(1.5),
                Value::Number(7.0),
                text("3.25"), // numeric stored as text still counts
                Value::Number(4.0),
                Value::Missing,
            ],
        ),
        Column::new(
            "tier",
            vec![text("gold"), text("silver"), text("gold"), text("gold"), text("silver")],
        ),
        Column::new(
            "comment",
            vec![
                text("first order"),
                text("asked for refund"),
                Value::Missing,
                text("repeat customer, very happy"),
                text("n-a"),
            ],
        ),
    ])?;

    for column in table.columns() {
        let report = column_report(
            column,
            &InferOptions::default(),
            &ProfileOptions::default(),
        );
        println!("{}\n", report);
    }

    Ok(())
}
