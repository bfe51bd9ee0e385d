//! End-to-end preprocessing walkthrough.
//!
//! Writes a small synthetic CSV to a temp file, loads it through a
//! [`Preprocessor`] session, inspects it, cleans it (imputation, outlier
//! handling, scaling, encoding), splits it, and saves the result.

use std::error::Error;
use tabprep::ops::{EncodeMode, FillMethod, OutlierMethod};
use tabprep::{InferOptions, Preprocessor, ProfileOptions, Split};

fn synthetic_csv() -> String {
    let mut csv = String::from("age,income,city,subscribed,signup\n");
    let cities = ["ankara", "istanbul", "izmir"];
    for i in 0..60 {
        let age = if i == 13 {
            String::new() // one missing age
        } else {
            format!("{}", 22 + (i * 7) % 40)
        };
        let income = if i == 41 {
            "900000".to_string() // one extreme outlier
        } else {
            format!("{}", 30000 + (i * 137) % 20000)
        };
        let city = cities[i % cities.len()];
        let subscribed = if i % 3 == 0 { "yes" } else { "no" };
        let signup = format!("2023-{:02}-{:02}", 1 + i % 12, 1 + i % 28);
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            age, income, city, subscribed, signup
        ));
    }
    csv
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::temp_dir().join("tabprep_demo_input.csv");
    std::fs::write(&path, synthetic_csv())?;

    // 1. Load and inspect
    let mut prep = Preprocessor::from_path(&path)?;
    println!("=== Preview ===");
    println!("{}", prep.preview(5)?);
    println!("{}", prep.check_csv(ProfileOptions::default())?);

    println!("=== Column reports ===");
    for name in ["income", "subscribed", "signup"] {
        let report = prep.check_column(
            name,
            &InferOptions::default(),
            &ProfileOptions::default(),
        )?;
        println!("{}\n", report);
    }

    // 2. Clean
    let filled = prep.fill_missing("age", &FillMethod::Median)?;
    println!("filled {} missing age cell(s)", filled);

    let handled = prep.handle_outliers("income", &OutlierMethod::Cap, 3.0)?;
    println!("capped {} income outlier(s)", handled);

    prep.standardize("income")?;
    prep.minmax_scale("age", (0.0, 1.0))?;

    // 3. Encode categoricals
    let k = prep.encode("city", EncodeMode::OneHot)?;
    println!("one-hot encoded city into {} columns", k);
    prep.encode("subscribed", EncodeMode::Label)?;

    // The signup date adds nothing to this model; drop it.
    let outcome = prep.drop_columns(&["signup", "notes"])?;
    println!(
        "dropped {:?}, skipped {:?}",
        outcome.dropped, outcome.skipped
    );

    // 4. Split
    match prep.split("subscribed", 0.7, 0.15, Some(42))? {
        Split::TrainValTest { train, val, test } => {
            println!(
                "train {} rows, val {} rows, test {} rows, {} feature columns",
                train.x.n_rows(),
                val.x.n_rows(),
                test.x.n_rows(),
                train.x.n_cols()
            );
        }
        Split::TrainTest { train, test } => {
            println!(
                "train {} rows, test {} rows",
                train.x.n_rows(),
                test.x.n_rows()
            );
        }
    }

    // 5. Save the cleaned table
    let out = std::env::temp_dir().join("tabprep_demo_clean.csv");
    prep.save_csv(&out, false)?;
    println!("saved cleaned table to {}", out.display());

    std::fs::remove_file(&path).ok();
    Ok(())
}
