use chrono::NaiveDate;
use macropanel::{DuplicatePolicy, Etl, Frequency, SeriesSpec, to_csv_string};
use macropanel_demos::common::{get_connector, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // A two-series curve panel over one quarter, strict about duplicate dates
    let etl = Etl::builder()
        .with_connector(get_connector())
        .macro_catalog(vec![
            SeriesSpec::new("DGS10", "10Y_Yield", Frequency::Daily),
            SeriesSpec::new("DGS2", "2Y_Yield", Frequency::Daily),
        ])
        .market_catalog(vec![SeriesSpec::new("^VIX", "VIX", Frequency::Daily)])
        .start(NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?)
        .end(NaiveDate::from_ymd_opt(2024, 3, 31).ok_or("bad date")?)
        .duplicate_policy(DuplicatePolicy::Reject)
        .build()?;

    let calendar = etl.calendar(chrono::Utc::now().date_naive())?;
    let derived = etl.macro_panel(&calendar).await?;

    print!("{}", to_csv_string(&derived.panel)?);
    println!("skipped {} derived columns", derived.skipped.len());
    Ok(())
}
