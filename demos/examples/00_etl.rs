use std::fs::{self, File};

use macropanel::{Etl, PipelineStatus, write_csv};
use macropanel_demos::common::{get_connector, init_tracing, output_dir};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let etl = Etl::builder().with_connector(get_connector()).build()?;
    let today = chrono::Utc::now().date_naive();
    let out = etl.run(today).await?;

    let dir = output_dir();
    fs::create_dir_all(&dir)?;

    for (report, panel, file) in [
        (&out.summary.macro_panel, &out.macro_panel, "macro_data.csv"),
        (&out.summary.market_panel, &out.market_panel, "market_data.csv"),
    ] {
        match (&report.status, panel) {
            (PipelineStatus::Succeeded { rows, columns }, Some(panel)) => {
                let path = dir.join(file);
                write_csv(panel, File::create(&path)?)?;
                println!(
                    "{} panel: {rows} rows x {columns} columns -> {}",
                    report.pipeline,
                    path.display()
                );
            }
            (PipelineStatus::Failed(e), _) => println!("{} panel failed: {e}", report.pipeline),
            _ => {}
        }
        for warning in &report.warnings {
            println!("  warning: {warning}");
        }
    }

    Ok(())
}
