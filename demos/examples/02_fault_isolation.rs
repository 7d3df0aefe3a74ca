use std::sync::Arc;
use std::time::Duration;

use macropanel::{Etl, PanelConnector, PanelError, SeriesProvider};
use macropanel_mock::{DynamicMockConnector, MockBehavior, MockConnector};

// Serves fixture series but no quotes, so the market pipeline has a single source.
struct SeriesOnly(MockConnector);

impl PanelConnector for SeriesOnly {
    fn name(&self) -> &'static str {
        "series-only"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        self.0.as_series_provider()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    macropanel_demos::common::init_tracing();

    // The dynamic mock is registered first: it hangs on quotes and fails CPI.
    // The fixture mock behind it covers the macro series, so only the market
    // pipeline goes down.
    let (flaky, controller) = DynamicMockConnector::new_with_controller("flaky");
    controller.set_bulk_behavior(MockBehavior::Hang).await;
    controller
        .set_series_behavior(
            "CPIAUCSL",
            MockBehavior::Fail(PanelError::Other("maintenance".into())),
        )
        .await;

    let etl = Etl::builder()
        .with_connector(flaky)
        .with_connector(Arc::new(SeriesOnly(MockConnector::new())))
        .provider_timeout(Duration::from_millis(200))
        .lookback_days(730)
        .build()?;

    let out = etl.run(chrono::Utc::now().date_naive()).await?;
    for report in [&out.summary.macro_panel, &out.summary.market_panel] {
        match report.error() {
            None => println!("{}: ok", report.pipeline),
            Some(e) => println!("{}: {e}", report.pipeline),
        }
    }
    Ok(())
}
