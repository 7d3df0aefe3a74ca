use super::Profile;

/// Synthetic daily close profile for a Yahoo ticker.
pub fn by_ticker(ticker: &str) -> Option<Profile> {
    let p = match ticker {
        "EURUSD=X" => Profile::new(1.15, 0.0, 0.08, 1_095.0),
        "GBPUSD=X" => Profile::new(1.40, -0.000_02, 0.10, 1_095.0),
        "JPY=X" => Profile::new(110.0, 0.0, 12.0, 1_460.0),
        "DX-Y.NYB" => Profile::new(95.0, 0.0, 6.0, 1_460.0),
        "CL=F" => Profile::new(70.0, 0.0, 25.0, 1_825.0),
        "HG=F" => Profile::new(3.0, 0.000_1, 0.6, 1_460.0),
        "GC=F" => Profile::new(900.0, 0.15, 120.0, 1_825.0),
        "^GSPC" => Profile::new(1_200.0, 0.45, 150.0, 1_095.0),
        "^IXIC" => Profile::new(2_200.0, 1.4, 400.0, 1_095.0),
        "^VIX" => Profile::new(19.0, 0.0, 7.0, 365.0),
        _ => return None,
    };
    Some(p)
}
