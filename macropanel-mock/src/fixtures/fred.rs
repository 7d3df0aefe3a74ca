use macropanel_core::Frequency;

use super::Profile;

/// Synthetic profile for a FRED series id.
pub fn by_id(id: &str) -> Option<(Frequency, Profile)> {
    let entry = match id {
        "GDP" => (Frequency::Quarterly, Profile::new(10_000.0, 1.6, 40.0, 1_461.0)),
        "GDPC1" => (Frequency::Quarterly, Profile::new(13_000.0, 0.9, 60.0, 1_461.0)),
        "GDPPOT" => (Frequency::Quarterly, Profile::new(13_050.0, 0.9, 0.0, 1.0)),
        "CPIAUCSL" => (Frequency::Monthly, Profile::new(170.0, 0.012, 0.6, 365.0)),
        "PCEPILFE" => (Frequency::Monthly, Profile::new(80.0, 0.005, 0.2, 365.0)),
        "FEDFUNDS" => (Frequency::Monthly, Profile::new(2.5, 0.0, 2.4, 2_920.0)),
        "DGS10" => (Frequency::Daily, Profile::new(3.5, 0.0, 1.2, 2_190.0)),
        // the wider 2Y swing produces periodic curve inversions
        "DGS2" => (Frequency::Daily, Profile::new(2.8, 0.0, 2.2, 2_190.0)),
        "ICSA" => (Frequency::Weekly, Profile::new(300_000.0, 0.0, 60_000.0, 730.0)),
        "PERMIT" => (Frequency::Monthly, Profile::new(1_400.0, 0.02, 250.0, 1_095.0)),
        "PCEC96" => (Frequency::Monthly, Profile::new(10_000.0, 0.8, 50.0, 1_461.0)),
        "RRSFS" => (Frequency::Monthly, Profile::new(170_000.0, 4.0, 1_500.0, 1_095.0)),
        "M2SL" => (Frequency::Monthly, Profile::new(4_500.0, 1.9, 30.0, 730.0)),
        "UMCSENT" => (Frequency::Monthly, Profile::new(85.0, 0.0, 12.0, 1_825.0)),
        "UNRATE" => (Frequency::Monthly, Profile::new(5.5, 0.0, 2.0, 2_920.0)),
        "AWHMAN" => (Frequency::Monthly, Profile::new(41.0, 0.0, 0.6, 1_095.0)),
        "ACOGNO" => (Frequency::Monthly, Profile::new(120_000.0, 5.0, 4_000.0, 730.0)),
        "NEWORDER" => (Frequency::Monthly, Profile::new(60_000.0, 2.5, 2_500.0, 730.0)),
        "NFCI" => (Frequency::Weekly, Profile::new(-0.4, 0.0, 0.3, 1_825.0)),
        _ => return None,
    };
    Some(entry)
}
