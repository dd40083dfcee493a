use async_trait::async_trait;
use tracing::warn;

/// Stand-in design text returned for every record id until a real store exists.
pub const CANNED_CABLE_DESIGN: &str = "
IEC 60502-1 cable,
0.6/1 kV,
Cu Class 2,
10 sqmm,
PVC insulation thickness 1.0 mm
";

/// Looks up the stored free-text description of a cable design.
#[async_trait]
pub trait DesignRecords: Send + Sync {
    async fn find_design_text(&self, record_id: &str) -> Option<String>;
}

pub struct CannedDesignRecords;

#[async_trait]
impl DesignRecords for CannedDesignRecords {
    async fn find_design_text(&self, record_id: &str) -> Option<String> {
        warn!(record_id, "no design store configured, substituting canned cable design");
        Some(CANNED_CABLE_DESIGN.to_string())
    }
}
