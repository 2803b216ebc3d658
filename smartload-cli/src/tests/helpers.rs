//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// A temporary directory holding one request file.
pub(super) struct RequestFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl RequestFile {
    pub(super) fn new(request: &Value) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("request.json");
        let payload = serde_json::to_vec_pretty(request).expect("serialise request");
        write_utf8(&path, &payload);
        Self { _dir: dir, path }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// One order payload on the Los Angeles to Dallas lane.
pub(super) fn order_json(id: &str, payout_cents: i64, weight_lbs: i64, volume_cuft: i64) -> Value {
    json!({
        "id": id,
        "payout_cents": payout_cents,
        "weight_lbs": weight_lbs,
        "volume_cuft": volume_cuft,
        "origin": "Los Angeles, CA",
        "destination": "Dallas, TX",
        "pickup_date": "2025-01-10",
        "delivery_date": "2025-01-12",
        "is_hazmat": false,
    })
}

/// A request for the standard 44,000 lb / 3,000 cuft truck.
pub(super) fn request_json(orders: Vec<Value>) -> Value {
    json!({
        "truck": { "id": "T1", "max_weight_lbs": 44_000, "max_volume_cuft": 3_000 },
        "orders": orders,
    })
}

/// The two-order request whose optimum takes both orders.
pub(super) fn compatible_pair_request() -> Value {
    request_json(vec![
        order_json("O1", 250_000, 18_000, 1_200),
        order_json("O2", 180_000, 12_000, 900),
    ])
}
