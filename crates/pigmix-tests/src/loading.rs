//! Integration tests for LUT loading across both distribution forms.

use std::path::PathBuf;
use std::sync::Arc;

use pigmix_app::commands::pack_lut;
use pigmix_app::AppConfig;
use pigmix_color::lut::LUT_GRID;
use pigmix_color::{
    pack_raw_bytes, LoadError, Lut, LutFormat, LutSource, SharedLut, LUT_DATA_LEN, LUT_PADDED_LEN,
};

use crate::fixtures::{synthetic_lut, synthetic_payload};

// ── Helpers ────────────────────────────────────────────────────

fn write(dir: &tempfile::TempDir, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ── Both forms agree ───────────────────────────────────────────

#[test]
fn compressed_and_raw_files_load_identically() {
    let dir = tempfile::tempdir().unwrap();
    let payload = synthetic_payload();
    let raw_path = write(&dir, "lut.dat", &payload);
    let b64_path = write(&dir, "lut.b64", pack_raw_bytes(&payload).unwrap());

    let raw = Lut::load(&LutSource {
        path: raw_path,
        format: LutFormat::Raw,
    })
    .unwrap();
    let compressed = Lut::load(&LutSource {
        path: b64_path,
        format: LutFormat::Compressed,
    })
    .unwrap();

    assert_eq!(raw, compressed);
    assert_eq!(raw.len(), LUT_PADDED_LEN);
}

#[test]
fn pre_padded_raw_file_matches_compressed() {
    let dir = tempfile::tempdir().unwrap();
    let mut padded = synthetic_payload();
    padded.resize(LUT_PADDED_LEN, 0);
    let raw = Lut::load_raw_file(write(&dir, "padded.dat", &padded)).unwrap();
    let compressed = Lut::from_compressed_base64(&pack_raw_bytes(&synthetic_payload()).unwrap())
        .unwrap();
    assert_eq!(raw, compressed);
}

#[test]
fn cli_packer_output_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = write(&dir, "lut.dat", synthetic_payload());
    let packed = pack_lut(&raw_path).unwrap();
    let lut = Lut::from_compressed_base64(&packed).unwrap();
    assert_eq!(lut, synthetic_lut());
}

#[test]
fn config_file_selects_lut() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = write(&dir, "lut.dat", synthetic_payload());
    let config_path = write(
        &dir,
        "pigmix.json",
        serde_json::json!({ "lut": { "path": raw_path, "format": "raw" } }).to_string(),
    );
    let lut = AppConfig::load(&config_path).unwrap().open_lut().unwrap();
    assert_eq!(lut, synthetic_lut());
}

// ── Failures ───────────────────────────────────────────────────

#[test]
fn missing_file_reports_path() {
    let err = Lut::load_raw_file("/nonexistent/pigmix.dat").unwrap_err();
    match err {
        LoadError::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/pigmix.dat")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_base64_leaves_shared_table_alone() {
    let shared = SharedLut::new(synthetic_lut());
    let before = shared.snapshot();

    let err = shared.reload_compressed("this is %% not base64").unwrap_err();
    assert!(matches!(err, LoadError::Base64(_)));
    assert!(Arc::ptr_eq(&before, &shared.snapshot()));
    assert_eq!(*shared.snapshot(), synthetic_lut());
}

#[test]
fn truncated_payload_leaves_shared_table_alone() {
    let shared = SharedLut::new(synthetic_lut());
    let before = shared.snapshot();
    let short = pack_raw_bytes(&synthetic_payload()[..LUT_DATA_LEN - 1]).unwrap();
    let err = shared.reload_compressed(&short).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Size {
            expected: LUT_DATA_LEN,
            ..
        }
    ));
    assert!(Arc::ptr_eq(&before, &shared.snapshot()));
}

// ── Addressing ─────────────────────────────────────────────────

#[test]
fn sampling_every_grid_node_stays_in_bounds() {
    let lut = synthetic_lut();
    let n = (LUT_GRID - 1) as f64;
    for iz in 0..LUT_GRID {
        for iy in 0..LUT_GRID {
            for ix in 0..LUT_GRID {
                let c = lut.sample([ix as f64 / n, iy as f64 / n, iz as f64 / n]);
                assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
            }
        }
    }
}

#[test]
fn sampling_the_white_corner_reads_padding_with_zero_weight() {
    let lut = synthetic_lut();
    let white = lut.sample([1.0, 1.0, 1.0]);
    let below = lut.sample([1.0 - 1e-12, 1.0 - 1e-12, 1.0 - 1e-12]);
    for c in 0..3 {
        assert!((white[c] - below[c]).abs() < 1e-6);
    }
}
