use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{SnapshotError, SnapshotResult};
use crate::kind::{SnapshotKind, TAG_LEN};

/// Upper bound on a decoded view, in bytes.
const MAX_VIEW_SIZE: u64 = 64 * 1024 * 1024;

/// A root that can be written to and read from a snapshot.
///
/// `project` selects what is persisted; `restore` rebuilds the root from
/// that selection, filling everything else with zero values.
pub trait Snapshot: Sized {
    /// The persistable view of this root.
    type View: Serialize + DeserializeOwned;

    /// The tag written at the start of the snapshot.
    const KIND: SnapshotKind;

    /// Project the root onto its persistable view.
    fn project(&self) -> Self::View;

    /// Rebuild a root from a decoded view.
    ///
    /// Fails only if the view is internally inconsistent.
    fn restore(view: Self::View) -> SnapshotResult<Self>;
}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_VIEW_SIZE)
}

/// Encode a root into snapshot bytes.
pub fn encode<T: Snapshot>(root: &T) -> SnapshotResult<Vec<u8>> {
    let body = options()
        .serialize(&root.project())
        .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
    let mut bytes = Vec::with_capacity(TAG_LEN + body.len());
    bytes.extend_from_slice(&T::KIND.tag());
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Decode snapshot bytes into a root.
///
/// Fails on a short buffer, an unknown or foreign tag, a body that does not
/// decode to `T::View`, or trailing bytes after the body.
pub fn decode<T: Snapshot>(bytes: &[u8]) -> SnapshotResult<T> {
    if bytes.len() < TAG_LEN {
        return Err(SnapshotError::Format(format!(
            "snapshot too short: {} bytes",
            bytes.len()
        )));
    }
    let (tag, body) = bytes.split_at(TAG_LEN);
    let actual = SnapshotKind::from_tag(tag).ok_or_else(|| {
        SnapshotError::Format(format!("unknown snapshot tag {:?}", String::from_utf8_lossy(tag)))
    })?;
    if actual != T::KIND {
        return Err(SnapshotError::KindMismatch {
            expected: T::KIND,
            actual,
        });
    }

    let view: T::View = options()
        .deserialize(body)
        .map_err(|e| SnapshotError::Format(e.to_string()))?;
    T::restore(view)
}

/// Write a snapshot of `root` to `path`, replacing any existing file.
pub fn encode_snapshot<T: Snapshot>(root: &T, path: &Path) -> SnapshotResult<()> {
    let bytes = encode(root)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    let kind = T::KIND;
    info!(%kind, path = %path.display(), bytes = bytes.len(), "snapshot written");
    Ok(())
}

/// Read a snapshot from `path`.
///
/// On failure nothing is returned but the error; the caller keeps whatever
/// root it already had.
pub fn decode_snapshot<T: Snapshot>(path: &Path) -> SnapshotResult<T> {
    let kind = T::KIND;
    let bytes = std::fs::read(path)?;
    debug!(%kind, path = %path.display(), bytes = bytes.len(), "snapshot read");
    decode(&bytes).map_err(|e| {
        warn!(%kind, path = %path.display(), "snapshot rejected: {e}");
        e
    })
}
