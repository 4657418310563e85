//! Cross-process lock for the local signature directory.
//!
//! The lock is an exclusive `flock` on `signature.lock`, held through an open
//! handle for the lifetime of the guard. The kernel drops it when the owner
//! exits, so a crashed run never leaves a lock behind. The file itself stays
//! in place; its contents (the owner's pid) are informational only.

use std::fs::{File, OpenOptions};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::StoreError;

const LOCK_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Exclusive ownership of the signature slot. Released on drop.
pub(crate) struct SlotLockGuard {
    file: File,
    path: PathBuf,
}

impl Drop for SlotLockGuard {
    fn drop(&mut self) {
        if let Err(e) = fs2::FileExt::unlock(&self.file) {
            tracing::debug!(path = %self.path.display(), error = %e, "explicit unlock failed; closing handle");
        }
    }
}

/// Wait up to `timeout` for exclusive ownership of `lock_path`.
pub(crate) async fn acquire(lock_path: &Path, timeout: Duration) -> Result<SlotLockGuard, StoreError> {
    let started = Instant::now();

    loop {
        if let Some(guard) = try_acquire(lock_path)? {
            return Ok(guard);
        }
        if started.elapsed() >= timeout {
            return Err(StoreError::LockTimeout {
                path: lock_path.to_path_buf(),
            });
        }
        tokio::time::sleep(LOCK_RETRY_DELAY).await;
    }
}

/// One non-blocking attempt. `Ok(None)` means another handle holds the lock.
fn try_acquire(lock_path: &Path) -> Result<Option<SlotLockGuard>, StoreError> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(lock_path)?;

    match fs2::FileExt::try_lock_exclusive(&file) {
        Ok(()) => {}
        Err(err) if err.kind() == fs2::lock_contended_error().kind() => return Ok(None),
        Err(err) => return Err(err.into()),
    }

    file.set_len(0)?;
    file.rewind()?;
    writeln!(file, "{}", std::process::id())?;

    Ok(Some(SlotLockGuard {
        file,
        path: lock_path.to_path_buf(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn acquires_and_releases_lock() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("signature.lock");

        let guard = acquire(&lock_path, Duration::from_secs(1)).await.unwrap();
        let owner = std::fs::read_to_string(&lock_path).unwrap();
        assert_eq!(owner.trim(), std::process::id().to_string());
        drop(guard);

        assert!(acquire(&lock_path, Duration::ZERO).await.is_ok());
    }

    #[tokio::test]
    async fn held_lock_times_out() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("signature.lock");

        let _guard = acquire(&lock_path, Duration::from_secs(1)).await.unwrap();
        let err = acquire(&lock_path, Duration::from_millis(120))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, StoreError::LockTimeout { .. }));
    }

    #[tokio::test]
    async fn leftover_lock_file_from_dead_owner_is_reused() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = temp.path().join("signature.lock");
        std::fs::write(&lock_path, "99999999\n").unwrap();

        let guard = acquire(&lock_path, Duration::from_secs(1)).await.unwrap();
        let owner = std::fs::read_to_string(&lock_path).unwrap();
        assert_eq!(owner.trim(), std::process::id().to_string());
        drop(guard);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 3)]
    async fn racing_acquirers_never_overlap_on_leftover_lock() {
        let temp = tempfile::tempdir().unwrap();
        let lock_path = Arc::new(temp.path().join("signature.lock"));
        std::fs::write(lock_path.as_ref(), "99999999\n").unwrap();

        let inside = Arc::new(AtomicUsize::new(0));
        let overlaps = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(tokio::sync::Barrier::new(3));

        let tasks: Vec<_> = (0..3)
            .map(|_| {
                let lock_path = Arc::clone(&lock_path);
                let inside = Arc::clone(&inside);
                let overlaps = Arc::clone(&overlaps);
                let barrier = Arc::clone(&barrier);
                tokio::spawn(async move {
                    barrier.wait().await;
                    for _ in 0..20 {
                        let guard = acquire(&lock_path, Duration::from_secs(10)).await.unwrap();
                        if inside.fetch_add(1, Ordering::SeqCst) > 0 {
                            overlaps.fetch_add(1, Ordering::SeqCst);
                        }
                        tokio::time::sleep(Duration::from_millis(1)).await;
                        inside.fetch_sub(1, Ordering::SeqCst);
                        drop(guard);
                    }
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(overlaps.load(Ordering::SeqCst), 0);
    }
}
