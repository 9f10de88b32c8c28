// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitCoach Contributors
// ABOUTME: Command implementations for fitcoach-cli
// ABOUTME: Session wiring plus coaching and progress commands

pub mod coaching;
pub mod progress;

use fitcoach::models::UserId;
use fitcoach::services::CoachingService;
use fitcoach::storage::{MemoryStore, Snapshot};
use std::path::PathBuf;
use std::sync::Arc;

/// A loaded snapshot: the file it came from and a service over its records
pub struct Session {
    pub user_id: UserId,
    pub service: CoachingService<MemoryStore>,
    pub snapshot: Snapshot,
    pub source: PathBuf,
}

impl Session {
    pub fn new(snapshot: Snapshot, source: PathBuf) -> Self {
        let store = MemoryStore::from_snapshot(&snapshot);
        Self {
            user_id: snapshot.user_id,
            service: CoachingService::new(Arc::new(store)),
            snapshot,
            source,
        }
    }
}
