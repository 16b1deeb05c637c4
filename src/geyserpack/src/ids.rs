//! UUID generation for pack manifests

use uuid::Uuid;

/// Supplies the header and module UUIDs written into `manifest.json`
pub trait IdSource {
    fn next_uuid(&mut self) -> Uuid;
}

/// Fresh random v4 UUIDs; every build gets a new pack identity
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic UUIDs counting up from a seed, for reproducible output
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new(seed: u128) -> Self {
        SequentialIds { next: seed }
    }
}

impl IdSource for SequentialIds {
    fn next_uuid(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
