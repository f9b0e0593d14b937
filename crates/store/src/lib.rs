//! In-memory donation log.
//!
//! All donations live in a single `Vec` behind one mutex together with the
//! next ID to hand out. Every operation holds the lock for its whole duration,
//! so readers always see a consistent snapshot and concurrent writers can never
//! be assigned the same ID. Nothing is persisted.

use campaign_core::{Donation, DonationStats, NewDonation, ValidationError};
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct Inner {
    donations: Vec<Donation>,
    next_id: u64,
}

/// Append-only donation store shared between request handlers
#[derive(Debug)]
pub struct DonationStore {
    inner: Mutex<Inner>,
}

impl Default for DonationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DonationStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                donations: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // The guarded data is only mutated after validation succeeds, so a
    // panicking holder cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate and store a donation stamped with the current time
    pub fn record(&self, donation: NewDonation) -> Result<Donation, ValidationError> {
        self.record_at(donation, Utc::now())
    }

    /// Validate and store a donation with an explicit creation time
    pub fn record_at(
        &self,
        donation: NewDonation,
        created_at: DateTime<Utc>,
    ) -> Result<Donation, ValidationError> {
        let donation = donation.validate().inspect_err(|e| {
            tracing::debug!(reason = %e, "Donation rejected");
        })?;

        let mut inner = self.lock();
        let stored = Donation {
            id: inner.next_id,
            name: donation.name,
            email: donation.email,
            amount: donation.amount,
            message: donation.message,
            created_at,
        };
        inner.next_id += 1;
        inner.donations.push(stored.clone());
        drop(inner);

        tracing::info!(id = stored.id, amount = stored.amount, "Donation recorded");
        Ok(stored)
    }

    /// Total amount raised and number of donations
    pub fn stats(&self) -> DonationStats {
        let inner = self.lock();
        DonationStats {
            // f64's `Sum` starts from -0.0, which would render as "$-0.00"
            total: inner.donations.iter().fold(0.0, |acc, d| acc + d.amount),
            count: inner.donations.len(),
        }
    }

    /// Every stored donation, oldest first
    pub fn recent(&self) -> Vec<Donation> {
        self.lock().donations.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().donations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
