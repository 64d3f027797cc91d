use complaints_core_api::error::{CoreError, CoreResult};
use rand::Rng;

use crate::repository::complaint_repository::ComplaintRepository;

const REFERENCE_PREFIX: &str = "CMP";
const SUFFIX_LEN: usize = 6;
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const MAX_ATTEMPTS: usize = 5;

/// Mints human-readable ticket codes of the form `CMP-XXXXXX`.
///
/// Candidates are sampled uniformly and checked against the store; the
/// insert itself re-checks under the unique index, so a candidate that
/// races past this pre-check still cannot be stored twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceIdGenerator;

impl ReferenceIdGenerator {
    pub fn new() -> Self {
        Self
    }

    fn candidate(&self) -> String {
        let mut rng = rand::thread_rng();
        let mut code = String::with_capacity(REFERENCE_PREFIX.len() + 1 + SUFFIX_LEN);
        code.push_str(REFERENCE_PREFIX);
        code.push('-');
        for _ in 0..SUFFIX_LEN {
            let idx = rng.gen_range(0..SUFFIX_ALPHABET.len());
            code.push(SUFFIX_ALPHABET[idx] as char);
        }
        code
    }

    /// Produce a code not currently present in the store, giving up after a
    /// bounded number of attempts.
    pub async fn mint(
        &self,
        complaints: &dyn ComplaintRepository,
    ) -> CoreResult<String> {
        for _ in 0..MAX_ATTEMPTS {
            let candidate = self.candidate();
            let taken = complaints
                .exists_by_reference_id(&candidate)
                .await
                .map_err(super::db_err)?;
            if !taken {
                return Ok(candidate);
            }
            tracing::debug!(reference_id = %candidate, "reference id collision, retrying");
        }
        Err(CoreError::Generation(format!(
            "no unique reference id after {MAX_ATTEMPTS} attempts"
        )))
    }
}
