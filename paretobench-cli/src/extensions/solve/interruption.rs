//! Interruption handler.

use paretobench::utils::{FlagQuota, Quota};
use std::sync::Arc;

/// Creates interruption quota: it is reached once Ctrl+C is pressed, so the in-flight generation
/// is completed and the results of the run are still written.
pub fn create_interruption_quota() -> Result<Arc<dyn Quota + Send + Sync>, String> {
    let quota = FlagQuota::default();

    ctrlc::set_handler({
        let quota = quota.clone();
        move || quota.raise()
    })
    .map_err(|err| format!("cannot set interruption handler: '{err}'"))?;

    Ok(Arc::new(quota))
}
