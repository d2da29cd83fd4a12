//! Content-fetch lifecycle shared by every section.
//!
//! One GET per mount: while it is pending the owning section renders
//! nothing, on failure it degrades to an empty render (the error is kept for
//! the one section that surfaces it). `retry` bumps an attempt counter,
//! re-running the effect; there is no automatic retry or backoff.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::api::{log_error, ApiClient};

pub struct FetchState<T: 'static> {
    pub data: ReadSignal<Option<T>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    attempt: WriteSignal<u32>,
}

impl<T: 'static> FetchState<T> {
    /// Re-issue the fetch. Used by the skills section's error affordance.
    pub fn retry(&self) {
        self.attempt.try_update(|n| *n += 1);
    }
}

// Signals are plain arena handles, so the state is freely copyable whatever
// the payload type is.
impl<T: 'static> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchState<T> {}

pub fn use_fetch<T>(path: &'static str) -> FetchState<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let api = expect_context::<ApiClient>();
    let (data, set_data) = signal(None::<T>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (attempt, set_attempt) = signal(0u32);

    Effect::new(move || {
        attempt.track();
        let api = api.clone();
        set_loading.try_set(true);
        spawn_local(async move {
            // The request is not cancellable; the component may be gone by
            // the time it lands. try_set makes the late completion a no-op.
            match api.get_json::<T>(path).await {
                Ok(payload) => {
                    set_data.try_set(Some(payload));
                    set_error.try_set(None);
                }
                Err(err) => {
                    log_error(&format!("error fetching {path}"), &err);
                    set_data.try_set(None);
                    set_error.try_set(Some(err.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    });

    FetchState {
        data,
        loading,
        error,
        attempt: set_attempt,
    }
}
