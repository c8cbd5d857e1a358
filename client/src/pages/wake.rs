//! Remote wake: device list with a wake-on-LAN button per device.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::components::query_status::QueryStatus;
use crate::net::api;
use crate::net::types::wake::{WakeDevice, WakeResult};
use crate::query::hooks::{use_mutation, use_query};
use crate::query::keys;
use crate::util::table::Column;

/// Toast text for a wake attempt.
pub(crate) fn wake_message(device: &str, result: &WakeResult) -> String {
    match (&result.message, result.sent) {
        (Some(message), _) => format!("{device}: {message}"),
        (None, true) => format!("Magic packet sent to {device}"),
        (None, false) => format!("{device} did not accept the wake request"),
    }
}

#[component]
pub fn WakePage() -> impl IntoView {
    let devices = use_query(keys::wake::devices, |client| async move { api::wake::list_devices(&client).await });
    let mutation = use_mutation();

    let actions = Callback::new(move |device: WakeDevice| {
        let online = device.online == Some(true);
        view! {
            <button
                class="btn btn--small btn--primary"
                disabled=move || online || mutation.pending.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    let id = device.id.clone();
                    let name = device.name.clone();
                    mutation.run(
                        vec![keys::wake::devices()],
                        move |client| async move { api::wake::wake(&client, &id).await },
                        move |result: WakeResult| {
                            let message = wake_message(&name, &result);
                            if result.sent { mutation.notify(&message) } else { mutation.notify_error(&message) }
                        },
                    );
                }
            >
                "Wake"
            </button>
        }
        .into_any()
    });

    view! {
        <section class="page wake">
            <header class="page__header">
                <h1>"Remote Wake"</h1>
                <button class="btn" on:click=move |_| devices.refetch()>
                    "Refresh"
                </button>
            </header>
            <QueryStatus loading=devices.loading error=devices.error/>
            <DataTable
                rows=Signal::derive(move || devices.data.get().unwrap_or_default())
                columns=vec![
                    Column::new("name", "Device"),
                    Column::new("mac", "MAC"),
                    Column::new("ip", "IP"),
                    Column::new("online", "State"),
                ]
                actions=actions
                empty_text="No devices configured."
            />
        </section>
    }
}

#[cfg(test)]
#[path = "wake_test.rs"]
mod wake_test;
